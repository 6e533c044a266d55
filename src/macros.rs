// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Anything that converts into a String (literals, consts, &String, vars)
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! cells {
    // Text-cell row shorthand for tests and derived tables:
    // cells!["Legia", "2-1"] → vec![Cell::Text(..), Cell::Text(..)]
    ($($cell:expr),* $(,)?) => {
        vec![$($crate::data::Cell::from($cell)),*]
    };
}
