// src/config/consts.rs

// Input data
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DATA_DIR_ENV: &str = "MATCHBOARD_DATA_DIR";

// Missing-cell placeholder written by the loader
pub const MISSING: &str = "-";

// Row-number column convention ("Lp." → "lp")
pub const ROW_NUMBER_COLUMN: &str = "lp";

// Local state + logs
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Window
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 700.0;
pub const SIDEBAR_W: f32 = 190.0;

// Table
pub const INDEX_HEADER: &str = "#";
pub const ROW_HEIGHT: f32 = 20.0;
pub const HEADER_HEIGHT: f32 = 24.0;
