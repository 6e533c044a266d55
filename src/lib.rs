// src/lib.rs

#[macro_use]
mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod gui;

pub mod cache;
pub mod data;
pub mod flags;
pub mod loader;
pub mod score;
pub mod stats;
pub mod table;
