// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;

pub mod chart;
pub mod net;
pub mod report;
pub mod runner;
pub mod scrape;
pub mod store;
