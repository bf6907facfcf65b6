// src/scrape/mod.rs

pub mod summary;

pub use summary::{parse_doc, BudgetSummary, LineItem};
