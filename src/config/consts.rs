// src/config/consts.rs

// Source document
pub const DOC_URL: &str =
    "https://www.revisor.mn.gov/laws/?year=2014&type=0&doctype=Chapter&id=294";
// Delete this file to force a fresh download.
pub const CACHE_FILE: &str = "MNBudget-2014.html";

// Structural landmarks in the chapter page
pub const SUMMARY_BLOCK_CLASS: &str = "bill_section";
pub const SUMMARY_BLOCK_ID: &str = "laws.1.1.0";
// First table in the block is header formatting; second holds the data.
pub const SUMMARY_TABLE_INDEX: usize = 1;
pub const TOTAL_SENTINEL: &str = "TOTAL";

// Output artifacts
pub const EXPENSE_CHART_FILE: &str = "MN-2014-Expense.png";
pub const FUNDING_CHART_FILE: &str = "MN-2014-Funding.png";
pub const EXPENSE_CHART_TITLE: &str = "2014 MN Capital Budget Spending";
pub const FUNDING_CHART_TITLE: &str = "2014 MN Capital Budget Funding";

// Net config
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = "mn_budget/0.1";
