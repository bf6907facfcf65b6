// src/runner.rs
//
// End-to-end run: acquire document, extract line items, print totals,
// write both charts.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::chart;
use crate::config::consts::{
    CACHE_FILE, DOC_URL, EXPENSE_CHART_FILE, EXPENSE_CHART_TITLE, FUNDING_CHART_FILE,
    FUNDING_CHART_TITLE,
};
use crate::config::options::{ChartStyle, Landmark};
use crate::report;
use crate::scrape::summary;
use crate::store;

pub struct RunSummary {
    pub expense_total: f64,
    pub funding_total: f64,
    pub charts: [PathBuf; 2],
}

pub fn run() -> Result<RunSummary, Box<dyn Error>> {
    let doc = store::load_or_fetch(Path::new(CACHE_FILE), DOC_URL)?;

    let t = Instant::now();
    let parsed = summary::parse_doc(&doc, &Landmark::default())?;
    logd!(
        "Summary: parsed document in {:?} ({} expense, {} funding lines)",
        t.elapsed(),
        parsed.expenses.len(),
        parsed.funding.len()
    );

    let expenses = report::aggregate(&parsed.expenses);
    let funding = report::aggregate(&parsed.funding);

    let expense_total = report::total(&expenses);
    let funding_total = report::total(&funding);
    println!("{expense_total}");
    println!("{funding_total}");

    let expense_path = Path::new(EXPENSE_CHART_FILE);
    chart::render_barh(expense_path, EXPENSE_CHART_TITLE, &expenses, &ChartStyle::tall())?;
    let funding_path = Path::new(FUNDING_CHART_FILE);
    chart::render_barh(funding_path, FUNDING_CHART_TITLE, &funding, &ChartStyle::default())?;
    logf!("Wrote {} and {}", expense_path.display(), funding_path.display());

    Ok(RunSummary {
        expense_total,
        funding_total,
        charts: [expense_path.to_path_buf(), funding_path.to_path_buf()],
    })
}
