// src/report.rs
//
// Aggregate classified line items for display.

use crate::scrape::summary::LineItem;

/// Fold line items into (label, amount) pairs and sort ascending by
/// amount. A label that repeats within a group has its amounts summed.
pub fn aggregate(lines: &[LineItem]) -> Vec<(String, f64)> {
    let mut agg: Vec<(String, f64)> = Vec::new();
    for item in lines {
        match agg.iter_mut().find(|(label, _)| *label == item.label) {
            Some((_, amount)) => *amount += item.amount,
            None => agg.push((item.label.clone(), item.amount)),
        }
    }
    agg.sort_by(|a, b| a.1.total_cmp(&b.1));
    agg
}

pub fn total(items: &[(String, f64)]) -> f64 {
    items.iter().map(|(_, amount)| amount).sum()
}
