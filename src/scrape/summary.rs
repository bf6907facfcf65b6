// src/scrape/summary.rs
//
// Budget summary extraction: locate the content block, take the data
// table, classify each row as spending or funding around the TOTAL row.

use std::error::Error;

use crate::config::options::Landmark;
use crate::core::html::{find_div_block_ci, inner_after_open_tag, next_tag_block_ci, strip_tags};
use crate::core::sanitize::normalize_entities;

/// One (label, signed amount) pair from a qualifying table row.
#[derive(Clone, Debug, PartialEq)]
pub struct LineItem {
    pub label: String,
    pub amount: f64,
}

/// Classified line items in document order.
#[derive(Debug)]
pub struct BudgetSummary {
    pub expenses: Vec<LineItem>,
    pub funding: Vec<LineItem>,
}

/// Which side of the sentinel row the scan is on.
/// One irreversible transition, Spending → Funding.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Spending,
    Funding,
}

/// Parse the whole document. Pure over its inputs; no network, no files.
pub fn parse_doc(doc: &str, landmark: &Landmark) -> Result<BudgetSummary, Box<dyn Error>> {
    let block = find_div_block_ci(doc, &landmark.block_class, &landmark.block_id).ok_or_else(
        || {
            format!(
                "Content block not found: <div class=\"{}\" id=\"{}\"> (document format changed?)",
                landmark.block_class, landmark.block_id
            )
        },
    )?;

    let tables = collect_blocks(block, "<table", "</table>");
    let Some(data_table) = tables.get(landmark.table_index) else {
        return Err(format!(
            "Expected at least {} tables in content block, found {}",
            landmark.table_index + 1,
            tables.len()
        )
        .into());
    };

    let rows = collect_blocks(data_table, "<tr", "</tr>");
    classify_rows(&rows, &landmark.sentinel)
}

/// Single left-to-right pass over the data rows, carrying the section.
fn classify_rows(rows: &[&str], sentinel: &str) -> Result<BudgetSummary, Box<dyn Error>> {
    let mut section = Section::Spending;
    let mut expenses = Vec::new();
    let mut funding = Vec::new();

    for tr_block in rows {
        let cells = collect_blocks(tr_block, "<td", "</td>");
        // Anything but three cells is spacing/formatting; skip it.
        if cells.len() != 3 {
            continue;
        }
        let label = cell_text(cells[0]);
        let amount = convert_num(&cell_text(cells[2]))?;

        // The total itself is derivable; the row only marks where the
        // funding lines start.
        if label == sentinel {
            section = Section::Funding;
            continue;
        }
        let item = LineItem { label, amount };
        match section {
            Section::Spending => expenses.push(item),
            Section::Funding => funding.push(item),
        }
    }

    Ok(BudgetSummary { expenses, funding })
}

/// Gather all `open..close` blocks of `s` in document order.
fn collect_blocks<'a>(s: &'a str, open: &str, close: &str) -> Vec<&'a str> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((b_s, b_e)) = next_tag_block_ci(s, open, close, pos) {
        out.push(&s[b_s..b_e]);
        pos = b_e;
    }
    out
}

fn cell_text(td_block: &str) -> String {
    strip_tags(normalize_entities(&inner_after_open_tag(td_block)))
}

/// Convert a money cell to a float:
/// - trim surrounding whitespace
/// - drop thousands-separator commas
/// - `(1,234)` means negative
fn convert_num(raw: &str) -> Result<f64, Box<dyn Error>> {
    let cleaned = raw.trim().replace(',', "").replace('(', "-").replace(')', "");
    cleaned
        .parse::<f64>()
        .map_err(|_| format!("Bad numeric cell: {raw:?}").into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn landmark() -> Landmark {
        Landmark::default()
    }

    fn wrap(tables: &str) -> String {
        format!(r#"<html><body><div class="bill_section" id="laws.1.1.0">{tables}</div></body></html>"#)
    }

    #[test]
    fn convert_num_cleanup_rules() {
        assert_eq!(convert_num("1234").unwrap(), 1234.0);
        assert_eq!(convert_num("1,234").unwrap(), 1234.0);
        assert_eq!(convert_num("(1,234)").unwrap(), -1234.0);
        assert_eq!(convert_num(" 1,234 ").unwrap(), 1234.0);
        assert!(convert_num("n/a").is_err());
    }

    #[test]
    fn classifies_around_sentinel() {
        let doc = wrap(
            "<table><tr><td>header</td></tr></table>\
             <table>\
               <tr><td>Roads</td><td></td><td>1,000</td></tr>\
               <tr><td>Bridges</td><td></td><td>(500)</td></tr>\
               <tr><td>TOTAL</td><td></td><td>500</td></tr>\
               <tr><td>Bonds</td><td></td><td>500</td></tr>\
             </table>",
        );
        let out = parse_doc(&doc, &landmark()).unwrap();
        assert_eq!(
            out.expenses,
            vec![
                LineItem { label: s!("Roads"), amount: 1000.0 },
                LineItem { label: s!("Bridges"), amount: -500.0 },
            ]
        );
        assert_eq!(out.funding, vec![LineItem { label: s!("Bonds"), amount: 500.0 }]);
    }

    #[test]
    fn sentinel_row_is_stored_nowhere() {
        let doc = wrap(
            "<table><tr><td>x</td></tr></table>\
             <table>\
               <tr><td>A</td><td></td><td>1</td></tr>\
               <tr><td>TOTAL</td><td></td><td>1</td></tr>\
             </table>",
        );
        let out = parse_doc(&doc, &landmark()).unwrap();
        assert!(out.expenses.iter().all(|li| li.label != "TOTAL"));
        assert!(out.funding.is_empty());
    }

    #[test]
    fn non_three_cell_rows_are_skipped() {
        let doc = wrap(
            "<table><tr><td>x</td></tr></table>\
             <table>\
               <tr><td colspan=\"3\">SUMMARY</td></tr>\
               <tr><td>spacer</td><td></td></tr>\
               <tr><td>A</td><td>$</td><td>2</td></tr>\
               <tr><td>a</td><td>b</td><td>c</td><td>3</td></tr>\
             </table>",
        );
        let out = parse_doc(&doc, &landmark()).unwrap();
        assert_eq!(out.expenses, vec![LineItem { label: s!("A"), amount: 2.0 }]);
    }

    #[test]
    fn cell_markup_is_flattened() {
        let doc = wrap(
            "<table><tr><td>x</td></tr></table>\
             <table>\
               <tr><td> <b>University of&nbsp;Minnesota</b> </td><td>$</td><td> 1,000 </td></tr>\
             </table>",
        );
        let out = parse_doc(&doc, &landmark()).unwrap();
        assert_eq!(out.expenses[0].label, "University of Minnesota");
        assert_eq!(out.expenses[0].amount, 1000.0);
    }

    #[test]
    fn missing_block_is_structural_error() {
        let doc = r#"<html><div class="other" id="laws.1.1.0"><table></table></div></html>"#;
        let err = parse_doc(doc, &landmark()).unwrap_err();
        assert!(err.to_string().contains("Content block not found"));
    }

    #[test]
    fn too_few_tables_is_structural_error() {
        let doc = wrap("<table><tr><td>only one</td></tr></table>");
        let err = parse_doc(&doc, &landmark()).unwrap_err();
        assert!(err.to_string().contains("Expected at least 2 tables"));
    }

    #[test]
    fn bad_numeric_cell_is_fatal() {
        let doc = wrap(
            "<table><tr><td>x</td></tr></table>\
             <table><tr><td>A</td><td></td><td>one million</td></tr></table>",
        );
        assert!(parse_doc(&doc, &landmark()).is_err());
    }
}
