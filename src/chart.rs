// src/chart.rs
//
// Horizontal bar rendering. Items are drawn bottom-up in the order given,
// so an ascending-sorted input puts the largest bar on top.

use std::{error::Error, path::Path};

use plotters::coord::ranged1d::{IntoSegmentedCoord, SegmentValue};
use plotters::prelude::*;

use crate::config::options::ChartStyle;

pub fn render_barh(
    path: &Path,
    title: &str,
    items: &[(String, f64)],
    style: &ChartStyle,
) -> Result<(), Box<dyn Error>> {
    if items.is_empty() {
        return Err(format!("No line items to chart for {}", path.display()).into());
    }

    let (lo, hi) = value_bounds(items);
    let n = items.len() as i32;

    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, (style.font_family, style.font_size + 8))
        .margin(style.margin)
        .x_label_area_size(style.value_area)
        .y_label_area_size(style.label_area)
        .build_cartesian_2d(lo..hi, (0..n).into_segmented())?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(items.len())
        .y_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => items
                .get(*i as usize)
                .map(|(label, _)| label.clone())
                .unwrap_or_default(),
            SegmentValue::Last => s!(),
        })
        .x_label_formatter(&|v| format!("{v:.0}"))
        .label_style((style.font_family, style.font_size))
        .draw()?;

    chart.draw_series(items.iter().enumerate().map(|(i, (_, amount))| {
        let i = i as i32;
        let mut bar = Rectangle::new(
            [
                (0.0, SegmentValue::Exact(i)),
                (*amount, SegmentValue::Exact(i + 1)),
            ],
            style.bar_color.filled(),
        );
        bar.set_margin(3, 3, 0, 0);
        bar
    }))?;

    root.present()?;
    Ok(())
}

/// Value-axis bounds: always include zero, pad the far ends slightly.
fn value_bounds(items: &[(String, f64)]) -> (f64, f64) {
    let mut lo = 0.0f64;
    let mut hi = 0.0f64;
    for (_, v) in items {
        lo = lo.min(*v);
        hi = hi.max(*v);
    }
    if lo == hi {
        // All zeros; give the axis some width.
        hi = 1.0;
    }
    let pad = (hi - lo) * 0.05;
    let lo = if lo < 0.0 { lo - pad } else { lo };
    (lo, hi + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_always_include_zero() {
        let items = vec![(s!("a"), 10.0), (s!("b"), 20.0)];
        let (lo, hi) = value_bounds(&items);
        assert_eq!(lo, 0.0);
        assert!(hi > 20.0);
    }

    #[test]
    fn bounds_pad_negative_end() {
        let items = vec![(s!("a"), -10.0), (s!("b"), 20.0)];
        let (lo, hi) = value_bounds(&items);
        assert!(lo < -10.0);
        assert!(hi > 20.0);
    }

    #[test]
    fn degenerate_bounds_widen() {
        let items = vec![(s!("a"), 0.0)];
        let (lo, hi) = value_bounds(&items);
        assert!(hi > lo);
    }
}
