// src/config/options.rs

use plotters::style::RGBColor;

use super::consts::{
    SUMMARY_BLOCK_CLASS, SUMMARY_BLOCK_ID, SUMMARY_TABLE_INDEX, TOTAL_SENTINEL,
};

/// Structural landmarks for locating the budget summary inside the document.
/// Defaults match the current layout of the 2014 chapter page; tests can
/// point these at fixture documents instead.
#[derive(Clone, Debug)]
pub struct Landmark {
    pub block_class: String,
    pub block_id: String,
    pub table_index: usize,
    /// Row label that separates spending lines from funding lines.
    pub sentinel: String,
}

impl Default for Landmark {
    fn default() -> Self {
        Self {
            block_class: s!(SUMMARY_BLOCK_CLASS),
            block_id: s!(SUMMARY_BLOCK_ID),
            table_index: SUMMARY_TABLE_INDEX,
            sentinel: s!(TOTAL_SENTINEL),
        }
    }
}

/// Rendering options for one bar chart. Passed explicitly to the renderer;
/// there is no process-wide style state.
#[derive(Clone, Debug)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    pub bar_color: RGBColor,
    pub font_family: &'static str,
    pub font_size: i32,
    pub margin: u32,
    /// Width reserved for the line-item labels on the left.
    pub label_area: u32,
    /// Height reserved for the amount axis at the bottom.
    pub value_area: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 700,
            height: 480,
            bar_color: RGBColor(0x34, 0x65, 0xa4),
            font_family: "sans-serif",
            font_size: 14,
            margin: 10,
            label_area: 260,
            value_area: 40,
        }
    }
}

impl ChartStyle {
    /// Tall variant for the long spending list.
    pub fn tall() -> Self {
        Self {
            height: 1300,
            ..Self::default()
        }
    }
}
