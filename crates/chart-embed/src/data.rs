// File: crates/chart-embed/src/data.rs
// Summary: Data block: category labels plus ordered dataset series.

use serde::Serialize;

use crate::color::ChartColor;
use crate::variant::{BoolIntString, Indexable};

/// Labels and datasets for one chart. Order of both sequences is
/// semantically significant (value-to-label alignment, draw order) and is
/// preserved exactly on output; datasets serialize before labels.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Data {
    pub datasets: Vec<Dataset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

/// One visual series. Untagged: each variant carries its own `type` member
/// and serializes in its own declared key order.
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum Dataset {
    Bar(BarDataset),
    Line(LineDataset),
    Pie(PieDataset),
}

impl From<BarDataset> for Dataset {
    fn from(ds: BarDataset) -> Self {
        Self::Bar(ds)
    }
}

impl From<LineDataset> for Dataset {
    fn from(ds: LineDataset) -> Self {
        Self::Line(ds)
    }
}

impl From<PieDataset> for Dataset {
    fn from(ds: PieDataset) -> Self {
        Self::Pie(ds)
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarDataset {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_bar_length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_thickness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_bar_thickness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Indexable<ChartColor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Indexable<ChartColor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<Indexable<i64>>,
    /// `None` entries are genuine gaps and serialize as the JSON `null`
    /// literal, in position.
    pub data: Vec<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl BarDataset {
    pub fn new() -> Self {
        Self {
            kind: "bar",
            min_bar_length: None,
            bar_percentage: None,
            bar_thickness: None,
            max_bar_thickness: None,
            background_color: None,
            border_color: None,
            border_width: None,
            data: Vec::new(),
            label: None,
        }
    }
}

impl Default for BarDataset {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDataset {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Indexable<ChartColor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Indexable<ChartColor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<Indexable<i64>>,
    /// `false`, or a fill mode string such as `"origin"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<BoolIntString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<Indexable<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_line: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    pub data: Vec<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl LineDataset {
    pub fn new() -> Self {
        Self {
            kind: "line",
            background_color: None,
            border_color: None,
            border_dash: None,
            border_width: None,
            fill: None,
            point_radius: None,
            show_line: None,
            tension: None,
            data: Vec::new(),
            label: None,
        }
    }
}

impl Default for LineDataset {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieDataset {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Indexable<ChartColor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Indexable<ChartColor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<Indexable<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_offset: Option<i64>,
    pub data: Vec<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl PieDataset {
    pub fn new() -> Self {
        Self {
            kind: "pie",
            background_color: None,
            border_color: None,
            border_width: None,
            hover_offset: None,
            data: Vec::new(),
            label: None,
        }
    }
}

impl Default for PieDataset {
    fn default() -> Self {
        Self::new()
    }
}
