// File: crates/chart-embed/src/chart.rs
// Summary: Top-level Chart entity, body serialization, and snippet assembly.

use serde::Serialize;

use crate::data::Data;
use crate::error::Result;
use crate::options::Options;
use crate::variant::{expand_raw_tokens, reset_raw_token_count};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartType {
    Bar,
    Line,
    Pie,
    Doughnut,
    Radar,
    PolarArea,
    Bubble,
    Scatter,
}

#[derive(Clone, Debug, Serialize)]
pub struct Chart {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub data: Data,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Options>,
}

impl Chart {
    pub fn new(chart_type: ChartType) -> Self {
        Self {
            chart_type,
            data: Data::default(),
            options: None,
        }
    }

    /// Serialize this chart to the compact JSON-shaped configuration body.
    ///
    /// Key order follows field declaration order, unset members are omitted,
    /// and raw code fields land as verbatim text. All-or-nothing: any
    /// failure returns an error with no partial output.
    pub fn serialize_body(&self) -> Result<String> {
        reset_raw_token_count();
        let body = serde_json::to_string(self)?;
        expand_raw_tokens(&body)
    }

    /// Build the two-statement embed snippet for a page element whose id is
    /// `binding`: an element lookup, then the `new Chart(...)` constructor
    /// call around the serialized body. CRLF line terminator and token
    /// layout are byte-for-byte stable; page templates depend on them.
    pub fn create_chart_code(&self, binding: &str) -> Result<String> {
        let body = self.serialize_body()?;
        Ok(format!(
            "var {binding}Element = document.getElementById(\"{binding}\");\r\n\
             var {binding} = new Chart({binding}Element, {body}\r\n);"
        ))
    }
}
