// File: crates/chart-embed/src/tooltip.rs
// Summary: Tooltip configuration: interaction, styling, fonts, and the
// raw-JS callback set.

use serde::Serialize;

use crate::color::ChartColor;
use crate::variant::{BoolIntString, JsCode, Padding};

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolTip {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Replacement tooltip renderer, emitted as literal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external: Option<JsCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intersect: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_sort: Option<JsCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<JsCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ChartColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_color: Option<ChartColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_spacing: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_margin_bottom: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_color: Option<ChartColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_spacing: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_color: Option<ChartColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_spacing: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_margin_top: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caret_padding: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caret_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_key_background: Option<ChartColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_colors: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_point_style: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<ChartColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_direction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callbacks: Option<Callback>,
}

/// Per-section tooltip text callbacks. Every member is an inline function
/// body carried verbatim into the snippet.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Callback {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_title: Option<JsCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<JsCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_title: Option<JsCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_body: Option<JsCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_label: Option<JsCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<JsCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_color: Option<JsCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_text_color: Option<JsCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_point_style: Option<JsCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_label: Option<JsCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_body: Option<JsCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_footer: Option<JsCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<JsCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_footer: Option<JsCode>,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    /// A bare multiplier or a string such as `"1.2em"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<BoolIntString>,
}
