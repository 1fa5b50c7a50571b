// File: crates/chart-embed/tests/bar_chart.rs
// Purpose: Golden end-to-end snippet generation for the reference bar chart.
// The expected string is the byte-for-byte wire format page templates
// depend on: key order, number formatting, quoting, CRLF terminator.

use chart_embed::{
    BarDataset, Chart, ChartColor, ChartType, Grid, Layout, Options, Padding, PaddingObject,
    Scale,
};
use indexmap::IndexMap;

const KNOWN_GOOD_CHART: &str = "var barChartElement = document.getElementById(\"barChart\");\r\nvar barChart = new Chart(barChartElement, {\"type\":\"bar\",\"data\":{\"datasets\":[{\"type\":\"bar\",\"minBarLength\":2.0,\"barPercentage\":0.5,\"barThickness\":6.0,\"maxBarThickness\":8.0,\"backgroundColor\":[\"rgba(255, 99, 132, 0.2)\",\"rgba(54, 162, 235, 0.2)\",\"rgba(255, 206, 86, 0.2)\",\"rgba(75, 192, 192, 0.2)\",\"rgba(153, 102, 255, 0.2)\",\"rgba(255, 159, 64, 0.2)\"],\"borderColor\":[\"rgba(255, 99, 132, 1)\",\"rgba(54, 162, 235, 1)\",\"rgba(255, 206, 86, 1)\",\"rgba(75, 192, 192, 1)\",\"rgba(153, 102, 255, 1)\",\"rgba(255, 159, 64, 1)\"],\"borderWidth\":1,\"data\":[12.0,19.0,3.0,null,2.0,3.0],\"label\":\"# of Votes\"}],\"labels\":[\"Red\",\"Blue\",\"Yellow\",\"Green\",\"Purple\",\"Orange\"]},\"options\":{\"layout\":{\"padding\":{\"left\":10,\"right\":12}},\"scales\":{\"x\":{\"grid\":{\"offset\":true}},\"y\":{\"beginAtZero\":true}}}}\r\n);";

fn build_bar_chart() -> Chart {
    let mut chart = Chart::new(ChartType::Bar);
    chart.data.labels = Some(
        ["Red", "Blue", "Yellow", "Green", "Purple", "Orange"]
            .into_iter()
            .map(String::from)
            .collect(),
    );

    let mut dataset = BarDataset::new();
    dataset.label = Some("# of Votes".to_string());
    dataset.data = vec![Some(12.0), Some(19.0), Some(3.0), None, Some(2.0), Some(3.0)];
    dataset.background_color = Some(
        vec![
            ChartColor::from_rgba(255, 99, 132, 0.2),
            ChartColor::from_rgba(54, 162, 235, 0.2),
            ChartColor::from_rgba(255, 206, 86, 0.2),
            ChartColor::from_rgba(75, 192, 192, 0.2),
            ChartColor::from_rgba(153, 102, 255, 0.2),
            ChartColor::from_rgba(255, 159, 64, 0.2),
        ]
        .into(),
    );
    dataset.border_color = Some(
        vec![
            ChartColor::from_rgba(255, 99, 132, 1.0),
            ChartColor::from_rgba(54, 162, 235, 1.0),
            ChartColor::from_rgba(255, 206, 86, 1.0),
            ChartColor::from_rgba(75, 192, 192, 1.0),
            ChartColor::from_rgba(153, 102, 255, 1.0),
            ChartColor::from_rgba(255, 159, 64, 1.0),
        ]
        .into(),
    );
    dataset.border_width = Some(vec![1].into());
    dataset.bar_percentage = Some(0.5);
    dataset.bar_thickness = Some(6.0);
    dataset.max_bar_thickness = Some(8.0);
    dataset.min_bar_length = Some(2.0);
    chart.data.datasets.push(dataset.into());

    let mut scales = IndexMap::new();
    scales.insert(
        "x".to_string(),
        Scale {
            grid: Some(Grid {
                offset: Some(true),
                ..Grid::default()
            }),
            ..Scale::default()
        },
    );
    scales.insert(
        "y".to_string(),
        Scale {
            begin_at_zero: Some(true),
            ..Scale::default()
        },
    );

    let mut options = Options::default();
    options.layout = Some(Layout {
        padding: Some(Padding::Object(PaddingObject {
            left: Some(10),
            right: Some(12),
            ..PaddingObject::default()
        })),
        ..Layout::default()
    });
    options.scales = Some(scales);
    chart.options = Some(options);

    chart
}

#[test]
fn generates_known_good_snippet() {
    let actual = build_bar_chart()
        .create_chart_code("barChart")
        .expect("snippet generation");
    assert_eq!(actual, KNOWN_GOOD_CHART);
}

#[test]
fn body_matches_snippet_payload() {
    let chart = build_bar_chart();
    let body = chart.serialize_body().expect("serialize body");
    let snippet = chart.create_chart_code("barChart").expect("snippet");
    assert!(snippet.contains(&body));
    // Compact output: no whitespace is inserted between JSON tokens.
    assert!(!body.contains(": "));
    assert!(!body.contains(", \""));
}

#[test]
fn data_gaps_serialize_as_null_in_position() {
    let body = build_bar_chart().serialize_body().expect("serialize body");
    assert!(body.contains("\"data\":[12.0,19.0,3.0,null,2.0,3.0]"));
}

#[test]
fn single_element_border_width_collapses_to_scalar() {
    let body = build_bar_chart().serialize_body().expect("serialize body");
    assert!(body.contains("\"borderWidth\":1,"));
}

#[test]
fn unset_options_are_omitted() {
    let mut chart = build_bar_chart();
    chart.options = None;
    let body = chart.serialize_body().expect("serialize body");
    assert!(!body.contains("\"options\""));
    assert!(body.ends_with("\"labels\":[\"Red\",\"Blue\",\"Yellow\",\"Green\",\"Purple\",\"Orange\"]}}"));
}

#[test]
fn empty_padding_object_fails_serialization() {
    let mut chart = build_bar_chart();
    if let Some(options) = chart.options.as_mut() {
        options.layout = Some(Layout {
            padding: Some(Padding::Object(PaddingObject::default())),
            ..Layout::default()
        });
    }
    assert!(chart.serialize_body().is_err());
    assert!(chart.create_chart_code("barChart").is_err());
}

#[test]
fn uniform_padding_serializes_as_bare_integer() {
    let mut chart = build_bar_chart();
    if let Some(options) = chart.options.as_mut() {
        options.layout = Some(Layout {
            padding: Some(Padding::Uniform(10)),
            ..Layout::default()
        });
    }
    let body = chart.serialize_body().expect("serialize body");
    assert!(body.contains("\"layout\":{\"padding\":10}"));
}
