// File: crates/chart-embed/tests/line_chart.rs
// Purpose: Line chart exercising the remaining variant fields in context:
// fill as bool-or-string, title display "auto", tick formatter code,
// multi-line title text.

use chart_embed::{
    BoolIntString, Chart, ChartColor, ChartType, Indexable, JsCode, LineDataset, Options,
    Plugins, Scale, Ticks, Title,
};
use indexmap::IndexMap;

fn build_line_chart() -> Chart {
    let mut chart = Chart::new(ChartType::Line);
    chart.data.labels = Some(vec!["Jan".into(), "Feb".into(), "Mar".into()]);

    let mut dataset = LineDataset::new();
    dataset.label = Some("Revenue".to_string());
    dataset.data = vec![Some(10.0), None, Some(14.5)];
    dataset.border_color = Some(ChartColor::from_rgb(64, 160, 255).into());
    dataset.fill = Some(BoolIntString::from("origin"));
    dataset.tension = Some(0.4);
    dataset.point_radius = Some(vec![2.0, 2.0, 4.0].into());
    chart.data.datasets.push(dataset.into());

    let mut scales = IndexMap::new();
    scales.insert(
        "y".to_string(),
        Scale {
            begin_at_zero: Some(true),
            ticks: Some(Ticks {
                callback: Some(JsCode::new(
                    "function(value) { return '$' + value; }",
                )),
                ..Ticks::default()
            }),
            ..Scale::default()
        },
    );

    let mut options = Options::default();
    options.plugins = Some(Plugins {
        title: Some(Title {
            display: Some(BoolIntString::from("auto")),
            text: Some(Indexable::Many(vec![
                "Revenue".to_string(),
                "FY 2024".to_string(),
            ])),
            ..Title::default()
        }),
        ..Plugins::default()
    });
    options.scales = Some(scales);
    chart.options = Some(options);
    chart
}

#[test]
fn fill_mode_string_stays_quoted() {
    let body = build_line_chart().serialize_body().expect("serialize body");
    assert!(body.contains("\"fill\":\"origin\""));
}

#[test]
fn fill_bool_renders_literal() {
    let mut chart = build_line_chart();
    if let chart_embed::Dataset::Line(ds) = &mut chart.data.datasets[0] {
        ds.fill = Some(BoolIntString::from(false));
    }
    let body = chart.serialize_body().expect("serialize body");
    assert!(body.contains("\"fill\":false"));
}

#[test]
fn tick_formatter_is_literal_code() {
    let body = build_line_chart().serialize_body().expect("serialize body");
    assert!(body.contains("\"callback\":function(value) { return '$' + value; }"));
}

#[test]
fn title_display_auto_and_multiline_text() {
    let body = build_line_chart().serialize_body().expect("serialize body");
    assert!(body.contains("\"display\":\"auto\""));
    assert!(body.contains("\"text\":[\"Revenue\",\"FY 2024\"]"));
}

#[test]
fn gap_and_point_radii_preserve_order() {
    let body = build_line_chart().serialize_body().expect("serialize body");
    assert!(body.contains("\"data\":[10.0,null,14.5]"));
    assert!(body.contains("\"pointRadius\":[2.0,2.0,4.0]"));
}

#[test]
fn single_border_color_collapses_to_scalar() {
    let body = build_line_chart().serialize_body().expect("serialize body");
    assert!(body.contains("\"borderColor\":\"rgb(64, 160, 255)\""));
}
