// File: crates/demo/src/main.rs
// Summary: Demo builds a bar chart with gaps, per-bar colors, and layout
// padding, then prints the embeddable snippet to stdout.

use anyhow::Result;
use chart_embed::{
    BarDataset, Chart, ChartColor, ChartType, Grid, Layout, Options, Padding, PaddingObject,
    Scale,
};
use indexmap::IndexMap;

fn main() -> Result<()> {
    // Binding name from CLI, falling back to a sensible default.
    let binding = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "barChart".to_string());

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
    dataset.border_width = Some(vec![1].into());
    dataset.bar_percentage = Some(0.5);
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

    println!("{}", chart.create_chart_code(&binding)?);
    Ok(())
}
