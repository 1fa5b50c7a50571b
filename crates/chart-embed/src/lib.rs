// File: crates/chart-embed/src/lib.rs
// Summary: Library entry point; exports the chart model and snippet generation API.

pub mod chart;
pub mod color;
pub mod data;
pub mod error;
pub mod options;
pub mod tooltip;
pub mod variant;

pub use chart::{Chart, ChartType};
pub use color::ChartColor;
pub use data::{BarDataset, Data, Dataset, LineDataset, PieDataset};
pub use error::{ChartError, Result};
pub use options::{Grid, Layout, Legend, Options, Plugins, Scale, Ticks, Title};
pub use tooltip::{Callback, Font, ToolTip};
pub use variant::{BoolIntString, Indexable, JsCode, Padding, PaddingObject};
