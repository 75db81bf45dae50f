//! Presentation bundles: the static chart / table / insight content shown for one
//! visualization category.
//!
//! Everything here is plain data. Bundles are built once from literal constants
//! (see `crate::content`) or deserialized from a JSON catalog, and never mutated
//! afterwards. Rendering lives in `crate::charts` and `crate::components`.

use serde::{Deserialize, Serialize};

use super::format;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationBundle {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub chart: ChartSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<DataTable>,
    #[serde(default)]
    pub insights: Vec<Insight>,
    /// Marks datasets that are estimates rather than published figures.
    #[serde(default)]
    pub illustrative: bool,
}

/// Chart description consumed by `crate::charts::ChartView`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ChartSpec {
    Bar(BarChart),
    Line(LineChart),
    Doughnut(DoughnutChart),
    Radar(RadarChart),
    Sankey(SankeyChart),
}

impl ChartSpec {
    /// Short machine name, used for CSS modifiers and logging.
    pub fn kind(&self) -> &'static str {
        match self {
            ChartSpec::Bar(_) => "bar",
            ChartSpec::Line(_) => "line",
            ChartSpec::Doughnut(_) => "doughnut",
            ChartSpec::Radar(_) => "radar",
            ChartSpec::Sankey(_) => "sankey",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Fixed upper bound; derived from the data when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Appended to tick and value labels ("%" for percentages).
    #[serde(default)]
    pub value_suffix: String,
    /// Horizontal guide, e.g. PRR = 1.0 for perfect representation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<f64>,
}

impl Axis {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.value_suffix = suffix.into();
        self
    }

    pub fn with_reference(mut self, reference: f64) -> Self {
        self.reference = Some(reference);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    /// `None` marks a year or period the source did not report.
    pub values: Vec<Option<f64>>,
    pub color: String,
    /// Optional per-point colors (single-series bar charts colored by category).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub point_colors: Vec<String>,
}

impl Series {
    /// Fully reported series.
    pub fn new(label: impl Into<String>, values: &[f64], color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            values: values.iter().copied().map(Some).collect(),
            color: color.into(),
            point_colors: Vec::new(),
        }
    }

    /// Series with unreported points.
    pub fn sparse(
        label: impl Into<String>,
        values: &[Option<f64>],
        color: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            values: values.to_vec(),
            color: color.into(),
            point_colors: Vec::new(),
        }
    }

    pub fn with_point_colors(mut self, colors: &[&str]) -> Self {
        self.point_colors = colors.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn color_at(&self, index: usize) -> &str {
        self.point_colors
            .get(index)
            .map(String::as_str)
            .unwrap_or(self.color.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub labels: Vec<String>,
    pub series: Vec<Series>,
    #[serde(default)]
    pub axis: Axis,
    #[serde(default)]
    pub stacked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    pub labels: Vec<String>,
    pub series: Vec<Series>,
    #[serde(default)]
    pub axis: Axis,
    #[serde(default)]
    pub fill: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    pub color: String,
}

impl Slice {
    pub fn new(label: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            color: color.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoughnutChart {
    pub slices: Vec<Slice>,
    #[serde(default)]
    pub value_suffix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarChart {
    pub labels: Vec<String>,
    pub series: Vec<Series>,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flow {
    pub from: String,
    pub to: String,
    pub value: f64,
}

impl Flow {
    pub fn new(from: impl Into<String>, to: impl Into<String>, value: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SankeyChart {
    pub flows: Vec<Flow>,
    /// Node colors in first-appearance order (sources first, then targets).
    #[serde(default)]
    pub node_colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    pub columns: Vec<String>,
    pub rows: Vec<TableRow>,
}

impl DataTable {
    pub fn new(columns: &[&str], rows: Vec<TableRow>) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowStyle {
    #[default]
    Plain,
    Highlight,
    Total,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<Cell>,
    #[serde(default)]
    pub style: RowStyle,
}

impl TableRow {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            style: RowStyle::Plain,
        }
    }

    pub fn styled(cells: Vec<Cell>, style: RowStyle) -> Self {
        Self { cells, style }
    }
}

/// One table cell. Numeric cells keep the literal value and are formatted on
/// display, so the published figures are stored exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cell {
    Text(String),
    /// Row header, rendered in bold.
    Label(String),
    Count(u64),
    Percent { value: f64, decimals: usize },
    /// "62.1% (137,039)"
    Share {
        percent: f64,
        decimals: usize,
        count: u64,
    },
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Cell::Text(text.into())
    }

    pub fn label(text: impl Into<String>) -> Self {
        Cell::Label(text.into())
    }

    pub fn percent(value: f64, decimals: usize) -> Self {
        Cell::Percent { value, decimals }
    }

    pub fn share(percent: f64, decimals: usize, count: u64) -> Self {
        Cell::Share {
            percent,
            decimals,
            count,
        }
    }

    pub fn display(&self) -> String {
        match self {
            Cell::Text(text) | Cell::Label(text) => text.clone(),
            Cell::Count(count) => format::format_count(*count),
            Cell::Percent { value, decimals } => format::format_percent(*value, *decimals),
            Cell::Share {
                percent,
                decimals,
                count,
            } => format::format_share(*percent, *decimals, *count),
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, Cell::Text(_) | Cell::Label(_))
    }
}

/// Visual severity / category of an insight annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    Info,
    Highlight,
    Success,
    Warning,
    Concern,
    Innovation,
    Accent,
}

impl Tone {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Tone::Info => "insight--info",
            Tone::Highlight => "insight--highlight",
            Tone::Success => "insight--success",
            Tone::Warning => "insight--warning",
            Tone::Concern => "insight--concern",
            Tone::Innovation => "insight--innovation",
            Tone::Accent => "insight--accent",
        }
    }
}

/// Insight text may mark emphasis with `**double asterisks**`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub tone: Tone,
    pub title: String,
    pub body: String,
}

impl Insight {
    pub fn new(tone: Tone, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            tone,
            title: title.into(),
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_cell_matches_published_layout() {
        let cell = Cell::Share {
            percent: 62.1,
            decimals: 1,
            count: 137_039,
        };
        assert_eq!(cell.display(), "62.1% (137,039)");
        assert!(cell.is_numeric());
        assert!(!Cell::Label("Stable Volume".into()).is_numeric());
    }

    #[test]
    fn point_colors_override_series_color() {
        let series = Series {
            label: "Stability Rate (%)".into(),
            values: vec![Some(67.0), Some(64.0)],
            color: "#1e40af".into(),
            point_colors: vec!["#1e40af".into(), "#3b82f6".into()],
        };
        assert_eq!(series.color_at(1), "#3b82f6");
        assert_eq!(series.color_at(5), "#1e40af");
    }

    #[test]
    fn chart_kind_tag_is_kebab_case() {
        let spec = ChartSpec::Doughnut(DoughnutChart {
            slices: vec![Slice {
                label: "Stable".into(),
                value: 60.0,
                color: "#2c5aa0".into(),
            }],
            value_suffix: "%".into(),
        });
        let json = serde_json::to_value(&spec).expect("serialize chart");
        assert_eq!(json["kind"], "doughnut");
        assert_eq!(spec.kind(), "doughnut");
    }
}
