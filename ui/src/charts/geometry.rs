//! Pure layout math for the SVG charts. Components in the sibling modules only
//! map these shapes onto elements.

use std::f64::consts::PI;

use crate::core::bundle::{BarChart, DoughnutChart, LineChart, RadarChart, SankeyChart};

/// Plot area inside an SVG viewBox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Frame {
    pub const CARTESIAN: Frame = Frame {
        width: 640.0,
        height: 360.0,
        left: 64.0,
        right: 16.0,
        top: 20.0,
        bottom: 64.0,
    };

    pub fn plot_left(&self) -> f64 {
        self.left
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.right
    }

    pub fn plot_top(&self) -> f64 {
        self.top
    }

    pub fn plot_bottom(&self) -> f64 {
        self.height - self.bottom
    }

    pub fn plot_width(&self) -> f64 {
        (self.plot_right() - self.plot_left()).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.plot_bottom() - self.plot_top()).max(0.0)
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

/// Round an axis maximum up to a readable bound (1, 1.2, 1.5, 2, 2.5, 3, 4, 5, 6, 8 × 10^k).
pub fn nice_max(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    let normalized = max / magnitude;
    const STEPS: [f64; 11] = [1.0, 1.2, 1.5, 2.0, 2.5, 3.0, 4.0, 5.0, 6.0, 8.0, 10.0];
    let step = STEPS
        .iter()
        .copied()
        .find(|s| normalized <= *s + 1e-9)
        .unwrap_or(10.0);
    step * magnitude
}

/// Evenly spaced tick values from zero to `max` inclusive.
pub fn ticks(max: f64, intervals: usize) -> Vec<f64> {
    let intervals = intervals.max(1);
    (0..=intervals)
        .map(|i| max * i as f64 / intervals as f64)
        .collect()
}

/// Y coordinate of `value` on a zero-based linear axis.
pub fn scale_y(frame: &Frame, value: f64, axis_max: f64) -> f64 {
    let ratio = if axis_max > 0.0 {
        (value / axis_max).clamp(0.0, 1.0)
    } else {
        0.0
    };
    frame.plot_bottom() - ratio * frame.plot_height()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub y: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryLabel {
    pub x: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub series: usize,
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub value: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartesianAxes {
    pub axis_max: f64,
    pub ticks: Vec<Tick>,
    pub labels: Vec<CategoryLabel>,
    pub reference_y: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub axes: CartesianAxes,
    pub bars: Vec<BarRect>,
}

fn band_center(frame: &Frame, count: usize, index: usize) -> f64 {
    let band = frame.plot_width() / count.max(1) as f64;
    frame.plot_left() + band * (index as f64 + 0.5)
}

fn axes(frame: &Frame, labels: &[String], axis_max: f64, reference: Option<f64>) -> CartesianAxes {
    CartesianAxes {
        axis_max,
        ticks: ticks(axis_max, 5)
            .into_iter()
            .map(|value| Tick {
                y: scale_y(frame, value, axis_max),
                value,
            })
            .collect(),
        labels: labels
            .iter()
            .enumerate()
            .map(|(idx, text)| CategoryLabel {
                x: band_center(frame, labels.len(), idx),
                text: text.clone(),
            })
            .collect(),
        reference_y: reference.map(|value| scale_y(frame, value, axis_max)),
    }
}

pub fn bar_layout(chart: &BarChart, frame: &Frame) -> BarLayout {
    let count = chart.labels.len();
    let data_max = if chart.stacked {
        (0..count)
            .map(|idx| {
                chart
                    .series
                    .iter()
                    .filter_map(|s| s.values.get(idx).copied().flatten())
                    .sum::<f64>()
            })
            .fold(0.0, f64::max)
    } else {
        chart
            .series
            .iter()
            .flat_map(|s| s.values.iter().copied().flatten())
            .fold(0.0, f64::max)
    };
    let axis_max = chart.axis.max.unwrap_or_else(|| nice_max(data_max));
    let axes = axes(frame, &chart.labels, axis_max, chart.axis.reference);

    let band = frame.plot_width() / count.max(1) as f64;
    let inner = band * 0.7;
    let groups = if chart.stacked {
        1
    } else {
        chart.series.len().max(1)
    };
    let bar_width = inner / groups as f64;

    let mut bars = Vec::new();
    for idx in 0..count {
        let band_left = frame.plot_left() + band * idx as f64 + (band - inner) / 2.0;
        let mut stacked_base = 0.0;
        for (series_idx, series) in chart.series.iter().enumerate() {
            let Some(value) = series.values.get(idx).copied().flatten() else {
                continue;
            };
            let (x, bottom_value) = if chart.stacked {
                (band_left, stacked_base)
            } else {
                (band_left + bar_width * series_idx as f64, 0.0)
            };
            let top_value = bottom_value + value;
            let y_top = scale_y(frame, top_value, axis_max);
            let y_bottom = scale_y(frame, bottom_value, axis_max);
            bars.push(BarRect {
                series: series_idx,
                index: idx,
                x,
                y: y_top,
                width: bar_width,
                height: (y_bottom - y_top).max(0.0),
                value,
                color: series.color_at(idx).to_string(),
            });
            if chart.stacked {
                stacked_base = top_value;
            }
        }
    }

    BarLayout { axes, bars }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineSeriesPath {
    pub series: usize,
    /// Contiguous runs of points; a missing value breaks the line.
    pub segments: Vec<Vec<(f64, f64)>>,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    pub axes: CartesianAxes,
    pub lines: Vec<LineSeriesPath>,
}

pub fn line_layout(chart: &LineChart, frame: &Frame) -> LineLayout {
    let data_max = chart
        .series
        .iter()
        .flat_map(|s| s.values.iter().copied().flatten())
        .fold(0.0, f64::max);
    let axis_max = chart.axis.max.unwrap_or_else(|| nice_max(data_max));
    let axes = axes(frame, &chart.labels, axis_max, chart.axis.reference);
    let count = chart.labels.len();

    let lines = chart
        .series
        .iter()
        .enumerate()
        .map(|(series_idx, series)| {
            let mut segments = Vec::new();
            let mut run = Vec::new();
            for idx in 0..count {
                match series.values.get(idx).copied().flatten() {
                    Some(value) => run.push((
                        band_center(frame, count, idx),
                        scale_y(frame, value, axis_max),
                    )),
                    None if !run.is_empty() => segments.push(std::mem::take(&mut run)),
                    None => {}
                }
            }
            if !run.is_empty() {
                segments.push(run);
            }
            LineSeriesPath {
                series: series_idx,
                segments,
                color: series.color.clone(),
            }
        })
        .collect();

    LineLayout { axes, lines }
}

/// `"x1,y1 x2,y2 ..."` for `polyline` / `polygon`.
pub fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Closed area under one line segment down to `baseline`.
pub fn area_path(points: &[(f64, f64)], baseline: f64) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    let mut path = format!("M{:.1},{baseline:.1}", first.0);
    for (x, y) in points {
        path.push_str(&format!(" L{x:.1},{y:.1}"));
    }
    path.push_str(&format!(" L{:.1},{baseline:.1} Z", last.0));
    path
}

fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArcSegment {
    pub index: usize,
    pub path: String,
    pub label_x: f64,
    pub label_y: f64,
    pub fraction: f64,
    pub color: String,
}

/// Annular segments starting at twelve o'clock, clockwise.
pub fn doughnut_segments(
    chart: &DoughnutChart,
    cx: f64,
    cy: f64,
    outer: f64,
    inner: f64,
) -> Vec<ArcSegment> {
    let total: f64 = chart.slices.iter().map(|s| s.value.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = -PI / 2.0;
    chart
        .slices
        .iter()
        .enumerate()
        .filter(|(_, slice)| slice.value > 0.0)
        .map(|(index, slice)| {
            let fraction = slice.value / total;
            // A full ring cannot be drawn as one arc; stop just short of closing it.
            let sweep = (fraction * 2.0 * PI).min(2.0 * PI - 1e-4);
            let end = start + sweep;
            let large = if sweep > PI { 1 } else { 0 };
            let (ox0, oy0) = polar(cx, cy, outer, start);
            let (ox1, oy1) = polar(cx, cy, outer, end);
            let (ix1, iy1) = polar(cx, cy, inner, end);
            let (ix0, iy0) = polar(cx, cy, inner, start);
            let path = format!(
                "M{ox0:.2},{oy0:.2} A{outer:.2},{outer:.2} 0 {large} 1 {ox1:.2},{oy1:.2} \
                 L{ix1:.2},{iy1:.2} A{inner:.2},{inner:.2} 0 {large} 0 {ix0:.2},{iy0:.2} Z"
            );
            let (label_x, label_y) = polar(cx, cy, (outer + inner) / 2.0, start + sweep / 2.0);
            start = end;
            ArcSegment {
                index,
                path,
                label_x,
                label_y,
                fraction,
                color: slice.color.clone(),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarLayout {
    pub spokes: Vec<(f64, f64)>,
    pub rings: Vec<String>,
    pub label_points: Vec<(f64, f64)>,
    pub polygons: Vec<(usize, String)>,
}

pub fn radar_layout(chart: &RadarChart, cx: f64, cy: f64, radius: f64) -> RadarLayout {
    let count = chart.labels.len().max(1);
    let angle = |idx: usize| -PI / 2.0 + 2.0 * PI * idx as f64 / count as f64;
    let max = if chart.max > 0.0 { chart.max } else { 1.0 };

    let spokes = (0..count).map(|i| polar(cx, cy, radius, angle(i))).collect();
    let rings = [0.25, 0.5, 0.75, 1.0]
        .iter()
        .map(|ratio| {
            let ring: Vec<_> = (0..count)
                .map(|i| polar(cx, cy, radius * ratio, angle(i)))
                .collect();
            points_attr(&ring)
        })
        .collect();
    let label_points = (0..count)
        .map(|i| polar(cx, cy, radius + 18.0, angle(i)))
        .collect();
    let polygons = chart
        .series
        .iter()
        .enumerate()
        .map(|(series_idx, series)| {
            let points: Vec<_> = (0..count)
                .map(|i| {
                    let value = series.values.get(i).copied().flatten().unwrap_or(0.0);
                    polar(cx, cy, radius * (value / max).clamp(0.0, 1.0), angle(i))
                })
                .collect();
            (series_idx, points_attr(&points))
        })
        .collect();

    RadarLayout {
        spokes,
        rings,
        label_points,
        polygons,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SankeyNode {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub value: f64,
    pub color: String,
    pub is_source: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SankeyLink {
    pub source: usize,
    pub target: usize,
    pub value: f64,
    pub path: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SankeyLayout {
    pub nodes: Vec<SankeyNode>,
    pub links: Vec<SankeyLink>,
}

const SANKEY_FALLBACK_COLORS: [&str; 4] = ["#1e3a8a", "#3b82f6", "#22c55e", "#ef4444"];

/// Two-column layout: sources on the left in first-appearance order, targets on
/// the right. Node heights are proportional to their flow totals.
pub fn sankey_layout(chart: &SankeyChart, frame: &Frame, node_width: f64, padding: f64) -> SankeyLayout {
    let mut sources: Vec<&str> = Vec::new();
    let mut targets: Vec<&str> = Vec::new();
    for flow in &chart.flows {
        if !sources.contains(&flow.from.as_str()) {
            sources.push(flow.from.as_str());
        }
        if !targets.contains(&flow.to.as_str()) {
            targets.push(flow.to.as_str());
        }
    }

    let total_of = |name: &str, outgoing: bool| -> f64 {
        chart
            .flows
            .iter()
            .filter(|f| if outgoing { f.from == name } else { f.to == name })
            .map(|f| f.value.max(0.0))
            .sum()
    };
    let source_total: f64 = sources.iter().map(|s| total_of(s, true)).sum();
    let target_total: f64 = targets.iter().map(|t| total_of(t, false)).sum();
    let busiest = sources.len().max(targets.len()).max(1);
    let usable = (frame.plot_height() - padding * (busiest as f64 - 1.0)).max(1.0);
    let scale = usable / source_total.max(target_total).max(1.0);

    let color_for = |idx: usize| -> String {
        chart
            .node_colors
            .get(idx)
            .cloned()
            .unwrap_or_else(|| SANKEY_FALLBACK_COLORS[idx % SANKEY_FALLBACK_COLORS.len()].to_string())
    };

    let mut nodes = Vec::with_capacity(sources.len() + targets.len());
    let mut column = |names: &[&str], is_source: bool, x: f64, color_offset: usize| {
        let mut y = frame.plot_top();
        for (idx, name) in names.iter().enumerate() {
            let value = total_of(name, is_source);
            let height = value * scale;
            nodes.push(SankeyNode {
                name: name.to_string(),
                x,
                y,
                width: node_width,
                height,
                value,
                color: color_for(color_offset + idx),
                is_source,
            });
            y += height + padding;
        }
    };
    column(&sources, true, frame.plot_left(), 0);
    column(&targets, false, frame.plot_right() - node_width, sources.len());

    let mut out_offset = vec![0.0; sources.len()];
    let mut in_offset = vec![0.0; targets.len()];
    let links = chart
        .flows
        .iter()
        .filter_map(|flow| {
            let s = sources.iter().position(|n| *n == flow.from)?;
            let t = targets.iter().position(|n| *n == flow.to)?;
            let thickness = flow.value.max(0.0) * scale;
            let source = &nodes[s];
            let target = &nodes[sources.len() + t];

            let x0 = source.x + source.width;
            let x1 = target.x;
            let xm = (x0 + x1) / 2.0;
            let y0 = source.y + out_offset[s];
            let y1 = target.y + in_offset[t];
            out_offset[s] += thickness;
            in_offset[t] += thickness;

            let path = format!(
                "M{x0:.2},{y0:.2} C{xm:.2},{y0:.2} {xm:.2},{y1:.2} {x1:.2},{y1:.2} \
                 L{x1:.2},{:.2} C{xm:.2},{:.2} {xm:.2},{:.2} {x0:.2},{:.2} Z",
                y1 + thickness,
                y1 + thickness,
                y0 + thickness,
                y0 + thickness
            );
            Some(SankeyLink {
                source: s,
                target: sources.len() + t,
                value: flow.value,
                path,
                color: target.color.clone(),
            })
        })
        .collect();

    SankeyLayout { nodes, links }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bundle::{Axis, Flow, Series, Slice};

    fn series(label: &str, values: &[Option<f64>]) -> Series {
        Series {
            label: label.into(),
            values: values.to_vec(),
            color: "#2c5aa0".into(),
            point_colors: Vec::new(),
        }
    }

    #[test]
    fn nice_max_rounds_up_to_readable_bounds() {
        let close = |a: f64, b: f64| (a - b).abs() < 1e-6;
        assert!(close(nice_max(72.0), 80.0));
        assert!(close(nice_max(1.28), 1.5));
        assert!(close(nice_max(140.0), 150.0));
        assert!(close(nice_max(100.0), 100.0));
        assert!(close(nice_max(32_026.0), 40_000.0));
        assert_eq!(nice_max(0.0), 1.0);
    }

    #[test]
    fn stacked_bars_fill_the_fixed_axis() {
        let chart = BarChart {
            labels: vec!["Pediatricians".into()],
            series: vec![
                series("1-10", &[Some(10.0)]),
                series("11-50", &[Some(10.0)]),
                series("51-100", &[Some(8.0)]),
                series("100+", &[Some(72.0)]),
            ],
            axis: Axis {
                max: Some(100.0),
                ..Axis::default()
            },
            stacked: true,
        };
        let frame = Frame::CARTESIAN;
        let layout = bar_layout(&chart, &frame);
        assert_eq!(layout.bars.len(), 4);
        let top = layout.bars.last().unwrap();
        assert!((top.y - frame.plot_top()).abs() < 1e-6);
        let total_height: f64 = layout.bars.iter().map(|b| b.height).sum();
        assert!((total_height - frame.plot_height()).abs() < 1e-6);
    }

    #[test]
    fn grouped_bars_skip_missing_points() {
        let chart = BarChart {
            labels: vec!["2016".into(), "2021".into()],
            series: vec![
                series("Pregnant", &[Some(22_027.0), None]),
                series("Postpartum", &[None, Some(32_026.0)]),
            ],
            axis: Axis::default(),
            stacked: false,
        };
        let layout = bar_layout(&chart, &Frame::CARTESIAN);
        assert_eq!(layout.bars.len(), 2);
        assert!((layout.axes.axis_max - 40_000.0).abs() < 1e-6);
        assert_eq!(layout.axes.labels.len(), 2);
    }

    #[test]
    fn reference_line_sits_on_the_scale() {
        let chart = BarChart {
            labels: vec!["Hispanic".into()],
            series: vec![series("PRR", &[Some(0.82)])],
            axis: Axis {
                max: Some(1.5),
                reference: Some(1.0),
                ..Axis::default()
            },
            stacked: false,
        };
        let frame = Frame::CARTESIAN;
        let layout = bar_layout(&chart, &frame);
        let expected = frame.plot_bottom() - frame.plot_height() / 1.5;
        assert!((layout.axes.reference_y.unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn line_breaks_on_missing_values() {
        let chart = LineChart {
            labels: (0..4).map(|i| i.to_string()).collect(),
            series: vec![series("s", &[Some(1.0), None, Some(2.0), Some(3.0)])],
            axis: Axis::default(),
            fill: true,
        };
        let layout = line_layout(&chart, &Frame::CARTESIAN);
        let segments = &layout.lines[0].segments;
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].len(), 1);
        assert_eq!(segments[1].len(), 2);
        assert!(area_path(&segments[1], 296.0).ends_with('Z'));
        assert!(area_path(&[], 0.0).is_empty());
    }

    #[test]
    fn doughnut_fractions_cover_the_ring() {
        let chart = DoughnutChart {
            slices: vec![
                Slice { label: "Stable".into(), value: 60.0, color: "#2c5aa0".into() },
                Slice { label: "Increases".into(), value: 20.0, color: "#28a745".into() },
                Slice { label: "Decreases".into(), value: 20.0, color: "#dc3545".into() },
            ],
            value_suffix: "%".into(),
        };
        let segments = doughnut_segments(&chart, 180.0, 180.0, 150.0, 90.0);
        assert_eq!(segments.len(), 3);
        let sum: f64 = segments.iter().map(|s| s.fraction).sum();
        assert!((sum - 1.0).abs() < 1e-9);
        // the 60% slice spans more than half the ring
        assert!(segments[0].path.contains(" 0 1 1 "));
    }

    #[test]
    fn radar_has_one_polygon_per_series() {
        let chart = RadarChart {
            labels: ["Access", "Quality", "Equity"].map(String::from).to_vec(),
            series: vec![series("Current", &[Some(85.0), Some(78.0), Some(90.0)])],
            max: 100.0,
        };
        let layout = radar_layout(&chart, 200.0, 200.0, 140.0);
        assert_eq!(layout.spokes.len(), 3);
        assert_eq!(layout.rings.len(), 4);
        assert_eq!(layout.polygons.len(), 1);
        assert_eq!(layout.polygons[0].1.split(' ').count(), 3);
    }

    #[test]
    fn sankey_nodes_are_proportional_to_totals() {
        let flow = |from: &str, to: &str, value: f64| Flow {
            from: from.into(),
            to: to.into(),
            value,
        };
        let chart = SankeyChart {
            flows: vec![
                flow("1-10", "Stable", 30.0),
                flow("1-10", "Decreases", 10.0),
                flow("100+", "Stable", 60.0),
            ],
            node_colors: Vec::new(),
        };
        let frame = Frame {
            width: 400.0,
            height: 220.0,
            left: 0.0,
            right: 0.0,
            top: 10.0,
            bottom: 10.0,
        };
        let layout = sankey_layout(&chart, &frame, 20.0, 0.0);
        assert_eq!(layout.nodes.len(), 4);
        assert_eq!(layout.links.len(), 3);
        let names: Vec<_> = layout.nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["1-10", "100+", "Stable", "Decreases"]);
        assert!((layout.nodes[0].height - 80.0).abs() < 1e-9);
        assert!((layout.nodes[2].height - 180.0).abs() < 1e-9);
        assert!(layout.nodes[2].x > layout.nodes[0].x);
    }
}
