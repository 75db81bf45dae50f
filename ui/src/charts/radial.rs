use dioxus::prelude::*;

use crate::core::bundle::{DoughnutChart, RadarChart};
use crate::core::format;

use super::geometry::{doughnut_segments, radar_layout};
use super::{legend, LegendEntry};

const DOUGHNUT_SIZE: f64 = 360.0;
const RADAR_SIZE: f64 = 420.0;

pub(super) fn render_doughnut(chart: &DoughnutChart) -> Element {
    let center = DOUGHNUT_SIZE / 2.0;
    let segments = doughnut_segments(chart, center, center, 160.0, 92.0);
    let entries: Vec<LegendEntry> = chart
        .slices
        .iter()
        .map(|s| LegendEntry::new(&s.label, &s.color))
        .collect();

    rsx! {
        div { class: "chart chart--doughnut",
            svg {
                class: "chart__svg chart__svg--square",
                "viewBox": "0 0 {DOUGHNUT_SIZE} {DOUGHNUT_SIZE}",
                "role": "img",
                for segment in segments.iter() {
                    path {
                        key: "{segment.index}",
                        class: "chart__arc",
                        d: "{segment.path}",
                        fill: "{segment.color}",
                    }
                    // Labels on slivers would overlap the neighbours.
                    if segment.fraction >= 0.04 {
                        text {
                            class: "chart__arc-label",
                            x: segment.label_x,
                            y: segment.label_y + 5.0,
                            "text-anchor": "middle",
                            {format::format_value(chart.slices[segment.index].value, &chart.value_suffix)}
                        }
                    }
                }
            }
            {legend(&entries)}
        }
    }
}

pub(super) fn render_radar(chart: &RadarChart) -> Element {
    let center = RADAR_SIZE / 2.0;
    let layout = radar_layout(chart, center, center, 150.0);
    let entries: Vec<LegendEntry> = chart
        .series
        .iter()
        .map(|s| LegendEntry::new(&s.label, &s.color))
        .collect();
    let areas: Vec<(usize, String, String)> = layout
        .polygons
        .iter()
        .map(|(idx, points)| (*idx, points.clone(), chart.series[*idx].color.clone()))
        .collect();

    rsx! {
        div { class: "chart chart--radar",
            svg {
                class: "chart__svg chart__svg--square",
                "viewBox": "0 0 {RADAR_SIZE} {RADAR_SIZE}",
                "role": "img",
                for (idx, ring) in layout.rings.iter().enumerate() {
                    polygon { key: "ring-{idx}", class: "chart__grid", points: "{ring}", fill: "none" }
                }
                for (idx, (x, y)) in layout.spokes.iter().enumerate() {
                    line {
                        key: "spoke-{idx}",
                        class: "chart__grid",
                        x1: center,
                        y1: center,
                        x2: *x,
                        y2: *y,
                    }
                }
                for (series_idx, points, color) in areas.iter() {
                    polygon {
                        key: "series-{series_idx}",
                        class: "chart__radar-area",
                        points: "{points}",
                        fill: "{color}",
                        "fill-opacity": "0.2",
                        stroke: "{color}",
                        "stroke-width": "2",
                    }
                }
                for (idx, (x, y)) in layout.label_points.iter().enumerate() {
                    text {
                        key: "label-{idx}",
                        class: "chart__label",
                        x: *x,
                        y: *y + 4.0,
                        "text-anchor": "middle",
                        {chart.labels.get(idx).cloned().unwrap_or_default()}
                    }
                }
            }
            {legend(&entries)}
        }
    }
}
