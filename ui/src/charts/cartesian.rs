use dioxus::prelude::*;

use crate::core::bundle::{BarChart, LineChart};
use crate::core::format;

use super::geometry::{area_path, bar_layout, line_layout, points_attr, CartesianAxes, Frame};
use super::{legend, LegendEntry};

pub(super) fn render_bar(chart: &BarChart) -> Element {
    let frame = Frame::CARTESIAN;
    let layout = bar_layout(chart, &frame);
    let suffix = chart.axis.value_suffix.clone();
    // Stacked segments and thin grouped bars are too small for inline values.
    let show_values = !chart.stacked && layout.bars.iter().all(|b| b.width >= 18.0);

    let entries: Vec<LegendEntry> = if chart.series.len() > 1 {
        chart
            .series
            .iter()
            .map(|s| LegendEntry::new(&s.label, &s.color))
            .collect()
    } else {
        Vec::new()
    };

    rsx! {
        div { class: "chart chart--bar",
            svg {
                class: "chart__svg",
                "viewBox": frame.view_box(),
                "preserveAspectRatio": "xMidYMid meet",
                "role": "img",
                {render_axes(&frame, &layout.axes, &suffix, chart.axis.title.as_deref())}
                for bar in layout.bars.iter() {
                    rect {
                        key: "{bar.series}-{bar.index}",
                        class: "chart__bar",
                        x: bar.x,
                        y: bar.y,
                        width: bar.width,
                        height: bar.height,
                        rx: "3",
                        fill: "{bar.color}",
                    }
                    if show_values && bar.height > 0.0 {
                        text {
                            class: "chart__value",
                            x: bar.x + bar.width / 2.0,
                            y: bar.y - 6.0,
                            "text-anchor": "middle",
                            {format::format_value(bar.value, &suffix)}
                        }
                    }
                }
            }
            {legend(&entries)}
        }
    }
}

pub(super) fn render_line(chart: &LineChart) -> Element {
    let frame = Frame::CARTESIAN;
    let layout = line_layout(chart, &frame);
    let suffix = chart.axis.value_suffix.clone();
    let baseline = frame.plot_bottom();
    let entries: Vec<LegendEntry> = chart
        .series
        .iter()
        .map(|s| LegendEntry::new(&s.label, &s.color))
        .collect();

    rsx! {
        div { class: "chart chart--line",
            svg {
                class: "chart__svg",
                "viewBox": frame.view_box(),
                "preserveAspectRatio": "xMidYMid meet",
                "role": "img",
                {render_axes(&frame, &layout.axes, &suffix, chart.axis.title.as_deref())}
                for line in layout.lines.iter() {
                    g { key: "{line.series}", class: "chart__series",
                        for (seg_idx, segment) in line.segments.iter().enumerate() {
                            if chart.fill {
                                path {
                                    key: "area-{seg_idx}",
                                    class: "chart__area",
                                    d: area_path(segment, baseline),
                                    fill: "{line.color}",
                                    "fill-opacity": "0.12",
                                }
                            }
                            polyline {
                                key: "line-{seg_idx}",
                                class: "chart__line",
                                points: points_attr(segment),
                                fill: "none",
                                stroke: "{line.color}",
                                "stroke-width": "2.5",
                                "stroke-linejoin": "round",
                            }
                            for (pt_idx, (x, y)) in segment.iter().enumerate() {
                                circle {
                                    key: "pt-{seg_idx}-{pt_idx}",
                                    class: "chart__point",
                                    cx: *x,
                                    cy: *y,
                                    r: 3.5,
                                    fill: "{line.color}",
                                }
                            }
                        }
                    }
                }
            }
            {legend(&entries)}
        }
    }
}

fn render_axes(frame: &Frame, axes: &CartesianAxes, suffix: &str, title: Option<&str>) -> Element {
    let left = frame.plot_left();
    let right = frame.plot_right();
    let bottom = frame.plot_bottom();
    let label_y = bottom + 18.0;
    let rotate_labels = axes.labels.len() > 6;

    rsx! {
        g { class: "chart__axes",
            for tick in axes.ticks.iter() {
                line {
                    class: "chart__grid",
                    x1: left,
                    x2: right,
                    y1: tick.y,
                    y2: tick.y,
                }
                text {
                    class: "chart__tick",
                    x: left - 8.0,
                    y: tick.y + 4.0,
                    "text-anchor": "end",
                    {format::format_value(round_tick(tick.value), suffix)}
                }
            }
            line {
                class: "chart__baseline",
                x1: left,
                x2: right,
                y1: bottom,
                y2: bottom,
            }
            if let Some(reference) = axes.reference_y {
                line {
                    class: "chart__reference",
                    x1: left,
                    x2: right,
                    y1: reference,
                    y2: reference,
                    "stroke-dasharray": "6 4",
                }
            }
            for (idx, label) in axes.labels.iter().enumerate() {
                if rotate_labels {
                    text {
                        key: "{idx}",
                        class: "chart__label",
                        x: label.x,
                        y: label_y,
                        "text-anchor": "end",
                        transform: format!("rotate(-35 {:.1} {:.1})", label.x, label_y),
                        "{label.text}"
                    }
                } else {
                    text {
                        key: "{idx}",
                        class: "chart__label",
                        x: label.x,
                        y: label_y,
                        "text-anchor": "middle",
                        "{label.text}"
                    }
                }
            }
            if let Some(title) = title {
                text {
                    class: "chart__axis-title",
                    x: 14.0,
                    y: frame.plot_top() + frame.plot_height() / 2.0,
                    "text-anchor": "middle",
                    transform: format!(
                        "rotate(-90 14 {:.1})",
                        frame.plot_top() + frame.plot_height() / 2.0
                    ),
                    "{title}"
                }
            }
        }
    }
}

/// Ticks of fractional axes (PRR up to 1.5) keep two decimals; others are whole.
fn round_tick(value: f64) -> f64 {
    if value.fract().abs() < 1e-9 {
        value.round()
    } else {
        (value * 100.0).round() / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_round_away_float_noise() {
        let ticks = crate::charts::geometry::ticks(1.5, 5);
        assert_eq!(round_tick(ticks[1]), 0.3);
        assert_eq!(round_tick(ticks[5]), 1.5);
        assert_eq!(round_tick(80.0), 80.0);
    }
}
