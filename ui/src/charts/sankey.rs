use dioxus::prelude::*;

use crate::core::bundle::SankeyChart;
use crate::core::format;

use super::geometry::{sankey_layout, Frame};

const SANKEY_FRAME: Frame = Frame {
    width: 760.0,
    height: 440.0,
    left: 150.0,
    right: 150.0,
    top: 16.0,
    bottom: 16.0,
};

pub(super) fn render_sankey(chart: &SankeyChart) -> Element {
    let layout = sankey_layout(chart, &SANKEY_FRAME, 20.0, 28.0);
    let captions: Vec<String> = layout
        .nodes
        .iter()
        .map(|node| format!("{} · {}", node.name, format::format_count(node.value.round() as u64)))
        .collect();

    rsx! {
        div { class: "chart chart--sankey",
            svg {
                class: "chart__svg",
                "viewBox": SANKEY_FRAME.view_box(),
                "preserveAspectRatio": "xMidYMid meet",
                "role": "img",
                for (idx, link) in layout.links.iter().enumerate() {
                    path {
                        key: "link-{idx}",
                        class: "chart__flow",
                        d: "{link.path}",
                        fill: "{link.color}",
                        "fill-opacity": "0.35",
                    }
                }
                for (idx, node) in layout.nodes.iter().enumerate() {
                    rect {
                        key: "node-{idx}",
                        class: "chart__node",
                        x: node.x,
                        y: node.y,
                        width: node.width,
                        height: node.height,
                        fill: "{node.color}",
                    }
                    if node.is_source {
                        text {
                            class: "chart__node-label",
                            x: node.x - 8.0,
                            y: node.y + node.height / 2.0 + 4.0,
                            "text-anchor": "end",
                            {captions[idx].clone()}
                        }
                    } else {
                        text {
                            class: "chart__node-label",
                            x: node.x + node.width + 8.0,
                            y: node.y + node.height / 2.0 + 4.0,
                            "text-anchor": "start",
                            {captions[idx].clone()}
                        }
                    }
                }
            }
        }
    }
}
