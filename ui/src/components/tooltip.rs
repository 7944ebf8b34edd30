use dioxus::prelude::*;

use crate::core::position::{TooltipPlacement, TooltipSize};

/// A measured tooltip size, tagged with the date it was measured for so a
/// stale measurement is never applied to a different cell's content.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredTooltip {
    pub date: String,
    pub size: TooltipSize,
}

/// The cell tooltip, drawn in two phases: until a size measured for this
/// date exists there is no placement, so the tooltip renders invisibly at
/// the viewport origin and reports its size from `onmounted`; the caller
/// then computes a placement and the second render positions it for real.
///
/// Callers key this component by date so switching cells remounts it and
/// re-measures the new content.
#[component]
pub fn CellTooltip(
    date: String,
    label: String,
    placement: Option<TooltipPlacement>,
    measured: Signal<Option<MeasuredTooltip>>,
) -> Element {
    let style = match placement {
        // The unflipped tooltip hangs its bottom edge from `top`.
        Some(p) if p.flipped => format!("top: {:.1}px; left: {:.1}px;", p.top, p.left),
        Some(p) => format!(
            "top: {:.1}px; left: {:.1}px; transform: translateY(-100%);",
            p.top, p.left
        ),
        None => "visibility: hidden; top: 0; left: 0;".to_string(),
    };
    let class = match placement {
        Some(p) if p.flipped => "tooltip tooltip--below",
        _ => "tooltip",
    };
    let arrow_style = placement
        .map(|p| format!("left: calc(50% + {:.1}px);", p.arrow_offset))
        .unwrap_or_default();

    let measure_date = date.clone();

    rsx! {
        div {
            class: "{class}",
            role: "tooltip",
            style: "{style}",
            // A tap on the open tooltip is not an outside interaction.
            onclick: move |evt| evt.stop_propagation(),
            onmounted: move |evt| {
                let date = measure_date.clone();
                let mut measured = measured;
                async move {
                    if let Ok(rect) = evt.data().get_client_rect().await {
                        measured.set(Some(MeasuredTooltip {
                            date,
                            size: TooltipSize {
                                width: rect.size.width,
                                height: rect.size.height,
                            },
                        }));
                    }
                }
            },
            span { class: "tooltip__label", "{label}" }
            span { class: "tooltip__arrow", style: "{arrow_style}", aria_hidden: "true" }
        }
    }
}
