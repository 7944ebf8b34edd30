use dioxus::prelude::*;

use crate::core::grid::{DayRecord, Grid, WeekColumn};
use crate::core::interaction::InteractionController;
use crate::core::{format, platform};

/// Stable DOM id for a day cell, used both as the tooltip anchor lookup key
/// and for re-resolving anchors after a resize.
pub fn dom_id(date: &str) -> String {
    format!("cg-day-{date}")
}

#[component]
pub fn CalendarGrid(grid: Grid, controller: Signal<InteractionController>) -> Element {
    let month_labels = grid.month_labels();

    rsx! {
        div { class: "calendar", role: "grid",
            div { class: "calendar__months", aria_hidden: "true",
                for (idx, label) in month_labels.into_iter().enumerate() {
                    span { key: "{idx}", class: "calendar__month",
                        if let Some(label) = label { "{label}" }
                    }
                }
            }

            div { class: "calendar__body",
                div { class: "calendar__weekdays", aria_hidden: "true",
                    span { class: "calendar__weekday", "" }
                    span { class: "calendar__weekday", "Mon" }
                    span { class: "calendar__weekday", "" }
                    span { class: "calendar__weekday", "Wed" }
                    span { class: "calendar__weekday", "" }
                    span { class: "calendar__weekday", "Fri" }
                    span { class: "calendar__weekday", "" }
                }

                div { class: "calendar__weeks",
                    for (week_idx, week) in grid.columns.iter().enumerate() {
                        {render_week(week_idx, week, controller)}
                    }
                }
            }

            div { class: "calendar__legend", aria_hidden: "true",
                span { class: "calendar__legend-label", "Less" }
                for level in 0..=4 {
                    span { key: "{level}", class: "calendar__day calendar__day--level-{level}" }
                }
                span { class: "calendar__legend-label", "More" }
            }
        }
    }
}

fn render_week(week_idx: usize, week: &WeekColumn, controller: Signal<InteractionController>) -> Element {
    rsx! {
        div { key: "{week_idx}", class: "calendar__week", role: "row",
            for (slot_idx, slot) in week.slots.iter().enumerate() {
                if let Some(record) = slot {
                    {render_day(record, controller)}
                } else {
                    span { key: "pad-{slot_idx}", class: "calendar__day calendar__day--empty" }
                }
            }
        }
    }
}

fn render_day(record: &DayRecord, mut controller: Signal<InteractionController>) -> Element {
    let date = record.date.clone();
    let level = record.display_level();
    let cell_id = dom_id(&date);
    let label = format::tooltip_label(record.count, &date);

    let enter_date = date.clone();
    let leave_date = date.clone();
    let tap_date = date.clone();

    rsx! {
        span {
            key: "{date}",
            id: "{cell_id}",
            class: "calendar__day calendar__day--level-{level}",
            role: "gridcell",
            aria_label: "{label}",
            onmouseenter: move |_| {
                if let Some(anchor) = platform::element_anchor(&dom_id(&enter_date)) {
                    controller.with_mut(|ctrl| ctrl.cell_entered(&enter_date, anchor));
                }
            },
            onmouseleave: move |_| {
                controller.with_mut(|ctrl| ctrl.cell_left(&leave_date));
            },
            // Taps must not bubble to the root's outside-interaction
            // handler, or the tooltip they open would close in the same
            // gesture.
            onclick: move |evt| {
                evt.stop_propagation();
                if let Some(anchor) = platform::element_anchor(&dom_id(&tap_date)) {
                    controller.with_mut(|ctrl| ctrl.cell_tapped(&tap_date, anchor));
                }
            },
        }
    }
}
