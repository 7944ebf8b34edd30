use dioxus::prelude::*;
use time::Weekday;

use crate::components::calendar::{self, CalendarGrid};
use crate::components::tooltip::{CellTooltip, MeasuredTooltip};
use crate::components::year_nav::YearNav;
use crate::core::fetch;
use crate::core::grid::Grid;
use crate::core::interaction::InteractionController;
use crate::core::position::{self, PlacementConstants};
use crate::core::years::{YearNavigator, YearSelector};
use crate::core::{format, platform};

/// The embeddable contributions widget.
///
/// Owns all widget state: the year navigator, the interaction controller,
/// the viewport width, and the measured tooltip size that feeds the
/// two-phase tooltip draw. Data arrives through a `use_resource` fetch that
/// re-runs whenever the selected year token changes.
#[component]
pub fn ContributionsWidget(user: String, year: String, theme: String) -> Element {
    let initial = YearSelector::from_token(&year);
    let mut selected = use_signal(move || initial);
    let mut navigator = use_signal(move || YearNavigator::new(initial));
    let mut controller = use_signal(|| InteractionController::new(platform::classify_device()));
    let mut viewport = use_signal(platform::viewport_width);
    let mut measured = use_signal(|| Option::<MeasuredTooltip>::None);

    let fetch_user = user.clone();
    let data = use_resource(move || {
        let user = fetch_user.clone();
        let selector = selected();
        async move { fetch::fetch_contributions(&user, &selector).await }
    });

    // The first successful response fixes the available-years list for the
    // rest of the session; later responses only carry records.
    use_effect(move || {
        match &*data.read() {
            Some(Ok(payload)) => {
                if navigator.peek().awaiting_years() {
                    let years = payload.available_years();
                    navigator.with_mut(|nav| nav.adopt_years(years));
                }
            }
            Some(Err(_err)) => {
                #[cfg(debug_assertions)]
                println!("[widget] fetch failed: {_err}");
            }
            None => {}
        }
    });

    let grid = use_memo(move || match &*data.read() {
        Some(Ok(payload)) => Grid::from_records(payload.contributions.clone(), Weekday::Sunday),
        _ => Grid::default(),
    });

    let selector = selected();
    let (can_go_prev, can_go_next) = {
        let nav = navigator.read();
        (nav.can_go_prev(), nav.can_go_next())
    };

    // Active cell + measured size → placement. Until a size measured for
    // the current date exists, placement stays `None` and the tooltip
    // renders in its invisible measuring phase.
    let active = controller.read().active().cloned();
    let tooltip_cell = active.as_ref().and_then(|cell| {
        grid.read()
            .record_for(&cell.date)
            .map(|record| (cell.clone(), format::tooltip_label(record.count, &record.date)))
    });
    let placement = tooltip_cell.as_ref().and_then(|(cell, _)| {
        let size = measured()
            .filter(|measurement| measurement.date == cell.date)
            .map(|measurement| measurement.size)?;
        position::place(cell.anchor, size, viewport(), PlacementConstants::default())
    });

    let theme_attr = if theme == "dark" { "dark" } else { "light" };

    let body = match &*data.read() {
        None => rsx! {
            div { class: "widget__status", "Loading contributions…" }
        },
        Some(Err(err)) => rsx! {
            div { class: "widget__status widget__status--error", "{err}" }
        },
        Some(Ok(payload)) => {
            let total_label = format::format_total(payload.total_for(&selector), &selector);
            rsx! {
                if grid.read().is_empty() {
                    div { class: "widget__status", "No contributions recorded for this range." }
                } else {
                    CalendarGrid { grid: grid(), controller }
                }
                YearNav {
                    selected: selector,
                    can_go_prev,
                    can_go_next,
                    total_label,
                    on_prev: move |_| {
                        let changed = navigator.with_mut(|nav| nav.prev_year());
                        if changed {
                            controller.with_mut(|ctrl| ctrl.grid_replaced());
                            measured.set(None);
                            selected.set(navigator.peek().selected());
                        }
                    },
                    on_next: move |_| {
                        let changed = navigator.with_mut(|nav| nav.next_year());
                        if changed {
                            controller.with_mut(|ctrl| ctrl.grid_replaced());
                            measured.set(None);
                            selected.set(navigator.peek().selected());
                        }
                    },
                }
            }
        }
    };

    rsx! {
        section {
            class: "widget",
            "data-theme": theme_attr,
            // Interactions that reach the root were outside both the grid
            // and the tooltip; cell and tooltip clicks stop propagation.
            onclick: move |_| controller.with_mut(|ctrl| ctrl.outside_interaction()),
            onresize: move |_| {
                viewport.set(platform::viewport_width());
                let mode = platform::classify_device();
                controller.with_mut(|ctrl| {
                    ctrl.viewport_resized(mode);
                    ctrl.refresh_anchor(|date| {
                        platform::element_anchor(&calendar::dom_id(date))
                    });
                });
            },

            header { class: "widget__header",
                span { class: "widget__user", "{user}" }
            }

            {body}

            if let Some((cell, label)) = tooltip_cell {
                CellTooltip {
                    key: "{cell.date}",
                    date: cell.date.clone(),
                    label: label.clone(),
                    placement,
                    measured,
                }
            }
        }
    }
}
