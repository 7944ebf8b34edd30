//! Hover and touch interaction state for the calendar cells.
//!
//! One controller owns the "currently active cell". The device capability
//! is classified once per session (and re-checked on resize), then a single
//! interaction strategy applies: continuous hover on pointer devices,
//! latched taps on touch-only devices.

use crate::core::position::AnchorRect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceMode {
    PointerCapable,
    TouchOnly,
}

/// The cell currently producing a tooltip, with the screen rectangle the
/// tooltip anchors to. At most one exists at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveCell {
    pub date: String,
    pub anchor: AnchorRect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InteractionController {
    mode: DeviceMode,
    active: Option<ActiveCell>,
}

impl InteractionController {
    pub fn new(mode: DeviceMode) -> Self {
        Self { mode, active: None }
    }

    pub fn mode(&self) -> DeviceMode {
        self.mode
    }

    pub fn active(&self) -> Option<&ActiveCell> {
        self.active.as_ref()
    }

    /// Pointer mode: hovering a cell activates it immediately. Ignored on
    /// touch-only devices, where enter events are synthetic.
    pub fn cell_entered(&mut self, date: &str, anchor: AnchorRect) {
        if self.mode != DeviceMode::PointerCapable {
            return;
        }
        self.active = Some(ActiveCell {
            date: date.to_string(),
            anchor,
        });
    }

    /// Pointer mode: leaving the active cell clears it, no latching.
    pub fn cell_left(&mut self, date: &str) {
        if self.mode != DeviceMode::PointerCapable {
            return;
        }
        if self.active.as_ref().is_some_and(|cell| cell.date == date) {
            self.active = None;
        }
    }

    /// Touch mode: first tap latches, tapping the active cell dismisses,
    /// tapping another cell replaces it directly with no intermediate
    /// cleared state. Ignored on pointer devices, where hover already won.
    pub fn cell_tapped(&mut self, date: &str, anchor: AnchorRect) {
        if self.mode != DeviceMode::TouchOnly {
            return;
        }
        if self.active.as_ref().is_some_and(|cell| cell.date == date) {
            self.active = None;
        } else {
            self.active = Some(ActiveCell {
                date: date.to_string(),
                anchor,
            });
        }
    }

    /// Any interaction outside the grid and the open tooltip dismisses it.
    pub fn outside_interaction(&mut self) {
        self.active = None;
    }

    /// A new grid replaced the old one; the anchor is stale.
    pub fn grid_replaced(&mut self) {
        self.active = None;
    }

    /// Re-classification after a viewport resize. A mode flip dismisses the
    /// tooltip; otherwise the active cell survives and only its placement
    /// gets recomputed.
    pub fn viewport_resized(&mut self, mode: DeviceMode) {
        if self.mode != mode {
            self.mode = mode;
            self.active = None;
        }
    }

    /// Re-resolves the active anchor after layout moved, clearing when the
    /// anchor element no longer exists.
    pub fn refresh_anchor(&mut self, lookup: impl Fn(&str) -> Option<AnchorRect>) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        match lookup(&active.date) {
            Some(anchor) => active.anchor = anchor,
            None => self.active = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor(left: f64) -> AnchorRect {
        AnchorRect {
            top: 40.0,
            left,
            width: 10.0,
            height: 10.0,
        }
    }

    #[test]
    fn pointer_mode_tracks_hover() {
        let mut controller = InteractionController::new(DeviceMode::PointerCapable);

        controller.cell_entered("2025-03-01", anchor(10.0));
        assert_eq!(controller.active().map(|c| c.date.as_str()), Some("2025-03-01"));

        controller.cell_left("2025-03-01");
        assert!(controller.active().is_none());
    }

    #[test]
    fn pointer_mode_ignores_stale_leave() {
        let mut controller = InteractionController::new(DeviceMode::PointerCapable);

        controller.cell_entered("2025-03-02", anchor(20.0));
        controller.cell_left("2025-03-01");
        assert_eq!(controller.active().map(|c| c.date.as_str()), Some("2025-03-02"));
    }

    #[test]
    fn touch_mode_latches_and_toggles() {
        let mut controller = InteractionController::new(DeviceMode::TouchOnly);

        controller.cell_tapped("2025-03-01", anchor(10.0));
        assert_eq!(controller.active().map(|c| c.date.as_str()), Some("2025-03-01"));

        // Tapping the active cell dismisses it.
        controller.cell_tapped("2025-03-01", anchor(10.0));
        assert!(controller.active().is_none());
    }

    #[test]
    fn touch_mode_replaces_directly() {
        let mut controller = InteractionController::new(DeviceMode::TouchOnly);

        controller.cell_tapped("2025-03-01", anchor(10.0));
        controller.cell_tapped("2025-03-02", anchor(20.0));

        let active = controller.active().expect("second cell stays active");
        assert_eq!(active.date, "2025-03-02");
        assert_eq!(active.anchor, anchor(20.0));
    }

    #[test]
    fn touch_mode_ignores_hover_events() {
        let mut controller = InteractionController::new(DeviceMode::TouchOnly);

        controller.cell_entered("2025-03-01", anchor(10.0));
        assert!(controller.active().is_none());

        controller.cell_tapped("2025-03-01", anchor(10.0));
        controller.cell_left("2025-03-01");
        assert!(controller.active().is_some());
    }

    #[test]
    fn outside_interaction_dismisses() {
        let mut controller = InteractionController::new(DeviceMode::TouchOnly);
        controller.cell_tapped("2025-03-01", anchor(10.0));

        controller.outside_interaction();
        assert!(controller.active().is_none());
    }

    #[test]
    fn mode_flip_on_resize_dismisses() {
        let mut controller = InteractionController::new(DeviceMode::TouchOnly);
        controller.cell_tapped("2025-03-01", anchor(10.0));

        controller.viewport_resized(DeviceMode::TouchOnly);
        assert!(controller.active().is_some());

        controller.viewport_resized(DeviceMode::PointerCapable);
        assert!(controller.active().is_none());
        assert_eq!(controller.mode(), DeviceMode::PointerCapable);
    }

    #[test]
    fn anchor_refresh_updates_or_clears() {
        let mut controller = InteractionController::new(DeviceMode::TouchOnly);
        controller.cell_tapped("2025-03-01", anchor(10.0));

        controller.refresh_anchor(|_| Some(anchor(99.0)));
        assert_eq!(controller.active().map(|c| c.anchor), Some(anchor(99.0)));

        // Anchor element gone: suppress instead of using stale coordinates.
        controller.refresh_anchor(|_| None);
        assert!(controller.active().is_none());
    }
}
