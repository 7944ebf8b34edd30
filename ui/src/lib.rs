//! Shared UI crate for Contribgrid. Core calendar logic and the embeddable
//! widget components live here.

pub mod core;
pub mod views;

pub mod components {
    // Calendar grid markup (components/calendar.rs)
    pub mod calendar;
    pub use calendar::CalendarGrid;

    // Two-phase measured tooltip (components/tooltip.rs)
    pub mod tooltip;
    pub use tooltip::CellTooltip;
    pub use tooltip::MeasuredTooltip;

    // Year range navigation row (components/year_nav.rs)
    pub mod year_nav;
    pub use year_nav::YearNav;
}
