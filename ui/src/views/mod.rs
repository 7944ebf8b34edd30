mod widget;
pub use widget::ContributionsWidget;
