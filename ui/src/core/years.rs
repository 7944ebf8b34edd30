//! Year-range navigation over the selectable year tokens.

use std::fmt;

/// Which slice of the contribution history is being displayed: the rolling
/// most-recent ~365-day window, or one explicit calendar year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum YearSelector {
    #[default]
    RollingLast,
    Explicit(u16),
}

impl YearSelector {
    /// Parses the routed year token. Anything that isn't a plausible
    /// calendar year falls back to the rolling window.
    pub fn from_token(token: &str) -> Self {
        match token.trim() {
            "" | "last" => Self::RollingLast,
            other => other
                .parse::<u16>()
                .ok()
                .filter(|year| (1000..=9999).contains(year))
                .map(Self::Explicit)
                .unwrap_or(Self::RollingLast),
        }
    }

    /// Query token for the data source request.
    pub fn query_token(&self) -> String {
        match self {
            Self::RollingLast => "last".to_string(),
            Self::Explicit(year) => year.to_string(),
        }
    }

    /// Key under which the data source reports this selection's total.
    pub fn total_key(&self) -> String {
        match self {
            Self::RollingLast => "lastYear".to_string(),
            Self::Explicit(year) => year.to_string(),
        }
    }
}

impl fmt::Display for YearSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RollingLast => write!(f, "Last year"),
            Self::Explicit(year) => write!(f, "{year}"),
        }
    }
}

/// State machine over the selectable year tokens. The available-years list
/// is discovered once from the first successful data response and is
/// immutable afterwards; transitions never perform I/O.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YearNavigator {
    selected: YearSelector,
    /// Explicit years, most recent first.
    years: Vec<u16>,
}

impl YearNavigator {
    pub fn new(selected: YearSelector) -> Self {
        Self {
            selected,
            years: Vec::new(),
        }
    }

    pub fn selected(&self) -> YearSelector {
        self.selected
    }

    pub fn awaiting_years(&self) -> bool {
        self.years.is_empty()
    }

    /// Adopts the discovered year list. Only the first non-empty adoption
    /// sticks; later calls are no-ops.
    pub fn adopt_years(&mut self, mut years: Vec<u16>) {
        if !self.years.is_empty() {
            return;
        }
        years.sort_unstable_by(|a, b| b.cmp(a));
        years.dedup();
        self.years = years;
    }

    /// Steps to the next-older selection. Returns whether the selection
    /// changed, so the caller knows to refetch.
    pub fn prev_year(&mut self) -> bool {
        let next = match self.selected {
            YearSelector::RollingLast => self.years.first().copied(),
            YearSelector::Explicit(year) => self
                .position(year)
                .and_then(|idx| self.years.get(idx + 1))
                .copied(),
        };

        match next {
            Some(year) => {
                self.selected = YearSelector::Explicit(year);
                true
            }
            None => false,
        }
    }

    /// Steps to the next-newer selection, ending at the rolling window.
    pub fn next_year(&mut self) -> bool {
        let next = match self.selected {
            YearSelector::RollingLast => return false,
            YearSelector::Explicit(year) => match self.position(year) {
                // Deep-linked year outside the list: the rolling window is
                // the only selection we can still reach.
                Some(0) | None => YearSelector::RollingLast,
                Some(idx) => match self.years.get(idx - 1) {
                    Some(year) => YearSelector::Explicit(*year),
                    None => YearSelector::RollingLast,
                },
            },
        };

        self.selected = next;
        true
    }

    pub fn can_go_prev(&self) -> bool {
        match self.selected {
            YearSelector::RollingLast => !self.years.is_empty(),
            YearSelector::Explicit(year) => self
                .position(year)
                .map(|idx| idx + 1 < self.years.len())
                .unwrap_or(false),
        }
    }

    pub fn can_go_next(&self) -> bool {
        self.selected != YearSelector::RollingLast
    }

    fn position(&self, year: u16) -> Option<usize> {
        self.years.iter().position(|candidate| *candidate == year)
    }
}
