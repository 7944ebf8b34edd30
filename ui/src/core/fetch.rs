//! Client for the remote contributions data source.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

use crate::core::grid::DayRecord;
use crate::core::years::YearSelector;

const API_BASE: &str = "https://github-contributions-api.jogruber.de/v4";

static CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Decoded response: per-selection totals keyed by "lastYear" or the
/// explicit year string, plus the flat list of day records.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContributionData {
    pub total: HashMap<String, u64>,
    pub contributions: Vec<DayRecord>,
}

impl ContributionData {
    pub fn total_for(&self, selector: &YearSelector) -> u64 {
        self.total.get(&selector.total_key()).copied().unwrap_or(0)
    }

    /// Explicit years present in the totals map, most recent first. This is
    /// the session's available-years list; it is read off the first
    /// successful response only.
    pub fn available_years(&self) -> Vec<u16> {
        let mut years: Vec<u16> = self
            .total
            .keys()
            .filter_map(|key| key.parse::<u16>().ok())
            .collect();
        years.sort_unstable_by(|a, b| b.cmp(a));
        years
    }
}

/// Classified fetch failures; every variant carries a message the view can
/// show verbatim. The core never inspects transport status beyond this.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("no contribution data found for that user")]
    UnknownUser,
    #[error("the contributions service answered with status {0}")]
    Upstream(u16),
    #[error("couldn't reach the contributions service: {0}")]
    Network(String),
    #[error("unexpected response from the contributions service: {0}")]
    Decode(String),
}

/// Fetches the contribution history for one user and year selection.
pub async fn fetch_contributions(
    user: &str,
    selector: &YearSelector,
) -> Result<ContributionData, FetchError> {
    let url = format!("{API_BASE}/{user}?y={}", selector.query_token());

    let response = CLIENT
        .get(&url)
        .send()
        .await
        .map_err(|err| FetchError::Network(err.to_string()))?;

    match response.status().as_u16() {
        200 => response
            .json::<ContributionData>()
            .await
            .map_err(|err| FetchError::Decode(err.to_string())),
        404 => Err(FetchError::UnknownUser),
        status => Err(FetchError::Upstream(status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixture() -> ContributionData {
        serde_json::from_value(json!({
            "total": {
                "lastYear": 812,
                "2024": 1204,
                "2023": 377
            },
            "contributions": [
                { "date": "2024-06-01", "count": 4, "level": 2 },
                { "date": "2024-06-02", "count": 0, "level": 0 }
            ]
        }))
        .expect("fixture decodes")
    }

    #[test]
    fn decodes_the_wire_contract() {
        let data = fixture();
        assert_eq!(data.contributions.len(), 2);
        assert_eq!(data.contributions[0].count, 4);
        assert_eq!(data.contributions[0].level, 2);
    }

    #[test]
    fn totals_resolve_per_selector() {
        let data = fixture();
        assert_eq!(data.total_for(&YearSelector::RollingLast), 812);
        assert_eq!(data.total_for(&YearSelector::Explicit(2024)), 1204);
        assert_eq!(data.total_for(&YearSelector::Explicit(1990)), 0);
    }

    #[test]
    fn available_years_are_numeric_keys_descending() {
        let data = fixture();
        assert_eq!(data.available_years(), vec![2024, 2023]);
    }
}
