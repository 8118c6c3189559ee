use tripdesk_core::search::{DEFAULT_DAYS_COUNT, DEFAULT_LIMIT};
use tripdesk_core::{Opening, SearchRequest, SearchResponse};

use crate::filter::{filter_openings, FilterOutcome};
use crate::ranker::StayRanker;

/// Filter → rank → truncate over an inventory snapshot.
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine {
    default_limit: usize,
    default_days_count: u32,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT, DEFAULT_DAYS_COUNT)
    }
}

impl SearchEngine {
    pub fn new(default_limit: usize, default_days_count: u32) -> Self {
        Self {
            default_limit,
            default_days_count,
        }
    }

    pub fn search(&self, request: &SearchRequest, inventory: Vec<Opening>) -> SearchResponse {
        let (mut params, mut openings) = match filter_openings(request, inventory) {
            FilterOutcome::Matched { params, openings } => (params, openings),
            FilterOutcome::UnknownCountry { params } => {
                tracing::debug!(country = ?params.country, "Unknown country in search");
                return SearchResponse::not_available(params);
            }
        };

        let target_days = request.days_count_or(self.default_days_count);
        params.days_count = Some(target_days);
        StayRanker::new(target_days).rank(&mut openings);

        // A limit of zero means no truncation.
        let limit = request.limit_or(self.default_limit);
        if limit > 0 {
            openings.truncate(limit);
        }

        tracing::debug!("Found {} results", openings.len());
        SearchResponse::found(params, openings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::opening_with_stay;
    use tripdesk_core::ResponseStatus;
    use tripdesk_shared::Country;

    fn inventory(n: usize) -> Vec<Opening> {
        (0..n)
            .map(|i| opening_with_stay(Country::ALL[i % 3], 2 + (i as i64 % 20)))
            .collect()
    }

    #[test]
    fn test_no_predicates_returns_min_of_size_and_limit() {
        let engine = SearchEngine::default();
        for (size, limit) in [(3, None), (25, None), (25, Some(5)), (4, Some(50))] {
            let request = SearchRequest {
                limit,
                ..Default::default()
            };
            let response = engine.search(&request, inventory(size));
            let expected = size.min(limit.unwrap_or(DEFAULT_LIMIT));
            assert_eq!(response.results_count, expected);
            assert_eq!(response.results.len(), expected);
            assert_eq!(response.status, ResponseStatus::Found);
        }
    }

    #[test]
    fn test_zero_limit_disables_truncation() {
        let request = SearchRequest {
            limit: Some(0),
            ..Default::default()
        };
        let response = SearchEngine::default().search(&request, inventory(40));
        assert_eq!(response.results_count, 40);
    }

    #[test]
    fn test_unknown_country_is_not_available() {
        let request = SearchRequest {
            country: Some("Narnia".to_string()),
            days_count: Some(4),
            limit: Some(0),
            ..Default::default()
        };
        let response = SearchEngine::default().search(&request, inventory(10));
        assert_eq!(response.status, ResponseStatus::NotAvailable);
        assert_eq!(response.results_count, 0);
        assert!(response.results.is_empty());
        assert_eq!(response.search_params.days_count, None);
    }

    #[test]
    fn test_japan_scenario_ranks_longer_stay_first() {
        let a = opening_with_stay(Country::Japan, 3);
        let b = opening_with_stay(Country::Japan, 10);
        let other = opening_with_stay(Country::France, 3);
        let request = SearchRequest {
            country: Some("Japan".to_string()),
            days_count: Some(3),
            limit: Some(10),
            ..Default::default()
        };

        let response = SearchEngine::default().search(&request, vec![a.clone(), b.clone(), other]);

        assert_eq!(response.results_count, 2);
        assert_eq!(response.results[0].opening_id, b.opening_id);
        assert_eq!(response.results[1].opening_id, a.opening_id);
        assert_eq!(response.results[1].ranking_score, Some(0.0));
        assert_eq!(response.search_params.days_count, Some(3));
    }

    #[test]
    fn test_default_target_is_two_days() {
        let response =
            SearchEngine::default().search(&SearchRequest::default(), vec![opening_with_stay(Country::Japan, 2)]);
        assert_eq!(response.search_params.days_count, Some(2));
        assert_eq!(response.results[0].ranking_score, Some(0.0));
    }
}
