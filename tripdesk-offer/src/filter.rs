use chrono::NaiveDate;
use tripdesk_core::{Opening, SearchParams, SearchRequest};
use tripdesk_shared::Country;

/// A single search predicate. Predicates combine with AND.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Country(Country),
    StartsOnOrAfter(NaiveDate),
    EndsOnOrBefore(NaiveDate),
    MaxDayRate(f64),
}

impl Predicate {
    pub fn matches(&self, opening: &Opening) -> bool {
        match self {
            Predicate::Country(country) => opening.country == *country,
            Predicate::StartsOnOrAfter(bound) => opening.start_date >= *bound,
            Predicate::EndsOnOrBefore(bound) => opening.end_date <= *bound,
            Predicate::MaxDayRate(rate) => opening.day_rate <= *rate,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome {
    Matched {
        params: SearchParams,
        openings: Vec<Opening>,
    },
    /// The request named a country we do not list. Nothing else was evaluated.
    UnknownCountry { params: SearchParams },
}

/// Narrows an inventory snapshot to the openings a request asks for.
#[derive(Debug, Clone, Default)]
pub struct QueryFilter {
    predicates: Vec<Predicate>,
    params: SearchParams,
}

impl QueryFilter {
    /// Builds the predicate list, or reports the unknown country up front.
    pub fn from_request(request: &SearchRequest) -> Result<Self, SearchParams> {
        let mut filter = Self::default();

        if let Some(raw) = &request.country {
            let country: Country = raw.parse().map_err(|_| SearchParams {
                country: Some(raw.clone()),
                ..Default::default()
            })?;
            filter.params.country = Some(raw.clone());
            filter.predicates.push(Predicate::Country(country));
        }
        if let Some(start) = request.start_date {
            filter.params.start_date = Some(start);
            filter.predicates.push(Predicate::StartsOnOrAfter(start));
        }
        if let Some(end) = request.end_date {
            filter.params.end_date = Some(end);
            filter.predicates.push(Predicate::EndsOnOrBefore(end));
        }
        if let Some(rate) = request.room_rate {
            filter.params.rate = Some(rate);
            filter.predicates.push(Predicate::MaxDayRate(rate));
        }

        Ok(filter)
    }

    pub fn matches(&self, opening: &Opening) -> bool {
        self.predicates.iter().all(|p| p.matches(opening))
    }

    /// Keeps matching openings in their original order.
    pub fn apply(self, inventory: Vec<Opening>) -> FilterOutcome {
        let openings = inventory.into_iter().filter(|o| self.matches(o)).collect();
        FilterOutcome::Matched {
            params: self.params,
            openings,
        }
    }
}

/// Full filter step: parse the request, then scan the snapshot.
pub fn filter_openings(request: &SearchRequest, inventory: Vec<Opening>) -> FilterOutcome {
    match QueryFilter::from_request(request) {
        Ok(filter) => filter.apply(inventory),
        Err(params) => FilterOutcome::UnknownCountry { params },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::opening;
    use test_case::test_case;

    fn inventory() -> Vec<Opening> {
        vec![
            opening(Country::Japan, "2024-03-01", "2024-03-04", 250.0),
            opening(Country::Japan, "2024-06-10", "2024-06-20", 900.0),
            opening(Country::France, "2024-03-05", "2024-03-08", 400.0),
            opening(Country::Brazil, "2024-01-15", "2024-02-10", 1600.0),
        ]
    }

    fn matched(outcome: FilterOutcome) -> (SearchParams, Vec<Opening>) {
        match outcome {
            FilterOutcome::Matched { params, openings } => (params, openings),
            other => panic!("expected a match, got {:?}", other),
        }
    }

    #[test_case(SearchRequest::default(), 4 ; "no predicates")]
    #[test_case(SearchRequest { country: Some("Japan".into()), ..Default::default() }, 2 ; "country")]
    #[test_case(SearchRequest { start_date: "2024-03-01".parse().ok(), ..Default::default() }, 3 ; "start bound is inclusive")]
    #[test_case(SearchRequest { end_date: "2024-03-08".parse().ok(), ..Default::default() }, 3 ; "end bound is inclusive")]
    #[test_case(SearchRequest { room_rate: Some(400.0), ..Default::default() }, 2 ; "rate bound is inclusive")]
    #[test_case(SearchRequest { country: Some("Japan".into()), room_rate: Some(500.0), ..Default::default() }, 1 ; "country and rate")]
    #[test_case(SearchRequest { country: Some("Kenya".into()), ..Default::default() }, 0 ; "known country without stock")]
    fn test_filter_counts(request: SearchRequest, expected: usize) {
        let (_, openings) = matched(filter_openings(&request, inventory()));
        assert_eq!(openings.len(), expected);
    }

    #[test]
    fn test_unknown_country_short_circuits() {
        let request = SearchRequest {
            country: Some("Atlantis".to_string()),
            start_date: "2024-01-01".parse().ok(),
            room_rate: Some(10_000.0),
            ..Default::default()
        };
        match filter_openings(&request, inventory()) {
            FilterOutcome::UnknownCountry { params } => {
                assert_eq!(params.country.as_deref(), Some("Atlantis"));
                assert_eq!(params.start_date, None);
                assert_eq!(params.rate, None);
            }
            other => panic!("expected UnknownCountry, got {:?}", other),
        }
    }

    #[test]
    fn test_params_echo_applied_predicates_only() {
        let request = SearchRequest {
            country: Some("France".to_string()),
            room_rate: Some(450.0),
            limit: Some(3),
            ..Default::default()
        };
        let (params, openings) = matched(filter_openings(&request, inventory()));
        assert_eq!(params.country.as_deref(), Some("France"));
        assert_eq!(params.rate, Some(450.0));
        assert_eq!(params.start_date, None);
        assert_eq!(openings.len(), 1);
        assert_eq!(openings[0].country, Country::France);
    }

    #[test]
    fn test_keeps_snapshot_order() {
        let inv = inventory();
        let expected: Vec<_> = inv.iter().map(|o| o.opening_id).collect();
        let (_, openings) = matched(filter_openings(&SearchRequest::default(), inv));
        let got: Vec<_> = openings.iter().map(|o| o.opening_id).collect();
        assert_eq!(got, expected);
    }
}
