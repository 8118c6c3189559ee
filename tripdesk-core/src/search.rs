use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::opening::Opening;

pub const DEFAULT_LIMIT: usize = 10;
pub const DEFAULT_DAYS_COUNT: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseStatus {
    Confirmed,
    NotAvailable,
    NotFound,
    Found,
    Error,
}

/// Structured search. Every field is optional; unset fields apply no predicate.
///
/// `country` stays a raw string so an unrecognized value can be reported back
/// instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Maximum nightly rate. The agent's prompt calls this `rate`.
    #[serde(default, alias = "rate", skip_serializing_if = "Option::is_none")]
    pub room_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    /// Target stay length, used for ranking only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_count: Option<u32>,
}

impl SearchRequest {
    pub fn limit_or(&self, default: usize) -> usize {
        self.limit.unwrap_or(default)
    }

    pub fn days_count_or(&self, default: u32) -> u32 {
        self.days_count.unwrap_or(default)
    }
}

/// Echo of the predicates that were actually applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub status: ResponseStatus,
    pub results_count: usize,
    pub search_params: SearchParams,
    pub results: Vec<Opening>,
}

impl SearchResponse {
    pub fn found(search_params: SearchParams, results: Vec<Opening>) -> Self {
        Self {
            status: ResponseStatus::Found,
            results_count: results.len(),
            search_params,
            results,
        }
    }

    pub fn not_available(search_params: SearchParams) -> Self {
        Self {
            status: ResponseStatus::NotAvailable,
            results_count: 0,
            search_params,
            results: Vec::new(),
        }
    }
}
