use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tripdesk_shared::{Country, HotelCompany, LodgingClass};
use uuid::Uuid;

/// A bookable lodging slot. Lives in inventory until a booking detaches it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    pub opening_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub country: Country,
    pub lodging_class: LodgingClass,
    pub day_rate: f64,
    pub hotel_company: HotelCompany,
    /// Set on search results only; the stored copy never carries a score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranking_score: Option<f64>,
}

impl Opening {
    /// Length of stay in whole days.
    pub fn days_count(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}
