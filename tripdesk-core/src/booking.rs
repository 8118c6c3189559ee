use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tripdesk_shared::{Country, Masked};
use uuid::Uuid;

use crate::opening::Opening;
use crate::{CoreError, CoreResult};

/// Guest profile attached to a booking request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default = "new_user_id")]
    pub user_id: String,
    pub username: String,
    pub home_country: Country,
    pub phone_number: Masked<String>,
    pub email: Masked<String>,
}

fn new_user_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Kept as text so an id that is not a UUID is reported as not found
    /// instead of failing deserialization.
    pub opening_id: String,
    pub user: UserProfile,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Informational; the reservation keeps the opening's own dates too.
    #[serde(default)]
    pub days_count: Option<u32>,
    pub people_count: u32,
}

/// A confirmed booking. Holds the opening by value, detached from inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub reservation_id: Uuid,
    pub trip_opening: Opening,
    pub reservation_people_count: u32,
    pub user: String,
    pub home_country: Country,
    pub phone_number: Masked<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Reservation {
    /// Builds a reservation around an opening already taken out of inventory.
    ///
    /// Fails when the request carries no guests or an inverted date range; the
    /// caller still owns `opening` in that case and must release it.
    pub fn confirm(opening: &Opening, request: &BookingRequest) -> CoreResult<Self> {
        if request.people_count == 0 {
            return Err(CoreError::ValidationError(
                "people_count must be at least 1".to_string(),
            ));
        }
        if request.end_date < request.start_date {
            return Err(CoreError::ValidationError(format!(
                "end_date {} is before start_date {}",
                request.end_date, request.start_date
            )));
        }

        Ok(Self {
            reservation_id: Uuid::new_v4(),
            trip_opening: Opening {
                ranking_score: None,
                ..opening.clone()
            },
            reservation_people_count: request.people_count,
            user: request.user.username.clone(),
            home_country: request.user.home_country,
            phone_number: request.user.phone_number.clone(),
            start_date: request.start_date,
            end_date: request.end_date,
        })
    }
}
