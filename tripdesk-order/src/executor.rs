use std::sync::Arc;
use tracing::{info, warn};
use tripdesk_core::repository::{OpeningRepository, ReservationRepository};
use tripdesk_core::{BookingRequest, CoreError, Reservation};
use uuid::Uuid;

use crate::gate::CompetitionGate;

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("could not find opening: {0}")]
    OpeningNotFound(String),

    #[error("opening is no longer available")]
    NotAvailable,

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Turns openings into reservations.
///
/// Booking is hold → confirm → commit → save. Until the reservation is
/// stored, any failure releases the opening back into inventory, so a failed
/// booking never leaves a reservation behind or an opening stranded.
pub struct BookingExecutor {
    openings: Arc<dyn OpeningRepository>,
    reservations: Arc<dyn ReservationRepository>,
    gate: CompetitionGate,
}

impl BookingExecutor {
    pub fn new(
        openings: Arc<dyn OpeningRepository>,
        reservations: Arc<dyn ReservationRepository>,
        gate: CompetitionGate,
    ) -> Self {
        Self {
            openings,
            reservations,
            gate,
        }
    }

    pub async fn book(&self, request: &BookingRequest) -> Result<Reservation, BookingError> {
        // Inventory ids are UUIDs; anything else cannot be listed.
        let opening_id = Uuid::parse_str(&request.opening_id)
            .map_err(|_| BookingError::OpeningNotFound(request.opening_id.clone()))?;

        // 1. Hold
        let opening = self
            .openings
            .hold(opening_id)
            .await?
            .ok_or_else(|| BookingError::OpeningNotFound(request.opening_id.clone()))?;

        // 2. Confirm
        let reservation = match Reservation::confirm(&opening, request) {
            Ok(r) => r,
            Err(e) => {
                warn!("Booking rejected for opening {}: {}", opening_id, e);
                self.openings.release(opening).await?;
                return Err(e.into());
            }
        };

        // 3. Commit
        if let Err(e) = self.openings.commit(opening_id).await {
            warn!("Failed to commit opening {}: {}", opening_id, e);
            self.openings.release(opening).await?;
            return Err(e.into());
        }

        // 4. Save
        if let Err(e) = self.reservations.save(reservation.clone()).await {
            warn!("Failed to store reservation for opening {}: {}", opening_id, e);
            self.openings.release(opening).await?;
            return Err(e.into());
        }

        info!(
            "Booking confirmed: reservation {} for opening {} (user {})",
            reservation.reservation_id, opening_id, reservation.user
        );
        Ok(reservation)
    }

    /// Like `book`, but a seeded draw may turn the request away first.
    /// A rejected request never touches inventory.
    pub async fn competitive_book(&self, request: &BookingRequest) -> Result<Reservation, BookingError> {
        if !self.gate.admit() {
            info!("Competitive booking lost for opening {}", request.opening_id);
            return Err(BookingError::NotAvailable);
        }
        self.book(request).await
    }
}
