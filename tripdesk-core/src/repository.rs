use async_trait::async_trait;
use uuid::Uuid;

use crate::booking::Reservation;
use crate::opening::Opening;
use crate::CoreResult;

/// Repository trait for the opening inventory.
///
/// Booking goes through a hold/commit/release cycle: `hold` detaches the
/// opening so no other caller can see or take it, then the caller either
/// `commit`s (opening is gone for good) or `release`s it back in place.
#[async_trait]
pub trait OpeningRepository: Send + Sync {
    async fn insert_many(&self, openings: Vec<Opening>) -> CoreResult<()>;

    async fn count(&self) -> CoreResult<usize>;

    /// All listed openings, in insertion order.
    async fn snapshot(&self) -> CoreResult<Vec<Opening>>;

    /// Atomically removes the opening. `None` when absent or already held.
    async fn hold(&self, opening_id: Uuid) -> CoreResult<Option<Opening>>;

    async fn commit(&self, opening_id: Uuid) -> CoreResult<()>;

    /// Relists an opening. A held opening returns to its old position; an
    /// already committed one is appended.
    async fn release(&self, opening: Opening) -> CoreResult<()>;
}

/// Repository trait for confirmed reservations
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    async fn save(&self, reservation: Reservation) -> CoreResult<()>;

    async fn get(&self, reservation_id: Uuid) -> CoreResult<Option<Reservation>>;

    async fn list_for_user(&self, user: &str) -> CoreResult<Vec<Reservation>>;

    async fn count(&self) -> CoreResult<usize>;
}
