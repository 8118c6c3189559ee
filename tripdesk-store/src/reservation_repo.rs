use async_trait::async_trait;
use dashmap::DashMap;
use tripdesk_core::repository::ReservationRepository;
use tripdesk_core::{CoreError, CoreResult, Reservation};
use uuid::Uuid;

/// In-memory reservation ledger keyed by reservation id. Entries are never removed.
#[derive(Debug, Default)]
pub struct MemoryReservationRepository {
    reservations: DashMap<Uuid, Reservation>,
}

impl MemoryReservationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReservationRepository for MemoryReservationRepository {
    async fn save(&self, reservation: Reservation) -> CoreResult<()> {
        let id = reservation.reservation_id;
        if self.reservations.contains_key(&id) {
            return Err(CoreError::InternalError(format!("duplicate reservation id {}", id)));
        }
        self.reservations.insert(id, reservation);
        Ok(())
    }

    async fn get(&self, reservation_id: Uuid) -> CoreResult<Option<Reservation>> {
        Ok(self.reservations.get(&reservation_id).map(|r| r.value().clone()))
    }

    async fn list_for_user(&self, user: &str) -> CoreResult<Vec<Reservation>> {
        Ok(self
            .reservations
            .iter()
            .filter(|r| r.user == user)
            .map(|r| r.value().clone())
            .collect())
    }

    async fn count(&self) -> CoreResult<usize> {
        Ok(self.reservations.len())
    }
}
