use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;
use tripdesk_core::repository::OpeningRepository;
use tripdesk_core::{CoreError, CoreResult, Opening};
use uuid::Uuid;

#[derive(Debug, Clone)]
struct Listing {
    seq: u64,
    opening: Opening,
}

/// In-memory opening inventory.
///
/// Each opening keeps the sequence number it was listed with, so snapshots
/// come back in insertion order and a released hold returns to its old slot.
#[derive(Debug, Default)]
pub struct MemoryOpeningRepository {
    listed: DashMap<Uuid, Listing>,
    held: DashMap<Uuid, u64>,
    next_seq: AtomicU64,
}

impl MemoryOpeningRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn held_count(&self) -> usize {
        self.held.len()
    }
}

#[async_trait]
impl OpeningRepository for MemoryOpeningRepository {
    async fn insert_many(&self, openings: Vec<Opening>) -> CoreResult<()> {
        for opening in openings {
            let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
            self.listed.insert(opening.opening_id, Listing { seq, opening });
        }
        Ok(())
    }

    async fn count(&self) -> CoreResult<usize> {
        Ok(self.listed.len())
    }

    async fn snapshot(&self) -> CoreResult<Vec<Opening>> {
        let mut listings: Vec<Listing> = self.listed.iter().map(|e| e.value().clone()).collect();
        listings.sort_by_key(|l| l.seq);
        Ok(listings.into_iter().map(|l| l.opening).collect())
    }

    async fn hold(&self, opening_id: Uuid) -> CoreResult<Option<Opening>> {
        // remove() is atomic per key: of two racing holds only one gets the value.
        let Some((_, listing)) = self.listed.remove(&opening_id) else {
            return Ok(None);
        };
        self.held.insert(opening_id, listing.seq);
        debug!("Opening held: {}", opening_id);
        Ok(Some(listing.opening))
    }

    async fn commit(&self, opening_id: Uuid) -> CoreResult<()> {
        self.held
            .remove(&opening_id)
            .map(|_| ())
            .ok_or_else(|| CoreError::InternalError(format!("opening {} is not held", opening_id)))
    }

    async fn release(&self, opening: Opening) -> CoreResult<()> {
        let seq = match self.held.remove(&opening.opening_id) {
            Some((_, seq)) => seq,
            None => self.next_seq.fetch_add(1, Ordering::SeqCst),
        };
        debug!("Opening released: {}", opening.opening_id);
        self.listed.insert(opening.opening_id, Listing { seq, opening });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_openings;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_snapshot_keeps_insertion_order() {
        let repo = MemoryOpeningRepository::new();
        let openings = sample_openings(20);
        let ids: Vec<_> = openings.iter().map(|o| o.opening_id).collect();
        repo.insert_many(openings).await.unwrap();

        let snapshot = repo.snapshot().await.unwrap();
        assert_eq!(snapshot.iter().map(|o| o.opening_id).collect::<Vec<_>>(), ids);
        assert_eq!(repo.count().await.unwrap(), 20);
    }

    #[tokio::test]
    async fn test_hold_then_commit_removes_for_good() {
        let repo = MemoryOpeningRepository::new();
        let openings = sample_openings(3);
        let target = openings[1].opening_id;
        repo.insert_many(openings).await.unwrap();

        let held = repo.hold(target).await.unwrap().expect("opening should be listed");
        assert_eq!(held.opening_id, target);
        assert_eq!(repo.count().await.unwrap(), 2);
        assert!(repo.hold(target).await.unwrap().is_none());

        repo.commit(target).await.unwrap();
        assert_eq!(repo.held_count(), 0);
        assert!(repo.commit(target).await.is_err());
    }

    #[tokio::test]
    async fn test_release_restores_original_position() {
        let repo = MemoryOpeningRepository::new();
        let openings = sample_openings(5);
        let ids: Vec<_> = openings.iter().map(|o| o.opening_id).collect();
        repo.insert_many(openings).await.unwrap();

        let held = repo.hold(ids[2]).await.unwrap().unwrap();
        repo.release(held).await.unwrap();

        let snapshot = repo.snapshot().await.unwrap();
        assert_eq!(snapshot.iter().map(|o| o.opening_id).collect::<Vec<_>>(), ids);
        assert_eq!(repo.held_count(), 0);
    }

    #[tokio::test]
    async fn test_hold_missing_returns_none() {
        let repo = MemoryOpeningRepository::new();
        repo.insert_many(sample_openings(2)).await.unwrap();
        assert!(repo.hold(Uuid::new_v4()).await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_holds_single_winner() {
        let repo = Arc::new(MemoryOpeningRepository::new());
        let openings = sample_openings(1);
        let target = openings[0].opening_id;
        repo.insert_many(openings).await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..16 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move { repo.hold(target).await.unwrap().is_some() }));
        }

        let mut winners = 0;
        for h in handles {
            if h.await.unwrap() {
                winners += 1;
            }
        }
        assert_eq!(winners, 1);
    }
}
