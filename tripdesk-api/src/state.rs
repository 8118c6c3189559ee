use std::sync::Arc;

use parking_lot::Mutex;
use tripdesk_catalog::OpeningGenerator;
use tripdesk_core::repository::{OpeningRepository, ReservationRepository};
use tripdesk_offer::SearchEngine;
use tripdesk_order::{BookingExecutor, CompetitionGate};
use tripdesk_store::{Config, MemoryOpeningRepository, MemoryReservationRepository};

#[derive(Clone)]
pub struct AppState {
    pub openings: Arc<dyn OpeningRepository>,
    pub reservations: Arc<dyn ReservationRepository>,
    pub executor: Arc<BookingExecutor>,
    pub generator: Arc<Mutex<OpeningGenerator>>,
    pub search: SearchEngine,
}

impl AppState {
    /// Wires in-memory stores and seeds `inventory.initial_openings` openings.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let openings: Arc<dyn OpeningRepository> = Arc::new(MemoryOpeningRepository::new());
        let reservations: Arc<dyn ReservationRepository> = Arc::new(MemoryReservationRepository::new());

        let mut generator = OpeningGenerator::seeded(config.inventory.seed)?;
        let initial = generator.generate(config.inventory.initial_openings);
        openings.insert_many(initial).await?;
        tracing::info!(
            "Seeded {} openings (seed {})",
            config.inventory.initial_openings,
            config.inventory.seed
        );

        let gate = CompetitionGate::new(
            config.booking.competitive_seed,
            config.booking.reject_probability,
        );
        let executor = BookingExecutor::new(openings.clone(), reservations.clone(), gate);

        Ok(Self {
            openings,
            reservations,
            executor: Arc::new(executor),
            generator: Arc::new(Mutex::new(generator)),
            search: SearchEngine::new(config.search.default_limit, config.search.default_days_count),
        })
    }
}
