pub mod app_config;
pub mod opening_repo;
pub mod reservation_repo;

pub use app_config::Config;
pub use opening_repo::MemoryOpeningRepository;
pub use reservation_repo::MemoryReservationRepository;
