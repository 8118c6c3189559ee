pub mod executor;
pub mod gate;

pub use executor::{BookingError, BookingExecutor};
pub use gate::CompetitionGate;
