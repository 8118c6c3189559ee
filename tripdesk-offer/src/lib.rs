pub mod filter;
pub mod ranker;
pub mod search;

pub use filter::{filter_openings, FilterOutcome, Predicate, QueryFilter};
pub use ranker::{proximity_score, StayRanker};
pub use search::SearchEngine;
