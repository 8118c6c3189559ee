pub mod generator;

pub use generator::{GeneratorError, OpeningGenerator};
