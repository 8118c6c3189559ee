pub mod catalog;
pub mod pii;

pub use catalog::{Country, HotelCompany, LodgingClass, UnknownVariant};
pub use pii::Masked;
