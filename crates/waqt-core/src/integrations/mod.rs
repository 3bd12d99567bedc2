pub mod aladhan;
pub mod geocode;

pub use aladhan::{method_for_country, AladhanClient, DEFAULT_METHOD};
pub use geocode::{GeocodeClient, Place};
