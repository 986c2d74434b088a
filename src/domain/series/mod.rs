pub mod entity;
pub mod invariants;
pub mod season;

pub use entity::Series;
pub use invariants::{validate_season, validate_series};
pub use season::Season;
