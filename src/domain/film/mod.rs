pub mod entity;
pub mod invariants;

pub use entity::Film;
pub use invariants::validate_film;
