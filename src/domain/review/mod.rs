pub mod entity;
pub mod invariants;

pub use entity::{Review, FORMATO_DATA_AVALIACAO, FORMATO_DATA_CONSUMO, NOTA_MAXIMA, NOTA_MINIMA};
pub use invariants::{validate_data_consumo, validate_nota, validate_review};
