pub mod entity;
pub mod invariants;

pub use entity::{Media, MediaId, MediaInfo, MediaKind};
pub use invariants::{validate_media_info, validate_titulo};
