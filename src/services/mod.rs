// src/services/mod.rs
//
// Services Module - Query engine and mutation service

pub mod audiovisual_service;
pub mod catalog_service;
pub mod query_service;
pub mod review_service;
pub mod series_service;

// Re-export all services and their types
pub use catalog_service::{
    CatalogService,
    CreateBookRequest,
    CreateFilmRequest,
    CreateSeriesRequest,
};

pub use review_service::CreateReviewRequest;

pub use series_service::CreateSeasonRequest;
