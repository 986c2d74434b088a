// src/lib.rs
// Diário Cultural - local-first diary of books, films and series
//
// Architecture:
// - Domain-centric: All business rules live in domain entities and invariants
// - Explicit: No implicit behavior, no magic
// - Local-first: Data lives in plain JSON files the user controls
// - Application Layer: terminal menus over the services

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;
pub mod storage;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod app;
pub mod application;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_book,
    validate_film,
    validate_review,
    validate_season,
    validate_series,
    Audiovisual,
    AudiovisualMedia,
    // Book
    Book,
    DomainError,
    DomainResult,
    Elenco,
    // Film
    Film,
    // Shared
    Media,
    MediaId,
    MediaInfo,
    MediaKind,
    // Review
    Review,
    // Series
    Season,
    Series,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult, ErrorKind};

// ============================================================================
// PUBLIC API - Catalog & Persistence
// ============================================================================

pub use catalog::{Catalog, MediaRef};
pub use repositories::{CatalogRepository, FileCatalogRepository};
pub use storage::{resolve_data_dir, DataPaths};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    query_service,
    CatalogService,
    CreateBookRequest,
    CreateFilmRequest,
    CreateReviewRequest,
    CreateSeasonRequest,
    CreateSeriesRequest,
};

// ============================================================================
// PUBLIC API - Startup
// ============================================================================

pub use app::{bootstrap, demo_catalog, initialize, load_catalog, LoadReport};
pub use config::AppConfig;
