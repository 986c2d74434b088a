// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - Load-all / save-all, one file per media kind
// - Invariants are checked on load only to reject incompatible files

pub mod catalog_repository;

pub use catalog_repository::{CatalogRepository, FileCatalogRepository};
