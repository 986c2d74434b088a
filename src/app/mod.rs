// src/app/mod.rs
//
// Application start-up: loading, seeding and wiring of the catalog service.

pub mod bootstrap;
pub mod seed;

pub use bootstrap::{bootstrap, initialize, load_catalog, LoadReport};
pub use seed::demo_catalog;
