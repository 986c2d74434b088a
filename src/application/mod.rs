// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Terminal front end over the catalog services
// - Reads and validates user input, prints DTOs and error responses
// - Never touches domain state except through services

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod menu;
pub mod prompt;
pub mod state;

pub use dto::{MediaSummaryDto, ReviewDto};
pub use error_handling::{ErrorResponse, ErrorType};
pub use menu::run_menu;
pub use prompt::{Console, LineSource, RustylineSource, ScriptedInput, UiError, UiResult};
pub use state::AppState;
