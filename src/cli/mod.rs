//! # CLI Module
//!
//! This module provides the command-line interface layer for trackscout. The
//! main job of the binary is to run the HTTP facade, but the same catalog
//! operations are available directly from the terminal, which is handy for
//! checking credentials and trying out tuning options.
//!
//! ## Commands
//!
//! ### Server
//!
//! - [`serve`] - Starts the HTTP facade on `SERVER_ADDRESS`
//!
//! ### Catalog Queries
//!
//! - [`search`] - Track search, most popular first
//! - [`recommend`] - Recommendations seeded by one track, with `key=value` tuning options
//! - [`features`] - Audio features of a single track
//!
//! ## Architecture Design
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (Session + Catalog Gateway)
//!     ↓
//! Spotify Layer (CatalogApi over HTTPS)
//! ```
//!
//! Catalog commands shape their results with [`crate::shaper`] exactly like
//! the HTTP handlers do and render them as tables.
//!
//! ## Usage Patterns
//!
//! ```bash
//! trackscout serve
//! trackscout search "blue monday" --limit 3
//! trackscout recommend 4uLU6hMCjMI75M1A2tKUQC --option target_energy=0.9
//! trackscout features 4uLU6hMCjMI75M1A2tKUQC
//! ```
//!
//! ## Error Logging
//!
//! Terminal output uses the crate's colored `info!`, `success!`, `warning!`
//! and `error!` macros. Failures of a catalog command end the process with
//! exit code 1.

mod catalog;
mod serve;

pub use catalog::features;
pub use catalog::recommend;
pub use catalog::search;
pub use serve::serve;
