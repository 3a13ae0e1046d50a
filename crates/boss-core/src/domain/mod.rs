//! Domain entities for the boss challenge generator.
//!
//! Pure business rules with no I/O: the compiled-in boss catalog, the
//! enabled/disabled config, challenge generation, and history records.
//! Persistence and transport live in `boss-server`.

/// Compiled-in boss definitions.
pub mod catalog;

/// Random challenge selection.
pub mod challenge;

/// Per-boss enabled flags and the absent-means-enabled rule.
pub mod config;

/// Completion records and request validation.
pub mod history;
