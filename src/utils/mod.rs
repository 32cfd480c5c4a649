//! Helpers shared across the application.
//!
//! - [`alias`] - Alias validation and random alias generation
//! - [`db_error`] - Unique constraint classification
//! - [`long_link`] - Long link validation and canonicalization

pub mod alias;
pub mod db_error;
pub mod long_link;
