//! Document state management and text utilities.
//!
//! This module provides:
//! - `DocumentStore` holding the full text of every opened document
//! - line lookup and UTF-16 column truncation for cursor positions
//! - validation of full-sync change payloads

mod store;
pub mod sync;
pub mod text;

pub use store::{DocumentStore, LinePrefix};
pub use sync::ContentChange;
