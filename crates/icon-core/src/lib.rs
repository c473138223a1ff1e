//! icon-core
//!
//! Pure domain types for the ICON orthodontic index: the clinical
//! observations collected per assessment and the score report derived
//! from them. No I/O — this is the shared vocabulary of the workspace.

pub mod error;
pub mod models;
