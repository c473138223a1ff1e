//! icon-scoring
//!
//! The ICON (Index of Complexity, Outcome and Need) scorer. Pure
//! computation — turns one set of clinical observations into a component
//! breakdown, a total, and a treatment-need classification.

pub mod catalog;
pub mod reference;
pub mod scorer;

pub use scorer::{classify, score, score_selections};
