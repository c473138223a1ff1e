use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// The single validation gate in front of the scorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum InvalidInputError {
    #[error("DAC grade {grade} is outside the range 1-10")]
    DacGradeOutOfRange { grade: u8 },

    #[error("missing required field: {field}")]
    MissingField { field: String },
}

/// A textual selection that does not name any value of its field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {field} selection: '{value}'")]
pub struct ParseSelectionError {
    pub field: &'static str,
    pub value: String,
}
