use serde::{Deserialize, Serialize};

/// Document styling for DOCX exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyles {
    /// Font for body text and the score table.
    pub body_font: String,

    /// Font for headings.
    pub heading_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    pub heading1_size: usize,

    pub heading2_size: usize,

    /// Hex RGB colour of the total score, e.g. "0000FF".
    pub score_color: String,

    /// Hex RGB colour of the treatment-need assessment.
    pub need_color: String,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            heading_font: "Helvetica".to_string(),
            body_size: 11,
            heading1_size: 16,
            heading2_size: 13,
            score_color: "0000FF".to_string(),
            need_color: "008000".to_string(),
        }
    }
}
