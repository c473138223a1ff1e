//! icon-export
//!
//! Presentation of score reports: plain text, Markdown, JSON and DOCX.

pub mod docx;
pub mod error;
pub mod render;
pub mod styles;
