pub mod observations;
pub mod report;
pub mod selections;
