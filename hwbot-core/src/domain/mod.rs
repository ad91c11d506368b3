//! Core domain types
//!
//! A submission is one homework review record; its status is one of a
//! closed set of review states, each carrying a fixed verdict.

pub mod status;
pub mod submission;

pub use status::HomeworkStatus;
pub use submission::Submission;
