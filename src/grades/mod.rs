//! Grade-point resolution, GPA computation, and roster views.
//!
//! This module maps letter grades to grade points, computes
//! credit-hour-weighted GPAs, filters rosters into honor-roll and
//! needs-attention lists, and summarizes the results into a report.

pub mod filters;
pub mod gpa;
pub mod grade;
pub mod summary;
pub mod types;
pub mod utility;
