//! Data types used by the GPA pipeline.

use crate::config::Policy;
use crate::grades::grade::Grade;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A class a student is enrolled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub name: String,
    /// Catalogue numbers; informational only.
    pub course_codes: Vec<u32>,
    pub credit_hours: u8,
    pub grade: Grade,
}

impl Class {
    pub fn new(name: &str, credit_hours: u8, grade: &str) -> Self {
        Class {
            name: name.to_string(),
            course_codes: Vec::new(),
            credit_hours,
            grade: Grade::parse(grade),
        }
    }

    pub fn with_course_codes(mut self, codes: Vec<u32>) -> Self {
        self.course_codes = codes;
        self
    }

    /// Grade points earned in this class, or `None` if the grade is not scored.
    pub fn grade_points(&self) -> Option<f64> {
        self.grade.points_for(self.credit_hours)
    }
}

/// Class standing of a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Standing {
    FirstYear,
    SecondYear,
    ThirdYear,
    FourthYear,
    Graduate,
}

impl Standing {
    pub const ALL: [Standing; 5] = [
        Standing::FirstYear,
        Standing::SecondYear,
        Standing::ThirdYear,
        Standing::FourthYear,
        Standing::Graduate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Standing::FirstYear => "first-year",
            Standing::SecondYear => "second-year",
            Standing::ThirdYear => "third-year",
            Standing::FourthYear => "fourth-year",
            Standing::Graduate => "graduate",
        }
    }
}

impl FromStr for Standing {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "first-year" | "freshman" | "1" => Ok(Standing::FirstYear),
            "second-year" | "sophomore" | "2" => Ok(Standing::SecondYear),
            "third-year" | "junior" | "3" => Ok(Standing::ThirdYear),
            "fourth-year" | "senior" | "4" => Ok(Standing::FourthYear),
            "graduate" | "grad" => Ok(Standing::Graduate),
            _ => anyhow::bail!("unknown class standing {:?}", s),
        }
    }
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A student and the classes they own.
///
/// GPA is never stored; see [`StudentRecord::gpa`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub name: String,
    pub id: u32,
    pub classes: Vec<Class>,
    pub standing: Standing,
}

impl StudentRecord {
    pub fn new(name: &str, id: u32, standing: Standing, classes: Vec<Class>) -> Self {
        StudentRecord {
            name: name.to_string(),
            id,
            classes,
            standing,
        }
    }

    /// Credit hours across every class, scored or not.
    pub fn total_credit_hours(&self) -> u32 {
        self.classes.iter().map(|c| u32::from(c.credit_hours)).sum()
    }

    /// Credit hours across scored classes only.
    pub fn graded_credit_hours(&self) -> u32 {
        self.classes
            .iter()
            .filter(|c| c.grade.is_scored())
            .map(|c| u32::from(c.credit_hours))
            .sum()
    }
}

/// A student on the honor roll, paired with the GPA that placed them there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HonorRollEntry<'a> {
    pub student: &'a StudentRecord,
    pub gpa: f64,
}

/// One student's line in a rendered report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRow {
    pub id: u32,
    pub name: String,
    pub standing: Standing,
    pub total_credit_hours: u32,
    pub graded_credit_hours: u32,
    pub gpa: Option<f64>,
    pub gpa_display: String,
}

impl StudentRow {
    pub fn from_student(student: &StudentRecord) -> Self {
        let gpa = student.gpa();
        StudentRow {
            id: student.id,
            name: student.name.clone(),
            standing: student.standing,
            total_credit_hours: student.total_credit_hours(),
            graded_credit_hours: student.graded_credit_hours(),
            gpa,
            gpa_display: format_gpa(gpa),
        }
    }
}

/// Formats a GPA to two decimals, or `"N/A"` when it is undefined.
pub fn format_gpa(gpa: Option<f64>) -> String {
    match gpa {
        Some(value) => format!("{:.2}", value),
        None => "N/A".to_string(),
    }
}

/// GPA statistics for students of one standing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingSummary {
    pub standing: Standing,
    pub students: usize,
    pub mean_gpa: Option<f64>,
}

/// Roster-wide statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterSummary {
    pub students: usize,
    pub with_gpa: usize,
    pub without_gpa: usize,
    pub mean_gpa: Option<f64>,
    pub gpa_stddev: Option<f64>,
    pub honor_roll: usize,
    pub needs_attention: usize,
    pub by_standing: Vec<StandingSummary>,
}

/// Complete report for a roster, written out as JSON.
#[derive(Debug, Serialize)]
pub struct RosterReport {
    pub generated_at: DateTime<Utc>,
    pub policy: Policy,
    pub summary: RosterSummary,
    pub students: Vec<StudentRow>,
    pub honor_roll: Vec<StudentRow>,
    pub needs_attention: Vec<StudentRow>,
}
