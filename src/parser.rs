//! CSV roster parser.
//!
//! A roster has one row per enrolment:
//!
//! ```text
//! student_id,name,standing,class_name,course_codes,credit_hours,grade
//! 1001,Ada Lovelace,senior,Compilers,4410;5410,4,A
//! 1001,Ada Lovelace,senior,Choir,,1,P
//! 1002,Brook Ng,freshman,,,,
//! ```
//!
//! Rows are grouped by `student_id` in first-seen order. A row with an empty
//! `class_name` declares a student without adding a class.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use tracing::debug;

use crate::grades::types::{Class, Standing, StudentRecord};

#[derive(Debug, Deserialize)]
struct RosterRow {
    student_id: u32,
    name: String,
    standing: String,
    #[serde(default)]
    class_name: String,
    #[serde(default)]
    course_codes: String,
    #[serde(default)]
    credit_hours: Option<u32>,
    #[serde(default)]
    grade: String,
}

/// Parses a roster from any CSV source.
///
/// # Errors
///
/// Returns an error for malformed CSV, an unknown standing, a bad course
/// code, credit hours outside 0–99, or a student id whose name or standing
/// changes between rows. Unknown grades are not an error.
pub fn parse_roster<R: Read>(reader: R) -> Result<Vec<StudentRecord>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut students: Vec<StudentRecord> = Vec::new();
    let mut index: HashMap<u32, usize> = HashMap::new();

    for (i, result) in rdr.deserialize().enumerate() {
        // Header is line 1.
        let line = i + 2;
        let row: RosterRow = result.with_context(|| format!("invalid roster row at line {}", line))?;

        let standing: Standing = row
            .standing
            .parse()
            .with_context(|| format!("line {}", line))?;

        let slot = match index.get(&row.student_id) {
            Some(&slot) => {
                let existing = &students[slot];
                if existing.name != row.name || existing.standing != standing {
                    anyhow::bail!(
                        "line {}: student {} listed as {:?} ({}) but earlier as {:?} ({})",
                        line,
                        row.student_id,
                        row.name,
                        standing,
                        existing.name,
                        existing.standing
                    );
                }
                slot
            }
            None => {
                students.push(StudentRecord::new(&row.name, row.student_id, standing, Vec::new()));
                index.insert(row.student_id, students.len() - 1);
                students.len() - 1
            }
        };

        if row.class_name.is_empty() {
            continue;
        }

        let class = parse_class(&row).with_context(|| format!("line {}", line))?;
        students[slot].classes.push(class);
    }

    debug!(students = students.len(), "Roster parsed");
    Ok(students)
}

/// Loads and parses a roster CSV file.
#[tracing::instrument]
pub fn load_roster(path: &str) -> Result<Vec<StudentRecord>> {
    let file = File::open(path).with_context(|| format!("failed to open roster {}", path))?;
    parse_roster(file).with_context(|| format!("failed to parse roster {}", path))
}

fn parse_class(row: &RosterRow) -> Result<Class> {
    let credit_hours = match row.credit_hours {
        Some(hours) if hours <= 99 => hours as u8,
        Some(hours) => anyhow::bail!("credit hours {} out of range 0-99", hours),
        None => anyhow::bail!("class {:?} has no credit hours", row.class_name),
    };

    Ok(Class::new(&row.class_name, credit_hours, &row.grade)
        .with_course_codes(parse_course_codes(&row.course_codes)?))
}

fn parse_course_codes(raw: &str) -> Result<Vec<u32>> {
    raw.split(|c: char| c == ';' || c.is_whitespace())
        .filter(|code| !code.is_empty())
        .map(|code| {
            code.parse::<u32>()
                .with_context(|| format!("invalid course code {:?}", code))
        })
        .collect()
}
