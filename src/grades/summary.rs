use crate::config::Policy;
use crate::grades::filters::{honor_roll_with, needs_attention_with};
use crate::grades::types::{
    RosterReport, RosterSummary, Standing, StandingSummary, StudentRecord, StudentRow,
};
use crate::grades::utility::{mean, stddev};
use chrono::Utc;
use tracing::debug;

/// Summarizes GPA statistics across a roster.
///
/// Undefined GPAs are counted separately and never enter the mean or
/// standard deviation.
pub fn summarize(students: &[StudentRecord], policy: &Policy) -> RosterSummary {
    let gpas: Vec<f64> = students.iter().filter_map(StudentRecord::gpa).collect();
    let mean_gpa = mean(&gpas);
    let gpa_stddev = mean_gpa.map(|m| stddev(&gpas, m));

    let by_standing = Standing::ALL
        .iter()
        .filter_map(|&standing| {
            let cohort: Vec<&StudentRecord> =
                students.iter().filter(|s| s.standing == standing).collect();
            if cohort.is_empty() {
                return None;
            }
            let cohort_gpas: Vec<f64> = cohort.iter().filter_map(|s| s.gpa()).collect();
            Some(StandingSummary {
                standing,
                students: cohort.len(),
                mean_gpa: mean(&cohort_gpas),
            })
        })
        .collect();

    RosterSummary {
        students: students.len(),
        with_gpa: gpas.len(),
        without_gpa: students.len() - gpas.len(),
        mean_gpa,
        gpa_stddev,
        honor_roll: honor_roll_with(students, policy).len(),
        needs_attention: needs_attention_with(students, policy).len(),
        by_standing,
    }
}

/// Builds the full report for a roster under `policy`.
pub fn build_report(students: &[StudentRecord], policy: &Policy) -> RosterReport {
    let summary = summarize(students, policy);
    debug!(
        students = summary.students,
        honor_roll = summary.honor_roll,
        needs_attention = summary.needs_attention,
        "Roster summarized"
    );

    RosterReport {
        generated_at: Utc::now(),
        policy: *policy,
        summary,
        students: students.iter().map(StudentRow::from_student).collect(),
        honor_roll: honor_roll_with(students, policy)
            .into_iter()
            .map(|entry| StudentRow::from_student(entry.student))
            .collect(),
        needs_attention: needs_attention_with(students, policy)
            .into_iter()
            .map(StudentRow::from_student)
            .collect(),
    }
}
