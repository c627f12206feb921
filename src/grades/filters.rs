//! Honor-roll and needs-attention views over a roster.

use crate::config::Policy;
use crate::grades::types::{HonorRollEntry, StudentRecord};
use std::cmp::Ordering;

/// Students with a GPA of at least 3.5, best first.
pub fn honor_roll(students: &[StudentRecord]) -> Vec<HonorRollEntry<'_>> {
    honor_roll_with(students, &Policy::default())
}

/// Students whose GPA reaches `policy.honor_roll_min_gpa`, sorted by GPA
/// descending. Students with equal GPAs keep their roster order. Students
/// with an undefined GPA never qualify.
pub fn honor_roll_with<'a>(
    students: &'a [StudentRecord],
    policy: &Policy,
) -> Vec<HonorRollEntry<'a>> {
    let mut entries: Vec<HonorRollEntry<'a>> = students
        .iter()
        .filter_map(|student| {
            let gpa = student.gpa()?;
            (gpa >= policy.honor_roll_min_gpa).then_some(HonorRollEntry { student, gpa })
        })
        .collect();

    // sort_by is stable; GPAs here are always finite.
    entries.sort_by(|a, b| b.gpa.partial_cmp(&a.gpa).unwrap_or(Ordering::Equal));
    entries
}

/// Students carrying 16 or more credit hours, or with a GPA below 2.0.
pub fn needs_attention(students: &[StudentRecord]) -> Vec<&StudentRecord> {
    needs_attention_with(students, &Policy::default())
}

/// Students flagged by either threshold in `policy`, in roster order.
///
/// An undefined GPA does not count as low; such a student is flagged only
/// through the credit-hour threshold.
pub fn needs_attention_with<'a>(
    students: &'a [StudentRecord],
    policy: &Policy,
) -> Vec<&'a StudentRecord> {
    students
        .iter()
        .filter(|student| is_flagged(student, policy))
        .collect()
}

fn is_flagged(student: &StudentRecord, policy: &Policy) -> bool {
    let overloaded = student.total_credit_hours() >= policy.attention_min_credit_hours;
    let low_gpa = student
        .gpa()
        .is_some_and(|gpa| gpa < policy.attention_max_gpa);

    overloaded || low_gpa
}
