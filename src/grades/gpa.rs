use crate::grades::grade::Grade;
use crate::grades::types::StudentRecord;

/// Computes a student's credit-hour-weighted GPA.
///
/// Classes whose grade is not scored (P, NP, I, W, unrecognized) are left out
/// of both the grade points and the credit hours. Returns `None` when no
/// scored credit hours remain: that GPA is undefined, which is not the same
/// as a 0.0 earned with all F grades.
pub fn gpa(student: &StudentRecord) -> Option<f64> {
    // Summing in tenths keeps the result exact and independent of class order.
    let (tenths, hours) = student
        .classes
        .iter()
        .filter_map(|class| match class.grade {
            Grade::Letter(letter) => Some((
                u64::from(letter.tenths()) * u64::from(class.credit_hours),
                u64::from(class.credit_hours),
            )),
            Grade::Marker(_) | Grade::Unrecognized(_) => None,
        })
        .fold((0u64, 0u64), |(t, h), (ct, ch)| (t + ct, h + ch));

    if hours == 0 {
        return None;
    }

    Some(tenths as f64 / (hours * 10) as f64)
}

impl StudentRecord {
    /// See [`gpa`].
    pub fn gpa(&self) -> Option<f64> {
        gpa(self)
    }
}
