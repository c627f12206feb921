//! Letter grades and the grade-point table.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A scored letter grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    APlus,
    A,
    AMinus,
    BPlus,
    B,
    BMinus,
    CPlus,
    C,
    CMinus,
    DPlus,
    D,
    DMinus,
    F,
}

/// Tenths of a grade point per credit hour for each letter grade.
///
/// | Grade | Points | Grade | Points | Grade | Points |
/// |-------|--------|-------|--------|-------|--------|
/// | A+    | 4.3    | B-    | 2.7    | D+    | 1.3    |
/// | A     | 4.0    | C+    | 2.3    | D     | 1.0    |
/// | A-    | 3.7    | C     | 2.0    | D-    | 0.7    |
/// | B+    | 3.3    | C-    | 1.7    | F     | 0.0    |
/// | B     | 3.0    |       |        |       |        |
static GRADE_POINTS: &[(LetterGrade, &str, u16)] = &[
    (LetterGrade::APlus, "A+", 43),
    (LetterGrade::A, "A", 40),
    (LetterGrade::AMinus, "A-", 37),
    (LetterGrade::BPlus, "B+", 33),
    (LetterGrade::B, "B", 30),
    (LetterGrade::BMinus, "B-", 27),
    (LetterGrade::CPlus, "C+", 23),
    (LetterGrade::C, "C", 20),
    (LetterGrade::CMinus, "C-", 17),
    (LetterGrade::DPlus, "D+", 13),
    (LetterGrade::D, "D", 10),
    (LetterGrade::DMinus, "D-", 7),
    (LetterGrade::F, "F", 0),
];

impl LetterGrade {
    /// Every letter grade, best first.
    pub fn all() -> impl Iterator<Item = LetterGrade> {
        GRADE_POINTS.iter().map(|(g, _, _)| *g)
    }

    /// Grade points earned per credit hour.
    pub fn points(self) -> f64 {
        f64::from(self.tenths()) / 10.0
    }

    /// Grade points per credit hour in tenths, for exact summation.
    pub fn tenths(self) -> u16 {
        self.entry().2
    }

    pub fn as_str(self) -> &'static str {
        self.entry().1
    }

    // Table rows are in declaration order, so the discriminant is the index.
    fn entry(self) -> &'static (LetterGrade, &'static str, u16) {
        &GRADE_POINTS[self as usize]
    }

    fn from_normalized(s: &str) -> Option<Self> {
        GRADE_POINTS
            .iter()
            .find(|(_, label, _)| *label == s)
            .map(|(g, _, _)| *g)
    }
}

/// Non-scored outcomes. These never contribute to a GPA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    Pass,
    NoPass,
    Incomplete,
    Withdrawal,
}

impl Marker {
    pub fn as_str(self) -> &'static str {
        match self {
            Marker::Pass => "P",
            Marker::NoPass => "NP",
            Marker::Incomplete => "I",
            Marker::Withdrawal => "W",
        }
    }
}

/// The grade recorded for a class.
///
/// Parsing never fails: text that is neither a letter grade nor a known
/// marker is kept as [`Grade::Unrecognized`] and treated as not applicable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    Letter(LetterGrade),
    Marker(Marker),
    Unrecognized(String),
}

impl Grade {
    /// Parses a grade, ignoring case and surrounding whitespace.
    pub fn parse(raw: &str) -> Grade {
        let normalized = raw.trim().to_ascii_uppercase();

        if let Some(letter) = LetterGrade::from_normalized(&normalized) {
            return Grade::Letter(letter);
        }

        match normalized.as_str() {
            "P" => Grade::Marker(Marker::Pass),
            "NP" => Grade::Marker(Marker::NoPass),
            "I" => Grade::Marker(Marker::Incomplete),
            "W" => Grade::Marker(Marker::Withdrawal),
            _ => Grade::Unrecognized(raw.to_string()),
        }
    }

    /// Points per credit hour, or `None` when the grade is not scored.
    pub fn points_per_credit(&self) -> Option<f64> {
        match self {
            Grade::Letter(letter) => Some(letter.points()),
            Grade::Marker(_) | Grade::Unrecognized(_) => None,
        }
    }

    pub fn is_scored(&self) -> bool {
        matches!(self, Grade::Letter(_))
    }

    /// Grade points for a class worth `credit_hours`, or `None` when the
    /// grade is not applicable. An F is scored and yields `Some(0.0)`.
    pub fn points_for(&self, credit_hours: u8) -> Option<f64> {
        self.points_per_credit().map(|p| p * f64::from(credit_hours))
    }
}

impl FromStr for Grade {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Grade::parse(s))
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::Letter(letter) => f.write_str(letter.as_str()),
            Grade::Marker(marker) => f.write_str(marker.as_str()),
            Grade::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

/// Resolves a raw grade string and credit-hour count into grade points.
///
/// Returns `None` for P, NP, I, W and anything unrecognized.
pub fn grade_points(grade: &str, credit_hours: u8) -> Option<f64> {
    Grade::parse(grade).points_for(credit_hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_points_match_table() {
        assert_eq!(grade_points("A+", 1), Some(4.3));
        assert_eq!(grade_points("A", 1), Some(4.0));
        assert_eq!(grade_points("A-", 1), Some(3.7));
        assert_eq!(grade_points("B+", 1), Some(3.3));
        assert_eq!(grade_points("B", 1), Some(3.0));
        assert_eq!(grade_points("B-", 1), Some(2.7));
        assert_eq!(grade_points("C+", 1), Some(2.3));
        assert_eq!(grade_points("C", 1), Some(2.0));
        assert_eq!(grade_points("C-", 1), Some(1.7));
        assert_eq!(grade_points("D+", 1), Some(1.3));
        assert_eq!(grade_points("D", 1), Some(1.0));
        assert_eq!(grade_points("D-", 1), Some(0.7));
        assert_eq!(grade_points("F", 1), Some(0.0));
    }

    #[test]
    fn test_table_is_indexed_by_variant() {
        for (i, (letter, _, _)) in GRADE_POINTS.iter().enumerate() {
            assert_eq!(*letter as usize, i);
        }
        assert_eq!(GRADE_POINTS.len(), 13);
    }

    #[test]
    fn test_points_scale_with_credit_hours() {
        for letter in LetterGrade::all() {
            for hours in 1..=5u8 {
                assert_eq!(
                    grade_points(letter.as_str(), hours),
                    Some(letter.points() * f64::from(hours))
                );
            }
        }
    }

    #[test]
    fn test_markers_are_not_applicable() {
        for marker in ["P", "NP", "I", "W"] {
            assert_eq!(grade_points(marker, 0), None);
            assert_eq!(grade_points(marker, 4), None);
        }
    }

    #[test]
    fn test_unrecognized_is_not_applicable() {
        assert_eq!(grade_points("E", 3), None);
        assert_eq!(grade_points("A++", 3), None);
        assert_eq!(grade_points("", 3), None);
        assert_eq!(
            Grade::parse("Audit"),
            Grade::Unrecognized("Audit".to_string())
        );
    }

    #[test]
    fn test_parse_ignores_case_and_whitespace() {
        assert_eq!(Grade::parse("  b+ "), Grade::Letter(LetterGrade::BPlus));
        assert_eq!(Grade::parse("np"), Grade::Marker(Marker::NoPass));
        assert_eq!(Grade::parse("\tw\n"), Grade::Marker(Marker::Withdrawal));
    }

    #[test]
    fn test_f_is_scored_zero() {
        let f = Grade::parse("F");
        assert!(f.is_scored());
        assert_eq!(f.points_for(4), Some(0.0));
    }

    #[test]
    fn test_display_is_canonical() {
        assert_eq!(Grade::parse("a-").to_string(), "A-");
        assert_eq!(Grade::parse("i").to_string(), "I");
        assert_eq!(Grade::parse("Audit").to_string(), "Audit");
    }
}
