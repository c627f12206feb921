use gpa_roster::config::Policy;
use gpa_roster::grades::filters::{honor_roll, needs_attention};
use gpa_roster::grades::summary::build_report;
use gpa_roster::parser::load_roster;

fn fixture() -> Vec<gpa_roster::grades::types::StudentRecord> {
    load_roster(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/roster.csv"))
        .expect("Failed to load roster")
}

#[test]
fn test_full_pipeline() {
    let students = fixture();
    assert_eq!(students.len(), 7);

    let gpas: Vec<Option<f64>> = students.iter().map(|s| s.gpa()).collect();
    assert_eq!(
        gpas,
        vec![
            Some(3.85),
            Some(3.35),
            Some(1.35),
            Some(3.75),
            None,
            Some(3.5),
            None,
        ]
    );

    let honors: Vec<(&str, f64)> = honor_roll(&students)
        .iter()
        .map(|e| (e.student.name.as_str(), e.gpa))
        .collect();
    assert_eq!(
        honors,
        vec![("Ada Lovelace", 3.85), ("Dana Reyes", 3.75), ("Fran Ito", 3.5)]
    );

    let flagged: Vec<&str> = needs_attention(&students)
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(flagged, vec!["Cyd Okafor", "Dana Reyes"]);
}

#[test]
fn test_report_marks_undefined_gpa() {
    let students = fixture();
    let report = build_report(&students, &Policy::default());

    assert_eq!(report.summary.students, 7);
    assert_eq!(report.summary.without_gpa, 2);
    assert_eq!(report.summary.honor_roll, 3);
    assert_eq!(report.summary.needs_attention, 2);

    let eli = report.students.iter().find(|r| r.id == 1005).unwrap();
    assert_eq!(eli.gpa, None);
    assert_eq!(eli.gpa_display, "N/A");
    assert_eq!(eli.total_credit_hours, 7);
}
