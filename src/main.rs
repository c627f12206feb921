//! CLI entry point for the GPA roster tool.
//!
//! Provides subcommands for listing GPAs, ranking the honor roll, flagging
//! students who need attention, and writing a full JSON report.

use anyhow::Result;
use clap::{Parser, Subcommand};
use gpa_roster::config::Policy;
use gpa_roster::grades::filters::{honor_roll_with, needs_attention_with};
use gpa_roster::grades::summary::build_report;
use gpa_roster::grades::types::{StudentRecord, StudentRow};
use gpa_roster::{
    output::{print_json, print_pretty, render_table, write_json, write_rows_csv},
    parser::load_roster,
};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "gpa_roster")]
#[command(about = "A tool to compute GPAs and roster views from student records", long_about = None)]
struct Cli {
    /// JSON file overriding the honor-roll and needs-attention thresholds
    #[arg(long, global = true, value_name = "FILE")]
    policy: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every student's GPA
    Gpa {
        /// Roster CSV file
        #[arg(value_name = "ROSTER")]
        roster: String,
    },
    /// Rank students on the honor roll
    HonorRoll {
        /// Roster CSV file
        #[arg(value_name = "ROSTER")]
        roster: String,

        /// Optional: CSV file to write the honor roll to
        #[arg(long)]
        csv: Option<String>,
    },
    /// List students carrying too many credit hours or a low GPA
    NeedsAttention {
        /// Roster CSV file
        #[arg(value_name = "ROSTER")]
        roster: String,

        /// Optional: CSV file to write the list to
        #[arg(long)]
        csv: Option<String>,
    },
    /// Build a full JSON report for a roster
    Report {
        /// Roster CSV file
        #[arg(value_name = "ROSTER")]
        roster: String,

        /// JSON file to write; logs the report when omitted
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/gpa_roster.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("gpa_roster.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let policy = match &cli.policy {
        Some(path) => {
            let policy = Policy::load(path)?;
            info!(path = %path, ?policy, "Loaded policy");
            policy
        }
        None => Policy::default(),
    };

    match cli.command {
        Commands::Gpa { roster } => {
            let students = read_roster(&roster)?;
            let rows: Vec<StudentRow> = students.iter().map(StudentRow::from_student).collect();

            let undefined = rows.iter().filter(|r| r.gpa.is_none()).count();
            if undefined > 0 {
                warn!(undefined, "Some students have no graded credit hours");
            }

            print!("{}", render_table(&rows));
        }
        Commands::HonorRoll { roster, csv } => {
            let students = read_roster(&roster)?;
            let rows: Vec<StudentRow> = honor_roll_with(&students, &policy)
                .into_iter()
                .map(|entry| StudentRow::from_student(entry.student))
                .collect();

            info!(
                qualified = rows.len(),
                min_gpa = policy.honor_roll_min_gpa,
                "Honor roll computed"
            );
            emit_rows(&rows, csv.as_deref())?;
        }
        Commands::NeedsAttention { roster, csv } => {
            let students = read_roster(&roster)?;
            let rows: Vec<StudentRow> = needs_attention_with(&students, &policy)
                .into_iter()
                .map(StudentRow::from_student)
                .collect();

            info!(
                flagged = rows.len(),
                min_credit_hours = policy.attention_min_credit_hours,
                max_gpa = policy.attention_max_gpa,
                "Needs-attention list computed"
            );
            emit_rows(&rows, csv.as_deref())?;
        }
        Commands::Report { roster, output } => {
            let students = read_roster(&roster)?;
            let report = build_report(&students, &policy);
            print_pretty(&report);

            match output {
                Some(path) => {
                    write_json(&path, &report)?;
                    info!(path = %path, "Report written");
                }
                None => print_json(&report)?,
            }
        }
    }

    Ok(())
}

/// Loads a roster and logs its size.
#[tracing::instrument]
fn read_roster(path: &str) -> Result<Vec<StudentRecord>> {
    let students = load_roster(path)?;
    info!(students = students.len(), "Roster loaded");
    Ok(students)
}

/// Prints rows as a table, and also writes them to `csv` when given.
fn emit_rows(rows: &[StudentRow], csv: Option<&str>) -> Result<()> {
    print!("{}", render_table(rows));
    if let Some(path) = csv {
        write_rows_csv(path, rows)?;
        info!(path, rows = rows.len(), "CSV written");
    }
    Ok(())
}
