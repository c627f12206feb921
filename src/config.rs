use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Thresholds used by the roster filters.
///
/// Stored as a JSON object on disk; missing keys keep their defaults:
/// ```json
/// {
///   "honor_roll_min_gpa": 3.5,
///   "attention_min_credit_hours": 16,
///   "attention_max_gpa": 2.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Policy {
    /// Lowest GPA that still makes the honor roll (inclusive).
    pub honor_roll_min_gpa: f64,
    /// Total credit hours at or above which a student is flagged.
    pub attention_min_credit_hours: u32,
    /// A defined GPA strictly below this flags a student.
    pub attention_max_gpa: f64,
}

impl Default for Policy {
    fn default() -> Self {
        Policy {
            honor_roll_min_gpa: 3.5,
            attention_min_credit_hours: 16,
            attention_max_gpa: 2.0,
        }
    }
}

impl Policy {
    /// Loads a policy from a JSON file at `path`.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read policy file {}", path))?;
        let policy: Policy = serde_json::from_str(&content)
            .with_context(|| format!("invalid policy file {}", path))?;
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("honor_roll_min_gpa", self.honor_roll_min_gpa),
            ("attention_max_gpa", self.attention_max_gpa),
        ] {
            if !value.is_finite() || value < 0.0 {
                anyhow::bail!("{} must be a non-negative number, got {}", name, value);
            }
        }
        Ok(())
    }
}
