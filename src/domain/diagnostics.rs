//! Deploy failure diagnostics
//!
//! Turns the `--json` failure payload of `force:source:deploy` into
//! per-file, zero-based source positions.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Trailing ` (line:col)` the CLI appends to messages
fn position_suffix() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r" \([0-9]+:[0-9]+\)$").expect("position suffix is a valid regex")
    })
}

/// One problem reported by a failed deploy, in editor coordinates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Path as reported by the CLI, relative to the project root
    pub file_path: String,
    /// Zero-based line
    pub line: u32,
    /// Zero-based column
    pub column: u32,
    pub message: String,
}

/// Line and column arrive as strings from some CLI versions and numbers from others.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireNumber {
    Int(u64),
    Text(String),
}

impl WireNumber {
    /// Convert a 1-based wire value to a 0-based coordinate
    fn to_zero_based(&self) -> u32 {
        let one_based = match self {
            WireNumber::Int(n) => u32::try_from(*n).unwrap_or(u32::MAX),
            WireNumber::Text(s) => s.trim().parse::<u32>().unwrap_or(0),
        };
        one_based.saturating_sub(1)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProblemRecord {
    file_path: String,
    #[serde(default)]
    line_number: Option<WireNumber>,
    #[serde(default)]
    column_number: Option<WireNumber>,
    error: String,
}

impl ProblemRecord {
    fn into_diagnostic(self) -> Diagnostic {
        let zero = |n: &Option<WireNumber>| n.as_ref().map(WireNumber::to_zero_based).unwrap_or(0);
        Diagnostic {
            line: zero(&self.line_number),
            column: zero(&self.column_number),
            message: strip_position_suffix(&self.error).to_string(),
            file_path: self.file_path,
        }
    }
}

/// Remove a trailing ` (line:col)` the CLI appends to messages
pub fn strip_position_suffix(message: &str) -> &str {
    match position_suffix().find(message) {
        Some(m) => &message[..m.start()],
        None => message,
    }
}

/// Parse a deploy failure payload into diagnostics.
///
/// Fails only when the payload is not JSON at all. A JSON document without a
/// `result` list yields no diagnostics, and individual records missing a
/// file path or message are skipped. Text around the JSON object (CLI
/// warnings on stderr) is tolerated.
pub fn parse_deploy_failure(payload: &str) -> Result<Vec<Diagnostic>, serde_json::Error> {
    let document: serde_json::Value = match serde_json::from_str(payload) {
        Ok(value) => value,
        Err(err) => match embedded_object(payload) {
            Some(inner) => serde_json::from_str(inner)?,
            None => return Err(err),
        },
    };

    let Some(records) = document.get("result").and_then(|r| r.as_array()) else {
        return Ok(Vec::new());
    };

    Ok(records
        .iter()
        .filter_map(|record| serde_json::from_value::<ProblemRecord>(record.clone()).ok())
        .map(ProblemRecord::into_diagnostic)
        .collect())
}

fn embedded_object(payload: &str) -> Option<&str> {
    let start = payload.find('{')?;
    let end = payload.rfind('}')?;
    (start < end).then(|| &payload[start..=end])
}

/// Group diagnostics by file, preserving report order within each file
pub fn group_by_file(diagnostics: Vec<Diagnostic>) -> BTreeMap<String, Vec<Diagnostic>> {
    let mut grouped: BTreeMap<String, Vec<Diagnostic>> = BTreeMap::new();
    for diagnostic in diagnostics {
        grouped
            .entry(diagnostic.file_path.clone())
            .or_default()
            .push(diagnostic);
    }
    grouped
}
