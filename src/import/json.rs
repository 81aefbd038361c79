//! JSON import with recovery for loose and newline-delimited input.
//!
//! Input pasted by hand is often not strict JSON: trailing commas, smart
//! quotes from word processors, bare object keys, single-quoted strings or
//! one record per line. [`JSONNormalizer`] tries progressively more invasive
//! repairs and returns the first candidate that parses.

use super::ImportError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

static TRAILING_COMMA_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r",\s*([\]}])").unwrap());

static BARE_KEY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([{\[,]\s*)([A-Za-z0-9_]+)\s*:").unwrap());

static SINGLE_QUOTED_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"'([^']*)'").unwrap());

const BYTE_ORDER_MARK: char = '\u{FEFF}';

const SMART_SINGLE_QUOTES: [char; 6] = [
    '\u{2018}', '\u{2019}', '\u{201A}', '\u{201B}', '\u{2032}', '\u{2035}',
];

const SMART_DOUBLE_QUOTES: [char; 6] = [
    '\u{201C}', '\u{201D}', '\u{201E}', '\u{201F}', '\u{2033}', '\u{2036}',
];

/// Share of record-looking lines above which input is treated as NDJSON
const NDJSON_LINE_RATIO: f64 = 0.8;

/// Which attempt produced the parsed value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NormalizeStage {
    Strict,
    Sanitized,
    Loose,
}

/// Parsed JSON along with how much repair it needed
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedJson {
    pub value: Value,
    pub stage: NormalizeStage,
    /// Whether the input was joined from newline-delimited records
    pub ndjson: bool,
}

/// Recovers a JSON value from strict, loose or newline-delimited text
#[derive(Debug, Default, Clone, Copy)]
pub struct JSONNormalizer;

impl JSONNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Parse `raw`, repairing it if needed.
    ///
    /// Returns `ImportError::ParseError` with the parser's diagnostic from the
    /// last attempt when no candidate parses.
    pub fn parse(&self, raw: &str) -> Result<NormalizedJson, ImportError> {
        let ndjson = is_ndjson(raw);
        let input = if ndjson {
            debug!("Input detected as NDJSON");
            ndjson_to_array(raw)
        } else {
            raw.to_string()
        };

        if let Ok(value) = serde_json::from_str(&input) {
            return Ok(Self::finish(value, NormalizeStage::Strict, ndjson));
        }

        if let Ok(value) = serde_json::from_str(&sanitize(&input)) {
            return Ok(Self::finish(value, NormalizeStage::Sanitized, ndjson));
        }

        match serde_json::from_str(&repair_loose(&input)) {
            Ok(value) => Ok(Self::finish(value, NormalizeStage::Loose, ndjson)),
            Err(e) => {
                debug!(error = %e, "All JSON repair attempts failed");
                Err(ImportError::ParseError(e.to_string()))
            }
        }
    }

    fn finish(value: Value, stage: NormalizeStage, ndjson: bool) -> NormalizedJson {
        debug!(?stage, ndjson, "Parsed JSON input");
        NormalizedJson {
            value,
            stage,
            ndjson,
        }
    }
}

/// Parse `raw` into a JSON value using every available repair.
pub fn normalize(raw: &str) -> Result<Value, ImportError> {
    JSONNormalizer::new().parse(raw).map(|n| n.value)
}

fn record_lines(input: &str) -> Vec<&str> {
    input
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("//") && !line.starts_with('#'))
        .collect()
}

/// Whether `input` looks like one JSON record per line.
///
/// Blank lines and `//` or `#` comment lines are ignored. More than one line
/// must remain and over 80% of them must open with `{` or `[`.
pub fn is_ndjson(input: &str) -> bool {
    let lines = record_lines(input);
    if lines.len() < 2 {
        return false;
    }
    let records = lines
        .iter()
        .filter(|line| line.starts_with('{') || line.starts_with('['))
        .count();
    records as f64 / lines.len() as f64 > NDJSON_LINE_RATIO
}

/// Join newline-delimited records into a single JSON array document
pub fn ndjson_to_array(input: &str) -> String {
    format!("[{}]", record_lines(input).join(","))
}

/// Light cleanup: byte-order mark, trailing commas and smart quotes
pub fn sanitize(input: &str) -> String {
    let input = input.strip_prefix(BYTE_ORDER_MARK).unwrap_or(input);
    let input = TRAILING_COMMA_REGEX.replace_all(input, "$1");
    input
        .chars()
        .map(|c| {
            if SMART_SINGLE_QUOTES.contains(&c) {
                '\''
            } else if SMART_DOUBLE_QUOTES.contains(&c) {
                '"'
            } else {
                c
            }
        })
        .collect()
}

/// Aggressive repair for JavaScript-style object literals.
///
/// Wraps bare comma-separated objects in an array, quotes identifier keys,
/// turns single-quoted strings into double-quoted ones and drops trailing
/// commas. Text inside string values that looks like `,key:` is rewritten
/// too.
pub fn repair_loose(input: &str) -> String {
    let trimmed = input.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK);

    let wrapped = if !trimmed.starts_with('[') && trimmed.contains("},") && trimmed.contains('{') {
        format!("[{}]", trimmed)
    } else {
        trimmed.to_string()
    };

    let quoted_keys = BARE_KEY_REGEX.replace_all(&wrapped, r#"${1}"${2}":"#);
    let double_quoted = SINGLE_QUOTED_REGEX.replace_all(&quoted_keys, r#""${1}""#);
    TRAILING_COMMA_REGEX
        .replace_all(&double_quoted, "$1")
        .into_owned()
}
