//! Turns an advisor's free-text answer into an [`AdvisorResponse`].
//!
//! Parsing is forgiving: a missing score falls back to
//! [`AdvisorScores::DEFAULT_SCORE`] and never fails the request.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::advisors::advisor_id_for;
use crate::types::{AdvisorResponse, AdvisorScores, RawAdvisorOutput};

static CAPITAL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Capital:\s*([0-9]+(?:\.[0-9]+)?)").unwrap());
static MARKET_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Market:\s*([0-9]+(?:\.[0-9]+)?)").unwrap());
static MODEL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Model:\s*([0-9]+(?:\.[0-9]+)?)").unwrap());

/// Marker that starts the trailing score annotation. Case-sensitive.
const SCORES_MARKER: &str = "Scores:";

pub fn extract_scores(text: &str) -> AdvisorScores {
    AdvisorScores {
        capital: find_score(&CAPITAL_PATTERN, text),
        market: find_score(&MARKET_PATTERN, text),
        model: find_score(&MODEL_PATTERN, text),
    }
}

fn find_score(pattern: &Regex, text: &str) -> f64 {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(AdvisorScores::DEFAULT_SCORE)
}

/// Drop everything from the first `Scores:` onwards and trim. Text without
/// the marker is returned unmodified.
pub fn strip_scores(text: &str) -> String {
    match text.find(SCORES_MARKER) {
        Some(idx) => text[..idx].trim().to_string(),
        None => text.to_string(),
    }
}

pub fn normalize(raw: &RawAdvisorOutput) -> AdvisorResponse {
    AdvisorResponse {
        advisor_id: advisor_id_for(&raw.role).to_string(),
        response: strip_scores(&raw.text),
        scores: extract_scores(&raw.text),
    }
}
