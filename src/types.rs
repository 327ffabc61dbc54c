use serde::{Deserialize, Serialize};

/// Body of `POST /api/challenge`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeRequest {
    pub challenge: String,
}

impl ChallengeRequest {
    /// Length in characters, not bytes.
    pub fn char_count(&self) -> usize {
        self.challenge.chars().count()
    }
}

/// One advisor's unit of work for a single challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisorTask {
    pub role: String,
    pub description: String,
    pub expected_output: String,
}

/// Unstructured text produced by one advisor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAdvisorOutput {
    pub role: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdvisorScores {
    pub capital: f64,
    pub market: f64,
    pub model: f64,
}

impl AdvisorScores {
    pub const DEFAULT_SCORE: f64 = 5.0;
}

impl Default for AdvisorScores {
    fn default() -> Self {
        Self {
            capital: Self::DEFAULT_SCORE,
            market: Self::DEFAULT_SCORE,
            model: Self::DEFAULT_SCORE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorResponse {
    pub advisor_id: String,
    pub response: String,
    pub scores: AdvisorScores,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeResult {
    pub challenge: String,
    pub advisor_responses: Vec<AdvisorResponse>,
}
