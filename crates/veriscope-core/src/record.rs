//! Wire records for the investigation event stream.
//!
//! The backend answers `/investigate` with `application/x-ndjson`: one JSON
//! object per line, discriminated by a `type` field. There is no sentinel
//! record; stream closure is the terminal signal.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One decoded NDJSON line from the investigation stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Record {
    /// Progress from one analysis agent.
    Log { agent: String, message: String },
    /// Terminal verdict payload. At most one per run is honored.
    Result(FinalReport),
    /// Keep-alive sent while the backend is busy. Carries no state change.
    Ping,
    /// Record kinds this client predates. Ignored, never fatal.
    #[serde(other)]
    Unknown,
}

/// Payload of the `result` record.
///
/// The backend guarantees `final_verdict`; everything else may be absent
/// depending on which agents ran.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalReport {
    pub final_verdict: Verdict,
    /// Raw per-agent evidence blobs. Shape varies by agent, kept opaque.
    #[serde(default)]
    pub swarm_logs: Vec<Value>,
    /// Claim the backend derived when the user submitted none.
    #[serde(default)]
    pub auto_claim: Option<String>,
    #[serde(default)]
    pub is_video: bool,
}

/// Terminal classification of the submitted media. Immutable once received.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub verdict: VerdictLabel,
    /// 0–100. Absent when the judge declined to score.
    #[serde(default)]
    pub confidence_score: f32,
    pub summary: String,
    #[serde(default)]
    pub sources: Vec<Source>,
}

/// Corroborating source cited by the verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VerdictLabel {
    Fake,
    Real,
    /// Older backends spell this `UNVERIFIED`.
    #[serde(alias = "UNVERIFIED")]
    Uncertain,
}

impl VerdictLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fake => "FAKE",
            Self::Real => "REAL",
            Self::Uncertain => "UNCERTAIN",
        }
    }
}
