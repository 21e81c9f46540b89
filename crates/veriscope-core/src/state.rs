//! Investigation workflow state.
//!
//! One [`InvestigationState`] value replaces the handful of independently
//! mutated view variables a naive client would keep: the phase, the log
//! lines, and the result can never drift apart because every mutation goes
//! through the controller's single dispatch point.

use serde::{Deserialize, Serialize};

use crate::record::FinalReport;

/// Workflow phase.
///
/// Legal transitions: `Idle → Running` on start, `Running → Concluded` on a
/// result record or stream end, `Concluded → Idle` on reset. Nothing else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Concluded,
}

/// One line of agent progress, appended in arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub agent: String,
    pub message: String,
}

/// The submitted URL/claim pair, retained for presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputEcho {
    pub url: Option<String>,
    pub claim: String,
}

/// Snapshot of one investigation run.
///
/// `logs` grows monotonically while the run is `Running`; `result` is set
/// at most once. A concluded run with `result = None` means the stream
/// ended without a verdict.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvestigationState {
    pub phase: Phase,
    pub logs: Vec<LogEntry>,
    pub result: Option<FinalReport>,
    pub input_echo: Option<InputEcho>,
}
