//! The investigation controller: owns the run state machine, consumes the
//! decoded record stream, and publishes a snapshot after every mutation.
//!
//! One controller drives one run at a time. Everything between two awaits
//! is synchronous: buffer splitting, JSON parsing, and state transitions
//! never interleave within a run.

use bytes::Bytes;
use futures::{Stream, StreamExt};
use tracing::{debug, trace, warn};

use veriscope_core::{InvestigationInput, InvestigationState, LogEntry, Phase, Record};

use crate::api::ApiClient;
use crate::decode::LineDecoder;
use crate::error::ClientError;

/// Drives one investigation run end-to-end and owns its state.
pub struct Investigator {
    api: ApiClient,
    state: InvestigationState,
}

impl Investigator {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: InvestigationState::default(),
        }
    }

    /// Submit the input and consume the response stream to conclusion.
    ///
    /// `on_change` fires after every state mutation with the current
    /// state; records are dispatched strictly in arrival order, so a
    /// result is only ever observed after all preceding log lines.
    ///
    /// Fails synchronously, with no request issued, when the input is not
    /// submittable or a run is already in flight. Fails after concluding
    /// the run (`result = None`) when the stream cannot be established.
    /// A stream that errors mid-flight is not a failure of `start`: the
    /// run concludes as incomplete, same as a stream that ends early.
    pub async fn start<F>(
        &mut self,
        input: InvestigationInput,
        mut on_change: F,
    ) -> Result<(), ClientError>
    where
        F: FnMut(&InvestigationState),
    {
        if self.state.phase == Phase::Running {
            return Err(ClientError::AlreadyRunning);
        }
        validate(&input)?;

        self.state = InvestigationState {
            phase: Phase::Running,
            logs: Vec::new(),
            result: None,
            input_echo: Some(input.echo()),
        };
        on_change(&self.state);

        let stream = match self.api.investigate(&input).await {
            Ok(stream) => stream,
            Err(e) => {
                warn!(error = %e, "could not establish the stream");
                self.state.phase = Phase::Concluded;
                on_change(&self.state);
                return Err(e);
            }
        };

        consume(&mut self.state, stream, &mut on_change).await;
        Ok(())
    }

    /// Snapshot of the current run state. A copy, never the live value.
    pub fn snapshot(&self) -> InvestigationState {
        self.state.clone()
    }

    /// Return to `Idle` after a concluded run, clearing logs and result.
    ///
    /// A no-op from `Idle` or `Running`: reset never aborts an in-flight
    /// run.
    pub fn reset(&mut self) {
        if self.state.phase == Phase::Concluded {
            self.state = InvestigationState::default();
        }
    }
}

fn validate(input: &InvestigationInput) -> Result<(), ClientError> {
    if input.is_submittable() {
        return Ok(());
    }
    Err(match input {
        InvestigationInput::Url { .. } => {
            ClientError::Validation("provide a URL or a claim")
        }
        InvestigationInput::Upload { .. } => {
            ClientError::Validation("upload a file or provide a claim")
        }
    })
}

/// Drain the byte stream through the line decoder, dispatching each record
/// into `state`, and conclude the run when the stream ends.
async fn consume<S, F>(state: &mut InvestigationState, stream: S, on_change: &mut F)
where
    S: Stream<Item = Result<Bytes, ClientError>>,
    F: FnMut(&InvestigationState),
{
    let mut decoder = LineDecoder::new();
    let mut stream = std::pin::pin!(stream);

    while let Some(next) = stream.next().await {
        match next {
            Ok(chunk) => {
                for line in decoder.feed(&chunk) {
                    dispatch_line(state, &line, on_change);
                }
            }
            Err(e) => {
                warn!(error = %e, "stream failed mid-flight, concluding run");
                break;
            }
        }
    }

    if let Some(tail) = decoder.finish() {
        dispatch_line(state, &tail, on_change);
    }

    // No result record ever arrived: conclude visibly instead of hanging.
    if state.phase == Phase::Running {
        warn!("stream ended without a result record");
        state.phase = Phase::Concluded;
        on_change(state);
    }
}

/// Parse one line and apply it to the state.
///
/// A line that fails to parse is dropped and the stream continues; a
/// malformed record never mutates state.
fn dispatch_line<F>(state: &mut InvestigationState, line: &str, on_change: &mut F)
where
    F: FnMut(&InvestigationState),
{
    let record: Record = match serde_json::from_str(line) {
        Ok(record) => record,
        Err(e) => {
            warn!(error = %e, line = %line, "dropping undecodable line");
            return;
        }
    };

    match record {
        Record::Log { agent, message } => {
            if state.phase != Phase::Running {
                debug!(agent = %agent, "log after conclusion ignored");
                return;
            }
            state.logs.push(LogEntry { agent, message });
            on_change(state);
        }
        Record::Result(report) => {
            if state.phase == Phase::Concluded {
                warn!("duplicate result record ignored");
                return;
            }
            state.result = Some(report);
            state.phase = Phase::Concluded;
            on_change(state);
        }
        Record::Ping => trace!("keep-alive ping"),
        Record::Unknown => debug!(line = %line, "unrecognized record kind ignored"),
    }
}
