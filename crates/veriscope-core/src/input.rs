//! Investigation inputs as chosen by the user.

use crate::state::InputEcho;

/// Media input for one run: a link or an uploaded file, plus an optional
/// claim to check. The media or the claim may be omitted, but not both.
#[derive(Debug, Clone)]
pub enum InvestigationInput {
    Url {
        value: String,
        claim: String,
    },
    Upload {
        file_name: String,
        bytes: Vec<u8>,
        claim: String,
    },
}

impl InvestigationInput {
    pub fn claim(&self) -> &str {
        match self {
            Self::Url { claim, .. } | Self::Upload { claim, .. } => claim,
        }
    }

    /// Whether the input carries enough to submit: some media or a claim.
    pub fn is_submittable(&self) -> bool {
        match self {
            Self::Url { value, claim } => {
                !value.trim().is_empty() || !claim.trim().is_empty()
            }
            Self::Upload { bytes, claim, .. } => {
                !bytes.is_empty() || !claim.trim().is_empty()
            }
        }
    }

    /// Projection kept in the run state for rendering.
    pub fn echo(&self) -> InputEcho {
        match self {
            Self::Url { value, claim } => InputEcho {
                url: Some(value.clone()).filter(|v| !v.trim().is_empty()),
                claim: claim.clone(),
            },
            Self::Upload { claim, .. } => InputEcho {
                url: None,
                claim: claim.clone(),
            },
        }
    }
}
