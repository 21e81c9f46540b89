pub mod input;
pub mod platform;
pub mod record;
pub mod state;

pub use input::InvestigationInput;
pub use platform::{MediaRef, Platform, classify, youtube_embed_url};
pub use record::{FinalReport, Record, Source, Verdict, VerdictLabel};
pub use state::{InputEcho, InvestigationState, LogEntry, Phase};
