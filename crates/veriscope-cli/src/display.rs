//! Terminal rendering of a concluded investigation.
//!
//! Renders the verdict card: label, summary, confidence meter,
//! corroborating sources, the auto-detected claim, and the media preview
//! line for video verdicts.

use veriscope_core::{
    InvestigationState, Platform, Verdict, classify, youtube_embed_url,
};

const MAX_SOURCES: usize = 10;
const METER_WIDTH: usize = 40;

/// Print the final state of a run as a verdict card.
///
/// A run that concluded without a result renders as "no verdict received"
/// rather than pretending anything was decided.
pub fn print_report(state: &InvestigationState) {
    println!();
    let Some(report) = &state.result else {
        println!("=== NO VERDICT RECEIVED ===");
        println!("The stream ended before the backend produced a result.");
        return;
    };

    print_verdict(&report.final_verdict);

    // Auto-detected claim, shown only when the user supplied none.
    let user_claim = state
        .input_echo
        .as_ref()
        .map(|e| e.claim.as_str())
        .unwrap_or("");
    if let Some(auto) = &report.auto_claim
        && user_claim.trim().is_empty()
    {
        println!();
        println!("[AUTO-DETECTED CONTEXT] {auto}");
    }

    if report.is_video
        && let Some(url) = state.input_echo.as_ref().and_then(|e| e.url.as_deref())
    {
        print_preview(url);
    }
}

fn print_verdict(verdict: &Verdict) {
    println!("=== {} ===", verdict.verdict.as_str());
    println!("{}", verdict.summary);
    println!();
    print_confidence(verdict.confidence_score);

    if !verdict.sources.is_empty() {
        println!();
        println!("Corroborating sources ({}):", verdict.sources.len());
        let show = verdict.sources.len().min(MAX_SOURCES);
        for source in &verdict.sources[..show] {
            println!("  {:<30} {}", source.name, source.url);
        }
        if verdict.sources.len() > MAX_SOURCES {
            println!("  ... and {} more", verdict.sources.len() - MAX_SOURCES);
        }
    }
}

fn print_confidence(score: f32) {
    let clamped = score.clamp(0.0, 100.0);
    let filled = (clamped / 100.0 * METER_WIDTH as f32).round() as usize;
    println!(
        "confidence  [{}{}] {:.0}%",
        "#".repeat(filled),
        "-".repeat(METER_WIDTH - filled),
        clamped
    );
}

/// Print the media preview reference for a video verdict.
///
/// YouTube links with an extractable id get the muted autoplay embed URL;
/// anything unrecognized (or a YouTube link with no id) falls back to the
/// plain link, which is always safe to show.
fn print_preview(url: &str) {
    let media = classify(url);
    println!();
    match (media.platform, media.embed_id) {
        (Platform::Youtube, Some(id)) => {
            println!("Preview (youtube): {}", youtube_embed_url(&id));
        }
        (Platform::Instagram | Platform::Tiktok, _) => {
            println!("Preview ({}): {url}", media.platform.as_str());
        }
        _ => {
            println!("Preview unavailable. Open link: {url}");
        }
    }
}
