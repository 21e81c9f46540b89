//! NDJSON line framing over an arbitrarily chunked byte stream.
//!
//! The transport delivers bytes with no respect for record boundaries: one
//! chunk may split a line, split a multi-byte UTF-8 sequence, or carry
//! several lines at once. [`LineDecoder`] accumulates bytes, hands out
//! complete `\n`-terminated lines, and holds the trailing fragment back
//! until the next chunk (or [`LineDecoder::finish`]).

/// Stateful splitter turning raw transport chunks into complete text lines.
///
/// Buffering is byte-level: a UTF-8 continuation byte can never be `\n`,
/// so a character split across two chunks is reassembled before decoding.
/// Completed lines decode lossily; a corrupt line then fails JSON parsing
/// downstream as a per-line event instead of poisoning the stream.
#[derive(Debug, Default)]
pub struct LineDecoder {
    buf: Vec<u8>,
}

impl LineDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk and return every line it completes, in order.
    ///
    /// The fragment after the last `\n` stays buffered for the next call.
    /// Blank and all-whitespace lines are dropped here so callers never
    /// attempt to parse them. A zero-byte chunk is a no-op.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buf.extend_from_slice(chunk);

        let mut lines = Vec::new();
        while let Some(at) = self.buf.iter().position(|&b| b == b'\n') {
            let rest = self.buf.split_off(at + 1);
            let mut line = std::mem::replace(&mut self.buf, rest);
            line.pop(); // the terminator
            let text = String::from_utf8_lossy(&line).into_owned();
            if !text.trim().is_empty() {
                lines.push(text);
            }
        }
        lines
    }

    /// Drain the buffer at stream end.
    ///
    /// Some senders omit the terminator on the last line, so a non-blank
    /// leftover is still returned for a parse attempt. The buffer is
    /// cleared either way.
    pub fn finish(&mut self) -> Option<String> {
        let leftover = std::mem::take(&mut self.buf);
        let text = String::from_utf8_lossy(&leftover).into_owned();
        if text.trim().is_empty() { None } else { Some(text) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "{\"type\":\"log\",\"agent\":\"SEARCH\",\"message\":\"Scanning…\"}\n{\"type\":\"ping\"}\n{\"type\":\"log\",\"agent\":\"JUDGE\",\"message\":\"Verdict café ☕\"}\n";

    /// Feed the text in the given chunks and collect every emitted line.
    fn collect(chunks: &[&[u8]]) -> Vec<String> {
        let mut decoder = LineDecoder::new();
        let mut lines = Vec::new();
        for chunk in chunks {
            lines.extend(decoder.feed(chunk));
        }
        lines.extend(decoder.finish());
        lines
    }

    /// Reference: split the whole text at once, keep non-blank lines.
    fn reference(text: &str) -> Vec<String> {
        text.split('\n')
            .filter(|l| !l.trim().is_empty())
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn one_chunk_matches_reference() {
        assert_eq!(collect(&[TEXT.as_bytes()]), reference(TEXT));
    }

    #[test]
    fn one_byte_per_chunk_matches_reference() {
        let chunks: Vec<&[u8]> = TEXT.as_bytes().chunks(1).collect();
        assert_eq!(collect(&chunks), reference(TEXT));
    }

    #[test]
    fn every_split_point_matches_reference() {
        // Cut the stream in two at every byte offset, including inside the
        // multi-byte characters.
        let bytes = TEXT.as_bytes();
        for cut in 0..=bytes.len() {
            let (a, b) = bytes.split_at(cut);
            assert_eq!(collect(&[a, b]), reference(TEXT), "cut at {cut}");
        }
    }

    #[test]
    fn empty_stream_yields_nothing() {
        assert!(collect(&[]).is_empty());
    }

    #[test]
    fn zero_byte_chunks_are_noops() {
        assert_eq!(collect(&[b"", TEXT.as_bytes(), b""]), reference(TEXT));
    }

    #[test]
    fn terminator_only_stream_yields_nothing() {
        assert!(collect(&[b"\n\n\n"]).is_empty());
    }

    #[test]
    fn whitespace_lines_are_dropped() {
        assert_eq!(collect(&[b"  \n{\"type\":\"ping\"}\n\t\n"]), vec![
            "{\"type\":\"ping\"}".to_string()
        ]);
    }

    #[test]
    fn missing_trailing_terminator_is_recovered_by_finish() {
        let text = "{\"type\":\"ping\"}\n{\"type\":\"result\"}";
        assert_eq!(collect(&[text.as_bytes()]), reference(text));
    }

    #[test]
    fn finish_clears_the_buffer() {
        let mut decoder = LineDecoder::new();
        decoder.feed(b"partial");
        assert_eq!(decoder.finish().as_deref(), Some("partial"));
        assert!(decoder.finish().is_none());
    }
}
