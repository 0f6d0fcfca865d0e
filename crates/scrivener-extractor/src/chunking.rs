//! Article/clause chunking of raw document text

use crate::patterns::HEADING;

/// Splits text into article/clause/section-delimited chunks
///
/// A line whose trimmed form starts with `article|clause|section <number>`
/// opens a new chunk. Text before the first heading forms a leading chunk.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArticleChunker;

impl ArticleChunker {
    /// Create a new chunker
    pub fn new() -> Self {
        Self
    }

    /// Chunk the given text
    ///
    /// Empty input yields no chunks. Input without headings yields a single
    /// trimmed chunk. Whitespace-only input is returned unchanged as one chunk.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let mut chunks = Vec::new();
        let mut current: Vec<&str> = Vec::new();

        for line in text.lines() {
            if Self::is_heading(line) && !current.is_empty() {
                Self::flush(&mut current, &mut chunks);
            }
            current.push(line);
        }
        Self::flush(&mut current, &mut chunks);

        if chunks.is_empty() {
            return vec![text.to_string()];
        }
        chunks
    }

    /// Chunk and rejoin with newlines
    pub fn normalize(&self, text: &str) -> String {
        self.chunk(text).join("\n")
    }

    /// Whether a line opens a new chunk
    pub fn is_heading(line: &str) -> bool {
        HEADING.is_match(line.trim())
    }

    fn flush(current: &mut Vec<&str>, chunks: &mut Vec<String>) {
        let chunk = current.join("\n");
        let chunk = chunk.trim();
        if !chunk.is_empty() {
            chunks.push(chunk.to_string());
        }
        current.clear();
    }
}
