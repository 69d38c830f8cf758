//! Text chunking with overlap

use unicode_segmentation::UnicodeSegmentation;

/// Text chunker with configurable size and overlap
pub struct TextChunker {
    /// Target chunk size in characters
    chunk_size: usize,
    /// Overlap between consecutive chunks, in characters
    overlap: usize,
    /// Chunks shorter than this are dropped
    min_size: usize,
}

impl TextChunker {
    /// Create a new chunker
    pub fn new(chunk_size: usize, overlap: usize) -> Self {
        Self {
            chunk_size,
            overlap,
            min_size: 20,
        }
    }

    /// Split text into overlapping chunks along sentence boundaries
    ///
    /// Sentences are accumulated until the target size would be
    /// exceeded; each new chunk starts with the tail of the previous
    /// one so context is not lost at the seam. A sentence longer than
    /// the chunk size becomes its own chunk.
    pub fn chunk_text(&self, text: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current = String::new();

        for sentence in text.unicode_sentences() {
            if !current.is_empty() && current.len() + sentence.len() > self.chunk_size {
                let overlap_tail = self.tail(&current);
                self.push_chunk(&mut chunks, &current);
                current = overlap_tail;
            }
            current.push_str(sentence);
        }

        self.push_chunk(&mut chunks, &current);

        chunks
    }

    /// Trailing characters of `text` carried into the next chunk
    fn tail(&self, text: &str) -> String {
        if self.overlap == 0 {
            return String::new();
        }
        let chars: Vec<char> = text.chars().collect();
        let start = chars.len().saturating_sub(self.overlap);
        chars[start..].iter().collect()
    }

    fn push_chunk(&self, chunks: &mut Vec<String>, text: &str) {
        let trimmed = text.trim();
        if trimmed.len() >= self.min_size {
            chunks.push(trimmed.to_string());
        }
    }
}
