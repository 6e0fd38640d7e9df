//! Text chunking for knowledge ingestion.
//!
//! Splits documents into overlapping windows, preferring to break at
//! paragraph, line, or sentence boundaries before falling back to a hard
//! character cut.

/// Chunking parameters.
#[derive(Debug, Clone)]
pub struct ChunkingConfig {
    /// Target chunk size in characters.
    pub chunk_size: usize,

    /// Overlap between consecutive chunks in characters.
    pub chunk_overlap: usize,

    /// Break-point preference, highest priority first.
    pub separators: Vec<String>,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: 500,
            chunk_overlap: 50,
            separators: vec![
                "\n\n".to_string(),
                "\n".to_string(),
                ". ".to_string(),
                "! ".to_string(),
                "? ".to_string(),
                " ".to_string(),
            ],
        }
    }
}

/// Document chunker.
pub struct Chunker {
    config: ChunkingConfig,
}

impl Default for Chunker {
    fn default() -> Self {
        Self::new(ChunkingConfig::default())
    }
}

impl Chunker {
    /// Create a chunker with the given configuration.
    pub fn new(config: ChunkingConfig) -> Self {
        Self { config }
    }

    /// Split `text` into chunks. Whitespace-only chunks are dropped; the
    /// window always advances, so this terminates for any input.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let total = chars.len();
        let mut chunks = Vec::new();
        if total == 0 {
            return chunks;
        }

        let size = self.config.chunk_size.max(1);
        // Clamped below the window size so `start` strictly increases.
        let overlap = self.config.chunk_overlap.min(size - 1);

        let mut start = 0;
        while start < total {
            let target_end = (start + size).min(total);
            let mut end = target_end;

            // Not at the end of the document: prefer a separator break.
            if target_end < total {
                let window: String = chars[start..target_end].iter().collect();
                for sep in &self.config.separators {
                    if let Some(pos) = window.rfind(sep) {
                        let cut = window[..pos].chars().count() + sep.chars().count();
                        if cut > overlap {
                            end = start + cut;
                            break;
                        }
                    }
                }
            }

            let chunk: String = chars[start..end].iter().collect();
            let trimmed = chunk.trim();
            if !trimmed.is_empty() {
                chunks.push(trimmed.to_string());
            }

            if end >= total {
                break;
            }
            start = end - overlap;
        }

        chunks
    }
}
