use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to launch search command: {0}")]
    Launch(#[source] std::io::Error),
    #[error("I/O error while reading search output: {0}")]
    Read(#[from] std::io::Error),
}

/// A read-once, sequential stream of text lines.
///
/// Implementations yield newline-stripped lines in stream order until the
/// stream is exhausted; there is no way to restart or rewind.
#[async_trait]
pub trait LineSource: Send {
    /// Returns the next line, or `None` once the stream ends.
    async fn next_line(&mut self) -> Result<Option<String>, SourceError>;
}
