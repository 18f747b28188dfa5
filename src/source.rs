//! External search-command line source.
//!
//! The census does not decompress or scan archives itself; it runs an
//! external decompress-and-search tool (`zgrep` by default) through the shell
//! so the archive glob expands, and consumes the tool's stdout as a line
//! stream. Launching the command is the only fatal failure: there is no
//! fallback data source, and the command runs exactly once per run.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::process::{Child, ChildStdout, Command};
use tracing::{debug, warn};

use crate::traits::{LineSource, SourceError};

/// Maximum payload bytes of one emitted line. A longer line is split across
/// consecutive reads, which downstream treats as separate lines.
pub const LINE_CAP: usize = 1024;

/// The external decompress-and-search command template:
/// `<search_tool> '<pattern>' <models_glob>`, run via `sh -c`.
#[derive(Debug, Clone)]
pub struct SearchCommand {
    /// Tool that decompresses each archive and emits matching lines, each
    /// prefixed with `<path>:`.
    pub search_tool: String,

    /// Pattern handed to the search tool.
    pub pattern: String,

    /// Shell glob of compressed archives to scan (expanded by `sh`).
    pub models_glob: String,
}

impl Default for SearchCommand {
    fn default() -> Self {
        Self {
            search_tool: "zgrep".to_string(),
            pattern: r"^\*Product:".to_string(),
            models_glob: "/usr/share/cups/model/*.ppd.gz".to_string(),
        }
    }
}

impl SearchCommand {
    /// Renders the command line passed to `sh -c`. The pattern is
    /// single-quoted; the glob is left bare so the shell expands it.
    pub fn shell_line(&self) -> String {
        format!("{} '{}' {}", self.search_tool, self.pattern, self.models_glob)
    }
}

/// [`LineSource`] over a spawned external command's stdout.
pub struct CommandLineSource {
    child: Child,
    stdout: BufReader<ChildStdout>,
    done: bool,
}

impl CommandLineSource {
    /// Spawns the search command through the shell.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Launch`] if the process cannot be started.
    /// This is fatal for the whole run; no partial report is possible.
    pub fn spawn(command: &SearchCommand) -> Result<Self, SourceError> {
        let shell_line = command.shell_line();
        debug!(command = %shell_line, "spawning search command");
        Self::spawn_program("/bin/sh", &["-c", &shell_line])
    }

    /// Spawns an arbitrary program with piped stdout. Used directly by tests
    /// and by [`CommandLineSource::spawn`].
    pub fn spawn_program(program: &str, args: &[&str]) -> Result<Self, SourceError> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(SourceError::Launch)?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| SourceError::Launch(std::io::Error::other("child stdout not captured")))?;

        Ok(Self {
            child,
            stdout: BufReader::new(stdout),
            done: false,
        })
    }
}

#[async_trait]
impl LineSource for CommandLineSource {
    async fn next_line(&mut self) -> Result<Option<String>, SourceError> {
        if self.done {
            return Ok(None);
        }
        match read_capped_line(&mut self.stdout, LINE_CAP).await? {
            Some(line) => Ok(Some(line)),
            None => {
                self.done = true;
                // The exit status is logged but not surfaced: an empty or
                // truncated stream yields a degenerate report, not an error.
                match self.child.wait().await {
                    Ok(status) if !status.success() => {
                        warn!(%status, "search command exited with nonzero status");
                    }
                    Ok(_) => {}
                    Err(e) => warn!(error = %e, "failed to reap search command"),
                }
                Ok(None)
            }
        }
    }
}

/// Reads one newline-terminated line, stripped of the newline, returning at
/// most `cap` payload bytes per call. When a line exceeds `cap`, the
/// remainder is returned by subsequent calls. `None` at end of stream.
///
/// Invalid UTF-8 is replaced rather than rejected; PPD content is expected to
/// be ASCII.
pub(crate) async fn read_capped_line<R>(
    reader: &mut R,
    cap: usize,
) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf: Vec<u8> = Vec::new();
    loop {
        let available = reader.fill_buf().await?;
        if available.is_empty() {
            if buf.is_empty() {
                return Ok(None);
            }
            return Ok(Some(String::from_utf8_lossy(&buf).into_owned()));
        }

        let room = cap - buf.len();
        match available.iter().take(room).position(|&b| b == b'\n') {
            Some(pos) => {
                buf.extend_from_slice(&available[..pos]);
                reader.consume(pos + 1);
                return Ok(Some(String::from_utf8_lossy(&buf).into_owned()));
            }
            None => {
                let take = room.min(available.len());
                buf.extend_from_slice(&available[..take]);
                reader.consume(take);
                if buf.len() == cap {
                    return Ok(Some(String::from_utf8_lossy(&buf).into_owned()));
                }
            }
        }
    }
}
