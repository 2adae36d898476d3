//! Bidirectional-text workaround: messages bound for a terminal are piped
//! through an external reshaping tool (`bidiv`, else `fribidi`) so mixed
//! left-to-right and right-to-left scripts render in the right order.
//!
//! Framing is purely by line count. The tool must emit exactly one line for
//! every line it reads and must not buffer across messages. Reads are bounded
//! by a timeout so a stalled tool degrades output instead of hanging the caller.

use crate::internal;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Reshaping tools in order of preference, with their fixed arguments.
const TOOLS: [(&str, &[&str]); 2] = [("bidiv", &[]), ("fribidi", &["-c", "UTF-8"])];

/// Owns the tool's pipes and, when spawned here, the process itself.
/// Dropping it closes the input pipe and kills the process.
pub struct BidiWorkaround {
    writer: Box<dyn Write + Send>,
    lines: Receiver<io::Result<String>>,
    timeout: Duration,
    child: Option<Child>,
}

impl BidiWorkaround {
    /// Spawns a reshaping tool sized to the current terminal width.
    ///
    /// The tool's stdout is a plain pipe, not a pty. A tool that block-buffers
    /// a non-terminal stdout will miss the read timeout and bidi turns itself
    /// off; use [`BidiWorkaround::from_pipes`] with pty ends in that case.
    ///
    /// # Errors
    /// `Error::BidiUnavailable` when neither tool can be started.
    pub fn spawn(timeout: Duration) -> Result<Self, crate::Error> {
        let width = terminal_size::terminal_size().map(|(terminal_size::Width(w), _)| w);
        Self::spawn_with_width(width, timeout)
    }

    /// # Errors
    /// `Error::BidiUnavailable` when neither tool can be started.
    pub fn spawn_with_width(width: Option<u16>, timeout: Duration) -> Result<Self, crate::Error> {
        let width_args: Vec<String> =
            width.map_or_else(Vec::new, |w| vec!["-w".to_string(), w.to_string()]);

        for (program, args) in TOOLS {
            let spawned = Command::new(program)
                .args(args)
                .args(&width_args)
                .stdin(Stdio::piped())
                .stdout(Stdio::piped())
                .stderr(Stdio::inherit())
                .spawn();

            match spawned {
                Ok(child) => {
                    internal::debug(&format!("bidi workaround using {program}"));
                    return Self::from_child(child, timeout);
                }
                Err(source) => {
                    let err = crate::Error::ProcessSpawn {
                        program: program.to_string(),
                        source,
                    };
                    internal::debug(&err.to_string());
                }
            }
        }

        Err(crate::Error::BidiUnavailable)
    }

    /// Wraps an already spawned process with piped stdin and stdout.
    ///
    /// # Errors
    /// `Error::BidiClosed` if either pipe is missing.
    pub fn from_child(mut child: Child, timeout: Duration) -> Result<Self, crate::Error> {
        let (Some(stdin), Some(stdout)) = (child.stdin.take(), child.stdout.take()) else {
            let _ = child.kill();
            let _ = child.wait();
            return Err(crate::Error::BidiClosed);
        };
        let mut workaround = Self::from_pipes(stdin, stdout, timeout)?;
        workaround.child = Some(child);
        Ok(workaround)
    }

    /// Same framing over arbitrary pipes.
    ///
    /// # Errors
    /// I/O error if the reader thread cannot be started.
    pub fn from_pipes(
        writer: impl Write + Send + 'static,
        reader: impl Read + Send + 'static,
        timeout: Duration,
    ) -> Result<Self, crate::Error> {
        let (tx, rx) = mpsc::channel();
        thread::Builder::new()
            .name("routelog-bidi".to_string())
            .spawn(move || {
                let mut reader = BufReader::new(reader);
                loop {
                    let mut line = Vec::new();
                    match reader.read_until(b'\n', &mut line) {
                        Ok(0) => break,
                        Ok(_) => {
                            let line = String::from_utf8_lossy(&line).into_owned();
                            if tx.send(Ok(line)).is_err() {
                                break;
                            }
                        }
                        Err(e) => {
                            let _ = tx.send(Err(e));
                            break;
                        }
                    }
                }
            })?;

        Ok(Self {
            writer: Box::new(writer),
            lines: rx,
            timeout,
            child: None,
        })
    }

    /// Sends `message` through the tool and returns its reshaped lines,
    /// joined, without the final newline.
    ///
    /// # Errors
    /// `BidiTimeout` when a line does not arrive in time, `BidiClosed` when
    /// the tool's output ends, `Io` on pipe failures.
    pub fn reshape(&mut self, message: &str) -> Result<String, crate::Error> {
        let line_count = message.matches('\n').count() + 1;

        self.writer.write_all(message.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;

        let mut result = String::with_capacity(message.len() + 1);
        for _ in 0..line_count {
            match self.lines.recv_timeout(self.timeout) {
                Ok(Ok(line)) => result.push_str(&line),
                Ok(Err(e)) => return Err(e.into()),
                Err(RecvTimeoutError::Timeout) => return Err(crate::Error::BidiTimeout),
                Err(RecvTimeoutError::Disconnected) => return Err(crate::Error::BidiClosed),
            }
        }

        if result.ends_with('\n') {
            result.pop();
        }
        Ok(result)
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Drop for BidiWorkaround {
    fn drop(&mut self) {
        // closing stdin lets a well-behaved tool exit on its own
        self.writer = Box::new(io::sink());
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo_pipeline(timeout: Duration) -> BidiWorkaround {
        let (in_reader, in_writer) = io::pipe().unwrap();
        let (out_reader, mut out_writer) = io::pipe().unwrap();
        thread::spawn(move || {
            let reader = BufReader::new(in_reader);
            for line in reader.lines() {
                let Ok(line) = line else { break };
                if writeln!(out_writer, "{line}").is_err() {
                    break;
                }
            }
        });
        BidiWorkaround::from_pipes(in_writer, out_reader, timeout).unwrap()
    }

    #[test]
    fn single_line_has_no_trailing_newline() {
        let mut bidi = echo_pipeline(DEFAULT_TIMEOUT);
        assert_eq!(bidi.reshape("hello").unwrap(), "hello");
    }

    #[test]
    fn messages_stay_framed_across_calls() {
        let mut bidi = echo_pipeline(DEFAULT_TIMEOUT);
        assert_eq!(bidi.reshape("a\nb").unwrap(), "a\nb");
        assert_eq!(bidi.reshape("c").unwrap(), "c");
    }

    #[test]
    fn silent_tool_times_out() {
        let (_in_reader, in_writer) = io::pipe().unwrap();
        let (out_reader, _out_writer) = io::pipe().unwrap();
        let mut bidi =
            BidiWorkaround::from_pipes(in_writer, out_reader, Duration::from_millis(50)).unwrap();
        assert!(matches!(
            bidi.reshape("stuck"),
            Err(crate::Error::BidiTimeout)
        ));
    }

    #[test]
    fn closed_output_is_reported() {
        let (_in_reader, in_writer) = io::pipe().unwrap();
        let (out_reader, out_writer) = io::pipe().unwrap();
        drop(out_writer);
        let mut bidi = BidiWorkaround::from_pipes(in_writer, out_reader, DEFAULT_TIMEOUT).unwrap();
        assert!(matches!(bidi.reshape("gone"), Err(crate::Error::BidiClosed)));
    }
}
