//! Formats generated mocks by piping them through `gofmt`.

use gomockgen::format::{FormatResult, SourceFormatter};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct GofmtFormatter {
    program: PathBuf,
    args: Vec<String>,
}

impl GofmtFormatter {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        GofmtFormatter {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Extra arguments passed before the source is piped in, e.g. `-s`.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl Default for GofmtFormatter {
    fn default() -> Self {
        GofmtFormatter::new("gofmt")
    }
}

impl SourceFormatter for GofmtFormatter {
    fn format(&self, source: &str) -> FormatResult {
        debug!(program = %self.program.display(), bytes = source.len(), "running formatter");
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // A formatter that rejects the input may exit before reading all of
        // it; its stderr matters more than the broken pipe.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(source.as_bytes()),
            None => Ok(()),
        };
        let output = child.wait_with_output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            if stderr.is_empty() {
                return Err(format!("{} failed: {}", self.program.display(), output.status).into());
            }
            return Err(stderr.to_string().into());
        }
        written?;
        Ok(String::from_utf8(output.stdout)?)
    }
}
