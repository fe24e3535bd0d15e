//! Formatter Seam
//!
//! Generated text is handed to a source formatter before it is written out.
//! Formatters fail loudly on malformed input.

pub type FormatResult = std::result::Result<String, Box<dyn std::error::Error + Send + Sync>>;

pub trait SourceFormatter {
    fn format(&self, source: &str) -> FormatResult;
}

/// Leaves the generated text untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityFormatter;

impl SourceFormatter for IdentityFormatter {
    fn format(&self, source: &str) -> FormatResult {
        Ok(source.to_string())
    }
}

impl<F> SourceFormatter for F
where
    F: Fn(&str) -> FormatResult,
{
    fn format(&self, source: &str) -> FormatResult {
        self(source)
    }
}
