//! Markup conversion capability injected by the caller.

/// Error type converters may fail with; the core never inspects it beyond
/// its message.
pub type MarkupError = Box<dyn std::error::Error + Send + Sync>;

/// Translates source-tracker markup (e.g. Textile) into the destination's
/// dialect. Implementations may call out to an external converter; the core
/// treats every call as a plain fallible function.
pub trait MarkupConverter {
    fn convert(&self, text: &str) -> std::result::Result<String, MarkupError>;
}

/// Passes text through unchanged, for sources already written in the
/// destination's markup dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct Verbatim;

impl MarkupConverter for Verbatim {
    fn convert(&self, text: &str) -> std::result::Result<String, MarkupError> {
        Ok(text.to_string())
    }
}
