//! Turn a raw model reply into a string table.
//!
//! Two stages, both pure:
//! - [`sanitize`] strips one enclosing code fence, if present
//! - [`parse`] reads the remaining text as a string table
//!
//! [`normalize`] runs both. There is no partial acceptance: the whole reply
//! parses or the call fails.

use crate::error::NormalizeError;
use crate::table::StringTable;
use tracing::debug;

const FENCE: &str = "```";

/// The kind of fence that was removed from a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fence {
    /// A plain ```` ``` ```` opening line
    Bare,
    /// An opening line with a language tag, e.g. ```` ```json ````
    Tagged(String),
}

/// Output of the sanitize stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitized<'a> {
    /// Text left after stripping, ready to parse
    pub text: &'a str,
    /// The fence that was removed, or `None` when the reply had none
    pub fence: Option<Fence>,
}

impl Sanitized<'_> {
    pub fn was_fenced(&self) -> bool {
        self.fence.is_some()
    }
}

/// Strip a single enclosing code fence from `raw`.
///
/// Surrounding whitespace is trimmed. When the trimmed text starts with a fence,
/// the whole opening line and one closing fence marker are removed. Text without an
/// opening fence is returned as is.
pub fn sanitize(raw: &str) -> Sanitized<'_> {
    let trimmed = raw.trim();

    let Some(after_marker) = trimmed.strip_prefix(FENCE) else {
        return Sanitized {
            text: trimmed,
            fence: None,
        };
    };

    let (tag, body) = match after_marker.split_once('\n') {
        Some((tag, body)) => (tag.trim(), body),
        // Single-line reply such as ```{"a": "b"}```
        None => ("", after_marker),
    };

    let body = body.trim_end();
    let body = body.strip_suffix(FENCE).unwrap_or(body);

    let fence = if tag.is_empty() {
        Fence::Bare
    } else {
        Fence::Tagged(tag.to_string())
    };

    Sanitized {
        text: body.trim(),
        fence: Some(fence),
    }
}

/// Parse sanitized text as a string table.
pub fn parse(text: &str) -> Result<StringTable, NormalizeError> {
    Ok(StringTable::from_json(text)?)
}

/// Strip an optional fence from `raw` and parse the result.
pub fn normalize(raw: &str) -> Result<StringTable, NormalizeError> {
    let sanitized = sanitize(raw);
    if sanitized.was_fenced() {
        debug!("Stripped {:?} fence from reply", sanitized.fence);
    }
    parse(sanitized.text)
}
