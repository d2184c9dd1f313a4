use std::borrow::Cow;

use crate::metadata::{MetadataSource, TrackId};

use super::buffer::BoundedBuf;
use super::directive::{Directive, format_clock, format_duration};

/// Substituted for fields the track does not have.
pub const NULL_PLACEHOLDER: &str = "<null>";

const MARKER: char = '%';

/// Output of a single [`render`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    text: String,
    truncated: bool,
    unknown: Vec<char>,
}

impl Rendered {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in bytes. Always below the render capacity.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True when some output was cut off or template input was left
    /// unconsumed because the buffer filled up.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Keys of the unknown directives that were skipped, in template order.
    pub fn unknown_directives(&self) -> &[char] {
        &self.unknown
    }

    pub fn into_parts(self) -> (String, usize) {
        let len = self.text.len();
        (self.text, len)
    }
}

/// Render `template` for `track` into at most `capacity - 1` bytes.
///
/// Each `%` marker costs one byte of the capacity budget even though it is
/// never written. Unknown directives are logged and produce no output; a
/// trailing lone `%` is dropped. A capacity of 0 renders the empty string.
pub fn render<S>(template: &str, source: &S, track: TrackId, capacity: usize) -> Rendered
where
    S: MetadataSource + ?Sized,
{
    let mut buf = BoundedBuf::new(capacity);
    let mut unknown = Vec::new();
    let mut input = template.chars();

    while buf.has_room() {
        let Some(c) = input.next() else { break };

        if c != MARKER {
            buf.push_char(c);
            continue;
        }

        buf.charge_marker();
        let Some(key) = input.next() else { break };

        let value: Cow<'_, str> = match Directive::from_key(key) {
            Directive::Percent => {
                buf.push_percent();
                continue;
            }
            Directive::Unknown(key) => {
                tracing::warn!(%key, "unknown conversion character in format");
                unknown.push(key);
                continue;
            }
            Directive::Field(field) => match source.lookup_string(track, field) {
                Some(v) => Cow::Owned(v),
                None => Cow::Borrowed(NULL_PLACEHOLDER),
            },
            Directive::TotalTime => Cow::Owned(format_duration(source.total_duration(track))),
            Directive::Playtime => Cow::Owned(format_clock(source.elapsed_playtime(track))),
        };

        buf.push_value(&value);
    }

    let truncated = buf.was_clamped() || leftover_has_output(input.as_str(), source, track);

    Rendered {
        text: buf.into_string(),
        truncated,
        unknown,
    }
}

/// Whether template input left over after the buffer filled up would have
/// written anything. Lone trailing markers and unknown keys would not.
fn leftover_has_output<S>(rest: &str, source: &S, track: TrackId) -> bool
where
    S: MetadataSource + ?Sized,
{
    let mut input = rest.chars();
    while let Some(c) = input.next() {
        if c != MARKER {
            return true;
        }
        let Some(key) = input.next() else {
            return false;
        };
        match Directive::from_key(key) {
            Directive::Unknown(_) => continue,
            Directive::Field(field) => {
                if source
                    .lookup_string(track, field)
                    .is_none_or(|v| !v.is_empty())
                {
                    return true;
                }
            }
            Directive::Percent | Directive::TotalTime | Directive::Playtime => return true,
        }
    }
    false
}
