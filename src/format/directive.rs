use crate::metadata::MetaField;

/// A conversion key following a `%` marker.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `%A`, `%a`, `%t`, `%n`, `%F`: a string field lookup.
    Field(MetaField),
    /// `%T`
    TotalTime,
    /// `%C`
    Playtime,
    /// `%%`
    Percent,
    Unknown(char),
}

impl Directive {
    pub fn from_key(key: char) -> Self {
        match key {
            'A' => Directive::Field(MetaField::Album),
            'a' => Directive::Field(MetaField::Artist),
            't' => Directive::Field(MetaField::Title),
            'n' => Directive::Field(MetaField::Track),
            'F' => Directive::Field(MetaField::FileType),
            'T' => Directive::TotalTime,
            'C' => Directive::Playtime,
            '%' => Directive::Percent,
            other => Directive::Unknown(other),
        }
    }
}

/// Format whole seconds as `m:ss`.
pub fn format_clock(total_secs: i64) -> String {
    let minutes = total_secs / 60;
    let seconds = total_secs - minutes * 60;
    format!("{minutes}:{seconds:02}")
}

/// Format a fractional duration as `m:ss`, truncating toward zero.
pub fn format_duration(secs: f64) -> String {
    let minutes = (secs / 60.0) as i64;
    let seconds = (secs - minutes as f64 * 60.0) as i64;
    format!("{minutes}:{seconds:02}")
}
