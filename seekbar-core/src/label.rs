//! Label templates and value formatting.
//!
//! A template is plain text with printf-style substitution sites:
//!
//! | Directive | Output |
//! |-----------|--------|
//! | `%s`      | the value in the template's [`ValueFormat`] |
//! | `%.Nf`    | the value with exactly `N` decimals |
//! | `%%`      | a literal `%` |
//!
//! Anything else following a `%` is kept verbatim, including `%.Nf` with
//! `N` above [`MAX_DECIMALS`]. Parsing never fails.

use std::fmt;

/// Largest precision a template or [`ValueFormat::Trimmed`] will format with.
pub const MAX_DECIMALS: usize = 16;

/// How a value is turned into text for a `%s` site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueFormat {
    /// Shortest round-trip form, with `.0` on integral values (`10.0`, `10.25`).
    #[default]
    Default,
    /// At most `max_decimals` decimals, trailing zeros dropped (`10.2`, `10`).
    Trimmed { max_decimals: usize },
}

impl ValueFormat {
    pub fn format(self, value: f32) -> String {
        match self {
            ValueFormat::Default => default_text(value),
            ValueFormat::Trimmed { max_decimals } => trimmed_text(value, max_decimals),
        }
    }
}

/// The value's default string form.
pub fn default_text(value: f32) -> String {
    format!("{value:?}")
}

fn trimmed_text(value: f32, max_decimals: usize) -> String {
    let max_decimals = max_decimals.min(MAX_DECIMALS);
    let fixed = format!("{value:.max_decimals$}");
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Value,
    Fixed(usize),
}

/// A parsed label template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelTemplate {
    source: String,
    segments: Vec<Segment>,
    format: ValueFormat,
}

impl LabelTemplate {
    pub fn parse(source: &str) -> Self {
        Self {
            source: source.to_string(),
            segments: parse_segments(source),
            format: ValueFormat::Default,
        }
    }

    /// Use `format` for `%s` sites.
    pub fn with_format(mut self, format: ValueFormat) -> Self {
        self.format = format;
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn value_format(&self) -> ValueFormat {
        self.format
    }

    /// Number of substitution sites.
    pub fn placeholders(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| !matches!(s, Segment::Literal(_)))
            .count()
    }

    /// Substitute `value` into every site.
    pub fn render(&self, value: f32) -> String {
        let mut out = String::with_capacity(self.source.len() + 8);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Value => out.push_str(&self.format.format(value)),
                &Segment::Fixed(decimals) => out.push_str(&format!("{value:.decimals$}")),
            }
        }
        out
    }

    /// Substitute `args` into the sites in order. Sites without an argument
    /// are left as written.
    pub fn render_args(&self, args: &[f32]) -> String {
        let mut out = String::with_capacity(self.source.len() + 8);
        let mut args = args.iter();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Value => match args.next() {
                    Some(v) => out.push_str(&self.format.format(*v)),
                    None => out.push_str("%s"),
                },
                &Segment::Fixed(decimals) => match args.next() {
                    Some(v) => out.push_str(&format!("{v:.decimals$}")),
                    None => out.push_str(&format!("%.{decimals}f")),
                },
            }
        }
        out
    }
}

impl fmt::Display for LabelTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn parse_segments(source: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut rest = source;

    while let Some(idx) = rest.find('%') {
        literal.push_str(&rest[..idx]);
        let directive = &rest[idx..];

        let (segment, consumed) = match parse_directive(directive) {
            Some(found) => found,
            None => {
                // Unknown directive: keep the '%' and carry on after it.
                literal.push('%');
                rest = &directive[1..];
                continue;
            }
        };

        match segment {
            Segment::Literal(text) => literal.push_str(&text),
            other => {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(other);
            }
        }
        rest = &directive[consumed..];
    }

    literal.push_str(rest);
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    segments
}

/// Parse one directive starting at a '%'. Returns the segment and the number
/// of bytes consumed.
fn parse_directive(s: &str) -> Option<(Segment, usize)> {
    let bytes = s.as_bytes();
    match bytes.get(1)? {
        b's' => Some((Segment::Value, 2)),
        b'%' => Some((Segment::Literal("%".to_string()), 2)),
        b'.' => {
            let digits = bytes[2..].iter().take_while(|b| b.is_ascii_digit()).count();
            if digits == 0 || bytes.get(2 + digits) != Some(&b'f') {
                return None;
            }
            let decimals: usize = s[2..2 + digits].parse().ok()?;
            if decimals > MAX_DECIMALS {
                return None;
            }
            Some((Segment::Fixed(decimals), 3 + digits))
        }
        _ => None,
    }
}
