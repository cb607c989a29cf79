use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Precision used by `f` and `%` when the spec omits one.
const DEFAULT_FIXED_PRECISION: usize = 6;
/// Largest accepted precision.
const MAX_PRECISION: usize = 20;
/// Significant digits kept by the default (empty) spec.
const DEFAULT_SIGNIFICANT_DIGITS: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LabelFormatKind {
    /// Shortest decimal after trimming to 12 significant digits.
    Default,
    /// Rounded integer.
    Integer,
    /// Fixed-point decimal.
    Fixed,
    /// Value times 100 in fixed point, followed by `%`.
    Percent,
}

/// Numeric label formatter for tick and hover labels.
///
/// Accepts a small subset of d3-format specs:
/// `[,][.precision][d|f|%]`, e.g. `""`, `"d"`, `".0%"`, `",.2f"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LabelFormat {
    spec: String,
    kind: LabelFormatKind,
    precision: Option<usize>,
    grouping: bool,
}

impl LabelFormat {
    pub fn parse(spec: &str) -> ChartResult<Self> {
        let mut rest = spec;
        let grouping = if let Some(stripped) = rest.strip_prefix(',') {
            rest = stripped;
            true
        } else {
            false
        };

        let mut precision = None;
        if let Some(stripped) = rest.strip_prefix('.') {
            let digits_len = stripped
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(stripped.len());
            if digits_len == 0 {
                return Err(invalid_spec(spec, "missing precision digits after `.`"));
            }
            let digits = &stripped[..digits_len];
            let value: usize = digits
                .parse()
                .map_err(|_| invalid_spec(spec, "precision is out of range"))?;
            if value > MAX_PRECISION {
                return Err(invalid_spec(spec, "precision must be <= 20"));
            }
            precision = Some(value);
            rest = &stripped[digits_len..];
        }

        let kind = match rest {
            "" => LabelFormatKind::Default,
            "d" => LabelFormatKind::Integer,
            "f" => LabelFormatKind::Fixed,
            "%" => LabelFormatKind::Percent,
            other => {
                return Err(invalid_spec(
                    spec,
                    &format!("unsupported format type `{other}`"),
                ));
            }
        };
        if kind == LabelFormatKind::Integer && precision.is_some() {
            return Err(invalid_spec(spec, "`d` does not take a precision"));
        }

        Ok(Self {
            spec: spec.to_owned(),
            kind,
            precision,
            grouping,
        })
    }

    /// Rounded integer, spec `d`.
    #[must_use]
    pub fn integer() -> Self {
        Self {
            spec: "d".to_owned(),
            kind: LabelFormatKind::Integer,
            precision: None,
            grouping: false,
        }
    }

    /// Fixed-point decimal, spec `.{precision}f`. Precision is capped at 20.
    #[must_use]
    pub fn fixed(precision: usize) -> Self {
        Self::with_precision(LabelFormatKind::Fixed, precision, 'f')
    }

    /// Percentage, spec `.{precision}%`. Precision is capped at 20.
    #[must_use]
    pub fn percent(precision: usize) -> Self {
        Self::with_precision(LabelFormatKind::Percent, precision, '%')
    }

    fn with_precision(kind: LabelFormatKind, precision: usize, type_char: char) -> Self {
        let precision = precision.min(MAX_PRECISION);
        Self {
            spec: format!(".{precision}{type_char}"),
            kind,
            precision: Some(precision),
            grouping: false,
        }
    }

    #[must_use]
    pub fn spec(&self) -> &str {
        &self.spec
    }

    #[must_use]
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_owned();
        }
        if value.is_infinite() {
            return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
        }

        let (body, suffix) = match self.kind {
            LabelFormatKind::Default => {
                let digits = self.precision.unwrap_or(DEFAULT_SIGNIFICANT_DIGITS).max(1);
                (format_significant(value, digits), "")
            }
            LabelFormatKind::Integer => (format!("{:.0}", value.round()), ""),
            LabelFormatKind::Fixed => {
                let precision = self.precision.unwrap_or(DEFAULT_FIXED_PRECISION);
                (format!("{value:.precision$}"), "")
            }
            LabelFormatKind::Percent => {
                let precision = self.precision.unwrap_or(DEFAULT_FIXED_PRECISION);
                (format!("{:.precision$}", value * 100.0), "%")
            }
        };

        let body = normalize_negative_zero(body);
        let body = if self.grouping {
            group_thousands(&body)
        } else {
            body
        };
        format!("{body}{suffix}")
    }
}

impl Default for LabelFormat {
    fn default() -> Self {
        Self {
            spec: String::new(),
            kind: LabelFormatKind::Default,
            precision: None,
            grouping: false,
        }
    }
}

impl TryFrom<String> for LabelFormat {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LabelFormat> for String {
    fn from(value: LabelFormat) -> Self {
        value.spec
    }
}

fn invalid_spec(spec: &str, reason: &str) -> ChartError {
    ChartError::InvalidData(format!("invalid label format `{spec}`: {reason}"))
}

fn format_significant(value: f64, digits: usize) -> String {
    // Round-trip through scientific notation to drop representation noise
    // such as `0.30000000000000004`.
    let rounded: f64 = format!("{:.*e}", digits - 1, value)
        .parse()
        .unwrap_or(value);
    format!("{rounded}")
}

fn normalize_negative_zero(body: String) -> String {
    let is_zero = body
        .trim_start_matches('-')
        .chars()
        .all(|c| c == '0' || c == '.');
    if body.starts_with('-') && is_zero {
        body[1..].to_owned()
    } else {
        body
    }
}

fn group_thousands(body: &str) -> String {
    let (sign, unsigned) = match body.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", body),
    };
    let (integer, fraction) = match unsigned.find('.') {
        Some(dot) => (&unsigned[..dot], &unsigned[dot..]),
        None => (unsigned, ""),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{sign}{grouped}{fraction}")
}
