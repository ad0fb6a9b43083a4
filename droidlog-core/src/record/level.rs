use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Logcat priority, as printed in the `<level>/<tag>` header field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Level {
    #[serde(rename = "V")]
    Verbose,
    #[serde(rename = "D")]
    Debug,
    #[serde(rename = "I")]
    Info,
    #[serde(rename = "W")]
    Warning,
    #[serde(rename = "E")]
    Error,
    #[serde(rename = "F")]
    Fatal,
}

impl Level {
    /// Order used when presenting a level distribution.
    pub const DISPLAY_ORDER: [Level; 6] = [
        Level::Error,
        Level::Warning,
        Level::Info,
        Level::Debug,
        Level::Verbose,
        Level::Fatal,
    ];

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'V' => Some(Level::Verbose),
            'D' => Some(Level::Debug),
            'I' => Some(Level::Info),
            'W' => Some(Level::Warning),
            'E' => Some(Level::Error),
            'F' => Some(Level::Fatal),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Level::Verbose => 'V',
            Level::Debug => 'D',
            Level::Info => 'I',
            Level::Warning => 'W',
            Level::Error => 'E',
            Level::Fatal => 'F',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::Verbose => "Verbose",
            Level::Debug => "Debug",
            Level::Info => "Info",
            Level::Warning => "Warning",
            Level::Error => "Error",
            Level::Fatal => "Fatal",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Level::Verbose => 0,
            Level::Debug => 1,
            Level::Info => 2,
            Level::Warning => 3,
            Level::Error => 4,
            Level::Fatal => 5,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown log level '{0}' (expected one of V, D, I, W, E, F or a level name)")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Accepts a level letter in either case, or a level name such as `error` or `warn`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let mut chars = s.chars();
        if let (Some(letter), None) = (chars.next(), chars.next()) {
            return Level::from_letter(letter.to_ascii_uppercase())
                .ok_or_else(|| ParseLevelError(s.to_string()));
        }

        match s.to_ascii_lowercase().as_str() {
            "verbose" => Ok(Level::Verbose),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warning),
            "error" => Ok(Level::Error),
            "fatal" | "assert" => Ok(Level::Fatal),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
