use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of radio URLs the co-processor platform accepts.
pub const MAX_RADIO_URLS: usize = 2;

/// Host-side logging severity, numbered like syslog (0 = most severe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum LogLevel {
    Emerg = 0,
    Alert = 1,
    Crit = 2,
    Error = 3,
    Warning = 4,
    Notice = 5,
    Info = 6,
    Debug = 7,
}

impl LogLevel {
    /// Every host level, from most to least severe.
    pub const ALL: [LogLevel; 8] = [
        LogLevel::Emerg,
        LogLevel::Alert,
        LogLevel::Crit,
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Notice,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    /// Convert a raw syslog-style number into a level.  Returns `None` for
    /// values outside `0..=7`.
    pub fn from_raw(raw: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|level| *level as i32 == raw)
    }

    pub fn as_raw(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Emerg => "emerg",
            LogLevel::Alert => "alert",
            LogLevel::Crit => "crit",
            LogLevel::Error => "error",
            LogLevel::Warning => "warning",
            LogLevel::Notice => "notice",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(name)
    }
}

impl FromStr for LogLevel {
    type Err = BrError;

    /// Accepts either the level name (`"info"`) or its syslog number (`"6"`).
    fn from_str(s: &str) -> Result<Self, BrError> {
        let s = s.trim();
        if let Ok(raw) = s.parse::<i32>() {
            return Self::from_raw(raw)
                .ok_or_else(|| BrError::InvalidArgs(format!("log level {raw} is out of range 0-7")));
        }
        Self::ALL
            .into_iter()
            .find(|level| level.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| BrError::InvalidArgs(format!("unknown log level '{s}'")))
    }
}

/// Logging severity understood by the embedded mesh stack.
///
/// The ladder is coarser than [`LogLevel`]; `None` disables stack logging
/// entirely and is never produced by translating a host level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum StackLogLevel {
    None = 0,
    Crit = 1,
    Warn = 2,
    Note = 3,
    Info = 4,
    Debg = 5,
}

impl StackLogLevel {
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(StackLogLevel::None),
            1 => Some(StackLogLevel::Crit),
            2 => Some(StackLogLevel::Warn),
            3 => Some(StackLogLevel::Note),
            4 => Some(StackLogLevel::Info),
            5 => Some(StackLogLevel::Debg),
            _ => None,
        }
    }

    pub fn as_raw(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for StackLogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StackLogLevel::None => "NONE",
            StackLogLevel::Crit => "CRIT",
            StackLogLevel::Warn => "WARN",
            StackLogLevel::Note => "NOTE",
            StackLogLevel::Info => "INFO",
            StackLogLevel::Debg => "DEBG",
        };
        f.write_str(name)
    }
}

/// Kind of co-processor reported by the platform at discovery time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoprocessorKind {
    /// The platform could not determine what is attached.
    #[default]
    Unknown,
    /// Radio co-processor: raw radio primitives, protocol logic on the host.
    Rcp,
    /// Network co-processor: protocol logic runs on the device.
    Ncp,
}

impl fmt::Display for CoprocessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoprocessorKind::Unknown => write!(f, "unknown"),
            CoprocessorKind::Rcp => write!(f, "rcp"),
            CoprocessorKind::Ncp => write!(f, "ncp"),
        }
    }
}

impl FromStr for CoprocessorKind {
    type Err = BrError;

    fn from_str(s: &str) -> Result<Self, BrError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unknown" => Ok(CoprocessorKind::Unknown),
            "rcp" => Ok(CoprocessorKind::Rcp),
            "ncp" => Ok(CoprocessorKind::Ncp),
            other => Err(BrError::InvalidArgs(format!("unknown co-processor kind '{other}'"))),
        }
    }
}

/// Ordered, bounded list of radio URLs describing how to reach the
/// co-processor.  Earlier entries take priority during discovery.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RadioUrls {
    urls: Vec<String>,
}

impl RadioUrls {
    /// Build the list, preserving order.
    ///
    /// # Errors
    ///
    /// Returns [`BrError::TooManyRadioUrls`] when more than
    /// [`MAX_RADIO_URLS`] entries are supplied.
    pub fn new<S: AsRef<str>>(urls: &[S]) -> Result<Self, BrError> {
        if urls.len() > MAX_RADIO_URLS {
            return Err(BrError::TooManyRadioUrls {
                count: urls.len(),
                max: MAX_RADIO_URLS,
            });
        }
        Ok(Self {
            urls: urls.iter().map(|u| u.as_ref().to_string()).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.urls
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }
}

/// Error type shared by the border-router crates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BrError {
    #[error("Too many radio URLs: {count} supplied, at most {max} allowed")]
    TooManyRadioUrls { count: usize, max: usize },

    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_from_raw_covers_syslog_range() {
        for (raw, level) in LogLevel::ALL.into_iter().enumerate() {
            assert_eq!(LogLevel::from_raw(raw as i32), Some(level));
            assert_eq!(level.as_raw(), raw as i32);
        }
        assert_eq!(LogLevel::from_raw(-1), None);
        assert_eq!(LogLevel::from_raw(8), None);
    }

    #[test]
    fn log_level_parses_names_and_numbers() {
        assert_eq!("info".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("WARNING".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert_eq!(" 7 ".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert!("9".parse::<LogLevel>().is_err());
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn log_levels_order_most_severe_first() {
        assert!(LogLevel::Emerg < LogLevel::Error);
        assert!(LogLevel::Info < LogLevel::Debug);
        assert!(StackLogLevel::Crit < StackLogLevel::Debg);
    }

    #[test]
    fn stack_log_level_raw_roundtrip() {
        for raw in 0..=5u8 {
            let level = StackLogLevel::from_raw(raw).unwrap();
            assert_eq!(level.as_raw(), raw);
        }
        assert_eq!(StackLogLevel::from_raw(6), None);
    }

    #[test]
    fn coprocessor_kind_serializes_lowercase() {
        let json = serde_json::to_string(&CoprocessorKind::Rcp).unwrap();
        assert_eq!(json, "\"rcp\"");
        let back: CoprocessorKind = serde_json::from_str("\"ncp\"").unwrap();
        assert_eq!(back, CoprocessorKind::Ncp);
        assert_eq!("RCP".parse::<CoprocessorKind>().unwrap(), CoprocessorKind::Rcp);
        assert!("spinel".parse::<CoprocessorKind>().is_err());
    }

    #[test]
    fn radio_urls_preserve_order() {
        let urls = RadioUrls::new(&[
            "spinel+hdlc+uart:///dev/ttyUSB0",
            "spinel+hdlc+uart:///dev/ttyUSB1",
        ])
        .unwrap();
        assert_eq!(urls.len(), 2);
        let collected: Vec<&str> = urls.iter().collect();
        assert_eq!(
            collected,
            vec!["spinel+hdlc+uart:///dev/ttyUSB0", "spinel+hdlc+uart:///dev/ttyUSB1"]
        );
    }

    #[test]
    fn radio_urls_reject_overflow() {
        let too_many = vec!["spinel+hdlc+uart:///dev/ttyUSB0"; MAX_RADIO_URLS + 1];
        let err = RadioUrls::new(&too_many).unwrap_err();
        assert_eq!(
            err,
            BrError::TooManyRadioUrls {
                count: MAX_RADIO_URLS + 1,
                max: MAX_RADIO_URLS,
            }
        );
        assert!(err.to_string().contains("Too many radio URLs"));
    }

    #[test]
    fn empty_radio_urls_are_allowed() {
        let urls = RadioUrls::new::<&str>(&[]).unwrap();
        assert!(urls.is_empty());
    }
}
