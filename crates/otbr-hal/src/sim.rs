//! In-process simulation platform for CI/CD testing without a co-processor.
//!
//! [`SimPlatform`] answers every [`Platform`] call from configuration and
//! records the calls in order, so tests can assert both what the bootstrap
//! core asked for and when.  [`SimProbe`] does the same for a bare
//! [`CoprocessorProbe`].
//!
//! # Example
//!
//! ```rust
//! use otbr_hal::platform::Platform;
//! use otbr_hal::sim::{PlatformCall, SimPlatform};
//! use otbr_types::{CoprocessorKind, RadioUrls};
//!
//! let mut platform = SimPlatform::new(CoprocessorKind::Rcp);
//! let urls = RadioUrls::new(&["spinel+hdlc+uart:///dev/ttyUSB0"]).unwrap();
//!
//! assert_eq!(platform.init_coprocessor(&urls), CoprocessorKind::Rcp);
//! assert_eq!(platform.calls(), vec![PlatformCall::InitCoprocessor(urls)]);
//! ```

use std::cell::RefCell;

use otbr_types::{BrError, CoprocessorKind, LogLevel, RadioUrls, StackLogLevel};

use crate::platform::{CoprocessorProbe, Platform};

// ────────────────────────────────────────────────────────────────────────────
// Recorded calls
// ────────────────────────────────────────────────────────────────────────────

/// One call made against a [`SimPlatform`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCall {
    HostLogLevel,
    SetStackLogLevel(StackLogLevel),
    InitCoprocessor(RadioUrls),
}

// ────────────────────────────────────────────────────────────────────────────
// SimPlatform
// ────────────────────────────────────────────────────────────────────────────

/// A [`Platform`] that reports a fixed co-processor kind and host level.
pub struct SimPlatform {
    kind: CoprocessorKind,
    host_level: LogLevel,
    reject_stack_level: bool,
    calls: RefCell<Vec<PlatformCall>>,
}

impl SimPlatform {
    /// Platform reporting `kind` on discovery, with an `Info` host level.
    pub fn new(kind: CoprocessorKind) -> Self {
        Self {
            kind,
            host_level: LogLevel::Info,
            reject_stack_level: false,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Report `level` as the host severity.
    pub fn with_host_log_level(mut self, level: LogLevel) -> Self {
        self.host_level = level;
        self
    }

    /// Make every stack severity install fail.
    pub fn rejecting_stack_log_level(mut self) -> Self {
        self.reject_stack_level = true;
        self
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<PlatformCall> {
        self.calls.borrow().clone()
    }

    /// Number of discovery calls made so far.
    pub fn discovery_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, PlatformCall::InitCoprocessor(_)))
            .count()
    }

    /// Stack levels installed so far, in order.
    pub fn installed_stack_levels(&self) -> Vec<StackLogLevel> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                PlatformCall::SetStackLogLevel(level) => Some(*level),
                _ => None,
            })
            .collect()
    }
}

impl Platform for SimPlatform {
    fn host_log_level(&self) -> LogLevel {
        self.calls.borrow_mut().push(PlatformCall::HostLogLevel);
        self.host_level
    }

    fn set_stack_log_level(&mut self, level: StackLogLevel) -> Result<(), BrError> {
        self.calls.borrow_mut().push(PlatformCall::SetStackLogLevel(level));
        if self.reject_stack_level {
            return Err(BrError::InvalidState(
                "simulated stack rejected the log level".to_string(),
            ));
        }
        Ok(())
    }

    fn init_coprocessor(&mut self, urls: &RadioUrls) -> CoprocessorKind {
        self.calls
            .borrow_mut()
            .push(PlatformCall::InitCoprocessor(urls.clone()));
        self.kind
    }
}

// ────────────────────────────────────────────────────────────────────────────
// SimProbe
// ────────────────────────────────────────────────────────────────────────────

/// A [`CoprocessorProbe`] that reports a fixed kind and remembers every URL
/// list it was asked about.
pub struct SimProbe {
    kind: CoprocessorKind,
    probed: Vec<RadioUrls>,
}

impl SimProbe {
    pub fn new(kind: CoprocessorKind) -> Self {
        Self {
            kind,
            probed: Vec::new(),
        }
    }

    pub fn probed_urls(&self) -> &[RadioUrls] {
        &self.probed
    }
}

impl CoprocessorProbe for SimProbe {
    fn probe(&mut self, urls: &RadioUrls) -> CoprocessorKind {
        self.probed.push(urls.clone());
        self.kind
    }
}
