//! Platform seams used by the bootstrap core.
//!
//! [`Platform`] bundles the three external collaborators the dispatcher
//! relies on: the host severity query, the stack severity install, and the
//! co-processor discovery primitive.  [`SystemPlatform`] is the production
//! implementation backed by [`crate::logging`] and a [`CoprocessorProbe`].

use otbr_types::{BrError, CoprocessorKind, LogLevel, RadioUrls, StackLogLevel};

use crate::logging;

/// Discovery primitive: interrogates whatever is reachable through the radio
/// URLs and reports its kind.
///
/// Implementations may block on hardware I/O.  The result is authoritative.
pub trait CoprocessorProbe {
    fn probe(&mut self, urls: &RadioUrls) -> CoprocessorKind;
}

/// Everything the bootstrap core needs from the surrounding process.
pub trait Platform {
    /// Host-side logging severity, read once per bootstrap.
    fn host_log_level(&self) -> LogLevel;

    /// Install the embedded stack's logging severity.
    ///
    /// # Errors
    ///
    /// Returns [`BrError::InvalidState`] when the stack refuses the change.
    fn set_stack_log_level(&mut self, level: StackLogLevel) -> Result<(), BrError>;

    /// Bring up the co-processor platform and report what is attached.
    fn init_coprocessor(&mut self, urls: &RadioUrls) -> CoprocessorKind;
}

/// Production [`Platform`] using the process-wide logging state.
pub struct SystemPlatform<P: CoprocessorProbe> {
    probe: P,
}

impl<P: CoprocessorProbe> SystemPlatform<P> {
    pub fn new(probe: P) -> Self {
        Self { probe }
    }
}

impl<P: CoprocessorProbe> Platform for SystemPlatform<P> {
    fn host_log_level(&self) -> LogLevel {
        logging::host_log_level()
    }

    fn set_stack_log_level(&mut self, level: StackLogLevel) -> Result<(), BrError> {
        logging::set_stack_log_level(level)
    }

    fn init_coprocessor(&mut self, urls: &RadioUrls) -> CoprocessorKind {
        self.probe.probe(urls)
    }
}

/// Probe that reports the co-processor kind named in the agent's
/// configuration instead of interrogating the device.
///
/// With no radio URL there is nothing to reach, so the probe reports
/// [`CoprocessorKind::Unknown`] regardless of configuration.
#[derive(Debug, Clone, Copy)]
pub struct ConfiguredProbe {
    kind: CoprocessorKind,
}

impl ConfiguredProbe {
    pub fn new(kind: CoprocessorKind) -> Self {
        Self { kind }
    }
}

impl CoprocessorProbe for ConfiguredProbe {
    fn probe(&mut self, urls: &RadioUrls) -> CoprocessorKind {
        if urls.is_empty() {
            logging::stack_log(StackLogLevel::Warn, "Platform", "no radio URL configured");
            return CoprocessorKind::Unknown;
        }
        for url in urls.iter() {
            logging::stack_log(StackLogLevel::Info, "Platform", &format!("radio URL: {url}"));
        }
        logging::stack_log(
            StackLogLevel::Note,
            "Platform",
            &format!("co-processor type from configuration: {}", self.kind),
        );
        self.kind
    }
}
