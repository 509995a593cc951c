//! [`ThreadController`] – bootstrap factory for the host object.
//!
//! At startup nothing is known about the attached co-processor.  The
//! controller validates the radio URLs, aligns the embedded stack's log level
//! with the host's, asks the platform what is attached, and builds the
//! matching [`ThreadHost`].  Every failure here is fatal: see
//! [`crate::fatal`].
//!
//! # Example
//!
//! ```rust
//! use otbr_hal::ThreadHost;
//! use otbr_hal::sim::SimPlatform;
//! use otbr_ncp::ThreadController;
//! use otbr_types::CoprocessorKind;
//!
//! let mut platform = SimPlatform::new(CoprocessorKind::Rcp);
//! let host = ThreadController::create(
//!     "wpan0",
//!     &["spinel+hdlc+uart:///dev/ttyUSB0"],
//!     None,
//!     false,
//!     true,
//!     &mut platform,
//! );
//! assert_eq!(host.coprocessor_kind(), CoprocessorKind::Rcp);
//! ```

use otbr_hal::platform::Platform;
use otbr_hal::{HostSettings, RcpHost, ThreadHost};
use otbr_types::{CoprocessorKind, MAX_RADIO_URLS, RadioUrls};
use tracing::{debug, info};

use crate::fatal::{self, FatalError};
use crate::log_level;

/// Stateless factory; all state lives in the returned host.
pub struct ThreadController;

impl ThreadController {
    /// Build the host for whatever co-processor is attached, terminating the
    /// process on any [`FatalError`].
    pub fn create<S: AsRef<str>>(
        interface_name: &str,
        radio_urls: &[S],
        backbone_interface_name: Option<&str>,
        dry_run: bool,
        enable_auto_attach: bool,
        platform: &mut dyn Platform,
    ) -> Box<dyn ThreadHost> {
        match Self::try_create(
            interface_name,
            radio_urls,
            backbone_interface_name,
            dry_run,
            enable_auto_attach,
            platform,
        ) {
            Ok(host) => host,
            Err(err) => fatal::die_now(&err),
        }
    }

    /// Same as [`ThreadController::create`] but hands the fatal condition
    /// back instead of exiting.
    ///
    /// The stack log level is installed exactly once, before discovery.
    /// Discovery runs exactly once, and only when the URL list and log level
    /// were accepted.
    ///
    /// # Errors
    ///
    /// - [`FatalError::ConfigurationOverflow`] – more than
    ///   [`MAX_RADIO_URLS`] radio URLs.
    /// - [`FatalError::StackLogLevel`] – the stack refused its log level.
    /// - [`FatalError::UnsupportedCoprocessor`] – no host variant exists for
    ///   the discovered kind.
    pub fn try_create<S: AsRef<str>>(
        interface_name: &str,
        radio_urls: &[S],
        backbone_interface_name: Option<&str>,
        dry_run: bool,
        enable_auto_attach: bool,
        platform: &mut dyn Platform,
    ) -> Result<Box<dyn ThreadHost>, FatalError> {
        // RadioUrls::new only fails on overflow.
        let urls = RadioUrls::new(radio_urls).map_err(|_| FatalError::ConfigurationOverflow {
            count: radio_urls.len(),
            max: MAX_RADIO_URLS,
        })?;

        let host_level = platform.host_log_level();
        let stack_level = log_level::to_stack_log_level(host_level);
        debug!(%host_level, %stack_level, "installing stack log level");
        platform
            .set_stack_log_level(stack_level)
            .map_err(|source| FatalError::StackLogLevel {
                level: stack_level,
                source,
            })?;

        let kind = platform.init_coprocessor(&urls);
        info!(%kind, radio_urls = ?urls.as_slice(), "co-processor discovered");

        Self::build_host(
            kind,
            HostSettings {
                interface_name: interface_name.to_string(),
                radio_urls: urls.as_slice().to_vec(),
                backbone_interface_name: backbone_interface_name.map(str::to_string),
                dry_run,
                auto_attach: enable_auto_attach,
            },
        )
    }

    // One arm per co-processor kind; a new kind must be handled here.
    fn build_host(
        kind: CoprocessorKind,
        settings: HostSettings,
    ) -> Result<Box<dyn ThreadHost>, FatalError> {
        match kind {
            CoprocessorKind::Rcp => Ok(Box::new(RcpHost::new(settings))),
            // TODO: add an NCP host variant once NCP-mode firmware is supported.
            CoprocessorKind::Ncp | CoprocessorKind::Unknown => {
                Err(FatalError::UnsupportedCoprocessor(kind))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fatal::{EXIT_FAILURE, FatalKind};
    use otbr_hal::sim::{PlatformCall, SimPlatform};
    use otbr_types::{LogLevel, StackLogLevel};

    const URL0: &str = "spinel+hdlc+uart:///dev/ttyUSB0";
    const URL1: &str = "spinel+hdlc+uart:///dev/ttyUSB1?uart-baudrate=460800";

    fn create(
        urls: &[&str],
        platform: &mut SimPlatform,
    ) -> Result<Box<dyn ThreadHost>, FatalError> {
        ThreadController::try_create("wpan0", urls, Some("eth0"), false, true, platform)
    }

    #[test]
    fn rcp_host_wired_to_single_endpoint() {
        let mut platform = SimPlatform::new(CoprocessorKind::Rcp);
        let host = create(&[URL0], &mut platform).unwrap();

        assert_eq!(host.coprocessor_kind(), CoprocessorKind::Rcp);
        assert_eq!(host.interface_name(), "wpan0");
        assert_eq!(host.settings().radio_urls, vec![URL0.to_string()]);
        assert!(!host.is_initialized());
    }

    #[test]
    fn forwards_every_argument_unchanged() {
        let mut platform = SimPlatform::new(CoprocessorKind::Rcp);
        let host =
            ThreadController::try_create("wpan7", &[URL1, URL0], None, true, false, &mut platform)
                .unwrap();

        assert_eq!(
            host.settings(),
            &HostSettings {
                interface_name: "wpan7".to_string(),
                radio_urls: vec![URL1.to_string(), URL0.to_string()],
                backbone_interface_name: None,
                dry_run: true,
                auto_attach: false,
            }
        );
    }

    #[test]
    fn max_urls_proceed_to_discovery() {
        let urls = vec![URL0; MAX_RADIO_URLS];
        let mut platform = SimPlatform::new(CoprocessorKind::Rcp);
        assert!(create(&urls, &mut platform).is_ok());
        assert_eq!(platform.discovery_count(), 1);
    }

    #[test]
    fn overflow_aborts_before_install_and_discovery() {
        let urls = vec![URL0; MAX_RADIO_URLS + 1];
        let mut platform = SimPlatform::new(CoprocessorKind::Rcp);

        let err = create(&urls, &mut platform).err().unwrap();
        assert_eq!(
            err,
            FatalError::ConfigurationOverflow {
                count: MAX_RADIO_URLS + 1,
                max: MAX_RADIO_URLS,
            }
        );
        assert_eq!(err.kind(), FatalKind::ConfigurationOverflow);
        assert!(platform.calls().is_empty());
    }

    #[test]
    fn installs_level_once_before_discovery() {
        let mut platform = SimPlatform::new(CoprocessorKind::Rcp).with_host_log_level(LogLevel::Warning);
        create(&[URL0], &mut platform).unwrap();

        let urls = RadioUrls::new(&[URL0]).unwrap();
        assert_eq!(
            platform.calls(),
            vec![
                PlatformCall::HostLogLevel,
                PlatformCall::SetStackLogLevel(StackLogLevel::Warn),
                PlatformCall::InitCoprocessor(urls),
            ]
        );
    }

    #[test]
    fn installed_level_follows_host_level() {
        let mut debug = SimPlatform::new(CoprocessorKind::Rcp).with_host_log_level(LogLevel::Debug);
        create(&[URL0], &mut debug).unwrap();
        assert_eq!(debug.installed_stack_levels(), vec![StackLogLevel::Debg]);

        let mut emerg = SimPlatform::new(CoprocessorKind::Rcp).with_host_log_level(LogLevel::Emerg);
        create(&[URL0], &mut emerg).unwrap();
        assert_eq!(emerg.installed_stack_levels(), vec![StackLogLevel::Crit]);
    }

    #[test]
    fn rejected_log_level_is_fatal_and_skips_discovery() {
        let mut platform = SimPlatform::new(CoprocessorKind::Rcp).rejecting_stack_log_level();

        let err = create(&[URL0], &mut platform).err().unwrap();
        assert!(matches!(err, FatalError::StackLogLevel { level: StackLogLevel::Info, .. }));
        assert_eq!(err.kind(), FatalKind::UnsupportedCoprocessor);
        assert_eq!(platform.discovery_count(), 0);
    }

    #[test]
    fn unsupported_kinds_never_build_a_host() {
        for kind in [CoprocessorKind::Ncp, CoprocessorKind::Unknown] {
            let mut platform = SimPlatform::new(kind);
            let err = create(&[URL0], &mut platform).err().unwrap();
            assert_eq!(err, FatalError::UnsupportedCoprocessor(kind));
            assert_eq!(err.kind(), FatalKind::UnsupportedCoprocessor);
            assert_eq!(platform.discovery_count(), 1);
        }
    }

    #[test]
    fn empty_url_list_still_reaches_discovery() {
        let mut platform = SimPlatform::new(CoprocessorKind::Unknown);
        let err = create(&[], &mut platform).err().unwrap();
        assert_eq!(err, FatalError::UnsupportedCoprocessor(CoprocessorKind::Unknown));
        assert_eq!(platform.discovery_count(), 1);
    }

    // `create` exits the process, so it runs in a child copy of this test
    // binary selected by an env var.
    const DIE_CHILD_ENV: &str = "OTBR_NCP_DIE_CHILD";

    fn run_child(test_name: &str) -> std::process::ExitStatus {
        let exe = std::env::current_exe().expect("test binary path");
        std::process::Command::new(exe)
            .args([test_name, "--exact", "--nocapture"])
            .env(DIE_CHILD_ENV, "1")
            .status()
            .expect("spawn child test")
    }

    #[test]
    fn create_exits_on_overflow() {
        if std::env::var(DIE_CHILD_ENV).is_ok() {
            let urls = vec![URL0; MAX_RADIO_URLS + 1];
            let mut platform = SimPlatform::new(CoprocessorKind::Rcp);
            let _host = ThreadController::create("wpan0", &urls, None, false, true, &mut platform);
            // Reaching here means no exit happened; exit 0 so the parent fails.
            std::process::exit(0);
        }
        let status = run_child("controller::tests::create_exits_on_overflow");
        assert_eq!(status.code(), Some(EXIT_FAILURE));
    }

    #[test]
    fn create_exits_on_unsupported_coprocessor() {
        if std::env::var(DIE_CHILD_ENV).is_ok() {
            let mut platform = SimPlatform::new(CoprocessorKind::Ncp);
            let _host = ThreadController::create("wpan0", &[URL0], None, false, true, &mut platform);
            std::process::exit(0);
        }
        let status = run_child("controller::tests::create_exits_on_unsupported_coprocessor");
        assert_eq!(status.code(), Some(EXIT_FAILURE));
    }
}
