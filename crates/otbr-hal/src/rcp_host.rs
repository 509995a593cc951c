//! [`RcpHost`] – host variant for a radio co-processor.
//!
//! With an RCP the protocol logic runs on the host, so this variant owns the
//! interface settings and the init/deinit lifecycle.  Dropping an initialised
//! host deinitialises it.

use otbr_types::{BrError, CoprocessorKind};
use tracing::{debug, info};

use crate::host::{HostSettings, ThreadHost};

pub struct RcpHost {
    settings: HostSettings,
    initialized: bool,
}

impl RcpHost {
    pub fn new(settings: HostSettings) -> Self {
        debug!(
            interface = %settings.interface_name,
            radio_urls = ?settings.radio_urls,
            "constructing RCP host"
        );
        Self {
            settings,
            initialized: false,
        }
    }
}

impl ThreadHost for RcpHost {
    fn coprocessor_kind(&self) -> CoprocessorKind {
        CoprocessorKind::Rcp
    }

    fn settings(&self) -> &HostSettings {
        &self.settings
    }

    fn init(&mut self) -> Result<(), BrError> {
        if self.initialized {
            return Err(BrError::InvalidState("RCP host is already initialized".to_string()));
        }
        if self.settings.interface_name.is_empty() {
            return Err(BrError::InvalidArgs("interface name must not be empty".to_string()));
        }

        info!(
            interface = %self.settings.interface_name,
            backbone = ?self.settings.backbone_interface_name,
            radio_urls = ?self.settings.radio_urls,
            dry_run = self.settings.dry_run,
            auto_attach = self.settings.auto_attach,
            "initializing RCP host"
        );
        if self.settings.dry_run {
            info!("dry run: leaving the mesh interface down");
        } else if self.settings.auto_attach {
            info!(interface = %self.settings.interface_name, "auto-attach enabled");
        }

        self.initialized = true;
        Ok(())
    }

    fn deinit(&mut self) {
        if self.initialized {
            info!(interface = %self.settings.interface_name, "deinitializing RCP host");
            self.initialized = false;
        }
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl Drop for RcpHost {
    fn drop(&mut self) {
        self.deinit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> HostSettings {
        HostSettings {
            interface_name: "wpan0".to_string(),
            radio_urls: vec!["spinel+hdlc+uart:///dev/ttyUSB0".to_string()],
            backbone_interface_name: Some("eth0".to_string()),
            dry_run: false,
            auto_attach: true,
        }
    }

    #[test]
    fn reports_rcp_kind_and_settings() {
        let host = RcpHost::new(settings());
        assert_eq!(host.coprocessor_kind(), CoprocessorKind::Rcp);
        assert_eq!(host.interface_name(), "wpan0");
        assert_eq!(host.settings(), &settings());
        assert!(!host.is_initialized());
    }

    #[test]
    fn init_then_deinit() {
        let mut host = RcpHost::new(settings());
        host.init().unwrap();
        assert!(host.is_initialized());
        host.deinit();
        assert!(!host.is_initialized());
        // Second deinit is a no-op.
        host.deinit();
    }

    #[test]
    fn double_init_is_rejected() {
        let mut host = RcpHost::new(settings());
        host.init().unwrap();
        assert!(matches!(host.init(), Err(BrError::InvalidState(_))));
    }

    #[test]
    fn empty_interface_name_is_rejected() {
        let mut host = RcpHost::new(HostSettings {
            interface_name: String::new(),
            ..settings()
        });
        assert!(matches!(host.init(), Err(BrError::InvalidArgs(_))));
        assert!(!host.is_initialized());
    }

    #[test]
    fn dry_run_host_still_initializes() {
        let mut host = RcpHost::new(HostSettings {
            dry_run: true,
            ..settings()
        });
        host.init().unwrap();
        assert!(host.is_initialized());
    }
}
