//! [`ThreadHost`] trait for the host object built at bootstrap.
//!
//! A host drives the mesh interface on behalf of the agent.  Which concrete
//! host is built depends on the kind of co-processor discovered at startup;
//! the agent only ever holds a `Box<dyn ThreadHost>`.

use otbr_types::{BrError, CoprocessorKind};

/// Arguments forwarded unchanged from the agent to the host constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostSettings {
    /// Mesh network interface name, e.g. `"wpan0"`.
    pub interface_name: String,
    /// Radio URLs in priority order.
    pub radio_urls: Vec<String>,
    /// Infrastructure link the border router bridges to, e.g. `"eth0"`.
    pub backbone_interface_name: Option<String>,
    /// Bring up nothing; only validate and report.
    pub dry_run: bool,
    /// Attach to a previously commissioned network on startup.
    pub auto_attach: bool,
}

/// A host bound to one kind of co-processor for its whole lifetime.
pub trait ThreadHost: Send {
    /// Kind of co-processor this host was built for.
    fn coprocessor_kind(&self) -> CoprocessorKind;

    /// Settings the host was constructed with.
    fn settings(&self) -> &HostSettings;

    fn interface_name(&self) -> &str {
        &self.settings().interface_name
    }

    /// Initialise the host.
    ///
    /// # Errors
    ///
    /// Returns [`BrError::InvalidState`] if the host is already initialised,
    /// or [`BrError::InvalidArgs`] if its settings cannot be applied.
    fn init(&mut self) -> Result<(), BrError>;

    /// Tear the host down.  Calling this on an uninitialised host is a no-op.
    fn deinit(&mut self);

    fn is_initialized(&self) -> bool;
}
