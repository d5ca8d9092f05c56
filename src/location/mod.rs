//! Device location boundary.
//!
//! The controller never talks to a positioning SDK directly; it consumes this
//! narrow async interface. Resolution failures are values, not errors: a
//! request that completes without a fix resolves to `Ok(None)`.

use crate::{core::geo::LatLng, Result};
use async_trait::async_trait;

/// Contract for the device location provider.
///
/// Implementations must not block the calling thread; timeouts and retry
/// policy belong to the implementation, not to the core.
#[async_trait]
pub trait LocationSource: Send + Sync {
    /// Requests a fresh high-accuracy fix. Resolves to `None` when the
    /// position cannot be determined.
    async fn request_current_location(&self) -> Result<Option<LatLng>>;

    /// Returns the provider's cached position, which may be stale or absent.
    async fn last_known_location(&self) -> Result<Option<LatLng>>;

    /// Permission gate checked before any location call
    fn has_permission(&self) -> bool;

    /// Asks the platform to show its permission dialog. The outcome arrives
    /// later as a `MapEvent::PermissionResult`.
    fn request_permission(&self);
}

/// A fixed-position source for demos and tests
#[derive(Debug, Clone, Default)]
pub struct StaticLocationSource {
    current: Option<LatLng>,
    last_known: Option<LatLng>,
    permission: bool,
}

impl StaticLocationSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_permission(mut self, granted: bool) -> Self {
        self.permission = granted;
        self
    }

    pub fn with_current(mut self, position: LatLng) -> Self {
        self.current = Some(position);
        self
    }

    pub fn with_last_known(mut self, position: LatLng) -> Self {
        self.last_known = Some(position);
        self
    }
}

#[async_trait]
impl LocationSource for StaticLocationSource {
    async fn request_current_location(&self) -> Result<Option<LatLng>> {
        Ok(self.current)
    }

    async fn last_known_location(&self) -> Result<Option<LatLng>> {
        Ok(self.last_known)
    }

    fn has_permission(&self) -> bool {
        self.permission
    }

    fn request_permission(&self) {
        log::debug!("permission request ignored by static source");
    }
}
