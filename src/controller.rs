//! Orchestration layer between the state machine and the collaborators.
//!
//! [`MapController`] is the single writer of all mutable state: the marker
//! store, the cached device location, and the currently rendered polyline
//! handle. UI events and asynchronous completions all arrive through
//! [`dispatch`](MapController::dispatch) on one logical event thread, so the
//! core needs no internal locking.

use crate::{
    core::{
        geo::LatLng,
        path::{PathBuilder, PathError},
        store::MarkerStore,
    },
    input::events::MapEvent,
    location::LocationSource,
    render::{LineStyle, MapSurface, PolylineHandle},
    Result,
};
use std::fmt;

/// Camera zoom applied when the device location resolves
const LOCATION_ZOOM: f64 = 15.0;

/// Transient user-facing messages. Every failure in the flow is recovered at
/// the point of occurrence and surfaced as one of these; nothing is fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    PermissionDenied,
    LocationUnavailable,
    LocationMarked,
    LocationUnknown,
    NoMarkedLocations,
    PathRendered,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Notice::PermissionDenied => "Location permission not granted",
            Notice::LocationUnavailable => "Unable to get current location",
            Notice::LocationMarked => "Location marked.",
            Notice::LocationUnknown => "Current location unknown",
            Notice::NoMarkedLocations => "No locations marked",
            Notice::PathRendered => "Connected all marked points in order.",
        };
        f.write_str(text)
    }
}

/// Drives a [`MapSurface`] and a [`LocationSource`] from [`MapEvent`]s.
pub struct MapController<S, L> {
    store: MarkerStore,
    surface: S,
    location: L,
    device_location: Option<LatLng>,
    current_polyline: Option<PolylineHandle>,
}

impl<S: MapSurface, L: LocationSource> MapController<S, L> {
    pub fn new(surface: S, location: L) -> Self {
        Self {
            store: MarkerStore::new(),
            surface,
            location,
            device_location: None,
            current_polyline: None,
        }
    }

    /// Startup flow: enable the my-location affordance and pull the cached
    /// position when permission is already granted, otherwise ask for it.
    /// The dialog outcome arrives later as [`MapEvent::PermissionResult`].
    pub async fn start(&mut self) -> Result<()> {
        if self.location.has_permission() {
            self.surface.set_my_location_enabled(true)?;
            self.refresh_device_location().await
        } else {
            self.location.request_permission();
            Ok(())
        }
    }

    /// Handles one event and returns the notices to show the user.
    pub async fn dispatch(&mut self, event: MapEvent) -> Result<Vec<Notice>> {
        log::debug!("dispatching {:?}", event);
        let mut notices = Vec::new();
        match event {
            MapEvent::Tap { position } => self.handle_tap(position)?,
            MapEvent::MarkerTap { id } => {
                if self.store.toggle_marker_selection(id) {
                    self.surface.remove_marker(id)?;
                }
            }
            MapEvent::SetMarkingEnabled { enabled } => self.store.set_marking_enabled(enabled),
            MapEvent::MarkCurrentLocation => self.mark_current_location(&mut notices).await?,
            MapEvent::ViewPath => self.view_path(&mut notices).await?,
            MapEvent::LocationResolved { position } => self.location_resolved(position)?,
            MapEvent::PermissionResult { granted } => {
                self.permission_result(granted, &mut notices).await?
            }
        }
        Ok(notices)
    }

    /// Tap-to-add, gated by marking mode
    fn handle_tap(&mut self, position: LatLng) -> Result<()> {
        if !self.store.marking_enabled() {
            return Ok(());
        }
        let marker = self.store.add(position);
        self.surface.render_marker(&marker)
    }

    /// Explicit mark action: never gated by marking mode, but permission is
    /// checked before touching the location source.
    async fn mark_current_location(&mut self, notices: &mut Vec<Notice>) -> Result<()> {
        if !self.location.has_permission() {
            notices.push(Notice::PermissionDenied);
            return Ok(());
        }

        match self.location.request_current_location().await? {
            Some(position) => {
                let marker = self.store.add(position);
                self.surface.render_marker(&marker)?;
                notices.push(Notice::LocationMarked);
            }
            None => notices.push(Notice::LocationUnavailable),
        }
        Ok(())
    }

    /// Derives and renders the path. The previous polyline is always
    /// retracted first, so at most one path is ever visible, even when the
    /// rebuild then fails.
    async fn view_path(&mut self, notices: &mut Vec<Notice>) -> Result<()> {
        if let Some(handle) = self.current_polyline.take() {
            self.surface.remove_polyline(handle)?;
        }

        match PathBuilder::build(self.device_location, self.store.markers()) {
            Ok(points) => {
                let handle = self.surface.render_polyline(&points, &LineStyle::path())?;
                self.current_polyline = Some(handle);
                notices.push(Notice::PathRendered);
            }
            Err(PathError::NoDeviceLocation) => {
                notices.push(Notice::LocationUnknown);
                self.refresh_device_location().await?;
            }
            Err(PathError::NoMarkers) => notices.push(Notice::NoMarkedLocations),
        }
        Ok(())
    }

    /// Last-write-wins setter for the cached device location. A failed
    /// resolution leaves the previous fix in place; stale beats absent.
    fn location_resolved(&mut self, position: Option<LatLng>) -> Result<()> {
        if let Some(position) = position {
            self.device_location = Some(position);
            self.surface.pan_to(position, LOCATION_ZOOM)?;
        }
        Ok(())
    }

    async fn permission_result(
        &mut self,
        granted: bool,
        notices: &mut Vec<Notice>,
    ) -> Result<()> {
        if granted {
            self.surface.set_my_location_enabled(true)?;
            self.refresh_device_location().await
        } else {
            notices.push(Notice::PermissionDenied);
            Ok(())
        }
    }

    /// Pulls the provider's cached position and feeds it through the
    /// resolution path. A stale completion arriving after further marker
    /// edits is still accepted; there is no versioning guard.
    async fn refresh_device_location(&mut self) -> Result<()> {
        if !self.location.has_permission() {
            return Ok(());
        }
        let position = self.location.last_known_location().await?;
        self.location_resolved(position)
    }

    pub fn set_marking_enabled(&mut self, enabled: bool) {
        self.store.set_marking_enabled(enabled);
    }

    pub fn store(&self) -> &MarkerStore {
        &self.store
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn device_location(&self) -> Option<LatLng> {
        self.device_location
    }

    pub fn current_polyline(&self) -> Option<PolylineHandle> {
        self.current_polyline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_text() {
        assert_eq!(
            Notice::PermissionDenied.to_string(),
            "Location permission not granted"
        );
        assert_eq!(Notice::LocationMarked.to_string(), "Location marked.");
        assert_eq!(
            Notice::PathRendered.to_string(),
            "Connected all marked points in order."
        );
    }
}
