use crate::core::{geo::LatLng, marker::MarkerId};
use serde::{Deserialize, Serialize};

/// Input events that the map controller consumes.
///
/// Everything that mutates marker or location state arrives here, including
/// the asynchronous location-resolution and permission results, so the
/// controller stays the single writer of all mutable state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MapEvent {
    /// Tap on an empty spot of the map
    Tap { position: LatLng },
    /// Tap on an existing marker
    MarkerTap { id: MarkerId },
    /// Menu action: mark the device's current position
    MarkCurrentLocation,
    /// Menu action: draw the path through all marked locations
    ViewPath,
    /// Toggle for tap-based marking and unmarking
    SetMarkingEnabled { enabled: bool },
    /// A location-resolution attempt completed; `None` means it failed
    LocationResolved { position: Option<LatLng> },
    /// The permission dialog completed
    PermissionResult { granted: bool },
}

impl MapEvent {
    /// Gets the coordinate associated with this event, if any
    pub fn position(&self) -> Option<LatLng> {
        match self {
            MapEvent::Tap { position } => Some(*position),
            MapEvent::LocationResolved { position } => *position,
            _ => None,
        }
    }

    /// Checks if this event came from a menu action
    pub fn is_menu_action(&self) -> bool {
        matches!(
            self,
            MapEvent::MarkCurrentLocation | MapEvent::ViewPath
        )
    }

    /// Checks if this event was delivered by an external collaborator rather
    /// than direct user input
    pub fn is_completion(&self) -> bool {
        matches!(
            self,
            MapEvent::LocationResolved { .. } | MapEvent::PermissionResult { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_position() {
        let tap = MapEvent::Tap {
            position: LatLng::new(10.0, 20.0),
        };
        assert_eq!(tap.position(), Some(LatLng::new(10.0, 20.0)));

        let resolved = MapEvent::LocationResolved { position: None };
        assert_eq!(resolved.position(), None);

        assert_eq!(MapEvent::ViewPath.position(), None);
    }

    #[test]
    fn test_event_type_checks() {
        assert!(MapEvent::MarkCurrentLocation.is_menu_action());
        assert!(MapEvent::ViewPath.is_menu_action());
        assert!(!MapEvent::ViewPath.is_completion());

        let granted = MapEvent::PermissionResult { granted: true };
        assert!(granted.is_completion());
        assert!(!granted.is_menu_action());
    }
}
