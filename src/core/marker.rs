use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// Title shown on every user-placed marker
pub const MARKER_LABEL: &str = "Marked Location";

/// Opaque marker identity, stable for the marker's lifetime and unique within
/// a store. Explicit ids rather than reference identity, since ownership of a
/// rendered marker crosses into the map surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MarkerId(u64);

impl MarkerId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// A user-placed point of interest. Created only through
/// [`MarkerStore::add`](crate::core::store::MarkerStore::add); the UI layer
/// holds ids, never a second owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    id: MarkerId,
    position: LatLng,
    label: String,
}

impl Marker {
    pub(crate) fn new(id: MarkerId, position: LatLng) -> Self {
        Self {
            id,
            position,
            label: MARKER_LABEL.to_string(),
        }
    }

    pub fn id(&self) -> MarkerId {
        self.id
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Marker attributes as a JSON blob, for surfaces that take options
    /// rather than typed fields
    pub fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "position": {
                "lat": self.position.lat,
                "lng": self.position.lng
            },
            "title": self.label
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_fields() {
        let marker = Marker::new(MarkerId::new(7), LatLng::new(1.0, 2.0));
        assert_eq!(marker.id().raw(), 7);
        assert_eq!(marker.position(), LatLng::new(1.0, 2.0));
        assert_eq!(marker.label(), MARKER_LABEL);
    }

    #[test]
    fn test_marker_options() {
        let marker = Marker::new(MarkerId::new(0), LatLng::new(3.5, -4.5));
        let options = marker.options();
        assert_eq!(options["position"]["lat"], 3.5);
        assert_eq!(options["position"]["lng"], -4.5);
        assert_eq!(options["title"], MARKER_LABEL);
    }
}
