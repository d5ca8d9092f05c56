use crate::core::{geo::LatLng, marker::Marker};

/// Why a path could not be derived. Both cases are recoverable and surfaced
/// to the user as a transient notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The device location has never resolved; the caller should trigger a
    /// location-resolution attempt.
    #[error("current location unknown")]
    NoDeviceLocation,

    /// There is nothing to connect.
    #[error("no locations marked")]
    NoMarkers,
}

/// Derives the polyline point sequence from the device's last known location
/// and the marker list.
pub struct PathBuilder;

impl PathBuilder {
    /// Builds the point sequence: device location first, then every marker
    /// position in marking order. Strictly sequential-by-insertion; no
    /// deduplication, no reordering, no distance-based optimization.
    ///
    /// Pure derivation: identical inputs yield identical output, no I/O, no
    /// internal state.
    pub fn build(
        device_location: Option<LatLng>,
        markers: &[Marker],
    ) -> Result<Vec<LatLng>, PathError> {
        let device = device_location.ok_or(PathError::NoDeviceLocation)?;
        if markers.is_empty() {
            return Err(PathError::NoMarkers);
        }

        let mut points = Vec::with_capacity(1 + markers.len());
        points.push(device);
        points.extend(markers.iter().map(|m| m.position()));
        Ok(points)
    }
}
