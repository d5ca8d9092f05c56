use crate::{
    core::{
        geo::LatLng,
        marker::{Marker, MarkerId},
    },
    prelude::HashMap,
    render::{LineStyle, MapSurface, PolylineHandle},
    Result,
};

/// In-memory [`MapSurface`] that records what it was asked to show.
///
/// Stands in for a real map toolkit in tests and headless runs, and doubles
/// as the reference for what a surface adapter must track.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    markers: HashMap<MarkerId, LatLng>,
    polylines: HashMap<PolylineHandle, Vec<LatLng>>,
    next_polyline: u64,
    camera: Option<(LatLng, f64)>,
    my_location_enabled: bool,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn has_marker(&self, id: MarkerId) -> bool {
        self.markers.contains_key(&id)
    }

    pub fn polyline_count(&self) -> usize {
        self.polylines.len()
    }

    pub fn polyline(&self, handle: PolylineHandle) -> Option<&[LatLng]> {
        self.polylines.get(&handle).map(Vec::as_slice)
    }

    /// The single visible polyline, when exactly one is shown
    pub fn sole_polyline(&self) -> Option<&[LatLng]> {
        if self.polylines.len() == 1 {
            self.polylines.values().next().map(Vec::as_slice)
        } else {
            None
        }
    }

    pub fn camera(&self) -> Option<(LatLng, f64)> {
        self.camera
    }

    pub fn my_location_enabled(&self) -> bool {
        self.my_location_enabled
    }
}

impl MapSurface for HeadlessSurface {
    fn render_marker(&mut self, marker: &Marker) -> Result<()> {
        self.markers.insert(marker.id(), marker.position());
        log::debug!("surface showing marker {}", marker.id().raw());
        Ok(())
    }

    fn remove_marker(&mut self, id: MarkerId) -> Result<()> {
        self.markers.remove(&id);
        Ok(())
    }

    fn render_polyline(&mut self, points: &[LatLng], style: &LineStyle) -> Result<PolylineHandle> {
        let handle = PolylineHandle(self.next_polyline);
        self.next_polyline += 1;
        self.polylines.insert(handle, points.to_vec());
        log::debug!(
            "surface showing polyline {} ({} points, width {})",
            handle.raw(),
            points.len(),
            style.width
        );
        Ok(handle)
    }

    fn remove_polyline(&mut self, handle: PolylineHandle) -> Result<()> {
        self.polylines.remove(&handle);
        Ok(())
    }

    fn pan_to(&mut self, center: LatLng, zoom: f64) -> Result<()> {
        self.camera = Some((center, zoom));
        Ok(())
    }

    fn set_my_location_enabled(&mut self, enabled: bool) -> Result<()> {
        self.my_location_enabled = enabled;
        Ok(())
    }
}
