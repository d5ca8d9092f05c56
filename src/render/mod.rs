//! Rendering surface boundary.
//!
//! The map widget, markers, and polylines are drawn by an external map
//! toolkit. The controller drives it through [`MapSurface`] and never holds
//! rendered objects itself; markers are addressed by id and polylines by the
//! opaque handle the surface returned.

pub mod headless;
pub mod style;

pub use headless::HeadlessSurface;
pub use style::{Color, LineStyle};

use crate::{
    core::{
        geo::LatLng,
        marker::{Marker, MarkerId},
    },
    Result,
};

/// Handle to a polyline the surface is currently showing. Valid until passed
/// back to [`MapSurface::remove_polyline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PolylineHandle(pub(crate) u64);

impl PolylineHandle {
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Output side of the map collaborator
pub trait MapSurface {
    fn render_marker(&mut self, marker: &Marker) -> Result<()>;

    /// Removing an id the surface does not know is a no-op, mirroring the
    /// already-satisfied semantics of the store.
    fn remove_marker(&mut self, id: MarkerId) -> Result<()>;

    fn render_polyline(&mut self, points: &[LatLng], style: &LineStyle) -> Result<PolylineHandle>;

    fn remove_polyline(&mut self, handle: PolylineHandle) -> Result<()>;

    /// Moves the camera to `center` at the given zoom level
    fn pan_to(&mut self, center: LatLng, zoom: f64) -> Result<()>;

    /// Toggles the toolkit's own my-location affordance
    fn set_my_location_enabled(&mut self, enabled: bool) -> Result<()>;
}
