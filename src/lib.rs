//! # Waymark
//!
//! A sequential marker and path core for interactive maps.
//!
//! Users drop location markers (by tapping the map or by requesting the
//! device's current position), remove a marker by selecting it, and request a
//! single connected path from the device's last known location through all
//! markers in the order they were placed. Map rendering and device location
//! live behind the [`MapSurface`] and [`LocationSource`] traits; this crate
//! owns the state machine in between.

pub mod controller;
pub mod core;
#[cfg(feature = "tokio-runtime")]
pub mod events;
pub mod input;
pub mod location;
pub mod prelude;
pub mod render;

// Re-export public API
pub use crate::core::{
    geo::LatLng,
    marker::{Marker, MarkerId},
    path::{PathBuilder, PathError},
    store::MarkerStore,
};

pub use controller::{MapController, Notice};

pub use input::events::MapEvent;

pub use location::LocationSource;

pub use render::{headless::HeadlessSurface, style::LineStyle, MapSurface, PolylineHandle};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("path error: {0}")]
    Path(#[from] PathError),

    #[error("location source error: {0}")]
    Location(String),

    #[error("map surface error: {0}")]
    Surface(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
