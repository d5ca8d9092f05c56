//! Prelude module for common waymark types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use waymark::prelude::*;`

pub use crate::core::{
    geo::LatLng,
    marker::{Marker, MarkerId, MARKER_LABEL},
    path::{PathBuilder, PathError},
    store::MarkerStore,
};

pub use crate::controller::{MapController, Notice};

pub use crate::input::events::MapEvent;

pub use crate::location::{LocationSource, StaticLocationSource};

pub use crate::render::{
    headless::HeadlessSurface,
    style::{Color, LineStyle},
    MapSurface, PolylineHandle,
};

#[cfg(feature = "tokio-runtime")]
pub use crate::events::{channel, run, EVENT_QUEUE_DEPTH};

pub use crate::{Error, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
