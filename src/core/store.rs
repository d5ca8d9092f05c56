use crate::core::{
    geo::LatLng,
    marker::{Marker, MarkerId},
};

/// Ordered collection of user-placed markers plus the marking-mode flag.
///
/// Insertion order is the marking order and is semantically meaningful: the
/// path derivation walks markers in exactly this order. Removal never
/// reorders the survivors. This is the only mutable shared state besides the
/// device location held by the controller.
#[derive(Debug, Default)]
pub struct MarkerStore {
    markers: Vec<Marker>,
    marking_enabled: bool,
    next_id: u64,
}

impl MarkerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables marking mode. Marking mode gates tap-to-add and
    /// tap-to-remove; the explicit mark action is never gated.
    pub fn set_marking_enabled(&mut self, enabled: bool) {
        self.marking_enabled = enabled;
    }

    pub fn marking_enabled(&self) -> bool {
        self.marking_enabled
    }

    /// Appends a marker at `position` and returns it. Always succeeds; ids
    /// are allocated from a monotonic counter and never reused.
    pub fn add(&mut self, position: LatLng) -> Marker {
        let marker = Marker::new(MarkerId::new(self.next_id), position);
        self.next_id += 1;
        self.markers.push(marker.clone());
        log::debug!(
            "marker {} added at ({:.6}, {:.6})",
            marker.id().raw(),
            position.lat,
            position.lng
        );
        marker
    }

    /// Removes the marker with `id`, preserving the relative order of the
    /// rest. Returns false when the id is not present; an absent id is
    /// already-satisfied, not an error.
    pub fn remove(&mut self, id: MarkerId) -> bool {
        match self.markers.iter().position(|m| m.id() == id) {
            Some(index) => {
                self.markers.remove(index);
                log::debug!("marker {} removed", id.raw());
                true
            }
            None => false,
        }
    }

    /// Tap-to-remove interaction: removes the tapped marker, but only while
    /// marking mode is active. Returns whether a marker was removed.
    pub fn toggle_marker_selection(&mut self, id: MarkerId) -> bool {
        if !self.marking_enabled {
            return false;
        }
        self.remove(id)
    }

    /// Read-only snapshot of the markers in marking order
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn get(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.iter().find(|m| m.id() == id)
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(store: &MarkerStore) -> Vec<LatLng> {
        store.markers().iter().map(|m| m.position()).collect()
    }

    #[test]
    fn test_add_preserves_call_order() {
        let mut store = MarkerStore::new();
        let a = store.add(LatLng::new(0.0, 0.0));
        let b = store.add(LatLng::new(1.0, 1.0));
        let c = store.add(LatLng::new(2.0, 2.0));

        assert_eq!(
            positions(&store),
            vec![
                LatLng::new(0.0, 0.0),
                LatLng::new(1.0, 1.0),
                LatLng::new(2.0, 2.0)
            ]
        );
        assert_ne!(a.id(), b.id());
        assert_ne!(b.id(), c.id());
        assert_ne!(a.id(), c.id());
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut store = MarkerStore::new();
        let kept = store.add(LatLng::new(5.0, 5.0));
        let before = positions(&store);

        assert!(!store.remove(MarkerId::new(999)));
        assert_eq!(positions(&store), before);
        assert_eq!(store.get(kept.id()).map(|m| m.id()), Some(kept.id()));
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let mut store = MarkerStore::new();
        store.add(LatLng::new(0.0, 0.0));
        let middle = store.add(LatLng::new(1.0, 1.0));
        store.add(LatLng::new(2.0, 2.0));

        assert!(store.remove(middle.id()));
        assert_eq!(store.len(), 2);
        assert_eq!(
            positions(&store),
            vec![LatLng::new(0.0, 0.0), LatLng::new(2.0, 2.0)]
        );
    }

    #[test]
    fn test_toggle_selection_gated_by_marking_mode() {
        let mut store = MarkerStore::new();
        let marker = store.add(LatLng::new(3.0, 3.0));

        // disabled: no-op, no state change
        assert!(!store.toggle_marker_selection(marker.id()));
        assert_eq!(store.len(), 1);

        store.set_marking_enabled(true);
        assert!(store.toggle_marker_selection(marker.id()));
        assert!(store.is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut store = MarkerStore::new();
        let first = store.add(LatLng::new(0.0, 0.0));
        store.remove(first.id());
        let second = store.add(LatLng::new(1.0, 1.0));
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn test_markers_snapshot_idempotent() {
        let mut store = MarkerStore::new();
        store.add(LatLng::new(4.0, 4.0));
        store.add(LatLng::new(5.0, 5.0));
        let first: Vec<_> = store.markers().to_vec();
        let second: Vec<_> = store.markers().to_vec();
        assert_eq!(first, second);
    }
}
