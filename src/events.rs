//! Message-passing front end for the controller.
//!
//! Asynchronous completions (location fixes, permission results) are posted
//! to the same queue as user input, so the controller remains the single
//! state owner and never needs callback closures capturing mutable fields.

use crate::{
    controller::{MapController, Notice},
    input::events::MapEvent,
    location::LocationSource,
    render::MapSurface,
    Result,
};
use tokio::sync::mpsc;

/// Default depth of the event queue
pub const EVENT_QUEUE_DEPTH: usize = 32;

/// Creates an event channel with the default depth
pub fn channel() -> (mpsc::Sender<MapEvent>, mpsc::Receiver<MapEvent>) {
    mpsc::channel(EVENT_QUEUE_DEPTH)
}

/// Runs the controller's startup flow, then consumes events until every
/// sender is dropped. Notices are forwarded to `on_notice` as they occur.
/// Returns the controller so callers can inspect final state.
pub async fn run<S, L, F>(
    mut controller: MapController<S, L>,
    mut events: mpsc::Receiver<MapEvent>,
    mut on_notice: F,
) -> Result<MapController<S, L>>
where
    S: MapSurface,
    L: LocationSource,
    F: FnMut(Notice),
{
    controller.start().await?;
    while let Some(event) = events.recv().await {
        for notice in controller.dispatch(event).await? {
            on_notice(notice);
        }
    }
    log::debug!("event channel closed, controller loop exiting");
    Ok(controller)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::geo::LatLng, location::StaticLocationSource, render::headless::HeadlessSurface,
    };

    #[tokio::test]
    async fn test_run_drains_queue_then_returns_controller() {
        let source = StaticLocationSource::new()
            .with_permission(true)
            .with_current(LatLng::new(7.0, 7.0))
            .with_last_known(LatLng::new(7.0, 7.0));
        let controller = MapController::new(HeadlessSurface::new(), source);

        let (tx, rx) = channel();
        let mut notices = Vec::new();

        tx.send(MapEvent::SetMarkingEnabled { enabled: true })
            .await
            .unwrap();
        tx.send(MapEvent::Tap {
            position: LatLng::new(1.0, 1.0),
        })
        .await
        .unwrap();
        tx.send(MapEvent::ViewPath).await.unwrap();
        drop(tx);

        let controller = run(controller, rx, |n| notices.push(n)).await.unwrap();

        assert_eq!(controller.store().len(), 1);
        assert_eq!(notices, vec![Notice::PathRendered]);
        assert_eq!(
            controller.surface().sole_polyline(),
            Some(&[LatLng::new(7.0, 7.0), LatLng::new(1.0, 1.0)][..])
        );
    }
}
