//! Headless walkthrough of the marker/path flow: marks a few locations,
//! removes one, and renders the connected path, printing every user notice.
//!
//! Run with: cargo run --example headless

use waymark::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let source = StaticLocationSource::new()
        .with_permission(true)
        .with_current(LatLng::new(48.8584, 2.2945))
        .with_last_known(LatLng::new(48.8584, 2.2945));
    let controller = MapController::new(HeadlessSurface::new(), source);

    let (tx, rx) = channel();

    tx.send(MapEvent::MarkCurrentLocation).await?;
    tx.send(MapEvent::SetMarkingEnabled { enabled: true }).await?;
    tx.send(MapEvent::Tap {
        position: LatLng::new(48.8606, 2.3376),
    })
    .await?;
    tx.send(MapEvent::Tap {
        position: LatLng::new(48.8530, 2.3499),
    })
    .await?;
    tx.send(MapEvent::ViewPath).await?;
    drop(tx);

    let controller = run(controller, rx, |notice| println!("* {notice}")).await?;

    println!("markers placed: {}", controller.store().len());
    if let Some(points) = controller.surface().sole_polyline() {
        println!("path:");
        for point in points {
            println!("  ({:.4}, {:.4})", point.lat, point.lng);
        }
    }
    Ok(())
}
