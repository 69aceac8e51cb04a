// ./src/main.rs
use bevy::app::AppExit;
use bevy::log::LogPlugin;
use bevy::prelude::*;

use voronoid_chart::layout::{
    CanvasOrientation, GenerateLayoutRequest, LayoutCompleted, LayoutEngine, LayoutPlugin,
    default_items,
};
use voronoid_chart::math::geometry::polygon::PolygonProperties;

fn main() {
    App::new()
        .add_plugins(MinimalPlugins)
        .add_plugins(LogPlugin::default())
        .add_plugins(LayoutPlugin)
        .add_systems(Startup, request_default_layout)
        .add_systems(PostUpdate, report_layout_and_exit)
        .run();
}

fn request_default_layout(mut requests: EventWriter<GenerateLayoutRequest>) {
    requests.send(GenerateLayoutRequest {
        items: default_items(),
        orientation: CanvasOrientation::Landscape,
    });
}

fn report_layout_and_exit(
    mut completed: EventReader<LayoutCompleted>,
    engine: Res<LayoutEngine>,
    mut exit: EventWriter<AppExit>,
) {
    for event in completed.read() {
        info!(
            "Layout {:?}: {} iterations, max error {:.2}%",
            event.outcome,
            event.iterations,
            event.max_error * 100.0
        );

        if let Some(snapshot) = engine.snapshot() {
            for (meta, cell) in snapshot.metadata.iter().zip(&snapshot.cells) {
                match cell {
                    Some(cell) => info!(
                        "{:<20} {:>4}% {} {:?} vertices={} centroid={:?}",
                        meta.label,
                        meta.percentage,
                        meta.color,
                        meta.tier,
                        cell.len(),
                        cell.centroid()
                    ),
                    None => info!("{:<20} {:>4}% collapsed", meta.label, meta.percentage),
                }
            }
        }

        exit.send(AppExit);
    }
}
