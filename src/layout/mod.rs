// src/layout/mod.rs
pub mod config;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod events;
pub mod metadata;
pub mod palette;
pub mod plugin;
pub mod resources;
pub mod run_state;
pub mod seeding;
pub mod state;
pub mod systems;

pub use config::{CanvasOrientation, LayoutConfig};
pub use dataset::{DataItem, Dataset, Site, default_items};
pub use engine::{LayoutEngine, LayoutOutcome, LayoutSnapshot, StepOutcome};
pub use error::{LayoutError, LayoutResult};
pub use events::{GenerateLayoutRequest, LayoutCompleted, MoveSeedRequest, ReoptimizeRequest};
pub use metadata::{CellMetadata, CellTier};
pub use palette::{CategoryDef, CategoryPalette};
pub use plugin::LayoutPlugin;
pub use resources::LayoutStatus;
pub use state::LayoutPhase;
