pub mod overlay;
pub mod player;
pub mod primitives;
pub mod report;

pub use overlay::{render, OverlayOptions, OverlayType};
pub use player::PlaybackDriver;
pub use primitives::{Layer, LayerKind, Primitive, Scene, Style};
pub use report::render_report;
