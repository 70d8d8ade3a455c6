pub mod animation;
pub mod camera;
pub mod cli;
pub mod config;
pub mod environment;
pub mod frame;
pub mod gallery;
pub mod input;
pub mod instancing;
pub mod logging;
pub mod math;
pub mod mesh;
pub mod placement;
pub mod renderer;
pub mod scene;
pub mod scenes;
pub mod types;

pub use gallery::{Gallery, NavCommand, SceneEntry, Stage};
pub use scene::{SceneBuilder, SceneContent};
pub use scenes::CATALOG;
