pub mod animation;
pub mod camera;
pub mod color;
pub mod config;
pub mod constants;
pub mod controls;
pub mod driver;
pub mod error;
pub mod factory;
pub mod geometry;
pub mod interaction;
pub mod lighting;
pub mod particles;
pub mod scene;
pub mod state;

pub use animation::*;
pub use camera::*;
pub use color::*;
pub use config::*;
pub use constants::*;
pub use controls::*;
pub use driver::*;
pub use error::*;
pub use geometry::{Geometry, MeshData, Vertex};
pub use interaction::*;
pub use lighting::*;
pub use particles::*;
pub use scene::*;
pub use state::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
