//! Interactive point cloud viewer
//!
//! This crate provides the presentation layer on top of plyview-core and
//! plyview-io using wgpu and winit:
//! - Perspective camera and orbit controls
//! - Point cloud rendering
//! - Sequence-guarded asynchronous file loading

pub mod camera;
pub mod controls;
pub mod load;
pub mod renderer;
pub mod viewer;

pub use camera::*;
pub use controls::*;
pub use load::*;
pub use renderer::*;
pub use viewer::*;
