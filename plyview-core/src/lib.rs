//! Core data structures for plyview
//!
//! This crate provides the fundamental types for the viewer: points,
//! point clouds, bounding volumes, and the camera fit frame.

pub mod bounds;
pub mod error;
pub mod frame;
pub mod point;
pub mod point_cloud;

pub use bounds::*;
pub use error::*;
pub use frame::*;
pub use point::*;
pub use point_cloud::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Matrix4, Point3, Vector3};

/// Common result type for plyview operations
pub type Result<T> = std::result::Result<T, Error>;
