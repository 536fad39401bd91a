//! Point cloud file loading for plyview
//!
//! This crate reads point clouds from PLY files (ascii and binary) and
//! dispatches on the file extension so further formats can slot in later.

pub mod ply;

use plyview_core::{ColoredPoint3f, Point3f, PointCloud, Result};
use std::path::Path;

/// Trait for reading point clouds from files
pub trait PointCloudReader {
    fn read_point_cloud<P: AsRef<Path>>(path: P) -> Result<PointCloud<Point3f>>;

    fn read_colored_point_cloud<P: AsRef<Path>>(path: P) -> Result<PointCloud<ColoredPoint3f>>;
}

/// Auto-detect format and read a point cloud
pub fn read_point_cloud<P: AsRef<Path>>(path: P) -> Result<PointCloud<Point3f>> {
    let path = path.as_ref();
    match path.extension().and_then(|s| s.to_str()) {
        Some("ply") => ply::PlyReader::read_point_cloud(path),
        other => Err(plyview_core::Error::UnsupportedFormat(format!(
            "Unsupported point cloud format: {:?}",
            other
        ))),
    }
}

/// Auto-detect format and read a point cloud with per-vertex colors
///
/// Points in files without color properties come back white.
pub fn read_colored_point_cloud<P: AsRef<Path>>(path: P) -> Result<PointCloud<ColoredPoint3f>> {
    read_colored_point_cloud_with(path, [255, 255, 255])
}

/// Like [`read_colored_point_cloud`], with a caller-chosen fallback color
/// for files that carry no vertex colors
pub fn read_colored_point_cloud_with<P: AsRef<Path>>(
    path: P,
    default_color: [u8; 3],
) -> Result<PointCloud<ColoredPoint3f>> {
    let path = path.as_ref();
    match path.extension().and_then(|s| s.to_str()) {
        Some("ply") => ply::PlyReader::read_colored_point_cloud_with(path, default_color),
        other => Err(plyview_core::Error::UnsupportedFormat(format!(
            "Unsupported point cloud format: {:?}",
            other
        ))),
    }
}
