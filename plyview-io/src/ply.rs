//! PLY format support

use crate::PointCloudReader;
use ply_rs::{
    parser::Parser,
    ply::{DefaultElement, Property},
};
use plyview_core::{ColoredPoint3f, Error, Point3f, PointCloud, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub struct PlyReader;

impl PointCloudReader for PlyReader {
    fn read_point_cloud<P: AsRef<Path>>(path: P) -> Result<PointCloud<Point3f>> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        let parser = Parser::<DefaultElement>::new();
        let ply = parser.read_ply(&mut reader)?;

        let mut points = Vec::new();
        if let Some(vertices) = ply.payload.get("vertex") {
            points.reserve(vertices.len());
            for vertex in vertices {
                points.push(extract_position(vertex)?);
            }
        }

        log::debug!("parsed {} vertices", points.len());
        Ok(PointCloud::from_points(points))
    }

    fn read_colored_point_cloud<P: AsRef<Path>>(path: P) -> Result<PointCloud<ColoredPoint3f>> {
        Self::read_colored_point_cloud_with(path, [255, 255, 255])
    }
}

impl PlyReader {
    /// Read a colored point cloud, giving `default_color` to vertices in
    /// files that carry no color properties
    pub fn read_colored_point_cloud_with<P: AsRef<Path>>(
        path: P,
        default_color: [u8; 3],
    ) -> Result<PointCloud<ColoredPoint3f>> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        let parser = Parser::<DefaultElement>::new();
        let ply = parser.read_ply(&mut reader)?;

        let mut points = Vec::new();
        if let Some(vertices) = ply.payload.get("vertex") {
            points.reserve(vertices.len());
            for vertex in vertices {
                let position = extract_position(vertex)?;
                let color = extract_color(vertex).unwrap_or(default_color);
                points.push(ColoredPoint3f::new(position, color));
            }
        }

        log::debug!("parsed {} colored vertices", points.len());
        Ok(PointCloud::from_points(points))
    }
}

fn extract_position(vertex: &DefaultElement) -> Result<Point3f> {
    let x = extract_scalar(vertex, "x")?;
    let y = extract_scalar(vertex, "y")?;
    let z = extract_scalar(vertex, "z")?;
    Ok(Point3f::new(x, y, z))
}

/// Extract a property value as f32 from a PLY element
fn extract_scalar(element: &DefaultElement, name: &str) -> Result<f32> {
    match element.get(name) {
        Some(Property::Float(val)) => Ok(*val),
        Some(Property::Double(val)) => Ok(*val as f32),
        Some(Property::Int(val)) => Ok(*val as f32),
        Some(Property::UInt(val)) => Ok(*val as f32),
        Some(Property::Short(val)) => Ok(*val as f32),
        Some(Property::UShort(val)) => Ok(*val as f32),
        _ => Err(Error::InvalidData(format!(
            "Property '{}' not found or invalid type",
            name
        ))),
    }
}

/// Extract red/green/blue channels, `None` when the file carries no colors
fn extract_color(element: &DefaultElement) -> Option<[u8; 3]> {
    let r = extract_channel(element, "red")?;
    let g = extract_channel(element, "green")?;
    let b = extract_channel(element, "blue")?;
    Some([r, g, b])
}

fn extract_channel(element: &DefaultElement, name: &str) -> Option<u8> {
    match element.get(name) {
        Some(Property::UChar(val)) => Some(*val),
        Some(Property::Char(val)) => Some(*val as u8),
        Some(Property::UShort(val)) => Some((*val >> 8) as u8),
        Some(Property::Float(val)) => Some((val.clamp(0.0, 1.0) * 255.0) as u8),
        Some(Property::Double(val)) => Some((val.clamp(0.0, 1.0) * 255.0) as u8),
        _ => None,
    }
}
