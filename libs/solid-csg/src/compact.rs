//! # Compact Binary Record
//!
//! Flat, class-tagged encoding of a solid. Vertex positions are shared
//! between polygons; each polygon stores its corner count, its corner
//! indexes and its plane.
//!
//! ## Layout
//!
//! - `vertices_per_polygon[i]`: corner count of polygon `i`
//! - `polygon_vertex_indexes`: corner indexes of all polygons, concatenated
//! - `vertex_data`: `x, y, z` per unique vertex
//! - `plane_data`: `nx, ny, nz, w` per polygon

use crate::error::CsgError;
use crate::plane::Plane;
use crate::polygon::Polygon;
use crate::solid::Solid;
use crate::vertex::Vertex;
use config::constants::SOLID_CLASS_TAG;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Compact record of one solid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompactBinary {
    /// Kind of object the record encodes; `"CSG"` for solids.
    pub class: String,
    pub num_polygons: u32,
    pub vertices_per_polygon: Vec<u32>,
    pub vertex_data: Vec<f64>,
    pub polygon_vertex_indexes: Vec<u32>,
    pub plane_data: Vec<f64>,
}

impl Solid {
    /// Encodes the solid as a compact record.
    ///
    /// Vertices with bit-identical positions are stored once.
    pub fn to_compact_binary(&self) -> CompactBinary {
        let polygons = self.polygons();
        let mut vertex_lookup: HashMap<[u64; 3], u32> = HashMap::new();
        let mut vertex_data = Vec::new();
        let mut vertices_per_polygon = Vec::with_capacity(polygons.len());
        let mut polygon_vertex_indexes = Vec::new();
        let mut plane_data = Vec::with_capacity(polygons.len() * 4);

        for polygon in polygons {
            vertices_per_polygon.push(polygon.vertices().len() as u32);
            for vertex in polygon.vertices() {
                let key = vertex.pos.to_array().map(f64::to_bits);
                let index = *vertex_lookup.entry(key).or_insert_with(|| {
                    vertex_data.extend_from_slice(&vertex.pos.to_array());
                    (vertex_data.len() / 3 - 1) as u32
                });
                polygon_vertex_indexes.push(index);
            }
            let plane = polygon.plane();
            plane_data.extend_from_slice(&[plane.normal.x, plane.normal.y, plane.normal.z, plane.w]);
        }

        debug!(
            polygons = polygons.len(),
            vertices = vertex_data.len() / 3,
            "encoded compact record"
        );

        CompactBinary {
            class: SOLID_CLASS_TAG.to_string(),
            num_polygons: polygons.len() as u32,
            vertices_per_polygon,
            vertex_data,
            polygon_vertex_indexes,
            plane_data,
        }
    }

    /// Decodes a compact record.
    ///
    /// # Errors
    ///
    /// - [`CsgError::UnsupportedClass`] when the class tag is not `"CSG"`
    /// - [`CsgError::MalformedRecord`] when array lengths disagree, a
    ///   polygon has fewer than three corners, or an index is out of range
    pub fn from_compact_binary(record: &CompactBinary) -> Result<Solid, CsgError> {
        if record.class != SOLID_CLASS_TAG {
            return Err(CsgError::UnsupportedClass {
                class: record.class.clone(),
            });
        }

        let num_polygons = record.num_polygons as usize;
        if record.vertices_per_polygon.len() != num_polygons {
            return Err(CsgError::malformed(format!(
                "{} polygons declared but {} corner counts present",
                num_polygons,
                record.vertices_per_polygon.len()
            )));
        }
        if record.plane_data.len() != num_polygons * 4 {
            return Err(CsgError::malformed(format!(
                "expected {} plane values, found {}",
                num_polygons * 4,
                record.plane_data.len()
            )));
        }
        if record.vertex_data.len() % 3 != 0 {
            return Err(CsgError::malformed(format!(
                "vertex data length {} is not a multiple of 3",
                record.vertex_data.len()
            )));
        }
        let total_corners: usize = record.vertices_per_polygon.iter().map(|&n| n as usize).sum();
        if total_corners != record.polygon_vertex_indexes.len() {
            return Err(CsgError::malformed(format!(
                "corner counts sum to {} but {} indexes present",
                total_corners,
                record.polygon_vertex_indexes.len()
            )));
        }

        let positions: Vec<DVec3> = record
            .vertex_data
            .chunks_exact(3)
            .map(DVec3::from_slice)
            .collect();

        let mut polygons = Vec::with_capacity(num_polygons);
        let mut indexes = record.polygon_vertex_indexes.iter();
        for (i, (&count, plane)) in record
            .vertices_per_polygon
            .iter()
            .zip(record.plane_data.chunks_exact(4))
            .enumerate()
        {
            if count < 3 {
                return Err(CsgError::malformed(format!(
                    "polygon {i} has {count} corners"
                )));
            }
            let vertices = indexes
                .by_ref()
                .take(count as usize)
                .map(|&index| {
                    positions
                        .get(index as usize)
                        .map(|&pos| Vertex::new(pos))
                        .ok_or_else(|| {
                            CsgError::malformed(format!(
                                "polygon {i} references vertex {index} of {}",
                                positions.len()
                            ))
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            let plane = Plane::new(DVec3::new(plane[0], plane[1], plane[2]), plane[3]);
            polygons.push(Polygon::with_plane(vertices, plane));
        }

        Ok(Solid::from_polygons(polygons))
    }
}

// =============================================================================
// TESTS
// =============================================================================
