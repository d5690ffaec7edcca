//! 2D outline to prism.
//!
//! One quad per ring edge forms the side walls; the outline is triangulated
//! with earcut for the bottom (`z = 0`, facing down) and top (`z = height`,
//! facing up) caps. Walls and caps share exact vertex positions, so every
//! edge of the result belongs to exactly two polygons.

use super::expand::orient;
use crate::plane::Plane;
use crate::polygon::Polygon;
use crate::solid::Solid;
use crate::vertex::Vertex;
use geo::{Coord, LineString, MultiPolygon, TriangulateEarcut};
use glam::DVec3;
use tracing::trace;

pub(super) fn extrude(outline: &MultiPolygon<f64>, height: f64) -> Solid {
    let mut polygons = Vec::new();

    for shape in outline {
        walls(shape.exterior(), height, &mut polygons);
        for hole in shape.interiors() {
            walls(hole, height, &mut polygons);
        }
        caps(shape, height, &mut polygons);
    }

    Solid::from_polygons(polygons)
}

/// Exterior rings run counter-clockwise and holes clockwise, so `a -> b`
/// always has the material on its left.
fn walls(ring: &LineString<f64>, height: f64, out: &mut Vec<Polygon>) {
    for line in ring.lines() {
        let (a, b) = (line.start, line.end);
        let normal = DVec3::new(b.y - a.y, a.x - b.x, 0.0).normalize();
        let a0 = DVec3::new(a.x, a.y, 0.0);
        let plane = Plane::new(normal, normal.dot(a0));
        out.push(Polygon::with_plane(
            vec![
                Vertex::new(a0),
                Vertex::new(DVec3::new(b.x, b.y, 0.0)),
                Vertex::new(DVec3::new(b.x, b.y, height)),
                Vertex::new(DVec3::new(a.x, a.y, height)),
            ],
            plane,
        ));
    }
}

fn caps(shape: &geo::Polygon<f64>, height: f64, out: &mut Vec<Polygon>) {
    let triangulation = shape.earcut_triangles_raw();
    let coords = &triangulation.vertices;
    let at = |index: usize| Coord {
        x: coords[2 * index],
        y: coords[2 * index + 1],
    };

    let top = Plane::new(DVec3::Z, height);
    let bottom = Plane::new(DVec3::NEG_Z, 0.0);

    for triangle in triangulation.triangle_indices.chunks_exact(3) {
        let (mut a, b, mut c) = (at(triangle[0]), at(triangle[1]), at(triangle[2]));
        let turn = orient(a, b, c);
        if turn == 0.0 {
            trace!("skipping flat cap triangle");
            continue;
        }
        if turn < 0.0 {
            std::mem::swap(&mut a, &mut c);
        }
        let lift = |p: Coord<f64>, z: f64| Vertex::new(DVec3::new(p.x, p.y, z));
        out.push(Polygon::with_plane(
            vec![lift(a, height), lift(b, height), lift(c, height)],
            top,
        ));
        out.push(Polygon::with_plane(
            vec![lift(c, 0.0), lift(b, 0.0), lift(a, 0.0)],
            bottom,
        ));
    }
}
