//! # Solid Tests
//!
//! Boolean operations, transforms and bounds of polygon solids.

use super::*;
use crate::vertex::Vertex;
use approx::assert_relative_eq;

/// Axis-aligned cube of edge `size` centred at `center`, outward-facing quads.
fn cube_at(center: DVec3, size: f64) -> Solid {
    let h = size / 2.0;
    let corner = |x: f64, y: f64, z: f64| Vertex::new(center + DVec3::new(x * h, y * h, z * h));
    let faces = [
        [(-1., -1., -1.), (-1., -1., 1.), (-1., 1., 1.), (-1., 1., -1.)],
        [(1., -1., -1.), (1., 1., -1.), (1., 1., 1.), (1., -1., 1.)],
        [(-1., -1., -1.), (1., -1., -1.), (1., -1., 1.), (-1., -1., 1.)],
        [(-1., 1., -1.), (-1., 1., 1.), (1., 1., 1.), (1., 1., -1.)],
        [(-1., -1., -1.), (-1., 1., -1.), (1., 1., -1.), (1., -1., -1.)],
        [(-1., -1., 1.), (1., -1., 1.), (1., 1., 1.), (-1., 1., 1.)],
    ];
    faces
        .iter()
        .map(|quad| {
            Polygon::new(quad.iter().map(|&(x, y, z)| corner(x, y, z)).collect()).unwrap()
        })
        .collect()
}

/// Signed volume from the divergence theorem over fan triangles.
fn volume(solid: &Solid) -> f64 {
    solid
        .polygons()
        .iter()
        .map(|p| {
            let v = p.vertices();
            (2..v.len())
                .map(|i| v[0].pos.dot(v[i - 1].pos.cross(v[i].pos)) / 6.0)
                .sum::<f64>()
        })
        .sum()
}

// =============================================================================
// CONSTRUCTION TESTS
// =============================================================================

#[test]
fn test_cube_faces_outward() {
    let cube = cube_at(DVec3::ZERO, 2.0);
    assert_eq!(cube.polygon_count(), 6);
    for poly in cube.polygons() {
        let centroid = poly.vertices().iter().map(|v| v.pos).sum::<DVec3>() / 4.0;
        assert!(poly.plane().normal.dot(centroid) > 0.0);
        assert!(poly.check_if_convex().is_ok());
    }
    assert_relative_eq!(volume(&cube), 8.0, epsilon = 1e-9);
}

#[test]
fn test_bounding_box() {
    let cube = cube_at(DVec3::new(1.0, 2.0, 3.0), 2.0);
    let (min, max) = cube.bounding_box().unwrap();
    assert_eq!(min, DVec3::new(0.0, 1.0, 2.0));
    assert_eq!(max, DVec3::new(2.0, 3.0, 4.0));
    assert!(Solid::default().bounding_box().is_none());
}

// =============================================================================
// UNION TESTS
// =============================================================================

#[test]
fn test_union_empty_operands() {
    let cube = cube_at(DVec3::ZERO, 1.0);
    assert_eq!(Solid::default().union(&cube), cube);
    assert_eq!(cube.union(&Solid::default()), cube);
}

#[test]
fn test_union_non_overlapping_concatenates() {
    let a = cube_at(DVec3::new(-5.0, 0.0, 0.0), 1.0);
    let b = cube_at(DVec3::new(5.0, 0.0, 0.0), 1.0);

    let result = a.union(&b);

    assert_eq!(result.polygon_count(), 12);
    assert_eq!(&result.polygons()[..6], a.polygons());
    assert_relative_eq!(volume(&result), 2.0, epsilon = 1e-9);
}

#[test]
fn test_union_overlapping() {
    let a = cube_at(DVec3::ZERO, 2.0);
    let b = cube_at(DVec3::new(1.0, 0.0, 0.0), 2.0);

    let result = a.union(&b);

    assert_relative_eq!(volume(&result), 12.0, epsilon = 1e-9);
    let (min, max) = result.bounding_box().unwrap();
    assert_relative_eq!(min.x, -1.0, epsilon = 1e-9);
    assert_relative_eq!(max.x, 2.0, epsilon = 1e-9);
}

#[test]
fn test_union_touching() {
    let a = cube_at(DVec3::ZERO, 2.0);
    let b = cube_at(DVec3::new(2.0, 0.0, 0.0), 2.0);

    assert_relative_eq!(volume(&a.union(&b)), 16.0, epsilon = 1e-9);
}

#[test]
fn test_union_all_matches_chain() {
    let cubes: Vec<Solid> = (0..5)
        .map(|i| cube_at(DVec3::new(i as f64, 0.0, 0.0), 2.0))
        .collect();

    let result = Solid::union_all(cubes);

    assert_relative_eq!(volume(&result), 6.0 * 4.0, epsilon = 1e-9);
}

#[test]
fn test_union_all_edge_cases() {
    assert!(Solid::union_all(vec![]).is_empty());
    let single = cube_at(DVec3::ZERO, 1.0);
    assert_eq!(Solid::union_all(vec![single.clone()]), single);
}

// =============================================================================
// SUBTRACT TESTS
// =============================================================================

#[test]
fn test_subtract_contained() {
    let a = cube_at(DVec3::ZERO, 4.0);
    let b = cube_at(DVec3::ZERO, 2.0);

    assert_relative_eq!(volume(&a.subtract(&b)), 56.0, epsilon = 1e-9);
}

#[test]
fn test_subtract_non_overlapping() {
    let a = cube_at(DVec3::new(-5.0, 0.0, 0.0), 1.0);
    let b = cube_at(DVec3::new(5.0, 0.0, 0.0), 1.0);

    assert_eq!(a.subtract(&b), a);
    assert!(Solid::default().subtract(&b).is_empty());
}

#[test]
fn test_subtract_overlapping() {
    let a = cube_at(DVec3::ZERO, 2.0);
    let b = cube_at(DVec3::new(1.0, 0.0, 0.0), 2.0);

    let result = a.subtract(&b);

    assert_relative_eq!(volume(&result), 4.0, epsilon = 1e-9);
    let (_, max) = result.bounding_box().unwrap();
    assert_relative_eq!(max.x, 0.0, epsilon = 1e-9);
}

// =============================================================================
// INTERSECT TESTS
// =============================================================================

#[test]
fn test_intersect_overlapping() {
    let a = cube_at(DVec3::ZERO, 2.0);
    let b = cube_at(DVec3::new(0.5, 0.0, 0.0), 2.0);

    assert_relative_eq!(volume(&a.intersect(&b)), 6.0, epsilon = 1e-9);
}

#[test]
fn test_intersect_disjoint_or_empty() {
    let a = cube_at(DVec3::new(-5.0, 0.0, 0.0), 1.0);
    let b = cube_at(DVec3::new(5.0, 0.0, 0.0), 1.0);

    assert!(a.intersect(&b).is_empty());
    assert!(a.intersect(&Solid::default()).is_empty());
}

#[test]
fn test_boolean_chain() {
    // (A ∪ B) - C
    let a = cube_at(DVec3::ZERO, 2.0);
    let b = cube_at(DVec3::new(1.0, 0.0, 0.0), 2.0);
    let c = cube_at(DVec3::new(0.5, 0.0, 0.0), 1.0);

    let result = a.union(&b).subtract(&c);

    assert_relative_eq!(volume(&result), 11.0, epsilon = 1e-9);
}

// =============================================================================
// TRANSFORM TESTS
// =============================================================================

#[test]
fn test_inverse_negates_volume() {
    let cube = cube_at(DVec3::ZERO, 2.0);
    assert_relative_eq!(volume(&cube.inverse()), -8.0, epsilon = 1e-9);
}

#[test]
fn test_translate_and_scale() {
    let cube = cube_at(DVec3::ZERO, 2.0);

    let moved = cube.translate(DVec3::new(10.0, 0.0, 0.0));
    let (min, _) = moved.bounding_box().unwrap();
    assert_relative_eq!(min.x, 9.0, epsilon = 1e-12);

    let scaled = cube.scale(0.5);
    assert_relative_eq!(volume(&scaled), 1.0, epsilon = 1e-9);
}

#[test]
fn test_transform_mirror_keeps_solid_outward() {
    let cube = cube_at(DVec3::new(3.0, 0.0, 0.0), 2.0);
    let mirrored = cube.transform(&DMat4::from_scale(DVec3::new(-1.0, 1.0, 1.0)));

    assert_relative_eq!(volume(&mirrored), 8.0, epsilon = 1e-9);
    for poly in mirrored.polygons() {
        assert!(poly.check_if_convex().is_ok());
    }
}

#[test]
fn test_transform_singular_drops_polygons() {
    let cube = cube_at(DVec3::ZERO, 2.0);
    let flat = cube.transform(&DMat4::from_scale(DVec3::new(1.0, 1.0, 0.0)));

    // Only the two faces parallel to the squashed axis keep a plane
    assert_eq!(flat.polygon_count(), 2);
}

#[test]
fn test_try_transform_reports_collapse() {
    let cube = cube_at(DVec3::ZERO, 2.0);

    let err = cube
        .try_transform(&DMat4::from_scale(DVec3::new(1.0, 1.0, 0.0)))
        .unwrap_err();
    assert_eq!(
        err,
        CsgError::CollapsedTransform {
            collapsed: 4,
            total: 6
        }
    );

    let moved = cube.try_transform(&DMat4::from_translation(DVec3::X)).unwrap();
    assert_eq!(moved, cube.translate(DVec3::X));
}
