//! # Bridge Tests
//!
//! Mesh to solid and solid to mesh conversion.

use super::*;
use crate::mesh::{BufferGeometry, FaceIndices, MeshGeometry};
use approx::assert_relative_eq;
use glam::{DQuat, DVec3};
use solid_csg::{Polygon, Solid, Vertex};

fn bridge() -> Bridge<CsgKernel> {
    Bridge::default()
}

/// Unit cube at the origin, six outward-facing quads.
fn unit_cube() -> Geometry {
    let vertices = vec![
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(1.0, 1.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(0.0, 0.0, 1.0),
        DVec3::new(1.0, 0.0, 1.0),
        DVec3::new(1.0, 1.0, 1.0),
        DVec3::new(0.0, 1.0, 1.0),
    ];
    let faces = vec![
        Face::quad([0, 3, 2, 1], DVec3::NEG_Z),
        Face::quad([4, 5, 6, 7], DVec3::Z),
        Face::quad([0, 1, 5, 4], DVec3::NEG_Y),
        Face::quad([3, 7, 6, 2], DVec3::Y),
        Face::quad([0, 4, 7, 3], DVec3::NEG_X),
        Face::quad([1, 2, 6, 5], DVec3::X),
    ];
    Geometry::from_parts(vertices, faces)
}

fn centroid(polygon: &Polygon) -> DVec3 {
    let v = polygon.vertices();
    v.iter().map(|v| v.pos).sum::<DVec3>() / v.len() as f64
}

// =============================================================================
// BUILDER TESTS
// =============================================================================

#[test]
fn test_build_without_kernel() {
    let err = BridgeBuilder::<CsgKernel>::new().build().unwrap_err();
    assert!(matches!(
        err,
        BridgeError::MissingDependency {
            dependency: "solid kernel"
        }
    ));
}

#[test]
fn test_build_with_kernel() {
    let bridge = Bridge::builder().kernel(CsgKernel::default()).build().unwrap();
    assert_eq!(bridge.kernel(), &CsgKernel::default());
}

// =============================================================================
// GEOMETRY TO SOLID TESTS
// =============================================================================

#[test]
fn test_cube_faces_become_polygons() {
    let cube = unit_cube();
    let solid = bridge().from_geometry(&cube).unwrap();

    assert_eq!(solid.polygon_count(), 6);
    for (polygon, face) in solid.polygons().iter().zip(cube.faces()) {
        assert_eq!(polygon.vertices().len(), 4);
        assert_relative_eq!(polygon.plane().normal.dot(face.normal), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_non_convex_quad() {
    let dart = Geometry::from_parts(
        vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(2.0, 0.0, 0.0),
            DVec3::new(0.5, 0.5, 0.0),
            DVec3::new(0.0, 2.0, 0.0),
        ],
        vec![Face::quad([0, 1, 2, 3], DVec3::Z)],
    );
    let err = bridge().from_geometry(&dart).unwrap_err();
    assert!(matches!(err, BridgeError::InvalidPolygon { face: 0, .. }));
}

#[test]
fn test_degenerate_triangle() {
    let mut geometry = unit_cube();
    geometry.add_face(Face::triangle([0, 1, 1], DVec3::Z));
    let err = bridge().from_geometry(&geometry).unwrap_err();
    assert!(matches!(err, BridgeError::InvalidPolygon { face: 6, .. }));
}

#[test]
fn test_missing_vertex() {
    let mut geometry = unit_cube();
    geometry.add_face(Face::triangle([0, 1, 42], DVec3::Z));
    let err = bridge().from_geometry(&geometry).unwrap_err();
    assert!(matches!(
        err,
        BridgeError::InvalidVertexIndex {
            face: 6,
            index: 42,
            vertex_count: 8
        }
    ));
}

#[test]
fn test_buffer_geometry_matches_face_list() {
    let cube = unit_cube();
    let index: Vec<u32> = cube
        .faces()
        .iter()
        .flat_map(|f| f.indices.as_slice().to_vec())
        .collect();
    let buffer = BufferGeometry::indexed(cube.vertices().to_vec(), index).with_vertices_per_face(4);
    let before = buffer.clone();

    let from_buffer = bridge().from_geometry(&buffer).unwrap();
    let from_faces = bridge().from_geometry(&cube).unwrap();

    assert_eq!(from_buffer, from_faces);
    assert_eq!(buffer, before);
}

#[test]
fn test_buffer_with_unsupported_arity() {
    let buffer = BufferGeometry::new(vec![DVec3::ZERO; 5]).with_vertices_per_face(5);
    let err = bridge()
        .from_geometry(&MeshGeometry::Buffer(buffer))
        .unwrap_err();
    assert!(matches!(err, BridgeError::InvalidFaceType { face: 0, arity: 5 }));
}

// =============================================================================
// MESH INSTANCE TESTS
// =============================================================================

#[test]
fn test_from_mesh_refreshes_matrix() {
    let mut mesh = MeshInstance::new(unit_cube(), "steel");
    mesh.set_position(DVec3::new(10.0, 0.0, 0.0));
    assert!(mesh.matrix_needs_update());

    let solid = bridge().from_mesh(&mut mesh).unwrap();

    assert!(!mesh.matrix_needs_update());
    let (min, max) = solid.bounding_box().unwrap();
    assert_relative_eq!(min.x, 10.0, epsilon = 1e-12);
    assert_relative_eq!(max.x, 11.0, epsilon = 1e-12);
}

#[test]
fn test_from_mesh_rotation_and_scale() {
    let mut mesh = MeshInstance::new(unit_cube(), ());
    mesh.set_rotation(DQuat::from_rotation_z(std::f64::consts::FRAC_PI_2));
    mesh.set_scale(DVec3::new(2.0, 1.0, 1.0));

    let solid = bridge().from_mesh(&mut mesh).unwrap();
    let (min, max) = solid.bounding_box().unwrap();

    // Scaled along x first, then turned onto the y axis
    assert_relative_eq!(min.x, -1.0, epsilon = 1e-9);
    assert_relative_eq!(max.x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(min.y, 0.0, epsilon = 1e-9);
    assert_relative_eq!(max.y, 2.0, epsilon = 1e-9);
}

#[test]
fn test_from_mesh_mirror_keeps_outward_normals() {
    let mut mesh = MeshInstance::new(unit_cube(), ());
    mesh.set_scale(DVec3::new(-1.0, 1.0, 1.0));

    let solid = bridge().from_mesh(&mut mesh).unwrap();
    let center = DVec3::new(-0.5, 0.5, 0.5);

    assert_eq!(solid.polygon_count(), 6);
    for polygon in solid.polygons() {
        assert!((centroid(polygon) - center).dot(polygon.plane().normal) > 0.0);
        let v = polygon.vertices();
        let winding = (v[1].pos - v[0].pos).cross(v[2].pos - v[0].pos);
        assert!(winding.dot(polygon.plane().normal) > 0.0);
    }
}

#[test]
fn test_from_mesh_flat_scale_is_reported() {
    let mut mesh = MeshInstance::new(unit_cube(), ());
    mesh.set_scale(DVec3::new(1.0, 1.0, 0.0));

    let err = bridge().from_mesh(&mut mesh).unwrap_err();
    assert!(matches!(err, BridgeError::Kernel(_)));
    assert!(err.to_string().contains("collapses 4 of 6"), "{err}");
}

// =============================================================================
// SOLID TO GEOMETRY TESTS
// =============================================================================

#[test]
fn test_fan_triangulation() {
    let solid = bridge().from_geometry(&unit_cube()).unwrap();
    let geometry = bridge().to_geometry(&solid);

    assert_eq!(geometry.vertex_count(), 24);
    assert_eq!(geometry.face_count(), 12);
    assert_eq!(geometry.faces()[0].indices, FaceIndices::Triangle([0, 1, 2]));
    assert_eq!(geometry.faces()[1].indices, FaceIndices::Triangle([0, 2, 3]));
    assert_eq!(geometry.faces()[2].indices, FaceIndices::Triangle([4, 5, 6]));
    for (i, face) in geometry.faces().iter().enumerate() {
        assert_eq!(face.normal, solid.polygons()[i / 2].plane().normal);
    }
}

#[test]
fn test_closing_vertex_is_dropped() {
    let ring = [
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(1.0, 1.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(0.0, 0.0, 0.0),
    ];
    let polygon = Polygon::new(ring.iter().copied().map(Vertex::new).collect()).unwrap();
    let solid = Solid::from_polygons(vec![polygon]);

    let geometry = bridge().to_geometry(&solid);

    assert_eq!(geometry.vertex_count(), 4);
    assert_eq!(geometry.face_count(), 2);
    assert_relative_eq!(geometry.surface_area(), 1.0, epsilon = 1e-12);
    assert_eq!(geometry.faces()[0].indices, FaceIndices::Triangle([0, 1, 2]));
    assert_eq!(geometry.faces()[1].indices, FaceIndices::Triangle([0, 2, 3]));
}

#[test]
fn test_empty_solid() {
    let geometry = bridge().to_geometry(&Solid::default());
    assert!(geometry.is_empty());
    assert_eq!(geometry.vertex_count(), 0);
}

#[test]
fn test_to_mesh_pairs_material() {
    let solid = bridge().from_geometry(&unit_cube()).unwrap();
    let mesh = bridge().to_mesh(&solid, [0.8_f32, 0.1, 0.1, 1.0]);

    assert_eq!(mesh.material, [0.8, 0.1, 0.1, 1.0]);
    assert_eq!(*mesh.matrix(), glam::DMat4::IDENTITY);
    assert!(matches!(mesh.geometry, MeshGeometry::Faces(ref g) if g.face_count() == 12));
}

// =============================================================================
// TEXT TESTS
// =============================================================================

#[test]
fn test_blank_text_is_empty() {
    for text in ["", " ", "\n\t"] {
        let solid = bridge().from_text(text, &TextStyle::default()).unwrap();
        assert!(solid.is_empty(), "{text:?} produced polygons");
    }
}

#[test]
fn test_text_style_validation() {
    let thin = TextStyle {
        weight: 0.0,
        ..Default::default()
    };
    let flat = TextStyle {
        height: -5.0,
        ..Default::default()
    };
    let tiny = TextStyle {
        size: 0.0,
        ..Default::default()
    };
    for style in [thin, flat, tiny] {
        assert!(matches!(
            bridge().from_text("x", &style),
            Err(BridgeError::InvalidProfile { .. })
        ));
    }
}

#[test]
fn test_text_size_scales() {
    let style = TextStyle {
        size: 10.0,
        ..Default::default()
    };
    let solid = bridge().from_text("-", &style).unwrap();
    let (min, max) = solid.bounding_box().unwrap();

    assert_relative_eq!(min.x, 1.25, epsilon = 1e-6);
    assert_relative_eq!(max.x, 11.75, epsilon = 1e-6);
    assert_relative_eq!(max.z, 2.5, epsilon = 1e-9);
}
