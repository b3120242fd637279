use super::*;
use approx::assert_relative_eq;

fn vertices(positions: &[DVec3]) -> Vec<Vertex> {
    positions.iter().copied().map(Vertex::new).collect()
}

#[test]
fn test_face_normal_operand_order() {
    // (c - b) x (a - b) for a counter-clockwise triangle in the XY plane
    let n = face_normal(DVec3::ZERO, DVec3::X, DVec3::Y).unwrap();
    assert_eq!(n, DVec3::Z);

    // Reversed winding flips the normal
    let n = face_normal(DVec3::ZERO, DVec3::Y, DVec3::X).unwrap();
    assert_eq!(n, -DVec3::Z);
}

#[test]
fn test_face_normal_degenerate() {
    assert!(face_normal(DVec3::ZERO, DVec3::X, DVec3::X * 2.0).is_none());
    assert!(face_normal(DVec3::ZERO, DVec3::ZERO, DVec3::Y).is_none());
}

#[test]
fn test_single_triangle() {
    let mut verts = vertices(&[DVec3::ZERO, DVec3::X, DVec3::Y]);
    compute_normals(&mut verts, &[[0, 1, 2]]);
    for v in &verts {
        assert_eq!(v.normal, DVec3::Z);
    }
}

#[test]
fn test_unreferenced_vertex_stays_zero() {
    let mut verts = vertices(&[DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::ONE]);
    compute_normals(&mut verts, &[[0, 1, 2]]);
    assert_eq!(verts[3].normal, DVec3::ZERO);
}

#[test]
fn test_coplanar_quad_shares_normal() {
    let mut verts = vertices(&[
        DVec3::ZERO,
        DVec3::X,
        DVec3::new(1.0, 1.0, 0.0),
        DVec3::Y,
    ]);
    compute_normals(&mut verts, &[[0, 1, 2], [0, 2, 3]]);
    for v in &verts {
        assert_relative_eq!(v.normal.z, 1.0, epsilon = 1e-12);
        assert_relative_eq!(v.normal.length(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_two_faces_average() {
    // Edge along X shared by a floor face (+Z) and a wall face (+Y)
    let mut verts = vertices(&[
        DVec3::ZERO,
        DVec3::X,
        DVec3::Y,
        DVec3::Z,
    ]);
    let floor = [0, 1, 2];
    let wall = [1, 0, 3];
    compute_normals(&mut verts, &[floor, wall]);

    let expected = (DVec3::Z + DVec3::Y).normalize();
    assert_relative_eq!(verts[0].normal.x, expected.x, epsilon = 1e-12);
    assert_relative_eq!(verts[0].normal.y, expected.y, epsilon = 1e-12);
    assert_relative_eq!(verts[0].normal.z, expected.z, epsilon = 1e-12);
    assert_eq!(verts[2].normal, DVec3::Z);
    assert_eq!(verts[3].normal, DVec3::Y);
}

#[test]
fn test_running_average_matches_step_sequence() {
    // Fan of three faces around vertex 0 with distinct orientations
    let positions = [
        DVec3::ZERO,
        DVec3::X,
        DVec3::Y,
        DVec3::Z,
        DVec3::new(-1.0, 0.5, 0.25),
    ];
    let triangles = [[0, 1, 2], [0, 3, 1], [0, 2, 4]];
    let mut verts = vertices(&positions);
    compute_normals(&mut verts, &triangles);

    let faces: Vec<DVec3> = triangles
        .iter()
        .map(|t| {
            face_normal(
                positions[t[0] as usize],
                positions[t[1] as usize],
                positions[t[2] as usize],
            )
            .unwrap()
        })
        .collect();
    let mut expected = faces[0];
    expected = (expected * (1.0 - 1.0 / 2.0) + faces[1] * (1.0 / 2.0)).normalize();
    expected = (expected * (1.0 - 1.0 / 3.0) + faces[2] * (1.0 / 3.0)).normalize();

    assert_eq!(verts[0].normal, expected);
}

#[test]
fn test_degenerate_face_is_skipped() {
    let mut verts = vertices(&[DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::X * 2.0]);
    compute_normals(&mut verts, &[[0, 1, 2], [0, 1, 3]]);
    assert_eq!(verts[0].normal, DVec3::Z);
    assert_eq!(verts[1].normal, DVec3::Z);
    assert_eq!(verts[3].normal, DVec3::ZERO);
}

#[test]
fn test_opposing_faces_keep_previous_normal() {
    let mut verts = vertices(&[DVec3::ZERO, DVec3::X, DVec3::Y]);
    compute_normals(&mut verts, &[[0, 1, 2], [0, 2, 1]]);
    for v in &verts {
        assert_eq!(v.normal, DVec3::Z);
    }
}

#[test]
fn test_recompute_is_stable() {
    let mut verts = vertices(&[DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z]);
    let triangles = [[0, 1, 2], [1, 0, 3]];
    compute_normals(&mut verts, &triangles);
    let first: Vec<DVec3> = verts.iter().map(|v| v.normal).collect();
    compute_normals(&mut verts, &triangles);
    let second: Vec<DVec3> = verts.iter().map(|v| v.normal).collect();
    assert_eq!(first, second);
}

#[test]
#[should_panic]
fn test_out_of_range_index_panics() {
    let mut verts = vertices(&[DVec3::ZERO, DVec3::X, DVec3::Y]);
    compute_normals(&mut verts, &[[0, 1, 3]]);
}
