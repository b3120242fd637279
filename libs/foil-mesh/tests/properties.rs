//! Property tests for the profile loader, lofter, normal synthesis and hub.

use approx::assert_relative_eq;
use config::constants::UNIT_LENGTH_TOLERANCE;
use foil_mesh::{create_hub, loft, HubParams, LoftParams, MeshError, Profile, StationParams};
use glam::{DVec2, DVec3};
use proptest::prelude::*;

fn profile_text(count: usize, coords: &[(f64, f64)]) -> String {
    let mut text = format!("{count}\n");
    for (x, y) in coords {
        text.push_str(&format!("{x}\t{y}\n"));
    }
    text
}

/// Declared count and at least that many coordinate lines.
fn profile_file() -> impl Strategy<Value = (usize, Vec<(f64, f64)>)> {
    (1usize..8, 0usize..5).prop_flat_map(|(count, extra)| {
        (
            Just(count),
            prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), count + extra),
        )
    })
}

/// Profiles whose consecutive points are well separated along X.
fn loftable_profile() -> impl Strategy<Value = Profile> {
    prop::collection::vec((0.1f64..1.0, -1.0f64..1.0), 2..12).prop_map(|steps| {
        let mut x = 0.0;
        let points = steps
            .into_iter()
            .map(|(dx, y)| {
                x += dx;
                DVec2::new(x, y)
            })
            .collect();
        Profile::new(points)
    })
}

/// Stations with positive scale and strictly increasing Z.
fn stations() -> impl Strategy<Value = LoftParams> {
    prop::collection::vec((0.1f64..3.0, 0.1f64..2.0), 1..6).prop_map(|raw| {
        let mut z = 0.0;
        let stations = raw
            .into_iter()
            .map(|(scale, dz)| {
                z += dz;
                StationParams::new(scale, z)
            })
            .collect();
        LoftParams {
            base_z: 0.0,
            base_color: None,
            stations,
        }
    })
}

proptest! {
    #[test]
    fn first_point_is_origin((count, coords) in profile_file()) {
        let profile = Profile::parse(&profile_text(count, &coords)).unwrap();
        prop_assert_eq!(profile.points()[0], DVec2::ZERO);
    }

    #[test]
    fn declared_count_caps_points((count, coords) in profile_file()) {
        let profile = Profile::parse(&profile_text(count, &coords)).unwrap();
        prop_assert_eq!(profile.len(), count);

        let origin = DVec2::new(coords[0].0, coords[0].1);
        for (point, (x, y)) in profile.points().iter().zip(&coords) {
            prop_assert_eq!(*point, DVec2::new(*x, *y) - origin);
        }
    }

    #[test]
    fn second_header_is_rejected(first in "[a-z0-9]{1,6}", second in "[a-z0-9]{1,6}") {
        let text = format!("{first}\n0\t0\n{second}\n1\t1\n");
        let is_format = matches!(Profile::parse(&text), Err(MeshError::Format { .. }));
        prop_assert!(is_format);
    }

    #[test]
    fn numeric_second_header_reports_redeclared(first in 1u32..1000, second in any::<u32>()) {
        let text = format!("{first}\n{second}\n");
        let err = Profile::parse(&text).unwrap_err();
        prop_assert_eq!(err.format_message(), Some("vertex count redeclared"));
    }

    #[test]
    fn loft_indices_in_bounds(profile in loftable_profile(), params in stations()) {
        let mesh = loft(&profile, &params).unwrap();
        let count = mesh.vertex_count() as u32;
        prop_assert!(mesh.indices_u32().iter().all(|&i| i < count));
        prop_assert_eq!(mesh.indices_u32().len() % 3, 0);
    }

    #[test]
    fn loft_band_triangle_count(profile in loftable_profile(), params in stations()) {
        let mesh = loft(&profile, &params).unwrap();
        let k = profile.len();
        let s = params.station_count();
        prop_assert_eq!(mesh.triangle_count(), (s - 1) * 2 * (k - 1));
        prop_assert_eq!(mesh.vertex_count(), s * k);
    }

    #[test]
    fn normals_are_unit_length(profile in loftable_profile(), params in stations()) {
        let mut mesh = loft(&profile, &params).unwrap();
        mesh.compute_normals();

        let mut referenced = vec![false; mesh.vertex_count()];
        for &i in mesh.triangles().iter().flatten() {
            referenced[i as usize] = true;
        }
        for (v, referenced) in mesh.vertices().iter().zip(referenced) {
            if referenced {
                prop_assert!((v.normal.length() - 1.0).abs() < UNIT_LENGTH_TOLERANCE);
            } else {
                prop_assert_eq!(v.normal, DVec3::ZERO);
            }
        }
    }

    #[test]
    fn hub_wraps_around(segments in 3u32..200) {
        let params = HubParams { segments, ..HubParams::default() };
        let mesh = create_hub(&params).unwrap();
        let t = mesh.triangle_count();
        let last_quad = &mesh.triangles()[t - 2..];
        prop_assert!(last_quad.iter().all(|tri| tri.contains(&0)));
        prop_assert!(last_quad[1].contains(&1));
        prop_assert!(mesh.indices_u32().iter().all(|&i| i < 2 * segments));
    }
}

#[test]
fn three_point_profile_scenario() {
    let profile = Profile::parse("3\n0.0\t0.0\n1.0\t0.0\n0.5\t1.0\n").unwrap();
    assert_eq!(
        profile.points(),
        &[DVec2::ZERO, DVec2::X, DVec2::new(0.5, 1.0)]
    );

    let params = LoftParams {
        base_z: 0.0,
        base_color: None,
        stations: vec![StationParams::new(1.0, 1.0)],
    };
    let mut mesh = loft(&profile, &params).unwrap();
    assert_eq!(mesh.vertex_count(), 6);
    assert_eq!(mesh.triangle_count(), 4);

    let indices = mesh.indices_u32();
    assert_eq!(indices.len(), 12);
    assert!(indices.iter().all(|&i| i < 6));

    mesh.compute_normals();
    for v in mesh.vertices() {
        assert_relative_eq!(v.normal.length(), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn load_from_file() {
    let path = std::env::temp_dir().join(format!("foil-mesh-props-{}.txt", std::process::id()));
    std::fs::write(&path, "2\n3.0\t4.0\n5.0\t4.0\n7.0\t7.0\n").unwrap();

    let profile = Profile::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(profile.points(), &[DVec2::ZERO, DVec2::new(2.0, 0.0)]);
    assert_eq!(profile.declared_count(), Some(2));
}

#[test]
fn missing_file_is_io_error() {
    let result = Profile::load("/nonexistent/foil-mesh/profile.txt");
    assert!(matches!(result, Err(MeshError::Io { .. })));
}
