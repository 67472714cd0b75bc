//! Integration tests for gridwire-mesh.

use std::collections::HashSet;

use gridwire_mesh::topology::{index_size_for_tag, TOPOLOGY_TABLE};
use gridwire_mesh::{
    compute_index_size, generate_mesh_from_parametrization, generate_rectangular_wireframe,
    generate_wireframe, rotate_mesh, set_rotation_angle, Animation, Canvas, CanvasBuffers,
    CanvasParameters, MeshType, RotationVector, Seam,
};
use gridwire_types::constants::MAX_INDEX_BUFFER_SIZE;
use gridwire_types::{GridwireError, PointId};

fn buffers_for(nx: u32, ny: u32) -> (Vec<f32>, Vec<u32>) {
    // One spare slot past the largest index region, to catch overruns.
    let points = (nx * ny) as usize;
    (vec![0.0; 3 * points], vec![u32::MAX; 6 * points + 1])
}

fn saddle(x: f32, y: f32) -> f32 {
    x * x - y * y
}

// ─── Canvas Tests ─────────────────────────────────────────────

#[test]
fn smallest_grid_counts() {
    let (mut mesh, mut indices) = buffers_for(2, 2);
    let canvas = Canvas::new(CanvasParameters::square(2, 2), &mut mesh, &mut indices);
    assert_eq!(canvas.number_of_points(), 4);
    assert_eq!(canvas.mesh_size(), 12);
    assert_eq!(canvas.index_size(), 8);
}

#[test]
fn reset_recomputes_counts() {
    let (mut mesh, mut indices) = buffers_for(8, 8);
    let mut canvas = Canvas::new(CanvasParameters::square(4, 4), &mut mesh, &mut indices);
    assert_eq!(canvas.number_of_points(), 16);

    canvas.reset(CanvasParameters::square(8, 3).with_mesh_type(MeshType::ToroidalSquareWireframe));
    assert_eq!(canvas.number_of_points(), 24);
    assert_eq!(canvas.mesh_size(), 72);
    assert_eq!(canvas.index_size(), 96);
    assert_eq!(canvas.mesh_capacity(), 3 * 64);
}

#[test]
fn reset_mesh_buffer_returns_previous_view() {
    let mut first = vec![1.0f32; 12];
    let mut second = vec![2.0f32; 12];
    let mut indices = vec![0u32; 8];
    let mut canvas = Canvas::new(CanvasParameters::square(2, 2), &mut first, &mut indices);
    let previous = canvas.reset_mesh_buffer(&mut second);
    assert_eq!(previous[0], 1.0);
    assert_eq!(canvas.vertices()[0], 2.0);
}

#[test]
fn compute_index_size_is_idempotent() {
    let (mut mesh, mut indices) = buffers_for(7, 5);
    let params = CanvasParameters::square(7, 5).with_mesh_type(MeshType::MobiusTriangleWireframe);
    let canvas = Canvas::new(params, &mut mesh, &mut indices);
    let a = compute_index_size(&canvas);
    let b = compute_index_size(&canvas);
    assert_eq!(a, b);
    assert_eq!(a, canvas.index_size());
}

#[test]
fn exports_cover_the_generated_regions() {
    let (mut mesh, mut indices) = buffers_for(3, 3);
    let mesh_addr = mesh.as_ptr() as usize;
    let canvas = Canvas::new(CanvasParameters::square(3, 3), &mut mesh, &mut indices);
    let vertex = canvas.vertex_export();
    assert_eq!(vertex.address, mesh_addr);
    assert_eq!(vertex.len, 27);
    assert_eq!(canvas.index_export().len, canvas.index_size());
}

// ─── Index Size Tests ─────────────────────────────────────────

#[test]
fn open_quad_size_formula() {
    for (nx, ny) in [(2, 2), (3, 7), (64, 64), (512, 2), (512, 512)] {
        let p = (nx * ny) as usize;
        let s = (nx + ny) as usize;
        assert_eq!(MeshType::SquareWireframe.index_size(nx, ny), 2 * (2 * p - s));
    }
}

#[test]
fn toroidal_quad_4x4() {
    assert_eq!(MeshType::ToroidalSquareWireframe.index_size(4, 4), 64);
}

#[test]
fn wrapped_sizes_share_formulas() {
    let (nx, ny) = (9, 6);
    let p = (nx * ny) as usize;
    for mesh_type in [
        MeshType::CylindricalSquareWireframe,
        MeshType::MobiusSquareWireframe,
    ] {
        assert_eq!(mesh_type.index_size(nx, ny), 2 * (2 * p - nx as usize));
    }
    for mesh_type in [
        MeshType::CylindricalTriangleWireframe,
        MeshType::MobiusTriangleWireframe,
    ] {
        assert_eq!(mesh_type.index_size(nx, ny), 2 * (3 * p - 2 * nx as usize));
    }
    for mesh_type in [
        MeshType::ToroidalSquareWireframe,
        MeshType::KleinSquareWireframe,
        MeshType::ProjectiveSquareWireframe,
    ] {
        assert_eq!(mesh_type.index_size(nx, ny), 4 * p);
    }
    for mesh_type in [
        MeshType::ToroidalTriangleWireframe,
        MeshType::KleinTriangleWireframe,
        MeshType::ProjectiveTriangleWireframe,
    ] {
        assert_eq!(mesh_type.index_size(nx, ny), 6 * p);
    }
}

#[test]
fn open_triangle_size_counts_every_diagonal() {
    // 2x2: four edges plus one diagonal.
    assert_eq!(MeshType::TriangleWireframe.index_size(2, 2), 10);
}

#[test]
fn empty_grid_sizes_to_zero() {
    for mesh_type in MeshType::ALL {
        assert_eq!(mesh_type.index_size(0, 8), 0);
        assert_eq!(mesh_type.index_size(8, 0), 0);
    }
}

#[test]
fn unknown_tag_sizes_to_zero() {
    assert_eq!(index_size_for_tag(4, 4, 12), 0);
    assert_eq!(index_size_for_tag(4, 4, 6), 64);
    assert!(matches!(
        MeshType::try_from(99),
        Err(GridwireError::UnknownTopology(99))
    ));
}

#[test]
fn sizes_of_degenerate_grids() {
    // [1x1, 1x5, 5x1] for each topology, in tag order.
    let expected: [[usize; 3]; 12] = [
        [0, 8, 8],
        [0, 8, 8],
        [2, 18, 10],
        [2, 26, 10],
        [2, 18, 10],
        [2, 26, 10],
        [4, 20, 20],
        [6, 30, 30],
        [4, 20, 20],
        [6, 30, 30],
        [4, 20, 20],
        [6, 30, 30],
    ];
    for (mesh_type, sizes) in MeshType::ALL.into_iter().zip(expected) {
        assert_eq!(mesh_type.index_size(1, 1), sizes[0], "{mesh_type} 1x1");
        assert_eq!(mesh_type.index_size(1, 5), sizes[1], "{mesh_type} 1x5");
        assert_eq!(mesh_type.index_size(5, 1), sizes[2], "{mesh_type} 5x1");
    }
}

#[test]
fn single_point_triangle_lattice_is_empty() {
    assert_eq!(MeshType::TriangleWireframe.index_size(1, 1), 0);
    assert_eq!(index_size_for_tag(1, 1, 1), 0);
}

#[test]
fn grids_past_capacity_size_to_zero() {
    for mesh_type in MeshType::ALL {
        assert_eq!(mesh_type.index_size(u32::MAX, u32::MAX), 0, "{mesh_type}");
        assert_eq!(mesh_type.index_size(513, 2), 0, "{mesh_type}");
        assert_eq!(mesh_type.index_size(2, 513), 0, "{mesh_type}");
        assert!(mesh_type.index_size(512, 512) <= MAX_INDEX_BUFFER_SIZE, "{mesh_type}");
    }
    for tag in 0..12 {
        assert_eq!(index_size_for_tag(u32::MAX, u32::MAX, tag), 0);
    }
}

#[test]
fn huge_canvas_is_rejected_without_panicking() {
    let mut mesh = vec![0.0f32; 12];
    let mut indices = vec![0u32; 8];
    let params = CanvasParameters::square(u32::MAX, u32::MAX)
        .with_mesh_type(MeshType::ToroidalTriangleWireframe);
    let mut canvas = Canvas::new(params, &mut mesh, &mut indices);
    assert_eq!(canvas.index_size(), 0);
    assert!(matches!(
        generate_wireframe(&mut canvas),
        Err(GridwireError::InvalidDimensions { .. })
    ));
    assert!(generate_mesh_from_parametrization(&mut canvas, saddle).is_err());
    assert!(canvas.validate().is_err());
}

#[test]
fn table_is_ordered_by_tag() {
    for (tag, entry) in TOPOLOGY_TABLE.iter().enumerate() {
        assert_eq!(entry.mesh_type.tag() as usize, tag);
        assert_eq!(MeshType::from_name(entry.name), Some(entry.mesh_type));
    }
}

#[test]
fn mesh_type_serializes_as_snake_case() {
    let json = serde_json::to_string(&MeshType::KleinTriangleWireframe).unwrap();
    assert_eq!(json, "\"klein_triangle_wireframe\"");
    let back: MeshType = serde_json::from_str("\"mobius_square_wireframe\"").unwrap();
    assert_eq!(back, MeshType::MobiusSquareWireframe);
}

// ─── Wireframe Tests ──────────────────────────────────────────

#[test]
fn rectangular_wireframe_2x2() {
    let (mut mesh, mut indices) = buffers_for(2, 2);
    let mut canvas = Canvas::new(CanvasParameters::square(2, 2), &mut mesh, &mut indices);
    generate_rectangular_wireframe(&mut canvas).unwrap();
    assert_eq!(canvas.indices(), &[0, 2, 0, 1, 1, 3, 2, 3]);
}

#[test]
fn rectangular_wireframe_fills_exactly_index_size() {
    for (nx, ny) in [(2, 2), (5, 3), (17, 31)] {
        let (mut mesh, mut indices) = buffers_for(nx, ny);
        let mut canvas = Canvas::new(CanvasParameters::square(nx, ny), &mut mesh, &mut indices);
        generate_rectangular_wireframe(&mut canvas).unwrap();
        let size = canvas.index_size();
        let points = canvas.number_of_points() as u32;
        assert!(canvas.indices().iter().all(|&i| i < points));
        drop(canvas);
        assert_ne!(indices[size - 1], u32::MAX);
        assert_eq!(indices[size], u32::MAX, "wrote past index_size");
    }
}

#[test]
fn every_topology_fills_exactly_index_size() {
    for mesh_type in MeshType::ALL {
        for (nx, ny) in [(1, 1), (1, 4), (4, 1), (2, 2), (3, 5), (8, 8)] {
            let (mut mesh, mut indices) = buffers_for(nx, ny);
            let params = CanvasParameters::square(nx, ny).with_mesh_type(mesh_type);
            let mut canvas = Canvas::new(params, &mut mesh, &mut indices);
            generate_wireframe(&mut canvas).unwrap();
            let size = canvas.index_size();
            assert!(canvas.validate().is_ok(), "{mesh_type} {nx}x{ny}");
            drop(canvas);
            assert!(
                indices[..size].iter().all(|&i| i != u32::MAX),
                "{mesh_type} {nx}x{ny} left gaps"
            );
            assert_eq!(indices[size], u32::MAX, "{mesh_type} {nx}x{ny} overran");
        }
    }
}

#[test]
fn segments_are_never_duplicated() {
    for mesh_type in MeshType::ALL {
        // Both twisted seams meet at the corners of the projective plane,
        // so its corner segments coincide.
        let lattice = mesh_type.lattice();
        if lattice.horizontal == Seam::Twisted && lattice.vertical == Seam::Twisted {
            continue;
        }
        let (nx, ny) = (6, 5);
        let (mut mesh, mut indices) = buffers_for(nx, ny);
        let params = CanvasParameters::square(nx, ny).with_mesh_type(mesh_type);
        let mut canvas = Canvas::new(params, &mut mesh, &mut indices);
        generate_wireframe(&mut canvas).unwrap();

        let mut seen = HashSet::new();
        for pair in canvas.indices().chunks_exact(2) {
            let key = (pair[0].min(pair[1]), pair[0].max(pair[1]));
            assert_ne!(pair[0], pair[1], "{mesh_type} has a degenerate segment");
            assert!(seen.insert(key), "{mesh_type} repeats segment {key:?}");
        }
    }
}

#[test]
fn closed_lattices_are_regular() {
    // Quad: every point touches 4 segments. Triangulated: 6.
    for mesh_type in MeshType::ALL {
        let lattice = mesh_type.lattice();
        if lattice.horizontal == Seam::Open || lattice.vertical == Seam::Open {
            continue;
        }
        let (nx, ny) = (5, 4);
        let (mut mesh, mut indices) = buffers_for(nx, ny);
        let params = CanvasParameters::square(nx, ny).with_mesh_type(mesh_type);
        let mut canvas = Canvas::new(params, &mut mesh, &mut indices);
        generate_wireframe(&mut canvas).unwrap();

        let mut degree = vec![0usize; (nx * ny) as usize];
        for &i in canvas.indices() {
            degree[i as usize] += 1;
        }
        let expected = canvas.index_size() / canvas.number_of_points();
        assert!(degree.iter().all(|&d| d == expected), "{mesh_type}: {degree:?}");
    }
}

#[test]
fn cylinder_wraps_right_edge_to_left() {
    let (nx, ny) = (4, 3);
    let (mut mesh, mut indices) = buffers_for(nx, ny);
    let params = CanvasParameters::square(nx, ny).with_mesh_type(MeshType::CylindricalSquareWireframe);
    let mut canvas = Canvas::new(params, &mut mesh, &mut indices);
    generate_wireframe(&mut canvas).unwrap();
    let pairs: Vec<(u32, u32)> = canvas.indices().chunks_exact(2).map(|p| (p[0], p[1])).collect();
    assert!(pairs.contains(&(3, 0)));
    assert!(pairs.contains(&(7, 4)));
    assert!(pairs.contains(&(11, 8)));
}

#[test]
fn mobius_seam_reverses_rows() {
    let (nx, ny) = (4, 3);
    let (mut mesh, mut indices) = buffers_for(nx, ny);
    let params = CanvasParameters::square(nx, ny).with_mesh_type(MeshType::MobiusSquareWireframe);
    let mut canvas = Canvas::new(params, &mut mesh, &mut indices);
    generate_wireframe(&mut canvas).unwrap();
    let pairs: Vec<(u32, u32)> = canvas.indices().chunks_exact(2).map(|p| (p[0], p[1])).collect();
    // (3, 0) -> (0, 2), (3, 2) -> (0, 0)
    assert!(pairs.contains(&(3, 8)));
    assert!(pairs.contains(&(11, 0)));
    assert!(pairs.contains(&(7, 4)));
}

#[test]
fn oversized_grid_is_rejected_without_writing() {
    let mut mesh = vec![0.0f32; 12];
    let mut indices = vec![7u32; 8];
    let mut canvas = Canvas::new(CanvasParameters::square(513, 2), &mut mesh, &mut indices);
    let err = generate_wireframe(&mut canvas).unwrap_err();
    assert!(matches!(err, GridwireError::InvalidDimensions { nx: 513, .. }));
    assert!(generate_rectangular_wireframe(&mut canvas).is_err());
    assert!(generate_mesh_from_parametrization(&mut canvas, saddle).is_err());
    drop(canvas);
    assert!(indices.iter().all(|&i| i == 7));
}

#[test]
fn short_index_buffer_is_rejected() {
    let mut mesh = vec![0.0f32; 48];
    let mut indices = vec![0u32; 10];
    let mut canvas = Canvas::new(CanvasParameters::square(4, 4), &mut mesh, &mut indices);
    let err = generate_wireframe(&mut canvas).unwrap_err();
    assert!(matches!(
        err,
        GridwireError::BufferTooSmall {
            required: 48,
            capacity: 10
        }
    ));
}

// ─── Parametrization Tests ────────────────────────────────────

#[test]
fn saddle_samples_3x3() {
    let (mut mesh, mut indices) = buffers_for(3, 3);
    let mut canvas = Canvas::new(CanvasParameters::square(3, 3), &mut mesh, &mut indices);
    generate_mesh_from_parametrization(&mut canvas, saddle).unwrap();

    let center = canvas.position(PointId::from_grid(1, 1, 3));
    assert_eq!(center.to_array(), [0.0, 0.0, 0.0]);

    let corner = canvas.position(PointId::from_grid(0, 0, 3));
    assert_eq!(corner.to_array(), [-1.0, -1.0, 0.0]);

    let far = canvas.position(PointId::from_grid(2, 0, 3));
    assert_eq!(far.to_array(), [1.0, -1.0, 0.0]);
}

#[test]
fn samples_span_the_full_extent() {
    let (mut mesh, mut indices) = buffers_for(5, 9);
    let params = CanvasParameters {
        nx_pts: 5,
        ny_pts: 9,
        width: 4.0,
        height: 8.0,
        x_start: 1.0,
        y_start: -2.0,
        mesh_type: MeshType::SquareWireframe,
    };
    let mut canvas = Canvas::new(params, &mut mesh, &mut indices);
    generate_mesh_from_parametrization(&mut canvas, |x, y| x + y).unwrap();
    let last = canvas.position(PointId::from_grid(4, 8, 5));
    assert!((last.x - 5.0).abs() < 1e-6);
    assert!((last.y - 6.0).abs() < 1e-6);
    assert!((last.z - 11.0).abs() < 1e-5);
}

#[test]
fn single_row_grid_is_invalid() {
    let (mut mesh, mut indices) = buffers_for(4, 1);
    let mut canvas = Canvas::new(CanvasParameters::square(4, 1), &mut mesh, &mut indices);
    let err = generate_mesh_from_parametrization(&mut canvas, saddle).unwrap_err();
    assert!(matches!(err, GridwireError::InvalidGrid(_)));
}

#[test]
fn short_vertex_buffer_is_rejected() {
    let mut mesh = vec![0.0f32; 11];
    let mut indices = vec![0u32; 8];
    let mut canvas = Canvas::new(CanvasParameters::square(2, 2), &mut mesh, &mut indices);
    let err = generate_mesh_from_parametrization(&mut canvas, saddle).unwrap_err();
    assert!(matches!(err, GridwireError::BufferTooSmall { required: 12, .. }));
}

// ─── Rotation Tests ───────────────────────────────────────────

#[test]
fn zero_angle_is_exact_identity() {
    let rotation = set_rotation_angle(0.0);
    assert_eq!(rotation, RotationVector::IDENTITY);
    assert_eq!(rotation.cos_angle, 1.0);
    assert_eq!(rotation.sin_angle, 0.0);
}

#[test]
fn small_angle_matches_trig() {
    for angle in [0.001f32, 0.01, 0.05, 0.1, -0.1] {
        let rotation = set_rotation_angle(angle);
        assert!((rotation.cos_angle - angle.cos()).abs() < 1e-6);
        assert!((rotation.sin_angle - angle.sin()).abs() < 1e-6);
    }
}

#[test]
fn quarter_turn_of_unit_x() {
    let rotation = RotationVector {
        cos_angle: 0.0,
        sin_angle: 1.0,
    };
    assert_eq!(rotation.apply(1.0, 0.0), (0.0, 1.0));
}

#[test]
fn rotation_leaves_z_untouched() {
    let (mut mesh, mut indices) = buffers_for(4, 4);
    let mut canvas = Canvas::new(CanvasParameters::square(4, 4), &mut mesh, &mut indices);
    generate_mesh_from_parametrization(&mut canvas, saddle).unwrap();
    let before: Vec<f32> = canvas.vertices().to_vec();

    rotate_mesh(&mut canvas, set_rotation_angle(0.05));

    for (a, b) in before.chunks_exact(3).zip(canvas.vertices().chunks_exact(3)) {
        assert_eq!(a[2], b[2]);
        let r0 = (a[0] * a[0] + a[1] * a[1]).sqrt();
        let r1 = (b[0] * b[0] + b[1] * b[1]).sqrt();
        assert!((r0 - r1).abs() < 1e-5);
    }
}

#[test]
fn rotate_then_unrotate_restores_mesh() {
    let (mut mesh, mut indices) = buffers_for(16, 16);
    let mut canvas = Canvas::new(CanvasParameters::square(16, 16), &mut mesh, &mut indices);
    generate_mesh_from_parametrization(&mut canvas, |_, _| 0.0).unwrap();
    let before: Vec<f32> = canvas.vertices().to_vec();

    for angle in [0.01f32, 0.05, 0.099] {
        rotate_mesh(&mut canvas, set_rotation_angle(angle));
        rotate_mesh(&mut canvas, set_rotation_angle(-angle));
        for (a, b) in before.iter().zip(canvas.vertices()) {
            assert!((a - b).abs() < 1e-3, "angle {angle}: {a} vs {b}");
        }
    }
}

#[test]
fn rotation_only_touches_the_point_region() {
    let mut mesh = vec![5.0f32; 30];
    let mut indices = vec![0u32; 8];
    let mut canvas = Canvas::new(CanvasParameters::square(2, 2), &mut mesh, &mut indices);
    rotate_mesh(&mut canvas, set_rotation_angle(0.1));
    drop(canvas);
    assert!(mesh[12..].iter().all(|&v| v == 5.0));
    assert_ne!(mesh[0], 5.0);
}

// ─── Buffers / Animation Tests ────────────────────────────────

#[test]
fn default_buffers_hold_the_largest_grid() {
    let mut buffers = CanvasBuffers::new();
    let params = CanvasParameters::square(512, 512).with_mesh_type(MeshType::ProjectiveTriangleWireframe);
    let mut canvas = buffers.init_canvas(params);
    assert_eq!(canvas.index_size(), canvas.index_capacity());
    assert_eq!(canvas.mesh_size(), canvas.mesh_capacity());
    generate_wireframe(&mut canvas).unwrap();
}

#[test]
fn make_wireframe_builds_both_buffers() {
    let mut buffers = CanvasBuffers::with_capacity(3 * 25, 6 * 25);
    let params = CanvasParameters::square(5, 5).with_mesh_type(MeshType::TriangleWireframe);
    let canvas = buffers.make_wireframe(params, saddle).unwrap();
    assert!(canvas.validate().is_ok());
    assert_eq!(canvas.segment_count(), 3 * 25 - 2 * 10 + 1);
}

#[test]
fn animation_counts_frames_and_spins() {
    let mut buffers = CanvasBuffers::with_capacity(3 * 9, 6 * 9);
    let canvas = buffers.make_wireframe(CanvasParameters::square(3, 3), saddle).unwrap();
    let mut animation = Animation::new(canvas);
    assert_eq!(animation.rotation(), RotationVector::IDENTITY);

    animation.set_rotation_angle(0.02);
    animation.rotate();
    assert_eq!(animation.rotate(), 2);
    assert_eq!(animation.frame(), 2);

    let corner = animation.canvas().position(PointId(0));
    assert!(corner.x > -1.0);
    assert!(corner.y < -1.0);
}

#[test]
fn projective_corner_is_shared_by_both_seams() {
    let (nx, ny) = (4, 3);
    let (mut mesh, mut indices) = buffers_for(nx, ny);
    let params = CanvasParameters::square(nx, ny).with_mesh_type(MeshType::ProjectiveSquareWireframe);
    let mut canvas = Canvas::new(params, &mut mesh, &mut indices);
    generate_wireframe(&mut canvas).unwrap();
    let corner = canvas
        .indices()
        .chunks_exact(2)
        .filter(|p| (p[0], p[1]) == (11, 0))
        .count();
    assert_eq!(corner, 2);
}
