use fov_mesh::{build, compute_plan, IndexFormat, ShapeParameters};

fn reference() -> ShapeParameters {
    ShapeParameters::new(10.0, 0.3491, 4.0, 0.2, 1)
}

#[test]
fn reference_fan_has_expected_counts() {
    let mesh = build(&reference());
    let plan = mesh.plan();

    assert_eq!(plan.border_quad_count, 10);
    assert_eq!(plan.arc_quad_count, 12);
    assert_eq!(plan.front_quad_count, 4);
    assert_eq!(mesh.vertex_count(), 98);
    assert_eq!(mesh.triangle_count(), 96);
    assert_eq!(mesh.indices().len(), 288);
    assert_eq!(mesh.index_format(), IndexFormat::U16);
}

#[test]
fn free_plan_matches_built_mesh() {
    let plan = compute_plan(10.0, 0.3491, 4.0, 0.2, 1);
    assert_eq!(&plan, build(&reference()).plan());
}

#[test]
fn plan_summary_lists_counts() {
    let summary = compute_plan(10.0, 0.3491, 4.0, 0.2, 1).to_string();
    assert!(summary.contains("vertices = 98"));
    assert!(summary.contains("triangles = 96"));
}

#[test]
fn every_index_addresses_a_vertex() {
    for resolution in 1..=3 {
        let params = ShapeParameters::new(7.3, 0.6, 2.5, 0.3, resolution);
        let mesh = build(&params);
        assert!(mesh.indices().iter().all(|i| (i as usize) < mesh.vertex_count()));
    }
}

#[test]
fn strip_winding_alternates() {
    let mesh = build(&reference());
    for t in 0..mesh.triangle_count() {
        let v = t as u32;
        let expected = if t % 2 == 0 {
            [v, v + 2, v + 1]
        } else {
            [v, v + 1, v + 2]
        };
        assert_eq!(mesh.triangle(t), Some(expected));
    }
}

#[test]
fn fan_is_symmetric_about_forward_axis() {
    let mesh = build(&ShapeParameters::new(25.0, 0.1, 9.0, 0.4, 2));
    let plan = mesh.plan();
    for k in 0..plan.side_vertex_count() {
        let left = mesh.vertices()[k];
        let right = mesh.vertices()[plan.mirrored_index(k).unwrap()];
        assert!((left.x + right.x).abs() < 1e-5, "vertex {k}");
        assert!((left.z - right.z).abs() < 1e-5, "vertex {k}");
    }
}

#[test]
fn rebuilding_is_bit_identical() {
    let params = reference();
    assert_eq!(build(&params), build(&params));
}

#[test]
fn zero_width_and_right_angle_still_build() {
    let narrow = build(&ShapeParameters::new(10.0, 0.3491, 0.0, 0.2, 1));
    assert_eq!(narrow.plan().front_quad_count, 1);

    let square = build(&ShapeParameters::new(10.0, std::f64::consts::FRAC_PI_2, 4.0, 0.2, 1));
    assert_eq!(square.plan().arc_vertex_count, 0);
    assert_eq!(square.triangle_count(), square.vertex_count() - 2);
}

#[test]
fn flat_fan_bounds() {
    let (min, max) = build(&reference()).bounding_box();
    assert_eq!(min.y, 0.0);
    assert_eq!(max.y, 0.0);
    assert!((max.z - 10.0).abs() < 1e-9);
    assert!((min.x + max.x).abs() < 1e-5);
}

#[test]
fn infinite_inputs_clamp_instead_of_failing() {
    let plan = compute_plan(10.0, 0.3, f64::INFINITY, 0.2, 1);
    assert!(plan.front_quad_count >= 1);

    let mesh = build(&ShapeParameters::new(f64::INFINITY, 0.3, 4.0, 0.2, 1));
    assert_eq!(mesh.indices().len(), 3 * (mesh.vertex_count() - 2));
}
