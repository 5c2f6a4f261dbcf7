use fov_mesh::{
    BuilderConfig, DownwardRaycast, FieldOfView, FovTransform, IndexFormat, MeshBuilder,
    NoTerrain, RaycastHeightQuery, ShapeParameters,
};
use glam::{DVec2, DVec3};

/// Ground rising one unit per ten along world +X, on the terrain layer only.
struct Ramp;

impl DownwardRaycast for Ramp {
    fn cast_down(&self, origin: DVec3, max_distance: f64, layer_mask: u32) -> Option<f64> {
        if layer_mask & (1 << 8) == 0 {
            return None;
        }
        let ground = origin.x * 0.1;
        let travel = origin.y - ground;
        (travel >= 0.0 && travel <= max_distance).then_some(ground)
    }
}

#[test]
fn raycast_terrain_lifts_fan_in_world_space() {
    let transform = FovTransform::new(DVec3::new(20.0, 0.0, 0.0), 0.0);
    let builder = MeshBuilder::new().with_transform(transform);
    let mesh = builder.build(&ShapeParameters::default(), &RaycastHeightQuery::new(Ramp));

    for v in mesh.vertices() {
        let expected = (20.0 + v.x) * 0.1 + 0.5;
        assert!((v.y - expected).abs() < 1e-9);
    }
}

#[test]
fn no_terrain_keeps_heights_at_zero() {
    let mesh = MeshBuilder::new().build(&ShapeParameters::default(), &NoTerrain);
    assert!(mesh.vertices().iter().all(|v| v.y == 0.0));
}

#[test]
fn terrain_out_of_ray_reach_is_a_miss() {
    // Ground far below the ray origin at this position
    let transform = FovTransform::new(DVec3::new(-1000.0, 0.0, 0.0), 0.0);
    let mesh = MeshBuilder::new()
        .with_transform(transform)
        .build(&ShapeParameters::default(), &RaycastHeightQuery::new(Ramp));
    assert!(mesh.vertices().iter().all(|v| v.y == 0.0));
}

#[test]
fn parallel_and_sequential_height_passes_agree() {
    let params = ShapeParameters::new(40.0, 0.25, 16.0, 0.2, 3);
    let query = RaycastHeightQuery::new(Ramp);
    let transform = FovTransform::new(DVec3::new(3.0, 0.0, -7.0), 0.4);

    let parallel = MeshBuilder::new()
        .with_transform(transform)
        .with_config(BuilderConfig::new(0.5, 0).unwrap());
    let sequential = parallel.with_config(BuilderConfig::default().sequential());

    assert_eq!(parallel.build(&params, &query), sequential.build(&params, &query));
}

#[test]
fn large_fan_switches_to_wide_indices() {
    let params = ShapeParameters::new(1000.0, 0.0, 1000.0, 0.2, 4);
    let mesh = MeshBuilder::new().build(&params, &NoTerrain);

    assert!(mesh.vertex_count() * 2 >= 65_536);
    assert_eq!(mesh.index_format(), IndexFormat::U32);
    assert!(mesh.indices_u16().is_err());
    assert_eq!(mesh.indices_u32().len(), 3 * (mesh.vertex_count() - 2));
    assert_eq!(mesh.indices_u32().last().copied(), Some(mesh.vertex_count() as u32 - 1));
}

#[test]
fn field_of_view_rebuilds_after_width_change() {
    let mut fov = FieldOfView::new(ShapeParameters::default());
    let before = fov.rebuild(&NoTerrain);

    fov.set_width(10.0);
    let after = fov.rebuild(&NoTerrain);

    assert!(after.vertex_count() > before.vertex_count());
    assert!(fov.contains_local(DVec2::new(4.5, 1.0)));
}
