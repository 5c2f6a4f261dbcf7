//! Spatial transform of the entity owning a fan.
//!
//! Fans are built in a local frame (+Z forward, +X right). Height queries are
//! issued in world space, so each vertex goes through `local_to_world_xz`
//! before being sampled. Only yaw matters; the fan lies on the ground plane.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// World position and heading of the fan owner.
///
/// # Examples
/// ```
/// use glam::{DVec2, DVec3};
/// use fov_mesh::FovTransform;
///
/// let transform = FovTransform::new(DVec3::new(10.0, 0.0, 5.0), 0.0);
/// let world = transform.local_to_world_xz(DVec3::new(1.0, 0.0, 2.0));
/// assert_eq!(world, DVec2::new(11.0, 7.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FovTransform {
    /// World-space position of the owner.
    pub position: DVec3,
    /// Yaw in radians about +Y; 0 faces +Z, π/2 faces +X.
    pub heading: f64,
}

impl FovTransform {
    /// Creates a transform from a position and a heading angle.
    pub fn new(position: DVec3, heading: f64) -> Self {
        Self { position, heading }
    }

    /// Creates a transform from a position and a forward vector.
    ///
    /// Only the ground-plane part of `forward` is used; a vertical or zero
    /// vector yields heading 0.
    ///
    /// # Examples
    /// ```
    /// use glam::DVec3;
    /// use fov_mesh::FovTransform;
    ///
    /// let transform = FovTransform::from_forward(DVec3::ZERO, DVec3::X);
    /// assert!((transform.heading - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    /// ```
    pub fn from_forward(position: DVec3, forward: DVec3) -> Self {
        let heading = if forward.x == 0.0 && forward.z == 0.0 {
            0.0
        } else {
            forward.x.atan2(forward.z)
        };
        Self { position, heading }
    }

    /// World ground-plane direction of local +Z.
    #[inline]
    pub fn forward_xz(&self) -> DVec2 {
        let (sin, cos) = self.heading.sin_cos();
        DVec2::new(sin, cos)
    }

    /// World ground-plane direction of local +X.
    #[inline]
    pub fn right_xz(&self) -> DVec2 {
        let (sin, cos) = self.heading.sin_cos();
        DVec2::new(cos, -sin)
    }

    /// Maps a local vertex to its world XZ position.
    #[inline]
    pub fn local_to_world_xz(&self, local: DVec3) -> DVec2 {
        DVec2::new(self.position.x, self.position.z)
            + self.right_xz() * local.x
            + self.forward_xz() * local.z
    }

    /// Maps a world XZ position back to the local ground plane `(x, z)`.
    #[inline]
    pub fn world_to_local_xz(&self, world: DVec2) -> DVec2 {
        let offset = world - DVec2::new(self.position.x, self.position.z);
        DVec2::new(offset.dot(self.right_xz()), offset.dot(self.forward_xz()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn identity_keeps_local_coordinates() {
        let transform = FovTransform::default();
        let world = transform.local_to_world_xz(DVec3::new(-2.0, 9.0, 4.0));
        assert_eq!(world, DVec2::new(-2.0, 4.0));
    }

    #[test]
    fn quarter_turn_maps_forward_to_x() {
        let transform = FovTransform::new(DVec3::ZERO, FRAC_PI_2);
        let world = transform.local_to_world_xz(DVec3::new(0.0, 0.0, 3.0));
        assert_relative_eq!(world.x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(world.y, 0.0, epsilon = 1e-12);

        let right = transform.local_to_world_xz(DVec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(right.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(right.y, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn translation_applies_after_rotation() {
        let transform = FovTransform::new(DVec3::new(5.0, 2.0, -1.0), PI);
        let world = transform.local_to_world_xz(DVec3::new(0.0, 0.0, 2.0));
        assert_relative_eq!(world.x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(world.y, -3.0, epsilon = 1e-12);
    }

    #[test]
    fn world_to_local_inverts_local_to_world() {
        let transform = FovTransform::new(DVec3::new(3.0, 0.0, 8.0), 0.7);
        let local = DVec3::new(-1.5, 0.0, 6.0);
        let back = transform.world_to_local_xz(transform.local_to_world_xz(local));
        assert_relative_eq!(back.x, local.x, epsilon = 1e-12);
        assert_relative_eq!(back.y, local.z, epsilon = 1e-12);
    }

    #[test]
    fn from_forward_ignores_vertical_component() {
        let transform = FovTransform::from_forward(DVec3::ZERO, DVec3::new(0.0, 5.0, -2.0));
        assert_relative_eq!(transform.heading.abs(), PI, epsilon = 1e-12);
        assert_eq!(FovTransform::from_forward(DVec3::ZERO, DVec3::Y).heading, 0.0);
    }
}
