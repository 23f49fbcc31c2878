use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Perspective camera looking at the origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub aspect: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::splat(2.0),
            target: Vec3::ZERO,
            up: Vec3::Z,
            fov_y: 45f32.to_radians(),
            aspect: 16.0 / 9.0,
            z_near: 0.1,
            z_far: 10.0,
        }
    }
}

impl Camera {
    /// Projection with a `[0, 1]` depth range.
    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.z_near, self.z_far)
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Model spin speed: a quarter turn per second.
pub const SPIN_RADIANS_PER_SEC: f32 = std::f32::consts::FRAC_PI_2;

/// Model matrix after `total_secs` of spinning about +Z.
pub fn spin_model(total_secs: f32) -> Mat4 {
    Mat4::from_rotation_z(total_secs * SPIN_RADIANS_PER_SEC)
}

/// Uniform block shared with the vertex shader (`Transforms` in WGSL).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Transforms {
    pub proj: Mat4,
    pub view: Mat4,
    pub model: Mat4,
}

impl Transforms {
    pub fn new(camera: &Camera, model: Mat4) -> Self {
        Self {
            proj: camera.projection(),
            view: camera.view(),
            model,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn spin_is_a_quarter_turn_per_second() {
        let m = spin_model(1.0);
        assert!(close(m.transform_point3(Vec3::X), Vec3::Y));
        assert!(close(m.transform_point3(Vec3::Z), Vec3::Z));
    }

    #[test]
    fn spin_starts_at_identity() {
        assert!(spin_model(0.0).abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn view_puts_origin_in_front_of_camera() {
        let camera = Camera::default();
        let origin = camera.view().transform_point3(Vec3::ZERO);
        // Right-handed view space looks down -Z.
        assert!(origin.z < 0.0);
        assert!((origin.length() - 12f32.sqrt()).abs() < 1e-5);
    }

    #[test]
    fn projection_maps_near_and_far_to_unit_depth() {
        let camera = Camera::default();
        let proj = camera.projection();
        let near = proj.project_point3(Vec3::new(0.0, 0.0, -camera.z_near));
        let far = proj.project_point3(Vec3::new(0.0, 0.0, -camera.z_far));
        assert!(near.z.abs() < 1e-5);
        assert!((far.z - 1.0).abs() < 1e-5);
    }

    #[test]
    fn uniform_block_is_three_matrices() {
        assert_eq!(std::mem::size_of::<Transforms>(), 3 * 64);
    }
}
