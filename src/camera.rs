use crate::constants::{CAMERA_FAR, CAMERA_NEAR, CAMERA_Z};
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

/// Projection × view for the fixed look-at camera on +Z.
///
/// `fov_degrees` is not clamped: values past 180° go through the tangent's
/// 360° period (750° projects like 30°), which is where the warped look comes
/// from.
pub fn view_projection(fov_degrees: f32, aspect: f32) -> Mat4 {
    let proj = Mat4::perspective_rh(
        fov_degrees.to_radians(),
        aspect.max(1e-6),
        CAMERA_NEAR,
        CAMERA_FAR,
    );
    let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, CAMERA_Z), Vec3::ZERO, Vec3::Y);
    proj * view
}

/// Uniform scale, then rotation about x then y (XYZ Euler).
pub fn model(scale: f32, rotation: Vec2) -> Mat4 {
    Mat4::from_scale_rotation_translation(
        Vec3::splat(scale),
        Quat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, 0.0),
        Vec3::ZERO,
    )
}
