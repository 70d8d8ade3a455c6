use glam::{EulerRot, Mat3, Mat4, Quat, Vec3};

/// Rotation from XYZ Euler angles in radians
pub fn euler_quat(rotation: Vec3) -> Quat {
    Quat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z)
}

pub fn compose(translation: Vec3, rotation: Quat, scale: Vec3) -> Mat4 {
    Mat4::from_scale_rotation_translation(scale, rotation, translation)
}

/// Inverse-transpose of the upper 3x3, padded into a Mat4 for upload.
/// Degenerate (zero scale) matrices fall back to the plain rotation part.
pub fn normal_matrix(model: &Mat4) -> Mat4 {
    let upper = Mat3::from_mat4(*model);
    let det = upper.determinant();
    let normal = if det.abs() > f32::EPSILON {
        upper.inverse().transpose()
    } else {
        upper
    };
    Mat4::from_mat3(normal)
}

/// Yaw that turns +Z toward `direction` on the XZ plane
pub fn yaw_towards(direction: Vec3) -> f32 {
    direction.x.atan2(direction.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_matrix_of_uniform_scale_is_rotation_direction() {
        let model = compose(Vec3::ZERO, Quat::IDENTITY, Vec3::splat(2.0));
        let n = normal_matrix(&model).transform_vector3(Vec3::Y).normalize();
        assert!((n - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn normal_matrix_handles_zero_scale() {
        let model = compose(Vec3::ONE, Quat::IDENTITY, Vec3::ZERO);
        let n = normal_matrix(&model);
        assert!(n.is_finite());
    }

    #[test]
    fn yaw_towards_axes() {
        assert!(yaw_towards(Vec3::Z).abs() < 1e-6);
        assert!((yaw_towards(Vec3::X) - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }
}
