use nalgebra as na;
use crate::types::scalar::TransformScalar;

/// Create a rotation about the X axis as a homogeneous 4x4 transform
pub fn rotation_x<T: TransformScalar>(angle: T) -> na::Matrix4<T> {
    let c = angle.cos();
    let s = angle.sin();

    let mut rot = na::Matrix4::identity();
    rot[(1, 1)] = c.clone();
    rot[(1, 2)] = -s.clone();
    rot[(2, 1)] = s;
    rot[(2, 2)] = c;
    rot
}

/// Create a rotation about the Y axis as a homogeneous 4x4 transform
pub fn rotation_y<T: TransformScalar>(angle: T) -> na::Matrix4<T> {
    let c = angle.cos();
    let s = angle.sin();

    let mut rot = na::Matrix4::identity();
    rot[(0, 0)] = c.clone();
    rot[(0, 2)] = s.clone();
    rot[(2, 0)] = -s;
    rot[(2, 2)] = c;
    rot
}

/// Create a rotation about the Z axis as a homogeneous 4x4 transform
pub fn rotation_z<T: TransformScalar>(angle: T) -> na::Matrix4<T> {
    let c = angle.cos();
    let s = angle.sin();

    let mut rot = na::Matrix4::identity();
    rot[(0, 0)] = c.clone();
    rot[(0, 1)] = -s.clone();
    rot[(1, 0)] = s;
    rot[(1, 1)] = c;
    rot
}

/// Create a pure translation as a homogeneous 4x4 transform
pub fn translation<T: TransformScalar>(offset: na::Vector3<T>) -> na::Matrix4<T> {
    let mut mat = na::Matrix4::identity();
    mat[(0, 3)] = offset.x.clone();
    mat[(1, 3)] = offset.y.clone();
    mat[(2, 3)] = offset.z.clone();
    mat
}

/// Apply a transformation to a point
pub fn transform_point<T: TransformScalar>(
    transform: &na::Matrix4<T>,
    point: &na::Point3<T>,
) -> na::Point3<T> {
    let homogeneous = na::Vector4::new(
        point.x.clone(),
        point.y.clone(),
        point.z.clone(),
        T::one(),
    );
    let transformed = transform * homogeneous;
    na::Point3::new(
        transformed.x.clone(),
        transformed.y.clone(),
        transformed.z.clone(),
    )
}

/// Translation column of a homogeneous transform
pub fn translation_part<T: TransformScalar>(transform: &na::Matrix4<T>) -> na::Point3<T> {
    na::Point3::new(
        transform[(0, 3)].clone(),
        transform[(1, 3)].clone(),
        transform[(2, 3)].clone(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbolic::{cos, sin, symbol, Expr};
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn assert_matrix_eq(a: &na::Matrix4<f64>, b: &na::Matrix4<f64>) {
        for row in 0..4 {
            for col in 0..4 {
                assert_relative_eq!(a[(row, col)], b[(row, col)], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_zero_angle_rotations_are_identity() {
        let identity = na::Matrix4::<f64>::identity();
        assert_eq!(rotation_x(0.0), identity);
        assert_eq!(rotation_y(0.0), identity);
        assert_eq!(rotation_z(0.0), identity);
    }

    #[test]
    fn test_quarter_turn_maps_axes() {
        // Each rotation carries one axis onto the next, right-handed
        let x = na::Point3::new(1.0, 0.0, 0.0);
        let y = na::Point3::new(0.0, 1.0, 0.0);
        let z = na::Point3::new(0.0, 0.0, 1.0);

        let x_to_y = transform_point(&rotation_z(FRAC_PI_2), &x);
        assert_relative_eq!(x_to_y.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(x_to_y.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(x_to_y.z, 0.0, epsilon = 1e-12);

        let y_to_z = transform_point(&rotation_x(FRAC_PI_2), &y);
        assert_relative_eq!(y_to_z.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(y_to_z.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(y_to_z.z, 1.0, epsilon = 1e-12);

        let z_to_x = transform_point(&rotation_y(FRAC_PI_2), &z);
        assert_relative_eq!(z_to_x.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(z_to_x.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(z_to_x.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_translation_moves_origin_exactly() {
        let t = translation(na::Vector3::new(1.5, -2.0, 3.25));
        let moved = transform_point(&t, &na::Point3::origin());
        assert_eq!(moved, na::Point3::new(1.5, -2.0, 3.25));
    }

    #[test]
    fn test_rotation_composition_adds_angles() {
        let composed = rotation_z(0.3) * rotation_z(0.4);
        assert_matrix_eq(&composed, &rotation_z(0.7));
    }

    #[test]
    fn test_builders_are_value_pure() {
        assert_eq!(rotation_y(0.8), rotation_y(0.8));
        assert_eq!(
            translation(na::Vector3::new(1.0, 2.0, 3.0)),
            translation(na::Vector3::new(1.0, 2.0, 3.0))
        );
    }

    #[test]
    fn test_symbolic_rotation_carries_trig_entries() {
        let rot = rotation_z(symbol("q"));

        assert_eq!(rot[(0, 0)], cos(symbol("q")));
        assert_eq!(rot[(0, 1)], -sin(symbol("q")));
        assert_eq!(rot[(1, 0)], sin(symbol("q")));
        assert_eq!(rot[(1, 1)], cos(symbol("q")));
        assert_eq!(rot[(2, 2)], Expr::from(1));
        assert_eq!(rot[(3, 3)], Expr::from(1));
    }

    #[test]
    fn test_symbolic_translation_part() {
        let t = translation(na::Vector3::new(
            symbol("a"),
            Expr::from(0),
            symbol("d"),
        ));
        let column = translation_part(&t);
        assert_eq!(column.x, symbol("a"));
        assert_eq!(column.y, Expr::from(0));
        assert_eq!(column.z, symbol("d"));
    }
}
