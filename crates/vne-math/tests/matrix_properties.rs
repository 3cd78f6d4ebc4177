//! Algebraic properties that hold across the whole matrix API.

use std::f32::consts::{FRAC_PI_3, FRAC_PI_4, FRAC_PI_6};
use vne_math::{Mat3, Mat4, Vec3, Vec4};

/// A handful of invertible affine and projective matrices.
fn invertible_mat4s() -> Vec<Mat4> {
    vec![
        Mat4::IDENTITY,
        Mat4::translate_xyz(3.0, -1.0, 2.0),
        Mat4::rotate_xyz(FRAC_PI_6, FRAC_PI_4, FRAC_PI_3),
        Mat4::scale_xyz(2.0, 0.5, 4.0),
        Mat4::translate_xyz(1.0, 2.0, 3.0) * Mat4::rotate_y(0.4) * Mat4::scale_uniform(1.5),
        Mat4::perspective(1.0, 1.5, 0.5, 20.0),
        Mat4::ortho(-2.0, 2.0, -1.0, 1.0, 0.1, 10.0),
        Mat4::look_at_rh(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, Vec3::Y),
        Mat4::from_cols(
            Vec4::new(3.0, 4.0, 3.0, 9.0),
            Vec4::new(2.0, 0.0, 0.0, 2.0),
            Vec4::new(0.0, 1.0, 2.0, 3.0),
            Vec4::new(1.0, 2.0, 1.0, 1.0),
        ),
    ]
}

fn sample_mat3s() -> Vec<Mat3> {
    vec![
        Mat3::IDENTITY,
        Mat3::rotate(1.3, Vec3::new(1.0, -2.0, 0.5)),
        Mat3::scale_xyz(3.0, 0.25, 1.0),
        Mat3::from_cols_array([2.0, 1.0, 0.0, -1.0, 3.0, 1.0, 0.5, 0.0, 4.0]),
    ]
}

#[test]
fn test_inverse_is_two_sided() {
    for m in invertible_mat4s() {
        let inv = m.inverse();
        assert!((m * inv).are_same(&Mat4::IDENTITY), "{m}");
        assert!((inv * m).are_same(&Mat4::IDENTITY), "{m}");
        assert_eq!(m.try_inverse().ok(), Some(inv));
    }
    for m in sample_mat3s() {
        assert!((m * m.inverse()).are_same(&Mat3::IDENTITY), "{m}");
    }
}

#[test]
fn test_transpose_is_an_involution() {
    for m in invertible_mat4s() {
        assert_eq!(m.transpose().transpose(), m);
    }
    for m in sample_mat3s() {
        assert_eq!(m.transpose().transpose(), m);
    }
}

#[test]
fn test_identity_is_neutral() {
    for m in invertible_mat4s() {
        assert_eq!(Mat4::IDENTITY * m, m);
        assert_eq!(m * Mat4::IDENTITY, m);
    }
}

#[test]
fn test_normal_matrix_equals_inverse_transposed() {
    for m in invertible_mat4s() {
        assert_eq!(m.normal_matrix(), m.inverse_transposed());
        assert_eq!(m.inverse_transposed(), m.inverse().transpose());
    }
    for m in sample_mat3s() {
        assert_eq!(m.normal_matrix(), m.inverse_transposed());
    }
}

#[test]
fn test_determinant_of_inverse() {
    for m in invertible_mat4s() {
        let d = m.determinant();
        let di = m.inverse().determinant();
        assert!((d * di - 1.0).abs() < 1e-3, "{d} * {di}");
    }
}

#[test]
fn test_rotation_orders_differ() {
    let (a, b, c) = (0.3, -0.7, 1.1);
    assert!(!Mat4::rotate_xyz(a, b, c).are_same(&Mat4::rotate_zyx(a, b, c)));
    assert!(!Mat3::rotate_xyz(a, b, c).are_same(&Mat3::rotate_zyx(a, b, c)));
    assert_eq!(Mat4::rotate_xyz(0.0, 0.0, 0.0), Mat4::rotate_zyx(0.0, 0.0, 0.0));

    let xyz = Mat4::rotate_z(c) * Mat4::rotate_y(b) * Mat4::rotate_x(a);
    assert_eq!(Mat4::rotate_xyz(a, b, c), xyz);
    let zyx = Mat4::rotate_x(a) * Mat4::rotate_y(b) * Mat4::rotate_z(c);
    assert_eq!(Mat4::rotate_zyx(a, b, c), zyx);
}

#[test]
fn test_rotations_are_orthogonal_and_right_handed() {
    let r = Mat4::rotate_xyz(0.2, 0.9, -1.4);
    assert!(r.is_orthogonal());
    assert_eq!(r.handedness(), vne_core::Handedness::Right);
    assert!(r.inverse().are_same(&r.transpose()));
}

#[test]
fn test_lerp_endpoints_are_exact() {
    for a in invertible_mat4s() {
        let b = Mat4::rotate_x(0.5) * Mat4::translate_uniform(2.0);
        assert_eq!(Mat4::lerp(&a, &b, 0.0), a);
        assert_eq!(Mat4::lerp(&a, &b, 1.0), b);
    }
}

#[test]
fn test_transform_normal_stays_perpendicular() {
    let m = Mat4::translate_xyz(4.0, 0.0, -1.0)
        * Mat4::rotate_z(0.6)
        * Mat4::scale_xyz(3.0, 0.5, 1.0);
    let normal = Vec3::new(1.0, 1.0, 1.0).normalize();
    let tangent = Vec3::new(1.0, -1.0, 0.0);
    assert!(normal.dot(tangent).abs() < 1e-6);

    let n = m.transform_normal(normal);
    let t = m.transform_vector(tangent);
    assert!(n.dot(t).abs() < 1e-5);
    assert!((n.length() - 1.0).abs() < 1e-5);
}

#[test]
fn test_checked_twins_report_errors() {
    let m = Mat4::IDENTITY;
    assert!(m.try_col(4).is_err_and(|e| e.is_precondition_error()));
    assert!(m.try_div(0.0).is_err_and(|e| e.is_precondition_error()));
    assert!(Mat3::ZERO.try_inverse().is_err());
    assert!(m.try_col(3).is_ok());
}
