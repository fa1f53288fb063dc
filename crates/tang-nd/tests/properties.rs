//! Algebraic properties checked over random inputs.

use proptest::prelude::*;
use tang_nd::{Mat3, Mat4, OutOfRange, Quat, Vec3, Vec4};

fn vec3() -> impl Strategy<Value = Vec3<f64>> {
    prop::array::uniform3(-100.0f64..100.0).prop_map(Vec3::from)
}

fn mat3() -> impl Strategy<Value = Mat3<f64>> {
    prop::array::uniform9(-10.0f64..10.0).prop_map(|e| Mat3::from_fn(|c, r| e[c * 3 + r]))
}

/// Strictly diagonally dominant, hence invertible without pivoting.
fn dominant_mat4() -> impl Strategy<Value = Mat4<f64>> {
    prop::array::uniform16(-1.0f64..1.0)
        .prop_map(|e| Mat4::from_fn(|c, r| if c == r { e[c * 4 + r] + 5.0 } else { e[c * 4 + r] }))
}

fn versor() -> impl Strategy<Value = Quat<f64>> {
    (vec3(), -10.0f64..10.0)
        .prop_filter("axis needs a direction", |(axis, _)| axis.norm() > 1e-3)
        .prop_map(|(axis, angle)| Quat::versor(axis.normal(), angle))
}

fn frobenius(m: &Mat3<f64>) -> f64 {
    m.iter().map(|c| c.norm_squared()).sum::<f64>().sqrt()
}

proptest! {
    #[test]
    fn component_roundtrip(a in prop::array::uniform4(any::<i32>()), i in 0usize..4) {
        let mut v = Vec4::from(a);
        prop_assert_eq!(v.get(i), Ok(&a[i]));
        *v.get_mut(i).unwrap() = 7;
        prop_assert_eq!(v[i], 7);
        prop_assert_eq!(v.into_array()[i], 7);
    }

    #[test]
    fn component_out_of_range(a in prop::array::uniform3(any::<i32>()), i in 3usize..1000) {
        let v = Vec3::from(a);
        prop_assert_eq!(v.get(i), Err(OutOfRange { index: i, len: 3 }));
    }

    #[test]
    fn dot_is_symmetric(a in vec3(), b in vec3()) {
        prop_assert_eq!(a.dot(b), b.dot(a));
    }

    #[test]
    fn cross_is_anticommutative(a in vec3(), b in vec3()) {
        prop_assert_eq!(a.cross(b), -b.cross(a));
    }

    #[test]
    fn cross_is_orthogonal(a in vec3(), b in vec3()) {
        let c = a.cross(b);
        let scale = a.norm() * b.norm() * (a.norm() + b.norm()) + 1.0;
        prop_assert!(c.dot(a).abs() / scale < 1e-12);
        prop_assert!(c.dot(b).abs() / scale < 1e-12);
    }

    #[test]
    fn normal_is_unit(v in vec3()) {
        prop_assume!(v.norm() > 1e-3);
        prop_assert!((v.normal().norm() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn product_is_associative(a in mat3(), b in mat3(), c in mat3()) {
        let lhs = (a * b) * c;
        let rhs = a * (b * c);
        for col in 0..3 {
            for row in 0..3 {
                prop_assert!((lhs.element(col, row) - rhs.element(col, row)).abs() < 1e-8);
            }
        }
    }

    #[test]
    fn double_transpose_is_identity(m in mat3()) {
        prop_assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn transpose_reverses_product(a in mat3(), b in mat3()) {
        let lhs = (a * b).transpose();
        let rhs = b.transpose() * a.transpose();
        for col in 0..3 {
            for row in 0..3 {
                prop_assert!((lhs.element(col, row) - rhs.element(col, row)).abs() < 1e-10);
            }
        }
    }

    #[test]
    fn inverse_times_matrix_is_identity(m in dominant_mat4()) {
        let p = m.inverse() * m;
        let id = Mat4::<f64>::identity();
        for col in 0..4 {
            for row in 0..4 {
                prop_assert!((p.element(col, row) - id.element(col, row)).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn determinant_of_product(a in mat3(), b in mat3()) {
        let lhs = (a * b).determinant();
        let rhs = a.determinant() * b.determinant();
        let scale = (frobenius(&a) * frobenius(&b)).powi(3);
        prop_assert!((lhs - rhs).abs() <= 1e-12 * (1.0 + scale));
    }

    #[test]
    fn versor_product_is_versor(p in versor(), q in versor()) {
        prop_assert!(((p * q).norm() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn rotation_preserves_length(q in versor(), v in vec3()) {
        let rotated = q * v;
        prop_assert!((rotated.norm() - v.norm()).abs() < 1e-9 * (1.0 + v.norm()));
    }
}
