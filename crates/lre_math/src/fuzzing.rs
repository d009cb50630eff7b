//! Fuzz test entry points, driven by the targets in the `fuzz` package.

use crate::{Matrix4, Vector4, num};

#[cfg(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "sse2"
))]
pub use lane_backends::{ArbitraryLaneInput, fuzz_test_lane_backends_agree};

#[cfg(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "sse2"
))]
mod lane_backends {
    use crate::backend::{LaneBackend, Lanes, ScalarLanes, SseLanes};
    use arbitrary::Arbitrary;

    #[derive(Clone, Debug, Arbitrary)]
    pub struct ArbitraryLaneInput {
        pub a: Lanes,
        pub b: Lanes,
        pub factor: f32,
        pub rows: [Lanes; 4],
    }

    pub fn fuzz_test_lane_backends_agree(input: ArbitraryLaneInput) {
        let ArbitraryLaneInput { a, b, factor, rows } = input;

        assert_lanes_agree(ScalarLanes::add(a, b), SseLanes::add(a, b));
        assert_lanes_agree(ScalarLanes::sub(a, b), SseLanes::sub(a, b));
        assert_lanes_agree(ScalarLanes::mul(a, b), SseLanes::mul(a, b));
        assert_lanes_agree(ScalarLanes::div(a, factor), SseLanes::div(a, factor));
        assert_lanes_agree(ScalarLanes::scale(a, factor), SseLanes::scale(a, factor));
        assert_lanes_agree(ScalarLanes::min(a, b), SseLanes::min(a, b));
        assert_lanes_agree(ScalarLanes::max(a, b), SseLanes::max(a, b));

        let scalar_product = ScalarLanes::matrix_mul(&rows, &rows);
        let sse_product = SseLanes::matrix_mul(&rows, &rows);
        for (scalar_row, sse_row) in scalar_product.into_iter().zip(sse_product) {
            assert_lanes_agree(scalar_row, sse_row);
        }

        let scalar_dot = ScalarLanes::dot(a, b);
        let sse_dot = SseLanes::dot(a, b);
        if scalar_dot.is_finite() && sse_dot.is_finite() {
            let magnitude = a
                .iter()
                .zip(b)
                .map(|(x, y)| (x * y).abs())
                .sum::<f32>();
            if magnitude.is_finite() {
                assert!(
                    (scalar_dot - sse_dot).abs() <= 4.0 * f32::EPSILON * magnitude,
                    "Dot products diverge: {} vs {}",
                    scalar_dot,
                    sse_dot
                );
            }
        }
    }

    fn assert_lanes_agree(scalar: Lanes, sse: Lanes) {
        for (lane, (s, v)) in scalar.into_iter().zip(sse).enumerate() {
            assert!(
                s.to_bits() == v.to_bits() || (s.is_nan() && v.is_nan()),
                "Lane {} differs between backends: {} vs {}",
                lane,
                s,
                v
            );
        }
    }
}

pub fn fuzz_test_matrix4_operations_never_panic((matrix, index): (Matrix4, isize)) {
    let clamped = Matrix4::clamped_index(index);
    assert!(clamped <= Matrix4::MAX_INDEX);
    assert_eq!(
        matrix.element(index).to_bits(),
        matrix.elements()[clamped].to_bits()
    );

    assert_eq!(matrix.transposed().transposed(), matrix);

    let determinant = matrix.determinant();
    let inverse = matrix.inverted();
    if num::is_near_zero(determinant) {
        assert_eq!(inverse, matrix, "Singular matrix was modified by inversion");
    }

    let _ = matrix.cofactor();
    let _ = matrix * inverse;
    let _ = matrix + inverse;
    let _ = matrix - inverse;
}

pub fn fuzz_test_vector4_guards((vector, other, divisor): (Vector4, Vector4, f32)) {
    let finite = vector.components().iter().all(|component| component.is_finite());
    if finite && num::is_near_zero(divisor) {
        assert_eq!(vector / divisor, vector);
    }
    if vector.magnitude() <= num::NEAR_ZERO {
        assert_eq!(vector.normalized(), vector);
    }
    if other.sqr_magnitude().abs() < num::NEAR_ZERO {
        assert_eq!(vector.project(&other), other * vector.dot(&other));
    }

    let _ = vector.lerp(&other, divisor);
    let _ = vector.distance(&other);
    let _ = vector[index_from_bits(divisor)];
}

fn index_from_bits(value: f32) -> usize {
    value.to_bits() as usize
}
