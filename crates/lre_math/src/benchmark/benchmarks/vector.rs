use crate::{
    backend::{LaneBackend, ScalarLanes},
    vector::Vector4,
};
use lre_profiling::benchmark::Benchmarker;

pub fn add_vector4(benchmarker: impl Benchmarker) {
    let a = create_vector4();
    let b = create_other_vector4();
    benchmarker.benchmark(&mut || a + b);
}

pub fn mul_vector4_hadamard(benchmarker: impl Benchmarker) {
    let a = create_vector4();
    let b = create_other_vector4();
    benchmarker.benchmark(&mut || a * b);
}

pub fn div_vector4(benchmarker: impl Benchmarker) {
    let a = create_vector4();
    benchmarker.benchmark(&mut || a / 3.0);
}

pub fn dot_vector4(benchmarker: impl Benchmarker) {
    let a = create_vector4();
    let b = create_other_vector4();
    benchmarker.benchmark(&mut || a.dot(&b));
}

pub fn dot_vector4_scalar_lanes(benchmarker: impl Benchmarker) {
    let a = create_vector4().components();
    let b = create_other_vector4().components();
    benchmarker.benchmark(&mut || ScalarLanes::dot(a, b));
}

pub fn normalize_vector4(benchmarker: impl Benchmarker) {
    let a = create_vector4();
    benchmarker.benchmark(&mut || a.normalized());
}

pub fn lerp_vector4(benchmarker: impl Benchmarker) {
    let a = create_vector4();
    let b = create_other_vector4();
    benchmarker.benchmark(&mut || a.lerp(&b, 0.3));
}

pub fn project_vector4(benchmarker: impl Benchmarker) {
    let a = create_vector4();
    let b = create_other_vector4();
    benchmarker.benchmark(&mut || a.project(&b));
}

fn create_vector4() -> Vector4 {
    Vector4::new(1.0, -2.0, 3.0, 0.5)
}

fn create_other_vector4() -> Vector4 {
    Vector4::new(-0.5, 4.0, 1.5, 2.0)
}
