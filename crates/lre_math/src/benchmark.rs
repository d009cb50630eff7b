pub mod benchmarks;

lre_profiling::define_target_enum! {
    Target,
    crate::benchmark::benchmarks,
    vector => {
        add_vector4,
        mul_vector4_hadamard,
        div_vector4,
        dot_vector4,
        dot_vector4_scalar_lanes,
        normalize_vector4,
        lerp_vector4,
        project_vector4,
    },
    matrix => {
        add_matrix4,
        add_matrix4_scalar_lanes,
        mul_matrix4,
        mul_matrix4_scalar_lanes,
        scale_matrix4,
        transpose_matrix4,
        determinant_matrix4,
        cofactor_matrix4,
        invert_matrix4,
        invert_singular_matrix4,
    },
}

pub fn benchmark(target: Target, duration: f64, delay: f64) {
    log::info!(
        "Running benchmark {} with {} lanes",
        target.path(),
        crate::backend::ACTIVE_BACKEND_NAME
    );
    lre_profiling::benchmark::benchmark(
        |benchmarker| target.execute(benchmarker),
        duration,
        delay,
    );
}
