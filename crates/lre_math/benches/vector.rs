use lre_math::benchmark::benchmarks::vector;
use lre_profiling::{benchmark::criterion, define_criterion_target};

define_criterion_target!(vector, add_vector4);
define_criterion_target!(vector, mul_vector4_hadamard);
define_criterion_target!(vector, div_vector4);
define_criterion_target!(vector, dot_vector4);
define_criterion_target!(vector, dot_vector4_scalar_lanes);
define_criterion_target!(vector, normalize_vector4);
define_criterion_target!(vector, lerp_vector4);
define_criterion_target!(vector, project_vector4);

criterion::criterion_group!(
    name = benches;
    config = criterion::config();
    targets =
        add_vector4,
        mul_vector4_hadamard,
        div_vector4,
        dot_vector4,
        dot_vector4_scalar_lanes,
        normalize_vector4,
        lerp_vector4,
        project_vector4,
);
criterion::criterion_main!(benches);
