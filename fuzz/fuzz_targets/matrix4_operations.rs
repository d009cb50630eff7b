#![no_main]

use libfuzzer_sys::fuzz_target;
use lre_math::{Matrix4, fuzzing::fuzz_test_matrix4_operations_never_panic};

fuzz_target!(|input: (Matrix4, isize)| {
    fuzz_test_matrix4_operations_never_panic(input);
});
