#![no_main]

use libfuzzer_sys::fuzz_target;
use lre_math::{Vector4, fuzzing::fuzz_test_vector4_guards};

fuzz_target!(|input: (Vector4, Vector4, f32)| {
    fuzz_test_vector4_guards(input);
});
