#![no_main]

#[cfg(not(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "sse2"
)))]
compile_error!("`lane_backends_agree` compares against the SSE backend and needs an x86 target with SSE2");

use libfuzzer_sys::fuzz_target;
use lre_math::fuzzing::{ArbitraryLaneInput, fuzz_test_lane_backends_agree};

fuzz_target!(|input: ArbitraryLaneInput| {
    fuzz_test_lane_backends_agree(input);
});
