//! Running benchmark targets under `criterion`.

pub use criterion::{Criterion, criterion_group, criterion_main};

use crate::benchmark::Benchmarker;
use std::time::Duration;

/// Defines a `criterion` benchmark function named `$name` that runs
/// `$module::$name`, reported under a benchmark group named after `$module`.
#[macro_export]
macro_rules! define_criterion_target {
    ($module:ident, $name:ident) => {
        $crate::define_criterion_target!(@define $module, $name, None);
    };
    ($module:ident, $name:ident, $sample_size:expr) => {
        $crate::define_criterion_target!(@define $module, $name, Some($sample_size));
    };
    (@define $module:ident, $name:ident, $sample_size:expr) => {
        pub fn $name(c: &mut $crate::benchmark::criterion::Criterion) {
            $module::$name($crate::benchmark::criterion::CriterionBenchmarker::new(
                c,
                stringify!($module),
                stringify!($name),
                $sample_size,
            ));
        }
    };
}

/// [`Benchmarker`] that hands the closure to `criterion` for statistical
/// measurement.
#[allow(missing_debug_implementations)]
pub struct CriterionBenchmarker<'a> {
    c: &'a mut Criterion,
    group: &'static str,
    function: &'static str,
    sample_size: Option<usize>,
}

impl<'a> CriterionBenchmarker<'a> {
    pub fn new(
        c: &'a mut Criterion,
        group: &'static str,
        function: &'static str,
        sample_size: Option<usize>,
    ) -> Self {
        Self {
            c,
            group,
            function,
            sample_size,
        }
    }
}

impl Benchmarker for CriterionBenchmarker<'_> {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T) {
        let mut group = self.c.benchmark_group(self.group);

        if let Some(sample_size) = self.sample_size {
            group.sample_size(sample_size);
        }

        group.bench_function(self.function, |b| b.iter(&mut *f));
        group.finish();
    }
}

/// `criterion` settings for operations taking nanoseconds.
pub fn config() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(2))
        .noise_threshold(0.02)
}
