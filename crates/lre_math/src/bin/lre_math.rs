use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use clap::{Parser, Subcommand};
    use lre_math::backend::ACTIVE_BACKEND_NAME;

    #[derive(Debug, Parser)]
    #[command(about = "Inspect and benchmark the LRE vector and matrix primitives", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Print the lane backend selected for this build
        Backend,
        /// List the available benchmark targets
        Targets,
        #[cfg(feature = "benchmark")]
        /// Run one benchmark target
        Benchmark {
            /// Target to run
            #[arg(short, long, value_enum)]
            target: lre_math::benchmark::Target,

            /// Seconds to keep running the target (at least one run is always
            /// made)
            #[arg(short, long, default_value_t = 0.0)]
            duration: f64,

            /// Seconds after startup before the target starts, for attaching a
            /// profiler
            #[arg(long, default_value_t = 0.0)]
            delay: f64,
        },
        #[cfg(not(feature = "benchmark"))]
        /// Run one benchmark target (needs the `benchmark` feature)
        Benchmark,
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        match Cli::parse().command {
            Command::Backend => {
                log::info!("Lanes selected at build time: {ACTIVE_BACKEND_NAME}");
                println!("{ACTIVE_BACKEND_NAME}");
            }
            #[cfg(feature = "benchmark")]
            Command::Targets => {
                for target in lre_math::benchmark::Target::ALL {
                    println!("{}", target.path());
                }
            }
            #[cfg(not(feature = "benchmark"))]
            Command::Targets => {
                anyhow::bail!("No benchmark targets are compiled without the `benchmark` feature");
            }
            #[cfg(feature = "benchmark")]
            Command::Benchmark {
                target,
                duration,
                delay,
            } => {
                if duration < 0.0 || delay < 0.0 {
                    anyhow::bail!("Duration and delay must be non-negative");
                }
                lre_math::benchmark::benchmark(target, duration, delay);
            }
            #[cfg(not(feature = "benchmark"))]
            Command::Benchmark => {
                anyhow::bail!("Benchmarking needs the `benchmark` feature");
            }
        }

        Ok(())
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("The `lre_math` binary needs the `cli` feature")
    }
}

fn main() -> Result<()> {
    main::main()
}
