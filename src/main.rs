use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "lanewise")]
#[command(about = "Scalar vs vectorized comparison harness for the lanewise transforms", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum WidthArg {
    /// 128-bit registers (SSE)
    W128,
    /// 256-bit registers (AVX2)
    W256,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OpArg {
    All,
    Replace,
    Count,
    Add,
    Reverse,
    Ranges,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the scalar reference and the vectorized implementation on
    /// identical random data and report timing and equivalence
    Compare {
        /// Number of elements per buffer
        #[arg(short = 'n', long, value_name = "INT", default_value = "10000019")]
        elements: usize,

        /// Seed for the data generator
        #[arg(short, long, value_name = "INT", default_value = "42")]
        seed: u64,

        /// Register width for the width-generic transforms
        #[arg(short, long, value_enum, default_value = "w256")]
        width: WidthArg,

        /// Which transform family to run
        #[arg(short, long, value_enum, default_value = "all")]
        op: OpArg,
    },

    /// Tiny fixed-input walkthrough of each transform
    Demo,
}

#[cfg(target_arch = "x86_64")]
mod compare {
    use super::{OpArg, WidthArg};
    use lanewise::engine::SimdEngine;
    use lanewise::lane::{Lane, LaneAdd, ScalarBits};
    use lanewise::ops::RangeElement;
    use lanewise::{Engine128, Engine256, ops, scalar, utils};
    use rand::distr::uniform::SampleUniform;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::time::Instant;

    fn report(
        op: &str,
        ty: &str,
        n: usize,
        scalar_ms: f64,
        simd_ms: f64,
        buffers_equal: bool,
        results_equal: bool,
    ) {
        log::info!(
            "{:<16} {:<4} n={:<10} scalar={:>9.3}ms simd={:>9.3}ms ratio={:>6.2}x buffers_equal={} results_equal={}",
            op,
            ty,
            n,
            scalar_ms,
            simd_ms,
            if simd_ms > 0.0 { scalar_ms / simd_ms } else { f64::INFINITY },
            buffers_equal,
            results_equal,
        );
    }

    fn time<F: FnOnce()>(f: F) -> f64 {
        let start = Instant::now();
        f();
        start.elapsed().as_secs_f64() * 1e3
    }

    fn buffers_equal<T: ScalarBits>(a: &[T], b: &[T]) -> bool {
        a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.bit_eq(*y))
    }

    fn random_data<T>(n: usize, rng: &mut StdRng, lo: T, hi: T) -> Vec<T>
    where
        T: SampleUniform + PartialOrd + Copy,
    {
        // Small value range so every operation finds plenty of matches.
        (0..n).map(|_| rng.random_range(lo..=hi)).collect()
    }

    fn compare_replace<E, T>(ty: &'static str, n: usize, rng: &mut StdRng, lo: T, hi: T)
    where
        E: SimdEngine,
        T: Lane<E> + SampleUniform + PartialOrd,
    {
        let data = random_data(n, rng, lo, hi);
        let target = data[n / 2];
        let replacement = hi;
        let mut reference = data.clone();
        let mut vectorized = data;

        let scalar_ms = time(|| scalar::replace(&mut reference, target, replacement));
        let simd_ms = time(|| ops::replace::<E, T>(&mut vectorized, target, replacement));
        report(
            "replace",
            ty,
            n,
            scalar_ms,
            simd_ms,
            buffers_equal(&reference, &vectorized),
            true,
        );
    }

    fn compare_count<E, T>(ty: &'static str, n: usize, rng: &mut StdRng, lo: T, hi: T)
    where
        E: SimdEngine,
        T: Lane<E> + SampleUniform + PartialOrd,
    {
        let data = random_data(n, rng, lo, hi);
        let target = data[n / 2];

        let mut scalar_result = 0;
        let mut simd_result = 0;
        let scalar_ms = time(|| scalar_result = scalar::count(&data, target));
        let simd_ms = time(|| simd_result = ops::count::<E, T>(&data, target));
        report(
            "count",
            ty,
            n,
            scalar_ms,
            simd_ms,
            true,
            scalar_result == simd_result,
        );
    }

    fn compare_add<E, T>(ty: &'static str, n: usize, rng: &mut StdRng, lo: T, hi: T, value: T)
    where
        E: SimdEngine,
        T: LaneAdd<E> + SampleUniform + PartialOrd + core::ops::AddAssign,
    {
        let data = random_data(n, rng, lo, hi);
        let mut reference = data.clone();
        let mut vectorized = data;

        let scalar_ms = time(|| scalar::add(&mut reference, value));
        let simd_ms = time(|| ops::add::<E, T>(&mut vectorized, value));
        report(
            "add",
            ty,
            n,
            scalar_ms,
            simd_ms,
            buffers_equal(&reference, &vectorized),
            true,
        );
    }

    fn compare_reverse<E, T>(ty: &'static str, n: usize, rng: &mut StdRng, lo: T, hi: T)
    where
        E: SimdEngine,
        T: Lane<E> + SampleUniform + PartialOrd,
    {
        let data = random_data(n, rng, lo, hi);
        let mut reference = data.clone();
        let mut vectorized = data;

        let scalar_ms = time(|| scalar::reverse(&mut reference));
        let simd_ms = time(|| ops::reverse::<E, T>(&mut vectorized));
        report(
            "reverse",
            ty,
            n,
            scalar_ms,
            simd_ms,
            buffers_equal(&reference, &vectorized),
            true,
        );
    }

    fn compare_count_in_range<T>(ty: &'static str, n: usize, rng: &mut StdRng, lo: T, hi: T)
    where
        T: RangeElement + SampleUniform,
        T::Bits: From<u8>,
    {
        let data = random_data(n, rng, lo, hi);
        let ranges = [
            (T::from_bits(20u8.into()), T::from_bits(90u8.into())),
        ];

        let mut scalar_result = 0;
        let mut simd_result = 0;
        let scalar_ms = time(|| scalar_result = scalar::count_in_range(&data, &ranges));
        let simd_ms = time(|| simd_result = ops::count_in_range(&data, &ranges));
        report(
            "count-in-range",
            ty,
            n,
            scalar_ms,
            simd_ms,
            true,
            scalar_result == simd_result,
        );
    }

    fn compare_convert_case(n: usize, rng: &mut StdRng) {
        let data = random_data(n, rng, b' ', b'z');
        let mut reference = data.clone();
        let mut vectorized = data;
        let ranges = [(b'A', b'Z')];

        let scalar_ms = time(|| scalar::convert_case(&mut reference, &ranges));
        let simd_ms = time(|| ops::convert_case(&mut vectorized, &ranges));
        report(
            "convert-case",
            "u8",
            n,
            scalar_ms,
            simd_ms,
            buffers_equal(&reference, &vectorized),
            true,
        );
    }

    fn run_width_generic<E: SimdEngine>(op: OpArg, n: usize, rng: &mut StdRng) {
        if matches!(op, OpArg::All | OpArg::Replace) {
            compare_replace::<E, u8>("u8", n, rng, 1, 100);
            compare_replace::<E, i16>("i16", n, rng, 1, 100);
            compare_replace::<E, u32>("u32", n, rng, 1, 100);
            compare_replace::<E, i64>("i64", n, rng, 1, 100);
            compare_replace::<E, f32>("f32", n, rng, 1.0, 100.0);
            compare_replace::<E, f64>("f64", n, rng, 1.0, 100.0);
        }
        if matches!(op, OpArg::All | OpArg::Count) {
            compare_count::<E, u8>("u8", n, rng, 1, 100);
            compare_count::<E, u16>("u16", n, rng, 1, 100);
            compare_count::<E, u32>("u32", n, rng, 1, 100);
            compare_count::<E, u64>("u64", n, rng, 1, 100);
        }
        if matches!(op, OpArg::All | OpArg::Add) {
            compare_add::<E, f32>("f32", n, rng, 1.0, 100.0, 7.17);
            compare_add::<E, f64>("f64", n, rng, 1.0, 100.0, 7.17);
        }
        if matches!(op, OpArg::All | OpArg::Reverse) {
            compare_reverse::<E, u8>("u8", n, rng, 1, 100);
            compare_reverse::<E, i16>("i16", n, rng, 1, 100);
            compare_reverse::<E, u32>("u32", n, rng, 1, 100);
            compare_reverse::<E, f64>("f64", n, rng, 1.0, 100.0);
        }
    }

    pub fn run(elements: usize, seed: u64, width: WidthArg, op: OpArg) {
        let n = elements;
        let mut rng = StdRng::seed_from_u64(seed);

        let width = if width == WidthArg::W256 && !is_x86_feature_detected!("avx2") {
            log::warn!("AVX2 not available on this CPU, using 128-bit registers");
            WidthArg::W128
        } else {
            width
        };

        let wall_before = utils::realtime();
        let cpu_before = utils::cputime();
        match width {
            WidthArg::W128 => run_width_generic::<Engine128>(op, n, &mut rng),
            WidthArg::W256 => run_width_generic::<Engine256>(op, n, &mut rng),
        }

        // The range family is fixed to 128-bit registers by its hardware
        // primitive, independent of the requested width.
        if matches!(op, OpArg::All | OpArg::Ranges) {
            compare_count_in_range::<u8>("u8", n, &mut rng, 1, 127);
            compare_count_in_range::<u16>("u16", n, &mut rng, 1, 127);
            compare_convert_case(n, &mut rng);
        }

        log::debug!(
            "total: wall {:.3}s, cpu {:.3}s",
            utils::realtime() - wall_before,
            utils::cputime() - cpu_before
        );
    }
}

#[cfg(target_arch = "x86_64")]
fn demo() {
    let mut bytes = [1u8, 2, 1, 3, 1];
    println!("buffer {:?}", bytes);
    println!("  count(1)        = {}", lanewise::count(&bytes, 1));
    lanewise::replace(&mut bytes, 1, 9);
    println!("  replace(1 -> 9) = {:?}", bytes);
    println!("  count(1)        = {}", lanewise::count(&bytes, 1));

    let mut seq = [1u16, 2, 3, 4, 5];
    lanewise::reverse(&mut seq);
    println!("reverse [1..5]    = {:?}", seq);

    let mut floats = [1.5f32, 2.5, 3.5];
    lanewise::add(&mut floats, 0.5);
    println!("add 0.5           = {:?}", floats);

    let mut text = *b"Abc123XY";
    lanewise::to_lowercase(&mut text);
    println!("to_lowercase      = {}", String::from_utf8_lossy(&text));
    println!(
        "letters in range  = {}",
        lanewise::count_in_range(&text, &[(b'a', b'z')])
    );
}

#[cfg(target_arch = "x86_64")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            elements,
            seed,
            width,
            op,
        } => {
            env_logger::Builder::from_default_env()
                .filter_level(log::LevelFilter::Info)
                .format_timestamp(None)
                .format_target(false)
                .init();

            anyhow::ensure!(elements > 0, "--elements must be positive");

            log::info!(
                "comparing scalar vs vectorized on {} random elements (seed {})",
                elements,
                seed
            );
            compare::run(elements, seed, width, op);
        }
        Commands::Demo => demo(),
    }
    Ok(())
}

#[cfg(not(target_arch = "x86_64"))]
fn main() {
    let _ = Cli::parse();
    eprintln!("the lanewise harness compares against x86_64 register paths; this build has none");
    std::process::exit(1);
}
