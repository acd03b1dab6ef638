pub mod config;
pub mod error;

use std::collections::HashMap;
use std::fmt::Display;
use std::hint::black_box;
use std::time::{Duration, Instant};

use common::types::{EntitiesSoA, EntitiesU64, EntityAoS, EntityU16};
use layout_bench_core::FieldSum;
use tracing_subscriber::EnvFilter;

use crate::config::BenchConfig;
use crate::error::BenchError;

pub const NUM_ENTITIES: usize = 10_000;
pub const NUM_ITER_ELEMENTS: usize = 1_000_000;
pub const REPETITIONS: usize = 100;

/// Installs a `fmt` subscriber filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

// ----------------------------
// Dataset generators
// ----------------------------
//
// Entity `i` always carries (i, i + 1, i + 2) so every layout holds the same
// logical data and produces comparable checksums.

/// Generates `n` entities in the Array of Structs (AoS) format.
pub fn generate_entities_aos(n: usize) -> Vec<EntityAoS> {
    (0..n as i64)
        .map(|i| EntityAoS::new(i, i + 1, i + 2))
        .collect()
}

/// Generates `n` entities in the Struct of Arrays (SoA) format, populating the
/// numeric columns directly rather than converting from AoS.
pub fn generate_entities_soa(n: usize) -> EntitiesSoA {
    EntitiesSoA {
        x: (0..n as i64).collect(),
        y: (0..n as i64).map(|i| i + 1).collect(),
        z: (0..n as i64).map(|i| i + 2).collect(),
        ..Default::default()
    }
}

/// Generates `n` narrow entities. Indices past `u16::MAX` wrap.
pub fn generate_entities_u16(n: usize) -> Vec<EntityU16> {
    (0..n)
        .map(|i| {
            let i = i as u16;
            EntityU16::new(i, i.wrapping_add(1), i.wrapping_add(2))
        })
        .collect()
}

pub fn generate_entities_u64(n: usize) -> EntitiesU64 {
    EntitiesU64 {
        x: (0..n as u64).collect(),
        y: (0..n as u64).map(|i| i + 1).collect(),
        z: (0..n as u64).map(|i| i + 2).collect(),
    }
}

/// Map from `i` to its decimal string for `i` in `0..n`.
pub fn generate_string_map(n: usize) -> HashMap<usize, String> {
    (0..n).map(|i| (i, i.to_string())).collect()
}

pub fn generate_string_vec(n: usize) -> Vec<String> {
    (0..n).map(|i| i.to_string()).collect()
}

// ----------------------------
// Timing
// ----------------------------

/// Runs `f` `repetitions` times (at least once) and returns the last result with
/// the total elapsed time. Every result passes through [`black_box`].
pub fn run_timed<T, F>(repetitions: usize, mut f: F) -> (T, Duration)
where
    F: FnMut() -> T,
{
    let start_time = Instant::now();
    for _ in 1..repetitions {
        black_box(f());
    }
    let last = black_box(f());
    (last, start_time.elapsed())
}

pub fn print_report(label: &str, count: usize, noun: &str, checksum: impl Display, elapsed: Duration) {
    println!("--- {} Benchmark Results ({} {}) ---", label, count, noun);
    println!("Checksum: {}", checksum);
    println!("Elapsed Time: {:?}", elapsed);
}

/// Times `data.sum_fields()` and prints the per-field checksum.
pub fn bench_field_sum<L>(label: &str, data: &L, config: &BenchConfig) -> Result<(), BenchError>
where
    L: FieldSum + ?Sized,
    L::Output: Display,
{
    let (sums, elapsed) = run_timed(config.repetitions, || data.sum_fields());
    let (x, y, z) = sums?;

    tracing::info!(label, repetitions = config.repetitions, "Field sum finished");
    print_report(
        label,
        data.len(),
        "Entities",
        format_args!("x={} y={} z={}", x, y, z),
        elapsed,
    );
    Ok(())
}

#[cfg(test)]
mod perf_bench_tests {
    use super::*;
    use layout_bench_core::sum_entities_aos;

    #[test]
    fn test_generators_hold_equivalent_data() {
        let aos = generate_entities_aos(50);
        let soa = generate_entities_soa(50);
        let u64s = generate_entities_u64(50);

        let converted = EntitiesSoA::from(aos.clone());
        assert_eq!((&soa.x, &soa.y, &soa.z), (&converted.x, &converted.y, &converted.z));
        assert_eq!(aos.as_slice().sum_fields(), soa.sum_fields());
        let (x, y, z) = sum_entities_aos(&aos);
        assert_eq!(u64s.sum_fields(), Ok((x as u64, y as u64, z as u64)));
    }

    #[test]
    fn test_u16_generator_wraps_indices() {
        let narrow = generate_entities_u16(usize::from(u16::MAX) + 2);
        assert_eq!(narrow[0], EntityU16::new(0, 1, 2));
        assert_eq!(narrow[usize::from(u16::MAX)], EntityU16::new(u16::MAX, 0, 1));
        assert_eq!(narrow[usize::from(u16::MAX) + 1], EntityU16::new(0, 1, 2));
    }

    #[test]
    fn test_iteration_generators() {
        let map = generate_string_map(10);
        let vec = generate_string_vec(10);
        assert_eq!(map.len(), 10);
        assert_eq!(map[&7], "7");
        assert_eq!(vec.last().map(String::as_str), Some("9"));
    }

    #[test]
    fn test_run_timed_runs_at_least_once() {
        let mut calls = 0;
        let (last, _) = run_timed(0, || {
            calls += 1;
            calls
        });
        assert_eq!(last, 1);

        let mut calls = 0;
        let (last, _) = run_timed(5, || {
            calls += 1;
            calls
        });
        assert_eq!(last, 5);
    }
}
