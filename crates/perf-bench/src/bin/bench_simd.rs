use std::hint::black_box;

use layout_bench_core::{sum_lanes, sum_scalar};
use perf_bench::config::load_config;
use perf_bench::error::BenchError;
use perf_bench::*;

fn main() -> Result<(), BenchError> {
    init_tracing();
    let config = load_config()?;

    tracing::info!(entities = config.entities, "Generating u64 dataset");
    let columns = generate_entities_u64(config.entities);

    bench_field_sum("SIMD u64x2", &columns, &config)?;

    // Baselines over the same columns: plain scalar and a wider lane policy.
    let (scalar, elapsed) = run_timed(config.repetitions, || {
        (
            sum_scalar(black_box(&columns.x)),
            sum_scalar(black_box(&columns.y)),
            sum_scalar(black_box(&columns.z)),
        )
    });
    print_report(
        "Scalar u64",
        config.entities,
        "Entities",
        format_args!("x={} y={} z={}", scalar.0, scalar.1, scalar.2),
        elapsed,
    );

    let (wide, elapsed) = run_timed(config.repetitions, || {
        (
            sum_lanes::<4>(black_box(&columns.x)),
            sum_lanes::<4>(black_box(&columns.y)),
            sum_lanes::<4>(black_box(&columns.z)),
        )
    });
    print_report(
        "SIMD 4-lane u64",
        config.entities,
        "Entities",
        format_args!("x={} y={} z={}", wide.0, wide.1, wide.2),
        elapsed,
    );

    Ok(())
}
