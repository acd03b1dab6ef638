use layout_bench_core::iteration::{
    traverse_map_values, traverse_slice_indexed, traverse_slice_values,
};
use perf_bench::config::load_config;
use perf_bench::error::BenchError;
use perf_bench::*;

fn main() -> Result<(), BenchError> {
    init_tracing();
    let config = load_config()?;
    let n = config.iter_elements;

    tracing::info!(elements = n, "Generating iteration datasets");
    let map = generate_string_map(n);
    let slice = generate_string_vec(n);

    let mut sink: Option<&String> = None;

    // Map order is unspecified, so only the visit count is reported.
    let (visited, elapsed) = run_timed(config.repetitions, || traverse_map_values(&map, &mut sink));
    print_report("HashMap Iter", n, "Elements", format_args!("visited={}", visited), elapsed);

    let (visited, elapsed) = run_timed(config.repetitions, || traverse_slice_values(&slice, &mut sink));
    print_report(
        "Slice Range Iter",
        n,
        "Elements",
        format_args!("visited={} last={:?}", visited, sink),
        elapsed,
    );

    let (visited, elapsed) = run_timed(config.repetitions, || traverse_slice_indexed(&slice, &mut sink));
    print_report(
        "Slice Index Iter",
        n,
        "Elements",
        format_args!("visited={} last={:?}", visited, sink),
        elapsed,
    );

    Ok(())
}
