use perf_bench::config::load_config;
use perf_bench::error::BenchError;
use perf_bench::*;

fn main() -> Result<(), BenchError> {
    init_tracing();
    let config = load_config()?;

    tracing::info!(entities = config.entities, "Generating AoS dataset");
    let aos_data = generate_entities_aos(config.entities);

    // Each entity drags its ten unused string fields through the cache.
    bench_field_sum("AoS", aos_data.as_slice(), &config)
}
