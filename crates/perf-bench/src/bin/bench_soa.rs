use perf_bench::config::load_config;
use perf_bench::error::BenchError;
use perf_bench::*;

fn main() -> Result<(), BenchError> {
    init_tracing();
    let config = load_config()?;

    tracing::info!(entities = config.entities, "Generating SoA dataset");
    let soa_data = generate_entities_soa(config.entities);

    // Only the three contiguous numeric columns are touched.
    bench_field_sum("SoA", &soa_data, &config)
}
