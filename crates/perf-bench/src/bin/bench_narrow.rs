use perf_bench::config::load_config;
use perf_bench::error::BenchError;
use perf_bench::*;

fn main() -> Result<(), BenchError> {
    init_tracing();
    let config = load_config()?;

    tracing::info!(entities = config.entities, "Generating u16 dataset");
    let narrow_data = generate_entities_u16(config.entities);

    bench_field_sum("AoS u16", narrow_data.as_slice(), &config)
}
