//! Command line application tracing a laser ray along an optical bench.
use clap::Parser;
use raybench::{
    console::{segment_summary, Args},
    document::BenchDocument,
    error::BenchResult,
    export::{plot_bench_svg, save_segments_csv},
    get_version,
};

fn main() -> BenchResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    //parse CLI arguments
    let args = Args::parse();
    log::debug!("{}", get_version());

    //read bench from file (or use the reference bench) and apply the overrides
    let bench = args.load_bench()?;

    //trace the ray
    let segments = bench.trace();
    print!("{}", segment_summary(&bench, &segments));

    //write the requested exports
    if let Some(path) = &args.csv {
        save_segments_csv(&segments, path)?;
    }
    if let Some(path) = &args.svg {
        plot_bench_svg(&bench, &segments, path)?;
    }
    if let Some(path) = &args.save {
        BenchDocument::from(&bench).save_to_file(path)?;
    }
    Ok(())
}
