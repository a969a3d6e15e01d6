//! mapcount CLI: word-count a file through the MapReduce pipeline

use anyhow::Result;
use clap::Parser;
use mapcount::sink::chart::DEFAULT_TOP_N;
use mapcount::{
    write_chart, write_csv_path, write_report, LineTokenizer, Pipeline, PipelineConfig,
};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mapcount", version, about = "Single-machine MapReduce word count")]
struct Cli {
    /// Input text file
    file: PathBuf,

    /// Number of simulated reduce partitions
    #[arg(long, default_value_t = 10)]
    partitions: usize,

    /// Run the reduce step on parallel tasks
    #[arg(long)]
    parallel: bool,

    /// Number of words shown in the chart
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// Also print a bar chart of the most frequent words
    #[arg(long)]
    chart: bool,

    /// Also write the full result to a CSV file
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let records = LineTokenizer::new().tokenize_path(&cli.file)?;
    let config = PipelineConfig::default()
        .with_partitions(cli.partitions)
        .with_parallel_reduce(cli.parallel);
    let ranked = Pipeline::with_config(config).run(&records)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &ranked)?;

    if cli.chart {
        writeln!(out)?;
        write_chart(&mut out, &ranked, cli.top)?;
    }
    if let Some(path) = &cli.csv {
        write_csv_path(path, &ranked)?;
    }

    Ok(())
}
