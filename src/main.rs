use clap::Parser;
use env_logger::Env;
use log::LevelFilter;

use metric_delta::cli::{Cli, Commands};
use metric_delta::commands::{run_diff, run_list_metrics, run_snapshot};

const fn log_level(cli: &Cli) -> LevelFilter {
    if cli.quiet {
        return LevelFilter::Off;
    }
    match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(cli: &Cli) {
    let level = log_level(cli);
    env_logger::Builder::from_env(Env::default().filter_or("RUST_LOG", level.as_str()))
        .format_timestamp(None)
        .format_module_path(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let exit_code = match &cli.command {
        Commands::Diff(args) => run_diff(args, &cli),
        Commands::Snapshot(args) => run_snapshot(args, &cli),
        Commands::ListMetrics => run_list_metrics(&cli),
    };

    std::process::exit(exit_code);
}
