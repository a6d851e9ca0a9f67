use anyhow::Context;
use clap::Parser;
use feature_report::cli::Cli;
use feature_report::config::ReportConfig;
use feature_report::error::ReportError;
use feature_report::runner;
use std::io::Write;

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("[ERROR] {:#}", e);
        if let Some(hint) = e.downcast_ref::<ReportError>().and_then(ReportError::hint) {
            eprintln!("  {}", hint);
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = ReportConfig::resolve(cli).context("設定の読み込みに失敗しました")?;
    let report = runner::generate_report(&config)?;
    print!("{}", report);
    Ok(())
}

fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, level),
    )
    .format(|buf, record| {
        writeln!(
            buf,
            "[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        )
    })
    .write_style(env_logger::WriteStyle::Never)
    .target(env_logger::Target::Stderr)
    .init();
}
