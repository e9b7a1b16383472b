use std::fs;
use std::io::Write;
use std::path::Path;

use clap::Parser;

use h5lint::cli::Cli;
use h5lint::config::{Config, ConfigLoader, FileConfigLoader};
use h5lint::output::{ColorMode, ErrorOutput, ScanProgress};
use h5lint::reader::SnapshotReader;
use h5lint::{EXIT_FATAL, H5LintError, Scanner, exit_code};

fn main() {
    let cli = Cli::parse();
    h5lint::logging::init(cli.verbose, cli.quiet);

    let code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::warn!(error = %e, "aborting");
            ErrorOutput::new(cli.color.into()).print(&e);
            EXIT_FATAL
        }
    };
    std::process::exit(code);
}

fn run(cli: &Cli) -> h5lint::Result<i32> {
    let config = load_config(cli.config.as_deref(), cli.no_config)?;

    let reader = SnapshotReader::open(&cli.file)?;
    let size_bytes = fs::metadata(&cli.file).ok().map(|m| m.len());
    let file = cli.file.display().to_string();

    let scanner = Scanner::new(&config.scan).with_progress(ScanProgress::new(cli.quiet));
    let report = scanner.scan(&reader, &file, size_bytes)?;

    let color = if cli.output.is_some() {
        ColorMode::Never
    } else {
        cli.color.into()
    };
    let rendered = cli.format.formatter(color).format(&report)?;
    write_report(&rendered, cli.output.as_deref())?;

    Ok(exit_code(&report, cli.soft_fail || config.report.soft_fail))
}

fn load_config(path: Option<&Path>, no_config: bool) -> h5lint::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }
    let loader = FileConfigLoader::new();
    match path {
        Some(path) => loader.load_from_path(path),
        None => loader.load(),
    }
}

fn write_report(rendered: &str, output: Option<&Path>) -> h5lint::Result<()> {
    match output {
        Some(path) => fs::write(path, format!("{rendered}\n")).map_err(|source| {
            H5LintError::FileAccess {
                path: path.to_path_buf(),
                source,
            }
        }),
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{rendered}")?;
            stdout.flush()?;
            Ok(())
        }
    }
}
