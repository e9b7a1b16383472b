use std::path::PathBuf;

use clap::CommandFactory;

use super::*;

#[test]
fn cli_is_well_formed() {
    Cli::command().debug_assert();
}

#[test]
fn file_only_uses_defaults() {
    let cli = Cli::parse_from(["h5lint", "data.json"]);

    assert_eq!(cli.file, PathBuf::from("data.json"));
    assert!(!cli.soft_fail);
    assert_eq!(cli.format, OutputFormat::Json);
    assert_eq!(cli.color, ColorChoice::Auto);
    assert!(cli.config.is_none());
    assert!(cli.output.is_none());
    assert_eq!(cli.verbose, 0);
}

#[test]
fn soft_fail_flag() {
    let cli = Cli::parse_from(["h5lint", "data.json", "--soft-fail"]);
    assert!(cli.soft_fail);
}

#[test]
fn format_output_and_config() {
    let cli = Cli::parse_from([
        "h5lint", "data.json", "-f", "text", "-o", "report.txt", "-c", "lint.toml",
    ]);

    assert_eq!(cli.format, OutputFormat::Text);
    assert_eq!(cli.output, Some(PathBuf::from("report.txt")));
    assert_eq!(cli.config, Some(PathBuf::from("lint.toml")));
}

#[test]
fn verbosity_counts() {
    let cli = Cli::parse_from(["h5lint", "-vvv", "data.json"]);
    assert_eq!(cli.verbose, 3);
}

#[test]
fn config_conflicts_with_no_config() {
    let result = Cli::try_parse_from(["h5lint", "data.json", "-c", "a.toml", "--no-config"]);
    assert!(result.is_err());
}

#[test]
fn file_is_required() {
    assert!(Cli::try_parse_from(["h5lint"]).is_err());
}

#[test]
fn unknown_format_is_rejected() {
    assert!(Cli::try_parse_from(["h5lint", "data.json", "--format", "sarif"]).is_err());
}

#[test]
fn color_choice_maps_to_mode() {
    assert_eq!(ColorMode::from(ColorChoice::Never), ColorMode::Never);
    assert_eq!(ColorMode::from(ColorChoice::Always), ColorMode::Always);
}
