// Congkit database generator CLI
// Builds the radicals database from the built-in or a custom table

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::*;
use congkit::builder::{read_builtin_table, read_table_file, DbGenerator, GeneratorConfig};
use congkit::utils::ProgressState;

/// Generate the Congkit radicals database
#[derive(Parser, Debug)]
#[command(name = "congkit-db-generator")]
#[command(about = "Generate the Cangjie radicals SQLite database", long_about = None)]
struct Args {
    /// Cangjie source table file path (built-in table when omitted)
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Target database file path (congkit.db in the current directory when omitted)
    #[arg(short, long)]
    target: Option<PathBuf>,

    /// JSON generator configuration file; flags take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Merges the optional JSON configuration with the command line flags.
///
/// A relative target is resolved against `cwd`.
fn build_config(args: &Args, cwd: &Path) -> congkit::Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::from_json_file(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(source) = &args.source {
        config.source = Some(source.clone());
    }
    if let Some(target) = &args.target {
        config.target = target.clone();
    }
    if config.target.is_relative() {
        config.target = cwd.join(&config.target);
    }
    Ok(config)
}

fn report_progress(state: &mut ProgressState) -> bool {
    info!("{}: {}/{}", state.state_id, state.current + 1, state.total);
    false
}

fn run(config: &GeneratorConfig) -> congkit::Result<()> {
    let rows = match &config.source {
        Some(source) => {
            println!("Using provided Cangjie radicals table {}", source.display());
            read_table_file(source)?
        }
        None => {
            println!("Using built-in Cangjie radicals table");
            read_builtin_table()?
        }
    };

    println!("Target database file path: {}", config.target.display());
    let stats = DbGenerator::generate(&rows, &config.target, Some(report_progress))?;
    println!("Generated {} characters with {} radical codes", stats.characters, stats.radicals);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            eprintln!("Cannot get current working directory: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let config = match build_config(&args, &cwd) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed loading generator configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Failed generating Cangjie database file: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use congkit::builder::DEFAULT_TARGET;

    #[test]
    fn test_default_target_in_working_directory() {
        let args = Args::parse_from(["congkit-db-generator"]);
        let config = build_config(&args, Path::new("/work")).unwrap();
        assert_eq!(config.source, None);
        assert_eq!(config.target, Path::new("/work").join(DEFAULT_TARGET));
    }

    #[test]
    fn test_config_file_and_flag_precedence() {
        let dir = tempfile::TempDir::new().unwrap();
        let config_path = dir.path().join("generator.json");
        std::fs::write(&config_path, r#"{"source": "/data/table.txt", "target": "/data/cj.db"}"#).unwrap();
        let config_arg = config_path.to_str().unwrap();

        let args = Args::parse_from(["congkit-db-generator", "-c", config_arg]);
        let config = build_config(&args, Path::new("/work")).unwrap();
        assert_eq!(config.source, Some(PathBuf::from("/data/table.txt")));
        assert_eq!(config.target, PathBuf::from("/data/cj.db"));

        let args = Args::parse_from(["congkit-db-generator", "-c", config_arg, "-t", "out.db"]);
        let config = build_config(&args, Path::new("/work")).unwrap();
        assert_eq!(config.source, Some(PathBuf::from("/data/table.txt")));
        assert_eq!(config.target, PathBuf::from("/work/out.db"));
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let args = Args::parse_from(["congkit-db-generator", "-c", "/nonexistent/generator.json"]);
        assert!(build_config(&args, Path::new("/work")).is_err());
    }
}
