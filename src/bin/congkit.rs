// Congkit lookup CLI
// Prints the characters matching a radical code

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use congkit::{CongkitVersion, Engine, EngineConfig, MatchMode, OutputScript};

/// Look up Chinese characters by Cangjie/Congkit radical codes
#[derive(Parser, Debug)]
#[command(name = "congkit")]
#[command(about = "Look up Chinese characters by Cangjie radical codes", long_about = None)]
struct Args {
    /// Radical code, e.g. "oiar"
    #[arg(value_name = "RADICALS")]
    radicals: String,

    /// Cangjie version (3/5) [default: 5]
    #[arg(short = 'v', long = "version")]
    version: Option<i64>,

    /// Output simplified Chinese characters
    #[arg(short, long)]
    simplified: bool,

    /// Use "easy" input: first and second key only
    #[arg(short, long)]
    easy: bool,

    /// Predict characters whose code starts with the input
    #[arg(short, long)]
    prediction: bool,

    /// Database file path [default: ./congkit.db]
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// JSON engine configuration, overridden by the flags above
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn build_config(args: &Args) -> congkit::Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::from_json_file(path)?,
        None => EngineConfig::default(),
    };
    if let Some(database) = &args.database {
        config.db_path = database.clone();
    }
    if let Some(version) = args.version {
        config.options.version = CongkitVersion::from_number(version);
    }
    if args.simplified {
        config.options.output = OutputScript::Simplified;
    }
    // Prediction is applied after easy and wins when both are given
    if args.easy {
        config.options.mode = MatchMode::Easy;
    }
    if args.prediction {
        config.options.mode = MatchMode::Prediction;
    }
    Ok(config)
}

fn run(args: &Args) -> congkit::Result<Vec<char>> {
    let engine = Engine::new(build_config(args)?)?;
    let results = engine.encode(&args.radicals)?;
    engine.close()?;
    Ok(results)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(results) => {
            let glyphs: Vec<String> = results.iter().map(char::to_string).collect();
            println!("[{}]", glyphs.join(" "));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &std::path::Path, json: &str) -> PathBuf {
        let path = dir.join("congkit.json");
        std::fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_config_file_values_are_kept_without_flags() {
        let dir = tempfile::TempDir::new().unwrap();
        let config_path = write_config(dir.path(), r#"{"db_path": "/data/cj.db", "version": 3, "mode": "easy"}"#);

        let args = Args::parse_from(["congkit", "-c", config_path.to_str().unwrap(), "oiln"]);
        let config = build_config(&args).unwrap();
        assert_eq!(config.db_path, PathBuf::from("/data/cj.db"));
        assert_eq!(config.options.version, CongkitVersion::V3);
        assert_eq!(config.options.mode, MatchMode::Easy);
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let config_path = write_config(dir.path(), r#"{"db_path": "/data/cj.db", "version": 3}"#);

        let args = Args::parse_from([
            "congkit", "-c", config_path.to_str().unwrap(), "-d", "other.db", "-v", "5", "-s", "-e", "-p", "oiln",
        ]);
        let config = build_config(&args).unwrap();
        assert_eq!(config.db_path, PathBuf::from("other.db"));
        assert_eq!(config.options.version, CongkitVersion::V5);
        assert_eq!(config.options.output, OutputScript::Simplified);
        assert_eq!(config.options.mode, MatchMode::Prediction);
    }

    #[test]
    fn test_defaults_without_config_file() {
        let args = Args::parse_from(["congkit", "oiar"]);
        let config = build_config(&args).unwrap();
        assert_eq!(config, EngineConfig::default());
    }
}
