//! $POLN Tokenomics CLI
//!
//! Command-line interface for running tokenomics simulations.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use poln_economics::{
    run_horizons, SimError, SimulationConfig, DEFAULT_CONFIG_FILE, DEFAULT_RESULTS_DIR, NAME, SYMBOL,
};
use poln_report::{interpretation, ReportWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Exit status for a rejected configuration
const EXIT_INVALID_INPUT: u8 = 2;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "poln")]
#[command(version)]
#[command(about = "$POLN tokenomics simulator - monthly projection of supply, price, staking and treasury", long_about = None)]
struct Cli {
    /// Defaults to `run` with default options
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every configured horizon and write results
    Run {
        /// Configuration file path (TOML or JSON)
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Results directory
        #[arg(short, long, default_value = DEFAULT_RESULTS_DIR)]
        output: PathBuf,

        /// Override the PRNG seed
        #[arg(long)]
        seed: Option<u64>,

        /// Override the horizons (repeatable)
        #[arg(long = "years")]
        years: Vec<u32>,

        /// Skip chart rendering
        #[arg(long)]
        no_charts: bool,
    },

    /// Write the default configuration
    Init {
        /// Output file
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        output: PathBuf,

        /// File format; inferred from the extension when omitted
        #[arg(long, value_enum)]
        format: Option<ConfigFormat>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Load and validate a configuration
    Validate {
        /// Configuration file path (TOML or JSON)
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false))
        .init();
}

/// Load `path` if it exists, built-in defaults otherwise (env overrides apply to both)
fn load_config(path: &Path) -> anyhow::Result<SimulationConfig> {
    if path.exists() {
        SimulationConfig::load(Some(path)).with_context(|| format!("loading {}", path.display()))
    } else {
        tracing::info!("Config {} not found, using defaults", path.display());
        Ok(SimulationConfig::load(None)?)
    }
}

fn run(
    config_path: &Path,
    output: &Path,
    seed: Option<u64>,
    years: Vec<u32>,
    charts: bool,
) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(seed) = seed {
        config.simulation.seed = seed;
    }
    if !years.is_empty() {
        config.simulation.years = years;
    }
    config.validate()?;

    tracing::info!(
        "{} ({}) simulation: horizons {:?}, seed {}",
        NAME,
        SYMBOL,
        config.simulation.years,
        config.simulation.seed
    );

    let writer = ReportWriter::new(output).with_charts(charts);
    for run in run_horizons(&config)? {
        println!(
            "\nSimulating {} years ({} months)...",
            run.years,
            run.records.len()
        );
        let artifacts = writer
            .write_run(&run)
            .with_context(|| format!("writing results to {}", output.display()))?;
        println!("{}", interpretation(&run));
        println!("CSV: {}", artifacts.csv.display());
        if let Some(chart) = &artifacts.chart {
            println!("Chart: {}", chart.display());
        }
    }
    Ok(())
}

fn init(output: &Path, format: Option<ConfigFormat>, force: bool) -> anyhow::Result<()> {
    if output.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", output.display());
    }
    let config = SimulationConfig::default();
    let content = match format.unwrap_or_else(|| ConfigFormat::for_path(output)) {
        ConfigFormat::Toml => config.to_toml_string()?,
        ConfigFormat::Json => config.to_json_string()?,
    };
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output, content).with_context(|| format!("writing {}", output.display()))?;

    println!("Default configuration written to {}", output.display());
    Ok(())
}

fn validate(config_path: &Path) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let sim = &config.simulation;

    println!("Configuration OK");
    println!("Horizons: {:?} years ({} months per year)", sim.years, sim.months_per_year);
    println!("Seed: {}", sim.seed);
    println!("Total supply: {:.0} {}", config.token.total_supply, SYMBOL);
    println!("Initial price: ${}", config.token.initial_price);
    println!("Growth model: {:?}", config.growth.model);
    println!("Private sale tranches: {}", config.private_sales.len());
    Ok(())
}

/// 2 when the configuration was rejected, 1 for any other failure
fn exit_status(err: &anyhow::Error) -> u8 {
    let bad_input = err
        .chain()
        .filter_map(|cause| cause.downcast_ref::<SimError>())
        .any(SimError::is_input_error);
    if bad_input {
        EXIT_INVALID_INPUT
    } else {
        1
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli.command.unwrap_or_else(|| Commands::Run {
        config: PathBuf::from(DEFAULT_CONFIG_FILE),
        output: PathBuf::from(DEFAULT_RESULTS_DIR),
        seed: None,
        years: Vec::new(),
        no_charts: false,
    });

    let result = match command {
        Commands::Run {
            config,
            output,
            seed,
            years,
            no_charts,
        } => run(&config, &output, seed, years, !no_charts),

        Commands::Init { output, format, force } => init(&output, format, force),

        Commands::Validate { config } => validate(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let status = exit_status(&err);
            if status == EXIT_INVALID_INPUT {
                eprintln!("Invalid configuration: {:#}", err);
            } else {
                eprintln!("Error: {:#}", err);
            }
            ExitCode::from(status)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_overrides() {
        let cli = Cli::parse_from(["poln", "run", "--seed", "7", "--years", "2", "--years", "4", "--no-charts"]);
        match cli.command {
            Some(Commands::Run { seed, years, no_charts, config, .. }) => {
                assert_eq!(seed, Some(7));
                assert_eq!(years, vec![2, 4]);
                assert!(no_charts);
                assert_eq!(config, PathBuf::from(DEFAULT_CONFIG_FILE));
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_bare_invocation() {
        let cli = Cli::parse_from(["poln"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ConfigFormat::for_path(Path::new("a.json")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::for_path(Path::new("a.toml")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::for_path(Path::new("noext")), ConfigFormat::Toml);
    }

    #[test]
    fn test_init_then_run() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("poln.toml");
        let results = dir.path().join("results");

        init(&config_path, None, false).unwrap();
        assert!(init(&config_path, None, false).is_err());
        init(&config_path, None, true).unwrap();

        let loaded = load_config(&config_path).unwrap();
        assert_eq!(loaded, SimulationConfig::default());

        run(&config_path, &results, Some(1), vec![1], false).unwrap();
        assert!(results.join("simulation_1y.csv").exists());
        assert!(results.join("summary_1y.json").exists());
        assert!(!results.join("simulation_3y.csv").exists());
    }

    #[test]
    fn test_init_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("poln.json");
        init(&path, None, false).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed = SimulationConfig::from_json_str(&content).unwrap();
        assert_eq!(parsed.simulation.years, vec![1, 3, 5]);
    }

    #[test]
    fn test_exit_status_separates_bad_input() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("bad.toml");
        std::fs::write(&config_path, "[fees]\nstaking_rate = 1.5\n").unwrap();

        let err = validate(&config_path).unwrap_err();
        assert_eq!(exit_status(&err), EXIT_INVALID_INPUT);

        let err = run(&config_path, dir.path(), None, vec![0], false).unwrap_err();
        assert_eq!(exit_status(&err), EXIT_INVALID_INPUT);

        std::fs::write(&config_path, "[fees\n").unwrap();
        let err = validate(&config_path).unwrap_err();
        assert_eq!(exit_status(&err), EXIT_INVALID_INPUT);

        init(&config_path, None, true).unwrap();
        let err = init(&config_path, None, false).unwrap_err();
        assert_eq!(exit_status(&err), 1);

        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "").unwrap();
        let err = run(&config_path, &blocker.join("results"), None, vec![1], false).unwrap_err();
        assert_eq!(exit_status(&err), 1);
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.fees, SimulationConfig::default().fees);
    }
}
