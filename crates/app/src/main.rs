use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::Clock;
use services::{QuizConfig, SurveyService};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { raw: String },
    InvalidConfigPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::InvalidConfigPath { raw } => write!(f, "invalid --config value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_seed(raw: String) -> Result<u64, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidSeed { raw })
}

struct DesktopApp {
    survey_service: Arc<SurveyService>,
}

impl UiApp for DesktopApp {
    fn survey_service(&self) -> Arc<SurveyService> {
        Arc::clone(&self.survey_service)
    }
}

struct Args {
    config_path: Option<PathBuf>,
    seed: Option<u64>,
    no_shuffle: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--config <path>] [--seed <n>] [--no-shuffle]");
    eprintln!("  cargo run -p app -- check [--config <path>]");
    eprintln!();
    eprintln!("Without --config the built-in question set is used.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_CONFIG, QUIZ_SEED, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut config_path = std::env::var("QUIZ_CONFIG")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let mut seed = match std::env::var("QUIZ_SEED") {
            Ok(value) if !value.trim().is_empty() => Some(parse_seed(value)?),
            _ => None,
        };
        let mut no_shuffle = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let value = require_value(args, "--config")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidConfigPath { raw: value });
                    }
                    config_path = Some(PathBuf::from(value));
                }
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    seed = Some(parse_seed(value)?);
                }
                "--no-shuffle" => no_shuffle = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            config_path,
            seed,
            no_shuffle,
        })
    }

    /// Command-line flags win over the file.
    fn apply(&self, config: &mut QuizConfig) {
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if self.no_shuffle {
            config.shuffle = false;
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the UI.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let mut config = QuizConfig::load_or_builtin(parsed.config_path.as_deref())?;
    parsed.apply(&mut config);

    match cmd {
        Command::Check => {
            config.validate()?;
            for (category, count) in config.category_counts() {
                tracing::info!(category = %category, count, "questions");
            }
            tracing::info!(
                title = %config.title,
                questions = config.questions.len(),
                options = config.options.len(),
                "configuration ok"
            );
            Ok(())
        }
        Command::Ui => {
            let service = SurveyService::from_config(&config, Clock::system())?;
            let title = service.title().to_string();
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                survey_service: Arc::new(service),
            });
            let context = build_app_context(&app);

            // Some tao setups default to always-on-top; keep it a normal window.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(title)
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        // Binary glue: print once and exit.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
