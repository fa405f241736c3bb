use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use locale_translate::config::{self, Config};
use locale_translate::i18n::{resolve_locales, LanguageRegistry};
use locale_translate::{pipeline, scaffold};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(
    name = "locale-translate",
    about = "Regenerate localized JSON string tables from one source file",
    version,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    translate: TranslateArgs,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Translate the source file into every target locale (default).
    Translate(TranslateArgs),

    /// Copy the source file to each target locale file that does not exist yet.
    Scaffold(LocaleArgs),

    /// Print the supported languages.
    Languages,
}

#[derive(Debug, Clone, Default, Args)]
struct LocaleArgs {
    /// Source string table (defaults to SOURCE_FILE or src/i18n/en.json)
    #[arg(long)]
    source: Option<PathBuf>,

    /// Comma-separated target locale codes (defaults to TARGET_LOCALES or every registered target)
    #[arg(long, value_delimiter = ',')]
    locales: Vec<String>,

    /// Accept locale codes missing from the registry
    #[arg(long)]
    allow_unregistered: bool,
}

#[derive(Debug, Clone, Default, Args)]
struct TranslateArgs {
    #[command(flatten)]
    locales: LocaleArgs,

    /// Pause between locales in milliseconds (defaults to REQUEST_DELAY_MS or 1000)
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,
}

impl LocaleArgs {
    fn apply(&self, config: &mut Config) {
        if let Some(source) = &self.source {
            config.source_file = source.clone();
        }
        if !self.locales.is_empty() {
            config.target_locales = config::parse_locale_list(&self.locales.join(","));
        }
        if self.allow_unregistered {
            config.allow_unregistered = true;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout carries only the summary
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("locale_translate=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Translate(args)) => translate(args).await,
        Some(Commands::Scaffold(args)) => run_scaffold(args),
        Some(Commands::Languages) => {
            print_languages();
            Ok(())
        }
        None => translate(cli.translate).await,
    }
}

async fn translate(args: TranslateArgs) -> Result<()> {
    info!("Starting locale translation run");

    // Refuses to start without the API credential
    let mut config = Config::from_env()?;
    args.locales.apply(&mut config);
    if let Some(delay_ms) = args.delay_ms {
        config.request_delay = Duration::from_millis(delay_ms);
    }

    let report = pipeline::run(&config).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("\n{}", report);
    }

    if report.all_succeeded() {
        info!("Translation complete");
    } else {
        warn!(
            "Translation complete with {} failed locale(s): {}",
            report.failed(),
            report.failed_locales().join(", ")
        );
    }
    Ok(())
}

fn run_scaffold(args: LocaleArgs) -> Result<()> {
    let source_file = args
        .source
        .clone()
        .unwrap_or_else(config::source_file_from_env);
    let codes = if args.locales.is_empty() {
        config::target_locales_from_env()
    } else {
        config::parse_locale_list(&args.locales.join(","))
    };

    let locales = resolve_locales(&codes, args.allow_unregistered)?;
    let output_dir = config::output_dir_for(&source_file);

    let summary = scaffold::scaffold(&source_file, &output_dir, &locales)?;
    println!(
        "Created {} file(s), kept {} existing file(s)",
        summary.created.len(),
        summary.skipped.len()
    );
    Ok(())
}

fn print_languages() {
    for lang in LanguageRegistry::get().list_all() {
        let marker = if lang.is_canonical { " (source)" } else { "" };
        println!("{:<4} {:<12} {}{}", lang.code, lang.name, lang.native_name, marker);
    }
}
