//! Resume scorer: match a PDF resume against a keyword skill catalog

use clap::Parser;
use indicatif::ProgressBar;
use log::{error, info};
use resume_scorer::cli::{self, Cli, Commands, ConfigAction};
use resume_scorer::config::{Config, OutputFormat};
use resume_scorer::error::{Result, ResumeScorerError};
use resume_scorer::input::catalog::{LoadedCatalog, SkillCatalog};
use resume_scorer::input::manager::InputManager;
use resume_scorer::output::formatter::{save_artifact, ReportGenerator, StatusPrinter};
use resume_scorer::output::report::build_artifacts;
use resume_scorer::processing::pipeline::ScoringPipeline;
use resume_scorer::processing::session::AnalysisSession;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level)
    ).init();

    // Load configuration
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if !config.output.color_output {
        colored::control::set_override(false);
    }

    // Execute command
    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Score {
            resume,
            skills,
            out_dir,
            no_save,
            format,
            preview,
        } => {
            info!("Starting resume scoring");

            let output_format = match format {
                Some(format) => cli::parse_output_format(&format).map_err(ResumeScorerError::InvalidInput)?,
                None => config.output.format,
            };
            let status = StatusPrinter::for_format(output_format);

            let catalog_path = skills.unwrap_or_else(|| config.skills.catalog_path.clone());
            let loaded = load_catalog(&catalog_path, status);
            let catalog = loaded.catalog;

            let input_manager = InputManager::new();
            let upload = input_manager.read_upload(&resume).await?;
            status.line(format_args!("📄 File: {} | Size: {:.1} KB", upload.filename, upload.size_kb()));

            let pipeline = ScoringPipeline::new(&catalog, config.extraction.min_text_chars);
            let mut session = AnalysisSession::new();

            let spinner = ProgressBar::new_spinner();
            spinner.set_message("Extracting text...");
            spinner.enable_steady_tick(Duration::from_millis(100));
            let scored = pipeline.score_upload(&input_manager, &upload, &mut session).await;
            spinner.finish_and_clear();

            let record = match scored {
                Ok(record) => record,
                Err(e) => {
                    if e.is_upload_blocking() {
                        status.line(format_args!("❌ {}", e));
                    }
                    return Err(e);
                }
            };

            let preview_chars = preview.then_some(config.extraction.preview_chars);
            let generator = ReportGenerator::new(config.output.color_output, preview_chars);
            println!("{}", generator.generate(record, output_format)?);

            if no_save || !config.output.save_reports {
                info!("Skipping report files");
                return Ok(());
            }

            let out_dir = out_dir.unwrap_or_else(|| config.output.output_dir.clone());
            status.line("\n💾 Downloads");
            for artifact in build_artifacts(record) {
                let path = save_artifact(&out_dir, &artifact)?;
                status.line(format_args!("  📥 {} ({})", path.display(), artifact.mime));
            }
        }

        Commands::Skills { skills } => {
            let catalog_path = skills.unwrap_or_else(|| config.skills.catalog_path.clone());
            let loaded = load_catalog(&catalog_path, StatusPrinter::for_format(OutputFormat::Console));

            println!("📚 Skills from {}\n", loaded.source);
            for (i, skill) in loaded.catalog.iter().enumerate() {
                println!("  {}. {}", i + 1, skill);
            }
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration\n");
                    println!("Skill Catalog: {}", config.skills.catalog_path.display());
                    println!("Minimum Text Length: {} characters", config.extraction.min_text_chars);
                    println!("Preview Length: {} characters", config.extraction.preview_chars);
                    println!("Output Directory: {}", config.output.output_dir.display());
                    println!("Output Format: {:?}", config.output.format);
                    println!("Save Reports: {}", config.output.save_reports);
                    println!("Color Output: {}", config.output.color_output);
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::default().save_to(&path)?;
                    println!("✅ Configuration reset successfully!");
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}

/// Load the catalog, telling the user when defaults are in use
fn load_catalog(path: &Path, status: StatusPrinter) -> LoadedCatalog {
    let loaded = SkillCatalog::load(path);
    match &loaded.warning {
        Some(warning) => status.line(format_args!("⚠️  {}", warning)),
        None => status.line(format_args!("✅ Loaded {} skills", loaded.catalog.len())),
    }
    loaded
}
