use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

use fibroscreen_cli::commands::{self, CatalogKind, CompletedAssessment};
use fibroscreen_cli::config::{self, ExportFormat, FibroscreenConfig};
use fibroscreen_cli::form::FormArgs;
use fibroscreen_instruments::instruments::fm2010;

#[derive(Parser)]
#[command(name = "fibroscreen")]
#[command(about = "Fibromyalgia diagnostic criteria questionnaire")]
struct Cli {
    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a questionnaire and print the result
    Assess {
        #[command(flatten)]
        form: FormArgs,
        /// Output printed to stdout
        #[arg(long, value_enum, default_value_t = ExportFormat::Report)]
        format: ExportFormat,
        /// Also write the configured export files
        #[arg(long)]
        export: bool,
        /// Directory for --export, overriding the config
        #[arg(long, value_name = "DIR")]
        export_dir: Option<PathBuf>,
    },
    /// List a questionnaire catalog
    Catalog {
        #[arg(value_enum)]
        kind: CatalogKind,
        /// Instrument to describe for `catalog instrument`
        #[arg(long, default_value = fm2010::ID)]
        id: String,
    },
    /// Check an exported JSON record for range and consistency errors
    Verify {
        file: PathBuf,
    },
    /// Show or change the saved configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Set the directory `assess --export` writes to
    SetExportDir { dir: PathBuf },
    /// Set the formats `assess --export` writes
    SetFormats {
        #[arg(value_enum, required = true)]
        formats: Vec<ExportFormat>,
    },
    /// Use a Tera template for text reports (omit to restore the built-in one)
    SetTemplate { path: Option<PathBuf> },
    /// Delete the saved configuration
    Reset,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cli.log_json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    match cli.command {
        Commands::Assess {
            form,
            format,
            export,
            export_dir,
        } => {
            let config = config::load_or_default()?;
            let input = form.into_input()?;
            let completed = CompletedAssessment::new(input, jiff::Zoned::now().datetime());

            print!("{}", completed.render(format, &config)?);
            if format == ExportFormat::Json {
                println!();
            }

            if export {
                let dir = export_dir.unwrap_or_else(|| config.export_dir());
                for path in completed.write_exports(&dir, &config)? {
                    eprintln!("wrote {}", path.display());
                }
            }
        }
        Commands::Catalog { kind, id } => {
            print!("{}", commands::catalog_text(kind, &id)?);
        }
        Commands::Verify { file } => {
            let record = commands::verify_file(&file)?;
            println!(
                "{}: OK (assessed {}, WPI {}, SS {}, {})",
                file.display(),
                record.assessment_date,
                record.wpi_score,
                record.total_ss_score,
                if record.meets_diagnostic_criteria {
                    "meets criteria"
                } else {
                    "does not meet criteria"
                }
            );
        }
        Commands::Config { action } => run_config(action)?,
    }

    Ok(())
}

fn run_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = config::load_or_default()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::SetExportDir { dir } => {
            update_config(|config| config.export_dir = Some(dir))?;
        }
        ConfigAction::SetFormats { formats } => {
            update_config(|config| config.export_formats = formats)?;
        }
        ConfigAction::SetTemplate { path } => {
            update_config(|config| config.report_template = path)?;
        }
        ConfigAction::Reset => config::delete_config()?,
    }
    Ok(())
}

fn update_config(change: impl FnOnce(&mut FibroscreenConfig)) -> Result<()> {
    let mut config = config::load_or_default()?;
    change(&mut config);
    config::save_config(&config)?;
    Ok(())
}
