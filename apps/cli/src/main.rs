use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use landly_core::schema::{generate_schemas, PAGE_SCHEMA_SOURCE};
use landly_core::{BuildReport, LandlyConfig, Validated, ValidationError, Validator};
use landly_sitegen::{BuildOutput, StaticRenderer};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info, warn};
use uuid::Uuid;

mod starter;

use starter::{SchemaSource, StarterSchema};

#[derive(Parser)]
#[command(name = "landly")]
#[command(about = "Validate, normalize and render landing page schemas")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Config file (defaults to ./landly.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a schema and print the applied fixes
    Validate {
        /// Schema JSON file
        file: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Render an already normalized schema into a static site
    Render {
        /// Normalized schema JSON file
        file: PathBuf,
        /// Project id used as the build directory name
        #[arg(long)]
        project: Uuid,
        /// Root for build directories (overrides config)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Validate, normalize and render in one step
    Build {
        /// Schema JSON file
        file: PathBuf,
        /// Project id; a random one is generated when omitted
        #[arg(long)]
        project: Option<Uuid>,
        /// Root for build directories (overrides config)
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Generate a starter schema from a prompt
    Starter {
        /// What the landing page is about
        #[arg(long)]
        prompt: String,
        /// Payment link used by pricing and call-to-action buttons
        #[arg(long)]
        payment_url: Option<String>,
        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print JSON schemas
    Schema {
        #[arg(value_enum, default_value_t = SchemaKind::Page)]
        kind: SchemaKind,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SchemaKind {
    /// The page schema documents are checked against
    Page,
    /// Schemas of the JSON reports printed by this tool
    Reports,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("✗ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = LandlyConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    init_tracing(&config.logging.level);
    debug!(
        locale = %config.app.locale,
        out_dir = %config.render.out_dir.display(),
        "configuration loaded"
    );

    match cli.command {
        Commands::Validate { file, format } => validate(&config, &file, format).map(exit_code),
        Commands::Render { file, project, out_dir } => {
            let schema = fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let output = render(&config, out_dir, &project, &schema)?;
            println!("✓ Rendered {} files into {}", output.files.len(), output.build_dir.display());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Build {
            file,
            project,
            out_dir,
            format,
        } => build(&config, &file, project, out_dir, format).map(exit_code),
        Commands::Starter {
            prompt,
            payment_url,
            output,
        } => {
            let payment_url = payment_url.as_deref().unwrap_or_default();
            let schema = StarterSchema.generate_landing_schema(&prompt, payment_url)?;
            match output {
                Some(path) => {
                    fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    info!(path = %path.display(), bytes = schema.len(), "starter schema written");
                }
                None => println!("{}", schema),
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Schema { kind } => {
            match kind {
                SchemaKind::Page => println!("{}", PAGE_SCHEMA_SOURCE.trim_end()),
                SchemaKind::Reports => {
                    let schemas = generate_schemas().context("failed to generate report schemas")?;
                    println!("{}", serde_json::to_string_pretty(&schemas)?);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn exit_code(passed: bool) -> ExitCode {
    if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn init_tracing(level: &str) {
    let level = level.trim().parse::<tracing::Level>().unwrap_or(tracing::Level::INFO);
    // stdout carries command output; logs go to stderr
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn validator(config: &LandlyConfig) -> Result<Validator> {
    let validator = Validator::with_options(config.limits, config.app.locale)
        .context("failed to prepare validator")?;
    let limits = validator.limits();
    debug!(
        locale = %validator.locale(),
        title_max = limits.title_max,
        description_max = limits.description_max,
        min_feature_items = limits.min_feature_items,
        "validator ready"
    );
    Ok(validator)
}

fn read_schema(file: &Path) -> Result<Vec<u8>> {
    fs::read(file).with_context(|| format!("failed to read {}", file.display()))
}

/// Returns whether the schema passed
fn validate(config: &LandlyConfig, file: &Path, format: OutputFormat) -> Result<bool> {
    let validator = validator(config)?;
    let raw = read_schema(file)?;

    if format == OutputFormat::Json {
        let report = validator.report(&raw);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(report.valid);
    }

    match validator.validate(&raw) {
        Ok(validated) => {
            print_findings(&validated);
            println!("✓ {} is valid", file.display());
            Ok(true)
        }
        Err(e) => {
            report_failure(file, &e);
            Ok(false)
        }
    }
}

fn build(
    config: &LandlyConfig,
    file: &Path,
    project: Option<Uuid>,
    out_dir: Option<PathBuf>,
    format: OutputFormat,
) -> Result<bool> {
    let validator = validator(config)?;
    let raw = read_schema(file)?;

    let validated = match validator.validate(&raw) {
        Ok(validated) => validated,
        Err(e) => {
            report_failure(file, &e);
            return Ok(false);
        }
    };

    let project = project.unwrap_or_else(Uuid::new_v4);
    let output = render(config, out_dir, &project, &validated.normalized)?;

    match format {
        OutputFormat::Json => {
            let report = BuildReport {
                project_id: project.to_string(),
                build_dir: output.build_dir.display().to_string(),
                files: output.files,
                auto_fixes: validated.auto_fixes,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            print_findings(&validated);
            println!("✓ Built project {} into {}", project, output.build_dir.display());
            for file in &output.files {
                println!("  {}", file);
            }
        }
    }
    Ok(true)
}

fn render(
    config: &LandlyConfig,
    out_dir: Option<PathBuf>,
    project: &Uuid,
    schema: &str,
) -> Result<BuildOutput> {
    let out_root = out_dir.unwrap_or_else(|| config.render.out_dir.clone());
    let renderer = StaticRenderer::new(out_root).with_locale(config.app.locale);

    info!(project = %project, out_root = %renderer.out_root().display(), "rendering site");
    let output = renderer
        .render_static(project, schema)
        .with_context(|| format!("failed to render project {}", project))?;
    info!(files = output.files.len(), build_dir = %output.build_dir.display(), "site rendered");
    Ok(output)
}

fn print_findings(validated: &Validated) {
    if !validated.auto_fixes.is_empty() {
        println!("Applied fixes:");
        for fix in &validated.auto_fixes {
            println!("  {}", fix);
        }
    }
    for warning in &validated.warnings {
        warn!("{}", warning);
    }
}

fn report_failure(file: &Path, error: &ValidationError) {
    eprintln!("✗ {} failed validation: {}", file.display(), error);
    if let ValidationError::SchemaMismatch { violations } = error {
        for violation in violations {
            eprintln!("  {}: {}", violation.path, violation.message);
        }
    }
}
