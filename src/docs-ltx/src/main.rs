use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use docs_ltx::{
    GeneratorOptions, LtxError, OPEN_RESPONSES, PageSelection, generate_llms_txt, logging, source_from_options,
    validate_llms_txt_file,
};

#[derive(Parser)]
#[command(name = "docs-ltx")]
#[command(about = "Builds the llms.txt for the Open Responses documentation", long_about = None)]
struct DocsCli {
    #[command(subcommand)]
    command: Commands,
    /// Log debug output (per-page harvest counts). RUST_LOG takes precedence.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate llms.txt from the live documentation site (or a local docs directory)
    Generate(GenerateArgs),

    /// Validate that a file is a valid llms.txt.
    Validate {
        #[arg(short, long, value_parser = validate_input_file)]
        file: PathBuf,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Output file path for the generated llms.txt [env: LLMS_TXT_OUTPUT, default: public/llms.txt]
    #[arg(short, long, value_parser = validate_output_file)]
    output: Option<PathBuf>,

    /// Root URL of the documentation site [env: LLMS_TXT_SITE_ROOT]
    #[arg(long, value_parser = validate_url)]
    site_root: Option<url::Url>,

    /// Harvest every known page instead of only the specification page.
    #[arg(long)]
    all_pages: bool,

    /// Read markdown/MDX files from this directory instead of fetching the site.
    #[arg(long, value_parser = validate_input_dir)]
    docs_dir: Option<PathBuf>,

    /// Per-request timeout in seconds [env: LLMS_TXT_TIMEOUT_S, default: none]
    #[arg(long)]
    timeout_s: Option<u64>,
}

fn validate_url(s: &str) -> Result<url::Url, String> {
    url::Url::parse(s).map_err(|e| format!("Invalid URL: {}", e))
}

fn validate_input_file(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);

    if !path.exists() {
        return Err(format!("Input path does not exist: {}", path.display()));
    }

    if !path.is_file() {
        return Err(format!("Input path is not a file: {}", path.display()));
    }

    Ok(path)
}

fn validate_input_dir(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);

    if !path.is_dir() {
        return Err(format!("Documentation path is not a directory: {}", path.display()));
    }

    Ok(path)
}

fn validate_output_file(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);

    if path.exists() && path.is_dir() {
        return Err(format!("Output path is a directory: {}", path.display()));
    }

    Ok(path)
}

/// Environment defaults, overridden by whatever was given on the command line.
fn generator_options(args: GenerateArgs) -> Result<GeneratorOptions, LtxError> {
    let mut builder = GeneratorOptions::builder_from_env()?;

    if let Some(output) = args.output {
        builder = builder.output(output);
    }
    if let Some(site_root) = args.site_root {
        builder = builder.site_root(site_root);
    }
    if args.all_pages {
        builder = builder.pages(PageSelection::All);
    }
    if let Some(docs_dir) = args.docs_dir {
        builder = builder.docs_dir(docs_dir);
    }
    if let Some(timeout_s) = args.timeout_s {
        builder = builder.timeout(Duration::from_secs(timeout_s));
    }

    Ok(builder.build())
}

async fn generate(args: GenerateArgs) -> Result<(), LtxError> {
    let options = generator_options(args)?;
    match &options.docs_dir {
        Some(dir) => tracing::info!("Generating llms.txt from documentation files in {}", dir.display()),
        None => tracing::info!("Generating llms.txt from live website documentation at {}", options.site_root),
    }

    let source = source_from_options(&options)?;
    let report = generate_llms_txt(&*source, &OPEN_RESPONSES, &options).await?;

    tracing::info!(
        "llms.txt generation completed successfully! Structure: 1 H1 + blockquote + {} H2 sections",
        report.validation.h2_count
    );
    tracing::info!("Generated file location: {}", report.output.display());
    tracing::info!("File size: {} bytes", report.bytes);
    Ok(())
}

async fn validate(file: &Path) -> Result<(), LtxError> {
    let report = validate_llms_txt_file(file).await?;
    report.log();
    report.into_result()?;
    tracing::info!("Valid llms.txt file: {}", file.display());
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load environment variables from .env file, if it exists
    dotenvy::dotenv().ok();

    let cli = DocsCli::parse();
    logging::setup_logging(cli.verbose);

    let outcome = match cli.command {
        Commands::Generate(args) => generate(args).await,
        Commands::Validate { file } => validate(&file).await,
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
