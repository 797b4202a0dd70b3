mod cli;

use cli::Args;
use sbom_flatten::adapters::outbound::console::{SilentProgressReporter, StderrProgressReporter};
use sbom_flatten::adapters::outbound::filesystem::{
    FileSystemReader, FileSystemWriter, StdoutPresenter, DEFAULT_EXTENSIONS,
};
use sbom_flatten::application::dto::{FlattenRequest, FlattenResponse, OutputFormat};
use sbom_flatten::application::factories::FormatterFactory;
use sbom_flatten::application::use_cases::FlattenSbomsUseCase;
use sbom_flatten::config::{self, ConfigFile};
use sbom_flatten::ports::outbound::{OutputPresenter, ProgressReporter};
use sbom_flatten::shared::error::{ExitCode, FlattenError};
use sbom_flatten::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    match run() {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Effective settings after merging CLI arguments over the config file
#[derive(Debug, Clone, PartialEq)]
struct RunSettings {
    root_path: PathBuf,
    output_path: Option<PathBuf>,
    format: OutputFormat,
    fail_fast: bool,
    extensions: Vec<String>,
}

impl RunSettings {
    fn resolve(args: &Args, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let format = match (args.format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(name)) => name
                .parse()
                .map_err(|e: String| FlattenError::Validation { message: e })?,
            (None, None) => OutputFormat::default(),
        };

        Ok(Self {
            root_path: args
                .path
                .clone()
                .or(config.root_directory_path)
                .unwrap_or_else(|| PathBuf::from(".")),
            output_path: args.output.clone().or(config.output_file_path),
            format,
            fail_fast: args.fail_fast || config.fail_fast.unwrap_or(false),
            extensions: config
                .extensions
                .unwrap_or_else(|| DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()),
        })
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse_args();

    let config = load_config(&args)?;
    let settings = RunSettings::resolve(&args, config)?;

    validate_root_path(&settings.root_path)?;

    let response = if args.quiet {
        flatten(&settings, SilentProgressReporter::new())?
    } else {
        flatten(&settings, StderrProgressReporter::new())?
    };

    if !args.quiet {
        eprintln!("{}", FormatterFactory::progress_message(settings.format));
    }
    let formatter = FormatterFactory::create(settings.format);
    let formatted_output = formatter.format(&response.records)?;

    let presenter: Box<dyn OutputPresenter> = match &settings.output_path {
        Some(path) => Box::new(FileSystemWriter::new(path.clone())),
        None => Box::new(StdoutPresenter::new()),
    };
    presenter.present(&formatted_output)?;

    if let (Some(path), false) = (&settings.output_path, args.quiet) {
        eprintln!("✅ Output complete: {}", path.display());
    }

    if response.has_failures() {
        Ok(ExitCode::DocumentsSkipped)
    } else {
        Ok(ExitCode::Success)
    }
}

/// Explicit `--config` wins; otherwise look for the default file in the root directory
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => {
            let config = config::load_config_from_path(path)?;
            if !args.quiet {
                eprintln!("📄 Loaded config from: {}", path.display());
            }
            Ok(Some(config))
        }
        None => {
            let dir = args.path.as_deref().unwrap_or(Path::new("."));
            let config = config::discover_config(dir)?;
            if config.is_some() && !args.quiet {
                eprintln!(
                    "📄 Auto-discovered config file: {}",
                    dir.join(config::CONFIG_FILENAME).display()
                );
            }
            Ok(config)
        }
    }
}

fn flatten<PR: ProgressReporter>(settings: &RunSettings, reporter: PR) -> Result<FlattenResponse> {
    let mut document_source = FileSystemReader::with_extensions(settings.extensions.clone());
    if let Some(output_path) = &settings.output_path {
        document_source = document_source.excluding(output_path);
    }
    let use_case = FlattenSbomsUseCase::new(document_source, reporter);
    use_case.execute(FlattenRequest::new(
        settings.root_path.clone(),
        settings.fail_fast,
    ))
}

fn validate_root_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(FlattenError::InvalidRootPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for the root directory
    let metadata = std::fs::symlink_metadata(path).map_err(|e| FlattenError::InvalidRootPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(FlattenError::InvalidRootPath {
            path: path.to_path_buf(),
            reason: "Security: Root path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(FlattenError::InvalidRootPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
