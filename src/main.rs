mod adapters;
mod application;
mod cli;
mod config;
mod graph_generation;
mod ports;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::graphviz::DotRenderer;
use adapters::outbound::nupkg::NupkgDependencySource;
use application::dto::GraphRequest;
use application::use_cases::BuildGraphUseCase;
use cli::Args;
use config::Settings;
use ports::outbound::GraphRenderer;
use shared::error::ExitCode;
use shared::Result;
use std::path::Path;
use std::process;

fn main() {
    if let Err(e) = run() {
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

fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Load configuration: explicit path, or auto-discovery in the
    // working directory
    let config_file = match args.config.as_deref() {
        Some(path) => Some(config::load_config_from_path(Path::new(path))?),
        None => config::discover_config(Path::new("."))?,
    };

    let settings = Settings::resolve(&args, config_file)?;

    if settings.max_depth < 0 {
        eprintln!(
            "⚠️  Maximum depth {} is negative; the resulting graph will be empty",
            settings.max_depth
        );
    }

    // Create adapters (Dependency Injection)
    let dependency_source = NupkgDependencySource::new();
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = BuildGraphUseCase::new(dependency_source, progress_reporter);

    let request = GraphRequest::new(settings.package.clone(), settings.max_depth);
    let response = use_case.execute(request)?;

    // An empty graph is an informational outcome, not an error; there is
    // nothing to hand to the renderer.
    if response.graph.is_empty() {
        eprintln!(
            "ℹ️  No dependencies found for {} - nothing to render",
            settings.package
        );
        return Ok(());
    }

    let renderer = DotRenderer::new();
    renderer.render(&response.graph, &settings.output, settings.format)?;

    eprintln!("✅ Dependency graph saved to {}", settings.output.display());
    Ok(())
}
