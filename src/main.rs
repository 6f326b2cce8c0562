mod cli;

use cli::{Args, ReportSettings};
use conan_license_report::adapters::outbound::console::StderrProgressReporter;
use conan_license_report::adapters::outbound::filesystem::{
    FileSystemDocumentStore, GraphFileReader, StdoutPresenter,
};
use conan_license_report::adapters::outbound::resolver::ConanGraphResolver;
use conan_license_report::application::dto::{ReportRequest, ReportResponse};
use conan_license_report::application::use_cases::GenerateLicenseReportUseCase;
use conan_license_report::config::{discover_config, load_config_from_path, ConfigFile};
use conan_license_report::ports::outbound::{GraphSource, OutputPresenter};
use conan_license_report::shared::error::ExitCode;
use conan_license_report::shared::Result;
use owo_colors::OwoColorize;
use std::path::Path;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\n{} {}", "Caused by:".yellow(), cause);
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Flags > config file > defaults
    let config = load_config(args.config.as_deref())?;
    let settings = args.into_settings(config)?;

    let request = ReportRequest::builder()
        .markdown_path(settings.markdown_path.clone())
        .html_path(settings.html_path.clone())
        .marker(settings.marker.clone())
        .filter_mode(settings.filter_mode)
        .dry_run(settings.dry_run)
        .build()?;

    // Create adapters (Dependency Injection)
    let graph_source = create_graph_source(&settings);
    let document_store = FileSystemDocumentStore::new();
    let progress_reporter = StderrProgressReporter::new();

    let use_case =
        GenerateLicenseReportUseCase::new(graph_source, document_store, progress_reporter);

    let response = use_case.execute(request)?;

    if settings.dry_run {
        present_dry_run(&StdoutPresenter::new(), &response)?;
    }

    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => load_config_from_path(path).map(Some),
        None => discover_config(Path::new(".")),
    }
}

/// A persisted graph file bypasses the resolver entirely
fn create_graph_source(settings: &ReportSettings) -> Box<dyn GraphSource> {
    match &settings.graph_file {
        Some(path) => Box::new(GraphFileReader::new(path.clone())),
        None => Box::new(
            ConanGraphResolver::new(settings.manifest.clone(), settings.profile.clone())
                .with_program(settings.resolver.clone())
                .with_graph_output(settings.graph_output.clone()),
        ),
    }
}

fn present_dry_run(presenter: &dyn OutputPresenter, response: &ReportResponse) -> Result<()> {
    presenter.present(&format!("{}\n\n", response.table))?;
    presenter.present(&response.html)
}
