use clap::Parser;
use std::path::PathBuf;

use conan_license_report::adapters::outbound::resolver::DEFAULT_RESOLVER;
use conan_license_report::application::dto::{DEFAULT_HTML_PATH, DEFAULT_MARKDOWN_PATH};
use conan_license_report::config::ConfigFile;
use conan_license_report::license_report::services::{FilterMode, DEFAULT_MARKER};
use conan_license_report::shared::Result;

/// Manifest handed to the resolver when none is configured
const DEFAULT_MANIFEST: &str = ".";

/// Build profile handed to the resolver when none is configured
const DEFAULT_PROFILE: &str = "default";

/// Intermediate graph file written after each resolver run
const DEFAULT_GRAPH_OUTPUT: &str = "graph.json";

/// Splice a third-party license table into README and HTML documents
#[derive(Parser, Debug)]
#[command(name = "conan-license-report")]
#[command(version)]
#[command(
    about = "Generate a third-party license report from a Conan dependency graph",
    long_about = None
)]
pub struct Args {
    /// Markdown document containing the marker-delimited table [default: README.md].
    /// Must be a regular file; symbolic links are refused
    #[arg(short, long, value_name = "PATH")]
    pub markdown: Option<PathBuf>,

    /// HTML document to overwrite with the license page [default: licenses.html].
    /// Symbolic links are refused
    #[arg(long, value_name = "PATH")]
    pub html: Option<PathBuf>,

    /// Marker line delimiting the table [default: <!---EXT-LIBS-->]
    #[arg(long, value_name = "LITERAL")]
    pub marker: Option<String>,

    /// Filter mode: strict (host libraries only) or simple (every node) [default: strict]
    #[arg(long, value_name = "MODE")]
    pub mode: Option<FilterMode>,

    /// Manifest passed to the resolver [default: .]
    #[arg(long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Build profile passed to the resolver [default: default]
    #[arg(short, long, value_name = "NAME")]
    pub profile: Option<String>,

    /// Resolver executable [default: conan]
    #[arg(long, value_name = "COMMAND")]
    pub resolver: Option<String>,

    /// Where the resolver output is persisted [default: graph.json]
    #[arg(long, value_name = "PATH")]
    pub graph_output: Option<PathBuf>,

    /// Read the graph from this file instead of running the resolver
    #[arg(short, long, value_name = "PATH")]
    pub graph_file: Option<PathBuf>,

    /// Configuration file (defaults to ./license-report.config.yml if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the rendered table and HTML page without modifying any document
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Merges flags with the config file; flags win, then config, then defaults
    pub fn into_settings(self, config: Option<ConfigFile>) -> Result<ReportSettings> {
        let config = config.unwrap_or_default();
        let config_mode = config.filter_mode()?;

        Ok(ReportSettings {
            markdown_path: self
                .markdown
                .or_else(|| config.markdown_path.map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MARKDOWN_PATH)),
            html_path: self
                .html
                .or_else(|| config.html_path.map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_HTML_PATH)),
            marker: self
                .marker
                .or(config.marker)
                .unwrap_or_else(|| DEFAULT_MARKER.to_string()),
            filter_mode: self.mode.or(config_mode).unwrap_or_default(),
            manifest: self
                .manifest
                .or_else(|| config.manifest.map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST)),
            profile: self
                .profile
                .or(config.profile)
                .unwrap_or_else(|| DEFAULT_PROFILE.to_string()),
            resolver: self
                .resolver
                .or(config.resolver)
                .unwrap_or_else(|| DEFAULT_RESOLVER.to_string()),
            graph_output: self
                .graph_output
                .or_else(|| config.graph_output.map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_GRAPH_OUTPUT)),
            graph_file: self.graph_file,
            dry_run: self.dry_run,
        })
    }
}

/// Fully resolved options for one run
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSettings {
    pub markdown_path: PathBuf,
    pub html_path: PathBuf,
    pub marker: String,
    pub filter_mode: FilterMode,
    pub manifest: PathBuf,
    pub profile: String,
    pub resolver: String,
    pub graph_output: PathBuf,
    pub graph_file: Option<PathBuf>,
    pub dry_run: bool,
}
