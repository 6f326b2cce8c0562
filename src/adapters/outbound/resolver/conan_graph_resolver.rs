use crate::ports::outbound::GraphSource;
use crate::shared::error::LicenseReportError;
use crate::shared::fs::{check_write_target, write_atomically};
use crate::shared::Result;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Resolver executable used when none is configured
pub const DEFAULT_RESOLVER: &str = "conan";

/// ConanGraphResolver adapter running `conan graph info` for a manifest
///
/// Implements the GraphSource port by invoking
/// `<resolver> graph info <manifest> --profile:all <profile> --format=json`,
/// capturing stdout and persisting it to the intermediate graph file.
/// The call blocks until the resolver exits.
pub struct ConanGraphResolver {
    program: String,
    manifest: PathBuf,
    profile: String,
    graph_output: Option<PathBuf>,
}

impl ConanGraphResolver {
    /// Creates a resolver for `manifest` (a conanfile or the directory holding it)
    pub fn new(manifest: PathBuf, profile: impl Into<String>) -> Self {
        Self {
            program: DEFAULT_RESOLVER.to_string(),
            manifest,
            profile: profile.into(),
            graph_output: None,
        }
    }

    /// Overrides the resolver executable (e.g. a pinned `conan` from a venv)
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Persists the resolver output to `path` after every successful run
    pub fn with_graph_output(mut self, path: PathBuf) -> Self {
        self.graph_output = Some(path);
        self
    }

    /// Arguments passed to the resolver executable
    pub fn args(&self) -> Vec<String> {
        vec![
            "graph".to_string(),
            "info".to_string(),
            self.manifest.display().to_string(),
            "--profile:all".to_string(),
            self.profile.clone(),
            "--format=json".to_string(),
        ]
    }

    fn command_line(&self) -> String {
        format!("{} {}", self.program, self.args().join(" "))
    }

    fn run(&self) -> Result<Output> {
        Command::new(&self.program)
            .args(self.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                LicenseReportError::ResolverFailed {
                    command: self.command_line(),
                    details: format!("Failed to start `{}`: {}", self.program, e),
                }
                .into()
            })
    }

    /// Writes the payload the same way the documents are written
    fn persist(path: &Path, payload: &str) -> Result<()> {
        check_write_target(path)?;
        write_atomically(path, payload)
    }
}

impl GraphSource for ConanGraphResolver {
    fn fetch_graph(&self) -> Result<String> {
        let output = self.run()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let details = if stderr.trim().is_empty() {
                format!("Resolver exited with {}", output.status)
            } else {
                format!("Resolver exited with {}:\n{}", output.status, stderr.trim_end())
            };
            return Err(LicenseReportError::ResolverFailed {
                command: self.command_line(),
                details,
            }
            .into());
        }

        let payload =
            String::from_utf8(output.stdout).map_err(|e| LicenseReportError::ResolverFailed {
                command: self.command_line(),
                details: format!("Resolver output is not valid UTF-8: {}", e),
            })?;

        if let Some(path) = &self.graph_output {
            Self::persist(path, &payload)?;
        }

        Ok(payload)
    }

    fn describe(&self) -> String {
        self.command_line()
    }
}
