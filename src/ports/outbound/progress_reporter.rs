/// ProgressReporter port for reporting progress during a run
///
/// This port abstracts progress reporting (e.g., to stderr) so that stdout
/// stays free for `--dry-run` output.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Starts a long-running step such as the external resolver call
    ///
    /// # Arguments
    /// * `message` - Description shown while the step runs
    fn start_step(&self, message: &str);

    /// Ends the step started by [`ProgressReporter::start_step`]
    fn finish_step(&self);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
