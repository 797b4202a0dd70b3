/// ProgressReporter port for user feedback while documents are processed
///
/// Everything reported here goes to a side channel (stderr in the CLI)
/// so it never mixes with the table written to stdout.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports how many of `total` documents have been handled so far
    ///
    /// # Arguments
    /// * `current` - Documents handled so far
    /// * `total` - Documents discovered
    /// * `message` - Optional detail, typically the current file name
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or a per-file failure
    fn report_error(&self, message: &str);

    /// Reports the end of the run
    fn report_completion(&self, message: &str);
}
