/// Port for step-by-step progress shown to the user.
pub trait ReporterPort {
    /// A step is starting.
    fn step(&self, message: &str);

    /// A step finished successfully.
    fn success(&self, message: &str);

    fn info(&self, message: &str);

    /// Non-fatal problem; the workflow continues.
    fn warn(&self, message: &str);

    fn error(&self, message: &str);

    /// Secondary detail line (verbose output, file listings).
    fn detail(&self, message: &str);
}
