/// ProgressReporter port for reporting processing progress
///
/// This port abstracts progress narration so the application core does
/// not depend on a concrete console implementation.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports a non-fatal problem; processing continues afterwards
    fn report_warning(&self, message: &str);

    /// Reports completion of the overall operation
    fn report_completion(&self, message: &str);
}
