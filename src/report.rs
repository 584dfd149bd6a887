// Operator-facing diagnostics with fatal/recoverable severities

/// How a diagnostic affects the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Environment or setup failure. The process reporter terminates.
    /// Never used for malformed host input.
    Fatal,

    /// Parse or protocol error. The session continues.
    Recoverable,
}

/// Reporting capability handed to the parse routines, so tests can
/// observe diagnostics without touching the process.
pub trait Reporter {
    /// Emit one diagnostic on the operator channel.
    fn report(&self, severity: Severity, message: &str);
}

/// Default reporter: logs through tracing, exits the process on fatal.
#[derive(Debug, Default)]
pub struct ProcessReporter;

impl Reporter for ProcessReporter {
    fn report(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Recoverable => tracing::warn!("{}", message),
            Severity::Fatal => {
                tracing::error!("{}", message);
                std::process::exit(1);
            }
        }
    }
}
