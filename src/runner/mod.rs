//! Trace run sources: live traceroute launches and pre-captured files.

pub mod files;
pub mod traceroute;

pub use files::load_captures;
pub use traceroute::{capture_runs, RunPlan};

/// One run's verbatim output plus a label for logs and warnings
#[derive(Debug, Clone)]
pub struct Capture {
    /// `run N` for live runs, the filename for loaded captures
    pub label: String,

    /// Verbatim traceroute output
    pub text: String,
}
