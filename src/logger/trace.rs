//! Trace text for verbose error output. There is no ambient "current
//! exception" to inspect, so callers that hold an error render it here and
//! pass the result as the trace.

use std::error::Error;

/// The error itself followed by one `Caused by:` line per source.
#[must_use]
pub fn format_error_chain(err: &dyn Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str("\nCaused by: ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
