//! System-log backend on top of the `log` facade. Whatever logger the host
//! installs (`env_logger`, syslog, journald) receives the records.

/// Target attached to every forwarded record.
pub const SYSTEM_LOG_TARGET: &str = "routelog";

/// The facade adds its own level marker, so these would be noise.
const REMOVABLE_PREFIXES: [&str; 3] = ["[debug] ", "ERROR: ", "WARNING: "];

#[derive(Debug, Clone, Copy)]
pub struct SystemLogOutput {
    level: log::Level,
}

impl SystemLogOutput {
    #[must_use]
    pub const fn new(level: log::Level) -> Self {
        Self { level }
    }

    #[must_use]
    pub const fn level(&self) -> log::Level {
        self.level
    }

    pub fn log(&self, message: &str) {
        let message = strip_markers(message);
        log::log!(target: SYSTEM_LOG_TARGET, self.level, "{message}");
    }
}

/// Drops trailing whitespace, the known level prefixes, then a leading `[tag]`.
fn strip_markers(message: &str) -> &str {
    let mut message = message.trim_end();
    for prefix in REMOVABLE_PREFIXES {
        if let Some(rest) = message.strip_prefix(prefix) {
            message = rest;
        }
    }
    if message.starts_with('[') {
        // an unterminated tag swallows the whole message
        message = message
            .split_once(']')
            .map_or("", |(_, rest)| rest)
            .trim_start();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::strip_markers;

    #[test]
    fn strips_level_prefix_and_tag() {
        assert_eq!(strip_markers("WARNING: disk full\n"), "disk full");
        assert_eq!(strip_markers("[debug] [youtube] abc: Downloading"), "abc: Downloading");
        assert_eq!(strip_markers("ERROR: boom"), "boom");
    }

    #[test]
    fn leaves_plain_messages_alone() {
        assert_eq!(strip_markers("plain message  "), "plain message");
    }

    #[test]
    fn unterminated_tag_leaves_nothing() {
        assert_eq!(strip_markers("[unterminated"), "");
        assert_eq!(strip_markers("WARNING: [youtube no close"), "");
    }
}
