#![no_main]
use libfuzzer_sys::fuzz_target;
use routelog::{LogLevel, LogOptions, Logger, Verbosity};

fuzz_target!(|data: &str| {
    // Prefix stripping slices on arbitrary input; no facade logger is installed
    let logger = Logger::new(None, Verbosity::Verbose);
    logger.setup_system_logger();
    logger.log(LogLevel::Warning, data, &LogOptions::new().prefix("WARNING:"));
});
