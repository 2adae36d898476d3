use criterion::{Criterion, criterion_group, criterion_main};
use routelog::{Destination, LogLevel, LogOptions, Logger, Style, Verbosity, format_text};
use std::hint::black_box;
use std::io;

fn sink_logger(verbosity: Verbosity) -> Logger {
    let logger = Logger::new(None, verbosity);
    logger.setup_stream_logger(
        Some(Destination::new(io::sink())),
        Some(Destination::new(io::sink())),
        false,
    );
    logger
}

fn bench_info(c: &mut Criterion) {
    let logger = sink_logger(Verbosity::Normal);

    c.bench_function("Logger::info", |b| {
        b.iter(|| {
            logger.info(black_box("[youtube] abc: Downloading webpage"), true, None, false);
        });
    });
}

fn bench_prefixed_warning(c: &mut Criterion) {
    let logger = sink_logger(Verbosity::Normal);
    let options = LogOptions::new().prefixes(["WARNING:", "[generic]"]);

    c.bench_function("Logger::log prefixed", |b| {
        b.iter(|| {
            logger.log(LogLevel::Warning, black_box("falling back"), &options);
        });
    });
}

fn bench_suppressed_debug(c: &mut Criterion) {
    let logger = sink_logger(Verbosity::Normal);

    c.bench_function("Logger::debug suppressed", |b| {
        b.iter(|| logger.debug(black_box("not shown"), false));
    });
}

fn bench_once_hit(c: &mut Criterion) {
    let logger = sink_logger(Verbosity::Normal);
    logger.warning("repeated", true);

    c.bench_function("Logger::warning once hit", |b| {
        b.iter(|| logger.warning(black_box("repeated"), true));
    });
}

fn bench_try_encoding(c: &mut Criterion) {
    let logger = sink_logger(Verbosity::Normal);

    c.bench_function("Logger::try_encoding", |b| {
        b.iter(|| {
            black_box(logger.try_encoding(
                LogLevel::Info,
                black_box("Ünïcödé title ✓"),
                "title",
                Some("latin-1"),
            ))
        });
    });
}

fn bench_format_text(c: &mut Criterion) {
    c.bench_function("format_text", |b| {
        b.iter(|| format_text(black_box("WARNING:"), &[Style::WARNING, Style::EMPHASIS]));
    });
}

criterion_group!(
    benches,
    bench_info,
    bench_prefixed_warning,
    bench_suppressed_debug,
    bench_once_hit,
    bench_try_encoding,
    bench_format_text,
);
criterion_main!(benches);
