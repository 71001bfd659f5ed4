//! Criterion benchmarks for stacklog

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use stacklog::prelude::*;
use stacklog::{parse_frame_line, resolve, safe_stringify};

/// Trace fixture shaped like a capture taken inside `Logger::log`.
const SERVICE_TRACE: &str = "Error\n    at stacklog::core::logger::Logger::log (src/core/logger.rs:88:9)\n    at handle_request (src/server/http.js:81:12)\n    at main (src/bin/serve.js:9:1)";

/// Discards every record; isolates the composition cost from sink I/O.
struct NullSink;

impl Sink for NullSink {
    fn route(&mut self, _level: LogLevel, _line: &str) -> stacklog::Result<()> {
        Ok(())
    }

    fn flush(&mut self) -> stacklog::Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Frame Parsing Benchmarks
// ============================================================================

fn bench_frame_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_parsing");
    group.throughput(Throughput::Elements(1));

    group.bench_function("v8_named", |b| {
        b.iter(|| {
            let site = parse_frame_line(black_box(
                "    at handleRequest (packages/server/http.js:81:12)",
            ));
            black_box(site)
        });
    });

    group.bench_function("at_sign_with_query", |b| {
        b.iter(|| {
            let site = parse_frame_line(black_box(
                "handler@https://foo.bar.com/scripts/file.js?random=foobar:42:7",
            ));
            black_box(site)
        });
    });

    group.bench_function("bare", |b| {
        b.iter(|| {
            let site = parse_frame_line(black_box("src/handlers/main.rs:10:5"));
            black_box(site)
        });
    });

    group.bench_function("no_location", |b| {
        b.iter(|| {
            let site = parse_frame_line(black_box("some frame without a location"));
            black_box(site)
        });
    });

    group.finish();
}

// ============================================================================
// Trace Resolution Benchmarks
// ============================================================================

fn bench_trace_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("trace_resolution");
    group.throughput(Throughput::Elements(1));

    group.bench_function("short_trace", |b| {
        b.iter(|| {
            let details = resolve(black_box(SERVICE_TRACE), "stacklog");
            black_box(details)
        });
    });

    let deep_trace = {
        let mut lines = vec!["Error".to_string()];
        for i in 0..4 {
            lines.push(format!(
                "    at stacklog::core::logger::helper_{} (src/core/logger.rs:{}:5)",
                i,
                40 + i
            ));
        }
        for i in 0..36 {
            lines.push(format!("    at frame_{} (src/app/module.js:{}:3)", i, 100 + i));
        }
        lines.join("\n")
    };

    group.bench_function("deep_trace", |b| {
        b.iter(|| {
            let details = resolve(black_box(&deep_trace), "stacklog");
            black_box(details)
        });
    });

    group.finish();
}

// ============================================================================
// Stringification Benchmarks
// ============================================================================

fn bench_safe_stringify(c: &mut Criterion) {
    let mut group = c.benchmark_group("safe_stringify");
    group.throughput(Throughput::Elements(1));

    let flat = LogValue::object([
        ("name", LogValue::from("svc")),
        ("port", LogValue::from(8080)),
        ("secure", LogValue::from(true)),
        ("retries", LogValue::from(3)),
        ("timeout", LogValue::from(2.5)),
    ]);

    group.bench_function("flat_object", |b| {
        b.iter(|| {
            let text = safe_stringify(black_box(&flat), 2);
            black_box(text)
        });
    });

    let nested = LogValue::object([(
        "request",
        LogValue::object([
            ("path", LogValue::from("/api/v1/items")),
            (
                "params",
                LogValue::object([("page", LogValue::from(3)), ("size", LogValue::from(50))]),
            ),
        ]),
    )]);

    group.bench_function("nested_object", |b| {
        b.iter(|| {
            let text = safe_stringify(black_box(&nested), 2);
            black_box(text)
        });
    });

    let items = LogValue::array((0..16).map(LogValue::from));

    group.bench_function("array_16", |b| {
        b.iter(|| {
            let text = safe_stringify(black_box(&items), 2);
            black_box(text)
        });
    });

    let cyclic = LogValue::object([("name", LogValue::from("root"))]);
    if let Some(handle) = cyclic.as_object_handle() {
        handle.write().push(("me".to_string(), cyclic.clone()));
    }

    group.bench_function("cyclic_object", |b| {
        b.iter(|| {
            let text = safe_stringify(black_box(&cyclic), 2);
            black_box(text)
        });
    });

    group.bench_function("flat_object_compact", |b| {
        b.iter(|| {
            let text = safe_stringify(black_box(&flat), 0);
            black_box(text)
        });
    });

    group.finish();
}

// ============================================================================
// Record Composition Benchmarks
// ============================================================================

fn bench_record_composition(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_composition");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::builder()
        .capture(FixedCapture::new(SERVICE_TRACE))
        .build();

    let scalar_args = [LogValue::from("request accepted"), LogValue::from(42)];

    group.bench_function("scalar_args_no_sink", |b| {
        b.iter(|| logger.info(black_box(&scalar_args)));
    });

    let object_args = [
        LogValue::from("session"),
        LogValue::object([("user", LogValue::from("alice")), ("hits", LogValue::from(7))]),
    ];

    group.bench_function("object_arg_no_sink", |b| {
        b.iter(|| logger.info(black_box(&object_args)));
    });

    let sinked = Logger::builder()
        .capture(FixedCapture::new(SERVICE_TRACE))
        .sink(NullSink)
        .build();

    group.bench_function("scalar_args_null_sink", |b| {
        b.iter(|| sinked.info(black_box(&scalar_args)));
    });

    group.bench_function("bare_call_default_level", |b| {
        b.iter(|| sinked.log_default(black_box(&scalar_args)));
    });

    group.finish();
}

// ============================================================================
// Filtering Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::builder()
        .min_level(LogLevel::Warning)
        .capture(FixedCapture::new(SERVICE_TRACE))
        .sink(NullSink)
        .build();

    let args = [LogValue::from("message")];

    group.bench_function("below_threshold", |b| {
        b.iter(|| logger.debug(black_box(&args)));
    });

    group.bench_function("above_threshold", |b| {
        b.iter(|| logger.error(black_box(&args)));
    });

    group.finish();
}

// ============================================================================
// Native Capture Benchmarks
// ============================================================================

fn bench_native_capture(c: &mut Criterion) {
    let mut group = c.benchmark_group("native_capture");
    group.throughput(Throughput::Elements(1));
    group.sample_size(20);

    let capture = BacktraceCapture::new();

    group.bench_function("backtrace_to_text", |b| {
        b.iter(|| {
            let trace = capture.capture();
            black_box(trace)
        });
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_frame_parsing,
    bench_trace_resolution,
    bench_safe_stringify,
    bench_record_composition,
    bench_level_filtering,
    bench_native_capture
);

criterion_main!(benches);
