//! Benchmark – `lineargs::Scanner`
#![allow(missing_docs)]

use std::{hint::black_box, time::Duration};

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lineargs::{Scanner, ScannerOptions, parse_args, tokenize};

/// Produce a deterministic command line of roughly `target_len` bytes mixing
/// plain words, quoted words, escapes and a bracketed JSON value.
fn make_line(target_len: usize) -> String {
    const PARTS: [&str; 5] = [
        "word",
        r#""quoted words here""#,
        r"esc\ aped",
        r#"{"key": [1, 'two', (3)]}"#,
        "--opt=value",
    ];
    let mut line = String::with_capacity(target_len + 32);
    let mut i = 0;
    while line.len() < target_len {
        line.push_str(PARTS[i % PARTS.len()]);
        line.push(' ');
        i += 1;
    }
    line
}

/// Tokenizes through a reader that yields `chunk` bytes per call so that
/// characters regularly straddle read boundaries.
fn tokenize_chunked(line: &str, chunk: usize) -> usize {
    struct Chunked<'a> {
        data: &'a [u8],
        chunk: usize,
    }
    impl std::io::Read for Chunked<'_> {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            let n = self.chunk.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }
    Scanner::new(Chunked {
        data: line.as_bytes(),
        chunk,
    })
    .filter_map(Result::ok)
    .count()
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    group.measurement_time(Duration::from_secs(5));

    for &size in &[64usize, 1_024, 16_384] {
        let line = make_line(size);
        group.throughput(Throughput::Bytes(line.len() as u64));

        group.bench_with_input(BenchmarkId::new("default", size), &line, |b, line| {
            b.iter(|| tokenize(black_box(line), ScannerOptions::default()));
        });

        let infield = ScannerOptions {
            infield_brackets: true,
            ..Default::default()
        };
        group.bench_with_input(BenchmarkId::new("infield", size), &line, |b, line| {
            b.iter(|| tokenize(black_box(line), infield));
        });

        group.bench_with_input(BenchmarkId::new("chunked_7", size), &line, |b, line| {
            b.iter(|| tokenize_chunked(black_box(line), 7));
        });
    }
    group.finish();
}

fn bench_parse_args(c: &mut Criterion) {
    let line = "-l --number=42 -where=here -- -not-an-option- one two three";
    c.bench_function("parse_args", |b| b.iter(|| parse_args(black_box(line))));
}

criterion_group!(benches, bench_tokenize, bench_parse_args);
criterion_main!(benches);
