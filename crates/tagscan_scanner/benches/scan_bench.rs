//! Benchmark harness for the template scanner.
//!
//! Uses criterion for reliable benchmarking.
//! Run with: cargo bench -p tagscan_scanner

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use regex::Regex;
use tagscan_scanner::TemplateScanner;

/// Fragments of a markup-flavoured template with three substitution slots.
const STATICS: &[&str] = &[
    "<div class=",
    " id=",
    ">\n  <span>some static text</span>\n  ",
    "\n</div>",
];

/// Walk every fragment and slot using the character primitives.
fn walk_chars(statics: &[&str]) -> usize {
    let mut scanner = TemplateScanner::new(statics);
    let mut consumed = 0;
    loop {
        while scanner.peek().is_some() {
            scanner.consume_whitespace();
            consumed += scanner.consume_while(|c| c != ' ' && c != '\n').len();
        }
        if scanner.consume_expr().is_none() {
            break;
        }
    }
    consumed
}

fn bench_walk_literal(c: &mut Criterion) {
    c.bench_function("walk_literal", |b| {
        b.iter(|| walk_chars(black_box(STATICS)))
    });
}

fn bench_consume_pattern(c: &mut Criterion) {
    let re = Regex::new("[a-z][a-z0-9-]*").unwrap();
    c.bench_function("consume_pattern", |b| {
        b.iter(|| {
            let mut scanner = TemplateScanner::new(black_box(&["some-tag-name rest"]));
            black_box(scanner.consume_pattern(&re)).len()
        })
    });
}

fn bench_consume_str(c: &mut Criterion) {
    c.bench_function("consume_str", |b| {
        b.iter(|| {
            let mut scanner = TemplateScanner::new(black_box(&["<div class=\"a\">"]));
            black_box(scanner.consume_str("<div"))
        })
    });
}

criterion_group!(
    benches,
    bench_walk_literal,
    bench_consume_pattern,
    bench_consume_str
);
criterion_main!(benches);
