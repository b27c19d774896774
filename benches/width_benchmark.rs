//! Width benchmark: rune and cursor column math.
//!
//! Target: negligible against render cost (< 10ns per rune).

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linepick::width::{cell_offset, cell_rune, display_width};

fn bench_cell_rune(c: &mut Criterion) {
    c.bench_function("cell_rune_ascii", |b| {
        b.iter(|| cell_rune(black_box('a')))
    });

    c.bench_function("cell_rune_cjk", |b| {
        b.iter(|| cell_rune(black_box('日')))
    });

    c.bench_function("cell_rune_combining", |b| {
        b.iter(|| cell_rune(black_box('\u{0301}')))
    });
}

fn bench_display_width(c: &mut Criterion) {
    let ascii = "the quick brown fox jumps over the lazy dog";
    let mixed = "メニュー menu méxico 日本語テキスト";

    c.bench_function("display_width_ascii", |b| {
        b.iter(|| display_width(black_box(ascii)))
    });

    c.bench_function("display_width_mixed", |b| {
        b.iter(|| display_width(black_box(mixed)))
    });
}

fn bench_cursor_offset(c: &mut Criterion) {
    let runes: Vec<char> = "query with wide 日本 and marks e\u{0301}".chars().collect();

    c.bench_function("cell_offset_prompt", |b| {
        b.iter(|| cell_offset(black_box(&runes)))
    });
}

criterion_group!(benches, bench_cell_rune, bench_display_width, bench_cursor_offset);
criterion_main!(benches);
