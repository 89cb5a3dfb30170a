//! Rendering benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use seqcolor::colorize::{color_grid, Highlight};
use seqcolor::fasta::wrap_sequence;
use seqcolor::layout::{layout_grid, CellMetrics};
use seqcolor::render_engines::{BitmapEngine, GlyphEngine};
use seqcolor::renderer::{crop_to_content, draw_layout};
use seqcolor::residues::{ResiduePalette, STANDARD_RESIDUES};

fn create_test_sequence(length: usize) -> String {
    STANDARD_RESIDUES.chars().cycle().take(length).collect()
}

fn benchmark_color_grid(c: &mut Criterion) {
    let palette = ResiduePalette::default();
    let sequence = create_test_sequence(10_000);
    let highlight = Highlight {
        window: 2_000..6_000,
        inside: Some(palette.basic),
        outside: palette.acidic,
    };

    let mut group = c.benchmark_group("Colour Assignment");

    group.bench_function("class_colours", |b| {
        b.iter(|| color_grid(black_box(&sequence), &palette, 60, None))
    });
    group.bench_function("highlight", |b| {
        b.iter(|| color_grid(black_box(&sequence), &palette, 60, Some(&highlight)))
    });

    group.finish();
}

fn benchmark_layout(c: &mut Criterion) {
    let palette = ResiduePalette::default();
    let metrics = CellMetrics {
        advance: 42,
        line_height: 56,
    };

    let mut group = c.benchmark_group("Layout");

    for length in [100, 1_000, 10_000].iter() {
        let sequence = create_test_sequence(*length);
        let lines = wrap_sequence(&sequence, 50);
        let grid = color_grid(&sequence, &palette, 50, None).unwrap();

        group.bench_function(format!("residues_{}", length), |b| {
            b.iter(|| layout_grid(black_box(&lines), black_box(&grid), metrics, 0, true))
        });
    }

    group.finish();
}

fn benchmark_draw(c: &mut Criterion) {
    let palette = ResiduePalette::default();
    let engine = BitmapEngine::new(55.6);
    let metrics = CellMetrics {
        advance: engine.advance(),
        line_height: engine.line_height(),
    };

    let sequence = create_test_sequence(300);
    let lines = wrap_sequence(&sequence, 30);
    let grid = color_grid(&sequence, &palette, 30, None).unwrap();
    let layout = layout_grid(&lines, &grid, metrics, 0, true).unwrap();

    let mut group = c.benchmark_group("Drawing");
    group.sample_size(20);

    group.bench_function("draw_300_residues", |b| {
        b.iter(|| draw_layout(black_box(&layout), &engine, palette.acidic, 10))
    });

    let canvas = draw_layout(&layout, &engine, palette.acidic, 10);
    group.bench_function("crop", |b| b.iter(|| crop_to_content(black_box(&canvas), 10)));

    group.finish();
}

criterion_group!(benches, benchmark_color_grid, benchmark_layout, benchmark_draw);
criterion_main!(benches);
