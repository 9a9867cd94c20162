//! Benchmarks for the theming pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use theming::{
    compose, extract_colors, render_json, render_oomox, render_plain, render_xresources, ThemeMode,
};

fn magick_listing(colors: u32) -> String {
    let mut text = String::from("# ImageMagick pixel enumeration: 16,1,255,srgb\n");
    for i in 0..colors {
        let (r, g, b) = ((i * 3) % 256, (i * 5) % 256, (i * 7) % 256);
        text.push_str(&format!(
            "{},0: ({},{},{})  #{:02X}{:02X}{:02X}  srgb({},{},{})\n",
            i, r, g, b, r, g, b, r, g, b
        ));
    }
    text
}

// -- Extraction benchmarks --

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");

    let listing = magick_listing(16);
    // A listing far longer than the 16 colors asked for.
    let large = magick_listing(4096);

    group.bench_function("extract_16", |b| {
        b.iter(|| extract_colors(black_box(&listing)))
    });

    group.bench_function("extract_4096", |b| {
        b.iter(|| extract_colors(black_box(&large)))
    });

    group.finish();
}

// -- Composition benchmarks --

fn bench_composition(c: &mut Criterion) {
    let mut group = c.benchmark_group("composition");

    let raw = extract_colors(&magick_listing(16));

    group.bench_function("compose_dark", |b| {
        b.iter(|| compose(black_box(&raw), ThemeMode::Dark).unwrap())
    });

    group.bench_function("compose_light", |b| {
        b.iter(|| compose(black_box(&raw), ThemeMode::Light).unwrap())
    });

    group.finish();
}

// -- Rendering benchmarks --

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    let raw = extract_colors(&magick_listing(16));
    let palette = compose(&raw, ThemeMode::Dark).unwrap();

    group.bench_function("render_plain", |b| {
        b.iter(|| render_plain(black_box(&palette)))
    });

    group.bench_function("render_oomox", |b| {
        b.iter(|| render_oomox(black_box(&palette)))
    });

    group.bench_function("render_xresources", |b| {
        b.iter(|| render_xresources(black_box(&palette)))
    });

    group.bench_function("render_json", |b| {
        b.iter(|| render_json(black_box(&palette), "/pics/wall.png").unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_extraction, bench_composition, bench_rendering);
criterion_main!(benches);
