// Performance benchmarks for fcpx-hacks-tools
//
// Run with: cargo bench
// View results in: target/criterion/report/index.html

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fcpx_hacks_tools::dmg::{Define, DmgSettings};
use fcpx_hacks_tools::unicode::script_extensions;

/// Benchmark Script_Extensions range lookup
fn bench_script_extensions_lookup(c: &mut Criterion) {
    // Spread across the plane: table head, dense CJK region, astral tail
    let samples = [0x0041u32, 0x0342, 0x0964, 0x3001, 0xFF61, 0x1F250, 0x10FFFF];

    c.bench_function("script_extensions_lookup", |b| {
        b.iter(|| {
            for &cp in &samples {
                black_box(script_extensions(black_box(cp)));
            }
        })
    });
}

/// Benchmark settings parsing from TOML
fn bench_settings_parse(c: &mut Criterion) {
    let toml = DmgSettings::default().to_toml().unwrap();

    c.bench_function("settings_parse", |b| {
        b.iter(|| {
            let settings: DmgSettings = toml::from_str(black_box(&toml)).unwrap();
            black_box(settings)
        })
    });
}

/// Benchmark applying command-line defines
fn bench_apply_defines(c: &mut Criterion) {
    let defines = [
        Define::parse("filename=build/nightly.dmg").unwrap(),
        Define::parse("format=UDZO").unwrap(),
        Define::parse("icon_size=128").unwrap(),
    ];

    c.bench_function("apply_defines", |b| {
        b.iter(|| {
            let mut settings = DmgSettings::default();
            settings.apply_defines(black_box(&defines)).unwrap();
            black_box(settings)
        })
    });
}

criterion_group!(
    benches,
    bench_script_extensions_lookup,
    bench_settings_parse,
    bench_apply_defines
);
criterion_main!(benches);
