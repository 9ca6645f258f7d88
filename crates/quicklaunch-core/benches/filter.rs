//! Benchmarks for filter recompute.
//!
//! Run with: cargo bench -p quicklaunch-core
//! Results are saved to target/criterion/

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use quicklaunch_core::{Catalog, FilterEngine, LaunchableItem};

fn generate_catalog(count: usize) -> Catalog {
    let names = [
        "Firefox",
        "Google Chrome",
        "Visual Studio Code",
        "Terminal",
        "Files",
        "Spotify",
        "Discord",
        "Thunderbird",
        "GIMP",
        "VLC Media Player",
        "LibreOffice Writer",
        "Inkscape",
        "Blender",
        "OBS Studio",
    ];

    let items = (0..count)
        .map(|i| {
            let name = names[i % names.len()];
            LaunchableItem::new(format!("{name} {i}"), name.to_lowercase())
        })
        .collect();
    Catalog::new(items)
}

fn bench_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_recompute");

    for size in [100, 1_000, 10_000] {
        let catalog = generate_catalog(size);
        let mut engine = FilterEngine::new();
        group.throughput(Throughput::Elements(size as u64));

        for query in ["", "o", "studio", "zzz"] {
            group.bench_with_input(BenchmarkId::new(format!("q={query:?}"), size), &query, |b, q| {
                b.iter(|| engine.recompute(black_box(&catalog), black_box(q)));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_recompute);
criterion_main!(benches);
