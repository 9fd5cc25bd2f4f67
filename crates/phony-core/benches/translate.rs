use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use phony_core::{Alphabet, Phony, TranslateOptions};

const MESSAGES: &[(&str, &str)] = &[
    ("short", "SOS"),
    ("sentence", "the quick brown fox jumps over the lazy dog 1234567890"),
    (
        "paragraph",
        "pack my box with five dozen liquor jugs. sphinx of black quartz judge my vow. \
         how vexingly quick daft zebras jump. 0-1-2-3-4-5-6-7-8-9",
    ),
];

fn bench_translate_to(c: &mut Criterion) {
    let phony = Phony::builtin();
    let mut group = c.benchmark_group("translate_to");
    for alphabet in ["itu", "icao"] {
        let options = TranslateOptions::new().alphabet(alphabet);
        for (label, message) in MESSAGES {
            group.bench_with_input(
                BenchmarkId::new(alphabet, label),
                message,
                |b, message| b.iter(|| phony.translate_to(message, &options)),
            );
        }
    }
    group.finish();
}

fn bench_translate_from(c: &mut Criterion) {
    let phony = Phony::builtin();
    let mut group = c.benchmark_group("translate_from");
    for alphabet in ["itu", "icao"] {
        let options = TranslateOptions::new().alphabet(alphabet);
        for (label, message) in MESSAGES {
            let spoken = phony.translate_to(message, &options);
            group.bench_with_input(BenchmarkId::new(alphabet, label), &spoken, |b, spoken| {
                b.iter(|| phony.translate_from(spoken, &options).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_deep_fallback(c: &mut Criterion) {
    let mut phony = Phony::builtin();
    let mut parent = "itu".to_string();
    for depth in 0..16 {
        let name = format!("layer{depth}");
        phony
            .alphabets_mut()
            .insert(&name, Alphabet::with_fallback(&parent));
        parent = name;
    }
    let options = TranslateOptions::new().alphabet(parent);
    let spoken = phony.translate_to(MESSAGES[1].1, &options);

    c.bench_function("translate_from/fallback_depth_16", |b| {
        b.iter(|| phony.translate_from(&spoken, &options).unwrap())
    });
}

criterion_group!(
    benches,
    bench_translate_to,
    bench_translate_from,
    bench_deep_fallback
);
criterion_main!(benches);
