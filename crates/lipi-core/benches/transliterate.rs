use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lipi_core::Transliterator;

const WORDS: &[&str] = &[
    "namaste",
    "namaste-kaise",
    "dhanyavaad",
    "kShamaa",
    "ba/banni",
    "gujaraatii",
];

fn bench_transliterate(c: &mut Criterion) {
    let t = Transliterator::builtin().unwrap();
    let mut group = c.benchmark_group("transliterate");
    for lang in ["hi", "kn", "ta", "ru", "zz"] {
        group.bench_with_input(BenchmarkId::from_parameter(lang), &lang, |b, lang| {
            b.iter(|| {
                for word in WORDS {
                    std::hint::black_box(t.transliterate(word, lang));
                }
            })
        });
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let t = Transliterator::builtin().unwrap();
    let words: Vec<String> = (0..1000).map(|i| format!("{}{}", WORDS[i % WORDS.len()], i % 7)).collect();
    c.bench_function("batch_1000_hi", |b| {
        b.iter(|| t.transliterate_batch(&words, "hi"))
    });
}

fn bench_registry(c: &mut Criterion) {
    c.bench_function("registry_builtin", |b| {
        b.iter(|| lipi_core::Registry::builtin().unwrap())
    });
}

criterion_group!(benches, bench_transliterate, bench_batch, bench_registry);
criterion_main!(benches);
