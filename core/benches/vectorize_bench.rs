use criterion::{criterion_group, criterion_main, Criterion};
use simcore::tokenizer::tokenize;
use simcore::{compare, Document, TokenizerConfig};

fn corpus() -> Vec<Document> {
    let base = include_str!("../src/pipeline.rs");
    (0..16)
        .map(|i| {
            let text: String = base.split_whitespace().skip(i * 7).collect::<Vec<_>>().join(" ");
            Document::new(format!("doc{i}.txt"), text)
        })
        .collect()
}

fn bench_tokenize(c: &mut Criterion) {
    let text = include_str!("../src/pipeline.rs");
    let cfg = TokenizerConfig::default();
    c.bench_function("tokenize_source", |b| b.iter(|| tokenize(text, &cfg)));
}

fn bench_compare(c: &mut Criterion) {
    let docs = corpus();
    c.bench_function("compare_16_docs", |b| b.iter(|| compare(&docs)));
}

criterion_group!(benches, bench_tokenize, bench_compare);
criterion_main!(benches);
