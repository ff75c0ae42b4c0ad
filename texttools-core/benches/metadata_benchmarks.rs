//! Performance benchmarks for metadata computation and frequency tables
//!
//! Run with: cargo bench --bench metadata_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use texttools_core::{
    analyze_document, compute_metadata, merge_counts, CorpusMatrix, Document, FrequencyTable,
    Sentence, Word, WordCounts,
};

const VOCABULARY: [(&str, &[&str]); 6] = [
    ("Die", &["Die"]),
    ("Sonne", &["Son", "ne"]),
    ("scheint", &["scheint"]),
    ("über", &["ü", "ber"]),
    ("Kopfsteinpflaster", &["Kopf", "stein", "pflas", "ter"]),
    ("heute", &["heu", "te"]),
];

/// Generate a document with `sentences` sentences of eight words each
fn generate_document(sentences: usize) -> Document {
    let sentences = (0..sentences)
        .map(|i| {
            let words: Vec<Word> = (0..8)
                .map(|j| {
                    let (text, syllables) = VOCABULARY[(i + j) % VOCABULARY.len()];
                    Word::new(text, syllables.iter().map(|s| s.to_string()).collect())
                })
                .collect();
            let text = words
                .iter()
                .map(|w| w.word.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            Sentence::new(format!("{text}."), words)
        })
        .collect();
    Document::new(sentences)
}

fn bench_document_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_sizes");

    for size in [10, 100, 1_000, 10_000] {
        let document = generate_document(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new("compute_metadata", size),
            &document,
            |b, document| {
                b.iter(|| {
                    let mut doc = document.clone();
                    compute_metadata(black_box(&mut doc)).unwrap();
                });
            },
        );
        group.bench_with_input(BenchmarkId::new("analyze", size), &document, |b, document| {
            b.iter(|| {
                let mut doc = document.clone();
                analyze_document(black_box(&mut doc)).unwrap();
            });
        });
    }

    group.finish();
}

fn bench_corpus_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("corpus_merge");

    let tables: Vec<WordCounts> = (1..=50)
        .map(|n| {
            let doc = generate_document(n * 10);
            FrequencyTable::from_document(&doc).unwrap().counts()
        })
        .collect();

    group.bench_function("merge_50_tables", |b| {
        b.iter(|| {
            let merged = tables
                .iter()
                .fold(WordCounts::new(), |acc, table| merge_counts(acc, black_box(table)));
            CorpusMatrix::from_counts("bench", merged).unwrap()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_document_sizes, bench_corpus_merge);
criterion_main!(benches);
