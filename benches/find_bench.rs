use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use localefind::{
    default_segmenter, CollationOptions, Collator, IcuCollator, IcuProvider, LocaleSearcher,
    Sensitivity,
};

fn searcher(options: CollationOptions) -> LocaleSearcher<'static> {
    let collator: Arc<dyn Collator> = Arc::new(
        IcuCollator::try_new(Some("en"), &options.for_search()).expect("collator"),
    );
    LocaleSearcher::new(collator, &IcuProvider, default_segmenter()).expect("searcher")
}

fn haystack(size: usize) -> String {
    // Needle sits at the very end so every window is visited.
    let mut text = "m\u{00E4}tch, (words) ".repeat(size / 17);
    text.push_str("needle");
    text
}

fn bench_find(c: &mut Criterion) {
    let plain = searcher(CollationOptions::new(Sensitivity::Base));
    let loose = searcher(CollationOptions::new(Sensitivity::Base).with_ignore_punctuation(true));
    let mut group = c.benchmark_group("find");

    for size in [64, 512, 4096].iter() {
        let text = haystack(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("base_bytes_{size}"), |b| {
            b.iter(|| plain.find(black_box(&text), black_box("NEEDLE")).expect("match"))
        });
        group.bench_function(format!("ignore_punctuation_bytes_{size}"), |b| {
            b.iter(|| loose.find(black_box(&text), black_box("nee-dle!")).expect("match"))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_find);
criterion_main!(benches);
