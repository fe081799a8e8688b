//! Concurrency and thread safety tests

mod common;

use std::sync::Arc;
use std::thread;

use common::{FoldCollator, FoldProvider};
use localefind::{
    default_segmenter, CollationOptions, Collator, LocaleSearcher, Match, Sensitivity,
};

const HAYSTACK: &str = "a m\u{00E4}tch, (possibly!) true";

#[test]
fn shared_searcher_gives_every_thread_its_own_result() {
    let collator: Arc<dyn Collator> = Arc::new(FoldCollator::new(
        "en",
        CollationOptions::default()
            .with_ignore_punctuation(true)
            .for_search(),
    ));
    let searcher = Arc::new(
        LocaleSearcher::new(collator, &FoldProvider, default_segmenter()).expect("searcher"),
    );

    // Different needles give different spans; no thread may see another's.
    // Leftmost starts absorb the filler in front of the words.
    let cases = [
        ("m\u{00E4}tch possibly!!", Some(Match { index: 1, len: 18 })),
        ("true", Some(Match { index: 19, len: 7 })),
        ("possibly", Some(Match { index: 8, len: 11 })),
        ("absent", None),
    ];

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let searcher = Arc::clone(&searcher);
            let (needle, expected) = cases[i % cases.len()];
            thread::spawn(move || {
                for _ in 0..50 {
                    assert_eq!(searcher.find(HAYSTACK, needle), expected, "needle {needle:?}");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("search thread panicked");
    }
}

#[cfg(feature = "icu")]
#[test]
fn shared_icu_collator_across_threads() {
    use localefind::IcuProvider;

    let collator: Arc<dyn Collator> = Arc::new(
        localefind::IcuCollator::try_new(
            Some("en"),
            &CollationOptions::new(Sensitivity::Base).for_search(),
        )
        .expect("collator"),
    );
    let searcher = Arc::new(
        LocaleSearcher::new(collator, &IcuProvider, default_segmenter()).expect("searcher"),
    );

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let searcher = Arc::clone(&searcher);
            thread::spawn(move || searcher.find("here is \u{00E4} for you", "A"))
        })
        .collect();

    for handle in handles {
        let found = handle.join().expect("search thread panicked");
        assert_eq!(found, Some(Match { index: 8, len: 2 }));
    }
}

#[test]
fn searchers_per_thread_agree() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                let collator: Arc<dyn Collator> = Arc::new(FoldCollator::new(
                    "en",
                    CollationOptions::new(Sensitivity::Base).for_search(),
                ));
                LocaleSearcher::new(collator, &FoldProvider, default_segmenter())
                    .expect("searcher")
                    .find("x CAF\u{00C9} y", "cafe")
            })
        })
        .collect();

    for handle in handles {
        let found = handle.join().expect("search thread panicked");
        assert_eq!(found, Some(Match { index: 2, len: 5 }));
    }
}
