use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use std::collections::BTreeSet;
use std::iter;
use ternary_collections::ternary_tree::{AdjustingTernarySet, SplayTernarySet};

const NUM_OF_WORDS: usize = 1000;
const NUM_OF_LOOKUPS: usize = 1000;
const NUM_OF_HOT_WORDS: usize = 10;

fn generate_words() -> Vec<String> {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    (0..NUM_OF_WORDS)
        .map(|_| {
            let len = rng.gen_range(3, 10);
            iter::repeat(())
                .map(|()| rng.gen_range(b'a', b'{') as char)
                .take(len)
                .collect::<String>()
        })
        .collect()
}

// Lookups where most accesses hit a small set of words.
fn generate_lookups(words: &[String]) -> Vec<String> {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([2, 2, 2, 2]);
    (0..NUM_OF_LOOKUPS)
        .map(|i| {
            let pool = if i % 10 == 0 { words } else { &words[..NUM_OF_HOT_WORDS] };
            rng.choose(pool).cloned().unwrap_or_default()
        })
        .collect()
}

fn splay_set(words: &[String]) -> SplayTernarySet {
    let mut set = SplayTernarySet::new();
    for word in words {
        set.insert(word).ok();
    }
    set
}

fn adjusting_set(words: &[String]) -> AdjustingTernarySet {
    let mut set = AdjustingTernarySet::new();
    for word in words {
        set.insert(word).ok();
    }
    set
}

fn bench_btreeset_contains(c: &mut Criterion) {
    let words = generate_words();
    let lookups = generate_lookups(&words);
    let set = words.iter().cloned().collect::<BTreeSet<String>>();

    c.bench_function("bench btreeset contains", move |b| {
        b.iter(|| {
            for word in &lookups {
                black_box(set.contains(word));
            }
        })
    });
}

fn bench_splay_set_insert(c: &mut Criterion) {
    let words = generate_words();
    c.bench_function("bench splay set insert", move |b| {
        b.iter(|| {
            let mut set = SplayTernarySet::new();
            for word in &words {
                black_box(set.insert(word).ok());
            }
        })
    });
}

fn bench_splay_set_contains(c: &mut Criterion) {
    let words = generate_words();
    let lookups = generate_lookups(&words);
    let set = splay_set(&words);

    c.bench_function("bench splay set contains", move |b| {
        b.iter(|| {
            for word in &lookups {
                black_box(set.contains(word).ok());
            }
        })
    });
}

fn bench_splay_set_splay_contains(c: &mut Criterion) {
    let words = generate_words();
    let lookups = generate_lookups(&words);
    let mut set = splay_set(&words);

    c.bench_function("bench splay set splay contains", move |b| {
        b.iter(|| {
            for word in &lookups {
                black_box(set.splay_contains(word).ok());
            }
        })
    });
}

fn bench_adjusting_set_conditional_splay_contains(c: &mut Criterion) {
    let words = generate_words();
    let lookups = generate_lookups(&words);
    let mut set = adjusting_set(&words);

    c.bench_function("bench adjusting set conditional splay contains", move |b| {
        b.iter(|| {
            for word in &lookups {
                black_box(set.conditional_splay_contains(word).ok());
            }
        })
    });
}

criterion_group!(
    benches,
    bench_btreeset_contains,
    bench_splay_set_insert,
    bench_splay_set_contains,
    bench_splay_set_splay_contains,
    bench_adjusting_set_conditional_splay_contains,
);
criterion_main!(benches);
