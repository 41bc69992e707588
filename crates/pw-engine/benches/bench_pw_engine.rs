use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pw_engine::{Dictionary, Engine};
use rand::{Rng, SeedableRng};

const WORDS: &[&str] = &[
    "a", "be", "call", "cat", "dog", "flowers", "go", "hello", "hi", "it", "kitty", "me",
    "no", "phone", "star", "wars", "we", "word", "you", "zoo",
];

fn engine() -> Engine {
    Engine::new(WORDS.iter().copied().collect::<Dictionary>())
}

fn generate_numbers(count: usize, len: usize) -> Vec<String> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| (0..len).map(|_| char::from(b'0' + rng.gen_range(0..10u8))).collect())
        .collect()
}

fn bench_find_phonewords(c: &mut Criterion) {
    let engine = engine();
    c.bench_function("find_phonewords_star_wars", |b| {
        b.iter(|| black_box(engine.find_phonewords(black_box("7827-9277-1"))))
    });
    for &len in &[7, 10] {
        let numbers = generate_numbers(100, len);
        c.bench_function(&format!("find_phonewords_random_{len}_digits"), |b| {
            b.iter(|| {
                for n in &numbers {
                    black_box(engine.find_phonewords(n));
                }
            })
        });
    }
}

fn bench_batch(c: &mut Criterion) {
    let engine = engine();
    let numbers = generate_numbers(1000, 8);
    c.bench_function("find_all_1000_numbers", |b| {
        b.iter(|| black_box(engine.find_all_flat(black_box(&numbers))))
    });
}

criterion_group!(benches, bench_find_phonewords, bench_batch);
criterion_main!(benches);
