use criterion::{black_box, criterion_group, criterion_main, Criterion};
use slot_list::List;

const N: usize = 10_000;

/// Deterministic scrambled sequence of 0..n (an LCG-driven permutation
/// walk), so runs are comparable without pulling in an RNG.
fn scrambled(n: usize) -> Vec<u64> {
    let mut values: Vec<u64> = (0..n as u64).collect();
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    for i in (1..values.len()).rev() {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let j = (state >> 33) as usize % (i + 1);
        values.swap(i, j);
    }
    values
}

fn bench_push_pop(c: &mut Criterion) {
    c.bench_function("push_back_pop_front", |b| {
        b.iter(|| {
            let mut list = List::new();
            for i in 0..N as u64 {
                list.push_back(black_box(i));
            }
            while let Ok(value) = list.pop_front() {
                black_box(value);
            }
        })
    });
}

fn bench_cursor_insert_erase(c: &mut Criterion) {
    c.bench_function("insert_erase_middle", |b| {
        b.iter(|| {
            let mut list: List<u64> = (0..N as u64).collect();
            let mut pos = list.cursor_start_mut();
            for _ in 0..N / 2 {
                pos = list.succ(pos).unwrap();
            }
            for i in 0..1_000 {
                let inserted = list.insert(pos, black_box(i)).unwrap();
                list.erase(inserted).unwrap();
            }
            black_box(list.len())
        })
    });
}

fn bench_sort(c: &mut Criterion) {
    let data = scrambled(N);
    c.bench_function("sort", |b| {
        b.iter(|| {
            let mut list: List<u64> = data.iter().copied().collect();
            list.sort();
            black_box(list.front().ok().copied())
        })
    });
}

fn bench_merge(c: &mut Criterion) {
    c.bench_function("merge", |b| {
        b.iter(|| {
            let mut evens: List<u64> = (0..N as u64).map(|i| i * 2).collect();
            let mut odds: List<u64> = (0..N as u64).map(|i| i * 2 + 1).collect();
            evens.merge(&mut odds);
            black_box(evens.len())
        })
    });
}

criterion_group!(
    benches,
    bench_push_pop,
    bench_cursor_insert_erase,
    bench_sort,
    bench_merge
);
criterion_main!(benches);
