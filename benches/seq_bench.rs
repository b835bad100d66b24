// Benchmarks for the exact-size reallocation policy.
//
// Every structural mutation reallocates, so insert/erase are O(len) by
// design. These benchmarks keep that cost visible and compare against Vec
// (amortized growth) as a baseline.

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};

use sequin::seq::Seq;

fn build(len: usize) -> Seq<i64> {
    let mut seq: Seq<i64> = Seq::with_len(len);
    for i in 0..len {
        *seq.get_mut(i).unwrap() = i as i64;
    }
    return seq;
}

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");
    for len in [16usize, 256, 1024] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("seq", len), &len, |b, &len| {
            b.iter(|| {
                let mut seq: Seq<i64> = Seq::new();
                for i in 0..len {
                    seq.insert(seq.end(), black_box(i as i64)).unwrap();
                }
                seq
            });
        });
        group.bench_with_input(BenchmarkId::new("vec", len), &len, |b, &len| {
            b.iter(|| {
                let mut vec: Vec<i64> = Vec::new();
                for i in 0..len {
                    vec.push(black_box(i as i64));
                }
                vec
            });
        });
    }
    group.finish();
}

fn bench_insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_front");
    for len in [16usize, 256, 1024] {
        group.bench_with_input(BenchmarkId::new("seq", len), &len, |b, &len| {
            b.iter(|| {
                let mut seq: Seq<i64> = Seq::new();
                for i in 0..len {
                    seq.insert(seq.begin(), black_box(i as i64)).unwrap();
                }
                seq
            });
        });
        group.bench_with_input(BenchmarkId::new("vec", len), &len, |b, &len| {
            b.iter(|| {
                let mut vec: Vec<i64> = Vec::new();
                for i in 0..len {
                    vec.insert(0, black_box(i as i64));
                }
                vec
            });
        });
    }
    group.finish();
}

fn bench_erase_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("erase_front");
    for len in [16usize, 256, 1024] {
        group.bench_with_input(BenchmarkId::new("seq", len), &len, |b, &len| {
            b.iter_batched(
                || build(len),
                |mut seq| {
                    while !seq.is_empty() {
                        seq.erase(seq.begin()).unwrap();
                    }
                    seq
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_cursor_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("cursor_walk");
    for len in [256usize, 4096] {
        group.throughput(Throughput::Elements(len as u64));
        let seq = build(len);
        group.bench_with_input(BenchmarkId::new("seq", len), &seq, |b, seq| {
            b.iter(|| {
                let mut sum = 0i64;
                let mut cursor = seq.begin();
                while cursor != seq.end() {
                    sum += *seq.deref(cursor).unwrap();
                    cursor.advance(seq).unwrap();
                }
                black_box(sum)
            });
        });
    }
    group.finish();
}

fn bench_share(c: &mut Criterion) {
    let mut group = c.benchmark_group("share");
    let seq = build(4096);
    group.bench_function("snapshot", |b| {
        b.iter(|| black_box(seq.share()));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_append,
    bench_insert_front,
    bench_erase_front,
    bench_cursor_walk,
    bench_share
);
criterion_main!(benches);
