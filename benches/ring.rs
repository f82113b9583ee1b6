use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ringdeque::RingDeque;
use std::collections::VecDeque;

fn bench_ring(c: &mut Criterion) {
    let n = 1024;
    {
        let mut group = c.benchmark_group("VecDeque vs RingDeque (PushBack 1024)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d = VecDeque::with_capacity(n);
                for i in 0..n {
                    d.push_back(black_box(i as i32));
                }
                d
            })
        });

        group.bench_function("RingDeque<i32>", |b| {
            b.iter(|| {
                let mut d = RingDeque::with_capacity(n);
                for i in 0..n {
                    d.push_back(black_box(i as i32));
                }
                d
            })
        });
        group.finish();
    }

    {
        // steady state of a sliding window: every push evicts
        let mut group = c.benchmark_group("VecDeque vs RingDeque (Window 64)");
        let window = 64;
        group.bench_function("std::collections::VecDeque", |b| {
            let mut d: VecDeque<i32> = (0..window as i32).collect();
            b.iter(|| {
                for i in 0..n {
                    if d.len() == window {
                        d.pop_front();
                    }
                    d.push_back(black_box(i as i32));
                }
            })
        });

        group.bench_function("RingDeque<i32>", |b| {
            let mut d = RingDeque::with_capacity(window);
            d.extend(0..window as i32);
            b.iter(|| {
                for i in 0..n {
                    black_box(d.push_back(black_box(i as i32)));
                }
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("RingDeque (Contains 1024)");
        let mut d = RingDeque::with_capacity(n);
        d.extend(0..n as i32);
        group.bench_function("RingDeque<i32>", |b| {
            b.iter(|| black_box(d.contains(black_box(&(n as i32 - 1)))))
        });
        group.finish();
    }
}

criterion_group!(benches, bench_ring);
criterion_main!(benches);
