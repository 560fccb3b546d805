use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use lifo_stack::LifoStack;

const N: u32 = 10_000;

fn filled(n: u32) -> LifoStack<u32> {
    (0..n).collect()
}

fn bench_push_pop(c: &mut Criterion) {
    c.bench_function("push then pop 10k", |b| {
        b.iter(|| {
            let mut stack = LifoStack::new();
            for i in 0..N {
                stack.push(i);
            }
            while let Ok(x) = stack.pop() {
                black_box(x);
            }
        });
    });
}

fn bench_mixed(c: &mut Criterion) {
    c.bench_function("random push/pop/peek 10k", |b| {
        b.iter(|| {
            let mut rng = SmallRng::from_seed([7; 16]);
            let mut stack = LifoStack::new();
            for i in 0..N {
                match rng.gen_range(0, 4) {
                    0 | 1 => stack.push(i),
                    2 => {
                        black_box(stack.pop().ok());
                    }
                    _ => {
                        black_box(stack.peek().ok());
                    }
                }
            }
        });
    });
}

fn bench_contains(c: &mut Criterion) {
    let stack = filled(N);

    c.bench_function("contains bottom of 10k", move |b| {
        b.iter(|| stack.contains(black_box(&0)));
    });
}

fn bench_iterate(c: &mut Criterion) {
    let stack = filled(N);

    c.bench_function("iterate 10k", move |b| {
        b.iter(|| stack.iter().fold(0u64, |acc, x| acc + u64::from(*x)));
    });
}

criterion_group!(push_pop, bench_push_pop, bench_mixed);
criterion_group!(traversal, bench_contains, bench_iterate);

criterion_main!(push_pop, traversal);
