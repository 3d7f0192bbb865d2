use std::sync::atomic::{AtomicIsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rwcounter::counters::shared::SharedCounter;

const NUM_THREADS: usize = 8;
const ITERATIONS_PER_THREAD: usize = 100_000;

fn run_threads<C, F>(counter: Arc<C>, op: F)
where
    C: Send + Sync + 'static,
    F: Fn(&C) + Send + Sync + Copy + 'static,
{
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let counter_clone = Arc::clone(&counter);
        let handle = thread::spawn(move || {
            for _ in 0..ITERATIONS_PER_THREAD {
                op(&counter_clone);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }
}

fn bench_increment(c: &mut Criterion) {
    let mut group = c.benchmark_group("counter_increment");
    let label = format!("{}threads x {}iter", NUM_THREADS, ITERATIONS_PER_THREAD);

    group.bench_function(BenchmarkId::new("SharedCounter (rwlock)", &label), |b| {
        b.iter(|| {
            let counter = Arc::new(SharedCounter::<isize>::new());
            run_threads(Arc::clone(&counter), |c: &SharedCounter<isize>| {
                c.increment_and_get();
            });
            black_box(counter.get_value())
        })
    });

    group.bench_function(BenchmarkId::new("Mutex<isize>", &label), |b| {
        b.iter(|| {
            let counter = Arc::new(Mutex::new(0isize));
            run_threads(Arc::clone(&counter), |c: &Mutex<isize>| {
                *c.lock().unwrap() += 1;
            });
            let value = *counter.lock().unwrap();
            black_box(value)
        })
    });

    group.bench_function(BenchmarkId::new("AtomicIsize (single)", &label), |b| {
        b.iter(|| {
            let counter = Arc::new(AtomicIsize::new(0));
            run_threads(Arc::clone(&counter), |c: &AtomicIsize| {
                c.fetch_add(1, Ordering::Relaxed);
            });
            black_box(counter.load(Ordering::Relaxed))
        })
    });

    group.finish();
}

fn bench_read_mostly(c: &mut Criterion) {
    let mut group = c.benchmark_group("counter_read_mostly");
    let label = format!("{}threads x {}iter", NUM_THREADS, ITERATIONS_PER_THREAD);

    group.bench_function(BenchmarkId::new("SharedCounter (rwlock)", &label), |b| {
        b.iter(|| {
            let counter = Arc::new(SharedCounter::<isize>::new());
            run_threads(Arc::clone(&counter), |c: &SharedCounter<isize>| {
                if black_box(c.get_value()) % 64 == 0 {
                    c.increment_and_get();
                }
            });
            black_box(counter.get_value())
        })
    });

    group.bench_function(BenchmarkId::new("Mutex<isize>", &label), |b| {
        b.iter(|| {
            let counter = Arc::new(Mutex::new(0isize));
            run_threads(Arc::clone(&counter), |c: &Mutex<isize>| {
                let value = *c.lock().unwrap();
                if black_box(value) % 64 == 0 {
                    *c.lock().unwrap() += 1;
                }
            });
            let value = *counter.lock().unwrap();
            black_box(value)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_increment, bench_read_mostly);
criterion_main!(benches);
