use criterion::BenchmarkGroup;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use picalc::cell::Cell;
use picalc::chan::Queue;
use picalc::chan::Rendezvous;
use std::hint::black_box;
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;
use std::time::Instant;

const CAPACITY: &[usize] = &[1, 2, 16, 128];

fn bench_queue(criterion: &mut Criterion) {
  let mut group: BenchmarkGroup<_> = criterion.benchmark_group("queue");

  group.bench_function("single-threaded", |bench| {
    let queue: Queue<u64> = Queue::new(1).unwrap();

    bench.iter(|| {
      queue.push(black_box(1)).unwrap();
      black_box(queue.pop().unwrap());
    })
  });

  for capacity in CAPACITY {
    let id: BenchmarkId = BenchmarkId::new("hand-off", capacity);

    group.bench_with_input(id, capacity, |bench, &capacity| {
      bench.iter_custom(|iters| {
        let queue: Queue<u64> = Queue::new(capacity).unwrap();

        let consumer: JoinHandle<()> = {
          let queue: Queue<u64> = queue.clone();

          thread::spawn(move || {
            for _ in 0..iters {
              black_box(queue.pop().unwrap());
            }
          })
        };

        let start: Instant = Instant::now();

        for index in 0..iters {
          queue.push(index).unwrap();
        }

        consumer.join().unwrap();

        start.elapsed()
      })
    });
  }

  group.finish();
}

fn bench_rendezvous(criterion: &mut Criterion) {
  let mut group: BenchmarkGroup<_> = criterion.benchmark_group("rendezvous");

  group.bench_function("hand-off", |bench| {
    bench.iter_custom(|iters| {
      let chan: Rendezvous<u64> = Rendezvous::new();

      let consumer: JoinHandle<()> = {
        let chan: Rendezvous<u64> = chan.clone();

        thread::spawn(move || {
          for _ in 0..iters {
            black_box(chan.take().unwrap());
          }
        })
      };

      let start: Instant = Instant::now();

      for index in 0..iters {
        chan.deposit(index).unwrap();
      }

      consumer.join().unwrap();

      start.elapsed()
    })
  });

  group.finish();
}

fn bench_cell(criterion: &mut Criterion) {
  let mut group: BenchmarkGroup<_> = criterion.benchmark_group("cell");

  group.bench_function("call", |bench| {
    let a: Cell<u64> = Cell::new(0);
    let b: Cell<u64> = Cell::new(1);
    let process = a.call(&b);

    bench.iter(|| process.invoke())
  });

  group.finish();
}

criterion_group! {
  name = benches;
  config = Criterion::default().measurement_time(Duration::from_secs(5));
  targets = bench_queue, bench_rendezvous, bench_cell
}

criterion_main!(benches);
