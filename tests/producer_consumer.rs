use std::sync::Arc;
use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering;
use std::sync::mpsc;
use std::sync::mpsc::TryRecvError;
use std::thread;

use parking_lot::Mutex;
use picalc::cell::Cell;
use picalc::chan::InputChannel;
use picalc::chan::OutputChannel;
use picalc::chan::Queue;
use picalc::init;
use picalc::proc::Parallel;
use picalc::proc::Process;
use picalc::proc::Replication;
use picalc::proc::StopToken;

#[test]
fn bounded_queue_blocks_full_push() {
  let queue: Queue<i32> = Queue::new(2).unwrap();
  let (done_tx, done_rx) = mpsc::channel::<()>();

  queue.push(1).unwrap();
  queue.push(2).unwrap();

  let pending = {
    let queue: Queue<i32> = queue.clone();

    thread::spawn(move || {
      queue.push(3).unwrap();
      done_tx.send(()).unwrap();
    })
  };

  // The pending push cannot finish before the pop below frees a slot.
  assert_eq!(done_rx.try_recv(), Err(TryRecvError::Empty), "push on a full queue returned early");
  assert_eq!(queue.len(), 2);

  assert_eq!(queue.pop().unwrap(), 1);

  done_rx.recv().unwrap();
  pending.join().unwrap();

  assert_eq!(queue.to_vec(), [2, 3]);
}

#[test]
fn producer_consumer_through_queue() {
  const ITEMS: u32 = 50;

  let queue: Queue<u32> = Queue::new(2).unwrap();
  let produced: Cell<u32> = Cell::new(0);
  let consumed: Cell<u32> = Cell::new(0);
  let stop: StopToken = StopToken::new();
  let seen: Arc<Mutex<Vec<u32>>> = Arc::default();

  let input: InputChannel<u32> = {
    let next: Arc<AtomicU32> = Arc::new(AtomicU32::new(0));
    let stop: StopToken = stop.clone();

    InputChannel::new(move || {
      let value: u32 = next.fetch_add(1, Ordering::SeqCst) + 1;

      if value == ITEMS {
        stop.stop();
      }

      value
    })
  };

  let output: OutputChannel<u32> = {
    let seen: Arc<Mutex<Vec<u32>>> = Arc::clone(&seen);
    OutputChannel::new(move |value: u32| seen.lock().push(value))
  };

  let producer: Replication =
    Replication::with_stop(input.bind(&produced) * queue.push_from(&produced), stop);

  let consumer: Replication = !(queue.pop_into(&consumed) * output.bind(&consumed));

  let close: Process = {
    let queue: Queue<u32> = queue.clone();
    Process::new(move || queue.close())
  };

  let system: Parallel = (producer * close) | consumer;

  init::run(system).unwrap();

  assert_eq!(*seen.lock(), (1..=ITEMS).collect::<Vec<u32>>());
  assert!(queue.is_closed());
  assert!(queue.is_empty());
}
