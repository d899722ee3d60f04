#![cfg(loom)]

use loom::thread;
use picalc::chan::Queue;

#[test]
fn push_pop_preserves_order() {
  loom::model(|| {
    let queue: Queue<u32> = Queue::new(1).unwrap();

    let producer = {
      let queue: Queue<u32> = queue.clone();

      thread::spawn(move || {
        queue.push(1).unwrap();
        queue.push(2).unwrap();
      })
    };

    assert_eq!(queue.pop().unwrap(), 1, "first pop out of order");
    assert_eq!(queue.pop().unwrap(), 2, "second pop out of order");

    producer.join().unwrap();

    assert!(queue.is_empty());
  });
}

#[test]
fn capacity_never_exceeded() {
  loom::model(|| {
    let queue: Queue<u32> = Queue::new(1).unwrap();

    let threads: Vec<_> = (0..2)
      .map(|index| {
        let queue: Queue<u32> = queue.clone();

        thread::spawn(move || {
          queue.push(index).unwrap();
          assert!(queue.len() <= 1, "queue exceeded its capacity");
        })
      })
      .collect();

    let mut seen: Vec<u32> = vec![queue.pop().unwrap(), queue.pop().unwrap()];

    for handle in threads {
      handle.join().unwrap();
    }

    seen.sort_unstable();
    assert_eq!(seen, [0, 1]);
  });
}

#[test]
fn close_wakes_blocked_pop() {
  loom::model(|| {
    let queue: Queue<u32> = Queue::new(1).unwrap();

    let consumer = {
      let queue: Queue<u32> = queue.clone();
      thread::spawn(move || queue.pop())
    };

    queue.close();

    assert!(consumer.join().unwrap().is_err(), "pop succeeded on closed queue");
  });
}
