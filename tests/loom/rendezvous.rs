#![cfg(loom)]

use loom::thread;
use picalc::chan::Rendezvous;

#[test]
fn single_outstanding_item() {
  loom::model(|| {
    let chan: Rendezvous<u32> = Rendezvous::new();

    let producer = {
      let chan: Rendezvous<u32> = chan.clone();

      thread::spawn(move || {
        chan.deposit(1).unwrap();
        chan.deposit(2).unwrap();
      })
    };

    assert_eq!(chan.take().unwrap(), 1);
    assert_eq!(chan.take().unwrap(), 2);

    producer.join().unwrap();

    assert!(!chan.is_full());
  });
}

#[test]
fn close_wakes_blocked_deposit() {
  loom::model(|| {
    let chan: Rendezvous<u32> = Rendezvous::new();

    chan.deposit(1).unwrap();

    let producer = {
      let chan: Rendezvous<u32> = chan.clone();
      thread::spawn(move || chan.deposit(2).map_err(|error| error.into_inner()))
    };

    chan.close();

    assert_eq!(producer.join().unwrap(), Err(2), "deposit succeeded on closed rendezvous");
    assert_eq!(chan.take().unwrap(), 1);
  });
}
