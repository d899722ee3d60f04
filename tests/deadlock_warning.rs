use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::thread;
use std::time::Duration;

use picalc::chan::Queue;
use picalc::init;
use picalc::runtime::RuntimeConfig;
use tracing::Event;
use tracing::Level;
use tracing::Subscriber;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;

struct CountWarnings {
  count: Arc<AtomicUsize>,
}

impl<S> Layer<S> for CountWarnings
where
  S: Subscriber,
{
  fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
    let metadata = event.metadata();

    if *metadata.level() == Level::WARN && metadata.target() == "picalc" {
      self.count.fetch_add(1, Ordering::SeqCst);
    }
  }
}

#[test]
fn long_wait_warns_once_and_keeps_waiting() {
  let mut config: RuntimeConfig = RuntimeConfig::new();
  config.rt_deadlock_warning = Some(Duration::from_millis(10));

  assert!(init::install(config));

  let count: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
  let subscriber = tracing_subscriber::registry().with(CountWarnings {
    count: Arc::clone(&count),
  });

  let queue: Queue<i32> = Queue::new(1).unwrap();

  let producer = {
    let queue: Queue<i32> = queue.clone();

    thread::spawn(move || {
      // Several multiples of the threshold.
      thread::sleep(Duration::from_millis(100));
      queue.push(7).unwrap();
    })
  };

  let item: i32 = tracing::subscriber::with_default(subscriber, || queue.pop().unwrap());

  producer.join().unwrap();

  assert_eq!(item, 7);
  assert_eq!(count.load(Ordering::SeqCst), 1);
}
