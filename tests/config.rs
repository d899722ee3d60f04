use std::sync::Arc;
use std::thread;

use parking_lot::Mutex;
use picalc::chan::Queue;
use picalc::init;
use picalc::proc::Process;
use picalc::runtime::Runtime;
use picalc::runtime::RuntimeConfig;

#[test]
fn channel_use_does_not_install_config() {
  let queue: Queue<i32> = Queue::new(4).unwrap();

  queue.push(1).unwrap();
  assert_eq!(queue.pop().unwrap(), 1);

  assert!(!Runtime::is_configured(), "reading the defaults installed a config");
  assert_eq!(Runtime::config().rt_thread_name, "picalc");

  let name: Arc<Mutex<Option<String>>> = Arc::default();

  let process: Process = {
    let name: Arc<Mutex<Option<String>>> = Arc::clone(&name);
    Process::new(move || *name.lock() = thread::current().name().map(str::to_owned))
  };

  let mut config: RuntimeConfig = RuntimeConfig::new();
  config.rt_thread_name = String::from("custom");

  init::run_opts(process, config).unwrap();

  assert!(Runtime::is_configured());
  assert_eq!(Runtime::config().rt_thread_name, "custom");

  let name: Option<String> = name.lock().clone();
  assert!(name.unwrap().starts_with("custom-"));
}
