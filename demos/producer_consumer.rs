//! A producer and a consumer wired through a bounded queue.
//!
//! The producer reads lines from stdin until EOF; the consumer prints each
//! line it pops. Run with `cargo run --example producer_consumer`.

use std::io;

use picalc::cell::Cell;
use picalc::chan::InputChannel;
use picalc::chan::OutputChannel;
use picalc::chan::Queue;
use picalc::init;
use picalc::proc::Parallel;
use picalc::proc::Process;
use picalc::proc::Replication;
use picalc::proc::StopToken;
use picalc::runtime::RuntimeConfig;

fn main() {
  let queue: Queue<String> = Queue::default();
  let produced: Cell<String> = Cell::default();
  let consumed: Cell<String> = Cell::default();
  let stop: StopToken = StopToken::new();

  let input: InputChannel<String> = {
    let stop: StopToken = stop.clone();

    InputChannel::new(move || {
      let mut line: String = String::new();

      match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => {
          stop.stop();
          String::new()
        }
        Ok(_) => line.trim_end().to_owned(),
      }
    })
  };

  let output: OutputChannel<String> = OutputChannel::new(|line: String| {
    if !line.is_empty() {
      println!("> {line}");
    }
  });

  let producer: Replication =
    Replication::with_stop(input.bind(&produced) * queue.push_from(&produced), stop);

  let consumer: Replication = !(queue.pop_into(&consumed) * output.bind(&consumed));

  let close: Process = {
    let queue: Queue<String> = queue.clone();
    Process::new(move || queue.close())
  };

  let system: Parallel = (producer * close) | consumer;

  let mut config: RuntimeConfig = RuntimeConfig::new();
  config.tracing_verbose = true;

  if let Err(error) = init::run_opts(system, config) {
    eprintln!("{error}");
  }
}
