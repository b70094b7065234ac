use crossbeam::channel::bounded;
use std::sync::{Condvar, Mutex};
use std::thread;

// =============================================================================
// Part 1: Condition variable with a predicate loop
// =============================================================================

// Two workers advance one counter in phases: worker one counts to its
// limit and signals, worker two waits for that signal and continues to
// its own limit. The waiter re-checks the predicate under the lock, so a
// signal sent before it blocks is never lost.

struct CounterState {
    count: u64,
    first_done: bool,
}

pub struct PhasedCounter {
    state: Mutex<CounterState>,
    first_done: Condvar,
}

impl PhasedCounter {
    pub fn new() -> Self {
        PhasedCounter {
            state: Mutex::new(CounterState {
                count: 0,
                first_done: false,
            }),
            first_done: Condvar::new(),
        }
    }

    /// Phase one: advance the counter up to `limit`, then mark the phase
    /// complete and wake any waiter. Returns the values this worker
    /// produced.
    pub fn run_first(&self, limit: u64) -> Vec<u64> {
        let mut state = self.state.lock().unwrap();
        let mut produced = Vec::new();
        while state.count < limit {
            state.count += 1;
            produced.push(state.count);
        }
        state.first_done = true;
        self.first_done.notify_all();
        produced
    }

    /// Phase two: wait while phase one is incomplete, then continue the
    /// same counter up to `limit`.
    pub fn run_second(&self, limit: u64) -> Vec<u64> {
        let mut state = self.state.lock().unwrap();
        while !state.first_done {
            state = self.first_done.wait(state).unwrap();
        }
        let mut produced = Vec::new();
        while state.count < limit {
            state.count += 1;
            produced.push(state.count);
        }
        produced
    }

    pub fn count(&self) -> u64 {
        self.state.lock().unwrap().count
    }
}

impl Default for PhasedCounter {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Part 2: Channel-based handoff
// =============================================================================

/// Same two-phase protocol without shared state: worker one counts up to
/// `first_limit` and sends the counter through a channel; worker two
/// receives it and continues to `second_limit`. Returns what each worker
/// produced.
pub fn channel_handoff(first_limit: u64, second_limit: u64) -> (Vec<u64>, Vec<u64>) {
    let (tx, rx) = bounded(1);

    let first = thread::spawn(move || {
        let mut count = 0u64;
        let mut produced = Vec::new();
        while count < first_limit {
            count += 1;
            produced.push(count);
        }
        tx.send(count).unwrap();
        produced
    });

    let second = thread::spawn(move || {
        let mut count = rx.recv().unwrap();
        let mut produced = Vec::new();
        while count < second_limit {
            count += 1;
            produced.push(count);
        }
        produced
    });

    (first.join().unwrap(), second.join().unwrap())
}

fn summarize(label: &str, produced: &[u64]) {
    match (produced.first(), produced.last()) {
        (Some(first), Some(last)) => {
            println!("{label} counted {first}..={last} ({} values)", produced.len())
        }
        _ => println!("{label} had nothing left to count"),
    }
}

fn main() {
    println!("=== Condvar handoff ===");
    let counter = PhasedCounter::new();
    thread::scope(|s| {
        // Spawned first on purpose: it blocks on the predicate until
        // worker one finishes.
        let second = s.spawn(|| counter.run_second(100));
        let first = s.spawn(|| counter.run_first(50));

        summarize("worker one", &first.join().unwrap());
        summarize("worker two", &second.join().unwrap());
    });
    println!("final count: {}", counter.count());

    println!("\n=== Channel handoff ===");
    let (first, second) = channel_handoff(50, 100);
    summarize("worker one", &first);
    summarize("worker two", &second);
}
