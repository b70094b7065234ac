use crossbeam::channel::{unbounded, Sender};
use rayon::prelude::*;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoolError {
    #[error("pool is shut down")]
    ShutDown,
}

type Task = Box<dyn FnOnce() + Send + 'static>;

// =============================================================================
// Milestone 1: Fixed-size worker pool
// =============================================================================

/// A fixed set of worker threads draining one shared task channel. With a
/// single worker, tasks run strictly in submission order.
pub struct FixedPool {
    workers: Vec<JoinHandle<()>>,
    sender: Option<Sender<Task>>,
}

impl FixedPool {
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "pool needs at least one worker");

        let (sender, receiver) = unbounded::<Task>();
        let workers = (0..size)
            .map(|i| {
                let receiver = receiver.clone();
                thread::Builder::new()
                    .name(format!("pool-worker-{i}"))
                    .spawn(move || {
                        // Exits when the channel is closed and empty.
                        while let Ok(task) = receiver.recv() {
                            task();
                        }
                    })
                    .expect("failed to spawn pool worker")
            })
            .collect();

        FixedPool {
            workers,
            sender: Some(sender),
        }
    }

    pub fn with_default_size() -> Self {
        Self::new(num_cpus::get())
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    pub fn execute<F>(&self, task: F) -> Result<(), PoolError>
    where
        F: FnOnce() + Send + 'static,
    {
        match &self.sender {
            Some(sender) => sender.send(Box::new(task)).map_err(|_| PoolError::ShutDown),
            None => Err(PoolError::ShutDown),
        }
    }

    /// Stops accepting tasks, lets the workers drain everything already
    /// submitted, and joins them.
    pub fn shutdown(&mut self) {
        self.sender.take();
        for worker in self.workers.drain(..) {
            let _ = worker.join();
        }
    }
}

impl Drop for FixedPool {
    fn drop(&mut self) {
        self.shutdown();
    }
}

// =============================================================================
// Milestone 2: One thread per task
// =============================================================================

/// Gives every task its own named thread and waits for all of them,
/// trading reuse for maximum concurrency.
pub fn spawn_each(tasks: Vec<Task>) {
    let handles: Vec<JoinHandle<()>> = tasks
        .into_iter()
        .enumerate()
        .map(|(i, task)| {
            thread::Builder::new()
                .name(format!("task-thread-{}", i + 1))
                .spawn(task)
                .expect("failed to spawn task thread")
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

// =============================================================================
// Milestone 3: Delayed one-shot execution
// =============================================================================

/// Runs `task` once after `delay`, on its own thread. Joining the handle
/// waits for the result.
pub fn schedule_once<F, T>(delay: Duration, task: F) -> JoinHandle<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    thread::spawn(move || {
        thread::sleep(delay);
        task()
    })
}

// =============================================================================
// Milestone 4: The same fan-out on rayon
// =============================================================================

/// Runs `tasks` numbered jobs on a rayon pool of `width` threads.
/// Returns `(task number, worker index)` pairs in task order.
pub fn rayon_fan_out(width: usize, tasks: usize) -> Vec<(usize, usize)> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(width)
        .build()
        .expect("failed to build rayon pool");

    pool.install(|| {
        (0..tasks)
            .into_par_iter()
            .map(|i| (i + 1, rayon::current_thread_index().unwrap_or(0)))
            .collect()
    })
}

fn main() {
    println!("=== Fixed pool, 3 workers ===");
    let mut pool = FixedPool::new(3);
    for i in 0..3 {
        pool.execute(move || {
            println!(
                "Task {i} on {}",
                thread::current().name().unwrap_or("<unnamed>")
            );
        })
        .unwrap();
    }
    pool.shutdown();

    println!("\n=== Single worker, strict order ===");
    let mut single = FixedPool::new(1);
    single.execute(|| println!("Task 1")).unwrap();
    single.execute(|| println!("Task 2")).unwrap();
    single.shutdown();

    println!("\n=== One thread per task ===");
    let tasks: Vec<Task> = (1..=5)
        .map(|i| {
            Box::new(move || {
                println!(
                    "Task {i} {}",
                    thread::current().name().unwrap_or("<unnamed>")
                );
            }) as Task
        })
        .collect();
    spawn_each(tasks);

    println!("\n=== Scheduled task ===");
    let handle = schedule_once(Duration::from_millis(500), || {
        println!("This is a scheduled task");
    });
    handle.join().unwrap();

    println!("\n=== Rayon fan-out, 3 workers ===");
    for (task, worker) in rayon_fan_out(3, 5) {
        println!("Task {task} on rayon worker {worker}");
    }
}
