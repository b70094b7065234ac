use itertools::Itertools;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

// =============================================================================
// Part 1: Largest-first integer queue
// =============================================================================

/// Drains a heap into the order `pop` produces.
pub fn drain<T: Ord>(mut heap: BinaryHeap<T>) -> Vec<T> {
    let mut out = Vec::with_capacity(heap.len());
    while let Some(item) = heap.pop() {
        out.push(item);
    }
    out
}

// =============================================================================
// Part 2: Job queue ordered by priority, then name
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub name: String,
    pub priority: u32,
}

impl Job {
    pub fn new(name: &str, priority: u32) -> Self {
        Job {
            name: name.to_string(),
            priority,
        }
    }
}

// Highest priority wins; ties go to the lexicographically smaller name.
// The name comparison is reversed so that a max-first heap pops names
// in ascending order within one priority.
impl Ord for Job {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| other.name.cmp(&self.name))
    }
}

impl PartialOrd for Job {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn seed_jobs() -> BinaryHeap<Job> {
    let mut jobs = BinaryHeap::new();
    jobs.push(Job::new("first", 1));
    jobs.push(Job::new("high", 5));
    jobs.push(Job::new("asecond High", 5));
    jobs.push(Job::new("third", 3));
    jobs.push(Job::new("fourth", 4));
    jobs
}

fn main() {
    println!("=== Largest-first integer queue ===");
    let numbers: BinaryHeap<i32> = [30, 10, 5, 15].into_iter().collect();
    println!("peek: {:?}", numbers.peek());
    println!("drain: {}", drain(numbers).iter().join(", "));

    println!("\n=== Job queue ===");
    let jobs = seed_jobs();
    println!("next up: {}", jobs.peek().map(|j| j.name.as_str()).unwrap_or("<none>"));
    for job in drain(jobs) {
        println!("{} with priority of {}", job.name, job.priority);
    }
}
