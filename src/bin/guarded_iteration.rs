//! Iterating a list one thread is appending to, without undefined
//! behavior: readers either iterate a snapshot taken under a read lock
//! or hold the read guard for the whole walk. Writers wait their turn.
//!
//! Run with: cargo run --bin guarded_iteration

use std::sync::RwLock;
use std::thread;
use std::time::Duration;

pub struct GuardedList<T> {
    items: RwLock<Vec<T>>,
}

impl<T: Clone> GuardedList<T> {
    pub fn new(initial: Vec<T>) -> Self {
        GuardedList {
            items: RwLock::new(initial),
        }
    }

    pub fn push(&self, item: T) {
        self.items.write().unwrap().push(item);
    }

    pub fn len(&self) -> usize {
        self.items.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A point-in-time copy. Iterating the snapshot cannot observe later
    /// writes, partial or otherwise.
    pub fn snapshot(&self) -> Vec<T> {
        self.items.read().unwrap().clone()
    }

    /// Visits every element while holding the read guard, so no write
    /// can interleave with the walk.
    pub fn for_each_guarded<F: FnMut(&T)>(&self, mut visit: F) {
        let items = self.items.read().unwrap();
        for item in items.iter() {
            visit(item);
        }
    }
}

fn main() {
    let list = GuardedList::new(vec![1, 2, 3, 4]);

    thread::scope(|s| {
        // Reader walks a snapshot; the concurrent append cannot touch it.
        s.spawn(|| {
            for value in list.snapshot() {
                println!("Iterator: {value}");
                thread::sleep(Duration::from_millis(100));
            }
        });

        // Writer appends mid-iteration.
        s.spawn(|| {
            thread::sleep(Duration::from_millis(200));
            list.push(5);
            println!("Writer: appended 5");
        });
    });

    println!("after both threads: {:?}", list.snapshot());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_snapshot_is_unaffected_by_later_pushes() {
        let list = GuardedList::new(vec![1, 2, 3, 4]);
        let before = list.snapshot();

        list.push(5);

        assert_eq!(before, vec![1, 2, 3, 4]);
        assert_eq!(list.snapshot(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_concurrent_append_never_corrupts_a_snapshot() {
        let list = Arc::new(GuardedList::new(vec![1, 2, 3, 4]));

        let snapshots = thread::scope(|s| {
            let reader = {
                let list = Arc::clone(&list);
                s.spawn(move || {
                    // Every snapshot is internally consistent whatever
                    // the writer is doing.
                    (0..100).map(|_| list.snapshot()).collect::<Vec<_>>()
                })
            };

            let writer = {
                let list = Arc::clone(&list);
                s.spawn(move || {
                    for i in 5..50 {
                        list.push(i);
                    }
                })
            };

            writer.join().unwrap();
            reader.join().unwrap()
        });

        for snapshot in snapshots {
            // A snapshot is always a prefix of the final list.
            assert!(snapshot.len() >= 4);
            assert_eq!(snapshot, (1..=snapshot.len() as i32).collect::<Vec<_>>());
        }
        assert_eq!(list.len(), 49);
    }

    #[test]
    fn test_guarded_walk_sees_a_consistent_list() {
        let list = GuardedList::new(vec![10, 20, 30]);
        let mut seen = Vec::new();
        list.for_each_guarded(|value| seen.push(*value));
        assert_eq!(seen, vec![10, 20, 30]);
    }

    #[test]
    fn test_empty_list() {
        let list: GuardedList<i32> = GuardedList::new(Vec::new());
        assert!(list.is_empty());
        assert!(list.snapshot().is_empty());

        let mut visits = 0;
        list.for_each_guarded(|_| visits += 1);
        assert_eq!(visits, 0);
    }
}
