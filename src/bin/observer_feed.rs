//! Observer pattern: a subject pushes every message change to the
//! listeners currently attached, in the order they were attached.
//!
//! Run with: cargo run --bin observer_feed

use std::rc::Rc;

pub trait Observer {
    fn update(&self, message: &str);
}

pub struct ConsoleObserver {
    name: String,
}

impl ConsoleObserver {
    pub fn new(name: &str) -> Self {
        ConsoleObserver {
            name: name.to_string(),
        }
    }
}

impl Observer for ConsoleObserver {
    fn update(&self, message: &str) {
        println!("{} update received: {message}", self.name);
    }
}

#[derive(Default)]
pub struct Subject {
    observers: Vec<Rc<dyn Observer>>,
    message: Option<String>,
}

impl Subject {
    pub fn new() -> Self {
        Subject::default()
    }

    pub fn attach(&mut self, observer: Rc<dyn Observer>) {
        self.observers.push(observer);
    }

    /// Detaches by identity: only the exact attached instance is removed.
    pub fn detach(&mut self, observer: &Rc<dyn Observer>) {
        self.observers.retain(|o| !Rc::ptr_eq(o, observer));
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn set_message(&mut self, message: &str) {
        self.message = Some(message.to_string());
        self.notify_observers();
    }

    fn notify_observers(&self) {
        if let Some(message) = &self.message {
            for observer in &self.observers {
                observer.update(message);
            }
        }
    }
}

fn main() {
    let mut subject = Subject::new();

    let observer1: Rc<dyn Observer> = Rc::new(ConsoleObserver::new("Observer 1"));
    let observer2: Rc<dyn Observer> = Rc::new(ConsoleObserver::new("Observer 2"));

    subject.attach(Rc::clone(&observer1));
    subject.attach(Rc::clone(&observer2));

    println!("First notification:");
    subject.set_message("Hello, Observers!");

    subject.detach(&observer1);

    println!("Second notification:");
    subject.set_message("Observer 1 has been removed!");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    // Appends "<name>: <message>" to a log shared by the test, so both
    // delivery and ordering are visible.
    struct RecordingObserver {
        name: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Observer for RecordingObserver {
        fn update(&self, message: &str) {
            self.log.borrow_mut().push(format!("{}: {message}", self.name));
        }
    }

    fn recording(name: &'static str, log: &Rc<RefCell<Vec<String>>>) -> Rc<dyn Observer> {
        Rc::new(RecordingObserver {
            name,
            log: Rc::clone(log),
        })
    }

    #[test]
    fn test_all_observers_notified_in_attach_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut subject = Subject::new();
        subject.attach(recording("first", &log));
        subject.attach(recording("second", &log));

        subject.set_message("Hello, Observers!");

        assert_eq!(
            *log.borrow(),
            vec!["first: Hello, Observers!", "second: Hello, Observers!"]
        );
    }

    #[test]
    fn test_detached_observer_receives_nothing() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut subject = Subject::new();
        let first = recording("first", &log);
        subject.attach(Rc::clone(&first));
        subject.attach(recording("second", &log));

        subject.detach(&first);
        subject.set_message("after removal");

        assert_eq!(subject.observer_count(), 1);
        assert_eq!(*log.borrow(), vec!["second: after removal"]);
    }

    #[test]
    fn test_detach_is_by_identity_not_by_name() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut subject = Subject::new();
        let attached = recording("twin", &log);
        let never_attached = recording("twin", &log);
        subject.attach(Rc::clone(&attached));

        subject.detach(&never_attached);
        assert_eq!(subject.observer_count(), 1);

        subject.detach(&attached);
        assert_eq!(subject.observer_count(), 0);
    }

    #[test]
    fn test_every_message_change_is_pushed() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut subject = Subject::new();
        subject.attach(recording("only", &log));

        subject.set_message("one");
        subject.set_message("two");

        assert_eq!(*log.borrow(), vec!["only: one", "only: two"]);
    }

    #[test]
    fn test_no_observers_is_fine() {
        let mut subject = Subject::new();
        subject.set_message("into the void");
        assert_eq!(subject.observer_count(), 0);
    }
}
