//! One shared profile instance, injected explicitly.
//!
//! The classic lazy singleton keeps a publicly settable global; here the
//! composing caller owns the single instance and hands cloneable handles
//! to everything that needs it. No global state, and the handle works
//! across threads.
//!
//! Run with: cargo run --bin shared_profile

use colored::Colorize;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Profile {
    pub name: String,
    pub age: String,
}

/// Cloneable handle to a single shared `Profile`. Every clone points at
/// the same instance; a write through any handle is visible to all.
#[derive(Clone, Default)]
pub struct SharedProfile {
    inner: Arc<Mutex<Profile>>,
}

impl SharedProfile {
    pub fn new(profile: Profile) -> Self {
        SharedProfile {
            inner: Arc::new(Mutex::new(profile)),
        }
    }

    pub fn set_name(&self, name: &str) {
        self.inner.lock().unwrap().name = name.to_string();
    }

    pub fn set_age(&self, age: &str) {
        self.inner.lock().unwrap().age = age.to_string();
    }

    pub fn snapshot(&self) -> Profile {
        self.inner.lock().unwrap().clone()
    }

    /// True when both handles refer to the same instance.
    pub fn same_instance(&self, other: &SharedProfile) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Reads through its injected handle.
pub struct Greeter {
    profile: SharedProfile,
}

impl Greeter {
    pub fn new(profile: SharedProfile) -> Self {
        Greeter { profile }
    }

    pub fn greeting(&self) -> String {
        let p = self.profile.snapshot();
        format!("hello {}, age {}", p.name, p.age)
    }
}

/// Writes through its injected handle.
pub struct Editor {
    profile: SharedProfile,
}

impl Editor {
    pub fn new(profile: SharedProfile) -> Self {
        Editor { profile }
    }

    pub fn rename(&self, name: &str) {
        self.profile.set_name(name);
    }
}

fn main() {
    // The composing caller owns the one instance.
    let profile = SharedProfile::new(Profile {
        name: "unset".to_string(),
        age: "unset".to_string(),
    });

    let greeter = Greeter::new(profile.clone());
    let editor = Editor::new(profile.clone());

    println!("{}", "=== One instance, two components ===".bold());
    println!("before: {}", greeter.greeting());
    editor.rename("Anish");
    profile.set_age("30");
    println!("after:  {}", greeter.greeting());

    println!("\n{}", "=== The handle crosses threads ===".bold());
    let worker_handle = profile.clone();
    thread::spawn(move || worker_handle.set_age("31"))
        .join()
        .unwrap();
    println!("after thread: {}", greeter.greeting());
}
