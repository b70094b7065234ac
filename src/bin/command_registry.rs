//! Name-keyed command registry built at startup.
//!
//! Languages with runtime reflection find a method by name, read an
//! annotation off it, and invoke it. The explicit equivalent is a map
//! populated during initialization: each command registers a name, an
//! optional description string, and a handler.
//!
//! Run with: cargo run --bin command_registry

use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no command registered under '{0}'")]
    UnknownCommand(String),
}

type Handler = Box<dyn Fn() -> String>;

struct CommandEntry {
    about: Option<&'static str>,
    handler: Handler,
}

#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandEntry>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        CommandRegistry {
            commands: HashMap::new(),
        }
    }

    pub fn register<F>(&mut self, name: &'static str, about: Option<&'static str>, handler: F)
    where
        F: Fn() -> String + 'static,
    {
        self.commands.insert(
            name,
            CommandEntry {
                about,
                handler: Box::new(handler),
            },
        );
    }

    /// The description attached at registration, if any.
    pub fn about(&self, name: &str) -> Result<Option<&'static str>, RegistryError> {
        self.commands
            .get(name)
            .map(|entry| entry.about)
            .ok_or_else(|| RegistryError::UnknownCommand(name.to_string()))
    }

    pub fn invoke(&self, name: &str) -> Result<String, RegistryError> {
        let entry = self
            .commands
            .get(name)
            .ok_or_else(|| RegistryError::UnknownCommand(name.to_string()))?;
        Ok((entry.handler)())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

fn build_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register("my_method", Some("Custom Annotation Example"), || {
        "Method Executed".to_string()
    });
    registry.register("bare_method", None, || "bare method executed".to_string());
    registry
}

fn main() {
    let registry = build_registry();

    // Look the command up by name, read its metadata, then invoke it.
    match registry.about("my_method") {
        Ok(Some(about)) => println!("description: {about}"),
        Ok(None) => println!("no description attached"),
        Err(err) => println!("{err}"),
    }

    match registry.invoke("my_method") {
        Ok(output) => println!("{output}"),
        Err(err) => println!("{err}"),
    }

    if let Err(err) = registry.invoke("missing_method") {
        println!("{err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_reads_metadata_and_invokes() {
        let registry = build_registry();

        assert_eq!(
            registry.about("my_method").unwrap(),
            Some("Custom Annotation Example")
        );
        assert_eq!(registry.invoke("my_method").unwrap(), "Method Executed");
    }

    #[test]
    fn test_command_without_metadata_still_invocable() {
        let registry = build_registry();

        assert_eq!(registry.about("bare_method").unwrap(), None);
        assert_eq!(
            registry.invoke("bare_method").unwrap(),
            "bare method executed"
        );
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        let registry = build_registry();

        assert_eq!(
            registry.invoke("missing_method"),
            Err(RegistryError::UnknownCommand("missing_method".to_string()))
        );
        assert!(registry.about("missing_method").is_err());
    }

    #[test]
    fn test_registering_same_name_replaces_handler() {
        let mut registry = CommandRegistry::new();
        registry.register("cmd", None, || "old".to_string());
        registry.register("cmd", Some("newer"), || "new".to_string());

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.invoke("cmd").unwrap(), "new");
        assert_eq!(registry.about("cmd").unwrap(), Some("newer"));
    }

    #[test]
    fn test_empty_registry() {
        let registry = CommandRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.invoke("anything").is_err());
    }
}
