//! Factory pattern: a string key selects which drawing behavior to build.
//!
//! Run with: cargo run --bin factory_shapes

pub trait Shape {
    fn draw(&self) -> String;
}

pub struct Circle;

impl Shape for Circle {
    fn draw(&self) -> String {
        "drawing circles".to_string()
    }
}

pub struct Rectangle;

impl Shape for Rectangle {
    fn draw(&self) -> String {
        "drawing rectangle".to_string()
    }
}

pub struct ShapeFactory;

impl ShapeFactory {
    /// Matches the key case-insensitively; unknown keys produce no shape.
    pub fn create(kind: &str) -> Option<Box<dyn Shape>> {
        if kind.eq_ignore_ascii_case("circle") {
            Some(Box::new(Circle))
        } else if kind.eq_ignore_ascii_case("rectangle") {
            Some(Box::new(Rectangle))
        } else {
            None
        }
    }
}

fn main() {
    for kind in ["circle", "RECTANGLE", "triangle"] {
        match ShapeFactory::create(kind) {
            Some(shape) => println!("{}", shape.draw()),
            None => println!("no shape registered for '{kind}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_key_builds_circle_behavior() {
        let shape = ShapeFactory::create("circle").unwrap();
        assert_eq!(shape.draw(), "drawing circles");
    }

    #[test]
    fn test_match_ignores_case() {
        let shape = ShapeFactory::create("RECTANGLE").unwrap();
        assert_eq!(shape.draw(), "drawing rectangle");

        assert!(ShapeFactory::create("CiRcLe").is_some());
    }

    #[test]
    fn test_unknown_key_is_absent() {
        assert!(ShapeFactory::create("triangle").is_none());
        assert!(ShapeFactory::create("").is_none());
    }
}
