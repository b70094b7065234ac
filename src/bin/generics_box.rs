use itertools::Itertools;
use std::fmt::Display;
use std::ops::Add;

// =============================================================================
// Part 1: Single-slot generic container
// =============================================================================

/// Holds at most one value of any type. `set` followed by `get` returns
/// exactly the value that was stored.
#[derive(Debug, Default)]
pub struct Slot<T> {
    item: Option<T>,
}

impl<T> Slot<T> {
    pub fn new() -> Self {
        Slot { item: None }
    }

    pub fn set(&mut self, item: T) {
        self.item = Some(item);
    }

    pub fn get(&self) -> Option<&T> {
        self.item.as_ref()
    }

    pub fn take(&mut self) -> Option<T> {
        self.item.take()
    }

    pub fn is_empty(&self) -> bool {
        self.item.is_none()
    }
}

// =============================================================================
// Part 2: Bounded type parameter
// =============================================================================

/// Bound for slot contents that support arithmetic. Implemented for the
/// primitive number types the demos use.
pub trait Numeric: Copy + PartialOrd + Add<Output = Self> {}

impl Numeric for i32 {}
impl Numeric for i64 {}
impl Numeric for u32 {}
impl Numeric for f64 {}

/// Like `Slot`, but only for numeric contents. The bound is what lets
/// `doubled` do arithmetic without knowing the concrete type.
#[derive(Debug, Default)]
pub struct NumericSlot<T: Numeric> {
    value: Option<T>,
}

impl<T: Numeric> NumericSlot<T> {
    pub fn new() -> Self {
        NumericSlot { value: None }
    }

    pub fn set(&mut self, value: T) {
        self.value = Some(value);
    }

    pub fn get(&self) -> Option<T> {
        self.value
    }

    pub fn doubled(&self) -> Option<T> {
        self.value.map(|v| v + v)
    }
}

// =============================================================================
// Part 3: Generic helpers
// =============================================================================

/// Joins any displayable values with single spaces.
pub fn join_display<T: Display>(items: &[T]) -> String {
    items.iter().join(" ")
}

/// Pushes the literal 10 into any collection whose element type can absorb
/// an `i32`. The call site picks the concrete type.
pub fn seed_ten<T: From<i32>>(values: &mut Vec<T>) {
    values.push(T::from(10));
}

fn main() {
    println!("=== Single-slot container ===");
    let mut string_slot = Slot::new();
    string_slot.set("Hello".to_string());
    println!("string slot holds: {:?}", string_slot.get());

    let mut int_slot = Slot::new();
    int_slot.set(123);
    println!("int slot holds: {:?}", int_slot.get());

    println!("\n=== Bounded numeric slot ===");
    let mut counter = NumericSlot::new();
    counter.set(21);
    println!("21 doubled: {:?}", counter.doubled());

    let mut reading = NumericSlot::new();
    reading.set(2.5);
    println!("2.5 doubled: {:?}", reading.doubled());

    println!("\n=== Generic helpers ===");
    println!("{}", join_display(&[1, 2, 3, 4]));
    println!("{}", join_display(&["A", "B", "C"]));

    let mut totals: Vec<i64> = vec![1, 2, 3];
    seed_ten(&mut totals);
    println!("after seeding: {totals:?}");
}
