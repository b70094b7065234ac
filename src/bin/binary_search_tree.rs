use colored::Colorize;
use itertools::Itertools;
use std::cmp::Ordering;

/// Textbook unbalanced binary search tree. Values equal to a node route
/// left, so duplicates are kept.
pub enum Bst<T> {
    Empty,
    Node {
        value: T,
        left: Box<Bst<T>>,
        right: Box<Bst<T>>,
    },
}

impl<T: Ord> Bst<T> {
    pub fn new() -> Self {
        Bst::Empty
    }

    pub fn insert(&mut self, item: T) {
        match self {
            Bst::Empty => {
                *self = Bst::Node {
                    value: item,
                    left: Box::new(Bst::Empty),
                    right: Box::new(Bst::Empty),
                };
            }
            Bst::Node { value, left, right } => {
                if item <= *value {
                    left.insert(item);
                } else {
                    right.insert(item);
                }
            }
        }
    }

    pub fn contains(&self, target: &T) -> bool {
        match self {
            Bst::Empty => false,
            Bst::Node { value, left, right } => match target.cmp(value) {
                Ordering::Equal => true,
                Ordering::Less => left.contains(target),
                Ordering::Greater => right.contains(target),
            },
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Bst::Empty => 0,
            Bst::Node { left, right, .. } => 1 + left.len() + right.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Bst::Empty)
    }

    pub fn in_order(&self) -> Vec<&T> {
        let mut out = Vec::new();
        self.walk_in_order(&mut out);
        out
    }

    pub fn pre_order(&self) -> Vec<&T> {
        let mut out = Vec::new();
        self.walk_pre_order(&mut out);
        out
    }

    pub fn post_order(&self) -> Vec<&T> {
        let mut out = Vec::new();
        self.walk_post_order(&mut out);
        out
    }

    fn walk_in_order<'a>(&'a self, out: &mut Vec<&'a T>) {
        if let Bst::Node { value, left, right } = self {
            left.walk_in_order(out);
            out.push(value);
            right.walk_in_order(out);
        }
    }

    fn walk_pre_order<'a>(&'a self, out: &mut Vec<&'a T>) {
        if let Bst::Node { value, left, right } = self {
            out.push(value);
            left.walk_pre_order(out);
            right.walk_pre_order(out);
        }
    }

    fn walk_post_order<'a>(&'a self, out: &mut Vec<&'a T>) {
        if let Bst::Node { value, left, right } = self {
            left.walk_post_order(out);
            right.walk_post_order(out);
            out.push(value);
        }
    }
}

impl<T: Ord> Default for Bst<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn main() {
    let mut bst = Bst::new();
    for value in [10, 5, 8, 15, 11] {
        bst.insert(value);
    }

    println!("{}", "=== Traversals ===".bold());
    println!("in-order:   {}", bst.in_order().iter().join(", "));
    println!("pre-order:  {}", bst.pre_order().iter().join(", "));
    println!("post-order: {}", bst.post_order().iter().join(", "));

    println!("\n{}", "=== Membership ===".bold());
    println!("contains(8) = {}", bst.contains(&8));
    println!("contains(9) = {}", bst.contains(&9));
}
