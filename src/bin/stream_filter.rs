//! Iterator adapters over a fixed list of names.
//!
//! Run with: cargo run --bin stream_filter

/// Keeps the names starting with `prefix`, preserving list order.
pub fn names_starting_with<'a>(names: &[&'a str], prefix: char) -> Vec<&'a str> {
    names
        .iter()
        .copied()
        .filter(|name| name.starts_with(prefix))
        .collect()
}

fn main() {
    let names = ["Apple", "Anish", "Alpana", "Apun", "salana"];

    for name in names_starting_with(&names, 'A') {
        println!("{name}");
    }
}
