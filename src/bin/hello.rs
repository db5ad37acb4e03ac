//! Greeter demo binary

/// Text printed by the greeter
const GREETING: &str = "Hello, world!";

fn main() {
    println!("{GREETING}");
}
