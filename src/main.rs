#[macro_use]
extern crate log;
extern crate ternary_collections;

use simplelog::{Config, LevelFilter, SimpleLogger, TermLogger};
use std::env;
use std::iter;
use ternary_collections::ternary_tree::{AdjustingTernarySet, Result, SplayTernarySet};

const WORDS: [&str; 8] = ["font", "ask", "an", "fork", "for", "rest", "cap", "or"];
const QUERIES: [&str; 9] = ["font", "ask", "an", "fork", "for", "rest", "tap", "cap", "or"];

fn init_logger() {
    let level = env::var("TERNARY_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Info);
    if TermLogger::init(level, Config::default()).is_err() {
        if let Err(error) = SimpleLogger::init(level, Config::default()) {
            eprintln!("failed to initialize logger: {}", error);
        }
    }
}

fn run_splay() -> Result<()> {
    let mut set = SplayTernarySet::new();
    for word in &WORDS {
        set.insert(word)?;
    }
    println!("{}", set.snapshot());

    for word in &["ask", "for", "font", "tap", "or", "fork"] {
        println!("Splay search {} - {}", word, set.splay_contains(word)?);
    }
    println!("{}", set.snapshot());

    println!("Searching the strings after splaying.");
    for word in &QUERIES {
        println!("Search {} - {}", word, set.contains(word)?);
    }
    Ok(())
}

fn run_conditional() -> Result<()> {
    let mut set = AdjustingTernarySet::new();
    for word in &WORDS {
        set.insert(word)?;
    }
    for word in &QUERIES {
        println!("Search {} - {}", word, set.contains(word)?);
    }
    println!("{}", set.snapshot());

    let runs = [
        ("cap", 2),
        ("rest", 2),
        ("for", 4),
        ("rest", 12),
        ("ask", 20),
        ("cap", 4),
        ("font", 2),
    ];
    for word in runs.iter().flat_map(|&(word, times)| iter::repeat(word).take(times)) {
        let found = set.conditional_splay_contains(word)?;
        let root = set.snapshot().root().map(|node| node.key);
        println!(
            "Conditional search {} - {} (root {:?}, weight {})",
            word,
            found,
            root,
            set.root_weight(),
        );
    }
    println!("{}", set.snapshot());

    println!("Searching the strings after splaying.");
    for word in &QUERIES {
        println!("Search {} - {}", word, set.contains(word)?);
    }
    Ok(())
}

fn main() {
    init_logger();

    if let Err(error) = run_splay().and_then(|_| run_conditional()) {
        error!("demo failed: {}", error);
    }
}
