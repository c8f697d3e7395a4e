use canonical::{normalize, TermMatcher};
use std::env;

fn main() {
    let term = env::args().nth(1).unwrap_or_else(|| "joão".to_string());
    let matcher = TermMatcher::new(&term);
    println!("term: {term:?} -> key: {:?}", matcher.key());

    for candidate in ["João Silva", "JOAO PEREIRA", "Maria Souza", "Cardiología"] {
        println!(
            "{candidate:<16} key={:<16} match={}",
            normalize(candidate),
            matcher.matches(candidate)
        );
    }
}
