use voxops::{process_speech, tokenize};

use std::io::{self, Read};

fn main() {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input).unwrap();

    let tokens = tokenize(&input);
    let snapshots = process_speech(tokens.iter().copied());

    for (token, snapshot) in tokens.iter().zip(&snapshots) {
        let current = match &snapshot.current {
            Some(op) => op.to_string(),
            None => "-".to_string(),
        };
        let completed: Vec<String> = snapshot
            .completed
            .iter()
            .map(|op| op.to_string())
            .collect();
        println!(
            "{:<12} current: {:<12} completed: [{}]",
            token,
            current,
            completed.join(", ")
        );
    }

    if let Some(last) = snapshots.last() {
        println!();
        for op in &last.completed {
            println!("{}", op);
        }
        if let Some(op) = &last.current {
            println!("{} (in progress)", op);
        }
    }
}
