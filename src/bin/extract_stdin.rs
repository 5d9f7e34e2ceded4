//! Simple CLI that reads HTML from stdin and outputs JSON to stdout.

use serde::Serialize;
use std::io::{self, Read};
use storytext::extract;

#[derive(Serialize)]
struct Output {
    title: Option<String>,
    text: String,
}

fn main() {
    let mut html = String::new();
    if io::stdin().read_to_string(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let result = extract(&html);
    let output = Output {
        title: result.title,
        text: result.text,
    };

    println!("{}", serde_json::to_string(&output).unwrap_or_default());
}
