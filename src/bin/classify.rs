use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::Level;

use message_analyzer::analyze_message;

// Reads one message per line from stdin and prints the JSON analysis the chat
// UI consumes. Handy for smoke testing rule changes:
//
//   echo "Para a cidade Teste, trabalhamos apenas com imóveis rurais." | classify
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = line?;
        let analysis = analyze_message(&line);
        writeln!(out, "{}", serde_json::to_string(&analysis)?)?;
    }
    Ok(())
}
