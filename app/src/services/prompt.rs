// app/src/services/prompt.rs

use std::io::{self, BufRead, Write};
use tracing::warn;

/// Blocking user interaction: the modal `alert` after a cart add and the
/// `confirm` guarding product deletion. Injected so tests can script the
/// answers.
pub trait UserPrompt: Send + Sync {
  fn alert(&self, message: &str);
  fn confirm(&self, question: &str) -> bool;
}

/// Terminal-backed prompt used by the demo binary. `confirm` accepts a
/// leading `y`/`Y` as assent; everything else (including read failure)
/// declines.
pub struct ConsolePrompt;

impl UserPrompt for ConsolePrompt {
  fn alert(&self, message: &str) {
    println!("{}", message);
  }

  fn confirm(&self, question: &str) -> bool {
    print!("{} [y/N] ", question);
    if io::stdout().flush().is_err() {
      return false;
    }
    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
      Ok(_) => matches!(answer.trim_start().chars().next(), Some('y') | Some('Y')),
      Err(e) => {
        warn!(error = %e, "could not read confirmation answer");
        false
      }
    }
  }
}
