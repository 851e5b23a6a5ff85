//! Shell Module
//!
//! Line-oriented JSON front end over a string-keyed cache.
//!
//! Each input line holds one [`Command`](crate::models::Command); each produces
//! exactly one JSON [`Response`](crate::models::Response) line.

pub mod handlers;

use std::io::{BufRead, Write};

use tracing::debug;

pub use handlers::Shell;

/// Runs the command loop until `input` is exhausted.
///
/// Blank lines are skipped. Malformed commands produce an error response and
/// do not stop the loop. Returns the number of commands handled.
pub fn run<R: BufRead, W: Write>(
    shell: &mut Shell,
    input: R,
    mut output: W,
) -> std::io::Result<usize> {
    let mut handled = 0;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = shell.handle_line(&line);
        if response.is_error() {
            debug!(line = %line, "rejected command");
        }
        serde_json::to_writer(&mut output, &response)?;
        output.write_all(b"\n")?;
        handled += 1;
    }
    output.flush()?;
    Ok(handled)
}
