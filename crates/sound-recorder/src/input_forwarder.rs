//! Blocking input forwarder feeding the command channel.

use crate::AppCommand;

use std::io::BufRead;

use tokio::sync::mpsc;
use tracing::error;

/// Forward driver lines into the command channel until EOF, a read error
/// or a closed channel.
///
/// Runs on a blocking task; the seam where a graphical front-end would
/// attach instead of stdin. EOF sends a final Shutdown. A dropped receiver
/// fails the next send, ending the loop. Unparseable lines surface their
/// usage status directly and are not forwarded.
pub(crate) fn run(mut reader: impl BufRead, command_tx: &mpsc::Sender<AppCommand>) {
    let mut line = String::new();

    loop {
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => {
                let _ = command_tx.blocking_send(AppCommand::Shutdown);
                break;
            }
            Ok(_) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                match AppCommand::parse(trimmed) {
                    Ok(cmd) => {
                        if command_tx.blocking_send(cmd).is_err() {
                            break;
                        }
                    }
                    Err(status) => println!("{status}"),
                }
            }
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        }
    }
}
