//! Line-oriented address book assistant.
//!
//! Reads one command per line, applies it to the address book, and writes
//! the reply. The book is loaded from a `SnapshotStore` when the session
//! starts and saved back when the user exits or input ends.

pub mod command;
pub mod handlers;

pub use command::Command;
pub use handlers::{Assistant, Reply};

use crate::storage::SnapshotStore;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::io::{self, BufRead, ErrorKind, Write};
use tracing::{debug, info, warn};

const PROMPT: &str = "Enter a command: ";

/// Run an assistant session until `exit`/`close` or end of input.
///
/// `today` supplies the reference date for each `birthdays` query.
pub fn run_session<S, R, W>(
    store: &S,
    birthday_window_days: i64,
    input: R,
    mut output: W,
    today: impl Fn() -> NaiveDate,
) -> Result<()>
where
    S: SnapshotStore + ?Sized,
    R: BufRead,
    W: Write,
{
    let book = store.load()?;
    info!(contacts = book.len(), "Address book loaded");
    let mut assistant = Assistant::new(book, birthday_window_days);

    // The book is saved even when the conversation breaks off on an I/O error.
    let outcome = converse(&mut assistant, input, &mut output, today);

    store.save(assistant.book())?;
    info!(contacts = assistant.book().len(), "Address book saved");

    outcome?;
    Ok(())
}

/// Drive the prompt/reply loop until the user exits or input ends.
fn converse<R, W>(
    assistant: &mut Assistant,
    input: R,
    output: &mut W,
    today: impl Fn() -> NaiveDate,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Welcome to the assistant bot!")?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) if e.kind() == ErrorKind::InvalidData => {
                warn!(error = %e, "Unreadable command line");
                writeln!(output, "Error: {}", e)?;
                continue;
            }
            Some(Err(e)) => return Err(e),
            None => {
                debug!("Input closed, ending session");
                writeln!(output)?;
                return Ok(());
            }
        };

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                warn!(error = %e, "Rejected command line");
                writeln!(output, "Error: {}", e)?;
                continue;
            }
        };

        debug!(?command, "Dispatching command");
        match assistant.handle(command, today()) {
            Ok(Reply::Message(text)) => writeln!(output, "{}", text)?,
            Ok(Reply::Exit) => {
                writeln!(output, "Good bye!")?;
                return Ok(());
            }
            Err(e) => {
                warn!(error = %e, "Command failed");
                writeln!(output, "Error: {}", e)?;
            }
        }
    }
}

/// Run an assistant session that reads the system clock for "today".
pub fn run_interactive<S, R, W>(
    store: &S,
    birthday_window_days: i64,
    input: R,
    output: W,
) -> Result<()>
where
    S: SnapshotStore + ?Sized,
    R: BufRead,
    W: Write,
{
    run_session(store, birthday_window_days, input, output, || {
        Local::now().date_naive()
    })
}
