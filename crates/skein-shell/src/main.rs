//! Interactive shell over a Skein vector.
//!
//! Reads one command per line from stdin and executes it against a
//! single [`Session`]. Lines are read with the standard growable
//! line-reading facility, so there is no fixed input length. EOF ends
//! the session.

use std::io::{self, BufRead, Write};

mod command;
mod session;

use session::{Outcome, Session};

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut session = Session::new();
    let mut line = String::new();

    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // EOF: input closed.
            break;
        }

        match command::parse(&line) {
            Ok(Some(cmd)) => {
                if session.run(cmd, &mut out)? == Outcome::Exit {
                    break;
                }
            }
            Ok(None) => {}
            Err(err) => writeln!(out, "    error; {err}")?,
        }
    }

    Ok(())
}
