//! Command dispatch against one vector and its value store.
//!
//! A [`Session`] owns the two halves of the ownership contract: a
//! [`ValueArena`] holding the actual strings, and at most one
//! [`RefVec`] holding handles into it. The session is the "client" the
//! container contract talks about — it is the party that frees values
//! when they leave the vector, whether by `remove`, `pop`, `set`
//! overwrite, or re-`init`.

use std::io::{self, Write};

use skein_arena::ValueArena;
use skein_core::ValueRef;
use skein_vec::RefVec;

use crate::command::Command;

/// Whether the shell should keep reading input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Read the next line.
    Continue,
    /// Leave the shell.
    Exit,
}

/// One interactive session: a value store plus the vector under test.
///
/// The vector does not exist until the first `init`; commands that need
/// it are rejected with a hint until then.
pub struct Session {
    store: ValueArena<String>,
    vec: Option<RefVec>,
}

impl Session {
    /// Create a session with no vector yet.
    pub fn new() -> Self {
        Self {
            store: ValueArena::new(),
            vec: None,
        }
    }

    /// Execute one command, writing any output to `out`.
    pub fn run(&mut self, command: Command, out: &mut impl Write) -> io::Result<Outcome> {
        match command {
            Command::Help => {
                writeln!(out, "    help                List available commands")?;
                writeln!(out, "    exit/quit/q         Exit vector shell")?;
                writeln!(out, "    init                Initialize new empty vector")?;
                writeln!(out, "    size                Get current vector size")?;
                writeln!(out, "    ls/print/dump       Get all vector contents")?;
                writeln!(out, "    set <i> <value>     Set <value> at index <i>")?;
                writeln!(out, "    get <i>             Get the value at index <i>")?;
                writeln!(out, "    insert <i> <value>  Insert <value> into index <i>")?;
                writeln!(out, "    remove <i>          Remove the value at index <i>")?;
                writeln!(out, "    push <value>        Push <value> to end of vector")?;
                writeln!(out, "    pop                 Remove the value at end of vector")?;
            }

            Command::Exit => return Ok(Outcome::Exit),

            Command::Init => {
                // Free every value the old vector still refers to
                // before abandoning it.
                if let Some(mut old) = self.vec.take() {
                    while let Ok(r) = old.pop() {
                        self.store
                            .free(r)
                            .expect("vector refs are live in the store");
                    }
                }
                self.vec = Some(RefVec::new());
                writeln!(out, "    v = []")?;
            }

            Command::Size => {
                let Some(vec) = self.vec.as_ref() else {
                    return uninitialized(out);
                };
                writeln!(out, "    |v| = {}", vec.len())?;
            }

            Command::List => {
                let Some(vec) = self.vec.as_ref() else {
                    return uninitialized(out);
                };
                let mut rendered = String::new();
                for i in 0..vec.len() {
                    let r = vec.get(i).expect("indices below len are occupied");
                    if i > 0 {
                        rendered.push_str(", ");
                    }
                    rendered.push_str(live(&self.store, r));
                }
                writeln!(out, "    v = [{rendered}]")?;
            }

            Command::Get { index } => {
                let Some(vec) = self.vec.as_ref() else {
                    return uninitialized(out);
                };
                if !vec.in_bounds(index) {
                    writeln!(out, "    error; out of bounds")?;
                } else {
                    let r = vec.get(index as usize).expect("index checked in bounds");
                    writeln!(out, "    v[{index}] = {}", live(&self.store, r))?;
                }
            }

            Command::Set { index, value } => {
                let Some(vec) = self.vec.as_mut() else {
                    return uninitialized(out);
                };
                if !vec.in_bounds(index) {
                    writeln!(out, "    error; out of bounds")?;
                } else {
                    let new_ref = self.store.insert(value);
                    let old = vec
                        .set(index as usize, new_ref)
                        .expect("index checked in bounds");
                    // The displaced value is the session's to clean up;
                    // the container only hands its handle back.
                    self.store
                        .free(old)
                        .expect("vector refs are live in the store");
                    writeln!(out, "    v[{index}] = {}", live(&self.store, new_ref))?;
                }
            }

            Command::Insert { index, value } => {
                let Some(vec) = self.vec.as_mut() else {
                    return uninitialized(out);
                };
                // Insertion permits one index past the end (append).
                if index < 0 || (index as u64) > vec.len() as u64 {
                    writeln!(out, "    error; out of bounds")?;
                } else {
                    let r = self.store.insert(value);
                    vec.insert(index as usize, r)
                        .expect("insertion index checked in bounds");
                    writeln!(out, "    v[{index}] = {}", live(&self.store, r))?;
                }
            }

            Command::Remove { index } => {
                let Some(vec) = self.vec.as_mut() else {
                    return uninitialized(out);
                };
                if !vec.in_bounds(index) {
                    writeln!(out, "    error; out of bounds")?;
                } else {
                    let r = vec.remove(index as usize).expect("index checked in bounds");
                    let value = self
                        .store
                        .free(r)
                        .expect("vector refs are live in the store");
                    writeln!(out, "    # v[{index}] = {value}")?;
                }
            }

            Command::Push { value } => {
                let Some(vec) = self.vec.as_mut() else {
                    return uninitialized(out);
                };
                let r = self.store.insert(value);
                vec.push(r);
                writeln!(out, "    v[{}] = {}", vec.len() - 1, live(&self.store, r))?;
            }

            Command::Pop => {
                let Some(vec) = self.vec.as_mut() else {
                    return uninitialized(out);
                };
                match vec.pop() {
                    Ok(r) => {
                        let value = self
                            .store
                            .free(r)
                            .expect("vector refs are live in the store");
                        writeln!(out, "    # v[{}] = {value}", vec.len())?;
                    }
                    Err(_) => writeln!(out, "    error; empty")?,
                }
            }
        }
        Ok(Outcome::Continue)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a handle the session's vector holds.
///
/// Session invariant: every handle in the vector is live in the store,
/// because the session frees values only as their handles leave the
/// vector.
fn live(store: &ValueArena<String>, r: ValueRef) -> &str {
    store
        .get(r)
        .map(String::as_str)
        .expect("vector refs are live in the store")
}

/// Reject a command that needs a vector before `init` has run.
fn uninitialized(out: &mut impl Write) -> io::Result<Outcome> {
    writeln!(
        out,
        "    error; use `init` first to initialize a new empty vector"
    )?;
    Ok(Outcome::Continue)
}
