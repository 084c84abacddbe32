//! Interactive menu loop over a [`Directory`].
//!
//! The shell reads menu choices and arguments line by line from any
//! [`BufRead`] and writes prompts and results to any [`Write`], so the same
//! loop serves the terminal and tests.

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use crate::directory::{Directory, Lookup, PhoneNumber};

const MENU: &str = "1. Insert Contact\n2. Search Contact\n3. Exit\n4. Dump Buckets\nEnter a choice: ";

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Line-oriented contact shell.
#[derive(Debug)]
pub struct Shell<'d, R, W> {
    directory: &'d mut Directory,
    input: R,
    output: W,
}

impl<'d, R: BufRead, W: Write> Shell<'d, R, W> {
    /// Creates a shell operating on `directory`.
    pub fn new(directory: &'d mut Directory, input: R, output: W) -> Self {
        Self {
            directory,
            input,
            output,
        }
    }

    /// Runs the menu loop until the user exits or input ends.
    ///
    /// Rejected names and malformed numbers are reported on the output and
    /// the loop continues; only I/O failures end it with an error.
    pub fn run(&mut self) -> io::Result<()> {
        info!("Shell session started");
        loop {
            let Some(choice) = self.prompt(MENU)? else {
                break;
            };

            let flow = match choice.as_str() {
                "1" => self.insert_contact()?,
                "2" => self.search_contact()?,
                "3" => Flow::Exit,
                "4" => self.dump_buckets()?,
                _ => {
                    writeln!(self.output, "Invalid choice!")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }
        info!(contacts = self.directory.len(), "Shell session ended");
        Ok(())
    }

    /// Writes `prompt` and reads one trimmed line; `None` on end of input.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn insert_contact(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompt("Enter the contact's name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(raw_phone) = self.prompt("Enter the phone number of the contact: ")? else {
            return Ok(Flow::Exit);
        };

        let phone: PhoneNumber = match raw_phone.parse() {
            Ok(phone) => phone,
            Err(_) => {
                writeln!(self.output, "Invalid phone number: {raw_phone}")?;
                return Ok(Flow::Continue);
            }
        };

        if let Err(e) = self.directory.insert_contact(&name, phone) {
            warn!(error = %e, name = %name, "Contact rejected");
            writeln!(self.output, "Error: {e}")?;
        }
        Ok(Flow::Continue)
    }

    fn search_contact(&mut self) -> io::Result<Flow> {
        let Some(query) = self.prompt("Name or prefix of the contact to search: ")? else {
            return Ok(Flow::Exit);
        };

        match self.directory.lookup_by_prefix(&query) {
            Ok(Lookup::Found { prefix, contacts }) => {
                if contacts.is_empty() {
                    writeln!(self.output, "No contacts stored")?;
                } else {
                    writeln!(self.output, "suggestions of {prefix} are")?;
                    for contact in contacts {
                        writeln!(self.output, "{}  {}", contact.name, contact.phone)?;
                    }
                }
            }
            Ok(Lookup::NotFound { prefix, matched }) => {
                writeln!(self.output, "Not found")?;
                // Reporting starts one character past the first mismatch
                for end in matched + 2..=prefix.len() {
                    writeln!(self.output, "No Results Found for {}", &prefix[..end])?;
                }
            }
            Err(e) => {
                warn!(error = %e, query = %query, "Search rejected");
                writeln!(self.output, "Error: {e}")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn dump_buckets(&mut self) -> io::Result<Flow> {
        write!(self.output, "{}", self.directory)?;
        Ok(Flow::Continue)
    }
}
