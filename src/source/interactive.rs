//! Interactive record source
//!
//! Implements the [`RecordSource`] trait over the terminal: one record per
//! iteration, fields prompted in a fixed order, numeric validation with
//! per-record recovery, and the `q` sentinel to end the session.
//!
//! # Control flow
//!
//! Each iteration starts at the name prompt. A name equal to the sentinel
//! ends the pass. Latitude is parsed as soon as it is read; a failed parse
//! skips the longitude prompt, shows the validation error, and restarts from
//! the name prompt. The same applies to a failed longitude parse. Only after
//! both coordinates parse are the free-text fields prompted, after which the
//! completed record is handed to the session. There is no way to undo a
//! single field mid-entry.
//!
//! End of input (closed stdin) is treated the same as the sentinel.

use crate::core::Session;
use crate::io::prompt::{
    Prompter, COUNTRY_PROMPT, INVALID_COORDINATES, LATITUDE_PROMPT, LONGITUDE_PROMPT, NAME_PROMPT,
    PLACE_PROMPT, POSTAL_CODE_PROMPT,
};
use crate::source::RecordSource;
use crate::types::{MapperError, MissingPerson};
use std::io::{BufRead, BufReader, Stdin, Stdout, Write};

/// Input value that ends the session
///
/// Exact match only: `Q`, `quit`, or a padded ` q ` are all taken as names.
/// A person legitimately named "q" cannot be entered interactively; this is
/// an inherited limitation of the input format.
pub const QUIT_SENTINEL: &str = "q";

/// Interactive terminal record source
#[derive(Debug)]
pub struct InteractiveSource<R, W> {
    prompter: Prompter<R, W>,
}

impl InteractiveSource<BufReader<Stdin>, Stdout> {
    /// Create an interactive source over the process stdin/stdout
    pub fn stdio() -> Self {
        InteractiveSource {
            prompter: Prompter::stdio(),
        }
    }
}

impl<R: BufRead, W: Write> InteractiveSource<R, W> {
    /// Create an interactive source over the given reader and writer
    pub fn new(input: R, output: W) -> Self {
        InteractiveSource {
            prompter: Prompter::new(input, output),
        }
    }

    /// Consume the source, returning the prompter's writer
    ///
    /// Used by tests to inspect what was shown on a captured terminal.
    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Ask for one coordinate and parse it
    ///
    /// * `Ok(Some(Ok(value)))` - Parsed successfully
    /// * `Ok(Some(Err(())))` - Non-numeric input, record must be discarded
    /// * `Ok(None)` - End of input
    fn ask_coordinate(
        &mut self,
        question: &str,
    ) -> Result<Option<Result<f64, ()>>, MapperError> {
        let raw = match self.prompter.ask(question)? {
            Some(raw) => raw,
            None => return Ok(None),
        };
        Ok(Some(raw.trim().parse::<f64>().map_err(|_| ())))
    }
}

impl<R: BufRead, W: Write> RecordSource for InteractiveSource<R, W> {
    fn collect(&mut self, session: &mut Session) -> Result<(), MapperError> {
        loop {
            let name = match self.prompter.ask(NAME_PROMPT)? {
                Some(name) => name,
                None => return Ok(()),
            };
            if name == QUIT_SENTINEL {
                return Ok(());
            }

            let latitude = match self.ask_coordinate(LATITUDE_PROMPT)? {
                Some(Ok(latitude)) => latitude,
                Some(Err(())) => {
                    self.prompter.warn(INVALID_COORDINATES)?;
                    continue;
                }
                None => return Ok(()),
            };
            let longitude = match self.ask_coordinate(LONGITUDE_PROMPT)? {
                Some(Ok(longitude)) => longitude,
                Some(Err(())) => {
                    self.prompter.warn(INVALID_COORDINATES)?;
                    continue;
                }
                None => return Ok(()),
            };

            let postal_code = match self.prompter.ask(POSTAL_CODE_PROMPT)? {
                Some(postal_code) => postal_code,
                None => return Ok(()),
            };
            let place = match self.prompter.ask(PLACE_PROMPT)? {
                Some(place) => place,
                None => return Ok(()),
            };
            let country = match self.prompter.ask(COUNTRY_PROMPT)? {
                Some(country) => country,
                None => return Ok(()),
            };

            session.add_record(MissingPerson {
                name,
                latitude,
                longitude,
                place,
                country,
                postal_code,
            });
        }
    }
}
