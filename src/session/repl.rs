//! Read-evaluate-print loop
//!
//! Reads one line at a time, runs it through the [`Session`] and writes the
//! rendered reply. Runs until the session ends or input is exhausted.

use super::state::Session;
use crate::output::Renderer;
use crate::output::greetings::{farewell, greeting};
use crate::wordlists::Dictionaries;
use log::{debug, warn};
use rand::Rng;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "> ";

/// Interactive loop over an input and an output stream
pub struct Repl<R, W, G> {
    input: R,
    output: W,
    rng: G,
    session: Session,
    dictionaries: Dictionaries,
    renderer: Renderer,
}

impl<R: BufRead, W: Write, G: Rng> Repl<R, W, G> {
    pub const fn new(
        input: R,
        output: W,
        rng: G,
        session: Session,
        dictionaries: Dictionaries,
        renderer: Renderer,
    ) -> Self {
        Self {
            input,
            output,
            rng,
            session,
            dictionaries,
            renderer,
        }
    }

    /// Run until `quit` or end of input
    ///
    /// Returns the final session.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(mut self) -> io::Result<Session> {
        writeln!(self.output, "{}", greeting(&mut self.rng))?;

        let mut buf = Vec::new();
        while self.session.is_running() {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                debug!("end of input");
                writeln!(self.output)?;
                self.session.end();
                break;
            }

            // Bytes that are not UTF-8 become U+FFFD and fail classification
            let line = String::from_utf8_lossy(&buf);
            match self.session.handle_line(&line, &self.dictionaries) {
                Ok(reply) => {
                    let text = self.renderer.render(&reply);
                    if !text.is_empty() {
                        writeln!(self.output, "{text}")?;
                    }
                }
                Err(e) => {
                    warn!("{e}");
                    writeln!(self.output, "{}", self.renderer.render_error(&e))?;
                }
            }
        }

        writeln!(self.output, "{}", farewell(&mut self.rng))?;
        self.output.flush()?;
        Ok(self.session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn run_script(script: &str) -> (Session, String) {
        run_bytes(script.as_bytes())
    }

    fn run_bytes(script: &[u8]) -> (Session, String) {
        let mut output = Vec::new();
        let repl = Repl::new(
            Cursor::new(script.to_vec()),
            &mut output,
            StdRng::seed_from_u64(1),
            Session::default(),
            Dictionaries::default(),
            Renderer::plain(),
        );
        let session = repl.run().unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn quit_stops_reading() {
        let (session, output) = run_script("quit\nadieu YY---\n");
        assert!(!session.is_running());
        assert!(session.guesses().is_empty());
        assert_eq!(output.matches(PROMPT).count(), 1);
    }

    #[test]
    fn end_of_input_ends_session() {
        let (session, _) = run_script("adieu YY---\n");
        assert!(!session.is_running());
        assert_eq!(session.guesses().len(), 1);
    }

    #[test]
    fn errors_are_reported_and_loop_continues() {
        let (session, output) = run_script("nonsense\nadieu YY---\nq\n");
        assert!(output.contains("Error: unrecognized command 'nonsense'"));
        assert!(output.contains("Recorded ADIEU YY---"));
        assert_eq!(session.guesses().len(), 1);
    }

    #[test]
    fn invalid_utf8_line_is_rejected_and_loop_continues() {
        let (session, output) = run_bytes(b"se\xF1or -----\nadieu YY---\nq\n");
        assert!(output.contains("Error: "));
        assert!(output.contains("Recorded ADIEU YY---"));
        assert_eq!(session.guesses().len(), 1);
        assert!(!session.is_running());
        assert_eq!(output.matches(PROMPT).count(), 3);
    }

    #[test]
    fn seeded_output_is_repeatable() {
        let (_, first) = run_script("help\nq\n");
        let (_, second) = run_script("help\nq\n");
        assert_eq!(first, second);
    }
}
