use std::io::{self, BufRead, Write};

use crate::{Context, get_result};

/// Printed before every line is read.
pub const PROMPT: &str = ">";
/// Ends the session when entered on its own line, in any letter case.
pub const EXIT_COMMAND: &str = "EXIT";

/// Counts of what a session did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Lines that were parsed and evaluated (successfully or not).
    pub evaluated: usize,
    /// Lines that produced an error.
    pub failed:    usize,
}

/// Runs the interactive loop until `EXIT` or end of input.
///
/// Each non-blank line is parsed and evaluated against `context` on its own.
/// A success prints `Result: <value>`; a failure prints
/// `ERROR: <message> (<kind>)`, is logged, and the loop goes on with the next
/// line. Surrounding whitespace is ignored and blank lines are skipped.
///
/// # Errors
/// Only I/O failures on `input` or `output` end the session early.
///
/// # Example
/// ```
/// use propexpr::{
///     Context,
///     interpreter::value::{core::Value, object::PropertyMap},
///     session::run_session,
/// };
///
/// let context = Context::with_defaults(PropertyMap::from_iter([("a", "2")]).into());
/// let mut output = Vec::new();
///
/// let summary = run_session(&context, "a * 3\nb.c\nexit\n1\n".as_bytes(), &mut output).unwrap();
/// let output = String::from_utf8(output).unwrap();
///
/// assert!(output.starts_with(">Result: 6\n>ERROR: "));
/// assert!(output.ends_with("(PropertyNotFound)\n>"));
/// assert_eq!(summary.evaluated, 2);
/// assert_eq!(summary.failed, 1);
/// ```
pub fn run_session<R, W>(context: &Context, input: R, output: &mut W) -> io::Result<SessionSummary>
    where R: BufRead,
          W: Write
{
    let mut summary = SessionSummary::default();
    let mut lines = input.lines();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let text = line.trim();

        if text.eq_ignore_ascii_case(EXIT_COMMAND) {
            break;
        }
        if text.is_empty() {
            continue;
        }

        summary.evaluated += 1;
        match get_result(text, context) {
            Ok(value) => writeln!(output, "Result: {value}")?,
            Err(e) => {
                summary.failed += 1;
                tracing::error!(expression = text, kind = %e.kind(), "{e}");
                writeln!(output, "ERROR: {e} ({})", e.kind())?;
            },
        }
    }

    Ok(summary)
}
