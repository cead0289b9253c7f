//! Helpers for writing codec payloads into the operation log.
//!
//! Plaintext may legitimately contain quotes and commas, so a payload dropped
//! straight into a log sentence is hard to tell apart from the sentence
//! itself. Angle brackets are not in the alphabet, which makes them a safe
//! wrapper: `Encoded <Hi, you> to <43,30,99,98,96,36,92>`.

use std::fmt;

/// Displays the wrapped string as `<payload>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payload<'a>(pub &'a str);

impl fmt::Display for Payload<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}
