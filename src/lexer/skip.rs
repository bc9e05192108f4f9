//! Blank skipping for the lexer.
//!
//! Blink treats only ASCII space and newline as blanks. Tabs and
//! carriage returns are not blanks; they fall through to token
//! recognition and are reported as unexpected characters.

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Skips consecutive blank characters (ASCII space and newline).
    pub(super) fn skip_blanks(&mut self) {
        while matches!(self.current_char(), Some(' ') | Some('\n')) {
            self.advance();
        }
    }
}
