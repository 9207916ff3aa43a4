use super::token::Symbol;
use super::{Error, Position};

const PREVIEW_LENGTH: usize = 60;

/// Cursor over the raw program text. Keywords are matched character by
/// character with whitespace skipped before every character, so a symbol
/// may be written spaced out, run together, or split across lines.
pub struct Scanner {
    chars: Vec<char>,
    position: Position,
}

impl Scanner {
    pub fn new(text: &str) -> Scanner {
        Scanner {
            chars: text.chars().collect(),
            position: 0,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn skip_whitespace(&mut self) {
        while let Some(ch) = self.chars.get(self.position) {
            if !ch.is_whitespace() {
                return;
            }
            self.position += 1;
        }
    }

    /// Non-consuming lookahead for a whole symbol.
    pub fn check(&self, symbol: Symbol) -> bool {
        let mut position = self.position;
        for expected in symbol.text().chars() {
            loop {
                match self.chars.get(position) {
                    None => return false,
                    Some(ch) if ch.is_whitespace() => position += 1,
                    Some(ch) => {
                        if *ch != expected {
                            return false;
                        }
                        position += 1;
                        break;
                    }
                }
            }
        }
        true
    }

    /// Advances past the symbol or fails with a parse error at the
    /// current position.
    pub fn consume(&mut self, symbol: Symbol) -> Result<(), Error> {
        for expected in symbol.text().chars() {
            self.skip_whitespace();
            match self.chars.get(self.position) {
                Some(ch) if *ch == expected => self.position += 1,
                _ => {
                    return Err(self.error(format!(
                        "Illegal symbol found. {} was expected.",
                        symbol
                    )))
                }
            }
        }
        Ok(())
    }

    /// Builds a parse error with a preview window centered on the
    /// current position.
    pub fn error<S: Into<String>>(&self, message: S) -> Error {
        let from = self.position.saturating_sub(PREVIEW_LENGTH / 2);
        let to = usize::min(self.position + PREVIEW_LENGTH / 2, self.chars.len());
        let window = self.chars[from..to]
            .iter()
            .map(|ch| if ch.is_whitespace() { ' ' } else { *ch })
            .collect();
        Error::parse(message).in_window(self.position, window, self.position - from)
    }
}
