use super::Position;

/// A fatal diagnostic. Parse errors carry the offending position and a
/// preview of the source text around it; runtime errors carry only a
/// message. Neither is recoverable, the caller decides what to do with
/// a failed run.
#[derive(Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    message: String,
    context: Option<Context>,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ErrorKind {
    Parse,
    Runtime,
}

#[derive(Debug, PartialEq)]
struct Context {
    position: Position,
    window: String,
    caret: usize,
}

#[doc(hidden)]
#[macro_export]
macro_rules! runtime_error {
    ($($arg:tt)*) => {
        $crate::lang::Error::runtime(format!($($arg)*))
    };
}

impl Error {
    pub fn parse<S: Into<String>>(message: S) -> Error {
        Error {
            kind: ErrorKind::Parse,
            message: message.into(),
            context: None,
        }
    }

    pub fn runtime<S: Into<String>>(message: S) -> Error {
        Error {
            kind: ErrorKind::Runtime,
            message: message.into(),
            context: None,
        }
    }

    /// Attaches a source preview. `caret` is the offset of the offending
    /// character within `window`.
    pub fn in_window(self, position: Position, window: String, caret: usize) -> Error {
        debug_assert!(self.context.is_none());
        Error {
            context: Some(Context {
                position,
                window,
                caret,
            }),
            ..self
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn position(&self) -> Option<Position> {
        self.context.as_ref().map(|c| c.position)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.kind {
            ErrorKind::Parse => {
                write!(f, "ERROR: {}", self.message)?;
                if let Some(context) = &self.context {
                    write!(f, " Position {}", context.position)?;
                    write!(f, "\n  {}", context.window)?;
                    write!(f, "\n  {s:>w$}^", s = "", w = context.caret)?;
                }
                Ok(())
            }
            ErrorKind::Runtime => write!(f, "RUNTIME ERROR: {}", self.message),
        }
    }
}

impl std::error::Error for Error {}
