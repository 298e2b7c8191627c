use std::error::Error as StdError;
use std::fmt;
use std::io;

use tracing_error::SpanTrace;

/* 📖 # Why is there an error type at all when Person cannot fail?

Person's accessors are total and never validate, so they return plain values.
The only fallible step in the program is writing the walkthrough to an output
stream, plus installing the tracing subscriber. Both report through this type so
the binary has a single place that turns failures into an exit code.
 */

/// Error variants that can occur while running the walkthrough.
#[derive(Debug)]
pub enum ErrorKind {
    /// Writing to the output stream failed
    Output { source: io::Error },

    /// Catch-all for other errors with a message
    Message { message: String },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Output { source } => write!(f, "Failed to write output: {}", source),
            ErrorKind::Message { message } => write!(f, "{}", message),
        }
    }
}

/// Error wrapping an [`ErrorKind`] with context strings and the span trace
/// active when it was created.
pub struct PersonError {
    kind: ErrorKind,
    context: Vec<String>,
    span_trace: SpanTrace,
}

impl PersonError {
    /// Creates a new error from an ErrorKind, capturing the current span trace.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: vec![],
            span_trace: SpanTrace::capture(),
        }
    }

    /// Shorthand for an [`ErrorKind::Message`] error.
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Message {
            message: message.into(),
        })
    }

    /// Attaches context to an error.
    /// Context is displayed before the error message.
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Attaches context using lazy evaluation.
    pub fn with_context<F>(mut self, f: F) -> Self
    where
        F: FnOnce() -> String,
    {
        self.context.push(f());
        self
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn get_context(&self) -> &[String] {
        &self.context
    }

    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    /// Returns the innermost error in the source chain.
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut current: &(dyn StdError + 'static) = self;
        while let Some(next) = current.source() {
            current = next;
        }
        current
    }
}

impl From<ErrorKind> for PersonError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<io::Error> for PersonError {
    fn from(source: io::Error) -> Self {
        Self::new(ErrorKind::Output { source })
    }
}

impl From<io::Error> for Box<PersonError> {
    fn from(source: io::Error) -> Self {
        Box::new(PersonError::from(source))
    }
}

impl StdError for PersonError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.kind {
            ErrorKind::Output { source } => Some(source),
            ErrorKind::Message { .. } => None,
        }
    }
}

impl fmt::Display for PersonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ctx in &self.context {
            write!(f, "{}: ", ctx)?;
        }
        write!(f, "{}", self.kind)
    }
}

impl fmt::Debug for PersonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.kind)?;
        let last = self.context.len().saturating_sub(1);
        for (i, ctx) in self.context.iter().enumerate() {
            let branch = if i == last { "└─" } else { "├─" };
            writeln!(f, "{} {}", branch, ctx)?;
        }
        writeln!(f, "Trace: {}", self.span_trace)
    }
}

/// Standard result type for the person crates.
pub type PersonResult<T> = std::result::Result<T, Box<PersonError>>;

/// Extension trait for attaching context to results during propagation.
pub trait ResultExt<T> {
    /// Attaches context to an error. Eagerly evaluated.
    fn context(self, context: impl Into<String>) -> PersonResult<T>;

    /// Attaches context only if the result is an error.
    fn with_context<F>(self, f: F) -> PersonResult<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for PersonResult<T> {
    fn context(self, context: impl Into<String>) -> PersonResult<T> {
        self.map_err(|err| Box::new(err.context(context)))
    }

    fn with_context<F>(self, f: F) -> PersonResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|err| Box::new(err.with_context(f)))
    }
}

impl<T> ResultExt<T> for io::Result<T> {
    fn context(self, context: impl Into<String>) -> PersonResult<T> {
        self.map_err(|err| Box::new(PersonError::from(err).context(context)))
    }

    fn with_context<F>(self, f: F) -> PersonResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|err| Box::new(PersonError::from(err).with_context(f)))
    }
}
