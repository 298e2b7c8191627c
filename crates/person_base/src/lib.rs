/* 📖 # Why have person_base as a separate crate?
person_base holds the error type and tracing setup used by both the model and the binary.
The model crate stays free of subscriber configuration, which only the binary installs.
*/

pub mod error;
pub mod tracing;

// Re-export commonly used types for convenience
pub use error::{ErrorKind, PersonError, PersonResult, ResultExt};
