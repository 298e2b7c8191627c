pub mod demo;
pub mod person;

pub use demo::{GREETING, run_demo};
pub use person::Person;
