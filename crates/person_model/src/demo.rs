use std::io::Write;

use person_base::tracing::{debug, instrument};
use person_base::{PersonResult, ResultExt};

use crate::person::Person;

/// Printed after both person lines.
pub const GREETING: &str = "Hello World !!";

/// Runs the walkthrough, writing three lines to `out`.
///
/// Creates John (42), prints him, renames him to Jane and sets the age to 43,
/// prints again and finishes with [`GREETING`].
#[instrument(skip_all)]
pub fn run_demo(out: &mut impl Write) -> PersonResult<()> {
    let mut person = Person::new("John", 42);
    debug!(name = person.name(), age = person.age(), "created person");
    writeln!(out, "{}", person).context("printing initial person")?;

    person.set_name("Jane");
    debug!(name = person.name(), "renamed person");
    person.set_age(43);
    debug!(age = person.age(), "updated age");
    writeln!(out, "{}", person).context("printing updated person")?;

    writeln!(out, "{}", GREETING).context("printing greeting")?;
    out.flush().context("flushing output")?;
    Ok(())
}
