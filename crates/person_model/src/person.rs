/* 📖 # Why does Person not validate its fields?

Any name, including the empty string, and any age, including zero and negative
values, is accepted by the constructor and both setters. None of the operations
can fail, so they return plain values rather than results.
*/

use std::fmt;

/// A named individual with an age.
///
/// Both fields are private and reached only through the accessors below.
///
/// # Examples
/// ```
/// use person_model::Person;
///
/// let mut person = Person::new("John", 42);
/// person.set_age(43);
/// assert_eq!(person.to_string(), "John is 43 years old !");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    age: i32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Returns the current name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the stored name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the current age.
    pub fn age(&self) -> i32 {
        self.age
    }

    /// Replaces the stored age.
    pub fn set_age(&mut self, age: i32) {
        self.age = age;
    }
}

/// Formats as `"<name> is <age> years old !"`.
impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is {} years old !", self.name, self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_arguments() {
        let person = Person::new("John", 42);
        assert_eq!(person.name(), "John");
        assert_eq!(person.age(), 42);
    }

    #[test]
    fn test_new_accepts_any_values() {
        let person = Person::new("", -7);
        assert_eq!(person.name(), "");
        assert_eq!(person.age(), -7);

        let person = Person::new(String::from("Ada"), i32::MAX);
        assert_eq!(person.name(), "Ada");
        assert_eq!(person.age(), i32::MAX);
    }

    #[test]
    fn test_set_name_replaces_name() {
        let mut person = Person::new("John", 42);
        person.set_name("Jane");
        assert_eq!(person.name(), "Jane");
        assert_eq!(person.age(), 42);
    }

    #[test]
    fn test_set_name_twice_is_idempotent() {
        let mut person = Person::new("John", 42);
        person.set_name("Jane");
        person.set_name("Jane");
        assert_eq!(person.name(), "Jane");
    }

    #[test]
    fn test_set_age_accepts_zero_and_negative() {
        let mut person = Person::new("John", 42);
        for age in [43, 0, -1, i32::MIN] {
            person.set_age(age);
            assert_eq!(person.age(), age);
        }
        assert_eq!(person.name(), "John");
    }

    #[test]
    fn test_display() {
        let mut person = Person::new("John", 42);
        assert_eq!(person.to_string(), "John is 42 years old !");

        person.set_name("Jane");
        person.set_age(43);
        assert_eq!(person.to_string(), "Jane is 43 years old !");
    }

    #[test]
    fn test_display_negative_age() {
        let person = Person::new("Nobody", -3);
        assert_eq!(person.to_string(), "Nobody is -3 years old !");
    }
}
