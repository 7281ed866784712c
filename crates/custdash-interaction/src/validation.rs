//! Validation rules for the create-customer form.
//!
//! [`validate`] is a pure function of the three field values: the same input
//! always produces the same [`FieldErrors`], and nothing is cached between
//! calls.

use std::{collections::BTreeMap, fmt, sync::LazyLock};

use regex::Regex;

pub const NAME_REQUIRED: &str = "name is required";
pub const EMAIL_REQUIRED: &str = "email is required";
pub const EMAIL_INVALID: &str = "must be a valid email";
pub const COMPANY_REQUIRED: &str = "company is required";

/// `localpart@domain.tld`, where every part is one or more characters that
/// are neither whitespace nor `@`.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

/// One of the inputs of the create-customer form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Company,
}

impl Field {
    /// Every field, in display order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Company];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Company => "company",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping of field to error message. A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// `true` when every field passed validation.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }
}

/// Returns `true` when `email` matches the simplified address pattern.
/// Surrounding whitespace is not stripped here.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validates the three form fields independently of each other.
///
/// Within a single field the checks short-circuit: an empty email only
/// reports [`EMAIL_REQUIRED`], never [`EMAIL_INVALID`].
pub fn validate(name: &str, email: &str, company: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if name.trim().is_empty() {
        errors.insert(Field::Name, NAME_REQUIRED);
    }

    let email = email.trim();
    if email.is_empty() {
        errors.insert(Field::Email, EMAIL_REQUIRED);
    } else if !is_valid_email(email) {
        errors.insert(Field::Email, EMAIL_INVALID);
    }

    if company.trim().is_empty() {
        errors.insert(Field::Company, COMPANY_REQUIRED);
    }

    errors
}
