use std::fmt;

use serde::Serialize;

use super::{FieldErrors, validate};

/// The three inputs of the form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Email,
    Age,
}

impl FieldName {
    pub const ALL: [FieldName; 3] = [FieldName::Name, FieldName::Email, FieldName::Age];

    pub fn key(self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Age => "age",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldName::Name => "Name",
            FieldName::Email => "Email",
            FieldName::Age => "Age",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FieldName::Name => "Enter Name here",
            FieldName::Email => "Enter Email here",
            FieldName::Age => "Enter Age here",
        }
    }

    pub fn position(self) -> usize {
        match self {
            FieldName::Name => 0,
            FieldName::Email => 1,
            FieldName::Age => 2,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A validated row of the store.
///
/// The only way to obtain one is through [`validate`] (or `TryFrom<Draft>`),
/// so every `Record` in circulation satisfies the field rules. Edits replace
/// a record wholesale; there are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: String,
    email: String,
    age: u8,
}

impl Record {
    pub(super) fn from_validated(name: String, email: String, age: u8) -> Self {
        Self { name, email, age }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn age(&self) -> u8 {
        self.age
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>, {}", self.name, self.email, self.age)
    }
}

impl TryFrom<Draft> for Record {
    type Error = FieldErrors;

    fn try_from(draft: Draft) -> Result<Self, Self::Error> {
        validate(&draft)
    }
}

/// Raw text currently typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub age: String,
}

impl Draft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        age: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age: age.into(),
        }
    }

    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Age => &self.age,
        }
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        let slot = match field {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Age => &mut self.age,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        FieldName::ALL
            .iter()
            .all(|field| self.get(*field).is_empty())
    }
}

impl From<&Record> for Draft {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            age: record.age.to_string(),
        }
    }
}
