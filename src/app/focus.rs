use crate::domain::FieldName;

use super::keymap::KeymapContext;

/// Which widget receives unbound keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Field(FieldName),
    Table,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(FieldName::Name)
    }
}

impl Focus {
    /// Cycles name → email → age → table and around; the table is skipped
    /// while it has no rows.
    pub(crate) fn step(self, delta: i32, table_available: bool) -> Self {
        let mut stops: Vec<Focus> = FieldName::ALL.into_iter().map(Focus::Field).collect();
        if table_available {
            stops.push(Focus::Table);
        }
        let len = stops.len() as i64;
        let current = stops.iter().position(|stop| *stop == self).unwrap_or(0) as i64;
        let next = (current + i64::from(delta)).rem_euclid(len);
        stops[next as usize]
    }

    pub(crate) fn field(self) -> Option<FieldName> {
        match self {
            Focus::Field(field) => Some(field),
            Focus::Table => None,
        }
    }

    pub(crate) fn context(self) -> KeymapContext {
        match self {
            Focus::Field(_) => KeymapContext::Form,
            Focus::Table => KeymapContext::Table,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_through_table_when_rows_exist() {
        let age = Focus::Field(FieldName::Age);
        assert_eq!(age.step(1, true), Focus::Table);
        assert_eq!(Focus::Table.step(1, true), Focus::Field(FieldName::Name));
        assert_eq!(Focus::default().step(-1, true), Focus::Table);
    }

    #[test]
    fn skips_empty_table() {
        let age = Focus::Field(FieldName::Age);
        assert_eq!(age.step(1, false), Focus::Field(FieldName::Name));
        assert_eq!(Focus::Table.step(1, false), Focus::Field(FieldName::Email));
    }
}
