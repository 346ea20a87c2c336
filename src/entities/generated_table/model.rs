use std::fmt;

use diesel::sql_types::Text;
use diesel::QueryableByName;
use serde::{Serialize, Serializer};

const TABLE_PREFIX: &str = "table_";

/// A table created by a generation run, named `table_{number}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GeneratedTable {
    number: u64,
}

impl GeneratedTable {
    pub fn first() -> GeneratedTable {
        GeneratedTable { number: 1 }
    }

    /// `None` once the numbering is exhausted.
    pub fn successor(&self) -> Option<GeneratedTable> {
        self.number.checked_add(1).map(|number| GeneratedTable { number })
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn name(&self) -> String {
        format!("{}{}", TABLE_PREFIX, self.number)
    }

    /// Only `table_` followed by a positive decimal number without leading zeros.
    pub fn from_name(name: &str) -> Option<GeneratedTable> {
        let digits = name.strip_prefix(TABLE_PREFIX)?;
        if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse::<u64>().ok().map(|number| GeneratedTable { number })
    }
}

impl fmt::Display for GeneratedTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", TABLE_PREFIX, self.number)
    }
}

impl Serialize for GeneratedTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name())
    }
}

#[derive(QueryableByName)]
pub struct TableNameRow {
    #[diesel(sql_type = Text)]
    pub name: String,
}
