use csv::StringRecordIter;
use std::collections::HashMap;

use super::Row;

/// A structure for keeping relationship between the headers and their positions
#[derive(Debug, Clone, PartialEq)]
pub struct Headers {
    indexes: HashMap<String, usize>,
    names: Row,
}

impl Headers {
    /// Duplicated names resolve to their last position.
    pub fn from_row(row: Row) -> Headers {
        let mut indexes = HashMap::new();

        for (index, entry) in row.iter().enumerate() {
            indexes.insert(entry.to_string(), index);
        }

        Headers {
            indexes,
            names: row,
        }
    }

    pub fn as_row(&self) -> &Row {
        &self.names
    }

    pub fn get(&self, field: &str) -> Option<usize> {
        self.indexes.get(field).copied()
    }

    pub fn iter(&self) -> StringRecordIter {
        self.names.iter()
    }

    /// Renders a row as `header=value` pairs, for diagnostics.
    pub fn describe(&self, row: &Row) -> String {
        let pairs: Vec<String> = self
            .iter()
            .enumerate()
            .map(|(i, h)| format!("{}={:?}", h, row.get(i).unwrap_or("")))
            .collect();

        format!("{{{}}}", pairs.join(", "))
    }
}

impl PartialEq<Headers> for Row {
    fn eq(&self, other: &Headers) -> bool {
        self == other.as_row()
    }
}

#[cfg(test)]
mod tests {
    use super::{Headers, Row};

    #[test]
    fn test_lookup() {
        let headers = Headers::from_row(Row::from(vec!["a", "b", "a"]));

        assert_eq!(headers.get("a"), Some(2));
        assert_eq!(headers.get("b"), Some(1));
        assert_eq!(headers.get("c"), None);
    }

    #[test]
    fn test_describe() {
        let headers = Headers::from_row(Row::from(vec!["id", "name"]));

        assert_eq!(
            headers.describe(&Row::from(vec!["1", "x y"])),
            r#"{id="1", name="x y"}"#
        );
        assert_eq!(headers.describe(&Row::from(vec!["1"])), r#"{id="1", name=""}"#);
    }
}
