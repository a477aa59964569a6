use crate::{ColumnMapping, Headers, Project, Row, RowResult};

/// Gets the value of the named column in `row`, if the column exists and the
/// row is long enough to hold it.
pub fn get_field<'r>(headers: &Headers, row: &'r Row, field: &str) -> Option<&'r str> {
    headers.get(field).and_then(|index| row.get(index))
}

/// This trait describes the behaviour of every component in the reformatting
/// chain. A stream is an iterator of rows that also knows the headers of the
/// rows it yields.
pub trait RowStream: IntoIterator<Item = RowResult> {
    /// Must return headers as they are in this point of the chain. For example
    /// if implementor renames columns, its `headers()` function must return
    /// the new names.
    fn headers(&self) -> &Headers;

    /// Keeps only the columns named by `mapping`, in its order and under its
    /// destination names.
    fn project(self, mapping: &ColumnMapping) -> Project<Self>
    where
        Self: Sized,
    {
        Project::new(self, mapping)
    }
}

#[cfg(test)]
mod tests {
    use super::get_field;
    use crate::{Headers, Row};

    #[test]
    fn test_get_field() {
        let headers = Headers::from_row(Row::from(vec!["a", "b", "c"]));
        let row = Row::from(vec!["1", ""]);

        assert_eq!(get_field(&headers, &row, "a"), Some("1"));
        assert_eq!(get_field(&headers, &row, "b"), Some(""));
        assert_eq!(get_field(&headers, &row, "c"), None);
        assert_eq!(get_field(&headers, &row, "d"), None);
    }
}
