//! Projection of source records onto the output columns.
use crate::{
    error::{Error, RowResult},
    get_field, ColumnMapping, Headers, Row, RowStream,
};

/// Picks, reorders and renames the columns of each row following a
/// [`ColumnMapping`].
///
/// A record lacking any of the mapped source columns is an error. Empty
/// values are fine.
pub struct Project<I> {
    iter: I,
    sources: Vec<String>,
    headers: Headers,
    old_headers: Headers,
}

impl<I> Project<I>
where
    I: RowStream,
{
    pub fn new(iter: I, mapping: &ColumnMapping) -> Project<I> {
        Project {
            old_headers: iter.headers().clone(),
            iter,
            sources: mapping.source_keys_in_order().map(String::from).collect(),
            headers: Headers::from_row(mapping.destination_row()),
        }
    }
}

pub struct IntoIter<I> {
    iter: I,
    sources: Vec<String>,
    old_headers: Headers,
}

impl<I> IntoIter<I> {
    fn project(&self, row: &Row) -> RowResult {
        let mut new_row = Row::with_capacity(row.as_slice().len(), self.sources.len());

        for key in self.sources.iter() {
            match get_field(&self.old_headers, row, key) {
                Some(value) => new_row.push_field(value),
                None => {
                    return Err(Error::MissingField {
                        key: key.clone(),
                        record: self.old_headers.describe(row),
                    })
                }
            }
        }

        Ok(new_row)
    }
}

impl<I> Iterator for IntoIter<I>
where
    I: Iterator<Item = RowResult>,
{
    type Item = RowResult;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.iter.next()?;

        Some(next.and_then(|row| self.project(&row)))
    }
}

impl<I> IntoIterator for Project<I>
where
    I: RowStream,
{
    type Item = RowResult;

    type IntoIter = IntoIter<I::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            iter: self.iter.into_iter(),
            sources: self.sources,
            old_headers: self.old_headers,
        }
    }
}

impl<I> RowStream for Project<I>
where
    I: RowStream,
{
    fn headers(&self) -> &Headers {
        &self.headers
    }
}

/// Serializes a projected row: every value wrapped in double quotes as is,
/// joined by commas.
///
/// Quotes and commas inside values are not escaped. See [`needs_escaping`].
pub fn output_line(row: &Row) -> String {
    row.iter()
        .map(|value| format!("\"{}\"", value))
        .collect::<Vec<_>>()
        .join(",")
}

/// Tells if `value` would break the quoting done by [`output_line`].
pub fn needs_escaping(value: &str) -> bool {
    value.contains(|c: char| c == '"' || c == ',' || c == '\n' || c == '\r')
}

#[cfg(test)]
mod tests {
    use super::{needs_escaping, output_line, Project};
    use crate::{error::Error, mock::MockStream, ColumnMapping, Headers, Row, RowStream};

    fn mapping() -> ColumnMapping {
        ColumnMapping::new(vec![("C", "third"), ("A", "first")])
    }

    #[test]
    fn test_project() {
        let iter = MockStream::from_rows(
            vec![
                Ok(Row::from(vec!["A", "B", "C"])),
                Ok(Row::from(vec!["1", "x", "3"])),
                Ok(Row::from(vec!["", "y", "6"])),
            ]
            .into_iter(),
        )
        .unwrap();

        let project = iter.project(&mapping());

        assert_eq!(
            *project.headers(),
            Headers::from_row(Row::from(vec!["third", "first"])),
        );

        let mut project = project.into_iter();

        assert_eq!(project.next().unwrap().unwrap(), Row::from(vec!["3", "1"]));
        assert_eq!(project.next().unwrap().unwrap(), Row::from(vec!["6", ""]));
        assert!(project.next().is_none());
    }

    #[test]
    fn test_missing_column() {
        let iter = MockStream::from_rows(
            vec![
                Ok(Row::from(vec!["A", "B"])),
                Ok(Row::from(vec!["1", "2"])),
            ]
            .into_iter(),
        )
        .unwrap();

        let mut project = Project::new(iter, &mapping()).into_iter();

        match project.next() {
            Some(Err(Error::MissingField { key, record })) => {
                assert_eq!(key, "C");
                assert_eq!(record, r#"{A="1", B="2"}"#);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_short_row() {
        let iter = MockStream::from_rows(
            vec![
                Ok(Row::from(vec!["A", "B", "C"])),
                Ok(Row::from(vec!["1", "2"])),
            ]
            .into_iter(),
        )
        .unwrap();

        let mut project = iter.project(&mapping()).into_iter();

        match project.next() {
            Some(Err(Error::MissingField { key, .. })) => assert_eq!(key, "C"),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_project_doesnt_swallow_errors() {
        let iter = MockStream::from_rows(
            vec![
                Ok(Row::from(vec!["A", "C"])),
                Err(Error::NoInputs),
                Ok(Row::from(vec!["1", "3"])),
            ]
            .into_iter(),
        )
        .unwrap();

        let mut project = iter.project(&mapping()).into_iter();

        match project.next() {
            Some(Err(Error::NoInputs)) => {}
            _ => unreachable!(),
        }

        assert_eq!(project.next().unwrap().unwrap(), Row::from(vec!["3", "1"]));
    }

    #[test]
    fn test_output_line() {
        assert_eq!(
            output_line(&Row::from(vec!["ABC123", "", "B"])),
            r#""ABC123","","B""#
        );
        assert_eq!(output_line(&Row::from(vec![r#"say "hi", bye"#])), r#""say "hi", bye""#);
    }

    #[test]
    fn test_needs_escaping() {
        assert!(!needs_escaping("12 Main Street"));
        assert!(needs_escaping("Flat 1, 12 Main Street"));
        assert!(needs_escaping("the \"old\" house"));
        assert!(needs_escaping("line\nbreak"));
    }
}
