//! Provides a source of data from a vector, used in testing
use crate::{Headers, Row, RowResult, RowStream};

pub struct MockStream<I> {
    iter: I,
    headers: Headers,
}

impl<I> MockStream<I>
where
    I: Iterator<Item = RowResult>,
{
    pub fn new(iter: I, headers: Headers) -> MockStream<I> {
        MockStream { iter, headers }
    }

    /// The first row given by `iter` becomes the headers. Nothing is built
    /// if there is no such row.
    pub fn from_rows(mut iter: I) -> Option<MockStream<I>> {
        match iter.next() {
            Some(Ok(row)) => Some(MockStream::new(iter, Headers::from_row(row))),
            _ => None,
        }
    }
}

impl<I> IntoIterator for MockStream<I>
where
    I: Iterator<Item = RowResult>,
{
    type Item = RowResult;

    type IntoIter = I;

    fn into_iter(self) -> Self::IntoIter {
        self.iter
    }
}

impl<I> RowStream for MockStream<I>
where
    I: Iterator<Item = RowResult>,
{
    fn headers(&self) -> &Headers {
        &self.headers
    }
}

#[cfg(test)]
mod tests {
    use super::{Headers, MockStream, Row, RowStream};
    use crate::RowResult;

    #[test]
    fn test_mock_stream() {
        let m = MockStream::from_rows(
            vec![
                Ok(Row::from(vec!["id", "num"])),
                Ok(Row::from(vec!["1", "40"])),
                Ok(Row::from(vec!["2", "39"])),
            ]
            .into_iter(),
        )
        .unwrap();

        assert_eq!(
            *m.headers(),
            Headers::from_row(Row::from(vec!["id", "num"]))
        );

        let mut m = m.into_iter();

        assert_eq!(m.next().unwrap().unwrap(), Row::from(vec!["1", "40"]));
        assert_eq!(m.next().unwrap().unwrap(), Row::from(vec!["2", "39"]));
    }

    #[test]
    fn test_empty_mock_stream() {
        let rows: Vec<RowResult> = Vec::new();

        assert!(MockStream::from_rows(rows.into_iter()).is_none());
    }
}
