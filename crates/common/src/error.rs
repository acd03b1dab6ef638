use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A column of a structure-of-arrays collection does not have the same
    /// length as the first (`x`) column.
    #[error("Column `{field}` has length {found}, expected {expected}.")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },
}
