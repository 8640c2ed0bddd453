use std::fmt::Display;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SGError
{
    /// Spline degree must be odd and positive.
    InvalidDegree(usize),
    LZ4DecompressionFailed,
    SerializationFailed,
    DeserializationFailed,
    FileIOError,
}
impl std::error::Error for SGError {}

impl Display for SGError
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self
        {
            SGError::InvalidDegree(degree) => write!(f, "InvalidDegree({degree}): degree must be odd and positive"),
            _ => write!(f, "{:?}", *self),
        }
    }
}

#[test]
fn check_error_display()
{
    assert_eq!(SGError::FileIOError.to_string(), "FileIOError");
    assert!(SGError::InvalidDegree(4).to_string().starts_with("InvalidDegree(4)"));
}
