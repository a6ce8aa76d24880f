/// Reasons a HOB list operation can fail. A failed operation never leaves a
/// partially written record behind.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum HobError {
    /// Not enough free space left in the region for the record, or a record
    /// length that is zero once aligned.
    OutOfMemory,
    /// A size computation overflowed, or the region bounds handed to the
    /// list are unusable.
    BadParameters,
}

impl core::fmt::Display for HobError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfMemory => write!(f, "out of HOB memory"),
            Self::BadParameters => write!(f, "bad HOB parameters"),
        }
    }
}

impl core::error::Error for HobError {}

pub type Result<T> = core::result::Result<T, HobError>;
