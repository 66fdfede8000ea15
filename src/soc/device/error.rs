use std::{error::Error, fmt};

pub type AccessResult<T> = Result<T, AccessError>;

/// Rejected register access. Returned before any register or interrupt
/// state is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    InvalidOffset { offset: usize },
    InvalidSize { offset: usize, size: usize },
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessError::InvalidOffset { offset } => {
                write!(f, "offset 0x{offset:08X} does not map to a register")
            }
            AccessError::InvalidSize { offset, size } => write!(
                f,
                "access of {size} bytes at offset 0x{offset:08X} (registers are 4 bytes wide)"
            ),
        }
    }
}

impl Error for AccessError {}
