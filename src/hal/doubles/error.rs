use std::fmt::{self, Display, Formatter};

#[derive(Debug, Copy, Clone)]
pub struct FakeError;

impl Display for FakeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "A fake error occurred [TESTING ONLY]")
    }
}

impl std::error::Error for FakeError {}
