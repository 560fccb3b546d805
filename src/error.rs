use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StackError {
    Empty,
    Modified,
}

impl StackError {
    fn description(&self) -> &'static str {
        match self {
            StackError::Empty => "The stack is empty",
            StackError::Modified => "The stack was modified during traversal",
        }
    }
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl Error for StackError {}
