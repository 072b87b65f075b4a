use serde::{Deserialize, Serialize};
use std::fmt;

/// Two-field record passed and returned by value.
///
/// `#[repr(C)]` keeps the layout identical to `struct { int a; int b; }` so the
/// same value can cross the [`crate::ffi`] boundary unchanged.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Bar {
    pub a: i32,
    pub b: i32,
}

impl Bar {
    pub const fn new(a: i32, b: i32) -> Self {
        Self { a, b }
    }
}

impl From<(i32, i32)> for Bar {
    fn from((a, b): (i32, i32)) -> Self {
        Self { a, b }
    }
}

impl fmt::Display for Bar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i32),
    Bar(Bar),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Bar(bar) => write!(f, "{}", bar),
        }
    }
}
