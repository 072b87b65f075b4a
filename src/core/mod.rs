pub mod call;
pub mod engine;
pub mod foo;
pub mod ops;
pub mod render;

pub use crate::domain::model::{Bar, Value};
pub use crate::domain::ports::FooInterface;
pub use crate::utils::error::Result;
