pub mod config;
pub mod core;
pub mod domain;
pub mod ffi;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::TomlConfig;
pub use crate::core::call::{Call, Operation, Receiver};
pub use crate::core::engine::{ArithmeticMode, CallEngine, CallOutcome, EquivalenceReport};
pub use crate::core::foo::Foo;
pub use crate::core::render::OutputFormat;
pub use domain::model::{Bar, Value};
pub use domain::ports::FooInterface;
pub use utils::error::{FixtureError, Result};
