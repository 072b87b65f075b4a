use crate::domain::model::{Bar, Value};
use crate::utils::error::{FixtureError, Result};
use crate::utils::validation::{validate_absent, validate_required_field};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    M0,
    M1,
    M2,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::M0 => "m0",
            Operation::M1 => "m1",
            Operation::M2 => "m2",
        };
        f.write_str(name)
    }
}

/// Who answers the call: the free function or the `Foo` method of the same shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Receiver {
    Free,
    #[default]
    Foo,
}

/// A fully-formed request. Invalid combinations (a free `m0`, a record op
/// without both fields) cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    FreeM1(Bar),
    FreeM2(Bar),
    FooM0(i32),
    FooM1(Bar),
    FooM2(Bar),
}

impl Call {
    /// Builds a call from loosely-typed parts, as they arrive from the CLI or a batch file.
    pub fn from_parts(
        op: Operation,
        receiver: Receiver,
        a: Option<i32>,
        b: Option<i32>,
        x: Option<i32>,
    ) -> Result<Self> {
        let name = op.to_string();
        match op {
            Operation::M0 => {
                if receiver == Receiver::Free {
                    return Err(FixtureError::ValidationError {
                        message: "m0 has no free-function form".to_string(),
                    });
                }
                validate_absent(&name, "a", &a)?;
                validate_absent(&name, "b", &b)?;
                let x = *validate_required_field(&name, "x", &x)?;
                Ok(Call::FooM0(x))
            }
            Operation::M1 | Operation::M2 => {
                validate_absent(&name, "x", &x)?;
                let a = *validate_required_field(&name, "a", &a)?;
                let b = *validate_required_field(&name, "b", &b)?;
                let bar = Bar::new(a, b);
                Ok(match (op, receiver) {
                    (Operation::M1, Receiver::Free) => Call::FreeM1(bar),
                    (Operation::M1, Receiver::Foo) => Call::FooM1(bar),
                    (_, Receiver::Free) => Call::FreeM2(bar),
                    (_, Receiver::Foo) => Call::FooM2(bar),
                })
            }
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            Call::FooM0(_) => Operation::M0,
            Call::FreeM1(_) | Call::FooM1(_) => Operation::M1,
            Call::FreeM2(_) | Call::FooM2(_) => Operation::M2,
        }
    }

    pub fn receiver(&self) -> Receiver {
        match self {
            Call::FreeM1(_) | Call::FreeM2(_) => Receiver::Free,
            Call::FooM0(_) | Call::FooM1(_) | Call::FooM2(_) => Receiver::Foo,
        }
    }

    pub fn input(&self) -> Value {
        match *self {
            Call::FooM0(x) => Value::Int(x),
            Call::FreeM1(bar) | Call::FreeM2(bar) | Call::FooM1(bar) | Call::FooM2(bar) => {
                Value::Bar(bar)
            }
        }
    }

    /// `m1` for the free function, `Foo.m1` for the method.
    pub fn label(&self) -> String {
        match self.receiver() {
            Receiver::Free => self.operation().to_string(),
            Receiver::Foo => format!("Foo.{}", self.operation()),
        }
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.input() {
            Value::Int(x) => write!(f, "{}({})", self.label(), x),
            Value::Bar(bar) => write!(f, "{}{}", self.label(), bar),
        }
    }
}
