use crate::core::call::{Call, Operation, Receiver};
use crate::core::foo::Foo;
use crate::core::ops;
use crate::domain::model::{Bar, Value};
use crate::domain::ports::FooInterface;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// How integer overflow is treated while running calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ArithmeticMode {
    /// Two's complement wraparound, never fails.
    #[default]
    Wrapping,
    /// Overflow becomes `FixtureError::Overflow`.
    Checked,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallOutcome {
    pub operation: Operation,
    pub receiver: Receiver,
    pub label: String,
    pub input: Value,
    pub output: Value,
}

/// Free-function and method results for the same record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquivalenceReport {
    pub input: Bar,
    pub free_m1: i32,
    pub foo_m1: i32,
    pub free_m2: Bar,
    pub foo_m2: Bar,
}

impl EquivalenceReport {
    pub fn m1_holds(&self) -> bool {
        self.free_m1 == self.foo_m1
    }

    pub fn m2_holds(&self) -> bool {
        self.free_m2 == self.foo_m2
    }

    pub fn holds(&self) -> bool {
        self.m1_holds() && self.m2_holds()
    }
}

pub struct CallEngine<F: FooInterface> {
    foo: F,
    mode: ArithmeticMode,
}

impl<F: FooInterface> CallEngine<F> {
    pub fn new(foo: F) -> Self {
        Self {
            foo,
            mode: ArithmeticMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: ArithmeticMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> ArithmeticMode {
        self.mode
    }

    pub fn run(&self, call: &Call) -> Result<CallOutcome> {
        if self.mode == ArithmeticMode::Checked {
            Self::check_overflow(call)?;
        }

        let output = match *call {
            Call::FreeM1(bar) => Value::Int(ops::m1(bar)),
            Call::FreeM2(bar) => Value::Bar(ops::m2(bar)),
            Call::FooM0(x) => Value::Int(self.foo.m0(x)),
            Call::FooM1(bar) => Value::Int(self.foo.m1(bar)),
            Call::FooM2(bar) => Value::Bar(self.foo.m2(bar)),
        };

        tracing::debug!(call = %call, output = %output, mode = ?self.mode, "call returned");

        Ok(CallOutcome {
            operation: call.operation(),
            receiver: call.receiver(),
            label: call.label(),
            input: call.input(),
            output,
        })
    }

    pub fn run_batch(&self, calls: &[Call]) -> Result<Vec<CallOutcome>> {
        tracing::info!("Running {} call(s) in {:?} mode", calls.len(), self.mode);

        let mut outcomes = Vec::with_capacity(calls.len());
        for (index, call) in calls.iter().enumerate() {
            match self.run(call) {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => {
                    tracing::error!("Call #{} ({}) failed: {}", index + 1, call, e);
                    return Err(e);
                }
            }
        }
        Ok(outcomes)
    }

    /// Compares `m1` and `m2` through both receivers. Always uses the
    /// wrapping forms so the comparison is defined for every input.
    pub fn check_equivalence(&self, bar: Bar) -> EquivalenceReport {
        let report = EquivalenceReport {
            input: bar,
            free_m1: ops::m1(bar),
            foo_m1: self.foo.m1(bar),
            free_m2: ops::m2(bar),
            foo_m2: self.foo.m2(bar),
        };

        if report.holds() {
            tracing::debug!(input = %bar, "free functions and Foo methods agree");
        } else {
            tracing::warn!(input = %bar, ?report, "free functions and Foo methods disagree");
        }
        report
    }

    fn check_overflow(call: &Call) -> Result<()> {
        match *call {
            Call::FooM0(x) => ops::checked_m0(x).map(|_| ()),
            Call::FreeM1(bar) | Call::FooM1(bar) => ops::checked_m1(bar).map(|_| ()),
            Call::FreeM2(bar) | Call::FooM2(bar) => ops::checked_m2(bar).map(|_| ()),
        }
    }
}

impl Default for CallEngine<Foo> {
    fn default() -> Self {
        Self::new(Foo)
    }
}
