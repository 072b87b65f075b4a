//! Free functions over [`Bar`].
//!
//! The plain variants wrap on overflow so they stay total; the `checked_*`
//! variants report overflow instead. Within `i32` range both agree.

use crate::domain::model::Bar;
use crate::utils::error::{FixtureError, Result};

/// Multiplies the two fields.
pub fn m1(bar: Bar) -> i32 {
    bar.a.wrapping_mul(bar.b)
}

/// Doubles both fields of the copy it receives and hands the copy back.
pub fn m2(mut bar: Bar) -> Bar {
    bar.a = bar.a.wrapping_mul(2);
    bar.b = bar.b.wrapping_mul(2);
    bar
}

pub fn checked_m1(bar: Bar) -> Result<i32> {
    bar.a.checked_mul(bar.b).ok_or_else(|| overflow("m1", bar))
}

pub fn checked_m2(bar: Bar) -> Result<Bar> {
    match (bar.a.checked_mul(2), bar.b.checked_mul(2)) {
        (Some(a), Some(b)) => Ok(Bar::new(a, b)),
        _ => Err(overflow("m2", bar)),
    }
}

/// Overflow check for the scalar-doubling shape (`Foo.m0`); there is no free `m0`.
pub fn checked_m0(x: i32) -> Result<i32> {
    x.checked_mul(2).ok_or_else(|| FixtureError::Overflow {
        op: "m0".to_string(),
        input: x.to_string(),
    })
}

fn overflow(op: &str, bar: Bar) -> FixtureError {
    FixtureError::Overflow {
        op: op.to_string(),
        input: bar.to_string(),
    }
}
