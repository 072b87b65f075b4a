//! C ABI entry points.
//!
//! `m1` and `m2` keep the unmangled names of the C free functions. `Foo` has
//! no state, so its methods are flattened to `foo_m0`, `foo_m1` and `foo_m2`.
//! All of them wrap on overflow; nothing here can unwind into the caller.

use crate::core::foo::Foo;
use crate::core::ops;
use crate::domain::model::Bar;
use crate::domain::ports::FooInterface;
use std::os::raw::c_int;

#[no_mangle]
pub extern "C" fn m1(bar: Bar) -> c_int {
    ops::m1(bar)
}

#[no_mangle]
pub extern "C" fn m2(bar: Bar) -> Bar {
    ops::m2(bar)
}

#[no_mangle]
pub extern "C" fn foo_m0(x: c_int) -> c_int {
    Foo.m0(x)
}

#[no_mangle]
pub extern "C" fn foo_m1(x: Bar) -> c_int {
    Foo.m1(x)
}

#[no_mangle]
pub extern "C" fn foo_m2(x: Bar) -> Bar {
    Foo.m2(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_points_match_rust_api() {
        let bar = Bar::new(-2, 5);
        assert_eq!(m1(bar), -10);
        assert_eq!(m2(bar), Bar::new(-4, 10));
        assert_eq!(foo_m0(21), 42);
        assert_eq!(foo_m1(bar), m1(bar));
        assert_eq!(foo_m2(bar), m2(bar));
    }

    #[test]
    fn test_entry_points_through_fn_pointers() {
        // Calling through `extern "C"` pointers exercises the by-value struct ABI.
        let by_value: extern "C" fn(Bar) -> Bar = m2;
        let to_int: extern "C" fn(Bar) -> c_int = foo_m1;
        assert_eq!(by_value(Bar::new(3, 4)), Bar::new(6, 8));
        assert_eq!(to_int(Bar::new(3, 4)), 12);
    }

    #[test]
    fn test_overflow_wraps() {
        assert_eq!(foo_m0(i32::MAX), -2);
        assert_eq!(m1(Bar::new(i32::MIN, -1)), i32::MIN);
    }
}
