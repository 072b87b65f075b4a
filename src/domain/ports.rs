use crate::domain::model::Bar;

/// The capability set declared by the `Foo` interface.
///
/// Methods take their argument by value and return by value; implementors
/// must not observe or mutate anything beyond the copy they are handed.
pub trait FooInterface {
    /// Scalar in, scalar out.
    fn m0(&self, x: i32) -> i32;

    /// Record in, scalar out.
    fn m1(&self, x: Bar) -> i32;

    /// Record in, record out.
    fn m2(&self, x: Bar) -> Bar;
}
