use crate::domain::model::Bar;
use crate::domain::ports::FooInterface;

/// The single concrete `Foo`. Stateless; every method works on its argument copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Foo;

impl Foo {
    pub fn new() -> Self {
        Self
    }
}

impl FooInterface for Foo {
    fn m0(&self, x: i32) -> i32 {
        x.wrapping_mul(2)
    }

    fn m1(&self, x: Bar) -> i32 {
        x.a.wrapping_mul(x.b)
    }

    fn m2(&self, mut x: Bar) -> Bar {
        x.a = x.a.wrapping_mul(2);
        x.b = x.b.wrapping_mul(2);
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_m0() {
        let foo = Foo::new();
        assert_eq!(foo.m0(0), 0);
        assert_eq!(foo.m0(21), 42);
        assert_eq!(foo.m0(-7), -14);
    }

    #[test]
    fn test_m1_m2_examples() {
        let foo = Foo;
        assert_eq!(foo.m1(Bar::new(3, 4)), 12);
        assert_eq!(foo.m2(Bar::new(3, 4)), Bar::new(6, 8));
        assert_eq!(foo.m1(Bar::new(-2, 5)), -10);
        assert_eq!(foo.m2(Bar::new(-2, 5)), Bar::new(-4, 10));
    }
}
