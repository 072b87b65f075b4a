// Domain layer: the fixture's record type and the Foo capability set. No harness concerns here.

pub mod model;
pub mod ports;
