// Domain layer: value types, the object hierarchy and its ports. No I/O here.

pub mod model;
pub mod objects;
pub mod ports;
