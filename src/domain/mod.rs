// Domain layer: item model and the capability traits attached to it.

pub mod model;
pub mod ports;
