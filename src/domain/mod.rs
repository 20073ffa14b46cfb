// Domain layer: record/envelope models and the transformer port.

pub mod model;
pub mod ports;
