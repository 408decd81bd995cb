// Domain layer: the employee model and the ports the registry talks through.

pub mod model;
pub mod ports;
