// Domain layer: records exchanged with the directory APIs and the ports the view-models depend on.

pub mod model;
pub mod ports;
