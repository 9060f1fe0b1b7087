// Domain layer: core models and ports (interfaces). Nothing here talks to the network.

pub mod model;
pub mod ports;
