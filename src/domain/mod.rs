// Domain layer: core models and ports (interfaces). No external dependencies
// beyond serde_yaml for the opaque document representation.

pub mod model;
pub mod ports;
