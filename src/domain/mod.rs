// Domain layer: the radius/area value types and the settings port used by the demo harness.

pub mod model;
pub mod ports;
