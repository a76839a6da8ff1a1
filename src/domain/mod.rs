// Domain layer: employee models and the ports the query service depends on.
// No HTTP or runtime types leak in here beyond serde.

pub mod model;
pub mod ports;
