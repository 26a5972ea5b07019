// Domain layer: entities, view records and ports. Only std/serde/chrono here.

pub mod model;
pub mod ports;
