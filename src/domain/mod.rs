// Domain layer: entities, sort policies and ports. No knowledge of config or logging setup.

pub mod event;
pub mod ordering;
pub mod person;
pub mod ports;
