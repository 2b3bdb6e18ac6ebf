// Domain layer: the four pattern demonstrations plus the ports they write through.
// No external dependencies beyond std/serde when needed.

pub mod factory;
pub mod member;
pub mod payment;
pub mod person;
pub mod ports;
pub mod system;
