//! Gym Attendance - member registry and check-in tracking.
//!
//! Members are identified by their normalized name. Each check-in opens a
//! session; check-out closes the newest open one and records whole minutes
//! spent. SQLite is the system of record, with an optional flat-file
//! journal mirroring check-ins.

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
