//! Domain Layer
//!
//! Pure deploy logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Registered tasks
//! - `value_objects/` - Host strings and resolved hosts
//! - `services/` - Host selection and command planning
//! - `ports/` - Interface definitions for infrastructure (process runner, events)

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
