//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployStaticUseCase` - Collect locally, then mirror to each selected host
//! - `CheckUseCase` - Diagnose configuration, tools and host selection

pub mod check;
pub mod deploy_static;

pub use check::{CheckItem, CheckResult, CheckStatus, CheckUseCase};
pub use deploy_static::{DeployReport, DeployStaticOptions, DeployStaticUseCase};
