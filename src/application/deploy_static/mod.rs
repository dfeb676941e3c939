//! Static Deploy Module
//!
//! Orchestrates `deploy_static`: collect assets locally, then mirror them
//! to every selected host.
//!
//! ## Structure
//!
//! - `options` - Per-invocation overrides (`DeployStaticOptions`)
//! - `result` - Outcome of a successful run (`DeployReport`)
//! - `use_case` - The sequence itself (`DeployStaticUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use static_deploy::application::deploy_static::{DeployStaticOptions, DeployStaticUseCase};
//!
//! let use_case = DeployStaticUseCase::new(SystemRunner::new(), sink);
//! let report = use_case.execute(&config, &DeployStaticOptions::default())?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::DeployStaticOptions;
pub use result::DeployReport;
pub use use_case::DeployStaticUseCase;
