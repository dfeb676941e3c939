//! Domain Entities
//!
//! - `Task` - A named, role-restricted unit of work

mod task;

pub use task::{find_task, Task, DEPLOY_STATIC, TASKS};
