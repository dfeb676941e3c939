//! Test fixtures - reusable config snippets.
//!
//! `{LOCAL_ROOT}` is replaced with the sandbox's `static/` directory.

/// Two static hosts; collection creates the local root and logs a line
pub const CONFIG_TWO_HOSTS: &str = r#"
[static]
local_root = "{LOCAL_ROOT}"
remote_root = "/home/www/static.example.com"
collect_command = "mkdir -p static && echo collected >> collect.log"

[ssh]
user = "deploy"

[roles]
static = ["web1.example.com", "web2.example.com:2222"]
cdn = ["edge1.example.com"]
"#;

/// Collection fails with exit code 3
pub const CONFIG_FAILING_COLLECT: &str = r#"
[static]
local_root = "{LOCAL_ROOT}"
collect_command = "echo boom >&2; exit 3"

[roles]
static = ["web1.example.com"]
"#;

/// Role used by the task has no hosts
pub const CONFIG_EMPTY_ROLE: &str = r#"
[static]
local_root = "{LOCAL_ROOT}"
collect_command = "echo collected >> collect.log"

[roles]
static = []
"#;

/// Misspelled key to exercise warnings
pub const CONFIG_WITH_TYPO: &str = r#"
[static]
local_root = "{LOCAL_ROOT}"
colect_command = "true"

[roles]
static = ["web1.example.com"]
"#;
