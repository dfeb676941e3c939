//! Host String Value Object
//!
//! Parses `[user@]host[:port]` the way deploy targets are written in
//! `[roles]` and on the command line.

use std::fmt;

use crate::error::{DeployError, DeployResult};

/// A host string as written by the user; user and port are optional
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostSpec {
    pub user: Option<String>,
    pub host: String,
    pub port: Option<u16>,
}

impl HostSpec {
    /// Parse `[user@]host[:port]`
    ///
    /// IPv6 literals are written in brackets when a port is given
    /// (`[::1]:2222`); a bare address with several colons is taken as a
    /// host without port.
    pub fn parse(input: &str) -> DeployResult<Self> {
        let invalid = |reason: &str| DeployError::InvalidHost {
            host: input.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(invalid("empty host"));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(invalid("contains whitespace"));
        }

        let (user, rest) = match trimmed.rsplit_once('@') {
            Some((user, rest)) => {
                if user.is_empty() {
                    return Err(invalid("empty user before '@'"));
                }
                (Some(user.to_string()), rest)
            }
            None => (None, trimmed),
        };

        let (host, port) = if let Some(bracketed) = rest.strip_prefix('[') {
            let (host, after) = bracketed
                .split_once(']')
                .ok_or_else(|| invalid("unterminated '[' in IPv6 address"))?;
            let port = match after {
                "" => None,
                _ => {
                    let raw = after
                        .strip_prefix(':')
                        .ok_or_else(|| invalid("unexpected text after ']'"))?;
                    Some(parse_port(raw).ok_or_else(|| invalid("invalid port"))?)
                }
            };
            (host, port)
        } else if rest.matches(':').count() > 1 {
            (rest, None)
        } else {
            match rest.split_once(':') {
                Some((host, raw)) => (
                    host,
                    Some(parse_port(raw).ok_or_else(|| invalid("invalid port"))?),
                ),
                None => (rest, None),
            }
        };

        if host.is_empty() {
            return Err(invalid("empty host name"));
        }

        Ok(Self {
            user,
            host: host.to_string(),
            port,
        })
    }

    /// Fill in missing user and port
    pub fn resolve(&self, default_user: &str, default_port: u16) -> Host {
        Host {
            user: self.user.clone().unwrap_or_else(|| default_user.to_string()),
            host: self.host.clone(),
            port: self.port.unwrap_or(default_port),
        }
    }
}

fn parse_port(raw: &str) -> Option<u16> {
    raw.parse::<u16>().ok().filter(|p| *p != 0)
}

/// A fully resolved deploy target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    pub user: String,
    pub host: String,
    pub port: u16,
}

impl Host {
    fn is_ipv6(&self) -> bool {
        self.host.contains(':')
    }

    fn host_part(&self) -> String {
        if self.is_ipv6() {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        }
    }

    /// rsync destination `user@host:path`
    pub fn destination(&self, remote_path: &str) -> String {
        format!("{}@{}:{}", self.user, self.host_part(), remote_path)
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{}", self.user, self.host_part(), self.port)
    }
}
