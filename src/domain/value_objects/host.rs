//! Remote host value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Hosts deployed to when nothing else is configured
pub const DEFAULT_HOSTS: &[&str] = &["104.196.168.90", "35.196.46.172"];

/// An SSH destination (`host` or `user@host`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Host(String);

/// Error returned for malformed host strings
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid host '{0}': expected 'host' or 'user@host'")]
pub struct InvalidHost(pub String);

impl Host {
    pub fn parse(raw: &str) -> Result<Self, InvalidHost> {
        let trimmed = raw.trim();
        let valid = !trimmed.is_empty()
            && !trimmed.chars().any(char::is_whitespace)
            && !trimmed.starts_with('-')
            && !trimmed.ends_with('@')
            && trimmed.matches('@').count() <= 1;
        if !valid {
            return Err(InvalidHost(raw.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Parse a comma separated host list, ignoring empty entries
    pub fn parse_list(raw: &str) -> Result<Vec<Self>, InvalidHost> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Self::parse)
            .collect()
    }

    pub fn defaults() -> Vec<Self> {
        DEFAULT_HOSTS.iter().map(|h| Self(h.to_string())).collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Destination with `user` applied when none is embedded
    pub fn destination(&self, user: Option<&str>) -> String {
        match user {
            Some(user) if !self.0.contains('@') => format!("{}@{}", user, self.0),
            _ => self.0.clone(),
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Host {
    type Err = InvalidHost;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Host {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Host {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Host::parse(&raw).map_err(serde::de::Error::custom)
    }
}
