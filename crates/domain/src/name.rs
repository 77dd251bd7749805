use crate::errors::ResolveError;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// A DNS name held in comparison form: ASCII-lowercased, trailing dot
/// stripped. The empty name is the root zone. Equality, hashing, and
/// zone tests all operate on this form, so comparisons anywhere in the
/// resolver are case- and trailing-dot-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainName(Arc<str>);

impl DomainName {
    pub fn new(name: impl AsRef<str>) -> Self {
        let raw = name.as_ref();
        let trimmed = raw.strip_suffix('.').unwrap_or(raw);
        Self(Arc::from(trimmed.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Zone-cut test: a zone owner covers a name when they are equal or
    /// the name sits below the owner on a label boundary. The root zone
    /// covers every name.
    pub fn covers(&self, name: &DomainName) -> bool {
        if self.is_root() {
            return true;
        }
        name.0 == self.0 || name.0.ends_with(&format!(".{}", self.0))
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DomainName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for DomainName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Validating constructor for names arriving from the user. Names decoded
/// off the wire skip this and go through `new`.
impl FromStr for DomainName {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = DomainName::new(s);
        if name.is_root() {
            return Err(ResolveError::InvalidName("name is empty".to_string()));
        }
        if name.0.len() > MAX_NAME_LEN {
            return Err(ResolveError::InvalidName(format!(
                "'{}' exceeds {} characters",
                s, MAX_NAME_LEN
            )));
        }
        let labels: Vec<&str> = name.0.split('.').collect();
        if labels.len() < 2 {
            return Err(ResolveError::InvalidName(format!(
                "'{}' has no top-level domain",
                s
            )));
        }
        for label in labels {
            if label.is_empty() || label.len() > MAX_LABEL_LEN {
                return Err(ResolveError::InvalidName(format!(
                    "'{}' has a label of invalid length",
                    s
                )));
            }
            if label.starts_with('-') || label.ends_with('-') {
                return Err(ResolveError::InvalidName(format!(
                    "'{}' has a label starting or ending with '-'",
                    s
                )));
            }
            let valid = label
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
            if !valid {
                return Err(ResolveError::InvalidName(format!(
                    "'{}' contains characters outside [a-z0-9-_]",
                    s
                )));
            }
        }
        Ok(name)
    }
}
