//! # FsId: the archive key
//!
//! An [`FsId`] addresses one artifact (time series, blob, MJD series) of the external
//! file store. It is made of two parts:
//!
//! - a **path**, a `/`-delimited namespace such as `/cal/pixels/SocCal/lct/2/1`,
//! - a **name**, a `:`-delimited discriminator inside that path such as `50:60`.
//!
//! The canonical key is `path + "/" + name`, e.g. `/cal/pixels/SocCal/lct/2/1/50:60`.
//! Two identifiers are equal iff their canonical strings are equal; ordering and hashing
//! follow the canonical string as well.
//!
//! ## Grammar
//!
//! ```text
//! <path> := "/" segment ("/" segment)*
//! <name> := token (":" token)*
//! key    := <path> "/" <name>
//! ```
//!
//! The colon is reserved: it never appears inside a path segment. A slash never appears
//! inside the name.
//!
//! Identifier families are produced by the factories in [`crate::factories`]; the generic
//! constructors here exist for collaborators that already hold a key (e.g. read back from
//! a store listing).
//!
//! ## See also
//! ------------
//! * [`compose`](crate::grammar::compose) – Build an FsId from path segments and name tokens.
//! * [`parser`](crate::parser) – Recover typed coordinates from an FsId.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    constants::{NAME_SEPARATOR, PATH_SEPARATOR},
    fsid_errors::FsIdError,
};

/// Immutable hierarchical identifier of a file-store artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FsId {
    full: String,
    // byte index of the '/' separating path and name
    split: usize,
}

impl FsId {
    /// Build an identifier from an already joined path and name.
    ///
    /// Arguments
    /// -----------------
    /// * `path`: The namespace, starting with `/`, without a trailing `/`.
    /// * `name`: The discriminator inside the path.
    ///
    /// Return
    /// ----------
    /// * The identifier, or [`FsIdError::InvalidSegment`] if either part breaks the grammar.
    pub fn new(path: &str, name: &str) -> Result<Self, FsIdError> {
        check_path(path)?;
        check_name(name)?;
        Ok(FsId {
            full: format!("{path}{PATH_SEPARATOR}{name}"),
            split: path.len(),
        })
    }

    /// The namespace part, e.g. `/cal/pixels/SocCal/lct/2/1`.
    pub fn path(&self) -> &str {
        &self.full[..self.split]
    }

    /// The discriminator part, e.g. `50:60`.
    pub fn name(&self) -> &str {
        &self.full[self.split + 1..]
    }

    /// The canonical key.
    pub fn as_str(&self) -> &str {
        &self.full
    }

    /// Path segments without the leading empty segment.
    pub fn path_segments(&self) -> impl Iterator<Item = &str> {
        self.path().split(PATH_SEPARATOR).skip(1)
    }

    /// Name tokens in order.
    pub fn name_tokens(&self) -> impl Iterator<Item = &str> {
        self.name().split(NAME_SEPARATOR)
    }

    /// True if `prefix` is a whole-segment prefix of this identifier's path.
    ///
    /// `/cal/pixels` is a prefix of `/cal/pixels/SocCal/lct/2/1/50:60`,
    /// `/cal/pix` is not.
    pub fn is_under(&self, prefix: &str) -> bool {
        let prefix = prefix.trim_end_matches(PATH_SEPARATOR);
        if prefix.is_empty() {
            return true;
        }
        let path = self.path();
        path == prefix
            || (path.starts_with(prefix)
                && path[prefix.len()..].starts_with(PATH_SEPARATOR))
    }
}

fn check_path(path: &str) -> Result<(), FsIdError> {
    let invalid = |reason| FsIdError::InvalidSegment {
        segment: path.to_string(),
        reason,
    };

    if !path.starts_with(PATH_SEPARATOR) {
        return Err(invalid("path must start with '/'"));
    }
    if path.contains(NAME_SEPARATOR) {
        return Err(invalid("path must not contain ':'"));
    }
    if path[1..].split(PATH_SEPARATOR).any(str::is_empty) {
        return Err(invalid("path has an empty segment"));
    }
    Ok(())
}

fn check_name(name: &str) -> Result<(), FsIdError> {
    let invalid = |reason| FsIdError::InvalidSegment {
        segment: name.to_string(),
        reason,
    };

    if name.contains(PATH_SEPARATOR) {
        return Err(invalid("name must not contain '/'"));
    }
    if name.split(NAME_SEPARATOR).any(str::is_empty) {
        return Err(invalid("name has an empty token"));
    }
    Ok(())
}

impl fmt::Display for FsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}

impl AsRef<str> for FsId {
    fn as_ref(&self) -> &str {
        &self.full
    }
}

impl FromStr for FsId {
    type Err = FsIdError;

    /// Split a canonical key at its last `/` into path and name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let split = s.rfind(PATH_SEPARATOR).ok_or(FsIdError::InvalidSegment {
            segment: s.to_string(),
            reason: "key has no '/'",
        })?;
        if split == 0 {
            return Err(FsIdError::InvalidSegment {
                segment: s.to_string(),
                reason: "key has an empty path",
            });
        }
        FsId::new(&s[..split], &s[split + 1..])
    }
}

impl TryFrom<&str> for FsId {
    type Error = FsIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for FsId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.full)
    }
}

impl<'de> Deserialize<'de> for FsId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
