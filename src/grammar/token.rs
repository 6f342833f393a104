//! Declarative token tables for enumerated FsId segments.
//!
//! Every enumerated coordinate (cadence type, collateral type, series kinds, ...) is
//! declared once with [`fsid_token!`], as a table `Variant => "wire string"`. The same
//! table drives:
//!
//! * encoding ([`FsIdToken::token`]),
//! * decoding ([`std::str::FromStr`], failing with
//!   [`FsIdError::UnrecognizedEnumString`](crate::fsid_errors::FsIdError::UnrecognizedEnumString)),
//! * the regex alternation used by the [`parser`](crate::parser),
//! * serde (the wire string is the serialized form).
//!
//! so the encode and decode vocabularies cannot drift apart.

use std::{fmt::Debug, fmt::Display, str::FromStr};

use itertools::Itertools;

use crate::fsid_errors::FsIdError;

/// An enumerated FsId segment with a closed set of wire strings.
pub trait FsIdToken:
    Copy + Eq + Debug + Display + FromStr<Err = FsIdError> + Send + Sync + 'static
{
    /// Human readable kind, used in error messages.
    const KIND: &'static str;

    /// Every variant, in declaration order.
    fn all() -> &'static [Self];

    /// Wire string of this variant.
    fn token(&self) -> &'static str;

    /// Regex alternation over every wire string, without surrounding group.
    fn alternation() -> String {
        Self::all()
            .iter()
            .map(|variant| regex::escape(variant.token()))
            .join("|")
    }
}

/// Declare an enumerated FsId segment from its wire-string table.
///
/// ```ignore
/// fsid_token! {
///     /// Cadence of the sampling.
///     pub enum CadenceType: "cadence type" {
///         Long => "long",
///         Short => "short",
///     }
/// }
/// ```
macro_rules! fsid_token {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire string of this variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl $crate::grammar::token::FsIdToken for $name {
            const KIND: &'static str = $kind;

            fn all() -> &'static [Self] {
                $name::ALL
            }

            fn token(&self) -> &'static str {
                self.as_str()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::fsid_errors::FsIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    _ => Err($crate::fsid_errors::FsIdError::UnrecognizedEnumString {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use fsid_token;

/// Checks shared by the unit tests of every module declaring tokens.
#[cfg(test)]
pub(crate) fn assert_token_table<T: FsIdToken>() {
    use crate::constants::{NAME_SEPARATOR, PATH_SEPARATOR};

    let mut seen = std::collections::HashSet::new();
    for variant in T::all() {
        let text = variant.token();
        assert!(!text.is_empty(), "{} has an empty token", T::KIND);
        assert!(
            !text.contains(NAME_SEPARATOR) && !text.contains(PATH_SEPARATOR),
            "{} token {text:?} contains a reserved separator",
            T::KIND
        );
        assert!(seen.insert(text), "{} token {text:?} is duplicated", T::KIND);
        assert_eq!(text.parse::<T>().unwrap(), *variant);
    }
}
