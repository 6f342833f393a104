//! Declarative field layouts shared by encoding and decoding.
//!
//! A [`Layout`] lists, in order, the path segments and name tokens of one identifier
//! family. A slot is either a fixed literal or a typed field identified by its
//! [`FieldKind`]. From a single layout we derive:
//!
//! - the encoder ([`Layout::encode`]): walk the slots and ask the coordinates for the value
//!   of each field by kind,
//! - the strict decoder regex: literals escaped, token fields as the alternation of their
//!   token table, numeric fields as digit runs, every field a named capture group,
//! - the shape regex: the same with token fields loosened to any segment, used to tell
//!   "unknown token in a known family" apart from "not this family at all".
//!
//! Both regexes are anchored at both ends.

use itertools::Itertools;
use regex::{Captures, Regex};

use crate::{
    constants::{NAME_SEPARATOR, PATH_SEPARATOR},
    fs_id::FsId,
    fsid_errors::FsIdError,
    grammar::{compose, token::FsIdToken},
};

/// Role of a field inside a layout, also the name of its capture group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    SeriesType,
    TargetType,
    CadenceType,
    CollateralType,
    FluxType,
    Module,
    Output,
    Row,
    Column,
    Offset,
    Duration,
    PipelineInstance,
    KeplerId,
    PulseDuration,
}

impl FieldKind {
    /// Capture group name, also used as the field name in errors.
    pub const fn group(&self) -> &'static str {
        match self {
            FieldKind::SeriesType => "series_type",
            FieldKind::TargetType => "target_type",
            FieldKind::CadenceType => "cadence_type",
            FieldKind::CollateralType => "collateral_type",
            FieldKind::FluxType => "flux_type",
            FieldKind::Module => "module",
            FieldKind::Output => "output",
            FieldKind::Row => "row",
            FieldKind::Column => "column",
            FieldKind::Offset => "offset",
            FieldKind::Duration => "duration",
            FieldKind::PipelineInstance => "pipeline_instance",
            FieldKind::KeplerId => "kepler_id",
            FieldKind::PulseDuration => "pulse_duration",
        }
    }
}

/// What a field slot may contain.
#[derive(Debug, Clone, Copy)]
pub enum Pattern {
    /// One of the wire strings of a token table.
    Token(fn() -> String),
    /// Unsigned decimal integer without leading zeros.
    Unsigned,
    /// Unsigned plain decimal with a fractional part, as written by
    /// [`format_pulse_duration`](crate::grammar::format_pulse_duration).
    Decimal,
}

impl Pattern {
    fn regex(&self, strict: bool) -> String {
        match self {
            Pattern::Token(alternation) if strict => format!("(?:{})", alternation()),
            Pattern::Token(_) => "[^/:]+".to_string(),
            Pattern::Unsigned => "(?:0|[1-9][0-9]*)".to_string(),
            Pattern::Decimal => r"(?:0|[1-9][0-9]*)\.[0-9]+".to_string(),
        }
    }
}

/// One path segment or name token of a layout.
#[derive(Debug, Clone, Copy)]
pub enum Slot {
    Literal(&'static str),
    Field(FieldKind, Pattern),
}

impl Slot {
    /// A field holding a token of `T`.
    pub const fn token<T: FsIdToken>(kind: FieldKind) -> Slot {
        Slot::Field(kind, Pattern::Token(T::alternation))
    }

    /// A field holding an unsigned integer.
    pub const fn unsigned(kind: FieldKind) -> Slot {
        Slot::Field(kind, Pattern::Unsigned)
    }

    /// A field holding a decimal number.
    pub const fn decimal(kind: FieldKind) -> Slot {
        Slot::Field(kind, Pattern::Decimal)
    }

    fn regex(&self, strict: bool) -> String {
        match self {
            Slot::Literal(text) => regex::escape(text),
            Slot::Field(kind, pattern) => {
                format!("(?P<{}>{})", kind.group(), pattern.regex(strict))
            }
        }
    }
}

/// Ordered slots of one identifier family.
#[derive(Debug)]
pub struct Layout {
    pub family: &'static str,
    pub path: &'static [Slot],
    pub name: &'static [Slot],
}

/// Value source for the fields of a layout.
pub trait FieldSource {
    /// Canonical string of the field of this kind, `None` if the coordinates have none.
    fn field(&self, kind: FieldKind) -> Option<String>;
}

impl Layout {
    /// Anchored regex over the canonical key.
    ///
    /// Arguments
    /// -----------------
    /// * `strict`: token fields match only their table's wire strings if true, any segment
    ///   otherwise.
    pub fn regex(&self, strict: bool) -> String {
        let path = self
            .path
            .iter()
            .map(|slot| slot.regex(strict))
            .join(&PATH_SEPARATOR.to_string());
        let name = self
            .name
            .iter()
            .map(|slot| slot.regex(strict))
            .join(&NAME_SEPARATOR.to_string());
        format!("^{PATH_SEPARATOR}{path}{PATH_SEPARATOR}{name}$")
    }

    /// Compose an identifier by asking `source` for every field of this layout, in order.
    pub fn encode<S: FieldSource + ?Sized>(&self, source: &S) -> Result<FsId, FsIdError> {
        let resolve = |slot: &Slot| -> Result<String, FsIdError> {
            match slot {
                Slot::Literal(text) => Ok((*text).to_string()),
                Slot::Field(kind, _) => source.field(*kind).ok_or(FsIdError::InvalidSegment {
                    segment: kind.group().to_string(),
                    reason: "coordinates have no value for this field",
                }),
            }
        };
        let path = self.path.iter().map(resolve).collect::<Result<Vec<_>, _>>()?;
        let name = self.name.iter().map(resolve).collect::<Result<Vec<_>, _>>()?;
        compose(path, name)
    }
}

/// A layout with its regexes compiled, built once per family.
#[derive(Debug)]
pub struct CompiledLayout {
    layout: &'static Layout,
    strict: Regex,
    shape: Regex,
}

impl CompiledLayout {
    /// Compile the strict and shape regexes of `layout`.
    ///
    /// Layouts are static tables of escaped literals and fixed patterns, so compilation
    /// cannot fail for a well-formed table; a failure is a bug in the table itself.
    pub fn new(layout: &'static Layout) -> Self {
        let compile = |strict| {
            Regex::new(&layout.regex(strict))
                .unwrap_or_else(|e| panic!("invalid {} layout: {e}", layout.family))
        };
        CompiledLayout {
            layout,
            strict: compile(true),
            shape: compile(false),
        }
    }

    pub fn layout(&self) -> &'static Layout {
        self.layout
    }

    /// True if `key` matches the strict regex.
    pub fn is_match(&self, key: &str) -> bool {
        self.strict.is_match(key)
    }

    /// Split `key` into its fields.
    ///
    /// Return
    /// ----------
    /// * The captured fields if `key` has the family's shape (token values not yet checked
    ///   against their tables), or [`FsIdError::MalformedIdentifier`] otherwise.
    pub fn fields<'h>(&self, key: &'h str) -> Result<Fields<'h>, FsIdError> {
        let captures = self
            .strict
            .captures(key)
            .or_else(|| self.shape.captures(key))
            .ok_or_else(|| FsIdError::MalformedIdentifier {
                family: self.layout.family,
                fsid: key.to_string(),
            })?;
        Ok(Fields {
            family: self.layout.family,
            captures,
        })
    }
}

/// Captured field strings of one identifier.
pub struct Fields<'h> {
    family: &'static str,
    captures: Captures<'h>,
}

impl Fields<'_> {
    fn raw(&self, kind: FieldKind) -> Result<&str, FsIdError> {
        self.captures
            .name(kind.group())
            .map(|m| m.as_str())
            .ok_or_else(|| FsIdError::MalformedIdentifier {
                family: self.family,
                fsid: self.captures[0].to_string(),
            })
    }

    /// Token field, mapped through its table.
    pub fn token<T: FsIdToken>(&self, kind: FieldKind) -> Result<T, FsIdError> {
        self.raw(kind)?.parse()
    }

    /// Numeric field; a value that does not fit the target type is an invalid coordinate.
    pub fn number<T: std::str::FromStr>(&self, kind: FieldKind) -> Result<T, FsIdError> {
        let raw = self.raw(kind)?;
        raw.parse()
            .map_err(|_| FsIdError::invalid_coordinate(kind.group(), raw))
    }
}

#[cfg(test)]
mod layout_test {
    use super::*;
    use crate::coordinates::CadenceType;

    static SAMPLE: Layout = Layout {
        family: "sample",
        path: &[
            Slot::Literal("x"),
            Slot::token::<CadenceType>(FieldKind::CadenceType),
            Slot::unsigned(FieldKind::Module),
        ],
        name: &[Slot::unsigned(FieldKind::Row), Slot::decimal(FieldKind::PulseDuration)],
    };

    struct Sample;

    impl FieldSource for Sample {
        fn field(&self, kind: FieldKind) -> Option<String> {
            match kind {
                FieldKind::CadenceType => Some(CadenceType::Short.to_string()),
                FieldKind::Module => Some("7".into()),
                FieldKind::Row => Some("12".into()),
                FieldKind::PulseDuration => Some("1.5".into()),
                _ => None,
            }
        }
    }

    #[test]
    fn test_regex_from_layout() {
        assert_eq!(
            SAMPLE.regex(true),
            concat!(
                r"^/x/(?P<cadence_type>(?:long|short))/(?P<module>(?:0|[1-9][0-9]*))",
                r"/(?P<row>(?:0|[1-9][0-9]*)):(?P<pulse_duration>(?:0|[1-9][0-9]*)\.[0-9]+)$"
            )
        );
        assert!(SAMPLE.regex(false).contains("(?P<cadence_type>[^/:]+)"));
    }

    #[test]
    fn test_encode_walks_layout() {
        assert_eq!(SAMPLE.encode(&Sample).unwrap().as_str(), "/x/short/7/12:1.5");
    }

    #[test]
    fn test_fields() {
        let compiled = CompiledLayout::new(&SAMPLE);
        let fields = compiled.fields("/x/long/7/12:3.0").unwrap();
        assert_eq!(
            fields.token::<CadenceType>(FieldKind::CadenceType).unwrap(),
            CadenceType::Long
        );
        assert_eq!(fields.number::<u32>(FieldKind::Module).unwrap(), 7);
        assert_eq!(fields.number::<f32>(FieldKind::PulseDuration).unwrap(), 3.0);

        // shape matches, token does not
        let fields = compiled.fields("/x/medium/7/12:3.0").unwrap();
        assert!(matches!(
            fields.token::<CadenceType>(FieldKind::CadenceType),
            Err(FsIdError::UnrecognizedEnumString { .. })
        ));
        assert!(!compiled.is_match("/x/medium/7/12:3.0"));

        // numeric overflow
        let fields = compiled.fields("/x/long/99999999999/12:3.0").unwrap();
        assert_eq!(
            fields.number::<u32>(FieldKind::Module),
            Err(FsIdError::invalid_coordinate("module", "99999999999"))
        );

        assert!(matches!(
            compiled.fields("/x/long/7/12"),
            Err(FsIdError::MalformedIdentifier { family: "sample", .. })
        ));
        assert!(compiled.fields("/x/long/7/12:3.0/extra").is_err());
    }

    #[test]
    fn test_numbers_must_be_canonical() {
        let compiled = CompiledLayout::new(&SAMPLE);
        assert!(compiled.is_match("/x/long/0/0:0.5"));
        for key in [
            "/x/long/07/12:3.0",
            "/x/long/7/012:3.0",
            "/x/long/7/12:03.0",
            "/x/long/7/12:3",
            "/x/long/7/12:1e3",
            "/x/long/7/12:.5",
        ] {
            assert!(!compiled.is_match(key), "{key}");
            assert!(
                matches!(
                    compiled.fields(key),
                    Err(FsIdError::MalformedIdentifier { .. })
                ),
                "{key}"
            );
        }
    }
}
