//! # Identifier parser
//!
//! Regex-driven inverse of the pixel, collateral, cosmic-ray and row-addressed factories.
//!
//! ## Overview
//!
//! Each parseable family is a coordinate struct implementing [`FsIdFamily`], backed by one
//! static [`Layout`](layout::Layout). The factory encodes through the layout and the parser
//! decodes through regexes generated from it, so the field order exists in one place.
//!
//! Parsing a key:
//!
//! 1. matches the family regex anchor to anchor,
//! 2. maps every token field through its token table,
//! 3. re-validates the recovered coordinates against the focal-plane limits,
//! 4. re-encodes them and requires the input to be exactly that canonical key,
//! 5. returns the coordinates.
//!
//! Step 4 rejects keys the factories never write, such as `050` for row 50 or `4.50` for a
//! 4.5 hour pulse, so one coordinate set has one key.
//!
//! Failures are told apart:
//!
//! | input                                             | error                                            |
//! |---------------------------------------------------|--------------------------------------------------|
//! | not the family's shape (foreign family, garbage)  | [`FsIdError::MalformedIdentifier`]               |
//! | family shape, not the canonical spelling          | [`FsIdError::MalformedIdentifier`]               |
//! | family shape, unknown token                       | [`FsIdError::UnrecognizedEnumString`]            |
//! | family shape, out-of-range number                 | [`FsIdError::InvalidCoordinate`]                 |
//!
//! `is_*` companions return `true` only when the full parse succeeds, and never fail.
//! Regexes are compiled on first use and shared read-only by every thread afterwards.
//!
//! ## See also
//! ------------
//! * [`crate::factories`] – Encoders for every family.
//! * [`layout`] – Slot tables and regex generation.

pub mod layout;

use crate::{
    factories::{
        cal::{CalCollateralPixel, CalCosmicRay, CalPixel},
        dr::{DrCollateralPixel, DrSciencePixel},
        dv::DvSingleEventStatistics,
        dynablack::RollingBandFlags,
        pa::PaCosmicRay,
    },
    fs_id::FsId,
    fsid_errors::FsIdError,
};

use layout::{CompiledLayout, FieldSource, Fields};

/// A family of identifiers with a declarative layout and typed coordinates.
pub trait FsIdFamily: FieldSource + Sized {
    /// The family's layout and compiled regexes.
    fn compiled() -> &'static CompiledLayout;

    /// Rebuild the coordinates from captured fields.
    fn from_fields(fields: &Fields<'_>) -> Result<Self, FsIdError>;

    /// Range-check the coordinates.
    fn validate(&self) -> Result<(), FsIdError>;

    /// Validate and encode the coordinates.
    fn to_fsid(&self) -> Result<FsId, FsIdError> {
        self.validate()?;
        Self::compiled().layout().encode(self)
    }
}

/// Decode `fsid` as a member of family `F`.
///
/// Arguments
/// -----------------
/// * `fsid`: An [`FsId`] or its canonical string.
///
/// Return
/// ----------
/// * The validated coordinates, or the error described in the module table.
pub fn parse<F: FsIdFamily>(fsid: impl AsRef<str>) -> Result<F, FsIdError> {
    let key = fsid.as_ref();
    let fields = F::compiled().fields(key)?;
    let coordinates = F::from_fields(&fields)?;
    let canonical = coordinates.to_fsid()?;
    if canonical.as_str() != key {
        return Err(FsIdError::MalformedIdentifier {
            family: F::compiled().layout().family,
            fsid: key.to_string(),
        });
    }
    Ok(coordinates)
}

/// True if `fsid` fully parses as a member of family `F`.
pub fn is_recognized<F: FsIdFamily>(fsid: impl AsRef<str>) -> bool {
    let key = fsid.as_ref();
    F::compiled().is_match(key) && parse::<F>(key).is_ok()
}

/// Parse a calibrated target pixel id (`/cal/pixels/{type}/{target}/{m}/{o}/{row}:{col}`).
pub fn parse_cal_pixel_fsid(fsid: impl AsRef<str>) -> Result<CalPixel, FsIdError> {
    parse(fsid)
}

pub fn is_cal_pixel_fsid(fsid: impl AsRef<str>) -> bool {
    is_recognized::<CalPixel>(fsid)
}

/// Parse a calibrated collateral pixel id.
pub fn parse_cal_collateral_pixel_fsid(
    fsid: impl AsRef<str>,
) -> Result<CalCollateralPixel, FsIdError> {
    parse(fsid)
}

pub fn is_cal_collateral_pixel_fsid(fsid: impl AsRef<str>) -> bool {
    is_recognized::<CalCollateralPixel>(fsid)
}

/// Parse a calibration cosmic-ray series id (`/cal/collateral/cr/...`).
pub fn parse_cal_cosmic_ray_fsid(fsid: impl AsRef<str>) -> Result<CalCosmicRay, FsIdError> {
    parse(fsid)
}

pub fn is_cal_cosmic_ray_fsid(fsid: impl AsRef<str>) -> bool {
    is_recognized::<CalCosmicRay>(fsid)
}

/// Parse a raw science pixel id (`/dr/pixel/sci/...`).
pub fn parse_dr_science_pixel_fsid(fsid: impl AsRef<str>) -> Result<DrSciencePixel, FsIdError> {
    parse(fsid)
}

pub fn is_dr_science_pixel_fsid(fsid: impl AsRef<str>) -> bool {
    is_recognized::<DrSciencePixel>(fsid)
}

/// Parse a raw collateral pixel id (`/dr/pixel/col/...`).
pub fn parse_dr_collateral_pixel_fsid(
    fsid: impl AsRef<str>,
) -> Result<DrCollateralPixel, FsIdError> {
    parse(fsid)
}

pub fn is_dr_collateral_pixel_fsid(fsid: impl AsRef<str>) -> bool {
    is_recognized::<DrCollateralPixel>(fsid)
}

/// Parse a photometric cosmic-ray series id (`/pa/crs/...`).
pub fn parse_pa_cosmic_ray_fsid(fsid: impl AsRef<str>) -> Result<PaCosmicRay, FsIdError> {
    parse(fsid)
}

pub fn is_pa_cosmic_ray_fsid(fsid: impl AsRef<str>) -> bool {
    is_recognized::<PaCosmicRay>(fsid)
}

/// Parse a rolling-band artifact flags id (`/dynablack/RollingBandArtifactFlags/...`).
pub fn parse_rolling_band_flags_fsid(
    fsid: impl AsRef<str>,
) -> Result<RollingBandFlags, FsIdError> {
    parse(fsid)
}

pub fn is_rolling_band_flags_fsid(fsid: impl AsRef<str>) -> bool {
    is_recognized::<RollingBandFlags>(fsid)
}

/// Parse a single event statistics id (`/dv/{flux}/SingleEventStatistics/...`).
pub fn parse_single_event_statistics_fsid(
    fsid: impl AsRef<str>,
) -> Result<DvSingleEventStatistics, FsIdError> {
    parse(fsid)
}

pub fn is_single_event_statistics_fsid(fsid: impl AsRef<str>) -> bool {
    is_recognized::<DvSingleEventStatistics>(fsid)
}
