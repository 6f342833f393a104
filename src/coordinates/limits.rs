//! # Focal-plane limits
//!
//! This module defines [`FocalPlaneLimits`], the set of ranges every detector coordinate is
//! checked against, and its validating builder.
//!
//! ## Overview
//!
//! The physical layout (modules, outputs, accumulation memory size) is fixed by the
//! hardware, but the collateral offset ranges are calibration constants: which rows of the
//! black columns and which columns of the smear rows are actually read out depends on the
//! collateral readout configuration. [`FocalPlaneLimits::default`] reproduces the Kepler
//! focal plane described in [`crate::constants`]; a deployment with calibrated ranges can
//! build its own instance with [`FocalPlaneLimits::builder`] or load one through `serde`.
//!
//! | collateral type | default range (inclusive)           |
//! |-----------------|-------------------------------------|
//! | BlackLevel      | `0 ..= CCD_ROWS - 1`                |
//! | MaskedSmear     | `0 ..= CCD_COLUMNS - 1`             |
//! | VirtualSmear    | `0 ..= CCD_COLUMNS - 1`             |
//! | BlackMasked     | `0 ..= N_MASKED_SMEAR - 1`          |
//! | BlackVirtual    | `0 ..= CCD_COLUMNS - 1`             |
//!
//! ## See also
//! ------------
//! * [`crate::coordinates::validate_pixel`] – Free function checking against the default limits.
//! * [`crate::coordinates::validate_collateral`] – Same, for collateral offsets.

use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        CcdColumn, CcdModule, CcdOutput, CcdRow, CCD_COLUMNS, CCD_ROWS, MODULES, N_MASKED_SMEAR,
        OUTPUTS_PER_MODULE,
    },
    coordinates::kinds::{CollateralType, TargetType},
    fsid_errors::FsIdError,
};

/// Inclusive range of a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinateRange {
    pub min: u32,
    pub max: u32,
}

impl CoordinateRange {
    pub const fn new(min: u32, max: u32) -> Self {
        CoordinateRange { min, max }
    }

    /// Range `0 ..= count - 1`, for a count of pixels.
    pub const fn zero_to(count: u32) -> Self {
        CoordinateRange {
            min: 0,
            max: count.saturating_sub(1),
        }
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Valid ranges of module, output, row, column and collateral offsets.
///
/// Defaults
/// -----------------
/// * `modules`: the 21 science modules `2, 3, 4, 6..=20, 22, 23, 24`
/// * `outputs`: `1 ..= 4`
/// * `rows`: `0 ..= 1069`, `columns`: `0 ..= 1131`
/// * collateral ranges: see the module documentation
///
/// Notes & Validation
/// -----------------
/// * `modules` must be non-empty, `outputs.min >= 1`.
/// * every range must satisfy `min <= max`.
/// * black-level offsets are CCD rows and must fit in `rows`; the other collateral offsets
///   are CCD columns (or masked-smear rows for `BlackMasked`) and must fit in `columns`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocalPlaneLimits {
    pub modules: Vec<CcdModule>,
    pub outputs: CoordinateRange,
    pub rows: CoordinateRange,
    pub columns: CoordinateRange,

    // --- Collateral offsets (calibration constants) ---
    pub black_level: CoordinateRange,
    pub masked_smear: CoordinateRange,
    pub virtual_smear: CoordinateRange,
    pub black_masked: CoordinateRange,
    pub black_virtual: CoordinateRange,
}

impl Default for FocalPlaneLimits {
    fn default() -> Self {
        FocalPlaneLimits {
            modules: MODULES.to_vec(),
            outputs: CoordinateRange::new(1, OUTPUTS_PER_MODULE),
            rows: CoordinateRange::zero_to(CCD_ROWS),
            columns: CoordinateRange::zero_to(CCD_COLUMNS),

            black_level: CoordinateRange::zero_to(CCD_ROWS),
            masked_smear: CoordinateRange::zero_to(CCD_COLUMNS),
            virtual_smear: CoordinateRange::zero_to(CCD_COLUMNS),
            black_masked: CoordinateRange::zero_to(N_MASKED_SMEAR),
            black_virtual: CoordinateRange::zero_to(CCD_COLUMNS),
        }
    }
}

impl FocalPlaneLimits {
    /// Construct the Kepler focal-plane limits.
    ///
    /// This is equivalent to calling [`FocalPlaneLimits::default()`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new [`FocalPlaneLimitsBuilder`] starting from the default limits.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsid::coordinates::{CoordinateRange, FocalPlaneLimits};
    ///
    /// let limits = FocalPlaneLimits::builder()
    ///     .black_level(CoordinateRange::new(0, 1069))
    ///     .masked_smear(CoordinateRange::new(12, 1111))
    ///     .build()
    ///     .unwrap();
    /// assert!(limits.validate_module_output(2, 1).is_ok());
    /// ```
    pub fn builder() -> FocalPlaneLimitsBuilder {
        FocalPlaneLimitsBuilder::new()
    }

    /// Valid offset range for a collateral type.
    pub fn collateral_range(&self, collateral_type: CollateralType) -> CoordinateRange {
        match collateral_type {
            CollateralType::BlackLevel => self.black_level,
            CollateralType::MaskedSmear => self.masked_smear,
            CollateralType::VirtualSmear => self.virtual_smear,
            CollateralType::BlackMasked => self.black_masked,
            CollateralType::BlackVirtual => self.black_virtual,
        }
    }

    /// Check a module/output pair.
    ///
    /// Return
    /// ----------
    /// * `Ok(())`, or [`FsIdError::InvalidCoordinate`] naming `module` or `output`.
    pub fn validate_module_output(
        &self,
        module: CcdModule,
        output: CcdOutput,
    ) -> Result<(), FsIdError> {
        if !self.modules.contains(&module) {
            return Err(FsIdError::invalid_coordinate("module", module));
        }
        if !self.outputs.contains(output) {
            return Err(FsIdError::invalid_coordinate("output", output));
        }
        Ok(())
    }

    /// Check the coordinates of a target, background or reference pixel.
    ///
    /// Arguments
    /// -----------------
    /// * `target_type`: Target table the pixel belongs to. Every target type shares the
    ///   same physical ranges; the argument is part of the checked tuple.
    /// * `module`, `output`: CCD channel.
    /// * `row`, `column`: Zero-based position in accumulation memory.
    ///
    /// Return
    /// ----------
    /// * `Ok(())`, or [`FsIdError::InvalidCoordinate`] naming the first offending field.
    pub fn validate_pixel(
        &self,
        _target_type: TargetType,
        module: CcdModule,
        output: CcdOutput,
        row: CcdRow,
        column: CcdColumn,
    ) -> Result<(), FsIdError> {
        self.validate_module_output(module, output)?;
        if !self.rows.contains(row) {
            return Err(FsIdError::invalid_coordinate("row", row));
        }
        if !self.columns.contains(column) {
            return Err(FsIdError::invalid_coordinate("column", column));
        }
        Ok(())
    }

    /// Check the coordinates of a collateral pixel.
    ///
    /// The valid `offset` range depends on `collateral_type`, see [`Self::collateral_range`].
    pub fn validate_collateral(
        &self,
        collateral_type: CollateralType,
        module: CcdModule,
        output: CcdOutput,
        offset: u32,
    ) -> Result<(), FsIdError> {
        self.validate_module_output(module, output)?;
        if !self.collateral_range(collateral_type).contains(offset) {
            return Err(FsIdError::invalid_coordinate("offset", offset));
        }
        Ok(())
    }

    /// Check a dynamic-black row, which addresses a row of accumulation memory.
    pub fn validate_row(
        &self,
        module: CcdModule,
        output: CcdOutput,
        row: CcdRow,
    ) -> Result<(), FsIdError> {
        self.validate_module_output(module, output)?;
        if !self.rows.contains(row) {
            return Err(FsIdError::invalid_coordinate("row", row));
        }
        Ok(())
    }
}

/// Builder for [`FocalPlaneLimits`], with validation.
#[derive(Debug, Clone)]
pub struct FocalPlaneLimitsBuilder {
    limits: FocalPlaneLimits,
}

impl Default for FocalPlaneLimitsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FocalPlaneLimitsBuilder {
    /// Create a new builder initialized with the default limits.
    pub fn new() -> Self {
        Self {
            limits: FocalPlaneLimits::default(),
        }
    }

    pub fn modules(mut self, v: Vec<CcdModule>) -> Self {
        self.limits.modules = v;
        self
    }
    pub fn outputs(mut self, v: CoordinateRange) -> Self {
        self.limits.outputs = v;
        self
    }
    pub fn rows(mut self, v: CoordinateRange) -> Self {
        self.limits.rows = v;
        self
    }
    pub fn columns(mut self, v: CoordinateRange) -> Self {
        self.limits.columns = v;
        self
    }

    // --- Collateral offsets ---
    pub fn black_level(mut self, v: CoordinateRange) -> Self {
        self.limits.black_level = v;
        self
    }
    pub fn masked_smear(mut self, v: CoordinateRange) -> Self {
        self.limits.masked_smear = v;
        self
    }
    pub fn virtual_smear(mut self, v: CoordinateRange) -> Self {
        self.limits.virtual_smear = v;
        self
    }
    pub fn black_masked(mut self, v: CoordinateRange) -> Self {
        self.limits.black_masked = v;
        self
    }
    pub fn black_virtual(mut self, v: CoordinateRange) -> Self {
        self.limits.black_virtual = v;
        self
    }

    /// Finalize the builder and produce a [`FocalPlaneLimits`] instance.
    ///
    /// Validation rules
    /// -----------------
    /// * `modules` is non-empty.
    /// * `outputs.min >= 1`.
    /// * every range is ordered (`min <= max`).
    /// * `black_level` lies inside `rows`; the smear, black-masked and black-virtual ranges
    ///   lie inside `columns`.
    ///
    /// Returns
    /// -----------------
    /// * `Ok(FocalPlaneLimits)` if all ranges are consistent.
    /// * `Err(FsIdError::InvalidLimits)` naming the first inconsistent range otherwise.
    pub fn build(self) -> Result<FocalPlaneLimits, FsIdError> {
        self.limits.check()?;
        Ok(self.limits)
    }
}

impl FocalPlaneLimits {
    /// Consistency check shared by the builder and deserialized limits.
    pub fn check(&self) -> Result<(), FsIdError> {
        if self.modules.is_empty() {
            return Err(FsIdError::InvalidLimits("no module is enabled".into()));
        }
        if self.outputs.min == 0 {
            return Err(FsIdError::InvalidLimits("outputs are numbered from 1".into()));
        }

        let named = [
            ("outputs", self.outputs),
            ("rows", self.rows),
            ("columns", self.columns),
            ("black_level", self.black_level),
            ("masked_smear", self.masked_smear),
            ("virtual_smear", self.virtual_smear),
            ("black_masked", self.black_masked),
            ("black_virtual", self.black_virtual),
        ];
        if let Some((name, range)) = named.iter().find(|(_, r)| r.min > r.max) {
            return Err(FsIdError::InvalidLimits(format!(
                "{name} range is reversed ({} > {})",
                range.min, range.max
            )));
        }

        let inside = |inner: CoordinateRange, outer: CoordinateRange| {
            inner.min >= outer.min && inner.max <= outer.max
        };
        if !inside(self.black_level, self.rows) {
            return Err(FsIdError::InvalidLimits(
                "black_level offsets exceed the CCD rows".into(),
            ));
        }
        for (name, range) in [
            ("masked_smear", self.masked_smear),
            ("virtual_smear", self.virtual_smear),
            ("black_masked", self.black_masked),
            ("black_virtual", self.black_virtual),
        ] {
            if !inside(range, self.columns) {
                return Err(FsIdError::InvalidLimits(format!(
                    "{name} offsets exceed the CCD columns"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod limits_test {
    use super::*;

    #[test]
    fn test_default_ranges() {
        let limits = FocalPlaneLimits::default();
        assert_eq!(limits.modules.len(), 21);
        assert_eq!(limits.rows, CoordinateRange::new(0, 1069));
        assert_eq!(limits.columns, CoordinateRange::new(0, 1131));
        assert_eq!(
            limits.collateral_range(CollateralType::BlackMasked),
            CoordinateRange::new(0, 19)
        );
        assert!(limits.check().is_ok());
    }

    #[test]
    fn test_validate_pixel_boundaries() {
        let limits = FocalPlaneLimits::default();
        let t = TargetType::LongCadence;

        assert!(limits.validate_pixel(t, 2, 1, 0, 0).is_ok());
        assert!(limits.validate_pixel(t, 24, 4, 1069, 1131).is_ok());

        assert_eq!(
            limits.validate_pixel(t, 1, 1, 0, 0),
            Err(FsIdError::invalid_coordinate("module", 1))
        );
        assert_eq!(
            limits.validate_pixel(t, 2, 5, 0, 0),
            Err(FsIdError::invalid_coordinate("output", 5))
        );
        assert_eq!(
            limits.validate_pixel(t, 2, 0, 0, 0),
            Err(FsIdError::invalid_coordinate("output", 0))
        );
        assert_eq!(
            limits.validate_pixel(t, 2, 1, 1070, 0),
            Err(FsIdError::invalid_coordinate("row", 1070))
        );
        assert_eq!(
            limits.validate_pixel(t, 2, 1, 0, 1132),
            Err(FsIdError::invalid_coordinate("column", 1132))
        );
        // corner spots hold guidance sensors
        for corner in [1, 5, 21, 25] {
            assert!(limits.validate_module_output(corner, 1).is_err());
        }
    }

    #[test]
    fn test_validate_collateral_depends_on_type() {
        let limits = FocalPlaneLimits::default();

        assert!(limits
            .validate_collateral(CollateralType::BlackLevel, 2, 1, 1069)
            .is_ok());
        assert!(limits
            .validate_collateral(CollateralType::BlackLevel, 2, 1, 1070)
            .is_err());
        assert!(limits
            .validate_collateral(CollateralType::MaskedSmear, 2, 1, 1131)
            .is_ok());
        assert!(limits
            .validate_collateral(CollateralType::BlackMasked, 2, 1, 19)
            .is_ok());
        assert_eq!(
            limits.validate_collateral(CollateralType::BlackMasked, 2, 1, 20),
            Err(FsIdError::invalid_coordinate("offset", 20))
        );
    }

    #[test]
    fn test_builder_overrides_calibration_ranges() {
        let limits = FocalPlaneLimits::builder()
            .masked_smear(CoordinateRange::new(12, 1111))
            .build()
            .unwrap();
        assert!(limits
            .validate_collateral(CollateralType::MaskedSmear, 2, 1, 11)
            .is_err());
        assert!(limits
            .validate_collateral(CollateralType::MaskedSmear, 2, 1, 12)
            .is_ok());
        // other ranges keep their defaults
        assert!(limits
            .validate_collateral(CollateralType::VirtualSmear, 2, 1, 11)
            .is_ok());
    }

    #[test]
    fn test_builder_rejects_inconsistent_limits() {
        assert!(matches!(
            FocalPlaneLimits::builder().modules(vec![]).build(),
            Err(FsIdError::InvalidLimits(_))
        ));
        assert!(FocalPlaneLimits::builder()
            .outputs(CoordinateRange::new(0, 4))
            .build()
            .is_err());
        assert!(FocalPlaneLimits::builder()
            .black_masked(CoordinateRange::new(10, 5))
            .build()
            .is_err());
        assert!(FocalPlaneLimits::builder()
            .black_level(CoordinateRange::new(0, 2000))
            .build()
            .is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let limits = FocalPlaneLimits::builder()
            .black_level(CoordinateRange::new(20, 1043))
            .build()
            .unwrap();
        let json = serde_json::to_string(&limits).unwrap();
        let back: FocalPlaneLimits = serde_json::from_str(&json).unwrap();
        assert_eq!(back, limits);
        assert!(back.check().is_ok());
    }
}
