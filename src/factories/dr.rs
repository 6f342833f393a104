//! Data receipt (`/dr`) identifiers: raw science and collateral pixels as received from
//! the spacecraft.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{CcdColumn, CcdModule, CcdOutput, CcdRow},
    coordinates::{validate_collateral, validate_pixel, CadenceType, CollateralType, TargetType},
    fs_id::FsId,
    fsid_errors::FsIdError,
    grammar::token::fsid_token,
    parser::{
        layout::{CompiledLayout, FieldKind, FieldSource, Fields, Layout, Slot},
        FsIdFamily,
    },
};

fsid_token! {
    /// Raw pixel series kind.
    pub enum DrTimeSeriesType: "data receipt time series type" {
        /// Original pixel values, as downlinked.
        Orig => "Orig",
    }
}

static DR_SCIENCE_LAYOUT: Layout = Layout {
    family: "DrSciencePixel",
    path: &[
        Slot::Literal("dr"),
        Slot::Literal("pixel"),
        Slot::Literal("sci"),
        Slot::token::<DrTimeSeriesType>(FieldKind::SeriesType),
        Slot::token::<TargetType>(FieldKind::TargetType),
        Slot::unsigned(FieldKind::Module),
        Slot::unsigned(FieldKind::Output),
    ],
    name: &[Slot::unsigned(FieldKind::Row), Slot::unsigned(FieldKind::Column)],
};

static DR_COLLATERAL_LAYOUT: Layout = Layout {
    family: "DrCollateralPixel",
    path: &[
        Slot::Literal("dr"),
        Slot::Literal("pixel"),
        Slot::Literal("col"),
        Slot::token::<DrTimeSeriesType>(FieldKind::SeriesType),
        Slot::token::<CadenceType>(FieldKind::CadenceType),
    ],
    name: &[
        Slot::token::<CollateralType>(FieldKind::CollateralType),
        Slot::unsigned(FieldKind::Module),
        Slot::unsigned(FieldKind::Output),
        Slot::unsigned(FieldKind::Offset),
    ],
};

/// Coordinates of a raw science pixel series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DrSciencePixel {
    pub series_type: DrTimeSeriesType,
    pub target_type: TargetType,
    pub module: CcdModule,
    pub output: CcdOutput,
    pub row: CcdRow,
    pub column: CcdColumn,
}

impl FieldSource for DrSciencePixel {
    fn field(&self, kind: FieldKind) -> Option<String> {
        Some(match kind {
            FieldKind::SeriesType => self.series_type.to_string(),
            FieldKind::TargetType => self.target_type.to_string(),
            FieldKind::Module => self.module.to_string(),
            FieldKind::Output => self.output.to_string(),
            FieldKind::Row => self.row.to_string(),
            FieldKind::Column => self.column.to_string(),
            _ => return None,
        })
    }
}

impl FsIdFamily for DrSciencePixel {
    fn compiled() -> &'static CompiledLayout {
        static COMPILED: Lazy<CompiledLayout> =
            Lazy::new(|| CompiledLayout::new(&DR_SCIENCE_LAYOUT));
        &COMPILED
    }

    fn from_fields(fields: &Fields<'_>) -> Result<Self, FsIdError> {
        Ok(DrSciencePixel {
            series_type: fields.token(FieldKind::SeriesType)?,
            target_type: fields.token(FieldKind::TargetType)?,
            module: fields.number(FieldKind::Module)?,
            output: fields.number(FieldKind::Output)?,
            row: fields.number(FieldKind::Row)?,
            column: fields.number(FieldKind::Column)?,
        })
    }

    fn validate(&self) -> Result<(), FsIdError> {
        validate_pixel(
            self.target_type,
            self.module,
            self.output,
            self.row,
            self.column,
        )
    }
}

/// Coordinates of a raw collateral pixel series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DrCollateralPixel {
    pub series_type: DrTimeSeriesType,
    pub cadence_type: CadenceType,
    pub collateral_type: CollateralType,
    pub module: CcdModule,
    pub output: CcdOutput,
    pub offset: u32,
}

impl FieldSource for DrCollateralPixel {
    fn field(&self, kind: FieldKind) -> Option<String> {
        Some(match kind {
            FieldKind::SeriesType => self.series_type.to_string(),
            FieldKind::CadenceType => self.cadence_type.to_string(),
            FieldKind::CollateralType => self.collateral_type.to_string(),
            FieldKind::Module => self.module.to_string(),
            FieldKind::Output => self.output.to_string(),
            FieldKind::Offset => self.offset.to_string(),
            _ => return None,
        })
    }
}

impl FsIdFamily for DrCollateralPixel {
    fn compiled() -> &'static CompiledLayout {
        static COMPILED: Lazy<CompiledLayout> =
            Lazy::new(|| CompiledLayout::new(&DR_COLLATERAL_LAYOUT));
        &COMPILED
    }

    fn from_fields(fields: &Fields<'_>) -> Result<Self, FsIdError> {
        Ok(DrCollateralPixel {
            series_type: fields.token(FieldKind::SeriesType)?,
            cadence_type: fields.token(FieldKind::CadenceType)?,
            collateral_type: fields.token(FieldKind::CollateralType)?,
            module: fields.number(FieldKind::Module)?,
            output: fields.number(FieldKind::Output)?,
            offset: fields.number(FieldKind::Offset)?,
        })
    }

    fn validate(&self) -> Result<(), FsIdError> {
        validate_collateral(self.collateral_type, self.module, self.output, self.offset)
    }
}

/// Identifier of a raw science pixel series.
///
/// Return
/// ----------
/// * `/dr/pixel/sci/{type}/{target}/{module}/{output}/{row}:{column}`.
pub fn get_science_pixel_time_series(
    series_type: DrTimeSeriesType,
    target_type: TargetType,
    module: CcdModule,
    output: CcdOutput,
    row: CcdRow,
    column: CcdColumn,
) -> Result<FsId, FsIdError> {
    DrSciencePixel {
        series_type,
        target_type,
        module,
        output,
        row,
        column,
    }
    .to_fsid()
}

/// Identifier of a raw collateral pixel series.
///
/// Unlike calibration, data receipt keeps the channel in the name:
/// `/dr/pixel/col/{type}/{cadence}/{collateral}:{module}:{output}:{offset}`.
pub fn get_collateral_pixel_time_series(
    series_type: DrTimeSeriesType,
    cadence_type: CadenceType,
    collateral_type: CollateralType,
    module: CcdModule,
    output: CcdOutput,
    offset: u32,
) -> Result<FsId, FsIdError> {
    DrCollateralPixel {
        series_type,
        cadence_type,
        collateral_type,
        module,
        output,
        offset,
    }
    .to_fsid()
}

#[cfg(test)]
mod dr_test {
    use super::*;

    #[test]
    fn test_science_pixel() {
        let id = get_science_pixel_time_series(
            DrTimeSeriesType::Orig,
            TargetType::LongCadence,
            2,
            1,
            50,
            60,
        )
        .unwrap();
        assert_eq!(id.as_str(), "/dr/pixel/sci/Orig/lct/2/1/50:60");
    }

    #[test]
    fn test_collateral_pixel() {
        let id = get_collateral_pixel_time_series(
            DrTimeSeriesType::Orig,
            CadenceType::Long,
            CollateralType::MaskedSmear,
            2,
            1,
            100,
        )
        .unwrap();
        assert_eq!(id.as_str(), "/dr/pixel/col/Orig/long/MaskedSmear:2:1:100");
        assert_eq!(id.path(), "/dr/pixel/col/Orig/long");

        assert_eq!(
            get_collateral_pixel_time_series(
                DrTimeSeriesType::Orig,
                CadenceType::Short,
                CollateralType::BlackLevel,
                2,
                1,
                1070,
            ),
            Err(FsIdError::invalid_coordinate("offset", 1070))
        );
    }
}
