//! Enumerated coordinates shared by several subsystems.
//!
//! Per-subsystem series kinds live next to their factory in [`crate::factories`].

use crate::grammar::token::fsid_token;

fsid_token! {
    /// Sampling interval of a time series.
    pub enum CadenceType: "cadence type" {
        Long => "long",
        Short => "short",
    }
}

fsid_token! {
    /// Kind of target table a pixel belongs to, written with its short name.
    pub enum TargetType: "target type" {
        LongCadence => "lct",
        ShortCadence => "sct",
        Background => "bgp",
        ReferencePixel => "rp",
    }
}

fsid_token! {
    /// Non-science region of the CCD a collateral pixel was read from.
    pub enum CollateralType: "collateral type" {
        /// Black column, addressed by CCD row.
        BlackLevel => "BlackLevel",
        /// Masked smear row, addressed by CCD column.
        MaskedSmear => "MaskedSmear",
        /// Virtual smear row, addressed by CCD column.
        VirtualSmear => "VirtualSmear",
        /// Black pixels of the masked smear rows.
        BlackMasked => "BlackMasked",
        /// Black pixels of the virtual smear rows.
        BlackVirtual => "BlackVirtual",
    }
}

fsid_token! {
    /// Photometry flavour of a target flux.
    pub enum FluxType: "flux type" {
        /// Simple aperture photometry
        Sap => "Sap",
        /// Optimal aperture photometry
        Oap => "Oap",
        /// Difference image analysis
        Dia => "Dia",
    }
}

fsid_token! {
    /// Statistic of the cosmic rays removed from a channel.
    pub enum CosmicRayMetricType: "cosmic ray metric type" {
        HitRate => "HitRate",
        MeanEnergy => "MeanEnergy",
        EnergyVariance => "EnergyVariance",
        EnergySkewness => "EnergySkewness",
        EnergyKurtosis => "EnergyKurtosis",
    }
}

impl CadenceType {
    /// Target table holding the pixels sampled at this cadence.
    pub fn target_type(&self) -> TargetType {
        match self {
            CadenceType::Long => TargetType::LongCadence,
            CadenceType::Short => TargetType::ShortCadence,
        }
    }
}

impl TargetType {
    /// Cadence at which the pixels of this target table are sampled.
    pub fn cadence_type(&self) -> CadenceType {
        match self {
            TargetType::ShortCadence => CadenceType::Short,
            _ => CadenceType::Long,
        }
    }
}

impl FluxType {
    /// Lowercase form used by the `/pdc/{flux}/...` sub-trees, e.g. `sap`.
    pub fn lower_name(&self) -> &'static str {
        match self {
            FluxType::Sap => "sap",
            FluxType::Oap => "oap",
            FluxType::Dia => "dia",
        }
    }
}

#[cfg(test)]
mod kinds_test {
    use super::*;
    use crate::{fsid_errors::FsIdError, grammar::token::assert_token_table};

    #[test]
    fn test_token_tables() {
        assert_token_table::<CadenceType>();
        assert_token_table::<TargetType>();
        assert_token_table::<CollateralType>();
        assert_token_table::<FluxType>();
        assert_token_table::<CosmicRayMetricType>();
    }

    #[test]
    fn test_wire_strings() {
        assert_eq!(CadenceType::Long.as_str(), "long");
        assert_eq!(TargetType::LongCadence.as_str(), "lct");
        assert_eq!(TargetType::Background.to_string(), "bgp");
        assert_eq!(CollateralType::MaskedSmear.as_str(), "MaskedSmear");
        assert_eq!(FluxType::Sap.as_str(), "Sap");
        assert_eq!(FluxType::Sap.lower_name(), "sap");
    }

    #[test]
    fn test_unknown_target_type() {
        assert_eq!(
            "xyz".parse::<TargetType>(),
            Err(FsIdError::UnrecognizedEnumString {
                kind: "target type",
                value: "xyz".into()
            })
        );
    }

    #[test]
    fn test_cadence_target_pairing() {
        for cadence in CadenceType::ALL {
            assert_eq!(cadence.target_type().cadence_type(), *cadence);
        }
        assert_eq!(TargetType::Background.cadence_type(), CadenceType::Long);
    }
}
