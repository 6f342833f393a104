use fsid::{
    coordinates::{CadenceType, CollateralType, TargetType},
    factories::{
        cal::{self, PixelTimeSeriesType},
        dr::{self, DrTimeSeriesType},
        dynablack,
        pa,
    },
    parser, FsIdError,
};

#[test]
fn test_foreign_family_is_malformed() {
    let cal_pixel = cal::get_time_series_fsid(
        PixelTimeSeriesType::SocCal,
        TargetType::LongCadence,
        2,
        1,
        50,
        60,
    )
    .unwrap();

    assert!(parser::is_cal_pixel_fsid(&cal_pixel));
    assert!(!parser::is_dr_science_pixel_fsid(&cal_pixel));
    assert!(!parser::is_pa_cosmic_ray_fsid(&cal_pixel));
    assert!(!parser::is_rolling_band_flags_fsid(&cal_pixel));
    assert_eq!(
        parser::parse_dr_science_pixel_fsid(&cal_pixel),
        Err(FsIdError::MalformedIdentifier {
            family: "DrSciencePixel",
            fsid: cal_pixel.to_string(),
        })
    );

    let dr_collateral = dr::get_collateral_pixel_time_series(
        DrTimeSeriesType::Orig,
        CadenceType::Long,
        CollateralType::BlackLevel,
        2,
        1,
        500,
    )
    .unwrap();
    assert!(parser::is_dr_collateral_pixel_fsid(&dr_collateral));
    assert!(!parser::is_cal_collateral_pixel_fsid(&dr_collateral));
    assert!(!parser::is_cal_cosmic_ray_fsid(&dr_collateral));
}

#[test]
fn test_unknown_token_is_unrecognized() {
    assert_eq!(
        parser::parse_cal_pixel_fsid("/cal/pixels/SocCal/xyz/2/1/50:60"),
        Err(FsIdError::UnrecognizedEnumString {
            kind: "target type",
            value: "xyz".into(),
        })
    );
    assert!(matches!(
        parser::parse_cal_collateral_pixel_fsid("/cal/pixels/SocCal/collateral/long/2/1/Black:5"),
        Err(FsIdError::UnrecognizedEnumString { value, .. }) if value == "Black"
    ));
    assert!(!parser::is_cal_pixel_fsid("/cal/pixels/SocCal/xyz/2/1/50:60"));
}

#[test]
fn test_out_of_range_is_invalid_coordinate() {
    assert_eq!(
        parser::parse_cal_pixel_fsid("/cal/pixels/SocCal/lct/5/1/50:60"),
        Err(FsIdError::InvalidCoordinate {
            field: "module",
            value: "5".into(),
        })
    );
    assert_eq!(
        parser::parse_pa_cosmic_ray_fsid("/pa/crs/lct/2/1/99999999999:60"),
        Err(FsIdError::InvalidCoordinate {
            field: "row",
            value: "99999999999".into(),
        })
    );
    assert!(matches!(
        parser::parse_rolling_band_flags_fsid("/dynablack/RollingBandArtifactFlags/2/1/500:0"),
        Err(FsIdError::InvalidCoordinate { field: "duration", .. })
    ));
    assert!(!parser::is_pa_cosmic_ray_fsid("/pa/crs/lct/2/1/1070:60"));
}

#[test]
fn test_boundaries() {
    for (row, column) in [(0, 0), (1069, 1131), (0, 1131), (1069, 0)] {
        let id = pa::get_cosmic_ray_series_fsid(TargetType::Background, 24, 4, row, column)
            .unwrap();
        assert!(parser::is_pa_cosmic_ray_fsid(&id), "{id}");
    }
    assert!(pa::get_cosmic_ray_series_fsid(TargetType::Background, 24, 4, 1070, 0).is_err());
    assert!(pa::get_cosmic_ray_series_fsid(TargetType::Background, 24, 4, 0, 1132).is_err());
    assert!(pa::get_cosmic_ray_series_fsid(TargetType::Background, 1, 1, 0, 0).is_err());
    assert!(pa::get_cosmic_ray_series_fsid(TargetType::Background, 2, 0, 0, 0).is_err());
    assert!(dynablack::get_rolling_band_artifact_flags_fsid(2, 1, 1069, 1).is_ok());
}

#[test]
fn test_garbage_is_never_recognized() {
    for garbage in [
        "",
        "/",
        ":",
        "//",
        "/cal",
        "/cal/pixels/SocCal/lct/2/1/50:60/",
        "/cal/pixels/SocCal/lct/2/1/50:60:70",
        "cal/pixels/SocCal/lct/2/1/50:60",
        "/cal/pixels/SocCal/lct/2/1/-50:60",
        " /cal/pixels/SocCal/lct/2/1/50:60",
    ] {
        assert!(!parser::is_cal_pixel_fsid(garbage), "{garbage:?}");
        assert!(matches!(
            parser::parse_cal_pixel_fsid(garbage),
            Err(FsIdError::MalformedIdentifier { family: "CalPixel", .. })
        ));
        assert!(!parser::is_single_event_statistics_fsid(garbage));
        assert!(!parser::is_rolling_band_flags_fsid(garbage));
    }
}

#[test]
fn test_zero_padded_numbers_are_not_recognized() {
    assert!(parser::is_cal_pixel_fsid("/cal/pixels/SocCal/lct/2/1/50:60"));
    assert!(!parser::is_cal_pixel_fsid("/cal/pixels/SocCal/lct/02/1/050:0060"));
    assert!(matches!(
        parser::parse_cal_pixel_fsid("/cal/pixels/SocCal/lct/02/1/050:0060"),
        Err(FsIdError::MalformedIdentifier { family: "CalPixel", .. })
    ));
    assert!(!parser::is_rolling_band_flags_fsid("/dynablack/RollingBandArtifactFlags/2/1/0500:1"));
    assert!(!parser::is_single_event_statistics_fsid(
        "/dv/Sap/SingleEventStatistics/Normalization/7/888:4.50"
    ));
    assert!(!parser::is_single_event_statistics_fsid(
        "/dv/Sap/SingleEventStatistics/Normalization/7/888:1e16"
    ));
    assert!(parser::is_single_event_statistics_fsid(
        "/dv/Sap/SingleEventStatistics/Normalization/7/888:4.5"
    ));
}
