//! # Identifier factories
//!
//! One stateless namespace per producing pipeline module. Every factory takes a typed
//! coordinate tuple, validates it, and returns the [`FsId`](crate::fs_id::FsId) the module
//! writes its output under.
//!
//! ## Overview
//!
//! | module        | prefix        | outputs                                              |
//! |---------------|---------------|------------------------------------------------------|
//! | [`cal`]       | `/cal`        | calibrated pixels, collateral, cosmic rays, metrics  |
//! | [`dr`]        | `/dr`         | raw science and collateral pixels                    |
//! | [`pa`]        | `/pa`         | photometry, centroids, metrics, cosmic rays, blobs   |
//! | [`pdc`]       | `/pdc`        | corrected flux, outliers, goodness metrics           |
//! | [`tps`]       | `/tps`        | CDPP and deemphasis series per trial pulse           |
//! | [`dv`]        | `/dv`         | per-planet validation series                         |
//! | [`fpg`]       | `/fpg`        | focal-plane geometry blobs                           |
//! | [`prf`]       | `/prf`        | pixel response function blobs                        |
//! | [`pdq`]       | `/pdq`        | photometer data quality metrics                      |
//! | [`ppa`]       | `/ppa`        | performance assessment trends                        |
//! | [`dynablack`] | `/dynablack`  | rolling-band artifacts and dynamic black blobs       |
//! | [`mr`]        | `/mr`         | generic reports                                      |
//!
//! Two shapes recur. Per-pixel ids put the channel in the path and the pixel in the name
//! (`.../{module}/{output}/{row}:{column}`). Per-target ids put the Kepler ID, and the
//! planet number or trial pulse when there is one, in the name.
//!
//! Families that must be decoded again are declared with a
//! [`Layout`](crate::parser::layout::Layout) and encode through it; the rest compose their
//! segments directly with [`compose`](crate::grammar::compose).
//!
//! ## See also
//! ------------
//! * [`crate::parser`] – Decoding of the parseable families.
//! * [`crate::coordinates`] – Range checks applied before encoding.

pub mod cal;
pub mod dr;
pub mod dv;
pub mod dynablack;
pub mod fpg;
pub mod mr;
pub mod pa;
pub mod pdc;
pub mod pdq;
pub mod ppa;
pub mod prf;
pub mod tps;
