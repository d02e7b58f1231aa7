//! One `fetch_*` function per built-in dataset.
//!
//! Each takes an optional data home (see [`get_data_home`]) and whether a
//! missing file may be downloaded.

use crate::dataset::{fetch, Dataset};
use crate::error::Result;
use std::path::Path;

pub use crate::config::{clear_data_home, get_data_home};

/// AdK 1 µs equilibrium trajectory without water.
pub fn fetch_adk_equilibrium(data_home: Option<&Path>, download_if_missing: bool) -> Result<Dataset> {
    fetch("adk_equilibrium", data_home, download_if_missing)
}

/// Ensemble of 200 AdK closed-to-open transitions from DIMS MD.
pub fn fetch_adk_transitions_dims(
    data_home: Option<&Path>,
    download_if_missing: bool,
) -> Result<Dataset> {
    fetch("adk_transitions_DIMS", data_home, download_if_missing)
}

/// Ensemble of 200 AdK closed-to-open transitions from FRODA.
pub fn fetch_adk_transitions_froda(
    data_home: Option<&Path>,
    download_if_missing: bool,
) -> Result<Dataset> {
    fetch("adk_transitions_FRODA", data_home, download_if_missing)
}

/// Three coarse grained vesicle structures, labelled by approximate size.
pub fn fetch_vesicle_lib(data_home: Option<&Path>, download_if_missing: bool) -> Result<Dataset> {
    fetch("vesicle_library", data_home, download_if_missing)
}

pub fn fetch_cg_fiber(data_home: Option<&Path>, download_if_missing: bool) -> Result<Dataset> {
    fetch("CG_fiber", data_home, download_if_missing)
}

pub fn fetch_membrane_peptide(data_home: Option<&Path>, download_if_missing: bool) -> Result<Dataset> {
    fetch("membrane_peptide", data_home, download_if_missing)
}

pub fn fetch_nhaa_equilibrium(data_home: Option<&Path>, download_if_missing: bool) -> Result<Dataset> {
    fetch("nhaa_equilibrium", data_home, download_if_missing)
}

pub fn fetch_peg_1chain(data_home: Option<&Path>, download_if_missing: bool) -> Result<Dataset> {
    fetch("PEG_1chain", data_home, download_if_missing)
}

/// I-FABP with water; also carries a `structure` file.
pub fn fetch_ifabp_water(data_home: Option<&Path>, download_if_missing: bool) -> Result<Dataset> {
    fetch("ifabp_water", data_home, download_if_missing)
}

pub fn fetch_yiip_equilibrium_short(
    data_home: Option<&Path>,
    download_if_missing: bool,
) -> Result<Dataset> {
    fetch("yiip_equilibrium_short", data_home, download_if_missing)
}

pub fn fetch_yiip_equilibrium_long(
    data_home: Option<&Path>,
    download_if_missing: bool,
) -> Result<Dataset> {
    fetch("yiip_equilibrium_long", data_home, download_if_missing)
}
