//! Dataset descriptions (reStructuredText) compiled into the binary.

use crate::error::{Error, Result};

const DESCRIPTIONS: &[(&str, &str)] = &[
    ("adk_equilibrium.rst", include_str!("../../descr/adk_equilibrium.rst")),
    ("adk_transitions_DIMS.rst", include_str!("../../descr/adk_transitions_DIMS.rst")),
    ("adk_transitions_FRODA.rst", include_str!("../../descr/adk_transitions_FRODA.rst")),
    ("vesicle_lib.rst", include_str!("../../descr/vesicle_lib.rst")),
    ("CG_fiber.rst", include_str!("../../descr/CG_fiber.rst")),
    ("membrane_peptide.rst", include_str!("../../descr/membrane_peptide.rst")),
    ("nhaa_equilibrium.rst", include_str!("../../descr/nhaa_equilibrium.rst")),
    ("PEG_1chain.rst", include_str!("../../descr/PEG_1chain.rst")),
    ("ifabp_water.rst", include_str!("../../descr/ifabp_water.rst")),
    ("yiip_equilibrium.rst", include_str!("../../descr/yiip_equilibrium.rst")),
];

pub fn read_description(name: &str) -> Result<&'static str> {
    DESCRIPTIONS
        .iter()
        .find(|(resource, _)| *resource == name)
        .map(|(_, text)| *text)
        .ok_or_else(|| Error::DescriptionNotFound(name.to_string()))
}
