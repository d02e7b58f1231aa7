//! Definitions of all datasets hosted on figshare.
//!
//! Adding a dataset means writing one definition function and listing it in
//! [`all`].

use crate::dataset::registry::{
    ArchiveContents, DatasetMetadata, MemberSelection, Members, RemoteFileMetadata,
};

pub fn all() -> Vec<DatasetMetadata> {
    vec![
        adk_equilibrium(),
        adk_transitions_dims(),
        adk_transitions_froda(),
        vesicle_library(),
        cg_fiber(),
        membrane_peptide(),
        nhaa_equilibrium(),
        peg_1chain(),
        ifabp_water(),
        yiip_equilibrium_short(),
        yiip_equilibrium_long(),
    ]
}

// The zip served by figshare for this article is what gets verified; the
// member names below are what it unpacks to.
fn adk_equilibrium() -> DatasetMetadata {
    DatasetMetadata::archive(
        "adk_equilibrium",
        "adk_equilibrium.rst",
        RemoteFileMetadata::new(
            "adk_equilibrium.zip",
            "https://ndownloader.figshare.com/articles/5108170/versions/1",
            "03c0cb53ec743680a3feecfedd7acbd38e66d6a87e09de33a83271bb9e6c3e95",
        ),
        ArchiveContents {
            files: vec![
                ("topology".to_string(), "adk4AKE.psf".to_string()),
                (
                    "trajectory".to_string(),
                    "1ake_007-nowater-core-dt240ps.dcd".to_string(),
                ),
            ],
            members: None,
        },
    )
}

fn adk_transitions(
    name: &str,
    description: &str,
    archive: RemoteFileMetadata,
    topology: &str,
    trajectories: &str,
) -> DatasetMetadata {
    DatasetMetadata::archive(
        name,
        description,
        archive,
        ArchiveContents {
            files: vec![("topology".to_string(), topology.to_string())],
            members: Some(Members {
                role: "trajectories".to_string(),
                selection: MemberSelection::Glob(trajectories.to_string()),
                expected: 200,
                labels: Vec::new(),
            }),
        },
    )
}

fn adk_transitions_dims() -> DatasetMetadata {
    adk_transitions(
        "adk_transitions_DIMS",
        "adk_transitions_DIMS.rst",
        RemoteFileMetadata::new(
            "DIMS.tar.gz",
            "https://ndownloader.figshare.com/files/13182490",
            "81dfd247da7084bc7f47889c098069978b61f8f8b4f7706841266d284bfd3b55",
        ),
        "DIMS/topologies/adk4ake.psf",
        "DIMS/trajectories/dims*_fit-core.dcd",
    )
}

fn adk_transitions_froda() -> DatasetMetadata {
    adk_transitions(
        "adk_transitions_FRODA",
        "adk_transitions_FRODA.rst",
        RemoteFileMetadata::new(
            "FRODA.tar.gz",
            "https://ndownloader.figshare.com/files/13182493",
            "fc2c90b9819fd07720e7effada033d4045663919ba7d2c8bd84f548dfbeee73c",
        ),
        "FRODA/topologies/1ake.pdb",
        "FRODA/trajectories/pathway*_fit-core.dcd",
    )
}

fn vesicle_library() -> DatasetMetadata {
    DatasetMetadata::archive(
        "vesicle_library",
        "vesicle_lib.rst",
        RemoteFileMetadata::new(
            "vesicles_1.0.tar.bz2",
            "https://ndownloader.figshare.com/files/5320846",
            "cba5a6221df664c79229a27d82faf779f63dee608f96a7b3b64ef209b93ec0d0",
        ),
        ArchiveContents {
            files: Vec::new(),
            members: Some(Members {
                role: "structures".to_string(),
                selection: MemberSelection::Listed(vec![
                    "vesicles/1_75M/system.gro".to_string(),
                    "vesicles/3_5M/system.gro".to_string(),
                    "vesicles/10M/system.gro".to_string(),
                ]),
                expected: 3,
                labels: vec!["1_75M".to_string(), "3_5M".to_string(), "10M".to_string()],
            }),
        },
    )
}

fn cg_fiber() -> DatasetMetadata {
    DatasetMetadata::files(
        "CG_fiber",
        "CG_fiber.rst",
        vec![
            (
                "topology",
                RemoteFileMetadata::new(
                    "126chains.psf",
                    "https://ndownloader.figshare.com/files/13374146",
                    "3ddb654b68549ac2ad5107a4282899f41fad233d09ea572446031711af4e57da",
                ),
            ),
            (
                "trajectory",
                RemoteFileMetadata::new(
                    "126chains.dcd",
                    "https://ndownloader.figshare.com/files/13375838",
                    "e0b47d422f31ec209ea810edcf6cf3830da04bb2e1540f520477c27f4433d849",
                ),
            ),
        ],
    )
}

fn membrane_peptide() -> DatasetMetadata {
    DatasetMetadata::files(
        "membrane_peptide",
        "membrane_peptide.rst",
        vec![
            (
                "topology",
                RemoteFileMetadata::new(
                    "memb_pept.tpr",
                    "https://ndownloader.figshare.com/files/14993171",
                    "677a3ae55e35c24f37f2610eafa92d19285d1774731d6ffb9a99dfde39b8c437",
                ),
            ),
            (
                "trajectory",
                RemoteFileMetadata::new(
                    "memb_pept.xtc",
                    "https://ndownloader.figshare.com/files/14993174",
                    "f9bdfee4e1aa69ccfeef21cb74703202f6728f514543c4125382bd5250773eb7",
                ),
            ),
        ],
    )
}

fn nhaa_equilibrium() -> DatasetMetadata {
    DatasetMetadata::files(
        "nhaa_equilibrium",
        "nhaa_equilibrium.rst",
        vec![
            (
                "topology",
                RemoteFileMetadata::new(
                    "NhaA_non_water.gro",
                    "https://ndownloader.figshare.com/files/13222709",
                    "ae42f4cfcfe312476f9e5121fe47764a11aff962197799671c0c5a8f83637420",
                ),
            ),
            (
                "trajectory",
                RemoteFileMetadata::new(
                    "NhaA_non_water.xtc",
                    "https://ndownloader.figshare.com/files/13222712",
                    "c9ab7ba8c9c271d535cfadebc33da1d90fbf00d9a01f48afedd0f7a703128eaf",
                ),
            ),
        ],
    )
}

fn peg_1chain() -> DatasetMetadata {
    DatasetMetadata::files(
        "PEG_1chain",
        "PEG_1chain.rst",
        vec![
            (
                "topology",
                RemoteFileMetadata::new(
                    "PEG.prmtop",
                    "https://ndownloader.figshare.com/files/13532462",
                    "2d7955b9a8cb6e008171e0c5a1c31e3e458246ea3ee7302281eafefafa7cede9",
                ),
            ),
            (
                "trajectory",
                RemoteFileMetadata::new(
                    "PEG_03_prod.nc",
                    "https://ndownloader.figshare.com/files/13532465",
                    "b978714ec2f93d1cbe99564cb257959f0cb38872359aa745c8eba720a7d85225",
                ),
            ),
        ],
    )
}

fn ifabp_water() -> DatasetMetadata {
    DatasetMetadata::files(
        "ifabp_water",
        "ifabp_water.rst",
        vec![
            (
                "topology",
                RemoteFileMetadata::new(
                    "ifabp_water.psf",
                    "https://ndownloader.figshare.com/files/12980639",
                    "ba40714318aabec537015dc550fe5bd5ac1ac0b853f5abdd2f0ae63af9cfcafa",
                ),
            ),
            (
                "structure",
                RemoteFileMetadata::new(
                    "ifabp_water_0.pdb",
                    "https://ndownloader.figshare.com/files/12980636",
                    "8ccf5f75fd85385921c0cb77f00281a93b933fc1261c42fc9492f43983448a72",
                ),
            ),
            (
                "trajectory",
                RemoteFileMetadata::new(
                    "rmsfit_ifabp_water_1.dcd",
                    "https://ndownloader.figshare.com/files/12980642",
                    "cebb48e58015abc8ff2f5bb7ba3eb7a289047f256351a8252bf1f29f9aaacf0e",
                ),
            ),
        ],
    )
}

fn yiip_topology() -> RemoteFileMetadata {
    RemoteFileMetadata::new(
        "YiiP_system.pdb",
        "https://ndownloader.figshare.com/files/15286808",
        "3c2b96bbd2f95105e1a4f37140132ee073a947df8fe209a8170f09ca5b73e6cf",
    )
}

// Both YiiP variants share the topology, so they share a directory as well.
fn yiip_equilibrium_short() -> DatasetMetadata {
    DatasetMetadata::files(
        "yiip_equilibrium_short",
        "yiip_equilibrium.rst",
        vec![
            ("topology", yiip_topology()),
            (
                "trajectory",
                RemoteFileMetadata::new(
                    "YiiP_system_9ns_center.xtc",
                    "https://ndownloader.figshare.com/files/15285461",
                    "97f6a93acc1e330915338b290625d81d84928a7e4c1e5aed63d209881fbe268b",
                ),
            ),
        ],
    )
    .in_directory("yiip_equilibrium")
}

fn yiip_equilibrium_long() -> DatasetMetadata {
    DatasetMetadata::files(
        "yiip_equilibrium_long",
        "yiip_equilibrium.rst",
        vec![
            ("topology", yiip_topology()),
            (
                "trajectory",
                RemoteFileMetadata::new(
                    "YiiP_system_90ns_center.xtc",
                    "https://ndownloader.figshare.com/files/15294914",
                    "de16552ad0eb46144a7fe980424b4f3b89bf6ae553512a246d5015e5a361033c",
                ),
            ),
        ],
    )
    .in_directory("yiip_equilibrium")
}
