use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Genotype labels downstream analysis keeps. Written verbatim on every run,
/// independent of the groups actually present in the input.
pub const ALLOW_LIST: [&str; 8] = [
    "QB_hetero",
    "QB_homo",
    "QC_hetero",
    "QC_homo",
    "QD_hetero",
    "QD_homo",
    "QT_hetero",
    "QT_homo",
];

// `+/-`, `cre/+` and `cre-delta-pA/+` alleles mark a heterozygous animal.
static HETERO_MARKERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\+/-|cre/\+|cre-delta-pa/\+").expect("heterozygosity pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Zygosity {
    Hetero,
    Homo,
}

impl Zygosity {
    pub fn classify(strain: &str) -> Self {
        if HETERO_MARKERS.is_match(strain) {
            Self::Hetero
        } else {
            Self::Homo
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hetero => "hetero",
            Self::Homo => "homo",
        }
    }
}

impl fmt::Display for Zygosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds `<group>_<hetero|homo>` for a subject found in `group`.
pub fn genotype_label(group: &str, strain: &str) -> String {
    format!("{}_{}", group, Zygosity::classify(strain))
}
