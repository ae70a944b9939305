use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

const TUMOR_SUFFIX: &str = "_tumor";

/// The three tumor types the classifier reports probabilities for, in
/// display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
    Serialize, Deserialize, Display, AsRefStr, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TumorClass {
    Glioma,
    Meningioma,
    Pituitary,
}

impl TumorClass {
    pub const COUNT: usize = 3;

    pub fn index(self) -> usize {
        match self {
            TumorClass::Glioma => 0,
            TumorClass::Meningioma => 1,
            TumorClass::Pituitary => 2,
        }
    }

    /// Bare response key, e.g. `glioma`.
    pub fn key(self) -> &'static str {
        match self {
            TumorClass::Glioma => "glioma",
            TumorClass::Meningioma => "meningioma",
            TumorClass::Pituitary => "pituitary",
        }
    }

    /// Suffixed response key, e.g. `glioma_tumor`.
    pub fn suffixed_key(self) -> String {
        format!("{}{}", self.key(), TUMOR_SUFFIX)
    }

    /// Capitalized name for banners and bar labels.
    pub fn title(self) -> &'static str {
        match self {
            TumorClass::Glioma => "Glioma",
            TumorClass::Meningioma => "Meningioma",
            TumorClass::Pituitary => "Pituitary",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TumorClass::Glioma => {
                "Glioma is a tumor that originates from glial cells, which support and protect neurons in the brain."
            }
            TumorClass::Meningioma => {
                "Meningioma develops from the meninges, the protective membranes surrounding the brain and spinal cord."
            }
            TumorClass::Pituitary => {
                "Pituitary tumors arise from the pituitary gland and may affect hormone regulation and growth."
            }
        }
    }

    /// Maps a predicted label like `Glioma_Tumor` onto a class. Anything that
    /// is not one of the three known tags (`no_tumor`, `healthy`, ...) is `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        let lowered = label.trim().to_lowercase();
        let tag = lowered.strip_suffix(TUMOR_SUFFIX).unwrap_or(&lowered);
        tag.parse().ok()
    }
}
