use serde::{Deserialize, Serialize};

/// Harm categories the backend can filter on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HarmCategory {
    #[serde(rename = "HARM_CATEGORY_DANGEROUS_CONTENT")]
    DangerousContent,
    #[serde(rename = "HARM_CATEGORY_HATE_SPEECH")]
    HateSpeech,
    #[serde(rename = "HARM_CATEGORY_HARASSMENT")]
    Harassment,
    #[serde(rename = "HARM_CATEGORY_SEXUALLY_EXPLICIT")]
    SexuallyExplicit,
}

impl HarmCategory {
    pub fn all() -> &'static [HarmCategory] {
        &[
            Self::DangerousContent,
            Self::HateSpeech,
            Self::Harassment,
            Self::SexuallyExplicit,
        ]
    }
}

/// Per-category tolerance level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HarmThreshold {
    #[serde(rename = "BLOCK_NONE")]
    BlockNone,
    #[serde(rename = "BLOCK_ONLY_HIGH")]
    BlockOnlyHigh,
    #[serde(rename = "BLOCK_MEDIUM_AND_ABOVE")]
    BlockMediumAndAbove,
    #[serde(rename = "BLOCK_LOW_AND_ABOVE")]
    BlockLowAndAbove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetySetting {
    pub category: HarmCategory,
    pub threshold: HarmThreshold,
}

/// The set of safety thresholds sent with a generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetySettings(pub Vec<SafetySetting>);

impl SafetySettings {
    /// All four categories at BLOCK_ONLY_HIGH, the setting the riddle and
    /// truth-or-dare generators ship with
    pub fn block_only_high() -> Self {
        Self(
            HarmCategory::all()
                .iter()
                .map(|&category| SafetySetting {
                    category,
                    threshold: HarmThreshold::BlockOnlyHigh,
                })
                .collect(),
        )
    }

    pub fn with(mut self, category: HarmCategory, threshold: HarmThreshold) -> Self {
        match self.0.iter_mut().find(|s| s.category == category) {
            Some(setting) => setting.threshold = threshold,
            None => self.0.push(SafetySetting {
                category,
                threshold,
            }),
        }
        self
    }
}
