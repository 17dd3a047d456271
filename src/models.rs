use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Correct,
    Wrong,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    pub marker_class: String,
    pub item_selector: String,
    pub container_selector: String, // Used when scanning a whole document
    pub separator: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            marker_class: "green-box".to_string(),
            item_selector: "li".to_string(),
            container_selector: "ul[id]".to_string(),
            separator: ";".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExtractionResult {
    pub correct: String,
    pub wrong: String,
    pub id: String,
}
