use kuchiki::traits::*;
use kuchiki::NodeRef;
use log::debug;

use crate::error::ExtractError;
use crate::models::{ExtractionResult, ExtractorConfig, Verdict};

#[derive(Debug, Clone, Default)]
pub struct ResultExtractor {
    pub config: ExtractorConfig,
}

impl ResultExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn extract_container(&self, container: &NodeRef) -> ExtractionResult {
        let mut correct = Vec::new();
        let mut wrong = Vec::new();

        // Proper descendants only: NodeRef::select would also match the
        // container itself.
        if let Ok(items) = container.descendants().select(&self.config.item_selector) {
            for item in items {
                let text = item.text_contents().trim().to_string();
                match self.classify(item.as_node()) {
                    Verdict::Correct => correct.push(text),
                    Verdict::Wrong => wrong.push(text),
                }
            }
        }

        // An empty group joins to an empty string; an item whose text is
        // empty still keeps its slot.
        ExtractionResult {
            correct: correct.join(&self.config.separator),
            wrong: wrong.join(&self.config.separator),
            id: element_id(container),
        }
    }

    pub fn extract_by_id(&self, html: &str, id: &str) -> Result<ExtractionResult, ExtractError> {
        let document = kuchiki::parse_html().one(html);

        // First element in document order whose id attribute matches exactly.
        let container = document
            .descendants()
            .find(|node| {
                node.as_element()
                    .map(|e| e.attributes.borrow().get("id") == Some(id))
                    .unwrap_or(false)
            })
            .ok_or_else(|| ExtractError::ContainerNotFound { id: id.to_string() })?;

        Ok(self.extract_container(&container))
    }

    pub fn extract_all(&self, html: &str) -> Result<Vec<ExtractionResult>, ExtractError> {
        let document = kuchiki::parse_html().one(html);

        let containers = document
            .select(&self.config.container_selector)
            .map_err(|_| ExtractError::InvalidSelector(self.config.container_selector.clone()))?;

        let results: Vec<ExtractionResult> = containers
            .map(|container| self.extract_container(container.as_node()))
            .collect();

        debug!("extracted {} container(s)", results.len());

        Ok(results)
    }

    pub fn classify(&self, item: &NodeRef) -> Verdict {
        if let Some(element) = item.as_element() {
            let attrs = element.attributes.borrow();
            if let Some(class) = attrs.get("class") {
                if class
                    .split_whitespace()
                    .any(|label| label == self.config.marker_class)
                {
                    return Verdict::Correct;
                }
            }
        }
        // No marker token in the class list, or no class at all: wrong.
        Verdict::Wrong
    }
}

fn element_id(node: &NodeRef) -> String {
    node.as_element()
        .and_then(|e| e.attributes.borrow().get("id").map(|id| id.to_string()))
        .unwrap_or_default()
}
