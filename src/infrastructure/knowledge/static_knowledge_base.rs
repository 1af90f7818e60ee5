use crate::application::ports::KnowledgeBase;
use crate::domain::KnowledgeEntry;

const AUTOMOTIVE_FACTS: [(&str, &str); 4] = [
    (
        "oil_change",
        "Most vehicles require oil changes every 3,000-5,000 miles depending on oil type and driving conditions.",
    ),
    (
        "brake_pads",
        "Brake pads typically need replacement every 25,000-70,000 miles depending on driving habits.",
    ),
    (
        "tire_rotation",
        "Tires should be rotated every 5,000-7,500 miles to ensure even wear.",
    ),
    (
        "engine_maintenance",
        "Regular engine maintenance includes oil changes, filter replacements, and spark plug inspection.",
    ),
];

/// Built-in automotive maintenance facts, fixed for the life of the process.
#[derive(Debug, Clone)]
pub struct StaticKnowledgeBase {
    entries: Vec<KnowledgeEntry>,
}

impl StaticKnowledgeBase {
    pub fn new() -> Self {
        Self {
            entries: AUTOMOTIVE_FACTS
                .iter()
                .map(|(topic, fact)| KnowledgeEntry::new(*topic, *fact))
                .collect(),
        }
    }
}

impl Default for StaticKnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}

impl KnowledgeBase for StaticKnowledgeBase {
    fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }
}
