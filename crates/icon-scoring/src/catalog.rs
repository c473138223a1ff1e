use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Inclusive range of points a component can contribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PointRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl PointRange {
    pub fn contains(&self, points: u32) -> bool {
        points >= self.min && points <= self.max && (points - self.min) % self.step == 0
    }
}

/// One of the six weighted components of the index.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComponentDefinition {
    pub id: String,
    pub name: String,
    pub range: PointRange,
    pub description: String,
}

/// The six components in the order they are assessed.
pub fn components() -> &'static [ComponentDefinition] {
    static COMPONENTS: LazyLock<Vec<ComponentDefinition>> = LazyLock::new(|| {
        let graded = PointRange {
            min: 0,
            max: 10,
            step: 5,
        };

        vec![
            component(
                "dental_aesthetics",
                "Dental Aesthetics",
                PointRange {
                    min: 0,
                    max: 90,
                    step: 10,
                },
                "Based on DAC grade",
            ),
            component("crossbite", "Crossbite", graded, "Functional assessment"),
            component("upper_arch", "Upper Arch", graded, "Crowding/spacing severity"),
            component(
                "additional_anomalies",
                "Additional Anomalies",
                PointRange {
                    min: 0,
                    max: 20,
                    step: 20,
                },
                "Impacted teeth, hypodontia, etc.",
            ),
            component("buccal_occlusion", "Buccal Occlusion", graded, "AP relationship"),
            component(
                "vertical_relationship",
                "Vertical Relationship",
                graded,
                "Openbite/deep bite",
            ),
        ]
    });
    &COMPONENTS
}

/// Look up a component by ID.
pub fn get_component(id: &str) -> Option<&'static ComponentDefinition> {
    components().iter().find(|c| c.id == id)
}

/// Highest total the index can produce.
pub fn max_total() -> u32 {
    components().iter().map(|c| c.range.max).sum()
}

fn component(id: &str, name: &str, range: PointRange, description: &str) -> ComponentDefinition {
    ComponentDefinition {
        id: id.to_string(),
        name: name.to_string(),
        range,
        description: description.to_string(),
    }
}
