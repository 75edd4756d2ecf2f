mod rules;

use super::domain::ClientProfile;
use serde::{Deserialize, Serialize};

use rules::SEGMENT_RULES;

const SEGMENT_SEPARATOR: &str = " | ";
const FALLBACK_SEGMENT: &str = "Standard";

/// Coarse level of procedural rigor the engagement requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ComplianceIntensity {
    #[default]
    #[serde(rename = "Standard")]
    Standard,
    #[serde(rename = "Renforcée")]
    Enhanced,
}

impl ComplianceIntensity {
    pub const fn label(self) -> &'static str {
        match self {
            ComplianceIntensity::Standard => "Standard",
            ComplianceIntensity::Enhanced => "Renforcée",
        }
    }
}

/// Segment label, ordered risk flags, and compliance intensity for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentResult {
    pub segment: String,
    pub risk_flags: Vec<String>,
    pub compliance_intensity: ComplianceIntensity,
}

/// Classify a profile by running the segmentation rules in order.
///
/// Tags and risk flags only accumulate. Compliance intensity takes the value of the
/// last rule that assigns one.
pub fn infer_segment(profile: &ClientProfile) -> SegmentResult {
    let mut tags: Vec<&'static str> = Vec::new();
    let mut risk_flags = Vec::new();
    let mut compliance_intensity = ComplianceIntensity::Standard;

    for rule in SEGMENT_RULES.iter().filter(|rule| (rule.applies)(profile)) {
        if let Some(tag) = rule.tag {
            tags.push(tag);
        }
        if let Some(flag) = rule.risk_flag {
            risk_flags.push(flag.to_string());
        }
        if let Some(intensity) = rule.intensity {
            compliance_intensity = intensity;
        }
    }

    let segment = if tags.is_empty() {
        FALLBACK_SEGMENT.to_string()
    } else {
        tags.join(SEGMENT_SEPARATOR)
    };

    SegmentResult {
        segment,
        risk_flags,
        compliance_intensity,
    }
}
