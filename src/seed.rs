use crate::incident::{Incident, IncidentId, Severity};
use color_eyre::eyre::{eyre, Result};
use std::path::Path;

/// The records every session starts with unless `--seed` or `--empty` is given.
pub fn builtin() -> Vec<Incident> {
    vec![
        Incident {
            id: IncidentId(1),
            title: "Biased Recommendation Algorithm".to_string(),
            description: "Algorithm consistently favored certain demographics...".to_string(),
            severity: Severity::Medium,
            reported_at: "2025-03-15T10:00:00Z".to_string(),
        },
        Incident {
            id: IncidentId(2),
            title: "LLM Hallucination in Critical Info".to_string(),
            description: "LLM provided incorrect safety procedure information...".to_string(),
            severity: Severity::High,
            reported_at: "2025-04-01T14:30:00Z".to_string(),
        },
        Incident {
            id: IncidentId(3),
            title: "Minor Data Leak via Chatbot".to_string(),
            description: "Chatbot inadvertently exposed non-sensitive user metadata...".to_string(),
            severity: Severity::Low,
            reported_at: "2025-03-20T09:15:00Z".to_string(),
        },
    ]
}

pub fn parse(json: &str) -> Result<Vec<Incident>> {
    let records: Vec<Incident> = serde_json::from_str(json)?;
    for r in &records {
        if r.reported_instant().is_none() {
            tracing::warn!(
                "seed incident {} has unparseable reported_at {:?}",
                r.id,
                r.reported_at
            );
        }
    }
    Ok(records)
}

pub fn load(path: &Path) -> Result<Vec<Incident>> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| eyre!("Failed to read seed file {path:?}: {e}"))?;
    parse(&json).map_err(|e| eyre!("Invalid seed file {path:?}: {e}"))
}
