// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily challenge and submission feedback models.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Difficulty tier shown on the challenge badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Difficulty {
    #[serde(rename = "Fácil")]
    Easy,
    #[serde(rename = "Medio")]
    Medium,
    #[serde(rename = "Difícil")]
    Hard,
}

/// A daily photo prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    /// Points awarded on completion
    pub points: u32,
    pub tips: Vec<String>,
}

impl Challenge {
    /// Today's challenge. There is a single fixed prompt for now.
    pub fn today() -> Self {
        Self {
            id: "1".to_string(),
            title: "Hora Dorada".to_string(),
            description: "Captura la magia de la luz dorada durante el amanecer o atardecer. \
                Busca cómo la luz suave resalta texturas y crea atmósferas cálidas."
                .to_string(),
            difficulty: Difficulty::Medium,
            points: 150,
            tips: vec![
                "Fotografía 1 hora antes del atardecer o después del amanecer".to_string(),
                "Busca sujetos con texturas interesantes".to_string(),
                "Experimenta con siluetas y contraluces".to_string(),
                "Usa el modo manual para controlar la exposición".to_string(),
            ],
        }
    }
}

/// Scored response to a submitted photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Feedback {
    /// Score out of 100
    pub score: u32,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub overall_comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_wire_names() {
        assert_eq!(
            serde_json::to_value(Difficulty::Medium).unwrap(),
            serde_json::json!("Medio")
        );
        let parsed: Difficulty = serde_json::from_str("\"Fácil\"").unwrap();
        assert_eq!(parsed, Difficulty::Easy);
    }

    #[test]
    fn test_today_challenge() {
        let challenge = Challenge::today();
        assert_eq!(challenge.title, "Hora Dorada");
        assert_eq!(challenge.points, 150);
        assert_eq!(challenge.difficulty, Difficulty::Medium);
        assert_eq!(challenge.tips.len(), 4);
    }
}
