// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Achievement model and the built-in catalog.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A named milestone with unlock status and optional progress counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub unlocked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_progress: Option<u32>,
}

impl Achievement {
    fn unlocked(id: &str, title: &str, description: &str, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            unlocked: true,
            progress: None,
            max_progress: None,
        }
    }

    fn in_progress(
        id: &str,
        title: &str,
        description: &str,
        icon: &str,
        progress: u32,
        max_progress: u32,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            unlocked: false,
            progress: Some(progress.min(max_progress)),
            max_progress: Some(max_progress),
        }
    }
}

/// The fixed achievement catalog, in display order.
pub fn catalog() -> Vec<Achievement> {
    vec![
        Achievement::unlocked(
            "first_photo",
            "Primera Captura",
            "Completa tu primer reto fotográfico",
            "📸",
        ),
        Achievement::unlocked(
            "streak_3",
            "Constancia",
            "Mantén una racha de 3 días",
            "🔥",
        ),
        Achievement::in_progress(
            "streak_7",
            "Dedicación",
            "Mantén una racha de 7 días",
            "⚡",
            3,
            7,
        ),
        Achievement::in_progress(
            "community_love",
            "Favorito de la Comunidad",
            "Recibe 50 likes en tus fotos",
            "❤️",
            24,
            50,
        ),
        Achievement::in_progress(
            "technique_master",
            "Maestro de Técnicas",
            "Domina 5 técnicas diferentes",
            "🎨",
            2,
            5,
        ),
        Achievement::in_progress(
            "level_5",
            "Fotógrafo Experimentado",
            "Alcanza el nivel 5",
            "🌟",
            1,
            5,
        ),
    ]
}
