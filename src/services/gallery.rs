// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Gallery of past challenge submissions.

use crate::models::ChallengePhoto;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Category value that disables filtering.
pub const ALL_CATEGORIES: &str = "all";

/// Score band used to color a photo's score badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ScoreTier {
    /// 90 and above
    High,
    /// 80 to 89
    Medium,
    Low,
}

impl ScoreTier {
    pub fn from_score(score: u32) -> Self {
        match score {
            90.. => Self::High,
            80..=89 => Self::Medium,
            _ => Self::Low,
        }
    }
}

/// Read-only list of the user's past challenge photos.
#[derive(Debug, Clone)]
pub struct Gallery {
    photos: Vec<ChallengePhoto>,
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new(fixture_photos())
    }
}

impl Gallery {
    pub fn new(photos: Vec<ChallengePhoto>) -> Self {
        Self { photos }
    }

    pub fn photos(&self) -> &[ChallengePhoto] {
        &self.photos
    }

    /// `"all"` followed by each distinct category in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for photo in &self.photos {
            if !categories[1..].contains(&photo.category) {
                categories.push(photo.category.clone());
            }
        }
        categories
    }

    /// Photos in `category`, or all of them for `"all"`.
    pub fn filter(&self, category: &str) -> Vec<ChallengePhoto> {
        if category == ALL_CATEGORIES {
            return self.photos.clone();
        }
        self.photos
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect()
    }
}

#[allow(clippy::too_many_arguments)]
fn photo(
    id: &str,
    unsplash_id: &str,
    title: &str,
    description: &str,
    score: u32,
    likes: u32,
    date: &str,
    category: &str,
) -> ChallengePhoto {
    ChallengePhoto {
        id: id.to_string(),
        image_url: format!("https://images.unsplash.com/photo-{unsplash_id}?w=400&h=400&fit=crop"),
        challenge_title: title.to_string(),
        challenge_description: description.to_string(),
        score,
        likes,
        date: date.to_string(),
        category: category.to_string(),
    }
}

/// Sample submissions, newest first.
pub fn fixture_photos() -> Vec<ChallengePhoto> {
    vec![
        photo(
            "1",
            "1506905925346-21bda4d32df4",
            "Hora Dorada",
            "Captura la magia de la luz dorada durante el amanecer o atardecer",
            95,
            24,
            "2024-01-15",
            "Paisaje",
        ),
        photo(
            "2",
            "1544005313-94ddf0286df2",
            "Retrato Natural",
            "Fotografía un retrato usando solo luz natural",
            88,
            18,
            "2024-01-12",
            "Retrato",
        ),
        photo(
            "3",
            "1493246507139-91e8fad9978e",
            "Macro Detalle",
            "Captura detalles extremos usando la función macro de tu teléfono",
            92,
            31,
            "2024-01-10",
            "Macro",
        ),
        photo(
            "4",
            "1449824913935-59a10b8d2000",
            "Arquitectura Urbana",
            "Encuentra líneas y patrones interesantes en edificios urbanos",
            85,
            15,
            "2024-01-08",
            "Arquitectura",
        ),
        photo(
            "5",
            "1441974231531-c6227db76b6e",
            "Naturaleza Salvaje",
            "Captura la belleza de la naturaleza en su estado más puro",
            90,
            27,
            "2024-01-05",
            "Naturaleza",
        ),
        photo(
            "6",
            "1515886657613-9f3515b0c78f",
            "Sombras y Luces",
            "Juega con el contraste entre sombras y luces dramáticas",
            87,
            22,
            "2024-01-03",
            "Artístico",
        ),
        photo(
            "7",
            "1502920917128-1aa500764cbd",
            "Vida Nocturna",
            "Captura la energía y las luces de la ciudad por la noche",
            93,
            35,
            "2024-01-01",
            "Nocturna",
        ),
        photo(
            "8",
            "1542038784456-1ea8e732a1e",
            "Minimalismo",
            "Crea una composición minimalista con elementos simples",
            89,
            19,
            "2023-12-28",
            "Minimalista",
        ),
    ]
}
