// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Community feed with in-memory likes.

use crate::models::CommunityPhoto;
use std::str::FromStr;

/// Minimum likes for a photo to show under the "top" tab.
pub const TOP_MIN_LIKES: u32 = 30;

/// Feed tab selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeedTab {
    #[default]
    Trending,
    Recent,
    Top,
}

impl FeedTab {
    pub fn includes(&self, photo: &CommunityPhoto) -> bool {
        match self {
            Self::Top => photo.likes >= TOP_MIN_LIKES,
            // Fixture photos are all recent and all trending
            Self::Trending | Self::Recent => true,
        }
    }
}

impl FromStr for FeedTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trending" => Ok(Self::Trending),
            "recent" => Ok(Self::Recent),
            "top" => Ok(Self::Top),
            other => Err(format!("unknown feed tab: {other}")),
        }
    }
}

/// The community feed. Likes are held in memory only.
#[derive(Debug, Clone)]
pub struct CommunityFeed {
    photos: Vec<CommunityPhoto>,
}

impl Default for CommunityFeed {
    fn default() -> Self {
        Self::new(fixture_photos())
    }
}

impl CommunityFeed {
    pub fn new(photos: Vec<CommunityPhoto>) -> Self {
        Self { photos }
    }

    pub fn photos(&self) -> &[CommunityPhoto] {
        &self.photos
    }

    pub fn filter(&self, tab: FeedTab) -> Vec<CommunityPhoto> {
        self.photos
            .iter()
            .filter(|p| tab.includes(p))
            .cloned()
            .collect()
    }

    /// Toggle the like on `photo_id`, returning the updated photo.
    pub fn toggle_like(&mut self, photo_id: &str) -> Option<CommunityPhoto> {
        let photo = self.photos.iter_mut().find(|p| p.id == photo_id)?;
        photo.toggle_like();
        tracing::debug!(
            photo_id,
            likes = photo.likes,
            is_liked = photo.is_liked,
            "Like toggled"
        );
        Some(photo.clone())
    }
}

fn svg_data_url(svg_base64: &str) -> String {
    format!("data:image/svg+xml;base64,{svg_base64}")
}

/// Sample feed photos.
pub fn fixture_photos() -> Vec<CommunityPhoto> {
    vec![
        CommunityPhoto {
            id: "1".to_string(),
            username: "Ana_Fotógrafa".to_string(),
            avatar: "👩‍🎨".to_string(),
            challenge_title: "Luz Dorada".to_string(),
            technique: "Iluminación Natural".to_string(),
            image: svg_data_url(
                "PHN2ZyB3aWR0aD0iMzAwIiBoZWlnaHQ9IjIwMCIgeG1sbnM9Imh0dHA6Ly93d3cudzMub3JnLzIwMDAvc3ZnIj48cmVjdCB3aWR0aD0iMTAwJSIgaGVpZ2h0PSIxMDAlIiBmaWxsPSIjZmZiZjAwIi8+PHRleHQgeD0iNTAlIiB5PSI1MCUiIGZvbnQtZmFtaWx5PSJBcmlhbCIgZm9udC1zaXplPSIxOCIgZmlsbD0iIzMzMyIgdGV4dC1hbmNob3I9Im1pZGRsZSIgZHk9Ii4zZW0iPkx1eiBEb3JhZGE8L3RleHQ+PC9zdmc+",
            ),
            likes: 42,
            comments: 8,
            is_liked: false,
            time_ago: "2h".to_string(),
            level: 5,
        },
        CommunityPhoto {
            id: "2".to_string(),
            username: "Carlos_Urbano".to_string(),
            avatar: "👨‍💼".to_string(),
            challenge_title: "Sombras Dramáticas".to_string(),
            technique: "Contraste".to_string(),
            image: svg_data_url(
                "PHN2ZyB3aWR0aD0iMzAwIiBoZWlnaHQ9IjIwMCIgeG1sbnM9Imh0dHA6Ly93d3cudzMub3JnLzIwMDAvc3ZnIj48ZGVmcz48bGluZWFyR3JhZGllbnQgaWQ9ImdyYWQiIHgxPSIwJSIgeTE9IjAlIiB4Mj0iMTAwJSIgeTI9IjEwMCUiPjxzdG9wIG9mZnNldD0iMCUiIHN0eWxlPSJzdG9wLWNvbG9yOiMwMDA7c3RvcC1vcGFjaXR5OjEiIC8+PHN0b3Agb2Zmc2V0PSIxMDAlIiBzdHlsZT0ic3RvcC1jb2xvcjojZmZmO3N0b3Atb3BhY2l0eToxIiAvPjwvbGluZWFyR3JhZGllbnQ+PC9kZWZzPjxyZWN0IHdpZHRoPSIxMDAlIiBoZWlnaHQ9IjEwMCUiIGZpbGw9InVybCgjZ3JhZCkiLz48dGV4dCB4PSI1MCUiIHk9IjUwJSIgZm9udC1mYW1pbHk9IkFyaWFsIiBmb250LXNpemU9IjE2IiBmaWxsPSIjNjY2IiB0ZXh0LWFuY2hvcj0ibWlkZGxlIiBkeT0iLjNlbSI+U29tYnJhcyBEcmFtw6F0aWNhczwvdGV4dD48L3N2Zz4=",
            ),
            likes: 28,
            comments: 5,
            is_liked: true,
            time_ago: "4h".to_string(),
            level: 3,
        },
        CommunityPhoto {
            id: "3".to_string(),
            username: "Maria_Natura".to_string(),
            avatar: "🌿".to_string(),
            challenge_title: "Macro Detalles".to_string(),
            technique: "Enfoque Selectivo".to_string(),
            image: svg_data_url(
                "PHN2ZyB3aWR0aD0iMzAwIiBoZWlnaHQ9IjIwMCIgeG1sbnM9Imh0dHA6Ly93d3cudzMub3JnLzIwMDAvc3ZnIj48Y2lyY2xlIGN4PSIxNTAiIGN5PSIxMDAiIHI9IjgwIiBmaWxsPSIjNGZiZjRmIiBvcGFjaXR5PSIwLjgiLz48Y2lyY2xlIGN4PSIxNTAiIGN5PSIxMDAiIHI9IjQwIiBmaWxsPSIjMmY4MDJmIi8+PHRleHQgeD0iNTAlIiB5PSI4NSUiIGZvbnQtZmFtaWx5PSJBcmlhbCIgZm9udC1zaXplPSIxNCIgZmlsbD0iIzMzMyIgdGV4dC1hbmNob3I9Im1pZGRsZSI+TWFjcm8gRGV0YWxsZXM8L3RleHQ+PC9zdmc+",
            ),
            likes: 35,
            comments: 12,
            is_liked: false,
            time_ago: "6h".to_string(),
            level: 7,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_tab_filters_by_likes() {
        let feed = CommunityFeed::default();
        let ids: Vec<String> = feed.filter(FeedTab::Top).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["1", "3"]);

        assert_eq!(feed.filter(FeedTab::Trending).len(), 3);
        assert_eq!(feed.filter(FeedTab::Recent).len(), 3);
    }

    #[test]
    fn test_toggle_like_updates_feed() {
        let mut feed = CommunityFeed::default();

        let liked = feed.toggle_like("1").unwrap();
        assert_eq!((liked.likes, liked.is_liked), (43, true));

        let unliked = feed.toggle_like("2").unwrap();
        assert_eq!((unliked.likes, unliked.is_liked), (27, false));
        assert_eq!(feed.filter(FeedTab::Top).len(), 2);

        let back = feed.toggle_like("1").unwrap();
        assert_eq!((back.likes, back.is_liked), (42, false));
    }

    #[test]
    fn test_toggle_unknown_photo() {
        let mut feed = CommunityFeed::default();
        assert!(feed.toggle_like("missing").is_none());
        assert_eq!(feed.photos(), fixture_photos().as_slice());
    }

    #[test]
    fn test_tab_from_str() {
        assert_eq!("top".parse::<FeedTab>(), Ok(FeedTab::Top));
        assert_eq!("recent".parse::<FeedTab>(), Ok(FeedTab::Recent));
        assert!("popular".parse::<FeedTab>().is_err());
    }
}
