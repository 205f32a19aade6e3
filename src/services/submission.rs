// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily challenge submission flow.
//!
//! ```text
//!  Idle --capture--> Captured --submit--> Submitted
//!   ^                  |  ^                   |
//!   +-----retake-------+  +--capture (swap)   |
//!   +---------------------reset---------------+
//! ```
//!
//! Feedback comes from an injected [`FeedbackScorer`]; the only scorer today
//! returns a fixed record.

use crate::models::Feedback;
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Produces feedback for a submitted image.
pub trait FeedbackScorer: Send + Sync {
    fn score(&self, image: &str) -> Feedback;
}

/// Scorer that ignores the image and always returns the same feedback.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedFeedbackScorer;

impl FixedFeedbackScorer {
    pub fn feedback() -> Feedback {
        Feedback {
            score: 87,
            strengths: vec![
                "Excelente uso de la luz dorada".to_string(),
                "Composición equilibrada con regla de tercios".to_string(),
                "Buen contraste entre luces y sombras".to_string(),
            ],
            improvements: vec![
                "Podrías experimentar con diferentes ángulos".to_string(),
                "La saturación podría ser un poco más sutil".to_string(),
            ],
            overall_comment: "Una captura hermosa que demuestra buen entendimiento de la \
                fotografía en hora dorada. El uso de la luz natural es muy efectivo."
                .to_string(),
        }
    }
}

impl FeedbackScorer for FixedFeedbackScorer {
    fn score(&self, _image: &str) -> Feedback {
        Self::feedback()
    }
}

/// Where the session is in the flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum SubmissionState {
    Idle,
    Captured { image: String },
    Submitted { image: String, feedback: Feedback },
}

impl SubmissionState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Captured { .. } => "captured",
            Self::Submitted { .. } => "submitted",
        }
    }
}

/// A transition that is not valid from the current state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot {action} while {state}")]
pub struct TransitionError {
    pub action: &'static str,
    pub state: &'static str,
}

/// One user's active challenge.
pub struct ChallengeSession {
    state: SubmissionState,
    scorer: Arc<dyn FeedbackScorer>,
}

impl ChallengeSession {
    pub fn new(scorer: Arc<dyn FeedbackScorer>) -> Self {
        Self {
            state: SubmissionState::Idle,
            scorer,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn image(&self) -> Option<&str> {
        match &self.state {
            SubmissionState::Idle => None,
            SubmissionState::Captured { image } | SubmissionState::Submitted { image, .. } => {
                Some(image)
            }
        }
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        match &self.state {
            SubmissionState::Submitted { feedback, .. } => Some(feedback),
            _ => None,
        }
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.state, SubmissionState::Submitted { .. })
    }

    /// Hold a captured image.
    ///
    /// An empty reference (cancelled picker) leaves the state alone. A new
    /// capture while already captured replaces the held image.
    pub fn capture(&mut self, image: impl Into<String>) -> Result<(), TransitionError> {
        let image = image.into();
        if image.is_empty() {
            tracing::debug!("Capture cancelled (no image)");
            return Ok(());
        }

        match self.state {
            SubmissionState::Idle | SubmissionState::Captured { .. } => {
                self.state = SubmissionState::Captured { image };
                Ok(())
            }
            SubmissionState::Submitted { .. } => Err(self.reject("capture")),
        }
    }

    /// Discard the held image.
    pub fn retake(&mut self) -> Result<(), TransitionError> {
        match self.state {
            SubmissionState::Captured { .. } => {
                self.state = SubmissionState::Idle;
                Ok(())
            }
            _ => Err(self.reject("retake")),
        }
    }

    /// Submit the held image and attach its feedback.
    pub fn submit(&mut self) -> Result<Feedback, TransitionError> {
        let image = match &self.state {
            SubmissionState::Captured { image } => image.clone(),
            _ => return Err(self.reject("submit")),
        };

        let feedback = self.scorer.score(&image);
        tracing::info!(score = feedback.score, "Challenge submitted");
        self.state = SubmissionState::Submitted {
            image,
            feedback: feedback.clone(),
        };
        Ok(feedback)
    }

    /// Start a new challenge, clearing image and feedback together.
    pub fn reset(&mut self) -> Result<(), TransitionError> {
        match self.state {
            SubmissionState::Submitted { .. } => {
                self.state = SubmissionState::Idle;
                Ok(())
            }
            _ => Err(self.reject("reset")),
        }
    }

    fn reject(&self, action: &'static str) -> TransitionError {
        TransitionError {
            action,
            state: self.state.name(),
        }
    }
}

impl Default for ChallengeSession {
    fn default() -> Self {
        Self::new(Arc::new(FixedFeedbackScorer))
    }
}
