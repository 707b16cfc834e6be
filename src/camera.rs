//! Webcam acquisition order.
//!
//! The rear camera is preferred (the panel is meant to float over the
//! world), then the front camera, then whatever the browser offers. Each
//! strategy is tried in turn; the first success wins and failure is only
//! reported once every strategy has been refused.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use std::fmt;
use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraStrategy {
    /// `facingMode: "environment"`.
    Environment,
    /// `facingMode: "user"`.
    User,
    /// `video: true`.
    Any,
}

impl CameraStrategy {
    /// The `facingMode` constraint, if this strategy sets one.
    #[must_use]
    pub fn facing_mode(self) -> Option<&'static str> {
        match self {
            Self::Environment => Some("environment"),
            Self::User => Some("user"),
            Self::Any => None,
        }
    }
}

impl fmt::Display for CameraStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.facing_mode().unwrap_or("any"))
    }
}

pub const FALLBACK_CHAIN: [CameraStrategy; 3] =
    [CameraStrategy::Environment, CameraStrategy::User, CameraStrategy::Any];

/// One refused strategy and the reason given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptFailure {
    pub strategy: CameraStrategy,
    pub reason: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CameraError {
    #[error("camera api unavailable: {0}")]
    Unsupported(String),
    #[error("no camera available after {} attempts", .attempts.len())]
    Exhausted { attempts: Vec<AttemptFailure> },
}

/// Try `strategies` in order with `attempt`, returning the first success and
/// the strategy that produced it.
///
/// # Errors
///
/// [`CameraError::Exhausted`] when every strategy failed, listing each reason.
pub async fn acquire_first<T, E, F, Fut>(
    strategies: &[CameraStrategy],
    mut attempt: F,
) -> Result<(CameraStrategy, T), CameraError>
where
    F: FnMut(CameraStrategy) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    let mut attempts = Vec::with_capacity(strategies.len());
    for &strategy in strategies {
        match attempt(strategy).await {
            Ok(stream) => {
                log::info!("camera: acquired with {strategy} strategy");
                return Ok((strategy, stream));
            }
            Err(err) => {
                log::warn!("camera: {strategy} strategy refused: {err}");
                attempts.push(AttemptFailure { strategy, reason: err.to_string() });
            }
        }
    }
    Err(CameraError::Exhausted { attempts })
}
