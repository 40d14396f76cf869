use crate::reveal::AnimationState;

/// Named states of the game progression machine.
///
/// ```text
/// Loading ──► Ready ──► Revealing ──► Transitioning ──► Ready ...
///    │          ▲           │
///    ▼          │           ▼
///  Error ──retry┘        GameOver (terminal)
/// ```
///
/// `Error` is reachable from any fetch step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    #[default]
    Loading,
    Ready,
    Revealing,
    Transitioning,
    GameOver,
    Error,
}

impl Phase {
    /// Only `Ready` accepts player choices.
    pub const fn accepts_input(self) -> bool {
        matches!(self, Phase::Ready)
    }

    pub const fn animation(self) -> AnimationState {
        match self {
            Phase::Revealing => AnimationState::Revealing,
            Phase::Transitioning => AnimationState::Transitioning,
            _ => AnimationState::Idle,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Phase::GameOver)
    }
}
