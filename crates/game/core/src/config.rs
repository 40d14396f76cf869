/// Durations (in milliseconds) that pace a round.
///
/// The defaults reproduce the pacing of the original web game: numbers count
/// up for a second, the verdict lands shortly after the count finishes, and
/// the board slides for 800ms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timings {
    /// Count-up of both slots after a fresh pair is installed.
    pub initial_reveal_ms: u64,
    /// Count-up of the right slot after the player chooses.
    pub reveal_ms: u64,
    /// Delay between the choice and the correct/incorrect verdict.
    pub verdict_delay_ms: u64,
    /// Delay between a correct (non-tie) verdict and the board advance.
    pub advance_delay_ms: u64,
    /// Delay between a tie verdict and the board advance.
    pub tie_linger_ms: u64,
    /// Delay between an incorrect verdict and the game-over signal.
    pub game_over_delay_ms: u64,
    /// Duration of the slide that moves the right item into the left slot.
    pub transition_ms: u64,
}

impl Timings {
    pub const DEFAULT_INITIAL_REVEAL_MS: u64 = 1000;
    pub const DEFAULT_REVEAL_MS: u64 = 1000;
    pub const DEFAULT_VERDICT_DELAY_MS: u64 = 1200;
    pub const DEFAULT_ADVANCE_DELAY_MS: u64 = 1000;
    pub const DEFAULT_TIE_LINGER_MS: u64 = 2000;
    pub const DEFAULT_GAME_OVER_DELAY_MS: u64 = 2000;
    pub const DEFAULT_TRANSITION_MS: u64 = 800;

    pub const fn new() -> Self {
        Self {
            initial_reveal_ms: Self::DEFAULT_INITIAL_REVEAL_MS,
            reveal_ms: Self::DEFAULT_REVEAL_MS,
            verdict_delay_ms: Self::DEFAULT_VERDICT_DELAY_MS,
            advance_delay_ms: Self::DEFAULT_ADVANCE_DELAY_MS,
            tie_linger_ms: Self::DEFAULT_TIE_LINGER_MS,
            game_over_delay_ms: Self::DEFAULT_GAME_OVER_DELAY_MS,
            transition_ms: Self::DEFAULT_TRANSITION_MS,
        }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self::new()
    }
}

/// Game configuration and tunable parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub timings: Timings,
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timings(timings: Timings) -> Self {
        Self { timings }
    }
}
