//! Screen routing: Home → Game → GameOver → Game ...

use game_core::GameOverPayload;

/// Top-level screens of the client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Home,
    Game,
    GameOver {
        final_score: u64,
    },
}

/// Tracks the active screen and the transitions between screens.
///
/// Leaving Home or GameOver always means starting a fresh game, so
/// [`Router::play`] tells the caller when to call `RuntimeHandle::start`.
#[derive(Clone, Debug, Default)]
pub struct Router {
    screen: Screen,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// "Play" / "Play Again". Returns true when a new game must be started.
    pub fn play(&mut self) -> bool {
        match self.screen {
            Screen::Home | Screen::GameOver { .. } => {
                self.screen = Screen::Game;
                true
            }
            Screen::Game => false,
        }
    }

    /// Game → GameOver. A game-over outside the game screen is stale.
    pub fn game_over(&mut self, payload: GameOverPayload) -> bool {
        if self.screen != Screen::Game {
            return false;
        }
        self.screen = Screen::GameOver {
            final_score: payload.final_score,
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle() {
        let mut router = Router::new();
        assert_eq!(router.screen(), Screen::Home);

        assert!(router.play());
        assert_eq!(router.screen(), Screen::Game);
        assert!(!router.play(), "already playing");

        assert!(router.game_over(GameOverPayload { final_score: 4 }));
        assert_eq!(router.screen(), Screen::GameOver { final_score: 4 });

        assert!(router.play());
        assert_eq!(router.screen(), Screen::Game);
    }

    #[test]
    fn game_over_outside_game_is_ignored() {
        let mut router = Router::new();
        assert!(!router.game_over(GameOverPayload { final_score: 1 }));
        assert_eq!(router.screen(), Screen::Home);
    }
}
