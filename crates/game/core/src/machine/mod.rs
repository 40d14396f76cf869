//! Game progression state machine.
//!
//! [`GameMachine`] is the single dispatch point for every state change. It
//! owns the board, prefetch cache, score tracker and reveal state, and turns
//! each [`Input`] into a list of [`Effect`]s for the runtime to perform.
//! Completions from superseded sequences are recognised by their
//! [`Generation`] and dropped, so a slow fetch or late timer from an earlier
//! game can never touch a fresh board.

mod effect;
mod input;
mod phase;
mod snapshot;

pub use effect::{Effect, GameOverPayload};
pub use input::{Generation, Input, Timer};
pub use phase::Phase;
pub use snapshot::GameSnapshot;

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::evaluate::{Choice, Verdict};
use crate::item::{Item, ItemPair, Slot};
use crate::prefetch::PrefetchCache;
use crate::reveal::{DisplayedValues, RevealState};
use crate::score::{ScoreState, ScoreTracker};

pub struct GameMachine {
    config: GameConfig,
    generation: Generation,
    phase: Phase,
    board: Board,
    cache: PrefetchCache,
    score: ScoreTracker,
    reveal: RevealState,
    displayed: DisplayedValues,
    /// Verdict computed at choice time, published when the verdict timer fires.
    pending_verdict: Option<Verdict>,
    /// Set while a direct fetch replaces an empty prefetch cache.
    awaiting_next: bool,
    /// Reveal run counters per slot; frames from older runs are dropped.
    runs: [u64; 2],
    last_error: Option<GameError>,
    /// Bumped on every observable change except animator frames.
    revision: u64,
}

impl GameMachine {
    /// Creates an idle machine. `best` is the best score loaded from storage.
    pub fn new(config: GameConfig, best: u64) -> Self {
        Self {
            config,
            generation: Generation::default(),
            phase: Phase::Loading,
            board: Board::default(),
            cache: PrefetchCache::new(),
            score: ScoreTracker::new(best),
            reveal: RevealState::Neutral,
            displayed: DisplayedValues::default(),
            pending_verdict: None,
            awaiting_next: false,
            runs: [0; 2],
            last_error: None,
            revision: 0,
        }
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> ScoreState {
        self.score.state()
    }

    pub fn reveal(&self) -> RevealState {
        self.reveal
    }

    pub fn displayed(&self) -> DisplayedValues {
        self.displayed
    }

    pub fn input_enabled(&self) -> bool {
        self.phase.accepts_input()
    }

    pub fn prefetch(&self) -> &PrefetchCache {
        &self.cache
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            revision: self.revision,
            generation: self.generation,
            phase: self.phase,
            board: self.board.clone(),
            displayed: self.displayed,
            reveal: self.reveal,
            animation: self.phase.animation(),
            score: self.score.state(),
            input_enabled: self.input_enabled(),
            last_error: self.last_error.clone(),
        }
    }

    /// Applies one input and returns the effects to perform, in order.
    pub fn dispatch(&mut self, input: Input) -> Vec<Effect> {
        if input
            .generation()
            .is_some_and(|generation| generation != self.generation)
        {
            return Vec::new();
        }

        match input {
            Input::Start => self.on_start(),
            Input::Retry => self.on_retry(),
            Input::Choose(choice) => self.on_choose(choice),
            Input::PairFetched { result, .. } => self.on_pair(result),
            Input::Prefetched { result, .. } => self.on_prefetched(result),
            Input::NextFetched { result, .. } => self.on_next_fetched(result),
            Input::TimerElapsed { timer, .. } => match timer {
                Timer::Verdict => self.on_verdict(),
                Timer::Advance => self.on_advance(),
                Timer::TransitionDone => self.on_transition_done(),
                Timer::GameOver => self.on_game_over(),
            },
            Input::Frame {
                slot, run, value, ..
            } => self.on_frame(slot, run, value),
        }
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    fn on_start(&mut self) -> Vec<Effect> {
        self.score.reset();
        self.begin_loading()
    }

    fn on_retry(&mut self) -> Vec<Effect> {
        if self.phase != Phase::Error {
            return Vec::new();
        }
        self.begin_loading()
    }

    fn begin_loading(&mut self) -> Vec<Effect> {
        self.generation = self.generation.next();
        self.phase = Phase::Loading;
        self.board.clear();
        self.cache.clear();
        self.reveal = RevealState::Neutral;
        self.displayed = DisplayedValues::default();
        self.pending_verdict = None;
        self.awaiting_next = false;
        self.last_error = None;
        self.touch();

        let mut effects = vec![
            Effect::CancelPending,
            Effect::FetchPair {
                generation: self.generation,
            },
        ];
        effects.extend(self.warm());
        effects
    }

    fn on_pair(&mut self, result: Result<ItemPair, GameError>) -> Vec<Effect> {
        if self.phase != Phase::Loading {
            return Vec::new();
        }

        let pair = match result.and_then(|pair| pair.validate().map(|()| pair)) {
            Ok(pair) => pair,
            Err(error) => return self.fail(error),
        };

        let (left_metric, right_metric) = (pair.left.metric, pair.right.metric);
        self.board = Board::new(pair);
        self.reveal = RevealState::Neutral;
        self.phase = Phase::Ready;
        self.touch();

        let duration = self.config.timings.initial_reveal_ms;
        vec![
            self.animate(Slot::Left, Some(0), left_metric, duration),
            self.animate(Slot::Right, Some(0), right_metric, duration),
        ]
    }

    // ------------------------------------------------------------------
    // Prefetch
    // ------------------------------------------------------------------

    fn warm(&mut self) -> Option<Effect> {
        self.cache.begin_warm().then_some(Effect::Prefetch {
            generation: self.generation,
        })
    }

    fn on_prefetched(&mut self, result: Result<Item, GameError>) -> Vec<Effect> {
        if !self.cache.is_warming() {
            return Vec::new();
        }

        match result.and_then(|item| item.validate().map(|()| item)) {
            Ok(item) => {
                let preload = item
                    .image_ref
                    .clone()
                    .map(|image_ref| Effect::Preload { image_ref });
                self.cache.fill(item);
                preload.into_iter().collect()
            }
            // The advance falls back to a direct fetch.
            Err(_) => {
                self.cache.abandon();
                Vec::new()
            }
        }
    }

    // ------------------------------------------------------------------
    // Round
    // ------------------------------------------------------------------

    fn on_choose(&mut self, choice: Choice) -> Vec<Effect> {
        if !self.phase.accepts_input() {
            return Vec::new();
        }
        let Some((left, right)) = self.board.metrics() else {
            return Vec::new();
        };

        self.pending_verdict = Some(Verdict::judge(left, right, choice));
        self.phase = Phase::Revealing;
        self.touch();

        let timings = self.config.timings;
        vec![
            self.animate(Slot::Right, Some(0), right, timings.reveal_ms),
            self.schedule(Timer::Verdict, timings.verdict_delay_ms),
        ]
    }

    fn on_verdict(&mut self) -> Vec<Effect> {
        if self.phase != Phase::Revealing {
            return Vec::new();
        }
        let Some(verdict) = self.pending_verdict.take() else {
            return Vec::new();
        };

        let timings = self.config.timings;
        let mut effects = Vec::new();

        if verdict.is_correct() {
            self.reveal = RevealState::Correct;
            if let Some(best) = self.score.on_correct() {
                effects.push(Effect::PersistBest { best });
            }
            let delay = if verdict.is_tie() {
                timings.tie_linger_ms
            } else {
                timings.advance_delay_ms
            };
            effects.push(self.schedule(Timer::Advance, delay));
        } else {
            self.reveal = RevealState::Incorrect;
            effects.push(self.schedule(Timer::GameOver, timings.game_over_delay_ms));
        }

        self.touch();
        effects
    }

    fn on_game_over(&mut self) -> Vec<Effect> {
        if self.phase != Phase::Revealing || self.reveal != RevealState::Incorrect {
            return Vec::new();
        }

        let payload = GameOverPayload {
            final_score: self.score.current(),
        };

        self.phase = Phase::GameOver;
        self.board.clear();
        self.cache.clear();
        self.displayed = DisplayedValues::default();
        self.reveal = RevealState::Neutral;
        self.touch();

        vec![Effect::GameOver(payload)]
    }

    // ------------------------------------------------------------------
    // Advance
    // ------------------------------------------------------------------

    fn on_advance(&mut self) -> Vec<Effect> {
        if self.phase != Phase::Revealing || self.reveal != RevealState::Correct {
            return Vec::new();
        }

        match self.cache.take() {
            Ok(item) => self.stage(item),
            Err(_) => {
                // Warm-up never resolved: fetch directly and wait, input stays locked.
                self.awaiting_next = true;
                vec![Effect::FetchNext {
                    generation: self.generation,
                }]
            }
        }
    }

    fn on_next_fetched(&mut self, result: Result<Item, GameError>) -> Vec<Effect> {
        if self.phase != Phase::Revealing || !self.awaiting_next {
            return Vec::new();
        }
        self.awaiting_next = false;

        match result.and_then(|item| item.validate().map(|()| item)) {
            Ok(item) => {
                let preload = item
                    .image_ref
                    .clone()
                    .map(|image_ref| Effect::Preload { image_ref });
                let mut effects: Vec<Effect> = preload.into_iter().collect();
                effects.extend(self.stage(item));
                effects
            }
            // A warm-up that landed while the direct fetch was out still works.
            Err(error) => match self.cache.take() {
                Ok(item) => self.stage(item),
                Err(_) => self.fail(error),
            },
        }
    }

    fn stage(&mut self, item: Item) -> Vec<Effect> {
        self.board.stage_next(item);
        self.phase = Phase::Transitioning;
        self.touch();
        vec![self.schedule(Timer::TransitionDone, self.config.timings.transition_ms)]
    }

    fn on_transition_done(&mut self) -> Vec<Effect> {
        if self.phase != Phase::Transitioning || !self.board.commit_transition() {
            return Vec::new();
        }

        // The item now on the left was revealed last round; show its true
        // metric even if the right reveal had not finished.
        self.runs[Slot::Left.index()] += 1;
        self.displayed.left = self.board.left().and_then(|item| item.metric);
        self.displayed.right = None;
        self.reveal = RevealState::Neutral;
        self.phase = Phase::Ready;
        self.touch();

        let right_metric = self.board.right().and_then(|item| item.metric);
        let mut effects: Vec<Effect> = self.warm().into_iter().collect();
        effects.push(self.animate(
            Slot::Right,
            Some(0),
            right_metric,
            self.config.timings.reveal_ms,
        ));
        effects
    }

    // ------------------------------------------------------------------
    // Animation frames
    // ------------------------------------------------------------------

    fn on_frame(&mut self, slot: Slot, run: u64, value: u64) -> Vec<Effect> {
        let live = matches!(
            self.phase,
            Phase::Ready | Phase::Revealing | Phase::Transitioning
        );
        if !live || self.runs[slot.index()] != run {
            return Vec::new();
        }
        self.displayed.set(slot, Some(value));
        vec![Effect::Display { slot, value }]
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    fn animate(
        &mut self,
        slot: Slot,
        start: Option<u64>,
        end: Option<u64>,
        duration_ms: u64,
    ) -> Effect {
        let run = &mut self.runs[slot.index()];
        *run += 1;
        let run = *run;

        self.displayed.set(slot, end.and(start));

        Effect::Animate {
            generation: self.generation,
            slot,
            run,
            start,
            end,
            duration_ms,
        }
    }

    fn schedule(&self, timer: Timer, delay_ms: u64) -> Effect {
        Effect::Schedule {
            generation: self.generation,
            timer,
            delay_ms,
        }
    }

    fn fail(&mut self, error: GameError) -> Vec<Effect> {
        self.phase = Phase::Error;
        self.pending_verdict = None;
        self.awaiting_next = false;
        self.last_error = Some(error.clone());
        self.touch();
        vec![Effect::Failed { error }]
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Timings;
    use crate::reveal::AnimationState;

    fn item(id: &str, metric: u64) -> Item {
        Item::new(id, format!("Item {id}"), Some(metric))
    }

    fn machine(best: u64) -> GameMachine {
        GameMachine::new(GameConfig::default(), best)
    }

    /// Starts a game and installs a pair with the given metrics.
    fn ready(best: u64, left: u64, right: u64) -> GameMachine {
        let mut game = machine(best);
        game.dispatch(Input::Start);
        let generation = game.generation();
        game.dispatch(Input::PairFetched {
            generation,
            result: Ok(ItemPair::new(item("l", left), item("r", right))),
        });
        assert_eq!(game.phase(), Phase::Ready);
        game
    }

    fn prefetched(game: &mut GameMachine, next: Item) -> Vec<Effect> {
        let generation = game.generation();
        game.dispatch(Input::Prefetched {
            generation,
            result: Ok(next),
        })
    }

    fn fire(game: &mut GameMachine, timer: Timer) -> Vec<Effect> {
        let generation = game.generation();
        game.dispatch(Input::TimerElapsed { generation, timer })
    }

    fn scheduled(effects: &[Effect]) -> Vec<(Timer, u64)> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::Schedule {
                    timer, delay_ms, ..
                } => Some((*timer, *delay_ms)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn start_fetches_pair_then_warms_cache() {
        let mut game = machine(5);
        let effects = game.dispatch(Input::Start);

        let generation = Generation(1);
        assert_eq!(
            effects,
            vec![
                Effect::CancelPending,
                Effect::FetchPair { generation },
                Effect::Prefetch { generation },
            ]
        );
        assert_eq!(game.phase(), Phase::Loading);
        assert!(!game.input_enabled());
        assert_eq!(game.score(), ScoreState { current: 0, best: 5 });
    }

    #[test]
    fn pair_installs_board_and_reveals_both_slots() {
        let mut game = machine(5);
        game.dispatch(Input::Start);
        let effects = game.dispatch(Input::PairFetched {
            generation: game.generation(),
            result: Ok(ItemPair::new(item("l", 100), item("r", 250))),
        });

        let animated: Vec<(Slot, Option<u64>, Option<u64>, u64)> = effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::Animate {
                    slot,
                    start,
                    end,
                    duration_ms,
                    ..
                } => Some((*slot, *start, *end, *duration_ms)),
                _ => None,
            })
            .collect();
        assert_eq!(
            animated,
            vec![
                (Slot::Left, Some(0), Some(100), Timings::DEFAULT_INITIAL_REVEAL_MS),
                (Slot::Right, Some(0), Some(250), Timings::DEFAULT_INITIAL_REVEAL_MS),
            ]
        );

        let snapshot = game.snapshot();
        assert!(snapshot.board.is_populated());
        assert!(snapshot.input_enabled);
        assert_eq!(snapshot.animation, AnimationState::Idle);
        assert_eq!(snapshot.reveal, RevealState::Neutral);
        assert_eq!(snapshot.score, ScoreState { current: 0, best: 5 });
    }

    #[test]
    fn malformed_pair_enters_error() {
        let mut game = machine(0);
        game.dispatch(Input::Start);
        let effects = game.dispatch(Input::PairFetched {
            generation: game.generation(),
            result: Ok(ItemPair::new(item("l", 1), Item::new("r", "  ", Some(2)))),
        });

        assert!(matches!(
            effects.as_slice(),
            [Effect::Failed {
                error: GameError::DataUnavailable(_)
            }]
        ));
        assert_eq!(game.phase(), Phase::Error);
        assert!(game.board().is_empty());
        assert!(!game.input_enabled());
    }

    #[test]
    fn choose_is_ignored_unless_ready() {
        let mut game = machine(0);
        game.dispatch(Input::Start);
        assert!(game.dispatch(Input::Choose(Choice::Higher)).is_empty());

        let mut game = ready(0, 1, 2);
        game.dispatch(Input::Choose(Choice::Higher));
        assert_eq!(game.phase(), Phase::Revealing);

        let before = game.snapshot();
        let revision = game.revision();
        assert!(game.dispatch(Input::Choose(Choice::Lower)).is_empty());
        assert_eq!(game.snapshot(), before);
        assert_eq!(game.revision(), revision);
    }

    #[test]
    fn correct_choice_advances_board() {
        let mut game = ready(5, 100, 250);
        prefetched(&mut game, item("n", 40));

        let effects = game.dispatch(Input::Choose(Choice::Higher));
        assert!(!game.input_enabled());
        assert_eq!(
            scheduled(&effects),
            vec![(Timer::Verdict, Timings::DEFAULT_VERDICT_DELAY_MS)]
        );
        assert!(effects.iter().any(|effect| matches!(
            effect,
            Effect::Animate {
                slot: Slot::Right,
                start: Some(0),
                end: Some(250),
                ..
            }
        )));

        let effects = fire(&mut game, Timer::Verdict);
        assert_eq!(game.reveal(), RevealState::Correct);
        assert_eq!(game.score(), ScoreState { current: 1, best: 5 });
        assert!(!effects.iter().any(|e| matches!(e, Effect::PersistBest { .. })));
        assert_eq!(
            scheduled(&effects),
            vec![(Timer::Advance, Timings::DEFAULT_ADVANCE_DELAY_MS)]
        );

        let effects = fire(&mut game, Timer::Advance);
        assert_eq!(game.phase(), Phase::Transitioning);
        assert_eq!(game.board().next().map(|i| i.id.as_str()), Some("n"));
        assert!(!game.input_enabled());
        assert_eq!(
            scheduled(&effects),
            vec![(Timer::TransitionDone, Timings::DEFAULT_TRANSITION_MS)]
        );

        let effects = fire(&mut game, Timer::TransitionDone);
        let snapshot = game.snapshot();
        assert_eq!(snapshot.phase, Phase::Ready);
        assert_eq!(snapshot.board.left().map(|i| i.id.as_str()), Some("r"));
        assert_eq!(snapshot.board.right().map(|i| i.id.as_str()), Some("n"));
        assert!(snapshot.board.next().is_none());
        assert_eq!(snapshot.reveal, RevealState::Neutral);
        assert!(snapshot.input_enabled);
        assert!(matches!(effects[0], Effect::Prefetch { .. }));
        assert!(matches!(
            effects[1],
            Effect::Animate {
                slot: Slot::Right,
                start: Some(0),
                end: Some(40),
                ..
            }
        ));
    }

    #[test]
    fn new_best_is_persisted() {
        let mut game = ready(0, 100, 250);
        game.dispatch(Input::Choose(Choice::Higher));
        let effects = fire(&mut game, Timer::Verdict);
        assert!(effects.contains(&Effect::PersistBest { best: 1 }));
        assert_eq!(game.score(), ScoreState { current: 1, best: 1 });
    }

    #[test]
    fn tie_is_correct_and_lingers() {
        let mut game = ready(0, 80, 80);
        game.dispatch(Input::Choose(Choice::Lower));
        let effects = fire(&mut game, Timer::Verdict);

        assert_eq!(game.reveal(), RevealState::Correct);
        assert_eq!(game.score().current, 1);
        assert_eq!(
            scheduled(&effects),
            vec![(Timer::Advance, Timings::DEFAULT_TIE_LINGER_MS)]
        );
    }

    #[test]
    fn wrong_guess_ends_game_once_with_score_before_loss() {
        let mut game = ready(0, 100, 300);
        prefetched(&mut game, item("n", 120));

        game.dispatch(Input::Choose(Choice::Higher));
        fire(&mut game, Timer::Verdict);
        fire(&mut game, Timer::Advance);
        fire(&mut game, Timer::TransitionDone);
        assert_eq!(game.score().current, 1);

        game.dispatch(Input::Choose(Choice::Higher));
        let effects = fire(&mut game, Timer::Verdict);
        assert_eq!(game.reveal(), RevealState::Incorrect);
        assert_eq!(
            scheduled(&effects),
            vec![(Timer::GameOver, Timings::DEFAULT_GAME_OVER_DELAY_MS)]
        );
        // No board mutation before the game-over timer.
        assert_eq!(game.board().right().map(|i| i.id.as_str()), Some("n"));

        let effects = fire(&mut game, Timer::GameOver);
        assert_eq!(
            effects,
            vec![Effect::GameOver(GameOverPayload { final_score: 1 })]
        );
        assert_eq!(game.phase(), Phase::GameOver);
        assert!(game.board().is_empty());

        assert!(fire(&mut game, Timer::GameOver).is_empty());
        assert!(game.dispatch(Input::Choose(Choice::Lower)).is_empty());
    }

    #[test]
    fn empty_cache_falls_back_to_direct_fetch() {
        let mut game = ready(0, 10, 20);
        let generation = game.generation();
        game.dispatch(Input::Prefetched {
            generation,
            result: Err(GameError::data_unavailable("offline")),
        });
        assert!(!game.prefetch().is_ready());

        game.dispatch(Input::Choose(Choice::Higher));
        fire(&mut game, Timer::Verdict);
        let effects = fire(&mut game, Timer::Advance);
        assert_eq!(effects, vec![Effect::FetchNext { generation }]);
        assert_eq!(game.phase(), Phase::Revealing);
        assert!(!game.input_enabled());

        let effects = game.dispatch(Input::NextFetched {
            generation,
            result: Ok(item("n", 5).with_image("https://img/n.png")),
        });
        assert!(effects.contains(&Effect::Preload {
            image_ref: "https://img/n.png".into()
        }));
        assert_eq!(game.phase(), Phase::Transitioning);

        fire(&mut game, Timer::TransitionDone);
        assert_eq!(game.phase(), Phase::Ready);
        assert_eq!(game.board().right().map(|i| i.id.as_str()), Some("n"));
    }

    #[test]
    fn failed_fallback_keeps_score_until_new_game() {
        let mut game = ready(0, 10, 20);
        game.dispatch(Input::Choose(Choice::Higher));
        fire(&mut game, Timer::Verdict);
        fire(&mut game, Timer::Advance);

        let generation = game.generation();
        let effects = game.dispatch(Input::NextFetched {
            generation,
            result: Err(GameError::data_unavailable("timeout")),
        });
        assert!(matches!(effects.as_slice(), [Effect::Failed { .. }]));
        assert_eq!(game.phase(), Phase::Error);
        assert!(game.board().is_populated());
        assert_eq!(game.score().current, 1);

        let effects = game.dispatch(Input::Retry);
        assert_eq!(game.phase(), Phase::Loading);
        assert_eq!(game.score().current, 1);
        assert!(effects.contains(&Effect::FetchPair {
            generation: generation.next()
        }));

        game.dispatch(Input::Start);
        assert_eq!(game.score(), ScoreState { current: 0, best: 1 });
    }

    #[test]
    fn retry_outside_error_is_ignored() {
        let mut game = ready(0, 1, 2);
        assert!(game.dispatch(Input::Retry).is_empty());
        assert_eq!(game.phase(), Phase::Ready);
    }

    #[test]
    fn stale_completions_are_dropped_after_restart() {
        let mut game = machine(0);
        game.dispatch(Input::Start);
        let stale = game.generation();
        game.dispatch(Input::Start);

        let effects = game.dispatch(Input::PairFetched {
            generation: stale,
            result: Ok(ItemPair::new(item("l", 1), item("r", 2))),
        });
        assert!(effects.is_empty());
        assert!(game.board().is_empty());
        assert_eq!(game.phase(), Phase::Loading);

        let mut game = ready(0, 1, 2);
        let stale = game.generation();
        game.dispatch(Input::Choose(Choice::Higher));
        game.dispatch(Input::Start);
        let effects = game.dispatch(Input::TimerElapsed {
            generation: stale,
            timer: Timer::Verdict,
        });
        assert!(effects.is_empty());
        assert_eq!(game.score().current, 0);
        assert_eq!(game.reveal(), RevealState::Neutral);
    }

    #[test]
    fn frames_from_superseded_runs_are_dropped() {
        let mut game = ready(0, 100, 250);
        let generation = game.generation();

        // The initial right reveal is run 1; choosing starts run 2.
        game.dispatch(Input::Choose(Choice::Higher));
        let stale = game.dispatch(Input::Frame {
            generation,
            slot: Slot::Right,
            run: 1,
            value: 200,
        });
        assert!(stale.is_empty());
        assert_eq!(game.displayed().right, Some(0));

        let live = game.dispatch(Input::Frame {
            generation,
            slot: Slot::Right,
            run: 2,
            value: 125,
        });
        assert_eq!(
            live,
            vec![Effect::Display {
                slot: Slot::Right,
                value: 125
            }]
        );
        assert_eq!(game.displayed().right, Some(125));
    }

    #[test]
    fn absent_metric_displays_nothing() {
        let mut game = machine(0);
        game.dispatch(Input::Start);
        game.dispatch(Input::PairFetched {
            generation: game.generation(),
            result: Ok(ItemPair::new(item("l", 3), Item::new("r", "Unknown", None))),
        });
        assert_eq!(game.displayed().right, None);
        assert_eq!(game.displayed().left, Some(0));
    }

    #[test]
    fn left_slot_shows_moved_item_after_transition() {
        let mut game = ready(0, 100, 250);
        let generation = game.generation();
        prefetched(&mut game, item("n", 7));
        game.dispatch(Input::Choose(Choice::Higher));
        game.dispatch(Input::Frame {
            generation,
            slot: Slot::Right,
            run: 2,
            value: 250,
        });
        fire(&mut game, Timer::Verdict);
        fire(&mut game, Timer::Advance);
        fire(&mut game, Timer::TransitionDone);

        assert_eq!(game.displayed().left, Some(250));
        assert_eq!(game.displayed().right, Some(0));
    }

    #[test]
    fn slow_reveal_settles_left_on_true_metric() {
        let timings = Timings {
            reveal_ms: 5_000,
            ..Timings::default()
        };
        let mut game = GameMachine::new(GameConfig::with_timings(timings), 0);
        game.dispatch(Input::Start);
        let generation = game.generation();
        game.dispatch(Input::PairFetched {
            generation,
            result: Ok(ItemPair::new(item("l", 100), item("r", 250_000))),
        });
        prefetched(&mut game, item("n", 7));

        game.dispatch(Input::Choose(Choice::Higher));
        // The right reveal is still mid-way when the board advances.
        game.dispatch(Input::Frame {
            generation,
            slot: Slot::Right,
            run: 2,
            value: 149_600,
        });
        fire(&mut game, Timer::Verdict);
        fire(&mut game, Timer::Advance);
        fire(&mut game, Timer::TransitionDone);

        assert_eq!(game.board().left().map(|i| i.id.as_str()), Some("r"));
        assert_eq!(game.displayed().left, Some(250_000));

        // Leftover frames from the unfinished reveal cannot touch either slot.
        let stale = game.dispatch(Input::Frame {
            generation,
            slot: Slot::Right,
            run: 2,
            value: 200_000,
        });
        assert!(stale.is_empty());
        assert_eq!(game.displayed().left, Some(250_000));
        assert_eq!(game.displayed().right, Some(0));
    }

    #[test]
    fn failed_fallback_uses_late_prefetch() {
        let mut game = ready(0, 10, 20);
        game.dispatch(Input::Choose(Choice::Higher));
        fire(&mut game, Timer::Verdict);
        fire(&mut game, Timer::Advance);
        assert_eq!(game.phase(), Phase::Revealing);

        // The warm-up lands while the direct fetch is still outstanding.
        prefetched(&mut game, item("n", 5));
        let generation = game.generation();
        let effects = game.dispatch(Input::NextFetched {
            generation,
            result: Err(GameError::data_unavailable("timeout")),
        });

        assert_eq!(
            scheduled(&effects),
            vec![(Timer::TransitionDone, Timings::DEFAULT_TRANSITION_MS)]
        );
        assert_eq!(game.phase(), Phase::Transitioning);
        assert!(game.snapshot().last_error.is_none());
        assert_eq!(game.board().next().map(|i| i.id.as_str()), Some("n"));
    }
}
