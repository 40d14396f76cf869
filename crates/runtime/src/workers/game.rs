//! Game worker that owns the authoritative [`GameMachine`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), feeds them
//! and every task completion through [`GameMachine::dispatch`], and performs
//! the returned [`Effect`]s: spawning fetches, timers and animator runs,
//! publishing events, queueing score saves and preloading images.
//!
//! All machine state lives in this task, so nothing is locked. Spawned tasks
//! report back over an internal completion channel that is drained by the
//! same loop as the command channel, one message at a time.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, error, info, trace, warn};

use game_core::{Choice, Effect, GameError, GameMachine, GameSnapshot, Generation, Input, Phase, Slot};

use super::persistence::ScoreWriter;
use crate::animation;
use crate::api::{ImagePreloader, ItemSource, ProviderError, ProviderResult};
use crate::events::{Event, EventBus, RevealEvent, SessionEvent, StateEvent};

/// Commands that can be sent to the game worker
pub enum Command {
    /// Begin a new game.
    Start { reply: oneshot::Sender<()> },
    /// Submit a guess; replies whether it was accepted.
    Choose {
        choice: Choice,
        reply: oneshot::Sender<bool>,
    },
    /// Reload after a failure; replies whether the game was in the error state.
    Retry { reply: oneshot::Sender<bool> },
    /// Query the current game state (read-only).
    QueryState { reply: oneshot::Sender<GameSnapshot> },
}

/// Timing knobs the worker needs beyond the machine's own timings.
#[derive(Debug, Clone, Copy)]
pub struct WorkerTimings {
    pub fetch_timeout: Duration,
    pub frame_interval: Duration,
}

/// Background task that processes game commands and completions.
pub struct GameWorker {
    machine: GameMachine,
    source: Arc<dyn ItemSource>,
    preloader: Arc<dyn ImagePreloader>,
    scores: ScoreWriter,
    event_bus: EventBus,
    command_rx: mpsc::Receiver<Command>,
    completion_tx: mpsc::UnboundedSender<Input>,
    completion_rx: mpsc::UnboundedReceiver<Input>,
    tasks: JoinSet<()>,
    timings: WorkerTimings,
    published_revision: u64,
}

impl GameWorker {
    pub fn new(
        machine: GameMachine,
        source: Arc<dyn ItemSource>,
        preloader: Arc<dyn ImagePreloader>,
        scores: ScoreWriter,
        event_bus: EventBus,
        command_rx: mpsc::Receiver<Command>,
        timings: WorkerTimings,
    ) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        let published_revision = machine.revision();
        Self {
            machine,
            source,
            preloader,
            scores,
            event_bus,
            command_rx,
            completion_tx,
            completion_rx,
            tasks: JoinSet::new(),
            timings,
            published_revision,
        }
    }

    /// Main worker loop. Exits once every handle has been dropped.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                command = self.command_rx.recv() => match command {
                    Some(command) => self.handle_command(command),
                    None => break,
                },
                Some(input) = self.completion_rx.recv() => {
                    self.apply(input);
                }
                Some(joined) = self.tasks.join_next(), if !self.tasks.is_empty() => {
                    Self::reap(joined);
                }
            }
        }

        self.tasks.shutdown().await;
        debug!(target: "runtime::worker", "Game worker stopped");
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::Start { reply } => {
                self.apply(Input::Start);
                info!(
                    target: "runtime::worker",
                    generation = %self.machine.generation(),
                    best = self.machine.score().best,
                    "Started new game"
                );
                let _ = reply.send(());
            }
            Command::Choose { choice, reply } => {
                let accepted = self.machine.input_enabled();
                if accepted {
                    debug!(target: "runtime::worker", %choice, "Choice accepted");
                } else {
                    debug!(
                        target: "runtime::worker",
                        %choice,
                        phase = %self.machine.phase(),
                        "Choice ignored while input is locked"
                    );
                }
                self.apply(Input::Choose(choice));
                let _ = reply.send(accepted);
            }
            Command::Retry { reply } => {
                let accepted = self.machine.phase() == Phase::Error;
                self.apply(Input::Retry);
                if accepted {
                    info!(
                        target: "runtime::worker",
                        generation = %self.machine.generation(),
                        score = self.machine.score().current,
                        "Retrying after failure"
                    );
                }
                let _ = reply.send(accepted);
            }
            Command::QueryState { reply } => {
                let _ = reply.send(self.machine.snapshot());
            }
        }
    }

    fn apply(&mut self, input: Input) {
        let label = input.label();
        let effects = self.machine.dispatch(input);

        if !effects.is_empty() {
            trace!(
                target: "runtime::worker",
                input = label,
                effects = effects.len(),
                phase = %self.machine.phase(),
                "Dispatched input"
            );
        }

        self.publish_state();
        for effect in effects {
            self.execute(effect);
        }
    }

    fn publish_state(&mut self) {
        let revision = self.machine.revision();
        if revision == self.published_revision {
            return;
        }
        self.published_revision = revision;
        self.event_bus.publish(Event::State(StateEvent::Changed {
            revision,
            snapshot: Box::new(self.machine.snapshot()),
        }));
    }

    fn execute(&mut self, effect: Effect) {
        match effect {
            Effect::CancelPending => {
                if !self.tasks.is_empty() {
                    debug!(
                        target: "runtime::worker",
                        pending = self.tasks.len(),
                        "Cancelling pending tasks"
                    );
                }
                self.tasks.abort_all();
            }
            Effect::FetchPair { generation } => {
                let source = Arc::clone(&self.source);
                self.spawn_fetch(
                    "pair",
                    async move { source.fetch_pair().await },
                    move |result| Input::PairFetched { generation, result },
                );
            }
            Effect::Prefetch { generation } => {
                let source = Arc::clone(&self.source);
                self.spawn_fetch(
                    "prefetch",
                    async move { source.fetch_one().await },
                    move |result| Input::Prefetched { generation, result },
                );
            }
            Effect::FetchNext { generation } => {
                debug!(
                    target: "runtime::worker",
                    %generation,
                    error = %GameError::EmptyCache,
                    "Falling back to a direct fetch"
                );
                let source = Arc::clone(&self.source);
                self.spawn_fetch(
                    "next",
                    async move { source.fetch_one().await },
                    move |result| Input::NextFetched { generation, result },
                );
            }
            Effect::Schedule {
                generation,
                timer,
                delay_ms,
            } => {
                let tx = self.completion_tx.clone();
                self.tasks.spawn(async move {
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                    let _ = tx.send(Input::TimerElapsed { generation, timer });
                });
            }
            Effect::Animate {
                generation,
                slot,
                run,
                start,
                end,
                duration_ms,
            } => self.spawn_animation(generation, slot, run, start, end, duration_ms),
            Effect::Display { slot, value } => {
                self.event_bus
                    .publish(Event::Reveal(RevealEvent::Frame { slot, value }));
            }
            Effect::Preload { image_ref } => {
                trace!(target: "runtime::worker", image = %image_ref, "Preloading image");
                self.preloader.preload(&image_ref);
            }
            Effect::PersistBest { best } => {
                debug!(target: "runtime::worker", best, "New best score");
                self.scores.save(best);
            }
            Effect::GameOver(payload) => {
                info!(
                    target: "runtime::worker",
                    final_score = payload.final_score,
                    best = self.machine.score().best,
                    "Game over"
                );
                self.event_bus
                    .publish(Event::Session(SessionEvent::GameOver(payload)));
            }
            Effect::Failed { error } => {
                warn!(
                    target: "runtime::worker",
                    %error,
                    score = self.machine.score().current,
                    "Game halted, waiting for retry"
                );
                self.event_bus.publish(Event::Session(SessionEvent::Failed {
                    message: error.to_string(),
                }));
            }
        }
    }

    fn spawn_fetch<T, Fut, F>(&mut self, kind: &'static str, fetch: Fut, complete: F)
    where
        T: Send + 'static,
        Fut: Future<Output = ProviderResult<T>> + Send + 'static,
        F: FnOnce(Result<T, GameError>) -> Input + Send + 'static,
    {
        let tx = self.completion_tx.clone();
        let timeout = self.timings.fetch_timeout;

        self.tasks.spawn(async move {
            let result = match tokio::time::timeout(timeout, fetch).await {
                Ok(result) => result,
                Err(_) => Err(ProviderError::Timeout(timeout)),
            };
            if let Err(error) = &result {
                warn!(target: "runtime::worker", fetch = kind, %error, "Fetch failed");
            }
            let _ = tx.send(complete(result.map_err(GameError::from)));
        });
    }

    fn spawn_animation(
        &mut self,
        generation: Generation,
        slot: Slot,
        run: u64,
        start: Option<u64>,
        end: Option<u64>,
        duration_ms: u64,
    ) {
        let Some((start, end)) = start.zip(end) else {
            return;
        };

        let tx = self.completion_tx.clone();
        let on_frame = move |value| {
            let _ = tx.send(Input::Frame {
                generation,
                slot,
                run,
                value,
            });
        };

        self.tasks.spawn(animation::run(
            start,
            end,
            Duration::from_millis(duration_ms),
            self.timings.frame_interval,
            on_frame,
        ));
    }

    fn reap(joined: Result<(), JoinError>) {
        if let Err(err) = joined
            && err.is_panic()
        {
            error!(target: "runtime::worker", error = %err, "Runtime task panicked");
        }
    }
}
