//! Topic-based event bus implementation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::{RevealEvent, SessionEvent, StateEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Snapshots after observable state changes
    State,
    /// Animator frames (high frequency)
    Reveal,
    /// Run-level signals: game over, failures
    Session,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    State(StateEvent),
    Reveal(RevealEvent),
    Session(SessionEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::State(_) => Topic::State,
            Event::Reveal(_) => Topic::Reveal,
            Event::Session(_) => Topic::Session,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Reveal frames arrive every few milliseconds, so
/// keeping them on their own channel stops them from lagging out the
/// state and session subscribers.
#[derive(Clone)]
pub struct EventBus {
    state: broadcast::Sender<Event>,
    reveal: broadcast::Sender<Event>,
    session: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            state: broadcast::channel(capacity).0,
            reveal: broadcast::channel(capacity).0,
            session: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::State => &self.state,
            Topic::Reveal => &self.reveal,
            Topic::Session => &self.session,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use game_core::{GameOverPayload, Slot};

    use super::*;

    #[tokio::test]
    async fn events_are_routed_by_topic() {
        let bus = EventBus::with_capacity(8);
        let mut session = bus.subscribe(Topic::Session);
        let mut reveal = bus.subscribe(Topic::Reveal);

        bus.publish(Event::Reveal(RevealEvent::Frame {
            slot: Slot::Left,
            value: 3,
        }));
        bus.publish(Event::Session(SessionEvent::GameOver(GameOverPayload {
            final_score: 2,
        })));

        assert!(matches!(
            session.recv().await,
            Ok(Event::Session(SessionEvent::GameOver(GameOverPayload {
                final_score: 2
            })))
        ));
        assert!(matches!(
            reveal.recv().await,
            Ok(Event::Reveal(RevealEvent::Frame { value: 3, .. }))
        ));
        assert!(session.try_recv().is_err());
    }

    #[test]
    fn publish_without_subscribers_is_silent() {
        let bus = EventBus::default();
        bus.publish(Event::Session(SessionEvent::Failed {
            message: "offline".into(),
        }));
    }
}
