use crate::domain::event::MenuEvent;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use tracing::{debug, warn};

/// Send an event, logging instead of failing when nobody is listening.
pub fn publish_event<T: std::fmt::Debug>(sender: &Sender<T>, event: T) {
    if let Err(e) = sender.send(event) {
        warn!("Failed to publish event, receiver dropped: {:?}", e.0);
    }
}

/// Collects published menu events for later inspection, e.g. to show
/// confirmations after an action or to audit what happened in a session.
pub struct EventStore {
    events: Vec<MenuEvent>,
    receiver: Receiver<MenuEvent>,
}

impl EventStore {
    pub fn new(receiver: Receiver<MenuEvent>) -> Self {
        EventStore {
            events: Vec::new(),
            receiver,
        }
    }

    /// Move every event that has arrived so far into the store without
    /// blocking. Returns how many were collected.
    pub fn collect_pending(&mut self) -> usize {
        let before = self.events.len();
        loop {
            match self.receiver.try_recv() {
                Ok(event) => {
                    debug!("Event received: {:?}", event);
                    self.events.push(event);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        self.events.len() - before
    }

    pub fn events(&self) -> &[MenuEvent] {
        &self.events
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }
}

/// Channel pair wired for a catalog: give the sender to the catalog, keep
/// the store.
pub fn create_event_store() -> (EventStore, Sender<MenuEvent>) {
    let (sender, receiver) = mpsc::channel();
    (EventStore::new(receiver), sender)
}
