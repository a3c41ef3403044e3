use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use uuid::Uuid;

use super::errors::{RelayError, RelayResult};
use super::message::Message;

/// Outcome of a successful enqueue: the created message's id and the
/// recipient's new queue depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendReceipt {
    pub message_id: Uuid,
    pub queued: usize,
}

/// In-memory per-agent message queues
///
/// One queue per known agent, each behind its own mutex so operations on
/// different agents' queues never block one another. The name->queue map
/// itself is fixed at construction and never mutated, which is what makes
/// the per-queue locking sound.
///
/// Queues are unbounded; that is an accepted limitation of the relay, not
/// something to enforce here.
#[derive(Debug)]
pub struct RelayStore {
    queues: HashMap<String, Mutex<Vec<Message>>>,
}

impl RelayStore {
    /// Creates a store with one empty queue per known agent name
    pub fn new(agent_names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let queues = agent_names
            .into_iter()
            .map(|name| (name.into(), Mutex::new(Vec::new())))
            .collect();

        Self { queues }
    }

    /// Appends a message to the recipient's queue
    ///
    /// The recipient name is matched case-insensitively (lower-cased)
    /// against the known agent set. The sender is the caller's resolved
    /// identity, never taken from the request body.
    pub fn enqueue(&self, sender: &str, recipient: &str, payload: &str) -> RelayResult<SendReceipt> {
        if payload.is_empty() {
            return Err(RelayError::InvalidRequest);
        }

        let target = recipient.to_lowercase();
        let queue = self
            .queues
            .get(&target)
            .ok_or_else(|| RelayError::UnknownRecipient(recipient.to_string()))?;

        let msg = Message::new(sender, target.clone(), payload);
        let message_id = msg.id;

        let preview: String = payload.chars().take(100).collect();
        tracing::info!(timestamp = %msg.timestamp, "{} -> {}: {}", sender, target, preview);

        let mut guard = lock(queue);
        guard.push(msg);

        Ok(SendReceipt {
            message_id,
            queued: guard.len(),
        })
    }

    /// Atomically returns and clears the agent's queue, in FIFO order
    ///
    /// The swap happens under the queue's mutex, so no concurrent enqueue
    /// or drain can observe a half-cleared queue, and no message is lost
    /// or duplicated across competing drains.
    pub fn drain(&self, agent: &str) -> Vec<Message> {
        match self.queues.get(agent) {
            Some(queue) => std::mem::take(&mut *lock(queue)),
            None => Vec::new(),
        }
    }

    /// Returns the agent's queue contents in FIFO order without clearing
    pub fn peek(&self, agent: &str) -> Vec<Message> {
        match self.queues.get(agent) {
            Some(queue) => lock(queue).clone(),
            None => Vec::new(),
        }
    }
}

// A poisoned queue mutex only means some thread panicked mid-push; the
// Vec itself is still valid, so recover the guard rather than wedging
// the relay.
fn lock(queue: &Mutex<Vec<Message>>) -> MutexGuard<'_, Vec<Message>> {
    queue.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn store() -> RelayStore {
        RelayStore::new(["alice", "bob"])
    }

    #[test]
    fn enqueue_returns_id_and_depth() {
        let store = store();

        let first = store.enqueue("alice", "bob", "one").unwrap();
        let second = store.enqueue("alice", "bob", "two").unwrap();

        assert_eq!(first.queued, 1);
        assert_eq!(second.queued, 2);
        assert_ne!(first.message_id, second.message_id);
    }

    #[test]
    fn drain_returns_fifo_order() {
        let store = store();
        for payload in ["P1", "P2", "P3"] {
            store.enqueue("alice", "bob", payload).unwrap();
        }

        let drained = store.drain("bob");

        let payloads: Vec<&str> = drained.iter().map(|m| m.message.as_str()).collect();
        assert_eq!(payloads, vec!["P1", "P2", "P3"]);
        assert!(drained.iter().all(|m| m.from == "alice" && m.to == "bob"));
    }

    #[test]
    fn drain_exhausts_queue() {
        let store = store();
        store.enqueue("alice", "bob", "hi").unwrap();

        assert_eq!(store.drain("bob").len(), 1);
        assert!(store.drain("bob").is_empty());
    }

    #[test]
    fn peek_is_non_destructive() {
        let store = store();
        store.enqueue("alice", "bob", "one").unwrap();
        store.enqueue("alice", "bob", "two").unwrap();

        let first_peek = store.peek("bob");
        let second_peek = store.peek("bob");

        assert_eq!(first_peek.len(), 2);
        assert_eq!(
            first_peek.iter().map(|m| m.id).collect::<Vec<_>>(),
            second_peek.iter().map(|m| m.id).collect::<Vec<_>>()
        );

        // A later drain still sees everything peek saw
        assert_eq!(store.drain("bob").len(), 2);
    }

    #[test]
    fn queues_are_isolated() {
        let store = store();
        store.enqueue("bob", "alice", "for alice").unwrap();

        assert!(store.peek("bob").is_empty());
        assert_eq!(store.peek("alice").len(), 1);

        store.drain("bob");
        assert_eq!(store.peek("alice").len(), 1);
    }

    #[test]
    fn unknown_recipient_is_rejected() {
        let store = store();

        let err = store.enqueue("alice", "nobody", "hi").unwrap_err();

        assert_eq!(err, RelayError::UnknownRecipient("nobody".to_string()));
        assert!(store.peek("alice").is_empty());
        assert!(store.peek("bob").is_empty());
    }

    #[test]
    fn empty_payload_is_rejected() {
        let store = store();

        let err = store.enqueue("alice", "bob", "").unwrap_err();

        assert_eq!(err, RelayError::InvalidRequest);
        assert!(store.peek("bob").is_empty());
    }

    #[test]
    fn recipient_name_is_case_insensitive() {
        let store = store();

        store.enqueue("alice", "BOB", "hi").unwrap();

        let drained = store.drain("bob");
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].to, "bob");
    }

    #[test]
    fn concurrent_enqueues_are_not_lost() {
        let store = Arc::new(store());
        let threads = 8;
        let per_thread = 50;

        let handles: Vec<_> = (0..threads)
            .map(|t| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for i in 0..per_thread {
                        store
                            .enqueue("alice", "bob", &format!("{t}-{i}"))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.drain("bob").len(), threads * per_thread);
    }

    #[test]
    fn concurrent_drains_neither_lose_nor_duplicate() {
        let store = Arc::new(store());
        let total = 200;
        for i in 0..total {
            store.enqueue("alice", "bob", &format!("m{i}")).unwrap();
        }

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.drain("bob"))
            })
            .collect();

        let mut seen: Vec<Uuid> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .map(|m| m.id)
            .collect();
        seen.sort();
        seen.dedup();

        assert_eq!(seen.len(), total);
        assert!(store.peek("bob").is_empty());
    }
}
