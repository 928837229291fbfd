//! In-memory session store: ordered, bounded per-session turn sequences.
//!
//! The store is the only shared mutable resource in the service. It maps an
//! opaque, caller-supplied session id to an ordered `VecDeque` of turns,
//! backed by a sharded concurrent map. Each operation holds the shard write
//! lock for the duration of its read-modify-write, so operations on the same
//! session id serialize and never interleave, while sessions in different
//! shards proceed concurrently. Shard-level locking is a correctness
//! mechanism, not a scaling guarantee; a very hot shard will contend.
//!
//! Sessions are created implicitly on first reference (get-or-create is part
//! of the contract, not an accident of the lookup) and live for the life of
//! the process. There is no persistence and no idle expiry.

use std::collections::VecDeque;

use dashmap::DashMap;

use parlor_types::chat::ChatTurn;

/// Thread-safe map from session id to its ordered turn sequence.
///
/// None of the operations can fail; there is no backing store to fail
/// against.
pub struct SessionStore {
    sessions: DashMap<String, VecDeque<ChatTurn>>,
    max_history_turns: usize,
}

impl SessionStore {
    /// Create a store retaining at most `max_history_turns` turns per session.
    pub fn new(max_history_turns: usize) -> Self {
        Self {
            sessions: DashMap::new(),
            max_history_turns,
        }
    }

    /// The configured per-session retention limit.
    pub fn max_history_turns(&self) -> usize {
        self.max_history_turns
    }

    /// Return the full current history for a session, in append order.
    ///
    /// An unseen session id yields an empty history; the session entry is
    /// created as a documented side effect (get-or-create).
    pub fn get_history(&self, session_id: &str) -> Vec<ChatTurn> {
        let history = self.sessions.entry(session_id.to_string()).or_default();
        history.iter().cloned().collect()
    }

    /// Append a turn to a session's history, evicting from the front when
    /// the retention limit is exceeded.
    ///
    /// The turn is added first and the sequence trimmed after, so the newest
    /// turn survives whenever the limit is at least 1. Atomic with respect
    /// to concurrent same-session appends and reads: the shard write lock is
    /// held across the push and the trim.
    pub fn append_turn(&self, session_id: &str, turn: ChatTurn) {
        let mut history = self.sessions.entry(session_id.to_string()).or_default();
        history.push_back(turn);
        while history.len() > self.max_history_turns {
            history.pop_front();
        }
    }

    /// Number of turns currently retained for a session (post-eviction).
    ///
    /// Unlike [`get_history`](Self::get_history), this does not create the
    /// session entry.
    pub fn count_messages(&self, session_id: &str) -> usize {
        self.sessions.get(session_id).map(|h| h.len()).unwrap_or(0)
    }
}
