//! Bookkeeping for overlapping requests that write into one shared state.
//!
//! Every request is issued a generation. The most recently started request
//! that is still alive owns the state: only it may write its outcome. A
//! request whose future is dropped before it settles hands ownership back to
//! the newest request still in flight, and when none is left the state's
//! `loading` flag is reset.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::runtime::Handle;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Generations {
    next: u64,
    /// Generation allowed to write; 0 when nothing owns the state
    current: u64,
    live: BTreeSet<u64>,
}

/// Issues generations for one state holder
#[derive(Debug, Default)]
pub struct RequestTracker {
    generations: Arc<Mutex<Generations>>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request against `state`. `reset` clears the loading flag and
    /// runs when the request is abandoned and no other request is in flight.
    pub fn begin<S>(&self, state: &Arc<RwLock<S>>, reset: fn(&mut S)) -> InFlight<S>
    where
        S: Send + Sync + 'static,
    {
        let mut generations = lock(&self.generations);
        generations.next += 1;
        let generation = generations.next;
        generations.current = generation;
        generations.live.insert(generation);

        InFlight {
            generations: Arc::clone(&self.generations),
            state: Arc::clone(state),
            generation,
            reset,
            settled: false,
        }
    }

    pub fn in_flight(&self) -> usize {
        lock(&self.generations).live.len()
    }
}

/// A started request. Call [`InFlight::settle`] once its outcome has been
/// handled; dropping it unsettled counts as abandoning the request.
pub struct InFlight<S: Send + Sync + 'static> {
    generations: Arc<Mutex<Generations>>,
    state: Arc<RwLock<S>>,
    generation: u64,
    reset: fn(&mut S),
    settled: bool,
}

impl<S: Send + Sync + 'static> InFlight<S> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether this request still owns the state
    pub fn is_current(&self) -> bool {
        lock(&self.generations).current == self.generation
    }

    pub fn settle(mut self) {
        self.settled = true;
        lock(&self.generations).live.remove(&self.generation);
    }

    /// Drop this request from the live set and report whether the state was
    /// left without any request in flight.
    fn abandon(&self) -> bool {
        let mut generations = lock(&self.generations);
        generations.live.remove(&self.generation);
        if generations.current == self.generation {
            generations.current = generations.live.last().copied().unwrap_or(0);
        }
        generations.live.is_empty()
    }
}

impl<S: Send + Sync + 'static> Drop for InFlight<S> {
    fn drop(&mut self) {
        if self.settled || !self.abandon() {
            return;
        }
        tracing::debug!("Request {} abandoned with nothing in flight", self.generation);

        let reset = self.reset;
        if let Ok(mut state) = self.state.try_write() {
            if lock(&self.generations).live.is_empty() {
                reset(&mut state);
            }
            return;
        }

        // The lock is busy; finish the reset once it frees up.
        let state = Arc::clone(&self.state);
        let generations = Arc::clone(&self.generations);
        match Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    let mut state = state.write().await;
                    if lock(&generations).live.is_empty() {
                        reset(&mut state);
                    }
                });
            }
            Err(_) => {
                tracing::warn!(
                    "Request {} abandoned outside a runtime; loading flag not reset",
                    self.generation
                );
            }
        }
    }
}

fn lock(generations: &Mutex<Generations>) -> MutexGuard<'_, Generations> {
    generations
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
