//! Async-resource primitive — app-owned fetch state with a stale-response
//! guard.
//!
//! Every data-bearing page owns the same three pieces of state: the fetched
//! value, a loading flag, and an error message. `Resource<T>` implements that
//! trio once as a small state machine, `Idle → Loading → {Ready, Failed}`,
//! with `Ready` and `Failed` re-enterable through a new [`Resource::begin`].
//!
//! Each `begin` bumps a monotonically increasing sequence number and hands it
//! back as a [`Ticket`]; [`Resource::complete`] discards any result whose
//! ticket is not the latest issued. A slow response from an earlier fetch can
//! therefore never overwrite the state of a later one.

use std::fmt;

/// Fetch lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Proof of a specific in-flight fetch, issued by [`Resource::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Fetch state for one typed value: status, latest value, display error.
#[derive(Debug, Clone)]
pub struct Resource<T> {
    status: Status,
    value: Option<T>,
    error: Option<String>,
    seq: u64,
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self {
            status: Status::Idle,
            value: None,
            error: None,
            seq: 0,
        }
    }
}

impl<T> Resource<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }

    /// The most recent successfully fetched value. Retained across a later
    /// `Failed` transition (stale data stays visible under the error banner).
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Display error from the latest failed fetch. Cleared on `begin` and on a
    /// successful `complete`.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Enter `Loading`: clears the error and issues the ticket for this fetch.
    pub fn begin(&mut self) -> Ticket {
        self.seq += 1;
        self.status = Status::Loading;
        self.error = None;
        Ticket(self.seq)
    }

    /// Settle the fetch identified by `ticket`.
    ///
    /// Returns `false` and leaves state untouched when a newer fetch has been
    /// issued since. On success the value replaces any prior one and the state
    /// becomes `Ready`; on failure the error's display string (or `fallback`
    /// when that is empty) is stored and the state becomes `Failed`.
    pub fn complete<E: fmt::Display>(
        &mut self,
        ticket: Ticket,
        result: Result<T, E>,
        fallback: &str,
    ) -> bool {
        if ticket.0 != self.seq {
            tracing::debug!(ticket = ticket.0, latest = self.seq, "discarding stale response");
            return false;
        }

        match result {
            Ok(value) => {
                self.value = Some(value);
                self.error = None;
                self.status = Status::Ready;
            }
            Err(e) => {
                let msg = e.to_string();
                self.error = Some(if msg.is_empty() {
                    fallback.to_string()
                } else {
                    msg
                });
                self.status = Status::Failed;
            }
        }
        true
    }
}
