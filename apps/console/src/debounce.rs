//! # Search Debouncer
//!
//! Cancel-and-reschedule deadline for the search box. Each keystroke pushes
//! the deadline out by the full window; the query only commits once input
//! has been quiet for that long.
//!
//! ## Timeline (500ms window)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  t=0ms    search "p"      deadline = 500ms                              │
//! │  t=200ms  search "pe"     deadline = 700ms   (previous one dropped)     │
//! │  t=300ms  search "pen"    deadline = 800ms                              │
//! │  t=800ms  fired()         commit "pen", deadline cleared                │
//! │                                                                         │
//! │  One commit for three keystrokes. Never more than one per window.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `fired()` is meant to sit in a `tokio::select!` next to the input
//! reader. With no deadline it never completes, so the select arm is inert.

use std::time::Duration;

use tokio::time::Instant;

/// Single pending deadline, reset on every schedule.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            deadline: None,
        }
    }

    /// Starts or restarts the window from now.
    pub fn schedule(&mut self) {
        self.deadline = Some(Instant::now() + self.delay);
    }

    /// Drops the pending deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Waits for the pending deadline and clears it.
    ///
    /// Cancel safe: if the future is dropped before the deadline passes the
    /// deadline stays pending.
    pub async fn fired(&mut self) {
        match self.deadline {
            Some(deadline) => {
                tokio::time::sleep_until(deadline).await;
                self.deadline = None;
            }
            None => std::future::pending::<()>().await,
        }
    }
}
