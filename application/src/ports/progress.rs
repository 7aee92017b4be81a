//! Turn progress port
//!
//! Lets the presentation layer show a busy indicator while a reply is
//! awaited without the use case knowing anything about terminals. The
//! callbacks bracket exactly the AwaitingReply window: `on_waiting_start`
//! fires after the user turn is appended and before the remote call,
//! `on_waiting_end` fires once the call has returned, success or not.

/// Notifier for the AwaitingReply window of a turn.
pub trait TurnProgress: Send + Sync {
    fn on_waiting_start(&self);
    fn on_waiting_end(&self);
}

/// No-op progress for quiet mode and tests.
pub struct NoTurnProgress;

impl TurnProgress for NoTurnProgress {
    fn on_waiting_start(&self) {}
    fn on_waiting_end(&self) {}
}
