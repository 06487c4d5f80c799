//! Delegate interface for countdown observers

/// Event sink for countdown progress.
///
/// The delegate is a non-owning observer handed in by the owner of the
/// control; callbacks fire synchronously from the tick handler, never
/// queued or batched. `ticked` arrives once per second while a countdown is
/// running, `completed` exactly once when the remaining count reaches zero
/// during an active countdown.
pub trait CountdownDelegate: Send {
    fn ticked(&mut self, remaining: u32);
    fn completed(&mut self);
}
