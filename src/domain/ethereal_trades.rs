//! The `EtherealTrades` component.

/// A runnable unit with no configurable state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EtherealTrades;

impl EtherealTrades {
    pub fn new() -> Self {
        Self
    }

    /// Run the component. Always succeeds; safe to call repeatedly.
    pub fn run(&self) -> bool {
        tracing::debug!("ethereal trades run");
        true
    }
}
