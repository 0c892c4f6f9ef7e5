//! One-shot reveal state for scroll-triggered entrance animations.

/// Whether an element has played its entrance transition yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RevealLatch {
    #[default]
    Pending,
    Revealed,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self, RevealLatch::Revealed)
    }

    /// Feed one viewport observation.
    ///
    /// Returns `true` exactly once: on the first observation where the
    /// element intersects the viewport. Every later call returns `false`,
    /// whether the element left the viewport or came back into it.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        match self {
            RevealLatch::Pending if intersecting => {
                *self = RevealLatch::Revealed;
                true
            }
            _ => false,
        }
    }

    /// Force the revealed state, used when no observer is available.
    pub fn reveal(&mut self) -> bool {
        self.observe(true)
    }

    /// CSS class for the current state.
    pub fn css_class(&self) -> &'static str {
        match self {
            RevealLatch::Pending => "reveal-pending",
            RevealLatch::Revealed => "reveal-pending revealed",
        }
    }
}
