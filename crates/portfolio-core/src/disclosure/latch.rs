use std::time::Duration;

/// How long a card morph runs before the grid accepts another activation.
pub const MORPH_TRANSITION: Duration = Duration::from_millis(300);

/// Drops activations while a morph transition is running.
///
/// The page arms the latch when it accepts a click and releases it once
/// [`MORPH_TRANSITION`] has elapsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransitionLatch {
    armed: bool,
}

impl TransitionLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the latch. Returns `false` (and changes nothing) if already armed.
    pub fn try_arm(&mut self) -> bool {
        if self.armed {
            return false;
        }
        self.armed = true;
        true
    }

    pub fn release(&mut self) {
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_arm_is_rejected_until_release() {
        let mut latch = TransitionLatch::new();
        assert!(latch.try_arm());
        assert!(!latch.try_arm());
        latch.release();
        assert!(!latch.is_armed());
        assert!(latch.try_arm());
    }
}
