//! Request fencing for out-of-order responses.
//!
//! Every fetch is stamped with a fresh token; when a response arrives only
//! the most recently issued token is applied.

/// Monotonic id of one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    last_issued: u64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token that supersedes every earlier one.
    pub fn issue(&mut self) -> RequestToken {
        self.last_issued += 1;
        RequestToken(self.last_issued)
    }

    /// The most recently issued token.
    pub fn last_issued(&self) -> RequestToken {
        RequestToken(self.last_issued)
    }

    /// Whether a response stamped with `token` should be applied.
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.last_issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_is_current() {
        let mut seq = RequestSequencer::new();
        let first = seq.issue();
        assert!(seq.is_current(first));

        let second = seq.issue();
        assert!(second > first);
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_fresh_sequencer_accepts_nothing_issued_elsewhere() {
        let mut other = RequestSequencer::new();
        let foreign = other.issue();
        other.issue();

        let mut seq = RequestSequencer::new();
        seq.issue();
        seq.issue();
        seq.issue();
        assert!(!seq.is_current(foreign));
    }
}
