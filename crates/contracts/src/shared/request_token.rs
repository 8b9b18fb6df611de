//! Guard against out-of-order responses at the fetch boundary.
//!
//! Every request takes a token from a [`RequestSequence`]; when the response
//! arrives it is applied only if no newer request was started meanwhile.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request; all earlier tokens become stale.
    pub fn begin(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub fn is_latest(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }

    /// Passes `result` through for the latest request, drops it otherwise.
    pub fn accept<T>(&self, token: RequestToken, result: T) -> Option<T> {
        if self.is_latest(token) {
            Some(result)
        } else {
            log::debug!(
                "discarding stale response #{} (latest is #{})",
                token.0,
                self.latest
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slow_earlier_response_is_discarded() {
        let mut seq = RequestSequence::new();
        let slow = seq.begin();
        let fast = seq.begin();

        assert_eq!(seq.accept(fast, "fast"), Some("fast"));
        assert_eq!(seq.accept(slow, "slow"), None);
    }

    #[test]
    fn test_tokens_increase() {
        let mut seq = RequestSequence::new();
        let a = seq.begin();
        let b = seq.begin();
        assert!(b > a);
        assert!(!seq.is_latest(a));
        assert!(seq.is_latest(b));
    }
}
