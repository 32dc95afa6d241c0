use std::fmt;

/// Identifies one submission. Later submissions get larger tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Remembers the newest submission so an older reply that lands late can be dropped.
#[derive(Debug, Default)]
pub struct RequestTracker {
    issued: u64,
    latest: Option<RequestToken>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> RequestToken {
        self.issued += 1;
        let token = RequestToken(self.issued);
        self.latest = Some(token);
        token
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest == Some(token)
    }

    /// Consumes `token` if it is the newest one still waiting. Returns `false` for stale tokens.
    pub fn settle(&mut self, token: RequestToken) -> bool {
        if self.is_current(token) {
            self.latest = None;
            true
        } else {
            false
        }
    }

    pub fn in_flight(&self) -> Option<RequestToken> {
        self.latest
    }
}
