//! Application-level events and focus tracking.

/// Application-level events delivered through the app channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Expire a transient status notice. The sequence number guards against
    /// a stale timer clearing a newer notice.
    ClearNotice(u64),
}

/// Which editor field receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    To,
    From,
    Message,
}

impl Focus {
    pub fn next(self) -> Focus {
        match self {
            Focus::To => Focus::From,
            Focus::From => Focus::Message,
            Focus::Message => Focus::To,
        }
    }

    pub fn prev(self) -> Focus {
        match self {
            Focus::To => Focus::Message,
            Focus::From => Focus::To,
            Focus::Message => Focus::From,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_both_ways() {
        let mut focus = Focus::To;
        for _ in 0..3 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::To);
        assert_eq!(Focus::To.prev(), Focus::Message);
        assert_eq!(Focus::From.next().prev(), Focus::From);
    }
}
