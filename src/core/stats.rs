//! Session statistics

/// Rounds played and won across a session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_won: usize,
}

impl Statistics {
    /// Record a finished round
    pub const fn record(&mut self, won: bool) {
        self.rounds_played += 1;
        if won {
            self.rounds_won += 1;
        }
    }

    /// Percentage of rounds won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            self.rounds_won as f64 / self.rounds_played as f64 * 100.0
        }
    }
}
