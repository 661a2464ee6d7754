//! Elapsed game clock

/// Wall-clock time spent in the current session
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct GameClock {
    pub elapsed_secs: f32,
}

impl GameClock {
    pub fn advance(&mut self, delta_secs: f32) {
        if delta_secs > 0.0 {
            self.elapsed_secs += delta_secs;
        }
    }

    /// Elapsed time as `MM:SS`
    pub fn display(&self) -> String {
        let total = self.elapsed_secs.floor() as u64;
        format!("{:02}:{:02}", total / 60, total % 60)
    }
}
