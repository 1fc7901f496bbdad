//! Team entity
//!
//! Win/loss record with derived statistics.

use std::fmt;

use super::entity::{entity_any, put, Entity, EntityHeader, EntityKind, EntitySnapshot};

#[derive(Debug, Clone)]
pub struct Team {
    header: EntityHeader,
    wins: u32,
    losses: u32,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_record(name, 0, 0)
    }

    /// A team with an existing record
    pub fn with_record(name: impl Into<String>, wins: u32, losses: u32) -> Self {
        let team = Self {
            header: EntityHeader::new(name),
            wins,
            losses,
        };
        tracing::debug!(entity = %team.name(), wins = wins, losses = losses, "Created team");
        team
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn losses(&self) -> u32 {
        self.losses
    }

    /// `false` (record unchanged) once the win counter is full
    pub fn record_win(&mut self) -> bool {
        let Some(wins) = self.wins.checked_add(1) else {
            tracing::warn!(entity = %self.name(), "Win counter full");
            return false;
        };
        self.wins = wins;
        tracing::info!(entity = %self.name(), wins = self.wins, "Recorded a win");
        true
    }

    /// `false` (record unchanged) once the loss counter is full
    pub fn record_loss(&mut self) -> bool {
        let Some(losses) = self.losses.checked_add(1) else {
            tracing::warn!(entity = %self.name(), "Loss counter full");
            return false;
        };
        self.losses = losses;
        tracing::info!(entity = %self.name(), losses = self.losses, "Recorded a loss");
        true
    }

    pub fn total_games(&self) -> u64 {
        u64::from(self.wins) + u64::from(self.losses)
    }

    /// Wins over games played, rounded to 2 decimals; 0.0 before any game.
    ///
    /// Rounds the exact binary ratio half-to-even, so 5-3 (0.625) gives 0.62.
    pub fn win_percentage(&self) -> f64 {
        let total = self.total_games();
        if total == 0 {
            return 0.0;
        }
        let ratio = f64::from(self.wins) / total as f64;
        format!("{:.2}", ratio).parse().unwrap_or(ratio)
    }
}

impl Entity for Team {
    fn header(&self) -> &EntityHeader {
        &self.header
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Team
    }

    fn write_fields(&self, out: &mut EntitySnapshot) {
        put(out, "wins", self.wins);
        put(out, "losses", self.losses);
        put(out, "win_percentage", self.win_percentage());
        put(out, "total_games", self.total_games());
    }

    entity_any!();
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Team(name={}, wins={}, losses={}, win_percentage={}, id={})",
            self.name(),
            self.wins,
            self.losses,
            self.win_percentage(),
            self.id()
        )
    }
}
