//! Status page model.
//!
//! Holds what the status page knows about the backend: the health result
//! (`None` while the first check is in flight) and the latest database
//! check. Each database check gets a ticket; while one is in flight another
//! cannot start, and whichever response resolves last is the one shown.

use crate::domain::{DbCheckResponse, HealthResponse, HealthStatus, ThemePreference, APP_NAME};
use crate::ui::viewmodel::{StatusViewModel, ThemeToggleViewModel};

/// Identifies one database check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DbTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct StatusBoard {
    api_url: String,
    health: Option<HealthStatus>,
    db: Option<DbCheckResponse>,
    db_loading: bool,
    db_resolved_by: Option<DbTicket>,
    next_ticket: u64,
}

impl StatusBoard {
    #[must_use]
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }

    pub fn set_health(&mut self, response: &HealthResponse) {
        tracing::debug!(status = ?response.status, "health resolved");
        self.health = Some(response.status);
    }

    #[must_use]
    pub const fn health(&self) -> Option<HealthStatus> {
        self.health
    }

    #[must_use]
    pub const fn is_db_loading(&self) -> bool {
        self.db_loading
    }

    #[must_use]
    pub const fn db(&self) -> Option<&DbCheckResponse> {
        self.db.as_ref()
    }

    /// Ticket of the check whose response is currently shown.
    #[must_use]
    pub const fn db_resolved_by(&self) -> Option<DbTicket> {
        self.db_resolved_by
    }

    /// Starts a database check: clears the previous result and enters the
    /// loading state. Returns `None` while a check is already in flight.
    pub fn begin_db_check(&mut self) -> Option<DbTicket> {
        if self.db_loading {
            tracing::debug!("db check already in flight");
            return None;
        }

        let ticket = DbTicket(self.next_ticket);
        self.next_ticket += 1;
        self.db_loading = true;
        self.db = None;
        Some(ticket)
    }

    /// Records a database check response and leaves the loading state.
    pub fn finish_db_check(&mut self, ticket: DbTicket, response: DbCheckResponse) {
        tracing::debug!(ticket = ticket.0, ok = response.ok, "db check resolved");
        self.db = Some(response);
        self.db_resolved_by = Some(ticket);
        self.db_loading = false;
    }

    #[must_use]
    pub fn compute_viewmodel(&self, theme: ThemePreference) -> StatusViewModel {
        StatusViewModel {
            app_name: APP_NAME,
            api_url: self.api_url.clone(),
            health: self.health,
            db_loading: self.db_loading,
            db: self.db.clone(),
            theme_toggle: ThemeToggleViewModel::for_theme(theme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_check_lifecycle() {
        let mut board = StatusBoard::new("http://localhost:3001");
        let ticket = board.begin_db_check().unwrap();
        assert!(board.is_db_loading());
        assert!(board.begin_db_check().is_none());

        board.finish_db_check(ticket, DbCheckResponse::failed("timeout"));
        assert!(!board.is_db_loading());
        assert_eq!(board.db_resolved_by(), Some(ticket));

        let next = board.begin_db_check().unwrap();
        assert!(next > ticket);
        assert!(board.db().is_none());
    }

    #[test]
    fn viewmodel_reflects_health() {
        let mut board = StatusBoard::new("http://api");
        assert_eq!(board.compute_viewmodel(ThemePreference::Light).health, None);

        board.set_health(&HealthResponse::error());
        let vm = board.compute_viewmodel(ThemePreference::Light);
        assert_eq!(vm.health, Some(HealthStatus::Error));
        assert_eq!(vm.theme_toggle.label, "Switch to dark theme");
    }
}
