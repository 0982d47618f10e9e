//! Availability listing and retreat data feeds.

pub mod csv;
pub mod retreats;

pub use csv::{parse_sheet, AvailabilityRecord, AvailabilitySheet, Status};
pub use retreats::{load_retreats, RetreatData, RetreatDate};

use tracing::warn;

use crate::core::error::FetchError;
use crate::core::generation::{Generation, Ticket};

/// What the availability panel shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AvailabilityState {
    #[default]
    Loading,
    Loaded(AvailabilitySheet),
    Failed,
}

/// Availability loads are tagged so that only the newest one lands.
#[derive(Debug, Default, Clone, Copy)]
pub struct AvailabilityLoads {
    generation: Generation,
}

impl AvailabilityLoads {
    pub fn begin(&mut self) -> Ticket {
        self.generation.issue()
    }

    /// `None` when `ticket` has been superseded.
    pub fn finish(
        &self,
        ticket: Ticket,
        fetched: Result<String, FetchError>,
    ) -> Option<AvailabilityState> {
        if !self.generation.is_current(ticket) {
            warn!("discarding stale availability response");
            return None;
        }
        Some(match fetched {
            Ok(body) => AvailabilityState::Loaded(parse_sheet(&body)),
            Err(err) => {
                warn!("availability feed failed: {err}");
                AvailabilityState::Failed
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_load_wins() {
        let mut loads = AvailabilityLoads::default();
        let old = loads.begin();
        let new = loads.begin();
        assert!(loads.finish(old, Ok("2025-06-15,2025-06-22,1,".into())).is_none());
        let state = loads.finish(new, Ok("2025-06-15,2025-06-22,1,".into())).unwrap();
        assert!(matches!(state, AvailabilityState::Loaded(sheet) if sheet.records.len() == 1));
    }

    #[test]
    fn fetch_failure_is_a_rendering_state() {
        let mut loads = AvailabilityLoads::default();
        let t = loads.begin();
        let err = FetchError::Status {
            url: "u".into(),
            status: 500,
        };
        assert_eq!(loads.finish(t, Err(err)), Some(AvailabilityState::Failed));
    }
}
