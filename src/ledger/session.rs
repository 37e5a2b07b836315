use indexmap::IndexMap;
use tracing::info;

use crate::domain::Error;
use crate::ledger::Trip;

pub const DEFAULT_TRIP: &str = "Trip 1";

/// A set of isolated trips with exactly one of them active.
#[derive(Debug, Clone)]
pub struct Session {
    trips: IndexMap<String, Trip>,
    active: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        let mut trips = IndexMap::new();
        trips.insert(DEFAULT_TRIP.to_string(), Trip::new(DEFAULT_TRIP));
        Self {
            trips,
            active: DEFAULT_TRIP.to_string(),
        }
    }

    pub fn create_trip(&mut self, name: &str) -> Result<(), Error> {
        if self.trips.contains_key(name) {
            return Err(Error::DuplicateTrip {
                name: name.to_string(),
            });
        }
        self.trips.insert(name.to_string(), Trip::new(name));
        info!(trip = name, "trip created");
        Ok(())
    }

    pub fn select_trip(&mut self, name: &str) -> Result<(), Error> {
        if !self.trips.contains_key(name) {
            return Err(Error::UnknownTrip {
                name: name.to_string(),
            });
        }
        self.active = name.to_string();
        Ok(())
    }

    /// Creates the trip if needed and makes it active.
    pub fn open_trip(&mut self, name: &str) -> Result<(), Error> {
        if !self.trips.contains_key(name) {
            self.create_trip(name)?;
        }
        self.select_trip(name)
    }

    pub fn active_name(&self) -> &str {
        &self.active
    }

    pub fn active(&self) -> &Trip {
        &self.trips[self.active.as_str()]
    }

    pub fn active_mut(&mut self) -> &mut Trip {
        let active = self.active.as_str();
        self.trips
            .get_mut(active)
            .unwrap_or_else(|| unreachable!("active trip {active} is always present"))
    }

    pub fn trip(&self, name: &str) -> Option<&Trip> {
        self.trips.get(name)
    }

    pub fn trips(&self) -> impl Iterator<Item = &Trip> + '_ {
        self.trips.values()
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::Money;

    use super::*;

    #[test]
    fn starts_with_default_trip_active() {
        let session = Session::new();
        assert_eq!(session.active_name(), DEFAULT_TRIP);
        assert_eq!(session.trips().count(), 1);
    }

    #[test]
    fn trips_are_isolated() {
        let mut session = Session::new();
        session.active_mut().add_member("Alice").unwrap();
        session.open_trip("Goa").unwrap();
        session.active_mut().add_member("Alice").unwrap();
        session.active_mut().add_member("Bob").unwrap();
        session
            .active_mut()
            .record_advance("Alice", "Bob", Money::from_units(10))
            .unwrap();

        assert_eq!(session.trip(DEFAULT_TRIP).unwrap().members().count(), 1);
        assert!(session.trip(DEFAULT_TRIP).unwrap().transaction_log().is_empty());
        assert_eq!(session.active().transaction_log().len(), 1);
    }

    #[test]
    fn trip_management_errors() {
        let mut session = Session::new();
        assert!(matches!(
            session.create_trip(DEFAULT_TRIP),
            Err(Error::DuplicateTrip { .. })
        ));
        assert!(matches!(session.select_trip("Nowhere"), Err(Error::UnknownTrip { .. })));
        assert_eq!(session.active_name(), DEFAULT_TRIP);
    }
}
