//! Staged lookups over injected gazetteer data.
//!
//! The gazetteer is a value handed to whoever needs it, never process-wide
//! state, so every lookup is a pure function of data and key. A miss names
//! the stage that missed; chaining stages short-circuits on the first miss.
//!
//! The two-stage country → capital → population lookup exists in two
//! formulations with identical behavior: one propagates with `?`, the other
//! chains the stages as values. Both are exercised by the tests so they
//! cannot drift apart.

use im::HashMap;
use serde::{Deserialize, Serialize};

use crate::core::errors::LookupError;
use crate::core::outcome::ResultChain;

/// Country/capital/population/mayor reference tables.
///
/// Backed by persistent maps, so cloning a gazetteer to thread it through a
/// pipeline is cheap and the original stays untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gazetteer {
    /// Country name → capital city.
    capitals: HashMap<String, String>,
    /// City name → population, in thousands of inhabitants.
    populations: HashMap<String, u64>,
    /// City name → current mayor.
    mayors: HashMap<String, String>,
}

impl Gazetteer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capital(mut self, country: &str, capital: &str) -> Self {
        self.capitals = self.capitals.update(country.to_string(), capital.to_string());
        self
    }

    pub fn with_population(mut self, city: &str, thousands: u64) -> Self {
        self.populations = self.populations.update(city.to_string(), thousands);
        self
    }

    pub fn with_mayor(mut self, city: &str, mayor: &str) -> Self {
        self.mayors = self.mayors.update(city.to_string(), mayor.to_string());
        self
    }

    /// The demonstration dataset used by the CLI and the tests.
    ///
    /// The tables are deliberately lopsided: Brussels is a capital with no
    /// recorded population or mayor, and Berlin has a population but no
    /// country pointing at it. The gaps are what make the failure paths
    /// reachable.
    pub fn sample() -> Self {
        Self::new()
            .with_capital("France", "Paris")
            .with_capital("Spain", "Madrid")
            .with_capital("The Netherlands", "Amsterdam")
            .with_capital("Belgium", "Brussels")
            .with_population("Paris", 2241)
            .with_population("Madrid", 3165)
            .with_population("Amsterdam", 827)
            .with_population("Berlin", 3562)
            .with_mayor("Paris", "Hidalgo")
            .with_mayor("Madrid", "Carmena")
            .with_mayor("Amsterdam", "van der Laan")
            .with_mayor("Berlin", "Müller")
    }

    /// Stage one: the capital of a country.
    pub fn capital_of(&self, country: &str) -> Result<String, LookupError> {
        self.capitals
            .get(country)
            .cloned()
            .ok_or_else(|| LookupError::CapitalNotFound(country.to_string()))
    }

    /// Stage two: the population of a city, in thousands of inhabitants.
    pub fn population_of(&self, city: &str) -> Result<u64, LookupError> {
        self.populations
            .get(city)
            .copied()
            .ok_or_else(|| LookupError::PopulationNotFound(city.to_string()))
    }

    /// Population of a country's capital, in thousands of inhabitants.
    pub fn population_of_capital(&self, country: &str) -> Result<u64, LookupError> {
        let capital = self.capital_of(country)?;
        let population = self.population_of(&capital)?;
        Ok(population)
    }

    /// [`population_of_capital`](Self::population_of_capital) with the
    /// stages chained as values instead of propagated with `?`.
    ///
    /// Behaviorally equivalent for every input: same successes, same error
    /// kinds. When the capital is missing, the population stage never runs.
    pub fn population_of_capital_chained(&self, country: &str) -> Result<u64, LookupError> {
        self.capital_of(country)
            .chain(|capital| self.population_of(&capital))
    }

    /// The mayor of a country's capital, if both tables have an entry.
    pub fn mayor_of_capital(&self, country: &str) -> Option<&str> {
        self.capitals
            .get(country)
            .and_then(|capital| self.mayors.get(capital))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brussels_population_is_unrecorded_in_the_sample() {
        // Belgium must hit the second-stage failure path.
        let gazetteer = Gazetteer::sample();
        assert_eq!(gazetteer.capital_of("Belgium"), Ok("Brussels".to_string()));
        assert_eq!(
            gazetteer.population_of("Brussels"),
            Err(LookupError::PopulationNotFound("Brussels".to_string()))
        );
    }

    #[test]
    fn builders_do_not_disturb_earlier_entries() {
        let base = Gazetteer::new().with_capital("France", "Paris");
        let extended = base.clone().with_capital("Spain", "Madrid");

        assert_eq!(base.capital_of("France"), Ok("Paris".to_string()));
        assert!(base.capital_of("Spain").is_err());
        assert_eq!(extended.capital_of("Spain"), Ok("Madrid".to_string()));
    }

    #[test]
    fn mayor_lookup_chains_through_the_capital() {
        let gazetteer = Gazetteer::sample();
        assert_eq!(gazetteer.mayor_of_capital("France"), Some("Hidalgo"));
        // Brussels has no recorded mayor; Atlantis has no capital at all.
        assert_eq!(gazetteer.mayor_of_capital("Belgium"), None);
        assert_eq!(gazetteer.mayor_of_capital("Atlantis"), None);
    }

    #[test]
    fn gazetteer_round_trips_through_json() {
        let gazetteer = Gazetteer::sample();
        let json = serde_json::to_string(&gazetteer).unwrap();
        let back: Gazetteer = serde_json::from_str(&json).unwrap();
        assert_eq!(back, gazetteer);
    }
}
