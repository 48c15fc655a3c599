// Exemplary equivalents of a mass of CO2-equivalent emissions
use serde::Serialize;

/// EPA: 8.89e-3 t CO2/gallon / 22 mpg / 0.988 CO2 share of CO2e
pub const KG_CO2E_PER_CAR_MILE: f64 = 0.409;
/// 32-inch LCD flat screen TV
pub const KG_CO2E_PER_TV_HOUR: f64 = 0.097;
/// EPA: 8.35 t CO2 per home per year over 52 weeks
pub const KG_CO2E_PER_HOUSEHOLD_WEEK: f64 = 160.58;

const MINUTES_PER_DAY: f64 = 1440.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EquivalenceFigures {
    pub car_miles: f64,
    /// Hours of TV watched
    pub tv_time: f64,
    /// Percent of a weekly US household footprint
    pub household_fraction: f64,
}

/// No validation: negative or absurd inputs scale linearly like any other.
pub fn equivalences(emissions_kg: f64) -> EquivalenceFigures {
    EquivalenceFigures {
        car_miles: emissions_kg / KG_CO2E_PER_CAR_MILE,
        tv_time: emissions_kg / KG_CO2E_PER_TV_HOUR,
        household_fraction: emissions_kg / KG_CO2E_PER_HOUSEHOLD_WEEK * 100.0,
    }
}

impl EquivalenceFigures {
    pub fn car_miles_label(&self) -> String {
        format!("{:.0} miles", self.car_miles)
    }

    pub fn tv_time_label(&self) -> String {
        let minutes = self.tv_time * 60.0;
        if minutes >= MINUTES_PER_DAY {
            format!("{:.1} days", minutes / MINUTES_PER_DAY)
        } else {
            format!("{:.0} minutes", minutes)
        }
    }

    pub fn household_fraction_label(&self) -> String {
        format!("{:.2} %", self.household_fraction)
    }
}
