use serde::{Deserialize, Serialize};

/// The five sensor readings, in the fixed order the charts display them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorField {
    WindSpeed,
    TheoreticalPowerCurve,
    WindDirection,
    LvActivePower,
    PowerDeficit,
}

impl SensorField {
    /// Display order. Chart labels and form rows iterate this, never the
    /// enum's discriminant order by accident.
    pub const ALL: [SensorField; 5] = [
        SensorField::WindSpeed,
        SensorField::TheoreticalPowerCurve,
        SensorField::WindDirection,
        SensorField::LvActivePower,
        SensorField::PowerDeficit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SensorField::WindSpeed => "Wind Speed",
            SensorField::TheoreticalPowerCurve => "Theoretical Power Curve",
            SensorField::WindDirection => "Wind Direction",
            SensorField::LvActivePower => "LV Active Power",
            SensorField::PowerDeficit => "Power Deficit",
        }
    }

    /// Stable name used for form input elements.
    pub fn name(&self) -> &'static str {
        match self {
            SensorField::WindSpeed => "wind_speed",
            SensorField::TheoreticalPowerCurve => "theoretical_power_curve",
            SensorField::WindDirection => "wind_direction",
            SensorField::LvActivePower => "lv_active_power",
            SensorField::PowerDeficit => "power_deficit",
        }
    }
}

/// Raw text entered per reading. Values stay strings end to end; parsing and
/// coercion are left entirely to the charting backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub wind_speed: String,
    pub theoretical_power_curve: String,
    pub wind_direction: String,
    pub lv_active_power: String,
    pub power_deficit: String,
}

impl FormState {
    pub fn value(&self, field: SensorField) -> &str {
        match field {
            SensorField::WindSpeed => &self.wind_speed,
            SensorField::TheoreticalPowerCurve => &self.theoretical_power_curve,
            SensorField::WindDirection => &self.wind_direction,
            SensorField::LvActivePower => &self.lv_active_power,
            SensorField::PowerDeficit => &self.power_deficit,
        }
    }

    /// Overwrites one field unconditionally. No trimming, no validation.
    pub fn set(&mut self, field: SensorField, value: String) {
        match field {
            SensorField::WindSpeed => self.wind_speed = value,
            SensorField::TheoreticalPowerCurve => self.theoretical_power_curve = value,
            SensorField::WindDirection => self.wind_direction = value,
            SensorField::LvActivePower => self.lv_active_power = value,
            SensorField::PowerDeficit => self.power_deficit = value,
        }
    }

    /// All five values in display order.
    pub fn values(&self) -> [&str; 5] {
        SensorField::ALL.map(|field| self.value(field))
    }

    /// How many readings have been entered so far.
    pub fn filled_count(&self) -> usize {
        self.values().iter().filter(|v| !v.is_empty()).count()
    }
}
