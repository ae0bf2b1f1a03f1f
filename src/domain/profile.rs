use serde::{Deserialize, Serialize};

use crate::domain::common::{Displayable, NamedEntity};
use crate::errors::ValidationError;

pub const MIN_AGE: u8 = 16;
pub const MAX_AGE: u8 = 100;

/// Vehicle models offered by the profile form; any non-empty custom model is also accepted.
pub const VEHICLE_PRESETS: &[&str] = &[
    "Honda Shine 125",
    "Hero Splendor Plus",
    "Bajaj Pulsar 125",
    "TVS Apache RTR 160",
    "Yamaha FZ-S",
    "Royal Enfield Classic 350",
    "KTM Duke 200",
    "Honda Activa 6G",
    "TVS Jupiter",
    "Suzuki Access 125",
    "Honda City",
    "Maruti Swift",
    "Hyundai i20",
    "Tata Nexon",
];

/// Unvalidated profile form values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: i64,
    #[serde(default)]
    pub vehicle: String,
    #[serde(default)]
    pub city: String,
}

impl ProfileInput {
    pub fn new(
        name: impl Into<String>,
        age: i64,
        vehicle: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            vehicle: vehicle.into(),
            city: city.into(),
        }
    }
}

/// A completed profile. Replaced wholesale on edit, never patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    name: String,
    age: u8,
    vehicle: String,
    city: String,
}

impl UserProfile {
    pub fn new(input: &ProfileInput) -> Result<Self, ValidationError> {
        let name = required(&input.name, "name")?;
        let vehicle = required(&input.vehicle, "vehicle")?;
        let city = required(&input.city, "city")?;
        if !(i64::from(MIN_AGE)..=i64::from(MAX_AGE)).contains(&input.age) {
            return Err(ValidationError::OutOfRange {
                field: "age",
                value: input.age,
                min: MIN_AGE.into(),
                max: MAX_AGE.into(),
            });
        }
        Ok(Self {
            name,
            age: input.age as u8,
            vehicle,
            city,
        })
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn vehicle(&self) -> &str {
        &self.vehicle
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// Form values that reproduce this profile, used to pre-fill an edit.
    pub fn to_input(&self) -> ProfileInput {
        ProfileInput::new(
            self.name.clone(),
            self.age.into(),
            self.vehicle.clone(),
            self.city.clone(),
        )
    }
}

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

impl NamedEntity for UserProfile {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for UserProfile {
    fn display_label(&self) -> String {
        format!("{} ({}, {})", self.name, self.vehicle, self.city)
    }
}
