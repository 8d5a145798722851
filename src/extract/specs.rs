//! Main specification table (year, mileage, engine, ...)
//!
//! Row labels are localized; [`SPEC_LABELS`] maps each known label to its
//! canonical field. Rows with any other label are ignored.

use crate::extract::dom::{select_all, select_first, stripped_text};
use scraper::Html;
use serde::{Deserialize, Serialize};

/// Canonical fields of the specification table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecField {
    Year,
    Mileage,
    BodyType,
    Color,
    Engine,
    Transmission,
    DriveType,
    SteeringWheel,
    Condition,
    CustomsCleared,
    Exchange,
    Availability,
    CarLocation,
    RegistrationCountry,
    OtherInfo,
    Vin,
}

/// Lower-cased row label to canonical field
pub const SPEC_LABELS: [(&str, SpecField); 16] = [
    ("год выпуска", SpecField::Year),
    ("пробег", SpecField::Mileage),
    ("кузов", SpecField::BodyType),
    ("цвет", SpecField::Color),
    ("двигатель", SpecField::Engine),
    ("коробка", SpecField::Transmission),
    ("привод", SpecField::DriveType),
    ("руль", SpecField::SteeringWheel),
    ("состояние", SpecField::Condition),
    ("таможня", SpecField::CustomsCleared),
    ("обмен", SpecField::Exchange),
    ("наличие", SpecField::Availability),
    ("регион, город", SpecField::CarLocation),
    ("учёт", SpecField::RegistrationCountry),
    ("прочее", SpecField::OtherInfo),
    ("vin", SpecField::Vin),
];

/// Unit appended to the raw mileage value
const MILEAGE_UNIT: &str = "км";

impl SpecField {
    /// Looks up a row label; the label is matched case-insensitively
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().to_lowercase();
        SPEC_LABELS
            .iter()
            .find(|(known, _)| *known == label)
            .map(|(_, field)| *field)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MainSpecs {
    pub year: Option<String>,
    pub mileage: Option<String>,
    pub body_type: Option<String>,
    pub color: Option<String>,
    pub engine: Option<String>,
    pub transmission: Option<String>,
    pub drive_type: Option<String>,
    pub steering_wheel: Option<String>,
    pub condition: Option<String>,
    pub customs_cleared: Option<String>,
    pub exchange: Option<String>,
    pub availability: Option<String>,
    pub car_location: Option<String>,
    pub registration_country: Option<String>,
    pub other_info: Option<String>,
    pub vin: Option<String>,
}

impl MainSpecs {
    pub fn field_mut(&mut self, field: SpecField) -> &mut Option<String> {
        match field {
            SpecField::Year => &mut self.year,
            SpecField::Mileage => &mut self.mileage,
            SpecField::BodyType => &mut self.body_type,
            SpecField::Color => &mut self.color,
            SpecField::Engine => &mut self.engine,
            SpecField::Transmission => &mut self.transmission,
            SpecField::DriveType => &mut self.drive_type,
            SpecField::SteeringWheel => &mut self.steering_wheel,
            SpecField::Condition => &mut self.condition,
            SpecField::CustomsCleared => &mut self.customs_cleared,
            SpecField::Exchange => &mut self.exchange,
            SpecField::Availability => &mut self.availability,
            SpecField::CarLocation => &mut self.car_location,
            SpecField::RegistrationCountry => &mut self.registration_country,
            SpecField::OtherInfo => &mut self.other_info,
            SpecField::Vin => &mut self.vin,
        }
    }
}

pub fn extract_main_specs(document: &Html) -> MainSpecs {
    let mut specs = MainSpecs::default();

    for row in select_all(document.root_element(), "div.tab-content div.field-row.clr") {
        let (Some(label), Some(value)) = (
            select_first(row, "div.field-label"),
            select_first(row, "div.field-value"),
        ) else {
            continue;
        };

        let Some(field) = SpecField::from_label(&stripped_text(label)) else {
            continue;
        };

        // The hidden raw mileage is authoritative over the rounded display
        let text = match field {
            SpecField::Mileage => match select_first(value, "span.mileage-source") {
                Some(raw) => format!("{} {}", stripped_text(raw), MILEAGE_UNIT),
                None => stripped_text(value),
            },
            _ => stripped_text(value),
        };

        *specs.field_mut(field) = Some(text);
    }

    specs
}
