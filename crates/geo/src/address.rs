//! Postal addresses.
//!
//! An address is either a street address (street, house number, zip code) or
//! a PO box, always in a city. The federal state is not stored; it is derived
//! from the zip code on demand.
//!
//! Optional parts count as present when they are non-empty. Whitespace-only
//! parts are present and printed as given; only the city is checked for
//! being blank.

use core::fmt;

use serde::{Deserialize, Serialize};

use mdb_core::{DomainError, DomainResult, ValueObject};

use crate::error::ZipCodeError;
use crate::resolver::ZipStateResolver;
use crate::state::State;

/// A validated address. Deserialization runs [`Address::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawAddress")]
pub struct Address {
    street: Option<String>,
    house_number: Option<String>,
    zip_code: Option<String>,
    po_box: Option<String>,
    city: String,
    district: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAddress {
    street: Option<String>,
    house_number: Option<String>,
    zip_code: Option<String>,
    po_box: Option<String>,
    city: String,
    district: Option<String>,
}

impl TryFrom<RawAddress> for Address {
    type Error = DomainError;

    fn try_from(raw: RawAddress) -> Result<Self, Self::Error> {
        let address = Self {
            street: raw.street,
            house_number: raw.house_number,
            zip_code: raw.zip_code,
            po_box: raw.po_box,
            city: raw.city,
            district: raw.district,
        };
        address.validate()?;
        Ok(address)
    }
}

impl ValueObject for Address {}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Address {
    pub fn street_address(
        street: impl Into<String>,
        house_number: impl Into<String>,
        zip_code: impl Into<String>,
        city: impl Into<String>,
    ) -> DomainResult<Self> {
        let address = Self {
            street: Some(street.into()),
            house_number: Some(house_number.into()),
            zip_code: Some(zip_code.into()),
            po_box: None,
            city: city.into(),
            district: None,
        };
        address.validate()?;
        Ok(address)
    }

    pub fn po_box(po_box: impl Into<String>, city: impl Into<String>) -> DomainResult<Self> {
        let address = Self {
            street: None,
            house_number: None,
            zip_code: None,
            po_box: Some(po_box.into()),
            city: city.into(),
            district: None,
        };
        address.validate()?;
        Ok(address)
    }

    pub fn with_district(mut self, district: impl Into<String>) -> Self {
        self.district = Some(district.into());
        self
    }

    pub fn street(&self) -> Option<&str> {
        self.street.as_deref()
    }

    pub fn house_number(&self) -> Option<&str> {
        self.house_number.as_deref()
    }

    pub fn zip_code(&self) -> Option<&str> {
        self.zip_code.as_deref()
    }

    pub fn po_box_number(&self) -> Option<&str> {
        self.po_box.as_deref()
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn district(&self) -> Option<&str> {
        self.district.as_deref()
    }

    /// Either a complete street address or a PO box, never both, never neither.
    pub fn validate(&self) -> DomainResult<()> {
        if self.city.trim().is_empty() {
            return Err(DomainError::validation("city must not be blank"));
        }

        let parts = [
            present(&self.street),
            present(&self.house_number),
            present(&self.zip_code),
        ];
        let po_box = present(&self.po_box).is_some();

        if parts.iter().all(Option::is_some) && !po_box {
            return Ok(());
        }
        if parts.iter().all(Option::is_none) && po_box {
            return Ok(());
        }
        Err(DomainError::validation(
            "must specify either a PO box or street, house number and zip code",
        ))
    }

    pub fn street_houseno(&self) -> Option<String> {
        match (present(&self.street), present(&self.house_number)) {
            (Some(street), Some(number)) => Some(format!("{street} {number}")),
            (Some(street), None) => Some(street.to_string()),
            _ => None,
        }
    }

    pub fn city_district(&self) -> Option<String> {
        if self.city.is_empty() {
            return None;
        }
        match present(&self.district) {
            Some(district) => Some(format!("{} - {district}", self.city)),
            None => Some(self.city.clone()),
        }
    }

    pub fn zip_code_city(&self) -> Option<String> {
        let city_district = self.city_district();
        match (present(&self.zip_code), city_district) {
            (Some(zip), Some(city)) => Some(format!("{zip} {city}")),
            (_, city) => city,
        }
    }

    pub fn oneliner(&self) -> Option<String> {
        if let Some(po_box) = present(&self.po_box) {
            return Some(match self.city_district() {
                Some(city) => format!("{po_box} {city}"),
                None => po_box.to_string(),
            });
        }

        match (self.street_houseno(), self.zip_code_city()) {
            (Some(street), Some(city)) => Some(format!("{street}, {city}")),
            (street, city) => city.or(street),
        }
    }

    /// Multi-line form as printed on letters.
    pub fn text(&self) -> String {
        let mut text = String::new();

        if let Some(po_box) = present(&self.po_box) {
            text.push_str(&format!("Postfach {po_box}\n"));
        } else if let Some(street) = self.street_houseno() {
            text.push_str(&street);
            text.push('\n');
        }

        if let Some(zip) = present(&self.zip_code) {
            text.push_str(&format!("{zip} {}\n", self.city));
        }

        text
    }

    /// Federal state derived from the zip code; `None` without a zip code.
    pub fn state(&self, resolver: &ZipStateResolver) -> Result<Option<State>, ZipCodeError> {
        present(&self.zip_code)
            .map(|zip| resolver.get_state(zip))
            .transpose()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.oneliner().as_deref().unwrap_or(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver;

    fn office() -> Address {
        Address::street_address("Burgstraße", "2", "30159", "Hannover").unwrap()
    }

    #[test]
    fn street_address_formats() {
        let address = office().with_district("Mitte");
        assert_eq!(address.street_houseno().as_deref(), Some("Burgstraße 2"));
        assert_eq!(address.city_district().as_deref(), Some("Hannover - Mitte"));
        assert_eq!(
            address.zip_code_city().as_deref(),
            Some("30159 Hannover - Mitte")
        );
        assert_eq!(address.to_string(), "Burgstraße 2, 30159 Hannover - Mitte");
        assert_eq!(address.text(), "Burgstraße 2\n30159 Hannover\n");
    }

    #[test]
    fn po_box_formats() {
        let address = Address::po_box("10 12 34", "Leipzig").unwrap();
        assert_eq!(address.oneliner().as_deref(), Some("10 12 34 Leipzig"));
        assert_eq!(address.text(), "Postfach 10 12 34\n");
    }

    #[test]
    fn rejects_mixed_or_missing_forms() {
        let err = Address::street_address("Burgstraße", "", "30159", "Hannover").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = Address::po_box("1234", "  ").unwrap_err();
        assert_eq!(err, DomainError::validation("city must not be blank"));
    }

    #[test]
    fn whitespace_parts_are_kept_as_given() {
        let address = Address::street_address("Weg", " ", "24103", "Kiel").unwrap();
        assert_eq!(address.street_houseno().as_deref(), Some("Weg  "));
        assert_eq!(address.text(), "Weg  \n24103 Kiel\n");
        assert_eq!(address.house_number(), Some(" "));
    }

    #[test]
    fn deserialization_rejects_invalid_addresses() {
        let both_forms = r#"{"street":"X","houseNumber":"2","zipCode":"24103","poBox":"1","city":"Kiel"}"#;
        let err = serde_json::from_str::<Address>(both_forms).unwrap_err();
        assert!(err.to_string().contains("either a PO box"), "{err}");

        let blank_city = r#"{"street":"X","houseNumber":"2","zipCode":"24103","city":""}"#;
        let err = serde_json::from_str::<Address>(blank_city).unwrap_err();
        assert!(err.to_string().contains("city must not be blank"), "{err}");

        let neither = r#"{"city":"Kiel"}"#;
        assert!(serde_json::from_str::<Address>(neither).is_err());
    }

    #[test]
    fn deserializes_valid_address() {
        let json = r#"{"street":"Burgstraße","houseNumber":"2","zipCode":"30159","city":"Hannover","district":"Mitte"}"#;
        let address: Address = serde_json::from_str(json).unwrap();
        assert_eq!(address, office().with_district("Mitte"));
        assert_eq!(address.zip_code(), Some("30159"));
        assert_eq!(address.po_box_number(), None);
        assert_eq!(address.district(), Some("Mitte"));
    }

    #[test]
    fn resolves_state_from_zip_code() {
        let resolver = resolver::shared().unwrap();
        assert_eq!(office().state(resolver).unwrap(), Some(State::Niedersachsen));

        let po_box = Address::po_box("1234", "Hannover").unwrap();
        assert_eq!(po_box.state(resolver).unwrap(), None);
    }

    #[test]
    fn unknown_zip_code_surfaces_to_caller() {
        let resolver = resolver::shared().unwrap();
        let address = Address::street_address("Weg", "1", "99999", "Nirgendwo").unwrap();
        assert_eq!(
            address.state(resolver).unwrap_err(),
            ZipCodeError::LookupMiss(99999)
        );

        let domain: DomainError = address.state(resolver).unwrap_err().into();
        assert!(matches!(domain, DomainError::NotFound(_)));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(Address::po_box("1", "Kiel").unwrap()).unwrap();
        assert_eq!(json["poBox"], "1");
        assert_eq!(json["houseNumber"], serde_json::Value::Null);
    }
}
