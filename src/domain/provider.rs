use serde::{Deserialize, Serialize};

use super::Coordinate;

/// A service provider from the catalog.
///
/// Field names follow the published JSON shape (`Name`, `Postal`, `longlat`...),
/// which is also the shape of the embedded dataset. `longlat` and `distance`
/// stay `None` until the provider has been located.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Postal")]
    pub postcode: String,
    #[serde(rename = "Categories")]
    pub categories: String,
    /// Nominal service radius carried through from the dataset as-is.
    #[serde(rename = "Miles", default)]
    pub miles: Option<u32>,
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "longlat", default)]
    pub coordinate: Option<Coordinate>,
    #[serde(default)]
    pub distance: Option<f64>,
}

impl Provider {
    /// Whether the provider has a postal code that can be geocoded.
    pub fn is_locatable(&self) -> bool {
        !self.postcode.trim().is_empty()
    }

    pub fn set_location(&mut self, coordinate: Coordinate, distance: f64) {
        self.coordinate = Some(coordinate);
        self.distance = Some(distance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dataset_entry() {
        let json = r#"{
            "Name": "Weldmar Hospice",
            "Address": "Herringston Road, Dorchester",
            "Postal": "DT1 2SL",
            "Categories": "Bereavement, hospice",
            "Miles": 34,
            "Type": "Operational"
        }"#;
        let provider: Provider = serde_json::from_str(json).unwrap();

        assert_eq!(provider.name, "Weldmar Hospice");
        assert_eq!(provider.postcode, "DT1 2SL");
        assert_eq!(provider.miles, Some(34));
        assert_eq!(provider.kind, "Operational");
        assert!(provider.coordinate.is_none());
        assert!(provider.distance.is_none());
        assert!(provider.is_locatable());
    }

    #[test]
    fn test_null_miles_and_blank_postcode() {
        let json = r#"{"Name":"Online","Address":"","Postal":" ","Categories":"","Miles":null,"Type":"On-line"}"#;
        let provider: Provider = serde_json::from_str(json).unwrap();

        assert_eq!(provider.miles, None);
        assert!(!provider.is_locatable());
    }

    #[test]
    fn test_serialize_located_provider() {
        let mut provider: Provider = serde_json::from_str(
            r#"{"Name":"A","Address":"B","Postal":"BA1 3NG","Categories":"C","Miles":10,"Type":"Operational"}"#,
        )
        .unwrap();
        provider.set_location(Coordinate::new(-2.39, 51.39), 12.5);

        let json = serde_json::to_value(&provider).unwrap();
        assert_eq!(json["Postal"], "BA1 3NG");
        assert_eq!(json["Miles"], 10);
        assert_eq!(json["longlat"]["longitude"], -2.39);
        assert_eq!(json["longlat"]["latitude"], 51.39);
        assert_eq!(json["distance"], 12.5);
    }
}
