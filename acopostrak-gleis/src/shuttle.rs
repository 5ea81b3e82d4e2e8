//! Parameter der Shuttles, die auf einer Baugruppe fahren.

use std::collections::BTreeMap;

use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::TrackError;

/// Standard-Werte aller Shuttle-Parameter.
static SHUTTLE_PARAM: Lazy<ShuttleParameters> = Lazy::new(|| {
    [
        ("count", "10"),
        ("convoy", "Inactive"),
        ("collision_distance", "0.002"),
        ("error_stop", "0.006"),
        ("sh_stereotype", "ShuttleStereotype_1"),
        ("sh_size", "50"),
        ("magnet_plate", "2"),
        ("magnet_type", "Straight"),
        ("collision_strategy", "Constant"),
        ("extent_front", "0.025"),
        ("extent_back", "0.025"),
        ("width", "0.046"),
    ]
    .into_iter()
    .collect()
});

/// Shuttle-Parameter als Paare aus Schlüssel und Wert.
///
/// Werte werden unverändert als Text gespeichert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShuttleParameters(BTreeMap<String, String>);

impl Default for ShuttleParameters {
    fn default() -> Self {
        SHUTTLE_PARAM.clone()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ShuttleParameters {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        ShuttleParameters(iter.into_iter().map(|(key, value)| (key.into(), value.into())).collect())
    }
}

impl ShuttleParameters {
    /// Keine Parameter.
    #[must_use]
    pub fn empty() -> Self {
        ShuttleParameters(BTreeMap::new())
    }

    /// Der Wert zum Schlüssel `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Setze den Wert für `key` und gebe den vorherigen Wert zurück.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Entferne den Wert für `key`.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Alle Paare aus Schlüssel und Wert, sortiert nach Schlüssel.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Der Wert zu `key`, oder [`TrackError::MissingParameter`].
    fn benötige(&self, key: &'static str) -> Result<&str, TrackError> {
        self.get(key).ok_or(TrackError::MissingParameter(key))
    }
}

/// Die Werte, welche das Shuttle-Modell bestimmen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShuttleModel {
    /// Größe des Shuttles (`sh_size`).
    pub size: String,
    /// Anzahl der Magnetplatten (`magnet_plate`).
    pub magnet_plate: String,
    /// Art der Magnetplatten (`magnet_type`).
    pub magnet_type: String,
}

/// Prüfe, dass alle Werte für das Shuttle-Modell vorhanden sind.
///
/// Geprüft wird nur das Vorhandensein, nicht der Inhalt.
///
/// ## Errors
///
/// [`TrackError::MissingParameter`] für den ersten fehlenden Schlüssel,
/// geprüft in der Reihenfolge `sh_size`, `magnet_plate`, `magnet_type`.
pub fn shuttle_model(parameter: &ShuttleParameters) -> Result<ShuttleModel, TrackError> {
    let size = parameter.benötige("sh_size")?.to_owned();
    let magnet_plate = parameter.benötige("magnet_plate")?.to_owned();
    let magnet_type = parameter.benötige("magnet_type")?.to_owned();
    debug!("Shuttle-Modell: Größe {size}, {magnet_plate} Magnetplatten ({magnet_type})");
    Ok(ShuttleModel { size, magnet_plate, magnet_type })
}

#[cfg(test)]
mod test {
    use acopostrak_test_util::{expect_eq, init_test_logging, ExpectTrue, Expectation};

    use super::*;

    fn wert(parameter: &ShuttleParameters, key: &str) -> Option<String> {
        parameter.get(key).map(str::to_owned)
    }

    #[test]
    fn standard_parameter() -> Result<(), Expectation> {
        init_test_logging();

        let parameter = ShuttleParameters::default();
        expect_eq(parameter.iter().count(), 12)?;
        expect_eq(wert(&parameter, "convoy"), Some(String::from("Inactive")))?;
        expect_eq(wert(&parameter, "width"), Some(String::from("0.046")))?;
        let model = shuttle_model(&parameter).map_err(|_fehler| ExpectTrue)?;
        expect_eq(
            model,
            ShuttleModel {
                size: String::from("50"),
                magnet_plate: String::from("2"),
                magnet_type: String::from("Straight"),
            },
        )?;
        Ok(())
    }

    #[test]
    fn fehlende_parameter_in_reihenfolge() {
        init_test_logging();

        let mut parameter = ShuttleParameters::empty();
        assert!(
            matches!(shuttle_model(&parameter), Err(TrackError::MissingParameter("sh_size"))),
            "sh_size wird zuerst geprüft"
        );
        let _ = parameter.insert("sh_size", "");
        assert!(
            matches!(shuttle_model(&parameter), Err(TrackError::MissingParameter("magnet_plate"))),
            "leere Werte sind erlaubt"
        );
        let _ = parameter.insert("magnet_type", "Curved");
        assert!(
            matches!(shuttle_model(&parameter), Err(TrackError::MissingParameter("magnet_plate"))),
            "magnet_plate vor magnet_type"
        );
        let _ = parameter.insert("magnet_plate", "1");
        assert!(shuttle_model(&parameter).is_ok(), "alle Schlüssel vorhanden");
        let _ = parameter.remove("magnet_type");
        assert!(
            matches!(shuttle_model(&parameter), Err(TrackError::MissingParameter("magnet_type"))),
            "magnet_type fehlt"
        );
    }

    #[test]
    fn json_format() -> Result<(), Expectation> {
        init_test_logging();

        let json = r#"{"sh_size": "100", "magnet_plate": "3", "magnet_type": "Straight"}"#;
        let parameter: ShuttleParameters =
            serde_json::from_str(json).map_err(|_fehler| ExpectTrue)?;
        expect_eq(wert(&parameter, "sh_size"), Some(String::from("100")))?;
        let text = serde_json::to_string(&parameter).map_err(|_fehler| ExpectTrue)?;
        expect_eq(
            text,
            String::from(r#"{"magnet_plate":"3","magnet_type":"Straight","sh_size":"100"}"#),
        )?;
        Ok(())
    }
}
