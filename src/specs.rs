use log::{error, info};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::labels::field_label;

const SPECS_JSON: &str = include_str!("../data/scrambler_specs.json");

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SpecificationDocument {
    pub motor: Map<String, Value>,
    pub chassi: Chassis,
    pub dimensoes: Map<String, Value>,
    pub equipamentos: Equipment,
    pub caracteristicas: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Chassis {
    pub quadro: String,
    pub braco_oscilante: String,
    pub suspensao_dianteira: String,
    pub suspensao_traseira: String,
    pub rodas: Wheels,
    pub freios: Brakes,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Wheels {
    pub dianteira: String,
    pub traseira: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Brakes {
    pub dianteiro: String,
    pub traseiro: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Equipment {
    pub iluminacao: String,
    pub painel: String,
    pub seguranca: Vec<String>,
    pub ergonomia: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpecField {
    pub key: String,
    pub label: String,
    pub value: String,
}

impl SpecificationDocument {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parses the bundled document. A broken document is logged and replaced
    /// by an empty one so the rest of the page still renders.
    pub fn load() -> Self {
        match Self::from_json(SPECS_JSON) {
            Ok(doc) => {
                info!(
                    "Loaded specification document: {} motor fields, {} dimension fields",
                    doc.motor.len(),
                    doc.dimensoes.len()
                );
                doc
            }
            Err(e) => {
                error!("Failed to parse specification document: {}", e);
                Self::default()
            }
        }
    }

    pub fn motor_fields(&self) -> Vec<SpecField> {
        labelled_fields(&self.motor)
    }

    pub fn dimension_fields(&self) -> Vec<SpecField> {
        labelled_fields(&self.dimensoes)
    }
}

// Only string values are shown; anything else in a category is skipped.
fn labelled_fields(category: &Map<String, Value>) -> Vec<SpecField> {
    category
        .iter()
        .filter_map(|(key, value)| {
            let value = value.as_str()?.trim();
            if value.is_empty() {
                return None;
            }
            Some(SpecField {
                key: key.clone(),
                label: field_label(key),
                value: value.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_document_parses() {
        let doc = SpecificationDocument::from_json(SPECS_JSON).unwrap();
        assert!(!doc.motor.is_empty());
        assert!(!doc.dimensoes.is_empty());
        assert!(!doc.chassi.quadro.is_empty());
        assert!(!doc.chassi.rodas.dianteira.is_empty());
        assert!(!doc.chassi.freios.traseiro.is_empty());
        assert!(!doc.equipamentos.seguranca.is_empty());
        assert!(!doc.caracteristicas.is_empty());
        assert_eq!(SpecificationDocument::load(), doc);
    }

    #[test]
    fn test_fields_keep_document_order_and_labels() {
        let doc = SpecificationDocument::from_json(
            r#"{"motor": {"taxaCompressao": "12,5:1", "potenciaMaxima": "39 cv", "cilindrada": "398 cc"}}"#,
        )
        .unwrap();
        let fields = doc.motor_fields();
        let keys: Vec<_> = fields.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, ["taxaCompressao", "potenciaMaxima", "cilindrada"]);
        assert_eq!(fields[1].label, "Potência Máxima");
        assert_eq!(fields[1].value, "39 cv");
    }

    #[test]
    fn test_missing_and_non_string_fields_are_skipped() {
        let doc = SpecificationDocument::from_json(
            r#"{"dimensoes": {"peso": "185 kg", "altura": null, "largura": 835, "tanque": " "},
                "chassi": {"quadro": "Tubular"}}"#,
        )
        .unwrap();
        let fields = doc.dimension_fields();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].label, "Peso");
        assert_eq!(doc.chassi.quadro, "Tubular");
        assert!(doc.chassi.suspensao_traseira.is_empty());
        assert!(doc.equipamentos.seguranca.is_empty());
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(SpecificationDocument::from_json("{ motor: ").is_err());
        assert!(SpecificationDocument::from_json(r#"{"caracteristicas": "nope"}"#).is_err());
    }
}
