// src/models/robot.rs

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{LoadFailure, PanelText, Resource};

pub const DEFAULT_ROBOT_IMAGE: &str = "/robot-showcase.png";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Robot {
    #[serde(default, deserialize_with = "lenient_string")]
    pub model: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub version: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub height: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub weight: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub capacity: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub uptime: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub movement: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub image: String,
    #[serde(default)]
    pub available: bool,
}

impl Default for Robot {
    fn default() -> Self {
        Self {
            model: String::new(),
            version: String::new(),
            height: String::new(),
            weight: String::new(),
            capacity: String::new(),
            uptime: String::new(),
            movement: String::new(),
            features: Vec::new(),
            description: String::new(),
            image: DEFAULT_ROBOT_IMAGE.to_string(),
            available: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RobotField {
    Model,
    Version,
    Height,
    Weight,
    Capacity,
    Uptime,
    Movement,
    Features,
    Description,
    Available,
}

/// Reads a spec-card field that some records store as a number or bool.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Null => Ok(String::new()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(de::Error::custom(format!("expected a string, found {}", other))),
    }
}

/// Splits a comma-separated features input into trimmed entries, keeping order.
pub fn split_features(input: &str) -> Vec<String> {
    input.split(',').map(|feature| feature.trim().to_string()).collect()
}

impl Resource for Robot {
    const ENDPOINT: &'static str = "/robots";
    const MUTABLE: bool = true;
    const LOAD_FAILURE: LoadFailure = LoadFailure::ShowError;
    const TEXT: PanelText = PanelText {
        title: "Gerenciamento de Robôs",
        loading: "Carregando robôs...",
        empty: "Nenhum robô encontrado",
        load_failed: "Não foi possível carregar os robôs",
        created: "Robô adicionado com sucesso!",
        create_failed: "Não foi possível adicionar o robô",
        updated: "Robô atualizado com sucesso!",
        update_failed: "Não foi possível atualizar o robô",
        deleted: "Robô excluído com sucesso!",
        delete_failed: "Não foi possível excluir o robô",
        confirm_delete: "Tem certeza que deseja excluir este robô?",
    };

    type Field = RobotField;

    fn set_field(&mut self, field: RobotField, value: String) {
        match field {
            RobotField::Model => self.model = value,
            RobotField::Version => self.version = value,
            RobotField::Height => self.height = value,
            RobotField::Weight => self.weight = value,
            RobotField::Capacity => self.capacity = value,
            RobotField::Uptime => self.uptime = value,
            RobotField::Movement => self.movement = value,
            RobotField::Features => self.features = split_features(&value),
            RobotField::Description => self.description = value,
            RobotField::Available => self.available = value == "true",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn features_are_split_and_trimmed_in_order() {
        assert_eq!(split_features("a, b ,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn trailing_comma_keeps_an_empty_slot_for_typing() {
        assert_eq!(split_features("a,"), vec!["a", ""]);
    }

    #[test]
    fn new_draft_defaults() {
        let draft = Robot::default();
        assert_eq!(draft.image, DEFAULT_ROBOT_IMAGE);
        assert!(draft.available);
        assert!(draft.features.is_empty());
    }

    #[test]
    fn set_field_applies_features_and_availability() {
        let mut robot = Robot::default();
        robot.set_field(RobotField::Features, "Vision, Speech ".into());
        robot.set_field(RobotField::Available, "false".into());
        robot.set_field(RobotField::Model, "Atlas".into());

        assert_eq!(robot.features, vec!["Vision", "Speech"]);
        assert!(!robot.available);
        assert_eq!(robot.model, "Atlas");
    }

    #[test]
    fn deserializes_partial_payload() {
        let robot: Robot =
            serde_json::from_str(r#"{"model":"Nexus","available":true,"features":["Arms"]}"#)
                .unwrap();
        assert_eq!(robot.model, "Nexus");
        assert!(robot.version.is_empty());
        assert_eq!(robot.features, vec!["Arms"]);
    }

    #[test]
    fn numeric_spec_values_read_as_text() {
        let robot: Robot = serde_json::from_str(
            r#"{"model":"Atlas","height":180,"weight":85.5,"uptime":null,"available":true}"#,
        )
        .unwrap();
        assert_eq!(robot.height, "180");
        assert_eq!(robot.weight, "85.5");
        assert!(robot.uptime.is_empty());
    }

    #[test]
    fn nested_values_are_still_rejected() {
        let result: Result<Robot, _> = serde_json::from_str(r#"{"height":{"cm":180}}"#);
        assert!(result.is_err());
    }
}
