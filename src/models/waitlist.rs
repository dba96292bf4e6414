// src/models/waitlist.rs

use serde::{Deserialize, Serialize};
use std::convert::Infallible;

use super::{LoadFailure, PanelText, Resource};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_demo: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl WaitlistEntry {
    /// Demo requests and plain waitlist sign-ups share the collection.
    pub fn kind_label(&self) -> &'static str {
        if self.is_demo.unwrap_or(false) {
            "Demonstração"
        } else {
            "Lista de Espera"
        }
    }
}

impl Resource for WaitlistEntry {
    const ENDPOINT: &'static str = "/waitlist";
    const MUTABLE: bool = false;
    const LOAD_FAILURE: LoadFailure = LoadFailure::EmptyList;
    const TEXT: PanelText = PanelText {
        title: "Lista de Espera",
        loading: "Carregando lista de espera...",
        empty: "Nenhuma entrada na lista de espera",
        load_failed: "Não foi possível carregar a lista de espera",
        created: "",
        create_failed: "",
        updated: "",
        update_failed: "",
        deleted: "Entrada removida com sucesso!",
        delete_failed: "Não foi possível excluir a entrada",
        confirm_delete: "Tem certeza que deseja excluir esta entrada da lista de espera?",
    };

    type Field = Infallible;

    fn set_field(&mut self, field: Infallible, _value: String) {
        match field {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_payload() {
        let entry: WaitlistEntry = serde_json::from_str(
            r#"{"name":"Rita","email":"rita@example.com","isDemo":true,"createdAt":"2024-05-01T10:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(entry.is_demo, Some(true));
        assert_eq!(entry.phone, None);
        assert_eq!(entry.kind_label(), "Demonstração");
        assert_eq!(WaitlistEntry::default().kind_label(), "Lista de Espera");
    }
}
