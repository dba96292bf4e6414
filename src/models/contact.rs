// src/models/contact.rs

use serde::{Deserialize, Serialize};
use std::convert::Infallible;

use super::{LoadFailure, PanelText, Resource};

/// A message left through the public contact form. Read/delete only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Resource for Contact {
    const ENDPOINT: &'static str = "/contacts";
    const MUTABLE: bool = false;
    const LOAD_FAILURE: LoadFailure = LoadFailure::EmptyList;
    const TEXT: PanelText = PanelText {
        title: "Contatos Recebidos",
        loading: "Carregando contatos...",
        empty: "Nenhum contato recebido",
        load_failed: "Não foi possível carregar os contatos",
        created: "",
        create_failed: "",
        updated: "",
        update_failed: "",
        deleted: "Contato excluído com sucesso!",
        delete_failed: "Não foi possível excluir o contato",
        confirm_delete: "Tem certeza que deseja excluir este contato?",
    };

    type Field = Infallible;

    fn set_field(&mut self, field: Infallible, _value: String) {
        match field {}
    }
}
