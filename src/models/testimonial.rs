// src/models/testimonial.rs

use serde::{Deserialize, Serialize};

use super::{LoadFailure, PanelText, Resource};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub company: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestimonialField {
    Content,
    Author,
    Role,
    Company,
}

impl Resource for Testimonial {
    const ENDPOINT: &'static str = "/testimonials";
    const MUTABLE: bool = true;
    const LOAD_FAILURE: LoadFailure = LoadFailure::ShowError;
    const TEXT: PanelText = PanelText {
        title: "Gerenciamento de Depoimentos",
        loading: "Carregando depoimentos...",
        empty: "Nenhum depoimento encontrado",
        load_failed: "Não foi possível carregar os depoimentos",
        created: "Depoimento adicionado com sucesso!",
        create_failed: "Não foi possível adicionar o depoimento",
        updated: "Depoimento atualizado com sucesso!",
        update_failed: "Não foi possível atualizar o depoimento",
        deleted: "Depoimento excluído com sucesso!",
        delete_failed: "Não foi possível excluir o depoimento",
        confirm_delete: "Tem certeza que deseja excluir este depoimento?",
    };

    type Field = TestimonialField;

    fn set_field(&mut self, field: TestimonialField, value: String) {
        match field {
            TestimonialField::Content => self.content = value,
            TestimonialField::Author => self.author = value,
            TestimonialField::Role => self.role = value,
            TestimonialField::Company => self.company = value,
        }
    }
}
