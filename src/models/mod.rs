// src/models/mod.rs

pub mod contact;
pub mod record;
pub mod robot;
pub mod testimonial;
pub mod waitlist;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

pub use record::{Entry, RecordId};

/// What a panel shows when its initial load fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFailure {
    /// Keep the panel in an error state.
    ShowError,
    /// Show an empty collection.
    EmptyList,
}

/// User-facing strings for one admin panel.
#[derive(Debug, Clone, Copy)]
pub struct PanelText {
    pub title: &'static str,
    pub loading: &'static str,
    pub empty: &'static str,
    pub load_failed: &'static str,
    pub created: &'static str,
    pub create_failed: &'static str,
    pub updated: &'static str,
    pub update_failed: &'static str,
    pub deleted: &'static str,
    pub delete_failed: &'static str,
    pub confirm_delete: &'static str,
}

/// A collection exposed by the REST backend.
///
/// Implementors are the record payload without its id; collections hold
/// [`Entry<T>`] values.
pub trait Resource:
    Clone + Debug + Default + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Collection path, e.g. `/robots`.
    const ENDPOINT: &'static str;
    /// Whether the admin can create and edit records.
    const MUTABLE: bool;
    const LOAD_FAILURE: LoadFailure;
    const TEXT: PanelText;

    /// Editable form field. Read-only resources use `Infallible`.
    type Field: Clone + Debug + Send + Sync + 'static;

    fn set_field(&mut self, field: Self::Field, value: String);
}
