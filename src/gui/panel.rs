use super::toast::Toasts;
use crate::models::{Entry, LoadFailure, RecordId, Resource};
use crate::repositories::remote::Repository;
use iced::Command;
use log::{error, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Mode<T> {
    Viewing,
    Creating(T),
    Editing(Entry<T>),
}

#[derive(Debug, Clone)]
pub enum PanelMessage<T: Resource> {
    Loaded(Result<Vec<Entry<T>>, String>),

    StartCreate,
    CancelCreate,
    DraftChanged(T::Field, String),
    SubmitCreate,
    Created(Result<Entry<T>, String>),

    StartEdit(RecordId),
    CancelEdit,
    EditChanged(T::Field, String),
    SaveEdit,
    Updated(Result<Entry<T>, String>),

    DeleteRequested(RecordId),
    DeleteCancelled,
    DeleteConfirmed,
    Deleted(RecordId, Result<(), String>),

    SendEmail(String),
}

/// Local copy of one remote collection plus the admin's in-progress edits.
pub struct PanelState<T: Resource> {
    pub status: Status,
    pub items: Vec<Entry<T>>,
    pub mode: Mode<T>,
    pub pending_delete: Option<RecordId>,
    repo: Repository<T>,
    // Each new draft gets a number; a create response only closes the draft it was sent from
    draft_seq: u64,
    submitted_draft: Option<u64>,
}

impl<T: Resource> PanelState<T> {
    pub fn new(repo: Repository<T>) -> Self {
        Self {
            status: Status::Loading,
            items: Vec::new(),
            mode: Mode::Viewing,
            pending_delete: None,
            repo,
            draft_seq: 0,
            submitted_draft: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }

    /// Drops local state and fetches the collection again.
    pub fn reload(&mut self) -> Command<PanelMessage<T>> {
        self.status = Status::Loading;
        self.items.clear();
        self.mode = Mode::Viewing;
        self.pending_delete = None;

        let repo = self.repo.clone();
        Command::perform(async move { repo.list().await }, |result| {
            PanelMessage::Loaded(result.map_err(|e| e.to_string()))
        })
    }

    pub fn apply_loaded(&mut self, result: Result<Vec<Entry<T>>, String>, toasts: &mut Toasts) {
        match result {
            Ok(items) => {
                info!("Loaded {} records for {}", items.len(), T::ENDPOINT);
                self.items = items;
                self.status = Status::Ready;
            }
            Err(err) => {
                error!("Failed to load {}: {}", T::ENDPOINT, err);
                toasts.error(T::TEXT.load_failed);
                self.items.clear();
                self.status = match T::LOAD_FAILURE {
                    LoadFailure::ShowError => Status::Failed(T::TEXT.load_failed.to_string()),
                    LoadFailure::EmptyList => Status::Ready,
                };
            }
        }
    }

    pub fn draft(&self) -> Option<&T> {
        match &self.mode {
            Mode::Creating(draft) => Some(draft),
            _ => None,
        }
    }

    pub fn edit_buffer(&self) -> Option<&Entry<T>> {
        match &self.mode {
            Mode::Editing(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn begin_create(&mut self) {
        if !T::MUTABLE {
            warn!("{} does not support creating records", T::ENDPOINT);
            return;
        }
        self.draft_seq += 1;
        self.mode = Mode::Creating(T::default());
    }

    pub fn set_draft_field(&mut self, field: T::Field, value: String) {
        if let Mode::Creating(draft) = &mut self.mode {
            draft.set_field(field, value);
        }
    }

    /// Appends the server's record; an id already present is replaced instead.
    ///
    /// The open draft is closed only if it is the one that was submitted.
    pub fn apply_created(&mut self, entry: Entry<T>) {
        match self.items.iter_mut().find(|item| item.id == entry.id) {
            Some(existing) => *existing = entry,
            None => self.items.push(entry),
        }
        if matches!(self.mode, Mode::Creating(_)) && self.submitted_draft == Some(self.draft_seq) {
            self.mode = Mode::Viewing;
        }
        self.submitted_draft = None;
    }

    pub fn begin_edit(&mut self, id: &RecordId) {
        if !T::MUTABLE {
            warn!("{} does not support editing records", T::ENDPOINT);
            return;
        }
        let row = self.items.iter().find(|item| &item.id == id).cloned();
        match row {
            Some(row) => self.mode = Mode::Editing(row),
            None => warn!("No record {} in {} to edit", id, T::ENDPOINT),
        }
    }

    pub fn set_edit_field(&mut self, field: T::Field, value: String) {
        if let Mode::Editing(entry) = &mut self.mode {
            entry.data.set_field(field, value);
        }
    }

    pub fn cancel_edit(&mut self) {
        if matches!(self.mode, Mode::Editing(_) | Mode::Creating(_)) {
            self.mode = Mode::Viewing;
        }
    }

    /// Replaces the row with the server's copy.
    pub fn apply_updated(&mut self, entry: Entry<T>) {
        if let Mode::Editing(buffer) = &self.mode {
            if buffer.id == entry.id {
                self.mode = Mode::Viewing;
            }
        }
        match self.items.iter_mut().find(|item| item.id == entry.id) {
            Some(existing) => *existing = entry,
            None => warn!("Updated record {} is not in the local {} list", entry.id, T::ENDPOINT),
        }
    }

    pub fn apply_deleted(&mut self, id: &RecordId) {
        self.items.retain(|item| &item.id != id);
        if let Mode::Editing(buffer) = &self.mode {
            if &buffer.id == id {
                self.mode = Mode::Viewing;
            }
        }
    }

    pub fn update(&mut self, message: PanelMessage<T>, toasts: &mut Toasts) -> Command<PanelMessage<T>> {
        match message {
            PanelMessage::Loaded(result) => {
                self.apply_loaded(result, toasts);
                Command::none()
            }

            PanelMessage::StartCreate => {
                self.begin_create();
                Command::none()
            }

            PanelMessage::CancelCreate | PanelMessage::CancelEdit => {
                self.cancel_edit();
                Command::none()
            }

            PanelMessage::DraftChanged(field, value) => {
                self.set_draft_field(field, value);
                Command::none()
            }

            PanelMessage::SubmitCreate => {
                let Some(draft) = self.draft().cloned() else {
                    return Command::none();
                };
                self.submitted_draft = Some(self.draft_seq);
                let repo = self.repo.clone();
                Command::perform(async move { repo.create(draft).await }, |result| {
                    PanelMessage::Created(result.map_err(|e| e.to_string()))
                })
            }

            PanelMessage::Created(result) => {
                match result {
                    Ok(entry) => {
                        self.apply_created(entry);
                        toasts.success(T::TEXT.created);
                    }
                    Err(err) => {
                        error!("Failed to create record in {}: {}", T::ENDPOINT, err);
                        toasts.error(T::TEXT.create_failed);
                    }
                }
                Command::none()
            }

            PanelMessage::StartEdit(id) => {
                self.begin_edit(&id);
                Command::none()
            }

            PanelMessage::EditChanged(field, value) => {
                self.set_edit_field(field, value);
                Command::none()
            }

            PanelMessage::SaveEdit => {
                let Some(entry) = self.edit_buffer().cloned() else {
                    return Command::none();
                };
                let repo = self.repo.clone();
                Command::perform(async move { repo.update(entry).await }, |result| {
                    PanelMessage::Updated(result.map_err(|e| e.to_string()))
                })
            }

            PanelMessage::Updated(result) => {
                match result {
                    Ok(entry) => {
                        self.apply_updated(entry);
                        toasts.success(T::TEXT.updated);
                    }
                    Err(err) => {
                        error!("Failed to update record in {}: {}", T::ENDPOINT, err);
                        toasts.error(T::TEXT.update_failed);
                    }
                }
                Command::none()
            }

            PanelMessage::DeleteRequested(id) => {
                self.pending_delete = Some(id);
                Command::none()
            }

            PanelMessage::DeleteCancelled => {
                self.pending_delete = None;
                Command::none()
            }

            PanelMessage::DeleteConfirmed => {
                let Some(id) = self.pending_delete.take() else {
                    return Command::none();
                };
                let repo = self.repo.clone();
                Command::perform(
                    async move {
                        let result = repo.delete(id.clone()).await;
                        (id, result)
                    },
                    |(id, result)| PanelMessage::Deleted(id, result.map_err(|e| e.to_string())),
                )
            }

            PanelMessage::Deleted(id, result) => {
                match result {
                    Ok(()) => {
                        self.apply_deleted(&id);
                        toasts.success(T::TEXT.deleted);
                    }
                    Err(err) => {
                        error!("Failed to delete record {} from {}: {}", id, T::ENDPOINT, err);
                        toasts.error(T::TEXT.delete_failed);
                    }
                }
                Command::none()
            }

            PanelMessage::SendEmail(email) => {
                match crate::utils::mailto::open_mail_client(&email) {
                    Ok(()) => toasts.success(format!("Preparando e-mail para {}", email)),
                    Err(e) => {
                        error!("{:#}", e);
                        toasts.error(format!("Não foi possível abrir o e-mail para {}", email));
                    }
                }
                Command::none()
            }
        }
    }
}
