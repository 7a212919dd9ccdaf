//! Generic entity-collection controller.
//!
//! One instance per entity type reconciles a remote collection with a
//! local table, a create/edit form and a delete-confirmation sub-flow.
//! The collection is replaced wholesale after every successful load or
//! mutation acknowledgment, never patched in place: the displayed rows
//! always match what the server actually persisted, including
//! server-assigned ids and normalized values.

use std::sync::Arc;

use crate::controller::form::EntityForm;
use crate::error::GatewayError;
use crate::gateway::EntityGateway;
use crate::models::Entity;
use crate::notify::Notifier;

/// Whether the form creates a new entity or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { target_id: String },
}

/// Coarse controller state, for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Table shows the last successfully loaded collection
    List,
    /// A load is in flight
    Loading,
    /// The create/edit form is open
    FormOpen,
    /// A create/update call is in flight; the form is modal
    Submitting,
    /// The delete confirmation dialog is open
    DeleteConfirm,
}

struct OpenForm<F> {
    mode: FormMode,
    form: F,
    submitting: bool,
}

/// CRUD controller for one entity collection.
pub struct EntityCollectionController<E, F>
where
    E: Entity,
    F: EntityForm<Entity = E>,
{
    gateway: Arc<dyn EntityGateway<E>>,
    notifier: Arc<dyn Notifier>,
    entities: Vec<E>,
    open_form: Option<OpenForm<F>>,
    pending_delete: Option<String>,
    loading: bool,
    load_generation: u64,
}

impl<E, F> EntityCollectionController<E, F>
where
    E: Entity,
    F: EntityForm<Entity = E>,
{
    pub fn new(gateway: Arc<dyn EntityGateway<E>>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            gateway,
            notifier,
            entities: Vec::new(),
            open_form: None,
            pending_delete: None,
            loading: false,
            load_generation: 0,
        }
    }

    /// The last successfully loaded collection.
    pub fn entities(&self) -> &[E] {
        &self.entities
    }

    /// Current coarse state.
    pub fn phase(&self) -> Phase {
        if self.pending_delete.is_some() {
            Phase::DeleteConfirm
        } else if let Some(open) = &self.open_form {
            if open.submitting {
                Phase::Submitting
            } else {
                Phase::FormOpen
            }
        } else if self.loading {
            Phase::Loading
        } else {
            Phase::List
        }
    }

    /// The open form, if any, for input binding.
    pub fn form(&self) -> Option<&F> {
        self.open_form.as_ref().map(|open| &open.form)
    }

    /// Mutable access to the open form, for input binding.
    pub fn form_mut(&mut self) -> Option<&mut F> {
        self.open_form.as_mut().map(|open| &mut open.form)
    }

    /// Mode of the open form, if any.
    pub fn form_mode(&self) -> Option<&FormMode> {
        self.open_form.as_ref().map(|open| &open.mode)
    }

    /// Id awaiting delete confirmation, if any.
    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    /// Begin a load and return its generation token.
    ///
    /// A completion carrying an older generation than the latest
    /// [`begin_load`](Self::begin_load) is stale and gets dropped, so a
    /// slow early reload can never clobber fresher data.
    pub fn begin_load(&mut self) -> u64 {
        self.load_generation += 1;
        self.loading = true;
        self.load_generation
    }

    /// Apply the outcome of the load started as `generation`.
    ///
    /// On success the collection is replaced wholesale; on failure the last
    /// good collection is kept and an error notification is raised.
    pub fn complete_load(&mut self, generation: u64, result: Result<Vec<E>, GatewayError>) {
        if generation != self.load_generation {
            tracing::debug!(generation, latest = self.load_generation, "dropping stale load result");
            return;
        }
        self.loading = false;
        match result {
            Ok(entities) => {
                self.entities = entities;
            }
            Err(err) => {
                tracing::warn!(error = %err, "collection load failed");
                self.notifier.show_error("Erro ao carregar", &err.user_message());
            }
        }
    }

    /// Fetch the collection and apply the result.
    pub async fn reload(&mut self) {
        let generation = self.begin_load();
        let result = self.gateway.list().await;
        self.complete_load(generation, result);
    }

    /// Open the form in create mode, reset to defaults.
    pub fn open_create(&mut self) {
        self.open_form = Some(OpenForm { mode: FormMode::Create, form: F::default(), submitting: false });
    }

    /// Open the form in edit mode, pre-populated from the entity's current
    /// field values. Ignored (with a log) when the id is not in the table.
    pub fn open_edit(&mut self, id: &str) {
        let Some(entity) = self.entities.iter().find(|e| e.id() == id).cloned() else {
            tracing::warn!(id, "edit requested for an id not present in the table");
            return;
        };
        let mut form = F::default();
        form.load(&entity);
        self.open_form = Some(OpenForm {
            mode: FormMode::Edit { target_id: id.to_string() },
            form,
            submitting: false,
        });
    }

    /// Close the form, discarding input.
    pub fn cancel_form(&mut self) {
        self.open_form = None;
    }

    /// Submit the open form.
    ///
    /// Invalid input marks every field touched, raises a warning and makes
    /// no gateway call. Valid input calls create or update by mode; on
    /// success the form closes and the collection reloads, on failure the
    /// form stays open with the user's input intact so they can retry.
    pub async fn submit(&mut self) {
        let Some(open) = self.open_form.as_mut() else { return };

        if !open.form.validate().is_empty() {
            open.form.mark_all_touched();
            self.notifier
                .show_warning("Atenção!", "Por favor, preencha o formulário corretamente.");
            return;
        }

        open.submitting = true;
        let draft = open.form.to_draft();
        let mode = open.mode.clone();

        let result = match &mode {
            FormMode::Create => self.gateway.create(&draft).await.map(|_| ()),
            FormMode::Edit { target_id } => self.gateway.update(target_id, &draft).await.map(|_| ()),
        };

        match result {
            Ok(()) => {
                self.open_form = None;
                let verb = match mode {
                    FormMode::Create => "criado",
                    FormMode::Edit { .. } => "atualizado",
                };
                self.notifier
                    .show_success("Sucesso!", &format!("{} {} com sucesso.", E::LABEL, verb));
                self.reload().await;
            }
            Err(err) => {
                if let Some(open) = self.open_form.as_mut() {
                    open.submitting = false;
                }
                tracing::warn!(error = %err, "save failed");
                self.notifier.show_error("Erro ao salvar", &err.user_message());
            }
        }
    }

    /// Open the delete confirmation dialog for `id`. The gateway is not
    /// called until [`confirm_delete`](Self::confirm_delete).
    pub fn request_delete(&mut self, id: impl Into<String>) {
        self.pending_delete = Some(id.into());
    }

    /// Close the confirmation dialog with no side effect.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Confirm the pending delete: exactly one gateway call. On success the
    /// collection reloads; on failure an error notification is raised. The
    /// dialog closes either way (no automatic retry).
    pub async fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete.take() else { return };

        match self.gateway.delete(&id).await {
            Ok(()) => {
                self.notifier
                    .show_success("Sucesso!", &format!("{} removido com sucesso.", E::LABEL));
                self.reload().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, id, "delete failed");
                self.notifier.show_error("Erro ao remover", &err.user_message());
            }
        }
    }
}
