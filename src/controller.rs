use crate::{
    api::StudentsApi,
    config::UiConfig,
    controller::{
        debounce::Debouncer,
        notification::NotificationKind,
        view_state::{FormMode, ViewState},
    },
    data::student::{StudentForm, StudentId},
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::broadcast::{Receiver, Sender, channel};

pub mod debounce;
pub mod notification;
pub mod view_state;

const LOAD_FAILED: &str = "Error loading students. Please try again.";
const SEARCH_FAILED: &str = "Error searching students";
const DETAILS_FAILED: &str = "Error loading student details";
const SAVE_FAILED: &str = "Failed to save student";
const DELETE_FAILED: &str = "Error deleting student";

/// Something the user asked the page to do.
#[derive(Debug, Clone)]
pub enum Command {
    LoadRequested,
    SearchChanged(String),
    SearchSubmitted(String),
    CreateRequested,
    EditRequested(StudentId),
    FormSubmitted(StudentForm),
    ModalClosed,
    DeleteRequested(StudentId),
    DeleteConfirmed,
    DeleteCancelled,
}

/// Which part of the page needs re-rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    List,
    StudentModal,
    ConfirmModal,
    Toast,
}

impl ViewEvent {
    pub const fn name(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::StudentModal => "student_modal",
            Self::ConfirmModal => "confirm_modal",
            Self::Toast => "toast",
        }
    }
}

/// Owns the view state of one page session and keeps it in sync with the students service.
///
/// Cloning is cheap and every clone drives the same session. The view state lock is never held
/// across a request, so overlapping commands interleave; list responses that were overtaken by a
/// newer list request are dropped instead of overwriting it.
#[derive(Clone)]
pub struct ViewController {
    api: Arc<dyn StudentsApi>,
    view: Arc<Mutex<ViewState>>,
    search_debouncer: Arc<Debouncer>,
    events: Sender<ViewEvent>,
    ui_config: UiConfig,
}

/// Keeps the loading indicator up for as long as it lives.
struct LoadingGuard {
    view: Arc<Mutex<ViewState>>,
    events: Sender<ViewEvent>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.view
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .finish_list_request();
        let _ = self.events.send(ViewEvent::List);
    }
}

impl ViewController {
    pub fn new(api: Arc<dyn StudentsApi>, ui_config: UiConfig) -> Self {
        let (tx, _rx) = channel(64);

        Self {
            api,
            view: Arc::new(Mutex::new(ViewState::default())),
            search_debouncer: Arc::new(Debouncer::new(ui_config.search_debounce)),
            events: tx,
            ui_config,
        }
    }

    fn view(&self) -> MutexGuard<'_, ViewState> {
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn with_view<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        f(&self.view())
    }

    pub fn subscribe(&self) -> Receiver<ViewEvent> {
        self.events.subscribe()
    }

    fn emit(&self, event: ViewEvent) {
        let _ = self.events.send(event);
    }

    fn notify(&self, kind: NotificationKind, message: impl Into<String>) {
        let id = self.view().show_notification(message.into(), kind);
        self.emit(ViewEvent::Toast);

        let this = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(this.ui_config.toast_lifetime).await;
            if this.view().dismiss_notification(id) {
                this.emit(ViewEvent::Toast);
            }
        });
    }

    pub async fn dispatch(&self, command: Command) {
        debug!(?command, "Dispatching");

        match command {
            Command::LoadRequested => self.load_all().await,
            Command::SearchChanged(text) => self.search_changed(text),
            Command::SearchSubmitted(text) => self.search_submitted(text).await,
            Command::CreateRequested => self.open_create(),
            Command::EditRequested(id) => self.open_edit(id).await,
            Command::FormSubmitted(form) => self.submit_form(form).await,
            Command::ModalClosed => self.close_modal(),
            Command::DeleteRequested(id) => self.request_delete(id),
            Command::DeleteConfirmed => self.confirm_delete().await,
            Command::DeleteCancelled => self.cancel_delete(),
        }
    }

    pub async fn load_all(&self) {
        self.refresh_list(None).await;
    }

    /// Searches by name or roll number; a blank query loads everyone.
    pub async fn search(&self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            self.load_all().await;
        } else {
            self.refresh_list(Some(query)).await;
        }
    }

    async fn refresh_list(&self, query: Option<&str>) {
        let generation = self.view().begin_list_request();
        let _loading = LoadingGuard {
            view: self.view.clone(),
            events: self.events.clone(),
        };
        self.emit(ViewEvent::List);

        let result = match query {
            Some(query) => self.api.search(query).await,
            None => self.api.list().await,
        };

        let failure = {
            let mut view = self.view();
            if !view.is_latest_list_request(generation) {
                debug!(generation, "Dropping list response overtaken by a newer request");
                return;
            }

            match result {
                Ok(students) => {
                    view.replace_list(students);
                    None
                }
                Err(e) => Some(e),
            }
        };

        match failure {
            None => self.emit(ViewEvent::List),
            Some(e) => {
                error!(?e, ?query, "Error loading students");
                self.notify(
                    NotificationKind::Error,
                    if query.is_some() { SEARCH_FAILED } else { LOAD_FAILED },
                );
            }
        }
    }

    /// Records the search box contents, searching once typing has paused.
    pub fn search_changed(&self, text: String) {
        self.view().search_query.clone_from(&text);

        let this = self.clone();
        self.search_debouncer.schedule(async move {
            this.search(&text).await;
        });
    }

    /// Searches straight away, superseding any search still waiting on the debounce timer.
    pub async fn search_submitted(&self, text: String) {
        self.search_debouncer.cancel();
        self.view().search_query.clone_from(&text);
        self.search(&text).await;
    }

    pub fn open_create(&self) {
        self.view().open_create();
        self.emit(ViewEvent::StudentModal);
    }

    pub async fn open_edit(&self, id: StudentId) {
        match self.api.get(id).await {
            Ok(student) => {
                self.view().open_edit(&student);
                self.emit(ViewEvent::StudentModal);
            }
            Err(e) => {
                error!(?e, %id, "Error fetching student");
                self.notify(NotificationKind::Error, DETAILS_FAILED);
            }
        }
    }

    /// Adds or updates a student from the form; on failure the modal stays open with what was typed.
    pub async fn submit_form(&self, form: StudentForm) {
        let mode = {
            let mut view = self.view();
            //a submit that lands after the modal was closed belongs to discarded input
            if !view.student_modal_open {
                debug!("Ignoring form submitted while the modal is closed");
                return;
            }
            view.form = form.clone();
            view.form_mode()
        };

        let payload = match form.to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                warn!(?e, "Rejected student form");
                self.notify(NotificationKind::Error, e.user_message(SAVE_FAILED));
                return;
            }
        };

        let result = match mode {
            FormMode::Edit(id) => self.api.update(id, &payload).await,
            FormMode::Create => self.api.create(&payload).await,
        };

        match result {
            Ok(student) => {
                info!(id = %student.id, ?mode, "Saved student");
                let message = match mode {
                    FormMode::Edit(_) => "Student updated successfully!",
                    FormMode::Create => "Student added successfully!",
                };
                self.notify(NotificationKind::Success, message);
                self.close_modal();
                self.load_all().await;
            }
            Err(e) => {
                error!(?e, ?mode, "Error saving student");
                self.notify(NotificationKind::Error, e.user_message(SAVE_FAILED));
            }
        }
    }

    pub fn close_modal(&self) {
        self.view().close_student_modal();
        self.emit(ViewEvent::StudentModal);
    }

    pub fn request_delete(&self, id: StudentId) {
        self.view().request_delete(id);
        self.emit(ViewEvent::ConfirmModal);
    }

    pub async fn confirm_delete(&self) {
        let Some(id) = self.view().pending_delete_id else {
            return;
        };

        match self.api.delete(id).await {
            Ok(()) => {
                info!(%id, "Deleted student");
                self.notify(NotificationKind::Success, "Student deleted successfully!");
                {
                    let mut view = self.view();
                    //the user may have moved on to another student while this was in flight
                    if view.pending_delete_id == Some(id) {
                        view.close_confirm_modal();
                    }
                }
                self.emit(ViewEvent::ConfirmModal);
                self.load_all().await;
            }
            Err(e) => {
                error!(?e, %id, "Error deleting student");
                self.notify(NotificationKind::Error, DELETE_FAILED);
            }
        }
    }

    pub fn cancel_delete(&self) {
        self.view().close_confirm_modal();
        self.emit(ViewEvent::ConfirmModal);
    }
}
