use crate::{
    controller::notification::{Notification, NotificationKind},
    data::student::{Student, StudentForm, StudentId},
};

/// Whether the add/edit modal adds a new student or updates an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(StudentId),
}

/// Everything the page shows, for one page session.
///
/// The add/edit modal and the delete confirmation each own their own id slot (`editing_id` and
/// `pending_delete_id`) and their own visibility flag, so neither modal ever acts on the other's
/// student.
#[derive(Debug, Default)]
pub struct ViewState {
    pub current_list: Vec<Student>,
    pub has_loaded: bool,
    pub search_query: String,

    pub editing_id: Option<StudentId>,
    pub form: StudentForm,
    pub student_modal_open: bool,

    pub pending_delete_id: Option<StudentId>,
    pub confirm_modal_open: bool,

    pub notification: Option<Notification>,

    loads_in_flight: usize,
    list_generation: u64,
    notification_sequence: u64,
}

impl ViewState {
    pub const fn is_loading(&self) -> bool {
        self.loads_in_flight > 0
    }

    pub const fn form_mode(&self) -> FormMode {
        match self.editing_id {
            Some(id) => FormMode::Edit(id),
            None => FormMode::Create,
        }
    }

    /// Marks a new list request as in flight, returning its generation.
    pub const fn begin_list_request(&mut self) -> u64 {
        self.loads_in_flight += 1;
        self.list_generation += 1;
        self.list_generation
    }

    pub const fn finish_list_request(&mut self) {
        self.loads_in_flight = self.loads_in_flight.saturating_sub(1);
    }

    /// Only the most recently issued list request may change the list.
    pub const fn is_latest_list_request(&self, generation: u64) -> bool {
        generation == self.list_generation
    }

    pub fn replace_list(&mut self, students: Vec<Student>) {
        self.current_list = students;
        self.has_loaded = true;
    }

    pub fn open_create(&mut self) {
        self.form = StudentForm::default();
        self.editing_id = None;
        self.student_modal_open = true;
    }

    pub fn open_edit(&mut self, student: &Student) {
        self.form = StudentForm::from(student);
        self.editing_id = Some(student.id);
        self.student_modal_open = true;
    }

    pub fn close_student_modal(&mut self) {
        self.student_modal_open = false;
        self.form = StudentForm::default();
        self.editing_id = None;
    }

    pub const fn request_delete(&mut self, id: StudentId) {
        self.pending_delete_id = Some(id);
        self.confirm_modal_open = true;
    }

    pub const fn close_confirm_modal(&mut self) {
        self.confirm_modal_open = false;
        self.pending_delete_id = None;
    }

    /// Replaces the current notification, returning the new one's id.
    pub fn show_notification(&mut self, message: String, kind: NotificationKind) -> u64 {
        self.notification_sequence += 1;
        self.notification = Some(Notification {
            id: self.notification_sequence,
            message,
            kind,
        });
        self.notification_sequence
    }

    /// Dismisses the notification with this id, if it is still the one showing.
    pub fn dismiss_notification(&mut self, id: u64) -> bool {
        if self.notification.as_ref().is_some_and(|n| n.id == id) {
            self.notification = None;
            true
        } else {
            false
        }
    }
}
