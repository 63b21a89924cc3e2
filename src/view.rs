use crate::{
    controller::view_state::{FormMode, ViewState},
    data::student::{DEPARTMENTS, Student, YEARS, year_label},
    maud_conveniences::{form_submit_button, select_form_element, simple_form_element, title},
};
use maud::{Markup, html};

pub fn render_list(view: &ViewState) -> Markup {
    html! {
        @if view.is_loading() {
            div id="loading_spinner" class="flex justify-center py-12" {
                div class="animate-spin rounded-full h-12 w-12 border-4 border-gray-600 border-t-blue-500" {}
            }
        } @else if view.has_loaded && view.current_list.is_empty() {
            (render_empty_state())
        } @else {
            div id="students_container" class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4" {
                @for student in &view.current_list {
                    (render_student_card(student))
                }
            }
        }
    }
}

pub fn render_empty_state() -> Markup {
    html! {
        div id="empty_state" class="text-center text-gray-400 py-12" {
            h3 class="text-xl font-semibold mb-2" {"No students found"}
            p {"Add a student to get started."}
        }
    }
}

pub fn render_student_card(student: &Student) -> Markup {
    html! {
        div class="student-card bg-gray-800 rounded shadow-md p-4 flex flex-col space-y-3" {
            div class="flex flex-row items-center space-x-3" {
                div class="student-avatar bg-blue-600 rounded-full h-12 w-12 flex items-center justify-center font-bold" {
                    (student.initials())
                }
                div {
                    h3 class="text-lg font-semibold" {(student)}
                    div class="text-sm text-gray-400" {(student.roll_number)}
                }
            }
            div class="text-sm space-y-1" {
                (info_item("Email:", &student.email))
                (info_item("Department:", &student.department))
                (info_item("Year:", &student.year_label()))
            }
            div class="flex flex-row space-x-2" {
                button class="bg-slate-600 hover:bg-slate-800 font-bold py-1 px-3 rounded" hx-post={"/internal/students/" (student.id) "/edit"} hx-swap="none" {
                    "Edit"
                }
                button class="bg-red-600 hover:bg-red-800 font-bold py-1 px-3 rounded" hx-post={"/internal/students/" (student.id) "/delete"} hx-swap="none" {
                    "Delete"
                }
            }
        }
    }
}

fn info_item(label: &str, value: &str) -> Markup {
    html! {
        div {
            span class="text-gray-400 mr-2" {(label)}
            span {(value)}
        }
    }
}

fn modal_backdrop(id: &'static str, close_url: &'static str, contents: Markup) -> Markup {
    html! {
        div id=(id) class="fixed inset-0 bg-black/60 flex items-center justify-center" hx-post=(close_url) hx-trigger={"click target:#" (id)} hx-swap="none" {
            div class="bg-gray-800 p-8 rounded shadow-md max-w-md w-full" {
                (contents)
            }
        }
    }
}

pub fn render_student_modal(view: &ViewState) -> Markup {
    if !view.student_modal_open {
        return html! {};
    }

    let (heading, button) = match view.form_mode() {
        FormMode::Create => ("Add Student", "Add Student"),
        FormMode::Edit(_) => ("Edit Student", "Update Student"),
    };
    let draft = &view.form;

    modal_backdrop(
        "student_modal_backdrop",
        "/internal/form/close",
        html! {
            (title(heading))
            form hx-post="/internal/form/submit" hx-swap="none" {
                (simple_form_element("first_name", "First Name", true, None, &draft.first_name))
                (simple_form_element("last_name", "Last Name", true, None, &draft.last_name))
                (simple_form_element("email", "Email", true, Some("email"), &draft.email))
                (simple_form_element("roll_number", "Roll Number", true, None, &draft.roll_number))
                (select_form_element(
                    "department",
                    "Department",
                    "Select department",
                    DEPARTMENTS.iter().map(|d| ((*d).to_string(), (*d).to_string())),
                    &draft.department,
                ))
                (select_form_element(
                    "year",
                    "Year",
                    "Select year",
                    YEARS.iter().map(|y| (y.to_string(), year_label(*y))),
                    &draft.year,
                ))

                div class="flex items-center justify-between" {
                    button type="button" class="bg-gray-600 hover:bg-gray-700 font-bold py-2 px-4 rounded" hx-post="/internal/form/close" hx-swap="none" {
                        "Cancel"
                    }
                    (form_submit_button(button))
                }
            }
        },
    )
}

pub fn render_confirm_modal(view: &ViewState) -> Markup {
    if !view.confirm_modal_open {
        return html! {};
    }

    modal_backdrop(
        "confirm_modal_backdrop",
        "/internal/delete/cancel",
        html! {
            (title("Delete Student"))
            p class="mb-6" {"Are you sure you want to delete this student? This cannot be undone."}
            div class="flex items-center justify-between" {
                button class="bg-gray-600 hover:bg-gray-700 font-bold py-2 px-4 rounded" hx-post="/internal/delete/cancel" hx-swap="none" {
                    "Cancel"
                }
                button class="bg-red-600 hover:bg-red-800 font-bold py-2 px-4 rounded" hx-post="/internal/delete/confirm" hx-swap="none" {
                    "Delete"
                }
            }
        },
    )
}

pub fn render_toast(view: &ViewState) -> Markup {
    html! {
        @if let Some(notification) = &view.notification {
            div class={"fixed bottom-4 right-4 px-4 py-3 rounded shadow-md " (notification.kind.css_class())} role="status" {
                (notification.message)
            }
        }
    }
}
