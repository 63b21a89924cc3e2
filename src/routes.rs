use crate::{
    routes::{
        commands::{
            internal_post_cancel_delete, internal_post_close_form, internal_post_confirm_delete,
            internal_post_delete_student, internal_post_edit_student, internal_post_load,
            internal_post_new_student, internal_post_search, internal_post_search_input,
            internal_post_submit_form,
        },
        fragments::{
            internal_get_confirm_modal, internal_get_list, internal_get_student_modal,
            internal_get_toast,
        },
        index::get_index_route,
        sse::sse_feed,
    },
    state::RollcallState,
};
use axum::{
    Router,
    routing::{get, post},
};

pub mod commands;
pub mod fragments;
pub mod index;
pub mod sse;

pub fn router(state: RollcallState) -> Router {
    Router::new()
        .route("/", get(get_index_route))
        .route("/sse_feed", get(sse_feed))
        .route("/internal/list", get(internal_get_list))
        .route("/internal/student_modal", get(internal_get_student_modal))
        .route("/internal/confirm_modal", get(internal_get_confirm_modal))
        .route("/internal/toast", get(internal_get_toast))
        .route("/internal/load", post(internal_post_load))
        .route("/internal/search", post(internal_post_search))
        .route("/internal/search/input", post(internal_post_search_input))
        .route("/internal/students/new", post(internal_post_new_student))
        .route(
            "/internal/students/{id}/edit",
            post(internal_post_edit_student),
        )
        .route(
            "/internal/students/{id}/delete",
            post(internal_post_delete_student),
        )
        .route("/internal/form/submit", post(internal_post_submit_form))
        .route("/internal/form/close", post(internal_post_close_form))
        .route("/internal/delete/confirm", post(internal_post_confirm_delete))
        .route("/internal/delete/cancel", post(internal_post_cancel_delete))
        .with_state(state)
}
