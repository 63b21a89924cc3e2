use crate::{
    controller::Command,
    data::{IdPath, SearchForm, student::StudentForm},
    state::RollcallState,
};
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
};

pub async fn internal_post_load(State(state): State<RollcallState>) -> StatusCode {
    state.dispatch(Command::LoadRequested).await;
    StatusCode::NO_CONTENT
}

pub async fn internal_post_search(
    State(state): State<RollcallState>,
    Form(SearchForm { q }): Form<SearchForm>,
) -> StatusCode {
    state.dispatch(Command::SearchSubmitted(q)).await;
    StatusCode::NO_CONTENT
}

pub async fn internal_post_search_input(
    State(state): State<RollcallState>,
    Form(SearchForm { q }): Form<SearchForm>,
) -> StatusCode {
    state.dispatch(Command::SearchChanged(q)).await;
    StatusCode::NO_CONTENT
}

pub async fn internal_post_new_student(State(state): State<RollcallState>) -> StatusCode {
    state.dispatch(Command::CreateRequested).await;
    StatusCode::NO_CONTENT
}

pub async fn internal_post_edit_student(
    State(state): State<RollcallState>,
    Path(IdPath { id }): Path<IdPath>,
) -> StatusCode {
    state.dispatch(Command::EditRequested(id)).await;
    StatusCode::NO_CONTENT
}

pub async fn internal_post_delete_student(
    State(state): State<RollcallState>,
    Path(IdPath { id }): Path<IdPath>,
) -> StatusCode {
    state.dispatch(Command::DeleteRequested(id)).await;
    StatusCode::NO_CONTENT
}

pub async fn internal_post_submit_form(
    State(state): State<RollcallState>,
    Form(form): Form<StudentForm>,
) -> StatusCode {
    state.dispatch(Command::FormSubmitted(form)).await;
    StatusCode::NO_CONTENT
}

pub async fn internal_post_close_form(State(state): State<RollcallState>) -> StatusCode {
    state.dispatch(Command::ModalClosed).await;
    StatusCode::NO_CONTENT
}

pub async fn internal_post_confirm_delete(State(state): State<RollcallState>) -> StatusCode {
    state.dispatch(Command::DeleteConfirmed).await;
    StatusCode::NO_CONTENT
}

pub async fn internal_post_cancel_delete(State(state): State<RollcallState>) -> StatusCode {
    state.dispatch(Command::DeleteCancelled).await;
    StatusCode::NO_CONTENT
}
