use crate::state::RollcallState;
use axum::extract::State;
use maud::Markup;

pub async fn internal_get_list(State(state): State<RollcallState>) -> Markup {
    state.render_list()
}

pub async fn internal_get_student_modal(State(state): State<RollcallState>) -> Markup {
    state.render_student_modal()
}

pub async fn internal_get_confirm_modal(State(state): State<RollcallState>) -> Markup {
    state.render_confirm_modal()
}

pub async fn internal_get_toast(State(state): State<RollcallState>) -> Markup {
    state.render_toast()
}
