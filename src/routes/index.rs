use crate::state::RollcallState;
use axum::extract::State;
use maud::{Markup, html};

#[axum::debug_handler]
pub async fn get_index_route(State(state): State<RollcallState>) -> Markup {
    let search_query = state.search_query();

    state.render(html! {
        div class="mx-auto max-w-6xl w-full flex flex-col space-y-6" {
            div class="flex flex-row items-center justify-between" {
                h1 class="text-3xl font-semibold" {"Student Management"}
                button class="bg-blue-600 hover:bg-blue-800 font-bold py-2 px-4 rounded" hx-post="/internal/students/new" hx-swap="none" {
                    "Add Student"
                }
            }

            form class="flex flex-row space-x-2" hx-post="/internal/search" hx-swap="none" {
                input type="search" name="q" value=(search_query) placeholder="Search by name or roll number..." class="flex-grow bg-gray-700 text-gray-100 rounded px-4 py-2 border border-gray-600 focus:outline-none focus:ring focus:ring-blue-500 placeholder-gray-400" hx-post="/internal/search/input" hx-trigger="input" hx-swap="none" {}
                button type="submit" class="bg-slate-600 hover:bg-slate-800 font-bold py-2 px-4 rounded" {"Search"}
            }

            div hx-post="/internal/load" hx-trigger="load" hx-swap="none" {}
            div id="all_students" hx-get="/internal/list" hx-trigger="load, sse:list" {}
            div id="student_modal" hx-get="/internal/student_modal" hx-trigger="load, sse:student_modal" {}
            div id="confirm_modal" hx-get="/internal/confirm_modal" hx-trigger="load, sse:confirm_modal" {}
            div id="toast" hx-get="/internal/toast" hx-trigger="load, sse:toast" {}
        }
    })
}
