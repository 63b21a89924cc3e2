use crate::{
    api::StudentsApi,
    config::UiConfig,
    controller::{Command, ViewController, ViewEvent},
    view,
};
use maud::{DOCTYPE, Markup, html};
use std::sync::Arc;
use tokio::sync::broadcast::Receiver;

#[derive(Clone)]
pub struct RollcallState {
    controller: ViewController,
}

impl RollcallState {
    pub fn new(api: Arc<dyn StudentsApi>, ui_config: UiConfig) -> Self {
        Self {
            controller: ViewController::new(api, ui_config),
        }
    }

    #[allow(clippy::unused_self)] //in case self is ever needed :)
    pub fn render(&self, markup: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="UTF-8" {}
                    meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                    script src="https://unpkg.com/htmx.org@2.0.4" integrity="sha384-HGfztofotfshcF7+8n44JQL2oJmowVChPTg48S+jvZoztPfvwD79OC/LTtG6dMp+" crossorigin="anonymous" {}
                    script src="https://unpkg.com/htmx-ext-sse@2.2.3" integrity="sha384-Y4gc0CK6Kg+hmulDc6rZPJu0tqvk7EWlih0Oh+2OkAi1ZDlCbBDCQEE2uVk472Ky" crossorigin="anonymous" {}
                    script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                    title { "Student Management" }
                }
                body hx-ext="sse" sse-connect="/sse_feed" class="bg-gray-900 min-h-screen flex flex-col items-center text-white p-8" {
                    (markup)
                }
            }
        }
    }

    pub async fn dispatch(&self, command: Command) {
        self.controller.dispatch(command).await;
    }

    pub fn render_list(&self) -> Markup {
        self.controller.with_view(view::render_list)
    }

    pub fn render_student_modal(&self) -> Markup {
        self.controller.with_view(view::render_student_modal)
    }

    pub fn render_confirm_modal(&self) -> Markup {
        self.controller.with_view(view::render_confirm_modal)
    }

    pub fn render_toast(&self) -> Markup {
        self.controller.with_view(view::render_toast)
    }

    pub fn search_query(&self) -> String {
        self.controller.with_view(|v| v.search_query.clone())
    }

    pub fn subscribe_to_sse_feed(&self) -> Receiver<ViewEvent> {
        self.controller.subscribe()
    }
}
