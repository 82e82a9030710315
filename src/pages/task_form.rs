//! Create/edit form for a single task (`/tasks/new`, `/tasks/:id`).

#[cfg(test)]
#[path = "task_form_test.rs"]
mod task_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::config::ClientConfig;
use crate::net::in_flight::InFlight;
use crate::net::tasks::TasksClient;
use crate::net::transport::BrowserTransport;
use crate::net::types::TaskDraft;
use crate::routes::HOME_PATH;
use crate::state::session_store::SessionStore;

const TITLE_REQUIRED: &str = "Enter a title first.";

/// Build the request body from raw form values.
fn validate_task_input(title: &str, description: &str, completed: bool) -> Result<TaskDraft, &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err(TITLE_REQUIRED);
    }
    let description = Some(description.trim()).filter(|d| !d.is_empty()).map(ToOwned::to_owned);
    Ok(TaskDraft { title: title.to_owned(), description, completed })
}

fn form_heading(task_id: Option<&str>) -> &'static str {
    if task_id.is_some() { "Edit task" } else { "New task" }
}

#[component]
pub fn TaskFormPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();
    let params = use_params_map();
    let task_id = move || params.read().get("id");

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let completed = RwSignal::new(false);
    let info = RwSignal::new(String::new());
    let in_flight = InFlight::default();
    on_cleanup({
        let in_flight = in_flight.clone();
        move || in_flight.cancel()
    });

    let existing = LocalResource::new({
        let store = store.clone();
        let config = config.clone();
        move || {
            let id = task_id();
            let client = TasksClient::new(BrowserTransport::new(config.clone()), store.clone());
            async move {
                match id {
                    Some(id) => client.get(&id).await.map(Some),
                    None => Ok(None),
                }
            }
        }
    });

    Effect::new(move || match existing.get() {
        Some(Ok(Some(task))) => {
            title.set(task.title);
            description.set(task.description.unwrap_or_default());
            completed.set(task.completed);
        }
        Some(Err(err)) => info.set(format!("Could not load task: {err}")),
        _ => {}
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = match validate_task_input(&title.get_untracked(), &description.get_untracked(), completed.get_untracked()) {
            Ok(draft) => draft,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        info.set("Saving...".to_owned());

        let id = params.read_untracked().get("id");
        let client = TasksClient::new(BrowserTransport::new(config.clone()), store.clone());
        let pending = in_flight.run(async move {
            match id {
                Some(id) => client.update(&id, &draft).await,
                None => client.create(&draft).await,
            }
        });
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match pending.await {
                Some(Ok(task)) => {
                    log::info!("saved task {}", task.id);
                    navigate(HOME_PATH, NavigateOptions::default());
                }
                Some(Err(err)) => info.set(format!("Save failed: {err}")),
                None => {}
            }
        });
    };

    view! {
        <div class="task-form-page">
            <form class="task-form" on:submit=on_submit>
                <h2>{move || form_heading(task_id().as_deref())}</h2>
                <input
                    class="task-form__input"
                    type="text"
                    name="title"
                    placeholder="Title"
                    required
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <textarea
                    class="task-form__input"
                    name="description"
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <label class="task-form__check">
                    <input
                        type="checkbox"
                        prop:checked=move || completed.get()
                        on:change=move |ev| completed.set(event_target_checked(&ev))
                    />
                    "Completed"
                </label>
                <div class="task-form__actions">
                    <a href=HOME_PATH class="btn">"Cancel"</a>
                    <button class="btn btn--primary" type="submit">"Save"</button>
                </div>
                <Show when=move || !info.get().is_empty()>
                    <p class="task-form__message">{move || info.get()}</p>
                </Show>
            </form>
        </div>
    }
}
