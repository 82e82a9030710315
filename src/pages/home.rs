//! Home page listing the signed-in user's tasks.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::tasks::TasksClient;
use crate::net::transport::BrowserTransport;
use crate::net::types::{Task, TaskDraft};
use crate::routes::{AppRoute, NEW_TASK_PATH};
use crate::state::session_store::SessionStore;

#[component]
pub fn HomePage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let config = expect_context::<ClientConfig>();

    let client = move || TasksClient::new(BrowserTransport::new(config.clone()), store.clone());
    let tasks = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client();
            async move { client.list().await }
        }
    });

    let on_toggle = Callback::new({
        let client = client.clone();
        move |task: Task| {
            let client = client();
            leptos::task::spawn_local(async move {
                let draft = TaskDraft { completed: !task.completed, ..TaskDraft::from(&task) };
                if let Err(err) = client.update(&task.id, &draft).await {
                    log::warn!("toggle failed for task {}: {err}", task.id);
                }
                tasks.refetch();
            });
        }
    });

    let on_delete = Callback::new(move |id: String| {
        let client = client();
        leptos::task::spawn_local(async move {
            if let Err(err) = client.delete(&id).await {
                log::warn!("delete failed for task {id}: {err}");
            }
            tasks.refetch();
        });
    });

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"Tasks"</h1>
                <a href=NEW_TASK_PATH class="btn btn--primary">"+ New Task"</a>
            </header>
            <Suspense fallback=move || view! { <p>"Loading tasks..."</p> }>
                {move || {
                    tasks
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p class="home-page__empty">"No tasks yet."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <ul class="task-list">
                                        {list
                                            .into_iter()
                                            .map(|task| view! { <TaskRow task=task on_toggle=on_toggle on_delete=on_delete/> })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! { <p class="home-page__error">{format!("Could not load tasks: {err}")}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn TaskRow(task: Task, on_toggle: Callback<Task>, on_delete: Callback<String>) -> impl IntoView {
    let href = AppRoute::EditTask(task.id.clone()).path();
    let id = task.id.clone();
    let title = task.title.clone();
    let description = task.description.clone();
    let completed = task.completed;
    let row_class = if completed { "task-row task-row--done" } else { "task-row" };

    view! {
        <li class=row_class>
            <input
                type="checkbox"
                prop:checked=completed
                on:change=move |_| on_toggle.run(task.clone())
            />
            <a href=href class="task-row__title">{title}</a>
            {description.map(|d| view! { <span class="task-row__description">{d}</span> })}
            <button class="btn task-row__delete" on:click=move |_| on_delete.run(id.clone())>
                "Delete"
            </button>
        </li>
    }
}
