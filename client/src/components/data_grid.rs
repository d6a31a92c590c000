//! Generic record table rendered from `GridController` snapshots.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages build a controller with their columns and source; this component
//! mounts it, mirrors its snapshots into a signal, and routes clicks back to
//! the controller's transitions. The controller is released on cleanup.

#[cfg(test)]
#[path = "data_grid_test.rs"]
mod data_grid_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::state::grid::{Column, GridController, GridSnapshot, Record};

/// Text shown under the table, e.g. `"Page 2 of 5 (87 users)"`.
pub fn page_summary<R>(snapshot: &GridSnapshot<R>, label: &str) -> String {
    let total = snapshot.rows.len();
    let noun = if total == 1 { label.to_owned() } else { format!("{label}s") };
    format!("Page {} of {} ({total} {noun})", snapshot.page + 1, snapshot.page_count)
}

#[component]
pub fn DataGrid<R>(controller: StoredValue<Rc<GridController<R>>, LocalStorage>) -> impl IntoView
where
    R: Record + Clone + Send + Sync + 'static,
{
    let snapshot = RwSignal::new(GridSnapshot::<R>::empty());
    let columns = StoredValue::new(controller.with_value(|c| c.columns().to_vec()));
    let label = controller.with_value(|c| c.label().to_owned());

    controller.with_value(|c| c.set_on_change(move |next| snapshot.set(next)));

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            let grid = controller.get_value();
            leptos::task::spawn_local(async move { grid.mount().await });
        }
    });
    on_cleanup(move || {
        let _ = controller.try_with_value(|c| c.unmount());
    });

    let on_confirm = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let grid = controller.get_value();
            leptos::task::spawn_local(async move { grid.confirm_delete().await });
        }
    };
    let on_cancel = move |_| controller.with_value(|c| c.cancel_delete());
    let on_prev = move |_| controller.with_value(|c| c.prev_page());
    let on_next = move |_| controller.with_value(|c| c.next_page());

    view! {
        <div class="data-grid">
            <table class="data-grid__table">
                <thead>
                    <tr>
                        {columns
                            .get_value()
                            .into_iter()
                            .map(|col| {
                                let field = col.field.clone();
                                let sort_field = col.field.clone();
                                view! {
                                    <th
                                        class="data-grid__header"
                                        on:click=move |_| controller.with_value(|c| c.toggle_sort(&sort_field))
                                    >
                                        {col.header.clone()}
                                        <span class="data-grid__sort">
                                            {move || {
                                                snapshot
                                                    .with(|s| s.sort.clone())
                                                    .filter(|(f, _)| *f == field)
                                                    .map(|(_, dir)| dir.indicator())
                                                    .unwrap_or("")
                                            }}
                                        </span>
                                    </th>
                                }
                            })
                            .collect::<Vec<_>>()}
                        <th class="data-grid__header data-grid__header--actions">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        snapshot
                            .with(|s| s.visible_rows().to_vec())
                            .into_iter()
                            .map(|row| {
                                let id = row.id().to_owned();
                                let cells = columns
                                    .get_value()
                                    .into_iter()
                                    .map(|col| grid_cell(&col, &row))
                                    .collect::<Vec<_>>();
                                view! {
                                    <tr class="data-grid__row">
                                        {cells}
                                        <td class="data-grid__cell data-grid__cell--actions">
                                            <button
                                                class="btn btn--danger"
                                                on:click=move |_| {
                                                    controller.with_value(|c| c.stage_delete(&id));
                                                }
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
            <Show when=move || snapshot.with(GridSnapshot::is_loading)>
                <p class="data-grid__status">"Loading..."</p>
            </Show>
            <Show when=move || snapshot.with(|s| !s.is_loading() && s.rows.is_empty())>
                <p class="data-grid__status">"No records found."</p>
            </Show>
            <div class="data-grid__pager">
                <button class="btn" on:click=on_prev disabled=move || snapshot.with(|s| s.page == 0)>
                    "Previous"
                </button>
                <span class="data-grid__page">
                    {move || snapshot.with(|s| page_summary(s, &label))}
                </span>
                <button
                    class="btn"
                    on:click=on_next
                    disabled=move || snapshot.with(|s| s.page + 1 >= s.page_count)
                >
                    "Next"
                </button>
            </div>
            <Show when=move || snapshot.with(|s| s.staged().is_some())>
                <div class="dialog-backdrop">
                    <div class="dialog">
                        <h2 class="dialog__title">"Confirm Delete"</h2>
                        <p class="dialog__body">
                            {move || {
                                let staged = snapshot.with(|s| s.staged().map(str::to_owned));
                                staged
                                    .map(|id| controller.with_value(|c| c.confirm_message(&id)))
                                    .unwrap_or_default()
                            }}
                        </p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=on_cancel>
                                "Cancel"
                            </button>
                            <button class="btn btn--danger" on:click=on_confirm>
                                "Delete"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}

fn grid_cell<R>(col: &Column<R>, row: &R) -> AnyView {
    let text = col.value(row);
    match col.href(row) {
        Some(href) => view! {
            <td class="data-grid__cell">
                <a href=href>{text}</a>
            </td>
        }
        .into_any(),
        None => view! { <td class="data-grid__cell">{text}</td> }.into_any(),
    }
}
