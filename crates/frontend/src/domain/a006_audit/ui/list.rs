use contracts::domain::a006_audit::aggregate::{AuditLogEntry, MaterialAuditLogEntry};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a006_audit::api::{
    fetch_audit_logs, fetch_material_audit_logs, AuditLogFilter, MaterialAuditFilter,
};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;

const PAGE_SIZE: u64 = 50;

#[derive(Clone, Copy, PartialEq, Eq)]
enum AuditView {
    Materials,
    Raw,
}

/// Audit log: a human-readable material feed plus the raw change table.
#[component]
#[allow(non_snake_case)]
pub fn AuditLogPage() -> impl IntoView {
    let (mode, set_mode) = signal(AuditView::Materials);

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Audit log"}</h2>
                <div class="header-actions">
                    <button
                        class=move || if mode.get() == AuditView::Materials { "btn btn-primary" } else { "btn btn-secondary" }
                        on:click=move |_| set_mode.set(AuditView::Materials)
                    >
                        {"Material changes"}
                    </button>
                    <button
                        class=move || if mode.get() == AuditView::Raw { "btn btn-primary" } else { "btn btn-secondary" }
                        on:click=move |_| set_mode.set(AuditView::Raw)
                    >
                        {"Raw log"}
                    </button>
                </div>
            </div>

            {move || match mode.get() {
                AuditView::Materials => view! { <MaterialAuditTable /> }.into_any(),
                AuditView::Raw => view! { <RawAuditTable /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn MaterialAuditTable() -> impl IntoView {
    let filter = RwSignal::new(MaterialAuditFilter {
        limit: PAGE_SIZE,
        ..Default::default()
    });
    let (items, set_items) = signal::<Vec<MaterialAuditLogEntry>>(Vec::new());
    let (total, set_total) = signal(0u64);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        let f = filter.get();
        spawn_local(async move {
            match fetch_material_audit_logs(&f).await {
                Ok(page) => {
                    set_items.set(page.items);
                    set_total.set(page.total);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    view! {
        <div>
            <div style="display: flex; gap: 8px; margin-bottom: 8px;">
                <SearchInput
                    value=Signal::derive(move || filter.get().search.unwrap_or_default())
                    on_change=Callback::new(move |val: String| {
                        filter.update(|f| {
                            f.search = if val.trim().is_empty() { None } else { Some(val) };
                            f.skip = 0;
                        });
                    })
                    placeholder="Search material or user...".to_string()
                />
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table>
                    <thead>
                        <tr>
                            <th>{"When"}</th>
                            <th>{"Material"}</th>
                            <th>{"Change"}</th>
                            <th>{"By"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|entry| {
                            view! {
                                <tr>
                                    <td>{format_datetime(&entry.timestamp.to_rfc3339())}</td>
                                    <td>
                                        {entry.material_number.to_string()}
                                        {entry.material_desc.clone().map(|d| format!(" — {}", d)).unwrap_or_default()}
                                    </td>
                                    <td>{entry.change_summary.clone()}</td>
                                    <td>{entry
                                        .changed_by_user
                                        .as_ref()
                                        .and_then(|u| u.full_name.clone())
                                        .or(entry.changed_by.clone())
                                        .unwrap_or_else(|| "-".to_string())}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <Pager
                skip=Signal::derive(move || filter.get().skip)
                total=total
                on_page=Callback::new(move |skip: u64| filter.update(|f| f.skip = skip))
            />
        </div>
    }
}

#[component]
fn RawAuditTable() -> impl IntoView {
    let filter = RwSignal::new(AuditLogFilter {
        limit: PAGE_SIZE,
        ..Default::default()
    });
    let (items, set_items) = signal::<Vec<AuditLogEntry>>(Vec::new());
    let (total, set_total) = signal(0u64);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        let f = filter.get();
        spawn_local(async move {
            match fetch_audit_logs(&f).await {
                Ok(page) => {
                    set_items.set(page.items);
                    set_total.set(page.total);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    view! {
        <div>
            <div style="display: flex; gap: 8px; margin-bottom: 8px; align-items: center;">
                <input type="text" class="form-control" placeholder="Table name"
                    on:change=move |ev| {
                        let v = event_target_value(&ev);
                        filter.update(|f| {
                            f.table_name = if v.trim().is_empty() { None } else { Some(v) };
                            f.skip = 0;
                        });
                    }
                />
                <select class="form-control"
                    on:change=move |ev| {
                        let v = event_target_value(&ev);
                        filter.update(|f| {
                            f.operation = if v.is_empty() { None } else { Some(v) };
                            f.skip = 0;
                        });
                    }
                >
                    <option value="">{"Any operation"}</option>
                    <option value="INSERT">{"INSERT"}</option>
                    <option value="UPDATE">{"UPDATE"}</option>
                    <option value="DELETE">{"DELETE"}</option>
                </select>
                <input type="number" class="form-control" placeholder="Record id"
                    on:change=move |ev| {
                        let v = event_target_value(&ev).trim().parse::<i64>().ok();
                        filter.update(|f| { f.record_id = v; f.skip = 0; });
                    }
                />
                <input type="date" class="form-control" title="From"
                    on:change=move |ev| {
                        let v = event_target_value(&ev);
                        filter.update(|f| {
                            f.date_from = if v.is_empty() { None } else { Some(v) };
                            f.skip = 0;
                        });
                    }
                />
                <input type="date" class="form-control" title="To"
                    on:change=move |ev| {
                        let v = event_target_value(&ev);
                        filter.update(|f| {
                            f.date_to = if v.is_empty() { None } else { Some(v) };
                            f.skip = 0;
                        });
                    }
                />
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table>
                    <thead>
                        <tr>
                            <th>{"When"}</th>
                            <th>{"Table"}</th>
                            <th>{"Record"}</th>
                            <th>{"Operation"}</th>
                            <th>{"Fields changed"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|entry| {
                            view! {
                                <tr>
                                    <td>{format_datetime(&entry.changed_at.to_rfc3339())}</td>
                                    <td>{entry.table_name.clone()}</td>
                                    <td>{entry.record_id.to_string()}</td>
                                    <td>{entry.operation.clone()}</td>
                                    <td>{entry
                                        .fields_changed
                                        .as_ref()
                                        .map(|f| f.join(", "))
                                        .unwrap_or_else(|| "-".to_string())}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <Pager
                skip=Signal::derive(move || filter.get().skip)
                total=total
                on_page=Callback::new(move |skip: u64| filter.update(|f| f.skip = skip))
            />
        </div>
    }
}

/// Shared prev/next pager for the audit tables.
#[component]
fn Pager(
    #[prop(into)] skip: Signal<u64>,
    #[prop(into)] total: Signal<u64>,
    #[prop(into)] on_page: Callback<u64>,
) -> impl IntoView {
    let page = move || skip.get() / PAGE_SIZE;
    let pages = move || total.get().div_ceil(PAGE_SIZE);

    view! {
        <div style="display: flex; align-items: center; gap: 12px; padding: 8px 0;">
            <button
                class="btn btn-secondary"
                disabled=move || page() == 0
                on:click=move |_| on_page.run((page().saturating_sub(1)) * PAGE_SIZE)
            >
                {icon("chevron-left")}
            </button>
            <span>{move || format!("Page {} of {} ({} entries)", page() + 1, pages().max(1), total.get())}</span>
            <button
                class="btn btn-secondary"
                disabled=move || page() + 1 >= pages()
                on:click=move |_| on_page.run((page() + 1) * PAGE_SIZE)
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
