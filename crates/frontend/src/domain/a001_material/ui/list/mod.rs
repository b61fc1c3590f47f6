use contracts::domain::a001_material::aggregate::Material;
use contracts::domain::a001_material::query::{MaterialListQuery, SortOrder};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_material::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::number_format::{format_money, format_qty};
use crate::shared::toast::use_toasts;
use crate::shared::url_state;

/// SAP material types offered in the filter panel. The list mirrors the
/// types present in the SAP extract.
const MATERIAL_TYPES: [&str; 5] = ["SPRS", "HALB", "FERT", "ROH", "ERSA"];

impl CsvExportable for Material {
    fn headers() -> Vec<&'static str> {
        vec![
            "Material",
            "Description",
            "Type",
            "Plant",
            "Total qty",
            "Total value",
            "Unrestricted qty",
            "Safety stock",
            "Last reviewed",
            "Next review",
            "Reviews",
            "Opportunity value",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.material_number.to_string(),
            self.material_desc.clone(),
            self.material_type.clone(),
            self.plant.clone().unwrap_or_else(|| "-".to_string()),
            self.total_quantity.map(format_qty).unwrap_or_default(),
            self.total_value.map(format_money).unwrap_or_default(),
            self.unrestricted_quantity
                .map(format_qty)
                .unwrap_or_default(),
            self.safety_stock.map(format_qty).unwrap_or_default(),
            self.last_reviewed
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
            self.next_review
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
            self.reviews_count.unwrap_or(0).to_string(),
            self.opportunity_value_sum
                .map(format_money)
                .unwrap_or_default(),
        ]
    }
}

fn sort_indicator(query: &MaterialListQuery, field: &str) -> &'static str {
    if query.sort_by.as_deref() == Some(field) {
        match query.sort_order {
            Some(SortOrder::Desc) => " ▼",
            _ => " ▲",
        }
    } else {
        " ⇅"
    }
}

#[component]
#[allow(non_snake_case)]
pub fn MaterialList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let toasts = use_toasts();

    // The query is the whole list state: filters, sort, page. It is seeded
    // from the URL so a shared link restores the exact view, and every
    // change is written back before the fetch.
    let query = RwSignal::new(MaterialListQuery::from_query_string(
        &url_state::current_query(),
    ));

    let (items, set_items) = signal::<Vec<Material>>(Vec::new());
    let (total, set_total) = signal(0u64);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_filters, set_show_filters) = signal(false);

    // Sync URL and refetch on every query change.
    Effect::new(move |_| {
        let q = query.get();
        url_state::replace_state_params(&q.to_query_string());
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_materials(&q).await {
                Ok(page) => {
                    set_items.set(page.items);
                    set_total.set(page.total);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    let toggle_sort = move |field: &'static str| {
        move |_| {
            query.update(|q| q.toggle_sort(field));
        }
    };

    let open_material = move |number: i64| {
        ctx.open_tab(
            &format!("a001_material_detail_{}", number),
            &format!("Material {}", number),
        );
    };

    let handle_export = move || {
        let rows = items.get();
        if let Err(e) = export_to_csv(&rows, "materials.csv") {
            toasts.error(format!("Export failed: {}", e));
        }
    };

    let page = move || {
        let q = query.get();
        if q.limit == 0 {
            0
        } else {
            q.skip / q.limit
        }
    };
    let page_count = move || {
        let q = query.get();
        if q.limit == 0 {
            0
        } else {
            total.get().div_ceil(q.limit)
        }
    };

    let type_checkbox = move |mat_type: &'static str| {
        let checked = move || query.get().material_type.iter().any(|t| t == mat_type);
        view! {
            <label style="display: inline-flex; align-items: center; gap: 4px; margin-right: 12px;">
                <input
                    type="checkbox"
                    prop:checked=checked
                    on:change=move |ev| {
                        let on = event_target_checked(&ev);
                        query.update(|q| {
                            q.material_type.retain(|t| t != mat_type);
                            if on {
                                q.material_type.push(mat_type.to_string());
                            }
                            q.skip = 0;
                        });
                    }
                />
                {mat_type}
            </label>
        }
    };

    let parse_f64 = |s: String| -> Option<f64> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            trimmed.parse().ok()
        }
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Materials"}</h2>
                <div class="header-actions">
                    <SearchInput
                        value=Signal::derive(move || query.get().search.unwrap_or_default())
                        on_change=Callback::new(move |val: String| {
                            query.update(|q| {
                                q.search = if val.trim().is_empty() { None } else { Some(val) };
                                q.skip = 0;
                            });
                        })
                        placeholder="Search number, description, type...".to_string()
                    />
                    <button class="btn btn-secondary" on:click=move |_| set_show_filters.update(|v| *v = !*v)>
                        {move || if show_filters.get() { "Hide filters" } else { "Filters" }}
                        {move || if query.get().has_active_filters() {
                            view! { <span style="color: #ff9800; margin-left: 4px;">{"●"}</span> }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }}
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| query.update(|_| {})>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                    <button class="btn btn-success" on:click=move |_| handle_export()>
                        {icon("excel")}
                        {"CSV"}
                    </button>
                </div>
            </div>

            {move || if show_filters.get() {
                view! {
                    <div class="filter-panel" style="border: 1px solid #ddd; border-radius: 4px; padding: 12px; margin-bottom: 12px; display: flex; flex-wrap: wrap; gap: 16px; align-items: flex-end;">
                        <div>
                            <div style="font-size: 12px; color: #666; margin-bottom: 4px;">{"Material type"}</div>
                            {MATERIAL_TYPES.into_iter().map(type_checkbox).collect_view()}
                        </div>
                        <div>
                            <div style="font-size: 12px; color: #666; margin-bottom: 4px;">{"Total value"}</div>
                            <input type="number" class="form-control" style="width: 110px;" placeholder="min"
                                prop:value=move || query.get().min_total_value.map(|v| v.to_string()).unwrap_or_default()
                                on:change=move |ev| {
                                    let v = parse_f64(event_target_value(&ev));
                                    query.update(|q| { q.min_total_value = v; q.skip = 0; });
                                }
                            />
                            <input type="number" class="form-control" style="width: 110px;" placeholder="max"
                                prop:value=move || query.get().max_total_value.map(|v| v.to_string()).unwrap_or_default()
                                on:change=move |ev| {
                                    let v = parse_f64(event_target_value(&ev));
                                    query.update(|q| { q.max_total_value = v; q.skip = 0; });
                                }
                            />
                        </div>
                        <div>
                            <div style="font-size: 12px; color: #666; margin-bottom: 4px;">{"Total quantity"}</div>
                            <input type="number" class="form-control" style="width: 110px;" placeholder="min"
                                prop:value=move || query.get().min_total_quantity.map(|v| v.to_string()).unwrap_or_default()
                                on:change=move |ev| {
                                    let v = parse_f64(event_target_value(&ev));
                                    query.update(|q| { q.min_total_quantity = v; q.skip = 0; });
                                }
                            />
                            <input type="number" class="form-control" style="width: 110px;" placeholder="max"
                                prop:value=move || query.get().max_total_quantity.map(|v| v.to_string()).unwrap_or_default()
                                on:change=move |ev| {
                                    let v = parse_f64(event_target_value(&ev));
                                    query.update(|q| { q.max_total_quantity = v; q.skip = 0; });
                                }
                            />
                        </div>
                        <div>
                            <div style="font-size: 12px; color: #666; margin-bottom: 4px;">{"Last reviewed"}</div>
                            <select class="form-control"
                                on:change=move |ev| {
                                    let v = event_target_value(&ev);
                                    query.update(|q| {
                                        q.last_reviewed_filter = if v.is_empty() { None } else { Some(v) };
                                        q.skip = 0;
                                    });
                                }
                            >
                                <option value="" selected=move || query.get().last_reviewed_filter.is_none()>{"Any"}</option>
                                <option value="overdue_90" selected=move || query.get().last_reviewed_filter.as_deref() == Some("overdue_90")>{"> 90 days ago"}</option>
                                <option value="overdue_30" selected=move || query.get().last_reviewed_filter.as_deref() == Some("overdue_30")>{"> 30 days ago"}</option>
                                <option value="never" selected=move || query.get().last_reviewed_filter.as_deref() == Some("never")>{"Never"}</option>
                            </select>
                        </div>
                        <div>
                            <div style="font-size: 12px; color: #666; margin-bottom: 4px;">{"Next review"}</div>
                            <select class="form-control"
                                on:change=move |ev| {
                                    let v = event_target_value(&ev);
                                    query.update(|q| {
                                        q.next_review_filter = if v.is_empty() { None } else { Some(v) };
                                        q.skip = 0;
                                    });
                                }
                            >
                                <option value="" selected=move || query.get().next_review_filter.is_none()>{"Any"}</option>
                                <option value="overdue" selected=move || query.get().next_review_filter.as_deref() == Some("overdue")>{"Overdue"}</option>
                                <option value="due_soon" selected=move || query.get().next_review_filter.as_deref() == Some("due_soon")>{"Due in 30 days"}</option>
                                <option value="not_scheduled" selected=move || query.get().next_review_filter.as_deref() == Some("not_scheduled")>{"Not scheduled"}</option>
                            </select>
                        </div>
                        <div>
                            <label style="display: inline-flex; align-items: center; gap: 4px; margin-right: 12px;">
                                <input type="checkbox"
                                    prop:checked=move || query.get().has_reviews == Some(true)
                                    on:change=move |ev| {
                                        let on = event_target_checked(&ev);
                                        query.update(|q| { q.has_reviews = if on { Some(true) } else { None }; q.skip = 0; });
                                    }
                                />
                                {"Has reviews"}
                            </label>
                            <label style="display: inline-flex; align-items: center; gap: 4px; margin-right: 12px;">
                                <input type="checkbox"
                                    prop:checked=move || query.get().has_errors == Some(true)
                                    on:change=move |ev| {
                                        let on = event_target_checked(&ev);
                                        query.update(|q| { q.has_errors = if on { Some(true) } else { None }; q.skip = 0; });
                                    }
                                />
                                {"Has errors"}
                            </label>
                            <label style="display: inline-flex; align-items: center; gap: 4px;">
                                <input type="checkbox"
                                    prop:checked=move || query.get().has_warnings == Some(true)
                                    on:change=move |ev| {
                                        let on = event_target_checked(&ev);
                                        query.update(|q| { q.has_warnings = if on { Some(true) } else { None }; q.skip = 0; });
                                    }
                                />
                                {"Has warnings"}
                            </label>
                        </div>
                        <button class="btn btn-secondary" on:click=move |_| query.set(MaterialListQuery::default())>
                            {"Reset"}
                        </button>
                    </div>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table>
                    <thead>
                        <tr>
                            <th class="cursor-pointer user-select-none" on:click=toggle_sort("material_number") title="Sort">
                                {move || format!("Material{}", sort_indicator(&query.get(), "material_number"))}
                            </th>
                            <th class="cursor-pointer user-select-none" on:click=toggle_sort("material_desc") title="Sort">
                                {move || format!("Description{}", sort_indicator(&query.get(), "material_desc"))}
                            </th>
                            <th class="cursor-pointer user-select-none" on:click=toggle_sort("material_type") title="Sort">
                                {move || format!("Type{}", sort_indicator(&query.get(), "material_type"))}
                            </th>
                            <th>{"Plant"}</th>
                            <th class="cursor-pointer user-select-none" on:click=toggle_sort("total_quantity") title="Sort">
                                {move || format!("Total qty{}", sort_indicator(&query.get(), "total_quantity"))}
                            </th>
                            <th class="cursor-pointer user-select-none" on:click=toggle_sort("total_value") title="Sort">
                                {move || format!("Total value{}", sort_indicator(&query.get(), "total_value"))}
                            </th>
                            <th class="cursor-pointer user-select-none" on:click=toggle_sort("last_reviewed") title="Sort">
                                {move || format!("Last reviewed{}", sort_indicator(&query.get(), "last_reviewed"))}
                            </th>
                            <th class="cursor-pointer user-select-none" on:click=toggle_sort("next_review") title="Sort">
                                {move || format!("Next review{}", sort_indicator(&query.get(), "next_review"))}
                            </th>
                            <th>{"Insights"}</th>
                            <th>{"Reviews"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            items.get().into_iter().map(|m| {
                                let number = m.material_number;
                                let errors = m.error_insights();
                                let warnings = m.warning_insights();
                                view! {
                                    <tr on:click=move |_| open_material(number) style="cursor: pointer;">
                                        <td>{m.material_number.to_string()}</td>
                                        <td>{m.material_desc.clone()}</td>
                                        <td>{m.material_type.clone()}</td>
                                        <td>{m.plant.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td style="text-align: right;">{m.total_quantity.map(format_qty).unwrap_or_else(|| "-".to_string())}</td>
                                        <td style="text-align: right;">{m.total_value.map(format_money).unwrap_or_else(|| "-".to_string())}</td>
                                        <td>{m.last_reviewed.map(|d| crate::shared::date_utils::format_date(&d.to_string())).unwrap_or_else(|| "-".to_string())}</td>
                                        <td>{m.next_review.map(|d| crate::shared::date_utils::format_date(&d.to_string())).unwrap_or_else(|| "-".to_string())}</td>
                                        <td>
                                            {if errors > 0 {
                                                view! { <span style="background: #c62828; color: white; border-radius: 8px; padding: 0 6px; margin-right: 4px;">{errors.to_string()}</span> }.into_any()
                                            } else {
                                                view! { <></> }.into_any()
                                            }}
                                            {if warnings > 0 {
                                                view! { <span style="background: #ff9800; color: white; border-radius: 8px; padding: 0 6px;">{warnings.to_string()}</span> }.into_any()
                                            } else {
                                                view! { <></> }.into_any()
                                            }}
                                        </td>
                                        <td>
                                            {m.reviews_count.unwrap_or(0).to_string()}
                                            {if m.has_active_review {
                                                view! { <span style="color: #1565c0; margin-left: 4px;" title="Active review">{"●"}</span> }.into_any()
                                            } else {
                                                view! { <></> }.into_any()
                                            }}
                                        </td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            <div class="pagination" style="display: flex; align-items: center; gap: 12px; padding: 8px 0;">
                <button
                    class="btn btn-secondary"
                    disabled=move || page() == 0 || loading.get()
                    on:click=move |_| query.update(|q| {
                        let p = if q.limit == 0 { 0 } else { q.skip / q.limit };
                        q.set_page(p.saturating_sub(1));
                    })
                >
                    {icon("chevron-left")}
                </button>
                <span>
                    {move || format!(
                        "Page {} of {} ({} materials)",
                        page() + 1,
                        page_count().max(1),
                        total.get()
                    )}
                </span>
                <button
                    class="btn btn-secondary"
                    disabled=move || page() + 1 >= page_count() || loading.get()
                    on:click=move |_| query.update(|q| {
                        let p = if q.limit == 0 { 0 } else { q.skip / q.limit };
                        q.set_page(p + 1);
                    })
                >
                    {icon("chevron-right")}
                </button>
                {move || if loading.get() {
                    view! { <span style="color: #888;">{"Loading..."}</span> }.into_any()
                } else {
                    view! { <></> }.into_any()
                }}
            </div>
        </div>
    }
}
