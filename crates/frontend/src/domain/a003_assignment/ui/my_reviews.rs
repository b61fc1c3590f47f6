use std::cmp::Ordering;

use contracts::domain::a003_assignment::aggregate::{MyAssignment, MyInitiatedReview};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a003_assignment::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    create_sort_toggle, filter_list, get_sort_indicator, highlight_matches, sort_list,
    SearchInput, Searchable, Sortable,
};

impl Searchable for MyAssignment {
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        self.material_number.to_string().contains(&needle)
            || self
                .material_description
                .as_deref()
                .map(|d| d.to_lowercase().contains(&needle))
                .unwrap_or(false)
            || self.assignment_type.to_lowercase().contains(&needle)
            || self.review_status.to_lowercase().contains(&needle)
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "material_number" => Some(self.material_number.to_string()),
            "material_description" => self.material_description.clone(),
            "assignment_type" => Some(self.assignment_type.clone()),
            "review_status" => Some(self.review_status.clone()),
            _ => None,
        }
    }
}

impl Sortable for MyAssignment {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "material_number" => self.material_number.cmp(&other.material_number),
            "assignment_type" => self.assignment_type.cmp(&other.assignment_type),
            "review_status" => self.review_status.cmp(&other.review_status),
            "assigned_at" => self.assigned_at.cmp(&other.assigned_at),
            "due_at" => self.due_at.cmp(&other.due_at),
            _ => Ordering::Equal,
        }
    }
}

/// "My reviews": work assigned to me plus the reviews I started. Both lists
/// arrive in full, so search and sort run client side.
#[component]
#[allow(non_snake_case)]
pub fn MyReviewsPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let (assignments, set_assignments) = signal::<Vec<MyAssignment>>(Vec::new());
    let (initiated, set_initiated) = signal::<Vec<MyInitiatedReview>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let (filter, set_filter) = signal(String::new());
    let (sort_field, set_sort_field) = signal("assigned_at".to_string());
    let (sort_ascending, set_sort_ascending) = signal(false);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_my_assignments().await {
                Ok(v) => {
                    set_assignments.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
        spawn_local(async move {
            match api::fetch_my_initiated_reviews().await {
                Ok(v) => set_initiated.set(v),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    let visible_assignments = move || {
        let mut rows = filter_list(assignments.get(), &filter.get());
        sort_list(&mut rows, &sort_field.get(), sort_ascending.get());
        rows
    };

    let open_review = move |material_number: i64, review_id: i64| {
        ctx.open_tab(
            &format!("a002_review_detail_{}_{}", material_number, review_id),
            &format!("Review #{}", review_id),
        );
    };

    let header = move |label: &'static str, field: &'static str| {
        view! {
            <th
                class="cursor-pointer user-select-none"
                title="Sort"
                on:click=create_sort_toggle(
                    field,
                    sort_field.into(),
                    set_sort_field,
                    set_sort_ascending,
                )
            >
                {move || format!(
                    "{}{}",
                    label,
                    get_sort_indicator(&sort_field.get(), field, sort_ascending.get())
                )}
            </th>
        }
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>{"My reviews"}</h2>
                <div class="header-actions">
                    <SearchInput
                        value=Signal::derive(move || filter.get())
                        on_change=Callback::new(move |val: String| set_filter.set(val))
                        placeholder="Search my assignments...".to_string()
                    />
                    <button class="btn btn-secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <h3>{move || format!("Assigned to me ({})", visible_assignments().len())}</h3>
            <div class="table-container" style="margin-bottom: 24px;">
                <table>
                    <thead>
                        <tr>
                            {header("Role", "assignment_type")}
                            {header("Material", "material_number")}
                            <th>{"Description"}</th>
                            {header("Review status", "review_status")}
                            {header("Assigned", "assigned_at")}
                            {header("Due", "due_at")}
                            <th>{"Assigned by"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let needle = filter.get();
                            visible_assignments().into_iter().map(|a| {
                                let material = a.material_number;
                                let review = a.review_id;
                                let description = a
                                    .material_description
                                    .clone()
                                    .unwrap_or_else(|| "-".to_string());
                                view! {
                                    <tr on:click=move |_| open_review(material, review) style="cursor: pointer;">
                                        <td>{a.assignment_type.clone()}</td>
                                        <td>{a.material_number.to_string()}</td>
                                        <td>{highlight_matches(&description, &needle)}</td>
                                        <td>{a.review_status.clone()}</td>
                                        <td>{format_datetime(&a.assigned_at.to_rfc3339())}</td>
                                        <td>{a.due_at.map(|d| format_datetime(&d.to_rfc3339())).unwrap_or_else(|| "-".to_string())}</td>
                                        <td>{a.assigned_by_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            <h3>{move || format!("Initiated by me ({})", initiated.get().len())}</h3>
            <div class="table-container">
                <table>
                    <thead>
                        <tr>
                            <th>{"Review"}</th>
                            <th>{"Material"}</th>
                            <th>{"Description"}</th>
                            <th>{"Status"}</th>
                            <th>{"Proposed action"}</th>
                            <th>{"Review date"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || initiated.get().into_iter().map(|r| {
                            let material = r.material_number;
                            let review = r.review_id;
                            view! {
                                <tr on:click=move |_| open_review(material, review) style="cursor: pointer;">
                                    <td>{format!("#{}", r.review_id)}</td>
                                    <td>{r.material_number.to_string()}</td>
                                    <td>{r.material_description.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td>{r.status.clone()}</td>
                                    <td>{r.proposed_action.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td>{format_date(&r.review_date.to_string())}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
