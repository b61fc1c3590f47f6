use contracts::domain::a001_material::aggregate::{MaterialDataHistory, MaterialWithReviews};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_material::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::number_format::{format_money, format_qty};
use crate::shared::toast::use_toasts;
use crate::system::auth::guard::RequirePermission;

fn json_cell(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn MaterialDetails(material_number: i64) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let toasts = use_toasts();

    let (data, set_data) = signal::<Option<MaterialWithReviews>>(None);
    let (changes, set_changes) = signal::<Vec<MaterialDataHistory>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_material(material_number).await {
                Ok(m) => {
                    set_data.set(Some(m));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    spawn_local(async move {
        if let Ok(history) = api::fetch_history(material_number).await {
            set_changes.set(history);
        }
    });

    let acknowledge = move |insight_id: i64, acknowledged: bool| {
        spawn_local(async move {
            let result = if acknowledged {
                api::unacknowledge_insight(material_number, insight_id).await
            } else {
                api::acknowledge_insight(material_number, insight_id).await
            };
            match result {
                Ok(_) => fetch(),
                Err(e) => toasts.error(format!("Failed to update insight: {}", e)),
            }
        });
    };

    let start_review = move |_| {
        ctx.open_tab(
            &format!("a002_review_new_{}", material_number),
            &format!("New review {}", material_number),
        );
    };

    let open_review = move |review_id: i64| {
        ctx.open_tab(
            &format!("a002_review_detail_{}_{}", material_number, review_id),
            &format!("Review #{}", review_id),
        );
    };

    let field = |label: &'static str, value: String| {
        view! {
            <div style="min-width: 180px;">
                <div style="font-size: 12px; color: #666;">{label}</div>
                <div>{value}</div>
            </div>
        }
    };

    view! {
        <div class="content">
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || {
                let Some(detail) = data.get() else {
                    return view! { <p style="color: #888;">{"Loading..."}</p> }.into_any();
                };
                let m = detail.material.clone();
                let reviews = detail.reviews.clone();
                let insights = m.insights.clone();
                let history = m.consumption_history_5yr.clone().unwrap_or_default();
                let has_active = m.has_active_review;

                view! {
                    <div class="header">
                        <h2>{format!("{} — {}", m.material_number, m.material_desc)}</h2>
                        <div class="header-actions">
                            <RequirePermission check=|p| p.can_create_reviews>
                                <button
                                    class="btn btn-primary"
                                    disabled=has_active
                                    title=if has_active { "An active review already exists" } else { "Start a new review" }
                                    on:click=start_review
                                >
                                    {"Start review"}
                                </button>
                            </RequirePermission>
                        </div>
                    </div>

                    <h3>{"Master data"}</h3>
                    <div style="display: flex; flex-wrap: wrap; gap: 16px; margin-bottom: 16px;">
                        {field("Type", m.material_type.clone())}
                        {field("Created on", format_date(&m.created_on.to_string()))}
                        {field("Material group", m.mat_group_desc.clone().or(m.mat_group.clone()).unwrap_or_else(|| "-".to_string()))}
                        {field("MRP controller", m.mrp_controller.clone().unwrap_or_else(|| "-".to_string()))}
                        {field("Plant", m.plant.clone().unwrap_or_else(|| "-".to_string()))}
                        {field("Total quantity", m.total_quantity.map(format_qty).unwrap_or_else(|| "-".to_string()))}
                        {field("Total value", m.total_value.map(format_money).unwrap_or_else(|| "-".to_string()))}
                        {field("Unit value", m.unit_value.map(format_money).unwrap_or_else(|| "-".to_string()))}
                        {field("Unrestricted qty", m.unrestricted_quantity.map(format_qty).unwrap_or_else(|| "-".to_string()))}
                        {field("Safety stock", m.safety_stock.map(format_qty).unwrap_or_else(|| "-".to_string()))}
                        {field("Stock/safety ratio", m.stock_safety_ratio.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "-".to_string()))}
                        {field("Demand forecast 12m", m.demand_fc_12m.map(format_qty).unwrap_or_else(|| "-".to_string()))}
                        {field("Purchased qty 2y", m.purchased_qty_2y.map(format_qty).unwrap_or_else(|| "-".to_string()))}
                        {field("Last reviewed", m.last_reviewed.map(|d| format_date(&d.to_string())).unwrap_or_else(|| "-".to_string()))}
                        {field("Next review", m.next_review.map(|d| format_date(&d.to_string())).unwrap_or_else(|| "-".to_string()))}
                    </div>

                    <h3>{"Consumption history (5 years)"}</h3>
                    <div class="table-container" style="max-width: 480px; margin-bottom: 16px;">
                        <table>
                            <thead>
                                <tr>
                                    <th>{"Year"}</th>
                                    <th style="text-align: right;">{"Quantity"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {history.into_iter().map(|h| {
                                    view! {
                                        <tr>
                                            <td>{match h.years_ago {
                                                1 => "Last year".to_string(),
                                                n => format!("{} years ago", n),
                                            }}</td>
                                            <td style="text-align: right;">{h.quantity.map(format_qty).unwrap_or_else(|| "0".to_string())}</td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>

                    {move || {
                        let rows = changes.get();
                        if rows.is_empty() {
                            return view! { <></> }.into_any();
                        }
                        view! {
                            <h3>{"Data changes"}</h3>
                            <div class="table-container" style="margin-bottom: 16px;">
                                <table>
                                    <thead>
                                        <tr>
                                            <th>{"Upload"}</th>
                                            <th>{"Changed fields"}</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {rows.into_iter().map(|h| {
                                            let fields = h.fields_changed.clone().unwrap_or_default();
                                            let detail = fields.iter().map(|f| {
                                                let old = h.old_values.as_ref().and_then(|v| v.get(f)).map(json_cell).unwrap_or_else(|| "-".to_string());
                                                let new = h.new_values.as_ref().and_then(|v| v.get(f)).map(json_cell).unwrap_or_else(|| "-".to_string());
                                                format!("{}: {} to {}", f, old, new)
                                            }).collect::<Vec<_>>().join(", ");
                                            view! {
                                                <tr>
                                                    <td>{format_datetime(&h.created_at.to_rfc3339())}</td>
                                                    <td>{detail}</td>
                                                </tr>
                                            }
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        }
                        .into_any()
                    }}

                    <h3>{format!("Insights ({})", insights.len())}</h3>
                    <div style="margin-bottom: 16px;">
                        {if insights.is_empty() {
                            view! { <p style="color: #888;">{"No insights"}</p> }.into_any()
                        } else {
                            insights.into_iter().map(|i| {
                                let color = match i.insight_type.as_str() {
                                    "error" => "#c62828",
                                    "warning" => "#ff9800",
                                    "success" => "#2e7d32",
                                    _ => "#1565c0",
                                };
                                let acknowledged = i.is_acknowledged();
                                let insight_id = i.insight_id.unwrap_or_default();
                                view! {
                                    <div style=format!("border-left: 4px solid {}; padding: 8px 12px; margin-bottom: 8px; background: #fafafa;", color)>
                                        <div style="display: flex; align-items: center; gap: 8px;">
                                            <span style="flex: 1;">{i.message.clone()}</span>
                                            {i.opportunity_value.map(|v| view! {
                                                <span style="font-weight: 600;">{format_money(v)}</span>
                                            })}
                                            <RequirePermission check=|p| p.can_manage_acknowledgements>
                                                <button
                                                    class="btn btn-secondary"
                                                    on:click=move |_| acknowledge(insight_id, acknowledged)
                                                >
                                                    {if acknowledged { "Unacknowledge" } else { "Acknowledge" }}
                                                </button>
                                            </RequirePermission>
                                        </div>
                                        {i.acknowledged_by_user.as_ref().map(|u| {
                                            let name = u.full_name.clone().unwrap_or_else(|| "Unknown user".to_string());
                                            view! {
                                                <div style="font-size: 12px; color: #888;">
                                                    {format!("Acknowledged by {}", name)}
                                                </div>
                                            }
                                        })}
                                    </div>
                                }
                            }).collect_view().into_any()
                        }}
                    </div>

                    <h3>{format!("Review history ({})", reviews.len())}</h3>
                    <div class="table-container">
                        <table>
                            <thead>
                                <tr>
                                    <th>{"Review"}</th>
                                    <th>{"Status"}</th>
                                    <th>{"Date"}</th>
                                    <th>{"Initiated by"}</th>
                                    <th>{"SME"}</th>
                                    <th>{"Approver"}</th>
                                    <th>{"Decision"}</th>
                                    <th>{"Comments"}</th>
                                    <th>{"Updated"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {reviews.into_iter().map(|r| {
                                    let review_id = r.review_id;
                                    view! {
                                        <tr on:click=move |_| open_review(review_id) style="cursor: pointer;">
                                            <td>{format!("#{}", r.review_id)}</td>
                                            <td>{r.status.label()}</td>
                                            <td>{format_date(&r.review_date.to_string())}</td>
                                            <td>{r.initiated_by_user
                                                .as_ref()
                                                .and_then(|u| u.full_name.clone())
                                                .unwrap_or_else(|| "-".to_string())}</td>
                                            <td>{r.assigned_sme_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                            <td>{r.assigned_approver_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                            <td>{r.final_decision.clone().unwrap_or_else(|| "-".to_string())}</td>
                                            <td>{r.comments_count.to_string()}</td>
                                            <td>{format_datetime(&r.updated_at.to_rfc3339())}</td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
