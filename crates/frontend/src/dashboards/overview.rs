use contracts::dashboards::summary::DashboardSummary;
use contracts::domain::a006_audit::aggregate::MaterialAuditLogEntry;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_change_percent, format_money, format_number_int};

fn stat_card(
    title: &'static str,
    value: String,
    change: f64,
    invert_colors: bool,
) -> impl IntoView {
    // For overdue reviews an increase is bad; for the others it is good.
    let positive = if invert_colors { change <= 0.0 } else { change >= 0.0 };
    view! {
        <div style="border: 1px solid #ddd; border-radius: 8px; padding: 16px; min-width: 220px; flex: 1;">
            <div style="font-size: 13px; color: #666;">{title}</div>
            <div style="font-size: 26px; font-weight: 600; margin: 4px 0;">{value}</div>
            <div style=format!("font-size: 13px; color: {};", if positive { "#2e7d32" } else { "#c62828" })>
                {format!("{} vs last upload", format_change_percent(change))}
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn DashboardOverview() -> impl IntoView {
    let (summary, set_summary) = signal::<Option<DashboardSummary>>(None);
    let (activity, set_activity) = signal::<Vec<MaterialAuditLogEntry>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_summary().await {
                Ok(s) => {
                    set_summary.set(Some(s));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
        spawn_local(async move {
            if let Ok(rows) = api::fetch_recent_activity().await {
                set_activity.set(rows);
            }
        });
    };
    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Dashboard"}</h2>
                <div class="header-actions">
                    <button class="btn btn-secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || {
                let Some(s) = summary.get() else {
                    return view! { <p style="color: #888;">{"Loading..."}</p> }.into_any();
                };
                view! {
                    <div style="display: flex; flex-wrap: wrap; gap: 12px; margin-bottom: 20px;">
                        {stat_card(
                            "Total inventory value",
                            format_money(s.total_inventory_value),
                            s.total_inventory_value_change,
                            true,
                        )}
                        {stat_card(
                            "Opportunity value",
                            format_money(s.opportunity_value),
                            s.opportunity_value_change,
                            false,
                        )}
                        {stat_card(
                            "Overdue reviews",
                            format_number_int(s.total_overdue_reviews as f64),
                            s.total_overdue_reviews_change,
                            true,
                        )}
                        {stat_card(
                            "SME acceptance rate",
                            format!("{:.0}%", s.acceptance_rate * 100.0),
                            s.acceptance_rate_change,
                            false,
                        )}
                    </div>

                    <div style="display: flex; flex-wrap: wrap; gap: 24px; margin-bottom: 20px;">
                        <div style="flex: 1; min-width: 320px;">
                            <h3>{"Outstanding opportunities by material type"}</h3>
                            <div class="table-container">
                                <table>
                                    <thead>
                                        <tr>
                                            <th>{"Type"}</th>
                                            <th style="text-align: right;">{"Materials"}</th>
                                            <th style="text-align: right;">{"Value"}</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {s.outstanding_opportunities_chart_data.iter().map(|row| {
                                            view! {
                                                <tr>
                                                    <td>{row.material_type.clone()}</td>
                                                    <td style="text-align: right;">{row.count.to_string()}</td>
                                                    <td style="text-align: right;">{format_money(row.value)}</td>
                                                </tr>
                                            }
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        </div>

                        <div style="flex: 1; min-width: 320px;">
                            <h3>{"SME rejection rate by material type"}</h3>
                            <div class="table-container">
                                <table>
                                    <thead>
                                        <tr>
                                            <th>{"Type"}</th>
                                            <th style="text-align: right;">{"Rejected"}</th>
                                            <th style="text-align: right;">{"Total"}</th>
                                            <th style="text-align: right;">{"Rate"}</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {s.review_status_chart_data.iter().map(|row| {
                                            view! {
                                                <tr>
                                                    <td>{row.material_type.clone()}</td>
                                                    <td style="text-align: right;">{row.count.to_string()}</td>
                                                    <td style="text-align: right;">{row.total.to_string()}</td>
                                                    <td style="text-align: right;">{format!("{:.0}%", row.percentage)}</td>
                                                </tr>
                                            }
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        </div>
                    </div>

                    <div style="color: #888; font-size: 13px;">
                        {match s.last_upload_date {
                            Some(d) => format!("Last upload: {}", format_datetime(&d.to_rfc3339())),
                            None => "No uploads yet".to_string(),
                        }}
                    </div>
                }
                .into_any()
            }}

            <h3>{"Recent activity"}</h3>
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
                        {move || activity.get().into_iter().map(|entry| {
                            view! {
                                <tr>
                                    <td>{format_datetime(&entry.timestamp.to_rfc3339())}</td>
                                    <td>{entry.material_number.to_string()}</td>
                                    <td>{entry.change_summary.clone()}</td>
                                    <td>{entry
                                        .changed_by_user
                                        .as_ref()
                                        .and_then(|u| u.full_name.clone())
                                        .unwrap_or_else(|| "-".to_string())}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
