use contracts::system::rbac::SmeExpertise;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::system::rbac::api;

/// SME expertise directory: who covers what, availability and workload.
#[component]
#[allow(non_snake_case)]
pub fn SmeExpertisePage() -> impl IntoView {
    let (items, set_items) = signal::<Vec<SmeExpertise>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_sme_expertise().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>{"SME expertise"}</h2>
                <div class="header-actions">
                    <button class="btn btn-secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table>
                    <thead>
                        <tr>
                            <th>{"Expert"}</th>
                            <th>{"SME type"}</th>
                            <th>{"Material group"}</th>
                            <th>{"Plant"}</th>
                            <th>{"Workload"}</th>
                            <th>{"Available"}</th>
                            <th>{"Backup"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|e| {
                            let over_capacity = e.current_review_count >= e.max_concurrent_reviews;
                            view! {
                                <tr>
                                    <td>{e.user_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td>{e.sme_type_label.clone().unwrap_or_else(|| e.sme_type.clone())}</td>
                                    <td>{e.material_group.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td>{e.plant.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td style=if over_capacity { "color: #c62828; font-weight: 600;" } else { "" }>
                                        {format!("{} / {}", e.current_review_count, e.max_concurrent_reviews)}
                                    </td>
                                    <td>
                                        {if e.is_available {
                                            "Yes".to_string()
                                        } else {
                                            match e.unavailable_until {
                                                Some(d) => format!("Until {}", format_date(&d.to_string())),
                                                None => "No".to_string(),
                                            }
                                        }}
                                    </td>
                                    <td>{e.backup_user_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
