use contracts::domain::a004_comment::aggregate::ReviewComment;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_review::api;
use crate::shared::date_utils::format_datetime;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_auth;

/// Comment thread for one review: list, add, delete own.
#[component]
pub fn CommentsSection(material_number: i64, review_id: i64) -> impl IntoView {
    let toasts = use_toasts();
    let (auth_state, _) = use_auth();

    let (items, set_items) = signal::<Vec<ReviewComment>>(Vec::new());
    let (draft, set_draft) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_comments(material_number, review_id).await {
                Ok(page) => {
                    set_items.set(page.items);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    let submit = move |_| {
        let text = draft.get();
        if text.trim().is_empty() {
            return;
        }
        spawn_local(async move {
            match api::add_comment(material_number, review_id, text).await {
                Ok(_) => {
                    set_draft.set(String::new());
                    fetch();
                }
                Err(e) => toasts.error(format!("Failed to add comment: {}", e)),
            }
        });
    };

    let remove = move |comment_id: i64| {
        spawn_local(async move {
            match api::delete_comment(comment_id).await {
                Ok(()) => fetch(),
                Err(e) => toasts.error(format!("Failed to delete comment: {}", e)),
            }
        });
    };

    let current_user_id = move || auth_state.get().user_info.map(|u| u.id);

    view! {
        <div class="comments">
            <h3>{move || format!("Comments ({})", items.get().len())}</h3>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || {
                let me = current_user_id();
                items
                    .get()
                    .into_iter()
                    .map(|c| {
                        let comment_id = c.comment_id;
                        let own = me.map(|id| id == c.user_id).unwrap_or(false);
                        let author = c
                            .user
                            .as_ref()
                            .and_then(|u| u.full_name.clone())
                            .unwrap_or_else(|| "Unknown user".to_string());
                        view! {
                            <div style="border-bottom: 1px solid #eee; padding: 8px 0;">
                                <div style="display: flex; align-items: center; gap: 8px;">
                                    <span style="font-weight: 600;">{author}</span>
                                    <span style="font-size: 12px; color: #888;">
                                        {format_datetime(&c.created_at.to_rfc3339())}
                                    </span>
                                    <div style="flex: 1;"></div>
                                    {if own {
                                        view! {
                                            <button
                                                class="btn btn-secondary"
                                                on:click=move |_| remove(comment_id)
                                            >
                                                {"Delete"}
                                            </button>
                                        }.into_any()
                                    } else {
                                        view! { <></> }.into_any()
                                    }}
                                </div>
                                <div style="white-space: pre-wrap;">{c.comment.clone()}</div>
                            </div>
                        }
                    })
                    .collect_view()
            }}

            <div style="display: flex; gap: 8px; margin-top: 12px;">
                <textarea
                    class="form-control"
                    rows=2
                    style="flex: 1;"
                    placeholder="Add a comment..."
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn-primary" on:click=submit disabled=move || draft.get().trim().is_empty()>
                    {"Post"}
                </button>
            </div>
        </div>
    }
}
