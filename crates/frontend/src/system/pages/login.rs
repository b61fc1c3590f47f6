use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (_, set_auth_state) = use_auth();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);

    let submit = move || {
        let user = username.get();
        let pass = password.get();
        if user.trim().is_empty() || pass.is_empty() {
            set_error.set(Some("Enter username and password".to_string()));
            return;
        }
        set_busy.set(true);
        set_error.set(None);
        spawn_local(async move {
            match do_login(set_auth_state, user, pass).await {
                Ok(()) => {}
                Err(e) => set_error.set(Some(e)),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div style="display: flex; align-items: center; justify-content: center; height: 100vh; background: #f4f5f7;">
            <div style="background: white; border: 1px solid #ddd; border-radius: 8px; padding: 32px; width: 360px;">
                <h2 style="margin-top: 0;">{"Material Analysis & Review"}</h2>
                <p style="color: #666; margin-bottom: 24px;">{"Sign in to continue"}</p>

                {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

                <div class="form-group">
                    <label for="username">{"Username"}</label>
                    <input
                        type="text"
                        id="username"
                        class="form-control"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                submit();
                            }
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="password">{"Password"}</label>
                    <input
                        type="password"
                        id="password"
                        class="form-control"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                submit();
                            }
                        }
                    />
                </div>

                <button
                    class="btn btn-primary"
                    style="width: 100%; margin-top: 8px;"
                    disabled=move || busy.get()
                    on:click=move |_| submit()
                >
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </div>
        </div>
    }
}
