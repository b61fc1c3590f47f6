use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const AUTO_DISMISS_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Centralized transient-message service, provided once in `App`.
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.toasts.update(|list| {
            list.push(Toast { id, kind, message });
        });

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            toasts.update(|list| list.retain(|t| t.id != id));
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Renders the toast stack; mounted once next to the shell.
#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toasts();

    view! {
        <div style="position: fixed; bottom: 16px; right: 16px; z-index: 1000; display: flex; flex-direction: column; gap: 8px;">
            {move || {
                service
                    .toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let background = match toast.kind {
                            ToastKind::Success => "#2e7d32",
                            ToastKind::Error => "#c62828",
                            ToastKind::Info => "#1565c0",
                        };
                        let id = toast.id;
                        view! {
                            <div
                                style=format!(
                                    "background: {}; color: white; padding: 10px 14px; border-radius: 4px; box-shadow: 0 2px 8px rgba(0,0,0,0.25); cursor: pointer; max-width: 380px;",
                                    background
                                )
                                on:click=move |_| service.dismiss(id)
                            >
                                {toast.message.clone()}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
