use yew::prelude::*;

use crate::settings;

#[derive(Clone, Copy, PartialEq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    fn alert_class(&self) -> &'static str {
        match self {
            ToastKind::Info => "alert-info",
            ToastKind::Success => "alert-success",
            ToastKind::Error => "alert-error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastKind::Info => "fas fa-info-circle",
            ToastKind::Success => "fas fa-check-circle",
            ToastKind::Error => "fas fa-exclamation-circle",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Clone, PartialEq)]
pub struct ToastContext {
    push: Callback<(String, ToastKind)>,
}

impl ToastContext {
    pub fn show_info(&self, message: impl Into<String>) {
        self.push.emit((message.into(), ToastKind::Info));
    }

    pub fn show_success(&self, message: impl Into<String>) {
        self.push.emit((message.into(), ToastKind::Success));
    }

    pub fn show_error(&self, message: impl Into<String>) {
        self.push.emit((message.into(), ToastKind::Error));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_state(Vec::<Toast>::new);
    let next_id = use_state(|| 0usize);

    let push = {
        let toasts = toasts.clone();
        let next_id = next_id.clone();

        Callback::from(move |(message, kind): (String, ToastKind)| {
            let id = *next_id;
            next_id.set(id + 1);

            let mut current = (*toasts).clone();
            current.push(Toast { id, message, kind });
            toasts.set(current);

            let toasts = toasts.clone();
            let duration = settings::get_settings().toast_duration_ms;
            gloo_timers::callback::Timeout::new(duration, move || {
                let mut current = (*toasts).clone();
                current.retain(|t| t.id != id);
                toasts.set(current);
            })
            .forget();
        })
    };

    let dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id: usize| {
            let mut current = (*toasts).clone();
            current.retain(|t| t.id != id);
            toasts.set(current);
        })
    };

    let context = ToastContext { push };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                {for (*toasts).iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let dismiss = dismiss.clone();
                        Callback::from(move |_| dismiss.emit(id))
                    };

                    html! {
                        <div key={id} class={classes!("alert", toast.kind.alert_class(), "shadow-lg")}>
                            <i class={toast.kind.icon()}></i>
                            <span>{&toast.message}</span>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}
