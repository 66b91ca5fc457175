use std::time::Duration;

use dioxus::prelude::*;

use crate::util::generate_id;

const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(5);
const MAX_TOASTS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Warning,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            kind,
            text: text.into(),
        }
    }
}

pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let message = ToastMessage::new(kind, message);
    toasts.with_mut(|entries| enqueue(entries, message));
}

/// Appends `message`, dropping the oldest entries beyond [`MAX_TOASTS`].
fn enqueue(entries: &mut Vec<ToastMessage>, message: ToastMessage) {
    entries.push(message);
    if entries.len() > MAX_TOASTS {
        let overflow = entries.len() - MAX_TOASTS;
        entries.drain(..overflow);
    }
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let messages = toasts();

    if messages.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "toast-stack",
            ul {
                for message in messages {
                    ToastCard { key: "{message.id}", message, toasts }
                }
            }
        }
    }
}

#[component]
fn ToastCard(message: ToastMessage, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let toast_id = message.id.clone();
    let _auto_dismiss = use_future(move || {
        let id = toast_id.clone();
        let mut toasts = toasts;
        async move {
            tokio::time::sleep(TOAST_AUTO_DISMISS).await;
            toasts.with_mut(|items| items.retain(|toast| toast.id != id));
        }
    });

    let (class, icon) = match message.kind {
        ToastKind::Info => ("toast toast--info", "ℹ️"),
        ToastKind::Warning => ("toast toast--warning", "⚠️"),
    };
    let target = message.id.clone();
    let mut dismiss = toasts;

    rsx! {
        li {
            class: "{class}",
            span { class: "toast-icon", "{icon}" }
            p { "{message.text}" }
            button {
                class: "toast-dismiss",
                onclick: move |_| {
                    let target = target.clone();
                    dismiss.with_mut(|items| items.retain(|toast| toast.id != target));
                },
                "Dismiss"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enqueue_keeps_the_newest_messages() {
        let mut entries = Vec::new();
        for idx in 0..5 {
            enqueue(&mut entries, ToastMessage::new(ToastKind::Info, format!("message {idx}")));
        }
        let texts: Vec<_> = entries.iter().map(|toast| toast.text.as_str()).collect();
        assert_eq!(texts, ["message 2", "message 3", "message 4"]);
    }
}
