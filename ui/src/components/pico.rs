//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use std::time::Duration;

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
    Contrast,
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let class_str = match (&props.button_type, props.outline) {
        (ButtonType::Primary, false) => "",
        (ButtonType::Primary, true) => "outline",
        (ButtonType::Secondary, false) => "secondary",
        (ButtonType::Secondary, true) => "secondary outline",
        (ButtonType::Contrast, false) => "contrast",
        (ButtonType::Contrast, true) => "contrast outline",
    };
    rsx! {
        button {
            class: "{class_str}",
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

/// How long the confirmation label stays up after a successful copy.
const COPIED_RESET_DELAY: Duration = Duration::from_secs(2);

#[derive(Props, PartialEq, Clone)]
pub struct CopyButtonProps {
    text_to_copy: String,
    #[props(default = "Copy".to_string())]
    label: String,
    #[props(default = "Copied!".to_string())]
    copied_label: String,
    #[props(default = false)]
    disabled: bool,
}

/// A button that writes `text_to_copy` to the system clipboard and briefly
/// swaps its label to confirm. A failed clipboard write leaves the label
/// untouched.
pub fn CopyButton(props: CopyButtonProps) -> Element {
    let CopyButtonProps {
        text_to_copy,
        label,
        copied_label,
        disabled,
    } = props;
    let mut copied = use_signal(|| false);

    rsx! {
        Button {
            disabled,
            on_click: move |_| {
                let text = text_to_copy.clone();
                spawn(async move {
                    if crate::compat::clipboard_set(text).await {
                        copied.set(true);
                        crate::compat::sleep(COPIED_RESET_DELAY).await;
                        copied.set(false);
                    } else {
                        dioxus_logger::tracing::warn!("clipboard write failed");
                    }
                });
            },
            if copied() {
                "{copied_label}"
            } else {
                "{label}"
            }
        }
    }
}
