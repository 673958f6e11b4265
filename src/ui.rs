use dioxus::prelude::*;

use crate::env;
use crate::storage::Preferences;
use crate::theme::{self, APP_CSS, THEME_KEY, theme_definition};
use crate::types::ThemeMode;
use crate::views::{ChatView, DocumentsView};

#[component]
pub fn App() -> Element {
    let (environment, dev_mode) = use_hook(env::from_process_env);
    let prefs = use_hook(Preferences::open);
    let saved = use_hook({
        let prefs = prefs.clone();
        move || prefs.get(THEME_KEY)
    });
    let theme = use_signal({
        let saved = saved.clone();
        move || theme::detect_preferred_theme(saved.as_deref(), false)
    });

    use_startup_theme_resolution(prefs.clone(), saved, theme);

    rsx! {
        ThemeStyles { theme }
        AppHeader { theme, prefs }
        ChatView { environment, dev_mode }
        if dev_mode {
            DocumentsView { environment }
        }
    }
}

/// Completes the startup resolution: when nothing was persisted, probe the
/// system `prefers-color-scheme` signal through the webview, then apply
/// (persist) whichever mode won so the first toggle flips from it.
fn use_startup_theme_resolution(
    prefs: Preferences,
    saved: Option<String>,
    theme: Signal<ThemeMode>,
) {
    use_future(move || {
        let prefs = prefs.clone();
        let saved = saved.clone();
        let mut theme = theme;
        async move {
            let mode = if let Some(name) = saved {
                ThemeMode::from_name(&name)
            } else {
                let probe = dioxus::document::eval(
                    "return window.matchMedia && window.matchMedia('(prefers-color-scheme: dark)').matches;",
                );
                let system_prefers_dark = probe
                    .await
                    .ok()
                    .and_then(|value| value.as_bool())
                    .unwrap_or(false);
                theme::detect_preferred_theme(None, system_prefers_dark)
            };
            theme::apply_theme(&prefs, mode);
            theme.set(mode);
        }
    });
}

#[component]
fn ThemeStyles(theme: Signal<ThemeMode>) -> Element {
    let definition = theme_definition(theme());
    rsx! {
        style { dangerous_inner_html: "{APP_CSS}" }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn AppHeader(theme: Signal<ThemeMode>, prefs: Preferences) -> Element {
    let definition = theme_definition(theme());
    rsx! {
        div { class: "header",
            div { class: "header-content",
                h1 { class: "header-title", "Ada Assistente" }
                button {
                    class: "theme-toggle",
                    r#type: "button",
                    title: definition.toggle_title,
                    onclick: {
                        let prefs = prefs.clone();
                        let mut theme = theme;
                        move |_| theme.set(theme::toggle_theme(&prefs))
                    },
                    "{definition.toggle_icon}"
                }
            }
        }
    }
}
