//! Light/dark theme resolution, persistence, and stylesheets.

use crate::storage::Preferences;
use crate::types::ThemeMode;

/// Preference key, shared with the browser client.
pub const THEME_KEY: &str = "agifinance-theme";

impl ThemeMode {
    /// Unrecognized names fall through to light.
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// Resolution order at startup: persisted preference, then the system
/// dark-mode signal, then light.
pub fn detect_preferred_theme(saved: Option<&str>, system_prefers_dark: bool) -> ThemeMode {
    match saved {
        Some(name) => ThemeMode::from_name(name),
        None if system_prefers_dark => ThemeMode::Dark,
        None => ThemeMode::Light,
    }
}

/// Persist the choice; the injected stylesheet follows the theme signal.
pub fn apply_theme(prefs: &Preferences, mode: ThemeMode) {
    if let Err(err) = prefs.set(THEME_KEY, mode.name()) {
        tracing::warn!(%err, "failed to persist theme preference");
    }
}

/// Flip the persisted preference (default light), apply it, and return the
/// new mode so the toggle affordance can update.
pub fn toggle_theme(prefs: &Preferences) -> ThemeMode {
    let current = prefs
        .get(THEME_KEY)
        .map(|name| ThemeMode::from_name(&name))
        .unwrap_or(ThemeMode::Light);
    let next = match current {
        ThemeMode::Light => ThemeMode::Dark,
        ThemeMode::Dark => ThemeMode::Light,
    };
    apply_theme(prefs, next);
    next
}

pub struct ThemeDefinition {
    pub css: &'static str,
    pub toggle_icon: &'static str,
    pub toggle_title: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_THEME,
            toggle_icon: "☀️",
            toggle_title: "Mudar para tema claro",
        },
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_THEME,
            toggle_icon: "🌙",
            toggle_title: "Mudar para tema escuro",
        },
    }
}

pub const APP_CSS: &str = r#"
* { box-sizing: border-box; }
html, body { height: 100%; margin: 0; }
body {
    display: flex;
    flex-direction: column;
    font-family: -apple-system, "Segoe UI", Roboto, sans-serif;
    font-size: 14px;
    background: var(--color-bg-primary);
    color: var(--color-text-primary);
}
.header { border-bottom: 1px solid var(--color-border); }
.header-content {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0.5rem 1rem;
}
.header-title { font-size: 1.1rem; margin: 0; }
.theme-toggle { background: none; border: none; font-size: 1.1rem; cursor: pointer; }
.chat-container { display: flex; flex-direction: column; flex: 1; min-height: 0; }
.chat-status { padding: 0.25rem 1rem; font-size: 0.8rem; color: var(--color-text-muted); }
.status-connected { color: #1e9e4a; }
.status-disconnected { color: #d64040; }
.chat-messages { flex: 1; overflow-y: auto; padding: 0.75rem 1rem; }
.message {
    max-width: 80%;
    margin-bottom: 0.5rem;
    padding: 0.5rem 0.75rem;
    border-radius: 0.75rem;
    white-space: pre-wrap;
    word-break: break-word;
}
.user-message { margin-left: auto; background: var(--color-chat-user-bg); color: var(--color-chat-user-text); }
.assistant-message { margin-right: auto; background: var(--color-chat-assistant-bg); color: var(--color-chat-assistant-text); border: 1px solid var(--color-border-muted); }
.assistant-message.md { white-space: normal; }
.system-message {
    margin: 0.25rem auto;
    max-width: 100%;
    text-align: center;
    font-size: 0.8rem;
    background: none;
    color: var(--color-text-muted);
}
.typing-indicator span {
    display: inline-block;
    width: 0.4rem;
    height: 0.4rem;
    margin-right: 0.2rem;
    border-radius: 50%;
    background: var(--color-text-muted);
    animation: typing-blink 1.2s infinite both;
}
.typing-indicator span:nth-child(2) { animation-delay: 0.2s; }
.typing-indicator span:nth-child(3) { animation-delay: 0.4s; }
@keyframes typing-blink { 0%, 80%, 100% { opacity: 0.2; } 40% { opacity: 1; } }
.composer { border-top: 1px solid var(--color-border); padding: 0.5rem 1rem; }
.composer-inner { display: flex; gap: 0.5rem; }
.composer input[type="text"] {
    flex: 1;
    padding: 0.5rem 0.75rem;
    border-radius: 0.5rem;
    border: 1px solid var(--color-input-border);
    background: var(--color-input-bg);
    color: var(--color-text-primary);
}
.btn {
    padding: 0.5rem 1rem;
    border-radius: 0.5rem;
    border: 1px solid var(--color-border);
    background: var(--color-bg-secondary);
    color: var(--color-text-primary);
    cursor: pointer;
}
.btn-primary { background: var(--color-accent); color: #ffffff; border-color: var(--color-accent); }
.sources-container, .documents-container {
    border-top: 1px solid var(--color-border);
    padding: 0.5rem 1rem;
    max-height: 30vh;
    overflow-y: auto;
}
.sources-title, .section-title { margin: 0.25rem 0; font-size: 0.95rem; }
.source-item { border-left: 3px solid var(--color-accent); padding: 0.25rem 0.5rem; margin-bottom: 0.5rem; }
.source-item h5 { margin: 0 0 0.25rem 0; font-size: 0.85rem; }
.source-item p { margin: 0; font-size: 0.8rem; color: var(--color-text-muted); }
.upload-row { display: flex; gap: 0.5rem; margin-bottom: 0.5rem; }
.upload-row input[type="text"] { flex: 1; padding: 0.4rem 0.6rem; border-radius: 0.5rem; border: 1px solid var(--color-input-border); background: var(--color-input-bg); color: var(--color-text-primary); }
.document-card { border: 1px solid var(--color-border-muted); border-radius: 0.5rem; padding: 0.5rem 0.75rem; margin-bottom: 0.5rem; }
.document-title { margin: 0 0 0.25rem 0; font-size: 0.9rem; }
.document-meta { margin: 0; color: var(--color-text-muted); }
.text-muted { color: var(--color-text-muted); }
.text-danger { color: #d64040; }
.text-success { color: #1e9e4a; }
"#;

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #ffffff;
    --color-bg-secondary: #f5f5f5;
    --color-text-primary: #1a1a1a;
    --color-text-muted: #5a5a5a;
    --color-border: #d0d0d0;
    --color-border-muted: #e2e2e2;
    --color-input-border: #c2c2c2;
    --color-input-bg: #ffffff;
    --color-chat-user-bg: #1565c0;
    --color-chat-user-text: #ffffff;
    --color-chat-assistant-bg: #f5f5f5;
    --color-chat-assistant-text: #1a1a1a;
    --color-accent: #1565c0;
}
"#;

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #121212;
    --color-bg-secondary: #1d1d1d;
    --color-text-primary: #eaeaea;
    --color-text-muted: #9b9b9b;
    --color-border: #2a2a2a;
    --color-border-muted: #242424;
    --color-input-border: #3a3a3a;
    --color-input-bg: #1d1d1d;
    --color-chat-user-bg: #1e88e5;
    --color-chat-user-text: #ffffff;
    --color-chat-assistant-bg: #1d1d1d;
    --color-chat-assistant-text: #eaeaea;
    --color-accent: #1e88e5;
}
"#;
