use dioxus::events::Key;
use dioxus::prelude::*;
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::{SinkExt, StreamExt};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message as WsMessage;

use crate::env::Environment;
use crate::session::{ChatSession, RECONNECT_DELAY, SendOutcome, SocketEvent};
use crate::transcript::{markdown_to_html, source_label};
use crate::types::{EntryKind, SourceCitation, TranscriptEntry};

const SCROLL_TO_NEWEST_JS: &str =
    "var list = document.getElementById('chat-messages'); if (list) { list.scrollTop = list.scrollHeight; }";

/// Commands the view pushes to the connection task.
enum Outbound {
    Frame(String),
    /// Cut the pending reconnect delay short.
    Reconnect,
}

#[component]
pub fn ChatView(environment: Environment, dev_mode: bool) -> Element {
    let mut session = use_signal(ChatSession::new);
    let mut input = use_signal(String::new);
    let outbound = use_signal(|| Option::<UnboundedSender<Outbound>>::None);

    use_future(move || {
        let mut outbound = outbound;
        async move {
            let (tx, rx) = mpsc::unbounded();
            outbound.set(Some(tx));
            run_connection(environment, session, rx).await;
        }
    });

    // Keep the newest entry visible.
    use_effect(move || {
        let _ = session.read().entries.len();
        dioxus::document::eval(SCROLL_TO_NEWEST_JS);
    });

    let mut send_message = move |text: String| {
        let outcome = session.with_mut(|s| s.compose(&text));
        match outcome {
            SendOutcome::Ignored => {}
            SendOutcome::Reconnect => {
                if let Some(tx) = outbound.read().as_ref() {
                    let _ = tx.unbounded_send(Outbound::Reconnect);
                }
            }
            SendOutcome::Frame(frame) => match serde_json::to_string(&frame) {
                Ok(raw) => {
                    if let Some(tx) = outbound.read().as_ref() {
                        let _ = tx.unbounded_send(Outbound::Frame(raw));
                    }
                    input.set(String::new());
                }
                Err(err) => tracing::error!(%err, "failed to encode question frame"),
            },
        }
    };

    let snapshot = session();
    let (status_text, status_class) = if snapshot.connected {
        ("Conectado", "status-connected")
    } else {
        ("Desconectado", "status-disconnected")
    };

    rsx! {
        div { class: "chat-container",
            div { class: "chat-status",
                span { id: "connection-status", class: status_class, "{status_text}" }
            }
            div { id: "chat-messages", class: "chat-messages",
                for entry in snapshot.entries.iter() {
                    TranscriptRow { entry: entry.clone() }
                }
            }
            if dev_mode || snapshot.sources_visible {
                SourcesPanel { sources: snapshot.sources.clone(), visible: snapshot.sources_visible }
            }
            div { class: "composer",
                div { class: "composer-inner",
                    input {
                        id: "message-input",
                        r#type: "text",
                        placeholder: "Digite sua mensagem...",
                        value: "{input}",
                        oninput: move |ev| input.set(ev.value()),
                        onkeydown: move |ev| {
                            if ev.key() == Key::Enter {
                                ev.prevent_default();
                                let text = input();
                                send_message(text);
                            }
                        },
                        autofocus: true,
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| {
                            let text = input();
                            send_message(text);
                        },
                        "Enviar"
                    }
                }
            }
        }
    }
}

#[component]
fn TranscriptRow(entry: TranscriptEntry) -> Element {
    match entry.kind {
        EntryKind::Typing => rsx! {
            div { class: "message assistant-message typing-indicator",
                span {}
                span {}
                span {}
            }
        },
        EntryKind::Assistant => {
            let html = markdown_to_html(&entry.content);
            rsx! {
                div { class: "message assistant-message md", dangerous_inner_html: "{html}" }
            }
        }
        EntryKind::User => rsx! {
            div { class: "message user-message", "{entry.content}" }
        },
        EntryKind::System => rsx! {
            div { class: "message system-message", "{entry.content}" }
        },
    }
}

#[component]
fn SourcesPanel(sources: Vec<SourceCitation>, visible: bool) -> Element {
    rsx! {
        div {
            id: "sources-container",
            class: "sources-container",
            style: if visible { "display: block;" } else { "display: none;" },
            h4 { class: "sources-title", "Fontes" }
            div { id: "sources-list", class: "sources-list",
                for (index, source) in sources.iter().enumerate() {
                    div { class: "source-item",
                        h5 { "{source_label(index, source)}" }
                        p { "{source.content}" }
                    }
                }
            }
        }
    }
}

/// Connect loop: one live handle at a time, exactly one reconnect per close,
/// after the fixed delay. Runs for the whole page lifetime.
async fn run_connection(
    environment: Environment,
    mut session: Signal<ChatSession>,
    mut commands: UnboundedReceiver<Outbound>,
) {
    let session_id = session.peek().session_id.clone();
    let url = format!("{}/ws/chat/{}", environment.ws_base_url, session_id);

    loop {
        match connect_async(url.as_str()).await {
            Ok((stream, _)) => {
                let (mut write, mut read) = stream.split();
                session.with_mut(|s| s.apply(SocketEvent::Opened));

                loop {
                    tokio::select! {
                        inbound = read.next() => match inbound {
                            Some(Ok(WsMessage::Text(raw))) => {
                                session.with_mut(|s| s.apply(SocketEvent::Message(raw)));
                            }
                            // Pings and pongs are transport noise.
                            Some(Ok(_)) => {}
                            Some(Err(err)) => {
                                session.with_mut(|s| s.apply(SocketEvent::Error(err.to_string())));
                                break;
                            }
                            None => break,
                        },
                        command = commands.next() => match command {
                            Some(Outbound::Frame(raw)) => {
                                if let Err(err) = write.send(WsMessage::Text(raw)).await {
                                    session.with_mut(|s| s.apply(SocketEvent::Error(err.to_string())));
                                    break;
                                }
                            }
                            Some(Outbound::Reconnect) => {}
                            // View is gone.
                            None => return,
                        },
                    }
                }

                session.with_mut(|s| s.apply(SocketEvent::Closed));
            }
            Err(err) => {
                session.with_mut(|s| s.apply(SocketEvent::Error(err.to_string())));
                session.with_mut(|s| s.apply(SocketEvent::Closed));
            }
        }

        // Fixed delay before the single reconnect attempt; a send attempted
        // while disconnected cuts the wait short. Frames that arrive here
        // were in flight during the disconnect and are lost by contract.
        let delay = tokio::time::sleep(RECONNECT_DELAY);
        tokio::pin!(delay);
        loop {
            tokio::select! {
                _ = &mut delay => break,
                command = commands.next() => match command {
                    Some(Outbound::Reconnect) => break,
                    Some(Outbound::Frame(_)) => {}
                    None => return,
                },
            }
        }
    }
}
