use std::path::Path;

use dioxus::prelude::*;

use crate::documents::{list_documents, upload_document};
use crate::env::Environment;
use crate::transcript::format_file_size;
use crate::types::DocumentInfo;

#[component]
pub fn DocumentsView(environment: Environment) -> Element {
    let documents = use_signal(Vec::<DocumentInfo>::new);
    let list_error = use_signal(|| Option::<String>::None);
    let mut file_path = use_signal(String::new);
    let mut upload_status = use_signal(|| Option::<(String, bool)>::None);
    let mut uploading = use_signal(|| false);

    use_future(move || async move {
        refresh_documents(environment.api_base_url, documents, list_error).await;
    });

    let on_upload = move |_| {
        let path_text = file_path().trim().to_string();
        if path_text.is_empty() {
            upload_status.set(Some(("Selecione um arquivo para enviar".to_string(), true)));
            return;
        }

        uploading.set(true);
        upload_status.set(Some(("Enviando documento...".to_string(), false)));

        spawn(async move {
            let filename = Path::new(&path_text)
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("documento")
                .to_string();

            let result = match tokio::fs::read(&path_text).await {
                Ok(bytes) => upload_document(environment.api_base_url, &filename, bytes)
                    .await
                    .map_err(|err| err.to_string()),
                Err(err) => Err(err.to_string()),
            };

            match result {
                Ok(stored) => {
                    upload_status.set(Some((
                        format!("Documento \"{stored}\" enviado com sucesso!"),
                        false,
                    )));
                    file_path.set(String::new());
                    refresh_documents(environment.api_base_url, documents, list_error).await;
                }
                Err(detail) => {
                    upload_status.set(Some((format!("Erro ao enviar documento: {detail}"), true)));
                }
            }
            uploading.set(false);
        });
    };

    let docs_snapshot = documents();
    let status_snapshot = upload_status();
    let error_snapshot = list_error();

    rsx! {
        div { id: "documents-container", class: "documents-container",
            h4 { class: "section-title", "Documentos" }
            div { class: "upload-row",
                input {
                    r#type: "text",
                    placeholder: "Caminho do arquivo...",
                    value: "{file_path}",
                    oninput: move |ev| file_path.set(ev.value()),
                    disabled: uploading(),
                }
                button {
                    class: "btn",
                    r#type: "button",
                    disabled: uploading(),
                    onclick: on_upload,
                    "Enviar documento"
                }
            }
            if let Some((text, is_error)) = status_snapshot {
                p { class: if is_error { "text-danger" } else { "text-success" }, "{text}" }
            }
            if let Some(message) = error_snapshot {
                p { class: "text-danger", "{message}" }
            } else if docs_snapshot.is_empty() {
                p { class: "text-muted", "Nenhum documento carregado" }
            } else {
                div { id: "documents-list", class: "documents-list",
                    for doc in docs_snapshot.iter() {
                        div { class: "document-card", key: "{doc.filename}",
                            h5 { class: "document-title", "{doc.filename}" }
                            p { class: "document-meta",
                                small { "Tipo: {doc.kind}" }
                                br {}
                                small { "Tamanho: {format_file_size(doc.size)}" }
                                br {}
                                small { "Carregado em: {doc.upload_time}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

async fn refresh_documents(
    api_base_url: &'static str,
    mut documents: Signal<Vec<DocumentInfo>>,
    mut list_error: Signal<Option<String>>,
) {
    match list_documents(api_base_url).await {
        Ok(list) => {
            documents.set(list);
            list_error.set(None);
        }
        Err(err) => {
            tracing::warn!(%err, "failed to load documents");
            list_error.set(Some("Erro ao carregar documentos".to_string()));
        }
    }
}
