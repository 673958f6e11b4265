//! Behavior tests for the assistant client: environment resolution, session
//! dispatch, rendering helpers, and theme persistence.

mod environment_tests {
    use ada_assistente::env::{
        DEV_PANEL_TOKEN, LOCAL_API_BASE_URL, LOCAL_WS_BASE_URL, REMOTE_API_BASE_URL,
        REMOTE_WS_BASE_URL, detect_environment, dev_panels_enabled, query_param,
    };

    #[test]
    fn loopback_hostnames_select_local_endpoints() {
        for hostname in ["localhost", "127.0.0.1"] {
            let env = detect_environment(hostname, "", false);
            assert_eq!(env.api_base_url, LOCAL_API_BASE_URL);
            assert_eq!(env.ws_base_url, LOCAL_WS_BASE_URL);
        }
    }

    #[test]
    fn other_hostnames_select_production_endpoints() {
        let env = detect_environment("app.adasistemas.com.br", "", false);
        assert_eq!(env.api_base_url, REMOTE_API_BASE_URL);
        assert_eq!(env.ws_base_url, REMOTE_WS_BASE_URL);
    }

    #[test]
    fn use_dev_parameter_forces_local_endpoints() {
        let env = detect_environment("app.adasistemas.com.br", "?useDev=true&x=1", false);
        assert_eq!(env.api_base_url, LOCAL_API_BASE_URL);
    }

    #[test]
    fn force_flag_overrides_hostname() {
        let env = detect_environment("app.adasistemas.com.br", "", true);
        assert_eq!(env.api_base_url, LOCAL_API_BASE_URL);
    }

    #[test]
    fn use_dev_must_be_exactly_true() {
        let env = detect_environment("app.adasistemas.com.br", "?useDev=yes", false);
        assert_eq!(env.api_base_url, REMOTE_API_BASE_URL);
    }

    #[test]
    fn dev_panels_require_the_exact_token() {
        assert!(dev_panels_enabled(&format!("?dev={}", DEV_PANEL_TOKEN)));
        assert!(!dev_panels_enabled("?dev=wrong-token"));
        assert!(!dev_panels_enabled(""));
    }

    #[test]
    fn query_param_handles_leading_question_mark_and_multiple_pairs() {
        assert_eq!(
            query_param("?a=1&b=2", "b"),
            Some("2".to_string())
        );
        assert_eq!(query_param("a=1", "a"), Some("1".to_string()));
        assert_eq!(query_param("a=1", "missing"), None);
    }
}

mod session_tests {
    use std::time::Duration;

    use ada_assistente::session::{
        ChatSession, RECONNECT_DELAY, SendOutcome, SocketEvent, TOP_K, generate_session_id,
    };
    use ada_assistente::types::{EntryKind, QuestionFrame};

    fn connected_session() -> ChatSession {
        let mut session = ChatSession::new();
        session.apply(SocketEvent::Opened);
        session
    }

    fn count_kind(session: &ChatSession, kind: EntryKind) -> usize {
        session
            .entries
            .iter()
            .filter(|entry| entry.kind == kind)
            .count()
    }

    #[test]
    fn session_ids_are_opaque_and_distinct() {
        let a = generate_session_id();
        let b = generate_session_id();
        assert!(a.starts_with("session-"));
        assert_ne!(a, b);
    }

    #[test]
    fn open_marks_connected_and_announces_it() {
        let session = connected_session();
        assert!(session.connected);
        assert_eq!(session.entries.last().unwrap().content, "Conectado ao assistente");
    }

    #[test]
    fn close_marks_disconnected_and_announces_retry() {
        let mut session = connected_session();
        session.apply(SocketEvent::Closed);
        assert!(!session.connected);
        assert_eq!(
            session.entries.last().unwrap().content,
            "Desconectado do assistente. Tentando reconectar..."
        );
        assert_eq!(RECONNECT_DELAY, Duration::from_secs(3));
    }

    #[test]
    fn transport_error_only_adds_a_system_entry() {
        let mut session = connected_session();
        session.apply(SocketEvent::Error("boom".to_string()));
        assert!(session.connected);
        assert_eq!(session.entries.last().unwrap().content, "Erro na conexão");
    }

    #[test]
    fn typing_then_assistant_leaves_one_assistant_entry_and_no_placeholder() {
        let mut session = connected_session();
        session.apply(SocketEvent::Message(r#"{"typing": true}"#.to_string()));
        assert_eq!(count_kind(&session, EntryKind::Typing), 1);

        session.apply(SocketEvent::Message(
            r#"{"role": "assistant", "content": "hi"}"#.to_string(),
        ));
        assert_eq!(count_kind(&session, EntryKind::Typing), 0);
        assert_eq!(count_kind(&session, EntryKind::Assistant), 1);
        let assistant = session
            .entries
            .iter()
            .find(|entry| entry.kind == EntryKind::Assistant)
            .unwrap();
        assert_eq!(assistant.content, "hi");
    }

    #[test]
    fn empty_sources_hide_the_panel() {
        let mut session = connected_session();
        session.apply(SocketEvent::Message(
            r#"{"role": "assistant", "content": "a", "sources": [{"metadata": {"filename": "a.pdf"}, "content": "x"}]}"#
                .to_string(),
        ));
        assert!(session.sources_visible);
        assert_eq!(session.sources.len(), 1);

        session.apply(SocketEvent::Message(
            r#"{"role": "assistant", "content": "b", "sources": []}"#.to_string(),
        ));
        assert!(!session.sources_visible);
    }

    #[test]
    fn echoed_user_turns_are_dropped() {
        let mut session = connected_session();
        let before = session.entries.len();
        session.apply(SocketEvent::Message(
            r#"{"role": "user", "content": "echo"}"#.to_string(),
        ));
        assert_eq!(session.entries.len(), before);
    }

    #[test]
    fn error_field_renders_as_a_system_entry() {
        let mut session = connected_session();
        session.apply(SocketEvent::Message(
            r#"{"error": "limite atingido"}"#.to_string(),
        ));
        let last = session.entries.last().unwrap();
        assert_eq!(last.kind, EntryKind::System);
        assert_eq!(last.content, "limite atingido");
    }

    #[test]
    fn system_frames_prefer_content_over_error() {
        let mut session = connected_session();
        session.apply(SocketEvent::Message(
            r#"{"role": "system", "content": "aviso", "error": "ignorado"}"#.to_string(),
        ));
        assert_eq!(session.entries.last().unwrap().content, "aviso");
    }

    #[test]
    fn unrecognized_roles_still_surface_the_error() {
        let mut session = connected_session();
        session.apply(SocketEvent::Message(
            r#"{"role": "tool", "error": "falha interna"}"#.to_string(),
        ));
        let last = session.entries.last().unwrap();
        assert_eq!(last.kind, EntryKind::System);
        assert_eq!(last.content, "falha interna");
    }

    #[test]
    fn unrecognized_roles_without_error_are_dropped() {
        let mut session = connected_session();
        let before = session.entries.len();
        session.apply(SocketEvent::Message(
            r#"{"role": "tool", "content": "ignorado"}"#.to_string(),
        ));
        assert_eq!(session.entries.len(), before);
    }

    #[test]
    fn malformed_frames_are_dropped() {
        let mut session = connected_session();
        let before = session.entries.clone();
        session.apply(SocketEvent::Message("not json".to_string()));
        assert_eq!(session.entries, before);
    }

    #[test]
    fn empty_input_never_sends_or_renders() {
        let mut session = connected_session();
        let before = session.entries.len();
        assert_eq!(session.compose(""), SendOutcome::Ignored);
        assert_eq!(session.compose("   \t  "), SendOutcome::Ignored);
        assert_eq!(session.entries.len(), before);
    }

    #[test]
    fn sending_while_disconnected_requests_a_reconnect() {
        let mut session = ChatSession::new();
        assert_eq!(session.compose("oi"), SendOutcome::Reconnect);
        assert_eq!(
            session.entries.last().unwrap().content,
            "Não foi possível enviar a mensagem. Reconectando..."
        );
        // No user entry was rendered.
        assert_eq!(
            session
                .entries
                .iter()
                .filter(|entry| entry.kind == EntryKind::User)
                .count(),
            0
        );
    }

    #[test]
    fn sending_while_connected_renders_optimistically_and_builds_the_frame() {
        let mut session = connected_session();
        let outcome = session.compose("  qual o saldo?  ");
        assert_eq!(
            outcome,
            SendOutcome::Frame(QuestionFrame {
                question: "qual o saldo?".to_string(),
                top_k: TOP_K,
            })
        );
        let last = session.entries.last().unwrap();
        assert_eq!(last.kind, EntryKind::User);
        assert_eq!(last.content, "qual o saldo?");
    }

    #[test]
    fn question_frame_serializes_with_top_k() {
        let raw = serde_json::to_string(&QuestionFrame {
            question: "oi".to_string(),
            top_k: TOP_K,
        })
        .unwrap();
        assert_eq!(raw, r#"{"question":"oi","top_k":5}"#);
    }
}

mod rendering_tests {
    use ada_assistente::transcript::{format_file_size, markdown_to_html, source_label};
    use ada_assistente::types::{SourceCitation, SourceMetadata};

    #[test]
    fn file_sizes_format_per_unit_thresholds() {
        assert_eq!(format_file_size(500), "500 bytes");
        assert_eq!(format_file_size(2048), "2.00 KB");
        assert_eq!(format_file_size(5_242_880), "5.00 MB");
    }

    #[test]
    fn boundary_sizes_switch_units_at_1024_and_1048576() {
        assert_eq!(format_file_size(1023), "1023 bytes");
        assert_eq!(format_file_size(1024), "1.00 KB");
        assert_eq!(format_file_size(1_048_576), "1.00 MB");
    }

    #[test]
    fn source_labels_number_from_one() {
        let source = SourceCitation {
            metadata: SourceMetadata {
                filename: Some("a.pdf".to_string()),
            },
            content: "x".to_string(),
        };
        assert_eq!(source_label(0, &source), "Fonte 1: a.pdf");
    }

    #[test]
    fn missing_filenames_fall_back_to_unknown_document() {
        let source = SourceCitation::default();
        assert_eq!(source_label(1, &source), "Fonte 2: Documento desconhecido");
    }

    #[test]
    fn links_open_in_a_new_isolated_context() {
        let html = markdown_to_html("[site](https://example.com)");
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
        assert!(html.contains(r#"href="https://example.com""#));
    }

    #[test]
    fn raw_html_anchors_are_also_isolated() {
        let html = markdown_to_html(r#"veja <a title="x" href="https://example.com">aqui</a>"#);
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
        assert!(html.contains(r#"title="x""#));
    }

    #[test]
    fn line_breaks_and_tables_are_rendered() {
        let html = markdown_to_html("linha um\nlinha dois");
        assert!(html.contains("<br"));

        let table = markdown_to_html("| a | b |\n| - | - |\n| 1 | 2 |");
        assert!(table.contains("<table>"));
    }
}

mod theme_tests {
    use ada_assistente::storage::Preferences;
    use ada_assistente::theme::{
        THEME_KEY, apply_theme, detect_preferred_theme, toggle_theme,
    };
    use ada_assistente::types::ThemeMode;

    #[test]
    fn resolution_prefers_saved_then_system_then_light() {
        assert_eq!(detect_preferred_theme(Some("dark"), false), ThemeMode::Dark);
        assert_eq!(detect_preferred_theme(Some("light"), true), ThemeMode::Light);
        assert_eq!(detect_preferred_theme(None, true), ThemeMode::Dark);
        assert_eq!(detect_preferred_theme(None, false), ThemeMode::Light);
    }

    #[test]
    fn unrecognized_saved_values_fall_through_to_light() {
        assert_eq!(detect_preferred_theme(Some("sepia"), true), ThemeMode::Light);
    }

    #[test]
    fn applying_a_theme_persists_its_name() {
        let prefs = Preferences::scoped("test-theme-apply");
        apply_theme(&prefs, ThemeMode::Dark);
        assert_eq!(prefs.get(THEME_KEY), Some("dark".to_string()));
        apply_theme(&prefs, ThemeMode::Light);
        assert_eq!(prefs.get(THEME_KEY), Some("light".to_string()));
        prefs.clear().expect("Failed to clear");
    }

    #[test]
    fn toggle_flips_and_persists_each_step() {
        let prefs = Preferences::scoped("test-theme-toggle");
        prefs.clear().expect("Failed to clear");

        // Unset defaults to light, so the first toggle lands on dark.
        let first = toggle_theme(&prefs);
        assert_eq!(first, ThemeMode::Dark);
        assert_eq!(prefs.get(THEME_KEY), Some("dark".to_string()));

        let second = toggle_theme(&prefs);
        assert_eq!(second, ThemeMode::Light);
        assert_eq!(prefs.get(THEME_KEY), Some("light".to_string()));

        prefs.clear().expect("Failed to clear");
    }

    #[test]
    fn startup_resolution_persists_so_the_first_toggle_flips() {
        let prefs = Preferences::scoped("test-theme-startup");
        prefs.clear().expect("Failed to clear");

        // System prefers dark and nothing is persisted: startup resolves
        // dark and applies it before any toggle happens.
        let resolved = detect_preferred_theme(None, true);
        assert_eq!(resolved, ThemeMode::Dark);
        apply_theme(&prefs, resolved);
        assert_eq!(prefs.get(THEME_KEY), Some("dark".to_string()));

        // The first toggle flips away from the resolved theme rather than
        // from the unset default, and a second one returns to it.
        assert_eq!(toggle_theme(&prefs), ThemeMode::Light);
        assert_eq!(toggle_theme(&prefs), ThemeMode::Dark);
        assert_eq!(prefs.get(THEME_KEY), Some("dark".to_string()));

        prefs.clear().expect("Failed to clear");
    }

    #[test]
    fn double_toggle_returns_to_the_original_value() {
        let prefs = Preferences::scoped("test-theme-double");
        apply_theme(&prefs, ThemeMode::Dark);
        toggle_theme(&prefs);
        let back = toggle_theme(&prefs);
        assert_eq!(back, ThemeMode::Dark);
        assert_eq!(prefs.get(THEME_KEY), Some("dark".to_string()));
        prefs.clear().expect("Failed to clear");
    }

    #[test]
    fn preference_namespaces_are_isolated() {
        let a = Preferences::scoped("test-theme-iso-1");
        let b = Preferences::scoped("test-theme-iso-2");
        apply_theme(&a, ThemeMode::Dark);
        apply_theme(&b, ThemeMode::Light);
        assert_eq!(a.get(THEME_KEY), Some("dark".to_string()));
        assert_eq!(b.get(THEME_KEY), Some("light".to_string()));
        a.clear().expect("Failed to clear");
        b.clear().expect("Failed to clear");
    }
}
