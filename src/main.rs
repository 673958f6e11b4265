fn main() {
    // Desktop dev reads .env; packaged builds rely on the process environment.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().init();
    dioxus::launch(ada_assistente::ui::App);
}
