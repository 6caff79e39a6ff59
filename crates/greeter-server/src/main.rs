use greeter_server::{app, settings::Settings};

#[tokio::main]
async fn main() {
    service_runtime::init_tracing("greeter_server=info,tower_http=info");
    let settings = Settings::from_env();

    let Ok(listener) = service_runtime::bind(settings.addr).await else {
        std::process::exit(1);
    };
    let port = listener
        .local_addr()
        .map(|addr| addr.port())
        .unwrap_or(settings.addr.port());
    tracing::info!(
        event = "server_ready",
        addr = %settings.addr,
        "Server is running on http://localhost:{port}"
    );

    if service_runtime::serve(listener, app::build_router())
        .await
        .is_err()
    {
        std::process::exit(1);
    }
}
