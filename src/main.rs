use log::*;
use service::{config::Config, logging::Logger, AppState};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    let config = Config::new();
    Logger::init_logger(&config);

    let (host, port) = config.listen_addr();
    let listener = match TcpListener::bind((host, port)).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {host}:{port}: {e}");
            std::process::exit(1);
        }
    };

    let app_state = AppState::new(config);
    info!("Serving static assets from {}", app_state.static_dir());

    match listener.local_addr() {
        Ok(addr) => info!("Fixture server listening at http://{addr}"),
        Err(e) => warn!("Fixture server listening on an unknown address: {e}"),
    }

    web::serve(listener, web::define_routes(app_state), web::shutdown_signal()).await;
}
