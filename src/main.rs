use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use tokio::net::TcpListener;

use tabforge::application::services::GenerationController;
use tabforge::infrastructure::generation::LinkTabFactory;
use tabforge::infrastructure::observability::{TracingConfig, init_tracing};
use tabforge::infrastructure::persistence::JsonFileTabStore;
use tabforge::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();
    init_tracing(TracingConfig::default());

    let store = Arc::new(JsonFileTabStore::open(settings.storage.tabs_path.clone()).await?);
    let factory = Arc::new(LinkTabFactory::default());
    let controller = Arc::new(GenerationController::new(
        store,
        factory,
        settings.generator.batch_size,
    ));

    let state = AppState {
        controller,
        settings: settings.clone(),
    };
    let router = create_router(state);

    let host: IpAddr = settings.server.host.parse()?;
    let addr = SocketAddr::new(host, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
