use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use vehicle_registry::config::environment::log_config_warnings;
use vehicle_registry::config::{DatabaseConfig, EnvironmentConfig};
use vehicle_registry::{bootstrap, create_app_router};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let (config, config_warnings) = EnvironmentConfig::from_env();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();
    log_config_warnings(&config_warnings);

    info!("🚗 Vehicle Registry - API REST");
    info!("================================================");
    info!("🔧 Entorno: {}", config.environment);

    let database = DatabaseConfig::from_env();
    let addr: SocketAddr = config.server_url().parse()?;

    let app_state = match bootstrap(config, &database).await {
        Ok(state) => state,
        Err(e) => {
            error!("❌ Error inicializando la aplicación: {:#}", e);
            return Err(e);
        }
    };
    let app = create_app_router(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /health - Health check");
    info!("   GET    /vehicles - Listar vehículos");
    info!("   GET    /vehicles/:id - Obtener vehículo");
    info!("   POST   /vehicles - Crear vehículo");
    info!("   PUT    /vehicles/:id - Actualizar vehículo");
    info!("   DELETE /vehicles?id=:id - Eliminar vehículo");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
