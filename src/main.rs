use dicebot::{
    build_router,
    shared::{
        structs::{
            AppState,
            config::{Configuration, Credentials},
        },
        utility::register_application_command,
    },
};
use tracing::Level;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Configuration::load_from_config_file()?;

    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| config.log_level.clone());
    let log_level = match log_level.to_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "INFO" => Level::INFO,
        "WARN" => Level::WARN,
        "ERROR" => Level::ERROR,
        _ => Level::DEBUG,
    };

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(log_level)
        .pretty()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!(
            "Initialization of tracing subscriber failed with error: {}",
            e
        );
    }

    let credentials = Credentials::from_env()?;

    register_application_command(&config.command, &credentials).await?;

    let server_bind_point = config.server_bind_point.clone();
    let app_state = AppState::new(config, &credentials)?;
    let app = build_router(app_state);

    let listener = tokio::net::TcpListener::bind(&server_bind_point).await?;
    tracing::info!("Start bot http://{}", &server_bind_point);
    axum::serve(listener, app).await?;

    Ok(())
}
