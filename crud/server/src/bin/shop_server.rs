use crud_server::web::Service;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();
    let config = crud_server::config::Config::from_env()?;
    crud_server::web::start_web_server(config, Service::Shop).await
}
