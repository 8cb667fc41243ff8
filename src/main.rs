use watering_relay::{app::App, util::log, AppConfig};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = AppConfig::from_env()?;
    log::init(config.debug);

    App::new(config)?.run().await
}
