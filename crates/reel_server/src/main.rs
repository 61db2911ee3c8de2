use reel_server::api::setup::setup_logging;
use reel_server::start_main_server;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // soft fail if logging setup fails
    let _ = setup_logging().await.is_ok();

    start_main_server().await
}
