use anidata::config::PipelineConfig;
use anidata::pipeline;
use anidata::shared::utils::logger::init_logger;
use log::error;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();
    init_logger();

    let config = PipelineConfig::from_env();
    if let Err(e) = pipeline::run(&config).await {
        error!("Pipeline failed: {}", e);
        std::process::exit(1);
    }
}
