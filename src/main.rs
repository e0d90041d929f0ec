use arium_testgen::{
    classifier::RelevanceClassifier,
    config::ServiceConfig,
    generator::TestGenerator,
    llm::provider::OpenAI,
    server::{run_server, state::AppState},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServiceConfig::from_env()?;

    // One shared client for both outbound call sites.
    let model = OpenAI::from_url_with_timeout(
        config.api_base.clone(),
        config.api_key.clone(),
        config.request_timeout,
    );

    let state = AppState {
        classifier: RelevanceClassifier::new(model.clone(), config.classifier.clone()),
        generator: TestGenerator::new(model, config.generator.clone()),
    };

    tracing::info!("starting server on {}", config.bind_addr);
    run_server(state, config.bind_addr).await?;
    Ok(())
}
