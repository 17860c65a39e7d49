#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use winepref_page::config::lambda::LambdaConfig;
#[cfg(feature = "lambda")]
use winepref_page::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use winepref_page::{respond, HttpRequest, HttpResponse};

#[cfg(feature = "lambda")]
async fn function_handler(event: LambdaEvent<HttpRequest>) -> Result<HttpResponse, Error> {
    tracing::info!("Handling deployment notice invocation");

    // 讀取Lambda配置 (僅提供日誌上下文,不影響回應內容)
    let config = LambdaConfig::from_env();
    config
        .validate()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    tracing::debug!(
        "Function {} running in {}",
        config.function_name,
        config.region
    );

    let response = respond(&event.payload);

    tracing::info!("Deployment notice served");
    Ok(response)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
