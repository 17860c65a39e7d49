use tracing_subscriber::EnvFilter;

pub fn init_cli_logger(verbose: bool) {
    let default_filter = if verbose {
        "winepref_page=debug,info"
    } else {
        "winepref_page=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

pub fn init_lambda_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("winepref_page=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time() // CloudWatch adds its own timestamps
        .json()
        .init();
}
