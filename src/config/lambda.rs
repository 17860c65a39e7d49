#[cfg(feature = "lambda")]
use crate::utils::error::Result;
#[cfg(feature = "lambda")]
use crate::utils::validation::{validate_non_empty_string, Validate};
#[cfg(feature = "lambda")]
use std::env;

#[cfg(feature = "lambda")]
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub function_name: String,
    pub region: String,
}

#[cfg(feature = "lambda")]
impl LambdaConfig {
    /// Read the runtime-provided environment. Configuration only feeds log
    /// context; it can never alter the response.
    pub fn from_env() -> Self {
        Self {
            function_name: env::var("AWS_LAMBDA_FUNCTION_NAME")
                .unwrap_or_else(|_| "winepref-page".to_string()),
            region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
        }
    }
}

#[cfg(feature = "lambda")]
impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("function_name", &self.function_name)?;
        validate_non_empty_string("region", &self.region)?;

        tracing::debug!("Lambda configuration validation passed");
        Ok(())
    }
}
