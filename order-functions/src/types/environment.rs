//! Environment configuration for different deployment stages

use std::env;
use std::str::FromStr;
use std::time::Duration;

use aws_config::{retry::RetryConfig, timeout::TimeoutConfig, BehaviorVersion};
use strum::{Display, EnumString};
use tracing::Level;
use tracing_subscriber::{filter::LevelFilter, fmt, EnvFilter};

/// Presigned invoice URLs stay valid for one hour
const DEFAULT_PRESIGNED_URL_EXPIRY_SECS: u64 = 60 * 60;

/// Where the Object-Write handler takes the billing period from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum BillingPeriodSource {
    /// Current UTC date at invocation time
    #[default]
    Invocation,
    /// The order's `orderdate` field
    OrderDate,
}

/// Application environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Staging environment
    Staging,
    /// Development environment (uses `LocalStack`)
    Development {
        /// Optional override for presigned URL expiry in seconds
        presign_expiry_override: Option<u64>,
    },
}

impl Environment {
    /// Creates an Environment from the `APP_ENV` environment variable
    ///
    /// Defaults to production inside a Lambda execution environment and to
    /// development everywhere else.
    ///
    /// # Panics
    ///
    /// Panics if `APP_ENV` contains an invalid value
    #[must_use]
    pub fn from_env() -> Self {
        let default_env = if env::var_os("AWS_LAMBDA_FUNCTION_NAME").is_some() {
            "production"
        } else {
            "development"
        };

        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| default_env.to_string())
            .trim()
            .to_lowercase();

        match env.as_str() {
            "production" => Self::Production,
            "staging" => Self::Staging,
            "development" => {
                let presign_expiry_override = env::var("PRESIGNED_URL_EXPIRY_SECS")
                    .ok()
                    .and_then(|val| val.parse::<u64>().ok());

                Self::Development {
                    presign_expiry_override,
                }
            }
            _ => panic!("Invalid environment: {env}"),
        }
    }

    /// Returns the invoice bucket name for the environment
    ///
    /// # Panics
    ///
    /// Panics if the `BUCKETNAME` environment variable is not set outside development
    #[must_use]
    pub fn bucket_name(&self) -> String {
        match self {
            Self::Production | Self::Staging => {
                env::var("BUCKETNAME").expect("BUCKETNAME environment variable is not set")
            }
            Self::Development { .. } => {
                env::var("BUCKETNAME").unwrap_or_else(|_| "order-invoices".to_string())
            }
        }
    }

    /// Returns the order table name for the environment
    ///
    /// # Panics
    ///
    /// Panics if the `TABLENAME` environment variable is not set outside development
    #[must_use]
    pub fn table_name(&self) -> String {
        match self {
            Self::Production | Self::Staging => {
                env::var("TABLENAME").expect("TABLENAME environment variable is not set")
            }
            Self::Development { .. } => {
                env::var("TABLENAME").unwrap_or_else(|_| "orders".to_string())
            }
        }
    }

    /// Billing period source for invoice keys, from `BILLING_PERIOD_SOURCE`
    ///
    /// # Panics
    ///
    /// Panics if `BILLING_PERIOD_SOURCE` is set to an unknown value
    #[must_use]
    pub fn billing_period_source(&self) -> BillingPeriodSource {
        env::var("BILLING_PERIOD_SOURCE").map_or_else(
            |_| BillingPeriodSource::default(),
            |val| {
                BillingPeriodSource::from_str(val.trim())
                    .unwrap_or_else(|_| panic!("Invalid billing period source: {val}"))
            },
        )
    }

    /// Returns the endpoint URL to use for AWS services
    #[must_use]
    pub const fn override_aws_endpoint_url(&self) -> Option<&str> {
        match self {
            Self::Production | Self::Staging => None,
            Self::Development { .. } => Some("http://localhost:4566"),
        }
    }

    /// AWS configuration with timeout settings
    ///
    /// SDK retries are disabled: a failed call is reported to the caller as is.
    pub async fn aws_config(&self) -> aws_config::SdkConfig {
        let timeout_config = TimeoutConfig::builder()
            .operation_timeout(Duration::from_secs(30))
            .build();

        let mut config_builder = aws_config::load_defaults(BehaviorVersion::latest())
            .await
            .to_builder()
            .retry_config(RetryConfig::disabled())
            .timeout_config(timeout_config);

        if let Some(endpoint_url) = self.override_aws_endpoint_url() {
            config_builder = config_builder.endpoint_url(endpoint_url);
        }

        config_builder.build()
    }

    /// AWS S3 service configuration
    pub async fn s3_client_config(&self) -> aws_sdk_s3::Config {
        let aws_config = self.aws_config().await;
        let s3_config: aws_sdk_s3::Config = (&aws_config).into();
        let mut builder = s3_config.to_builder();

        // LocalStack only serves path-style bucket addressing
        if matches!(self, Self::Development { .. }) {
            builder.set_force_path_style(Some(true));
        }

        builder.build()
    }

    /// AWS `DynamoDB` service configuration
    pub async fn dynamodb_client_config(&self) -> aws_sdk_dynamodb::Config {
        let aws_config = self.aws_config().await;
        (&aws_config).into()
    }

    /// Presigned URL expiry
    #[must_use]
    pub const fn presigned_url_expiry(&self) -> Duration {
        match self {
            Self::Production | Self::Staging => {
                Duration::from_secs(DEFAULT_PRESIGNED_URL_EXPIRY_SECS)
            }
            Self::Development {
                presign_expiry_override,
            } => {
                let secs = match presign_expiry_override {
                    Some(secs) => *secs,
                    None => DEFAULT_PRESIGNED_URL_EXPIRY_SECS,
                };
                Duration::from_secs(secs)
            }
        }
    }

    /// Default log level, overridable with `TRACING_LEVEL`
    #[must_use]
    pub fn tracing_level(&self) -> Level {
        env::var("TRACING_LEVEL")
            .ok()
            .and_then(|val| val.parse::<Level>().ok())
            .unwrap_or(match self {
                Self::Production | Self::Staging => Level::INFO,
                Self::Development { .. } => Level::DEBUG,
            })
    }

    /// Installs the global tracing subscriber
    ///
    /// JSON lines for staging and production (`CloudWatch`), plain text for
    /// development. `RUST_LOG` directives take precedence over the default level.
    pub fn init_tracing(&self) {
        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(self.tracing_level()).into())
            .from_env_lossy();

        match self {
            Self::Production | Self::Staging => {
                fmt().json().with_env_filter(filter).init();
            }
            Self::Development { .. } => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}
