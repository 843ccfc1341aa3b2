use crate::config::{Environment, LogFormat, Settings};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset.
fn default_directives(env: &Environment) -> &'static str {
    match env {
        Environment::Dev => "renovation_estimator=debug,tower_http=debug,info",
        Environment::Staging => "renovation_estimator=debug,tower_http=info,info",
        Environment::Prod => "renovation_estimator=info,tower_http=info,warn",
    }
}

pub fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&settings.env)));

    let verbose_source = settings.env.is_dev();
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(verbose_source)
        .with_line_number(verbose_source);

    match settings.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.pretty())
            .init(),
    }

    tracing::info!(
        env = ?settings.env,
        format = ?settings.log_format,
        "Logging initialized"
    );
}
