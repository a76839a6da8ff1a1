use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "employee_gateway=info,tower_http=info";
const VERBOSE_DIRECTIVE: &str = "employee_gateway=debug,tower_http=debug,info";

fn build_filter(verbose: bool, directive: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let fallback = if verbose {
            VERBOSE_DIRECTIVE
        } else {
            DEFAULT_DIRECTIVE
        };
        EnvFilter::try_new(directive.unwrap_or(fallback))
            .unwrap_or_else(|_| EnvFilter::new(fallback))
    })
}

/// Compact human-readable output. `RUST_LOG` wins over `directive`.
pub fn init_cli_logger(verbose: bool, directive: Option<&str>) {
    tracing_subscriber::registry()
        .with(build_filter(verbose, directive))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbose: bool, directive: Option<&str>) {
    tracing_subscriber::registry()
        .with(build_filter(verbose, directive))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(), // 結構化輸出，方便集中式日誌收集
        )
        .init();
}
