use clap::Parser;
use tower_lsp::{LspService, Server};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use abnf_analyzer::{AbnfLanguageServer, Locale, config::generate_configuration_markdown};

#[derive(Parser, Debug)]
#[command(name = "abnf-analyzer", version, about)]
struct Args {
    #[arg(long, short)]
    verbose: bool,

    #[arg(long)]
    log_file: Option<String>,

    /// Initial message locale (`en` or `zh-CN`). The client's settings may override it.
    #[arg(long)]
    locale: Option<String>,

    /// Print the settings reference as Markdown and exit.
    #[arg(long)]
    print_config_schema: bool,
}

fn default_log_path() -> std::path::PathBuf {
    let dir = dirs_or_tmp();
    dir.join("abnf-analyzer.log")
}

fn dirs_or_tmp() -> std::path::PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        let dir = std::path::PathBuf::from(home).join(".abnf-analyzer");
        if std::fs::create_dir_all(&dir).is_ok() {
            return dir;
        }
    }
    std::env::temp_dir()
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.print_config_schema {
        print!("{}", generate_configuration_markdown());
        return;
    }

    let stderr_filter = if args.verbose {
        EnvFilter::new("abnf_analyzer=debug,tower_lsp=debug")
    } else {
        EnvFilter::new("abnf_analyzer=info,tower_lsp=warn")
    };

    let file_filter = if args.verbose {
        EnvFilter::new("abnf_analyzer=debug,tower_lsp=info")
    } else {
        EnvFilter::new("abnf_analyzer=info,tower_lsp=warn")
    };

    let log_path = args.log_file.as_ref().map(std::path::PathBuf::from).unwrap_or_else(default_log_path);

    let file_appender = tracing_appender::rolling::never(
        log_path.parent().unwrap_or(std::path::Path::new(".")),
        log_path.file_name().unwrap_or(std::ffi::OsStr::new("abnf-analyzer.log")),
    );

    let file_layer =
        fmt::layer().with_writer(file_appender).with_ansi(false).with_target(false).with_filter(file_filter);

    let stderr_layer =
        fmt::layer().with_writer(std::io::stderr).with_ansi(false).with_target(false).with_filter(stderr_filter);

    tracing_subscriber::registry().with(file_layer).with(stderr_layer).init();

    info!("Starting ABNF Analyzer server v{}", env!("CARGO_PKG_VERSION"));
    info!("Log file: {}", log_path.display());

    let locale = args.locale.as_deref().and_then(|tag| {
        let locale = Locale::from_tag(tag);
        if locale.is_none() {
            warn!("Unknown locale '{tag}', using {}", Locale::default());
        }
        locale
    });

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(|client| AbnfLanguageServer::new(client, locale));

    Server::new(stdin, stdout, socket).serve(service).await;

    info!("ABNF Analyzer server stopped");
}
