//! socialhub - Social media dashboard

mod cli;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use cli::CliError;
use indicatif::{ProgressBar, ProgressStyle};
use socialhub_core::views::accounts::AccountsView;
use socialhub_core::views::analytics::{AnalyticsPeriod, AnalyticsView};
use socialhub_core::views::dashboard::DashboardView;
use socialhub_core::views::posts::{PostFilter, PostsView, StatusFilter};
use socialhub_core::views::schedule::ScheduleView;
use socialhub_core::{AppConfig, CoreError, FileKeyValueStore, Session};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "socialhub.log";

#[derive(Parser)]
#[command(
    name = "socialhub",
    version,
    about = "Social media dashboard",
    long_about = "Manage posts, schedules, analytics and connected accounts from the terminal.\n\
                  \n\
                  Examples:\n\
                    socialhub                              # Run TUI (default)\n\
                    socialhub web --port 8080              # Serve the dashboard over HTTP\n\
                    socialhub both                         # TUI and web sharing one session\n\
                    socialhub login ana@example.com -p pw  # Sign in\n\
                    socialhub posts --status draft         # List drafts\n\
                    socialhub analytics --period 30d       # Analytics overview\n\
                  \n\
                  Environment Variables:\n\
                    SOCIALHUB_CONFIG                       # Config file path\n\
                    SOCIALHUB_DATA_DIR                     # Where the session record lives\n\
                    SOCIALHUB_LOG                          # Log filter (default: warn)"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Config file (default: <config_dir>/socialhub/config.toml)
    #[arg(long, global = true, env = "SOCIALHUB_CONFIG")]
    config: Option<PathBuf>,

    /// Data directory holding the session record
    #[arg(long, global = true, env = "SOCIALHUB_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, global = true, env = "SOCIALHUB_NO_COLOR")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Run TUI interface (default)
    Tui,
    /// Run web interface
    Web {
        /// Port for web server (default from config, 3333)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run both TUI and web interfaces
    Both {
        /// Port for web server (default from config, 3333)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Sign in with any non-empty email and password
    Login {
        email: String,
        #[arg(long, short = 'p', env = "SOCIALHUB_PASSWORD")]
        password: String,
    },
    /// Create an account and sign in
    Register {
        name: String,
        email: String,
        #[arg(long, short = 'p', env = "SOCIALHUB_PASSWORD")]
        password: String,
    },
    /// Clear the saved session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// List posts
    Posts {
        /// Case-insensitive search in post content
        #[arg(long, short = 's')]
        search: Option<String>,
        /// all, published, scheduled, draft
        #[arg(long, default_value = "all")]
        status: String,
    },
    /// Show upcoming scheduled posts
    Schedule,
    /// Show social accounts
    Accounts,
    /// Show analytics for a period
    Analytics {
        /// 7d, 30d, 90d, 1y
        #[arg(long, default_value = "7d")]
        period: String,
    },
    /// Print dashboard summary and exit
    Stats,
}

impl Mode {
    /// Interactive modes own the terminal, so logs go to a file
    fn is_interactive(&self) -> bool {
        matches!(self, Mode::Tui | Mode::Both { .. })
    }
}

/// Everything a command needs, built once at startup
struct AppContext {
    config: AppConfig,
    session: Arc<Session>,
    json: bool,
    no_color: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        let hint = e
            .downcast_ref::<CliError>()
            .and_then(CliError::suggestion)
            .or_else(|| e.downcast_ref::<CoreError>().and_then(CoreError::suggestion));
        if let Some(hint) = hint {
            eprintln!("Hint: {}", hint);
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }
    let data_dir = config.resolve_data_dir()?;

    let mode = cli.mode.unwrap_or(Mode::Tui);
    let log_file = mode.is_interactive().then(|| data_dir.join(LOG_FILE));
    init_logging(log_file.as_deref())?;

    let store = Arc::new(FileKeyValueStore::new(&data_dir));
    let session = Arc::new(Session::open(store, config.session_config()));
    info!(data_dir = %data_dir.display(), "Session opened");

    let ctx = AppContext {
        config,
        session,
        json: cli.json,
        no_color: cli.no_color,
    };

    match mode {
        Mode::Tui => run_tui(&ctx).await,
        Mode::Web { port } => run_web(&ctx, port).await,
        Mode::Both { port } => run_both(&ctx, port).await,
        Mode::Login { email, password } => {
            run_auth(&ctx, "Connexion en cours...", ctx.session.login(&email, &password)).await
        }
        Mode::Register {
            name,
            email,
            password,
        } => {
            run_auth(
                &ctx,
                "Création du compte...",
                ctx.session.register(&name, &email, &password),
            )
            .await
        }
        Mode::Logout => {
            ctx.session.logout();
            println!("Déconnecté");
            Ok(())
        }
        Mode::Whoami => {
            let user = cli::require_user(ctx.session.user())?;
            println!("{}", cli::format_user(&user, ctx.json));
            Ok(())
        }
        Mode::Posts { search, status } => run_posts(&ctx, search, &status),
        Mode::Schedule => {
            cli::require_user(ctx.session.user())?;
            let now = Local::now();
            let view = ScheduleView::load(&now);
            println!(
                "{}",
                cli::format_schedule(&view, &now, ctx.json, ctx.no_color)
            );
            Ok(())
        }
        Mode::Accounts => {
            cli::require_user(ctx.session.user())?;
            println!(
                "{}",
                cli::format_accounts(&AccountsView::load(), ctx.json, ctx.no_color)
            );
            Ok(())
        }
        Mode::Analytics { period } => {
            cli::require_user(ctx.session.user())?;
            let period = period
                .parse::<AnalyticsPeriod>()
                .map_err(CliError::from)?;
            println!(
                "{}",
                cli::format_analytics(&AnalyticsView::load(period), ctx.json, ctx.no_color)
            );
            Ok(())
        }
        Mode::Stats => {
            cli::require_user(ctx.session.user())?;
            println!("{}", cli::format_stats(&DashboardView::load(), ctx.json));
            Ok(())
        }
    }
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_env("SOCIALHUB_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}

async fn run_tui(ctx: &AppContext) -> Result<()> {
    socialhub_tui::run(Arc::clone(&ctx.session), ctx.config.latency()).await
}

async fn run_web(ctx: &AppContext, port: Option<u16>) -> Result<()> {
    let port = port.unwrap_or(ctx.config.web.port);
    let state = socialhub_web::AppState::new(Arc::clone(&ctx.session), ctx.config.latency());

    println!(
        "\n🌐 SocialHub API: http://{}:{}/dashboard",
        ctx.config.web.host, port
    );
    socialhub_web::run(state, &ctx.config.web.host, port).await
}

async fn run_both(ctx: &AppContext, port: Option<u16>) -> Result<()> {
    let port = port.unwrap_or(ctx.config.web.port);
    let host = ctx.config.web.host.clone();
    let state = socialhub_web::AppState::new(Arc::clone(&ctx.session), ctx.config.latency());

    // Start web server in background
    let web_handle = tokio::spawn(async move {
        if let Err(e) = socialhub_web::run(state, &host, port).await {
            tracing::error!(error = %e, "Web server error");
        }
    });

    // Run TUI in foreground
    let tui_result = run_tui(ctx).await;

    // Clean up web server
    web_handle.abort();

    tui_result
}

async fn run_auth<F>(ctx: &AppContext, message: &'static str, submit: F) -> Result<()>
where
    F: Future<Output = bool>,
{
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(message);

    let ok = submit.await;
    spinner.finish_and_clear();

    if !ok {
        return Err(CliError::Rejected.into());
    }

    let user = cli::require_user(ctx.session.user())?;
    if ctx.json {
        println!("{}", cli::format_user(&user, true));
    } else {
        println!("✓ Connecté en tant que {} ({})", user.name, user.email);
    }
    Ok(())
}

fn run_posts(ctx: &AppContext, search: Option<String>, status: &str) -> Result<()> {
    cli::require_user(ctx.session.user())?;
    let status = status.parse::<StatusFilter>().map_err(CliError::from)?;
    let view = PostsView::load(PostFilter::new(search.unwrap_or_default(), status));
    println!("{}", cli::format_posts(&view, ctx.json, ctx.no_color));
    Ok(())
}
