use clap::{Parser, Subcommand};
use exn::ResultExt;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use weblist::App;
use weblist::error::{ErrorKind, Result};
use weblist_config::Config;

/// Headless front-end for the weblist desktop shell.
#[derive(Parser)]
#[command(name = "weblist", version, about)]
struct Cli {
    /// Configuration file (defaults to `weblist.toml` in the platform config directory).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a greeting.
    Greet { name: String },
    /// List the websites in the bundled database.
    List {
        /// Print a JSON array instead of tab-separated lines.
        #[arg(long)]
        json: bool,
    },
    /// List the logical paths available in the bundled resource set.
    Resources,
}

fn init_tracing(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref()).or_raise(|| ErrorKind::Config)?;
    init_tracing(&config);
    let app = App::new(&config);
    app.startup();
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Greet { name } => {
            writeln!(stdout, "{}", app.greet(&name)).or_raise(|| ErrorKind::Output)?;
        },
        Command::List { json } => {
            let records = app.web_list().await.or_raise(|| ErrorKind::Store)?;
            if json {
                serde_json::to_writer_pretty(&mut stdout, &records).or_raise(|| ErrorKind::Output)?;
                writeln!(stdout).or_raise(|| ErrorKind::Output)?;
            } else {
                for record in &records {
                    writeln!(stdout, "{record}").or_raise(|| ErrorKind::Output)?;
                }
            }
        },
        Command::Resources => {
            for path in app.resources() {
                writeln!(stdout, "{path}").or_raise(|| ErrorKind::Output)?;
            }
        },
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:?}");
            ExitCode::FAILURE
        },
    }
}
