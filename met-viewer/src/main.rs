use clap::Parser;
use met_viewer::{display, AdvanceOutcome, Fetcher, Viewer, ViewerConfig, DEFAULT_BASE_URL};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "met-viewer", about = "Random artwork from the Met Collection API")]
struct Args {
    /// Collection API root
    #[arg(long, env = "MET_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Seed for reproducible draws
    #[arg(long)]
    seed: Option<u64>,

    /// Start with the N-Z artist filter on
    #[arg(long)]
    filter: bool,

    #[arg(long, default_value_t = met_viewer::DEFAULT_POOL_RANGE.start)]
    pool_start: usize,

    #[arg(long, default_value_t = met_viewer::DEFAULT_POOL_RANGE.end)]
    pool_end: usize,

    #[arg(long, default_value_t = met_viewer::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u32,

    /// Per-request timeout; unset means wait forever
    #[arg(long)]
    timeout_seconds: Option<u64>,

    #[arg(long, default_value = "Met-Viewer/1.0")]
    user_agent: String,
}

impl Args {
    fn into_config(self) -> ViewerConfig {
        ViewerConfig {
            base_url: self.base_url,
            user_agent: self.user_agent,
            timeout_seconds: self.timeout_seconds,
            pool_range: self.pool_start..self.pool_end,
            max_attempts: self.max_attempts,
            seed: self.seed,
            filter_on_start: self.filter,
        }
    }
}

const HELP: &str = "\
n            next random picture
r            reset form inputs
f            toggle the N-Z artist filter
s KEY VALUE  set a form input (url, format, no_ads, no_cookie_banners, width, height)
h            show this help
q            quit";

async fn print_screen(viewer: &Viewer) {
    let state = viewer.snapshot().await;
    println!("\n{}\n", display::render_screen(&state));
}

fn spawn_advance(viewer: Arc<Viewer>) {
    tokio::spawn(async move {
        match viewer.on_advance().await {
            // A newer advance will print its own result.
            AdvanceOutcome::Superseded => {}
            _ => print_screen(&viewer).await,
        }
    });
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = Args::parse().into_config();
    info!("Starting Met viewer against {}", config.base_url);

    let fetcher = Fetcher::new(&config)?;
    let viewer = Arc::new(Viewer::new(Arc::new(fetcher), config));

    println!("Status: {}", display::status_text(&viewer.snapshot().await.status));
    viewer.init().await;
    print_screen(&viewer).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut words = line.split_whitespace();
        match words.next() {
            Some("n") => {
                if viewer.can_advance().await {
                    println!("Status: Loading...");
                    spawn_advance(viewer.clone());
                } else {
                    println!("Next Picture is disabled: no artworks were loaded.");
                }
            }
            Some("r") => {
                viewer.reset().await;
                print_screen(&viewer).await;
            }
            Some("f") => {
                viewer.toggle_filter().await;
                print_screen(&viewer).await;
            }
            Some("s") => {
                let field = words.next().unwrap_or_default();
                let value = words.collect::<Vec<_>>().join(" ");
                match viewer.set_input(field, &value).await {
                    Ok(()) => println!("{} = {}", field, value),
                    Err(e) => error!("{}", e),
                }
            }
            Some("h") => println!("{}", HELP),
            Some("q") => break,
            Some(other) => println!("Unknown command {:?}; press h for help", other),
            None => {}
        }
    }

    info!("Met viewer finished");
    Ok(())
}
