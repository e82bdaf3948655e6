use clap::Parser;
use nf_core::{frontmatter, Error, Result};
use nf_scraper::ScraperManager;
use std::io::{self, BufRead, Write};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, warn};

mod report;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate YAML front matter from a note.com article", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Article URL. Prompted for when omitted.
    url: Option<String>,
    /// Directory the output file is written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
    /// Also print the extracted fields as JSON
    #[arg(long)]
    json: bool,
    /// Print the document without writing a file
    #[arg(long)]
    no_save: bool,
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the scrape API (POST /api/scrape) over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8081")]
        addr: SocketAddr,
    },
}

fn prompt_url() -> Result<String> {
    print!("note.comのURLを入力してください: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// One interactive run. Returns the path of the written file, if any.
async fn run(cli: Cli, manager: &ScraperManager, timestamp: u64) -> Result<Option<PathBuf>> {
    println!("{}", report::BANNER);
    println!("{}", "=".repeat(32));
    println!();

    let url = match cli.url {
        Some(url) => url,
        None => prompt_url()?,
    };

    manager.validate(&url)?;

    println!("\n⏳ ページを取得中...");
    let record = manager.scrape_url(&url).await?;
    if record.is_empty() {
        warn!("No metadata found at {}", url);
    }

    println!("\n✅ 取得完了！\n");
    println!("=== 抽出された情報 ===");
    for line in report::summary_lines(&record) {
        println!("{}", line);
    }

    if cli.json {
        println!("\n=== JSON ===");
        println!("{}", serde_json::to_string_pretty(&record)?);
    }

    let document = frontmatter::serialize(&record);
    println!("\n=== 生成されたYAML ===");
    println!("{}", document);

    if cli.no_save {
        return Ok(None);
    }

    let path = report::write_document(&cli.output_dir, timestamp, &document)?;
    info!("💾 Wrote {}", path.display());
    println!("\n📄 YAMLファイルを保存しました: {}", path.display());
    Ok(Some(path))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let mut cli = Cli::parse();
    nf_scraper::init_logging(cli.verbose);

    let result = match cli.command.take() {
        Some(Commands::Serve { addr }) => {
            nf_web::serve(addr, nf_web::AppState::new(ScraperManager::for_note())).await
        }
        None => run(cli, &ScraperManager::for_note(), unix_timestamp())
            .await
            .map(|_| ()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Validation(_)) => {
            eprintln!("\n❌ エラー: 有効なnote.comのURLを入力してください。");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("\n❌ エラーが発生しました: {}", e);
            ExitCode::FAILURE
        }
    }
}
