use aifeed_aggregator::{Article, NewsAggregator};
use aifeed_core::FeedConfig;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "aifeed")]
#[command(about = "AI-news aggregation across NewsData.io, GNews, and NewsAPI")]
struct Cli {
    /// Emit results as JSON instead of plain text.
    #[arg(long, global = true)]
    json: bool,

    /// Maximum number of articles to request per provider.
    #[arg(long, global = true, default_value_t = 20)]
    limit: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the global AI-news feed.
    Feed,
    /// Search all providers for a query, with AI-assisted query rewriting
    /// when a Gemini key is configured.
    Search { query: String },
    /// Fetch the AI-news feed for one country.
    Country {
        /// ISO 3166-1 alpha-2 code, e.g. "gb".
        code: String,
        /// Human-readable country name for log context.
        #[arg(long, default_value = "")]
        name: String,
    },
    /// Search for a query and summarize the top result.
    Summarize { query: String },
    /// Fetch the global feed and bucket its headlines by topic.
    Topics,
    /// Fetch the global feed and extract key trend bullets.
    Insights,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = FeedConfig::from_env()?;
    let aggregator = NewsAggregator::from_config(&config)?;

    match cli.command {
        Commands::Feed => {
            let articles = aggregator.global_feed(cli.limit).await;
            print_articles(&articles, cli.json)?;
        }
        Commands::Search { query } => {
            let articles = aggregator.search(&query, cli.limit).await;
            print_articles(&articles, cli.json)?;
        }
        Commands::Country { code, name } => {
            let articles = aggregator.country_feed(&code, &name, cli.limit).await;
            print_articles(&articles, cli.json)?;
        }
        Commands::Summarize { query } => {
            let articles = aggregator.search(&query, cli.limit).await;
            match articles.first() {
                Some(article) => {
                    let summary = aggregator.summarize(article).await;
                    println!("{}", article.title);
                    println!("{summary}");
                }
                None => println!("no articles found"),
            }
        }
        Commands::Topics => {
            let articles = aggregator.global_feed(cli.limit).await;
            let buckets = aggregator.topics(&articles).await;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&buckets)?);
            } else if buckets.is_empty() {
                println!("no topic buckets available");
            } else {
                for bucket in buckets {
                    println!("{} ({})", bucket.name, bucket.count);
                }
            }
        }
        Commands::Insights => {
            let articles = aggregator.global_feed(cli.limit).await;
            let bullets = aggregator.insights(&articles).await;
            if bullets.is_empty() {
                println!("no insights available");
            }
            for bullet in bullets {
                println!("- {bullet}");
            }
        }
    }

    Ok(())
}

fn print_articles(articles: &[Article], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(articles)?);
        return Ok(());
    }
    if articles.is_empty() {
        println!("no articles found");
        return Ok(());
    }
    for article in articles {
        println!(
            "[{}] {} - {} ({})",
            article.country_code, article.title, article.source, article.url
        );
    }
    Ok(())
}
