use anyhow::{Context, Result};
use catalog::Catalog;
use clap::{Parser, Subcommand};
use colored::Colorize;
use embedding::EmbeddingClient;
use engine::{EngineConfig, Recommendation, Recommender};
use mappings::{ERA_RANGE_MAP, GENRE_TRADITIONAL_TO_SIMPLIFIED, MOOD_LABEL_TO_DB_TAGS};
use query::UserRequest;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// CineMood - mood-driven movie recommendation engine
#[derive(Parser)]
#[command(name = "cine-mood")]
#[command(about = "Embedding-first movie recommendations from moods and natural language", long_about = None)]
struct Cli {
    /// Path to the catalog export directory (movies.json + vectors.json)
    #[arg(short, long, default_value = "data/catalog")]
    data_dir: PathBuf,

    /// Address of the gRPC embedding service
    #[arg(long, default_value = "http://localhost:50061")]
    embedder_addr: String,

    /// Embedding dimension of the deployment
    #[arg(long, default_value = "1536")]
    dimension: usize,

    /// Optional TOML config file overriding engine defaults
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get movie recommendations
    Recommend {
        /// Natural-language query (Chinese or English)
        #[arg(long)]
        query: Option<String>,

        /// UI mood label, repeatable (e.g. --mood 失戀 --mood 派對)
        #[arg(long = "mood")]
        moods: Vec<String>,

        /// Genre label in traditional Chinese, repeatable
        #[arg(long = "genre")]
        genres: Vec<String>,

        /// Genre to exclude, repeatable
        #[arg(long = "exclude-genre")]
        exclude_genres: Vec<String>,

        /// Era tag, repeatable (60s..20s)
        #[arg(long = "era")]
        eras: Vec<String>,

        /// Minimum vote average
        #[arg(long)]
        min_rating: Option<f32>,

        /// Number of recommendations to return
        #[arg(long, default_value = "10")]
        count: usize,

        /// Seed for the diversity sampler (reproducible runs)
        #[arg(long)]
        seed: Option<u64>,

        /// Emit the full JSON records instead of the table
        #[arg(long)]
        json: bool,
    },

    /// List the available UI mood labels
    Moods,

    /// Search the catalog by title (case-insensitive substring match)
    Search {
        #[arg(long)]
        title: String,
    },

    /// Show catalog and configuration summary
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // The moods listing needs no catalog at all
    if matches!(cli.command, Commands::Moods) {
        print_mood_labels();
        return Ok(());
    }

    println!("Loading catalog from {}...", cli.data_dir.display());
    let start = Instant::now();
    let catalog = Arc::new(
        Catalog::load_from_files(&cli.data_dir).context("Failed to load catalog export")?,
    );
    println!("{} Loaded catalog in {:?}", "✓".green(), start.elapsed());

    let config = match &cli.config {
        Some(path) => EngineConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => EngineConfig::default(),
    };

    match cli.command {
        Commands::Recommend {
            query,
            moods,
            genres,
            exclude_genres,
            eras,
            min_rating,
            count,
            seed,
            json,
        } => {
            let mut config = config;
            if seed.is_some() {
                config.rng_seed = seed;
            }

            let request = UserRequest {
                natural_query: query,
                mood_labels: moods,
                genres,
                exclude_genres,
                eras,
                year_range: None,
                min_rating,
                count: Some(count),
            };

            handle_recommend(catalog, &cli.embedder_addr, cli.dimension, config, request, json)
                .await?;
        }
        Commands::Moods => unreachable!("handled above"),
        Commands::Search { title } => handle_search(&catalog, &title),
        Commands::Info => handle_info(&catalog, &config),
    }

    Ok(())
}

/// Handle the 'recommend' command
async fn handle_recommend(
    catalog: Arc<Catalog>,
    embedder_addr: &str,
    dimension: usize,
    config: EngineConfig,
    request: UserRequest,
    json: bool,
) -> Result<()> {
    let embedder = EmbeddingClient::connect(embedder_addr, dimension)
        .await
        .context("Failed to connect to embedding service")?;

    let recommender = Recommender::new(catalog, Arc::new(embedder), config)
        .context("Failed to build recommender")?;

    let start = Instant::now();
    let recommendations = recommender.recommend(&request).await?;
    println!(
        "{} {} recommendations in {:?}\n",
        "✓".green(),
        recommendations.len(),
        start.elapsed()
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&recommendations)?);
    } else {
        print_recommendations(&recommendations);
    }
    Ok(())
}

/// Handle the 'moods' command
fn print_mood_labels() {
    println!("{}", "Available mood labels:".bold().blue());
    let mut current_category = "";
    for entry in MOOD_LABEL_TO_DB_TAGS {
        if entry.category != current_category {
            current_category = entry.category;
            println!("\n{}", current_category.bold());
        }
        let rating_note = entry
            .min_rating
            .map(|r| format!(" (min rating {r:.1})"))
            .unwrap_or_default();
        println!(
            "  {} — {}{}",
            entry.label.green(),
            entry.description,
            rating_note.dimmed()
        );
    }
}

/// Handle the 'search' command
fn handle_search(catalog: &Catalog, title: &str) {
    let matches = catalog.search_titles(title);
    println!(
        "{}",
        format!("Search results for '{}':", title).bold().blue()
    );
    for movie in matches.iter().take(20) {
        let year = movie
            .release_year()
            .map(|y| y.to_string())
            .unwrap_or_else(|| "????".to_string());
        println!(
            "{}: {} ({}) [{}] avg {:.1} ({} votes)",
            movie.id,
            movie.title,
            year,
            movie.genres.join(", "),
            movie.vote_average,
            movie.vote_count
        );
    }
    if matches.is_empty() {
        println!("no matches");
    }
}

/// Handle the 'info' command
fn handle_info(catalog: &Catalog, config: &EngineConfig) {
    let (movies, indexed) = catalog.counts();

    println!("{}", "CineMood system info".bold().blue());
    println!("{}Movies: {}", "• ".green(), movies);
    println!("{}Indexed embeddings: {}", "• ".green(), indexed);
    println!(
        "{}Embedding dimension: {}",
        "• ".green(),
        catalog
            .dimension()
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string())
    );

    println!(
        "{}Quadrant thresholds: embedding {:.2}, match {:.2}",
        "• ".cyan(),
        config.quadrant_thresholds.high_embedding,
        config.quadrant_thresholds.high_match
    );
    println!(
        "{}Candidate counts: search {} → filter {} → final {}",
        "• ".cyan(),
        config.candidate_counts.embedding_top_k,
        config.candidate_counts.feature_filter_k,
        config.candidate_counts.final_recommendations
    );

    println!("\n{}", "Eras:".bold());
    for (era, (min, max)) in ERA_RANGE_MAP {
        println!("  {era}: {min}-{max}");
    }

    println!("\n{}", "Genres:".bold());
    let genres: Vec<&str> = GENRE_TRADITIONAL_TO_SIMPLIFIED
        .iter()
        .map(|(traditional, _)| *traditional)
        .collect();
    println!("  {}", genres.join("、"));
}

/// Helper function to format and print recommendations
fn print_recommendations(recommendations: &[Recommendation]) {
    println!("{}", "Recommendations:".bold().blue());
    for (rank, rec) in recommendations.iter().enumerate() {
        let year = rec
            .release_year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "????".to_string());
        println!(
            "{}. {} ({}) [{}] - {:.1}",
            (rank + 1).to_string().green(),
            rec.title,
            year,
            rec.genres.join(", "),
            rec.vote_average
        );
        println!(
            "   {} E:{:.3} M:{:.2} → {:.1}",
            rec.quadrant.dimmed(),
            rec.embedding_score,
            rec.match_ratio,
            rec.final_score
        );
    }
}
