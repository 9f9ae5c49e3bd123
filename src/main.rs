use clap::Parser;
use pointstrip::cli::commands::{Cli, Commands};
use pointstrip::domain::catalog::destinations::DESTINATIONS;
use pointstrip::domain::entities::recommendation::RecommendationBundle;
use pointstrip::domain::entities::trip_query::TripQuery;
use pointstrip::domain::values::currency::Currency;
use pointstrip::PointsTrip;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let db_path = std::env::var("POINTSTRIP_DB").unwrap_or_else(|_| "./pointstrip.db".into());

    let pt = match PointsTrip::new(&db_path) {
        Ok(pt) => pt,
        Err(e) => {
            eprintln!("Error initializing pointstrip: {e}");
            std::process::exit(1);
        }
    };

    let result = run_command(pt, cli.command).await;
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays machine-readable JSON.
fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run_command(pt: PointsTrip, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Search { json } => {
            let query: TripQuery = serde_json::from_str(&json)?;
            let search = pt.create_trip_search(query)?;
            println!("{}", serde_json::to_string_pretty(&search)?);
        }
        Commands::Searches { limit } => {
            let searches = pt.list_trip_searches(Some(limit))?;
            println!("{}", serde_json::to_string_pretty(&searches)?);
        }
        Commands::Recommend { id, query, brief } => {
            let bundle = match (id, query) {
                (Some(id), _) => pt.recommend(&id).await?,
                (None, Some(json)) => {
                    let query: TripQuery = serde_json::from_str(&json)?;
                    let query_id = uuid::Uuid::new_v4().to_string();
                    pt.recommend_query(&query_id, &query).await?
                }
                (None, None) => return Err("a trip search id or --query is required".into()),
            };
            if brief {
                print_brief(&bundle);
            } else {
                println!("{}", serde_json::to_string_pretty(&bundle)?);
            }
        }
        Commands::Option { id } => {
            let context = pt.playbook_context(&id)?;
            println!("{}", serde_json::to_string_pretty(&context)?);
        }
        Commands::Partners { currency, airline } => {
            let graph = pt.transfer_graph();
            let currency = currency.map(|c| c.parse::<Currency>()).transpose()?;
            let edges: Vec<_> = match &airline {
                Some(airline) => graph.edges_for_airline(airline),
                None => graph.edges().iter().collect(),
            }
            .into_iter()
            .filter(|e| currency.map_or(true, |c| e.currency == c))
            .collect();
            println!("{}", serde_json::to_string_pretty(&edges)?);
        }
        Commands::Destinations { tag } => {
            let tag = tag.map(|t| t.to_lowercase());
            let destinations: Vec<_> = DESTINATIONS
                .iter()
                .filter(|d| tag.as_deref().map_or(true, |t| d.has_tag(t)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&destinations)?);
        }
    }
    Ok(())
}

fn print_brief(bundle: &RecommendationBundle) {
    println!("query {} ({:?})", bundle.query_id, bundle.cache);
    for (tile, id) in &bundle.winner_tiles {
        if let Some(option) = bundle.option(id) {
            println!("  {:?}: {} ({})", tile, option.city, option.destination);
        }
    }
    for (rank, o) in bundle.options.iter().enumerate() {
        println!(
            "{:>2}. {:<14} {} via {:<28} ${:>8.2}  {:.2}¢/pt  {:<6} {:<9} score {:+.3}  [{}]",
            rank + 1,
            o.city,
            o.origin,
            o.airline,
            o.oop_total,
            o.cpp_blended_capped,
            o.points_strategy,
            o.valuation.deal_rating,
            o.score_final,
            short_id(&o.id),
        );
    }
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}
