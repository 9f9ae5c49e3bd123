use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "pointstrip",
    about = "Trip recommendations that put your loyalty points to work"
)]
pub struct Cli {
    /// Log verbosity when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Save a trip search
    Search {
        /// JSON trip query: origins, date_window_start, date_window_end, nights,
        /// travelers, cabin, vibe_tags, preferred_destinations, constraints, balances, label
        json: String,
    },
    /// List saved trip searches, newest first
    Searches {
        #[arg(long, default_value = "20")]
        limit: usize,
    },
    /// Rank trip options for a saved search, or for an ad-hoc query with --query
    Recommend {
        /// Trip search id
        #[arg(required_unless_present = "query")]
        id: Option<String>,
        /// JSON trip query to run without saving it
        #[arg(long, conflicts_with = "id")]
        query: Option<String>,
        /// Print only the ranked summary instead of the full bundle
        #[arg(long)]
        brief: bool,
    },
    /// Show the playbook context for an emitted option
    Option {
        /// Option id from a previous `recommend`
        id: String,
    },
    /// List transfer partners
    Partners {
        /// Only partners of this bank currency (MR, CHASE, CAP1, CITI, BILT, WF)
        #[arg(long)]
        currency: Option<String>,
        /// Only programs that book this airline (substring match)
        #[arg(long)]
        airline: Option<String>,
    },
    /// List the destination catalog
    Destinations {
        /// Only destinations with this region/vibe tag
        #[arg(long)]
        tag: Option<String>,
    },
}
