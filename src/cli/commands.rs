use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pshare", about = concat!("pshare v", env!("CARGO_PKG_VERSION"), " - compose campaign posts for sharing"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ./postshare.toml if present)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Log more (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the composed share text and its character count
    Compose(ComposeArgs),
    /// Print only the character count against the limit
    Count(ComposeArgs),
    /// Switch to a random related post and print its composed share text
    Next(ComposeArgs),
    /// Search the mention directory or manage saved mentions
    Mentions(MentionsCmd),
}

// ---------------------------------------------------------------------------
// Compose args
// ---------------------------------------------------------------------------

#[derive(Args, Clone)]
pub struct ComposeArgs {
    /// Post JSON file
    pub post: String,
    /// Replace the seeded post text
    #[arg(long)]
    pub text: Option<String>,
    /// Mention to add (repeatable, `@` optional)
    #[arg(short, long)]
    pub mention: Vec<String>,
    /// Trend tag to add (repeatable)
    #[arg(short, long)]
    pub trend: Vec<String>,
    /// Start without the site's own mention
    #[arg(long)]
    pub no_default_mention: bool,
    /// Seed from the configured sentence range at this index
    #[arg(long, conflicts_with = "random_variant")]
    pub variant: Option<usize>,
    /// Seed from a randomly drawn sentence range
    #[arg(long)]
    pub random_variant: bool,
    /// Locale for the variant quotation and share link (default: from config)
    #[arg(long)]
    pub locale: Option<String>,
    /// Seed for random picks, for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

// ---------------------------------------------------------------------------
// Mentions args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct MentionsCmd {
    #[command(subcommand)]
    pub action: MentionsAction,
}

#[derive(Subcommand)]
pub enum MentionsAction {
    /// Filter a mention directory by a search key
    Search(MentionSearchArgs),
    /// List saved mentions
    Saved(SavedStoreArgs),
    /// Save a mention for later sessions
    Save(SaveMentionArgs),
    /// Remove a saved mention
    Forget(ForgetMentionArgs),
}

#[derive(Args)]
pub struct MentionSearchArgs {
    /// Search key (fewer than 2 characters lists everything)
    #[arg(default_value = "")]
    pub key: String,
    /// Mention directory JSON file
    #[arg(long)]
    pub directory: Option<String>,
    /// Also search saved mentions
    #[arg(long)]
    pub saved: bool,
    /// Handles already selected, excluded from results (repeatable)
    #[arg(long)]
    pub selected: Vec<String>,
    #[command(flatten)]
    pub store: SavedStoreArgs,
}

#[derive(Args)]
pub struct SavedStoreArgs {
    /// Saved mentions file (default: $XDG_CONFIG_HOME/postshare/mentions.json)
    #[arg(long)]
    pub store: Option<String>,
}

#[derive(Args)]
pub struct SaveMentionArgs {
    /// Username, `@` optional
    pub username: String,
    /// Display name
    #[arg(long)]
    pub name: Option<String>,
    #[command(flatten)]
    pub store: SavedStoreArgs,
}

#[derive(Args)]
pub struct ForgetMentionArgs {
    /// Username, `@` optional
    pub username: String,
    #[command(flatten)]
    pub store: SavedStoreArgs,
}
