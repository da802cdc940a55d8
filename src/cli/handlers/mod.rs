use std::path::{Path, PathBuf};

use tracing::info;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::{config_io, post_io, saved_mentions};
use crate::model::config::ShareConfig;
use crate::model::draft::{MENTION_SIGIL, TokenSet, normalize_handle};
use crate::model::mention::MentionCandidate;
use crate::ops::engine::ComposeEngine;
use crate::ops::mention_search::search_mentions;
use crate::ops::random::{RandomSource, SeededRandom, ThreadRandom};
use crate::ops::seed::{SeedVariant, SentenceRange, VariantPool};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let cwd = std::env::current_dir()?;
    let config = config_io::load_config(cli.config.as_deref().map(Path::new), &cwd)?;

    match cli.command {
        Commands::Compose(args) => cmd_compose(&config, args, json),
        Commands::Count(args) => cmd_count(&config, args, json),
        Commands::Next(args) => cmd_next(&config, args, json),
        Commands::Mentions(cmd) => match cmd.action {
            MentionsAction::Search(args) => cmd_mention_search(args, json),
            MentionsAction::Saved(args) => cmd_saved_list(args, json),
            MentionsAction::Save(args) => cmd_save_mention(args),
            MentionsAction::Forget(args) => cmd_forget_mention(args),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn random_source(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    }
}

fn locale_of<'a>(config: &'a ShareConfig, args: &'a ComposeArgs) -> &'a str {
    args.locale
        .as_deref()
        .unwrap_or(config.share.default_locale.as_str())
}

/// Build an engine seeded from the post file, with the args' mentions,
/// trends and text applied.
fn build_engine(
    config: &ShareConfig,
    args: &ComposeArgs,
    rng: &mut dyn RandomSource,
) -> Result<ComposeEngine, Box<dyn std::error::Error>> {
    let post = post_io::read_post(Path::new(&args.post))?;
    let default_mention = if args.no_default_mention {
        None
    } else {
        Some(config.share.site_handle.as_str())
    };
    let mut engine = ComposeEngine::new(default_mention, config.limits);

    let quotation = config.quote_for(locale_of(config, args));
    let pool = VariantPool::from(&config.variants);
    if let Some(index) = args.variant {
        let range: SentenceRange = pool.ranges().get(index).copied().ok_or_else(|| {
            format!(
                "no variant {} (configured: {})",
                index,
                pool.ranges().len()
            )
        })?;
        engine.seed_from_post(post, Some(&SeedVariant::excerpt(range, quotation)));
    } else if args.random_variant {
        engine.seed_random_variant(post, &pool, quotation, rng);
    } else {
        engine.seed_from_post(post, None);
    }

    for handle in &args.mention {
        engine.add_mention(handle);
    }
    for trend in &args.trend {
        engine.add_trend(trend);
    }
    if let Some(text) = &args.text {
        engine.set_post_text(text);
    }
    Ok(engine)
}

fn print_share(
    config: &ShareConfig,
    engine: &ComposeEngine,
    locale: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let snapshot = engine.snapshot(config.share.site_url.as_deref(), locale);
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{}", engine.composed_content());
        println!();
        println!(
            "{}",
            format_budget(engine.character_budget(), engine.limits().char_limit)
        );
    }
    Ok(())
}

/// Saved mentions path, respecting XDG_CONFIG_HOME
fn saved_mentions_path(store: &SavedStoreArgs) -> PathBuf {
    if let Some(path) = &store.store {
        return PathBuf::from(path);
    }
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".config"));
    config_dir.join("postshare").join("mentions.json")
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

fn bare_username(username: &str) -> Result<String, Box<dyn std::error::Error>> {
    let handle = normalize_handle(username).ok_or_else(|| format!("invalid username: '{}'", username))?;
    Ok(handle.trim_start_matches(MENTION_SIGIL).to_string())
}

// ---------------------------------------------------------------------------
// Compose commands
// ---------------------------------------------------------------------------

fn cmd_compose(config: &ShareConfig, args: ComposeArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = random_source(args.seed);
    let engine = build_engine(config, &args, rng.as_mut())?;
    print_share(config, &engine, locale_of(config, &args), json)
}

fn cmd_count(config: &ShareConfig, args: ComposeArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = random_source(args.seed);
    let engine = build_engine(config, &args, rng.as_mut())?;
    let budget = engine.character_budget();
    let limit = engine.limits().char_limit;
    if json {
        println!("{}", serde_json::to_string_pretty(&budget_to_json(budget, limit))?);
    } else {
        println!("{}", format_budget(budget, limit));
    }
    Ok(())
}

fn cmd_next(config: &ShareConfig, args: ComposeArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = random_source(args.seed);
    let mut engine = build_engine(config, &args, rng.as_mut())?;
    match engine.pick_random_related_post(rng.as_mut()) {
        Some(post) => info!(post_id = %post.id, "switched to related post"),
        None => return Err("no related posts to pick from".into()),
    }
    print_share(config, &engine, locale_of(config, &args), json)
}

// ---------------------------------------------------------------------------
// Mention commands
// ---------------------------------------------------------------------------

fn cmd_mention_search(args: MentionSearchArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut directory = match &args.directory {
        Some(path) => post_io::read_mention_directory(Path::new(path))?,
        None => Vec::new(),
    };
    if args.saved {
        let saved = saved_mentions::read_saved_mentions(&saved_mentions_path(&args.store));
        for candidate in saved {
            if !directory.iter().any(|c| c.username == candidate.username) {
                directory.push(candidate);
            }
        }
    }

    let selected: TokenSet = args
        .selected
        .iter()
        .filter_map(|h| normalize_handle(h))
        .collect();
    let search = search_mentions(&directory, &args.key, &selected);

    if json {
        println!("{}", serde_json::to_string_pretty(&search_to_json(&search))?);
    } else {
        for candidate in &search.matches {
            println!("{}", format_mention_line(candidate));
        }
        if search.needs_remote_lookup {
            eprintln!("no local match for '{}'; look it up on the network", args.key);
        }
    }
    Ok(())
}

fn cmd_saved_list(args: SavedStoreArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let saved = saved_mentions::read_saved_mentions(&saved_mentions_path(&args));
    if json {
        let list: Vec<MentionJson> = saved.iter().map(mention_to_json).collect();
        println!("{}", serde_json::to_string_pretty(&list)?);
    } else {
        for candidate in &saved {
            println!("{}", format_mention_line(candidate));
        }
    }
    Ok(())
}

fn cmd_save_mention(args: SaveMentionArgs) -> Result<(), Box<dyn std::error::Error>> {
    let path = saved_mentions_path(&args.store);
    let mut candidate = MentionCandidate::new(bare_username(&args.username)?);
    candidate.name = args.name;
    let handle = candidate.handle().unwrap_or_default();
    if saved_mentions::save_mention(&path, candidate)? {
        println!("saved {}", handle);
    } else {
        println!("{} already saved", handle);
    }
    Ok(())
}

fn cmd_forget_mention(args: ForgetMentionArgs) -> Result<(), Box<dyn std::error::Error>> {
    let path = saved_mentions_path(&args.store);
    let username = bare_username(&args.username)?;
    if saved_mentions::remove_saved_mention(&path, &username)? {
        println!("removed @{}", username);
    } else {
        println!("@{} was not saved", username);
    }
    Ok(())
}
