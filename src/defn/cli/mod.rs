//! # CLI Layer
//!
//! One of the two front-ends over the command layer. This is the only place
//! that reads stdin, writes stdout and decides exit codes.
//!
//! - `run()`: dispatch, called by `main.rs`
//! - `init_context()`: config file, env overrides, flags, dictionary
//! - `handle_*()`: one per subcommand, calls a command and prints its result
//! - [`repl`]: the interactive prompt
//! - [`print`]: output formatting

mod print;
mod repl;

use crate::args::{Cli, Commands};
use anyhow::{anyhow, Context};
use defn::commands::{self, CmdMessage};
use defn::config::{DefnConfig, CONFIG_FILENAME};
use defn::server::{self, JwtConfig};
use defn::{telemetry, Dictionary};
use print::{print_listing, print_messages};
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

struct AppContext {
    dictionary: Dictionary,
    config: DefnConfig,
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let serving = matches!(cli.command, Some(Commands::Serve { .. }));
    telemetry::init(telemetry::default_filter(cli.verbose, serving));

    let config = load_config(&cli)?;

    match cli.command {
        None | Some(Commands::Repl) => handle_repl(&init_context(config)?),
        Some(Commands::Add { word, definition }) => {
            handle_add(&init_context(config)?, &word, &definition)
        }
        Some(Commands::Remove { word }) => handle_remove(&init_context(config)?, &word),
        Some(Commands::Define { word }) => handle_define(&init_context(config)?, &word),
        Some(Commands::List) => handle_list(&init_context(config)?),
        Some(Commands::Serve { bind }) => {
            let mut config = config;
            if let Some(bind) = bind {
                config.bind_addr = bind;
            }
            handle_serve(init_context(config)?)
        }
        Some(Commands::Token { name, hours }) => handle_token(&config, name, hours),
        Some(Commands::Init) => handle_init(&cli.config_dir),
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<DefnConfig> {
    let mut config = DefnConfig::load(&cli.config_dir)
        .with_context(|| format!("reading {}", cli.config_dir.join(CONFIG_FILENAME).display()))?
        .with_overrides(|key| std::env::var(key).ok());

    if let Some(file) = &cli.file {
        config.dictionary_file = file.clone();
    }
    Ok(config)
}

fn init_context(config: DefnConfig) -> anyhow::Result<AppContext> {
    let dictionary =
        Dictionary::open_with_policy(config.dictionary_file.clone(), config.remove_policy)?;
    Ok(AppContext { dictionary, config })
}

fn handle_repl(ctx: &AppContext) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    repl::run(&ctx.dictionary, stdin.lock(), &mut stdout)?;
    ctx.dictionary.close()?;
    Ok(())
}

fn handle_add(ctx: &AppContext, word: &str, definition: &str) -> anyhow::Result<()> {
    let result = commands::add::run(&ctx.dictionary, word, definition)?;
    print_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}

fn handle_remove(ctx: &AppContext, word: &str) -> anyhow::Result<()> {
    let result = commands::remove::run(&ctx.dictionary, word)?;
    print_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}

fn handle_define(ctx: &AppContext, word: &str) -> anyhow::Result<()> {
    let result = commands::define::run(&ctx.dictionary, word)?;
    print_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}

fn handle_list(ctx: &AppContext) -> anyhow::Result<()> {
    let result = commands::list::run(&ctx.dictionary)?;
    let mut out = io::stdout().lock();
    print_listing(&mut out, &result.listed)?;
    print_messages(&mut out, &result.messages)?;
    Ok(())
}

fn handle_serve(ctx: AppContext) -> anyhow::Result<()> {
    let AppContext { dictionary, config } = ctx;
    let runtime = tokio::runtime::Runtime::new().context("starting the async runtime")?;
    runtime.block_on(server::serve(dictionary, &config))
}

fn handle_token(config: &DefnConfig, name: Option<String>, hours: u64) -> anyhow::Result<()> {
    let secret = config
        .jwt_secret
        .as_deref()
        .ok_or_else(|| anyhow!("no jwt_secret configured (set it in defn.json or DEFN_JWT_SECRET)"))?;

    let ttl = Duration::from_secs(hours.saturating_mul(3600));
    let token = JwtConfig::from_secret(secret.as_bytes()).issue(name, ttl)?;
    println!("{}", token);
    Ok(())
}

fn handle_init(config_dir: &Path) -> anyhow::Result<()> {
    let path = config_dir.join(CONFIG_FILENAME);
    let message = if path.exists() {
        CmdMessage::warning(format!("Config already exists at {}", path.display()))
    } else {
        DefnConfig::default().save(config_dir)?;
        CmdMessage::success(format!("Wrote {}", path.display()))
    };

    let mut out = io::stdout().lock();
    print_messages(&mut out, &[message])?;
    out.flush()?;
    Ok(())
}
