mod config;
mod error;

use std::path::{Path, PathBuf};

use blog::PostManager;
use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use content::{Notice, PostHandle, Role};
use policy::{Decision, PermissionRequest, Policy};
use tracing_subscriber::EnvFilter;

use config::Config;
use error::Result;

const CONFIG_FILE: &str = "blog.toml";

#[derive(Parser)]
#[command(name = "blog")]
#[command(about = "Role-based blog post management", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk an administrator and an author through creating, editing and deleting posts
    Demo {
        /// Print notices as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// List configured accounts
    Users,
    /// Show the policy decision for a single request
    Check {
        #[arg(long, value_enum)]
        role: RoleArg,
        /// Name of the acting user
        #[arg(long)]
        actor: String,
        /// Author name recorded on the post
        #[arg(long)]
        author: String,
        #[arg(long, value_enum, default_value = "edit")]
        action: ActionArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RoleArg {
    Administrator,
    Author,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Administrator => Role::Administrator,
            RoleArg::Author => Role::Author,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ActionArg {
    Edit,
    Delete,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = EnvFilter::new(filter_directive(verbose, env.as_deref()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Log filter: `-v`/`-vv` win over `RUST_LOG`, which wins over `warn`.
fn filter_directive(verbose: u8, env: Option<&str>) -> String {
    match (verbose, env) {
        (0, Some(env)) if !env.trim().is_empty() => env.to_string(),
        (0, _) => "warn".to_string(),
        (1, _) => "info".to_string(),
        _ => "debug".to_string(),
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Demo { json }) => cmd_demo(&config, json),
        None => cmd_demo(&config, false),
        Some(Commands::Users) => {
            cmd_users(&config);
            Ok(())
        }
        Some(Commands::Check {
            role,
            actor,
            author,
            action,
        }) => {
            println!("{}", check_decision(role.into(), &actor, &author, action));
            Ok(())
        }
    }
}

fn cmd_demo(config: &Config, json: bool) -> Result<()> {
    let mut admin = config.actor(Role::Administrator)?;
    let mut author = config.actor(Role::Author)?;

    println!("{}", admin.user());
    println!("{}", author.user());

    let admin_post = admin.create_post("Admin's First Post", "This is an admin post.");
    print_post(&admin_post);

    let author_post = author.create_post("Author's First Post", "This is an author's post.");
    print_post(&author_post);

    report(
        admin.edit_post(
            &admin_post,
            "Updated Admin's Post",
            "Updated content for admin post.",
        ),
        json,
    )?;
    print_post(&admin_post);

    report(
        author.edit_post(
            &author_post,
            "Updated Author's Post",
            "Updated content for author's post.",
        ),
        json,
    )?;
    print_post(&author_post);

    // Authors cannot touch the administrator's post
    report(author.edit_post(&admin_post, "Hijacked", "Nope."), json)?;

    report(admin.delete_post(&author_post), json)?;
    report(author.delete_post(&admin_post), json)?;

    if let Some(remaining) = author.as_author().map(|a| a.posts().len()) {
        println!("{} still holds {remaining} post(s)", author.user().name);
    }

    Ok(())
}

fn cmd_users(config: &Config) {
    if config.users.is_empty() {
        println!("No users configured.");
        return;
    }

    println!("{:<14}  USER", "ROLE");
    println!("{}", "-".repeat(60));
    for account in &config.users {
        println!("{:<14}  {}", account.role.to_string(), account.user);
    }
}

fn check_decision(role: Role, actor: &str, author: &str, action: ActionArg) -> String {
    let request = match action {
        ActionArg::Edit => PermissionRequest::edit(role, actor, author),
        ActionArg::Delete => PermissionRequest::delete(role, actor, author),
    };

    match Policy.check(&request) {
        Decision::Allow => "allow".to_string(),
        Decision::Deny { reason } => format!("deny: {reason}"),
    }
}

/// Print the notice for an operation outcome. Permission and lookup failures
/// are reported, not propagated.
fn report(outcome: blog::Result<Notice>, json: bool) -> Result<()> {
    println!("{}", notice_line(outcome, json)?);
    Ok(())
}

fn notice_line(outcome: blog::Result<Notice>, json: bool) -> Result<String> {
    let notice = match outcome {
        Ok(notice) => notice,
        Err(e) => e.notice(),
    };

    if json {
        Ok(serde_json::to_string(&notice)?)
    } else {
        let time = notice.timestamp.with_timezone(&Local).format("%H:%M:%S");
        Ok(format!("[{time}] {notice}"))
    }
}

fn print_post(post: &PostHandle) {
    println!("{post}");
    println!("Word count: {} words", post.word_count());
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return Ok(Config::load(path)?);
    }

    let default_path = Path::new(CONFIG_FILE);
    if default_path.exists() {
        Ok(Config::load(default_path)?)
    } else {
        Ok(Config::default_config())
    }
}
