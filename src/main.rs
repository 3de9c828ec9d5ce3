//! devflow - CLI entry point.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use devflow::assistant::{CopilotLauncher, hand_off};
use devflow::config::{Config, ConfigResolver, EnvOverrides, Language, ScopeSetting};
use devflow::git::{DiffAggregator, DiffScope, GitCli};
use devflow::output::{OutputDispatcher, SystemClipboard};
use devflow::picker::pick_files;
use devflow::pipeline::{PromptPipeline, PromptRequest};
use devflow::prompt::{
    AuditFormat, build_audit_prompt, build_commit_prompt, build_pr_prompt, build_review_prompt,
    split_paths,
};

/// Turn pending git changes into composed, secret-scrubbed AI prompts.
#[derive(Parser, Debug)]
#[command(name = "devflow")]
#[command(about = "Turn pending git changes into composed, secret-scrubbed AI prompts")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ask for a tech-lead review of the pending changes
    Review {
        #[command(flatten)]
        diff: DiffArgs,

        #[command(flatten)]
        delivery: DeliveryArgs,
    },

    /// Ask for a security and code-quality audit report
    Audit {
        /// Report format (markdown or latex)
        #[arg(long, default_value = "markdown")]
        format: AuditFormat,

        /// Language of the report (en or es)
        #[arg(long)]
        language: Option<Language>,

        #[command(flatten)]
        diff: DiffArgs,

        #[command(flatten)]
        delivery: DeliveryArgs,
    },

    /// Ask for a pull request title and description
    Pr {
        /// Title idea for the assistant to build on
        #[arg(long)]
        title: Option<String>,

        #[command(flatten)]
        diff: DiffArgs,

        #[command(flatten)]
        delivery: DeliveryArgs,
    },

    /// Ask for a conventional-commit message for the staged changes
    Commit {
        /// Maximum characters of diff to include
        #[arg(long)]
        max_chars: Option<usize>,

        #[command(flatten)]
        delivery: DeliveryArgs,
    },

    /// Send free-form text through the prompt pipeline
    Ask {
        /// The question or instruction
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        #[command(flatten)]
        delivery: DeliveryArgs,
    },

    /// List the files with pending changes
    Files {
        /// Which changes to list (staged, unstaged or all)
        #[arg(long, default_value = "all")]
        scope: ScopeSetting,
    },
}

#[derive(Args, Debug)]
struct DiffArgs {
    /// Which changes to include (staged, unstaged or all)
    #[arg(long)]
    scope: Option<ScopeSetting>,

    /// Comma-separated list of paths to restrict the diff to
    #[arg(long)]
    files: Option<String>,

    /// Interactively pick the files to include
    #[arg(long)]
    pick: bool,

    /// Lines of diff context
    #[arg(long)]
    unified: Option<u32>,

    /// Maximum characters of diff to include
    #[arg(long)]
    max_chars: Option<usize>,
}

#[derive(Args, Debug)]
struct DeliveryArgs {
    /// Also write the prompt to this file
    #[arg(long)]
    out: Option<PathBuf>,

    /// Do not copy the prompt to the clipboard
    #[arg(long)]
    no_clipboard: bool,

    /// Do not launch the assistant after delivering the prompt
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cwd = std::env::current_dir().context("Failed to read current directory")?;

    let mut resolver = ConfigResolver::from_env();
    let config = resolver.load(&cwd);
    if let Some(source) = &config.source {
        tracing::debug!("Using config from {}", source.display());
    }
    let env = resolver.env().clone();

    let unified = config.defaults.unified;

    let (request, dry_run) = match cli.command {
        Command::Review { diff, delivery } => {
            let git = aggregator(&cwd, diff.unified.unwrap_or(unified));
            let setting = diff.scope.unwrap_or(config.defaults.review_scope);
            let Some(scope) = select_scope(&git, setting, &diff, "review").await? else {
                return Ok(());
            };
            let Some(changes) = git.combined_diff(&scope).await else {
                eprintln!("No git changes found for scope '{}'.", setting);
                eprintln!("Tip: stage files with: git add -A");
                return Ok(());
            };
            let max_chars = diff.max_chars.unwrap_or(config.defaults.max_chars);
            let prompt = build_review_prompt(&changes, config.defaults.language, max_chars);
            (delivery.request("review", prompt), delivery.dry_run)
        }
        Command::Pr {
            title,
            diff,
            delivery,
        } => {
            let git = aggregator(&cwd, diff.unified.unwrap_or(unified));
            let setting = diff.scope.unwrap_or(config.defaults.review_scope);
            let Some(scope) = select_scope(&git, setting, &diff, "pr").await? else {
                return Ok(());
            };
            let Some(changes) = git.combined_diff(&scope).await else {
                eprintln!("No git changes found for scope '{}'.", setting);
                eprintln!("Tip: stage files with: git add -A");
                return Ok(());
            };
            let max_chars = diff.max_chars.unwrap_or(config.defaults.max_chars);
            let prompt = build_pr_prompt(
                &changes,
                config.defaults.language,
                title.as_deref(),
                max_chars,
            );
            (delivery.request("pr", prompt), delivery.dry_run)
        }
        Command::Audit {
            format,
            language,
            diff,
            delivery,
        } => {
            let git = aggregator(&cwd, diff.unified.unwrap_or(unified));
            let setting = diff.scope.unwrap_or(config.defaults.audit_scope);
            let Some(scope) = select_scope(&git, setting, &diff, "audit").await? else {
                return Ok(());
            };
            eprintln!("Generating {} audit prompt (scope: {})...", format, setting);
            let changes = git.combined_diff(&scope).await;
            let language = language.unwrap_or(config.defaults.language);
            let max_chars = diff.max_chars.unwrap_or(config.defaults.max_chars);
            let prompt = build_audit_prompt(changes.as_deref(), format, language, max_chars);
            (delivery.request("audit", prompt), delivery.dry_run)
        }
        Command::Commit {
            max_chars,
            delivery,
        } => {
            let staged = aggregator(&cwd, unified)
                .diff(true, Some(unified), &[])
                .await
                .filter(|d| !d.trim().is_empty());
            let Some(staged) = staged else {
                eprintln!("No staged changes. Run \"git add\" first.");
                return Ok(());
            };
            let max_chars = max_chars.unwrap_or(config.defaults.max_chars);
            let prompt = build_commit_prompt(&staged, max_chars);
            (delivery.request("commit", prompt), delivery.dry_run)
        }
        Command::Ask { text, delivery } => {
            (delivery.request("ask", text.join(" ")), delivery.dry_run)
        }
        Command::Files { scope } => {
            let files = aggregator(&cwd, unified)
                .changed_files(&DiffScope::from_setting(scope))
                .await;
            if files.is_empty() {
                eprintln!("No changed files found.");
            }
            for file in files {
                println!("{}", file);
            }
            return Ok(());
        }
    };

    deliver(&config, &env, &cwd, &request).await?;

    if let Err(e) = hand_off(&CopilotLauncher, env.dry_run || dry_run).await {
        eprintln!("Warning: {}. The prompt was still delivered.", e);
    }

    Ok(())
}

impl DeliveryArgs {
    fn request(&self, command: &str, prompt: String) -> PromptRequest {
        PromptRequest::new(command, prompt)
            .with_out_path(self.out.clone())
            .with_no_clipboard(self.no_clipboard)
    }
}

/// Build the diff scope, asking the user to pick files when `--pick` is set.
///
/// Returns `None` when picking yields nothing to work with.
async fn select_scope(
    git: &DiffAggregator<GitCli>,
    setting: ScopeSetting,
    args: &DiffArgs,
    command: &str,
) -> Result<Option<DiffScope>> {
    let paths = args.files.as_deref().map(split_paths).unwrap_or_default();
    let scope = DiffScope::from_setting(setting);

    if !args.pick || !paths.is_empty() {
        return Ok(Some(scope.with_paths(paths)));
    }

    let candidates = git.changed_files(&scope).await;
    if candidates.is_empty() {
        eprintln!("No changed files found to pick from.");
        return Ok(None);
    }

    let title = format!(
        "Pick files to include in the {} context (scope: {}):",
        command, setting
    );
    let picked = pick_files(&title, &candidates).context("Failed to read file selection")?;
    if picked.is_empty() {
        eprintln!("No files selected.");
        return Ok(None);
    }

    Ok(Some(scope.with_paths(picked)))
}

fn aggregator(cwd: &Path, unified: u32) -> DiffAggregator<GitCli> {
    DiffAggregator::new(GitCli::new(cwd)).with_context_lines(unified)
}

async fn deliver(
    config: &Config,
    env: &EnvOverrides,
    cwd: &Path,
    request: &PromptRequest,
) -> Result<()> {
    let pipeline = PromptPipeline::new(config, env, cwd);
    let mut dispatcher = OutputDispatcher::new(SystemClipboard, std::io::stdout());
    pipeline
        .run(request, &mut dispatcher)
        .await
        .context("Failed to deliver prompt")?;
    Ok(())
}
