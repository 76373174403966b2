//! dsaudit CLI binary entry point.
//! Resolves configuration, runs one operation, and prints the result.

use clap::Parser;
use dsaudit::cli::{Cli, Commands, Common, PromptCmd};
use dsaudit::config::{self, Effective};
use dsaudit::error::AuditError;
use dsaudit::ops::Auditor;
use dsaudit::sync::AnySource;
use dsaudit::{output, prompt, utils};
use std::process::ExitCode;
use tracing::debug;

/// Operation finished and printed; `--check` found problems.
const EXIT_CHECK_FAILED: u8 = 1;
/// Operation could not produce a result.
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Commands::Prompt { cmd } => run_prompt(cmd),
        cmd => {
            let common = match &cmd {
                Commands::List { common }
                | Commands::Info { common, .. }
                | Commands::Analyze { common, .. }
                | Commands::Validate { common, .. }
                | Commands::Sync { common, .. }
                | Commands::Dashboard { common }
                | Commands::Tokens { common } => common.clone(),
                Commands::Version | Commands::Prompt { .. } => Common::default(),
            };
            let eff = effective(&common);
            match run(cmd, &eff) {
                Ok(failed_check) if failed_check => ExitCode::from(EXIT_CHECK_FAILED),
                Ok(_) => ExitCode::SUCCESS,
                Err(e) => {
                    output::print_error(&e, &eff.output);
                    ExitCode::from(EXIT_ERROR)
                }
            }
        }
    }
}

fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = match cli.verbose {
        0 if cli.quiet => EnvFilter::new("error"),
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(cli.verbose >= 2),
        )
        .init();
}

fn effective(common: &Common) -> Effective {
    let eff = config::resolve_effective(
        common.repo_root.as_deref(),
        common.components_dir.as_deref(),
        common.output.as_deref(),
        common.tokens.as_deref(),
    );
    if !eff.config_found && eff.output != "json" {
        eprintln!(
            "{} No dsaudit.toml found; using defaults.",
            utils::note_prefix()
        );
    }
    debug!(
        repo_root = %eff.repo_root.display(),
        components_dir = %eff.components_dir.display(),
        "configuration resolved"
    );
    eff
}

/// Run a component command. `Ok(true)` means a `--check` found problems.
fn run(cmd: Commands, eff: &Effective) -> Result<bool, AuditError> {
    // Only sync reads the external token file.
    let auditor: Auditor<AnySource> = match cmd {
        Commands::Sync { .. } => Auditor::from_effective(eff)?,
        _ => Auditor::offline(eff),
    };
    let out = eff.output.as_str();
    match cmd {
        Commands::List { .. } => output::print_list(&auditor.list_components(), out)?,
        Commands::Info { name, .. } => output::print_info(&auditor.component_info(&name)?, out)?,
        Commands::Analyze { name, .. } => {
            output::print_analysis(&auditor.analyze_component(&name)?, out)?
        }
        Commands::Validate {
            name,
            css,
            all,
            check,
            ..
        } => {
            if all {
                let results = auditor.check_all_compliance();
                output::print_compliance_all(&results, out)?;
                return Ok(check && results.iter().any(|r| !r.compliant));
            }
            let name = name.unwrap_or_default();
            let result = auditor.check_compliance(&name, css.as_deref())?;
            output::print_compliance(&result, out)?;
            return Ok(check && !result.compliant);
        }
        Commands::Sync {
            name, all, check, ..
        } => {
            if all {
                let rep = auditor.check_all_sync();
                output::print_sync_report(&rep, out)?;
                return Ok(check && rep.summary.out_of_sync > 0);
            }
            let st = auditor.check_sync(&name.unwrap_or_default())?;
            output::print_sync(&st, out)?;
            return Ok(check && !st.is_synced);
        }
        Commands::Dashboard { .. } => output::print_dashboard(&auditor.quality_dashboard()?, out)?,
        Commands::Tokens { .. } => output::print_tokens(&auditor.token_catalog(), out)?,
        Commands::Version | Commands::Prompt { .. } => {}
    }
    Ok(false)
}

fn run_prompt(cmd: PromptCmd) -> ExitCode {
    let res = match &cmd {
        PromptCmd::Create {
            name,
            description,
            output: mode,
        } => output::print_prompt(
            &prompt::create_component_prompt(name, description),
            mode.as_deref().unwrap_or("human"),
        ),
        PromptCmd::Review { name, output: mode } => output::print_messages(
            &prompt::review_component_prompt(name),
            mode.as_deref().unwrap_or("human"),
        ),
    };
    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&e, "human");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
