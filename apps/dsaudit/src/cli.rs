//! CLI argument parsing via `clap`.

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "dsaudit",
    version,
    about = "Design system audit for UI component folders",
    long_about = "dsaudit — checks component folders for expected files, design token compliance, and sync with an external design source.\n\nConfiguration precedence: CLI > dsaudit.toml > defaults.",
    after_help = "Examples:\n  dsaudit list\n  dsaudit analyze Button\n  dsaudit validate Button --css 'color: #123456'\n  dsaudit sync --all --output json\n  dsaudit dashboard",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "Increase log verbosity (-v info, -vv debug, -vvv trace)")]
    pub verbose: u8,
    #[arg(short, long, global = true, action = clap::ArgAction::SetTrue, help = "Only log errors")]
    pub quiet: bool,
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Args, Clone, Default)]
/// Options shared by every component command.
pub struct Common {
    #[arg(long, help = "Repository root (default: current dir)")]
    pub repo_root: Option<String>,
    #[arg(long, help = "Components directory relative to the repository root")]
    pub components_dir: Option<String>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
    #[arg(long, help = "External design token file (toml|json|yaml)")]
    pub tokens: Option<String>,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current dsaudit version.")]
    Version,
    /// List components
    #[command(
        about = "List components",
        long_about = "List component directories under the components root, sorted by name."
    )]
    List {
        #[command(flatten)]
        common: Common,
    },
    /// Files of one component
    #[command(
        about = "Show component files",
        long_about = "List files directly inside a component directory with extension and size."
    )]
    Info {
        #[command(flatten)]
        common: Common,
        #[arg(help = "Component name")]
        name: String,
    },
    /// Structure analysis
    #[command(
        about = "Analyze component structure",
        long_about = "Report whether <Name>.css, <Name>.test.tsx, <Name>.stories.tsx, and index.ts exist.",
        after_help = "Examples:\n  dsaudit analyze Button\n  dsaudit analyze Button --output json"
    )]
    Analyze {
        #[command(flatten)]
        common: Common,
        #[arg(help = "Component name")]
        name: String,
    },
    /// Design token compliance
    #[command(
        about = "Check design token compliance",
        long_about = "Flag colors and px spacings outside the approved palette. Validates --css text when given, otherwise the component stylesheet.",
        after_help = "Examples:\n  dsaudit validate Button\n  dsaudit validate Button --css 'padding: 7px'\n  dsaudit validate --all --check"
    )]
    Validate {
        #[command(flatten)]
        common: Common,
        #[arg(required_unless_present = "all", help = "Component name")]
        name: Option<String>,
        #[arg(long, conflicts_with = "all", help = "Styling text to validate instead of the stylesheet")]
        css: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Validate every component stylesheet")]
        all: bool,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Exit non-zero if any issue is found")]
        check: bool,
    },
    /// Sync with the external design source
    #[command(
        about = "Check sync with external design tokens",
        long_about = "Compare external color and spacing tokens with component stylesheets. Without a token file the built-in mock source is used.",
        after_help = "Examples:\n  dsaudit sync Button\n  dsaudit sync --all --tokens design/tokens.toml --check"
    )]
    Sync {
        #[command(flatten)]
        common: Common,
        #[arg(required_unless_present = "all", help = "Component name")]
        name: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Report on every component")]
        all: bool,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Exit non-zero if anything is out of sync")]
        check: bool,
    },
    /// Quality dashboard
    #[command(
        about = "Show quality dashboard",
        long_about = "Score every component on completeness, compliance, tests, and stories, with recommendations."
    )]
    Dashboard {
        #[command(flatten)]
        common: Common,
    },
    /// Approved token catalog
    #[command(about = "Show approved design tokens", long_about = "Print the configured color palette and spacing scale.")]
    Tokens {
        #[command(flatten)]
        common: Common,
    },
    /// Prompt templates
    Prompt {
        #[command(subcommand)]
        cmd: PromptCmd,
    },
}

#[derive(Subcommand)]
/// Subcommands for `dsaudit prompt`
pub enum PromptCmd {
    /// Prompt for a new component
    #[command(about = "Prompt to create a component")]
    Create {
        #[arg(long, help = "Component name")]
        name: String,
        #[arg(long, help = "What the component does")]
        description: String,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Prompt for a component review
    #[command(about = "Prompt to review a component")]
    Review {
        #[arg(long, help = "Component name")]
        name: String,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}
