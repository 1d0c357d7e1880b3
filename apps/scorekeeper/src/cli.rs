use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use scoring_engine::{InputMode, PaymentMode, RuleVariant};

#[derive(Debug, Parser)]
#[command(name = "scorekeeper")]
#[command(about = "Cantonese mahjong scorekeeper")]
pub struct Cli {
    /// Session file (overrides MAHJONG_STATE_FILE)
    #[arg(long, global = true)]
    pub state_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start a new game, optionally changing the saved settings first
    Start(StartArgs),
    /// Score a win and record it
    Win(WinArgs),
    /// Score a win without recording it
    Preview(WinArgs),
    /// Record a drawn hand (流局)
    Draw,
    /// Remove the most recent round
    Undo,
    /// Restart with the saved settings
    Reset,
    /// End the current game
    End,
    /// Count another hand without scoring
    NextRound,
    /// Pass the deal to the next seat by hand
    AdvanceDealer,
    /// Rename the player in a seat
    Rename {
        seat: u8,
        name: String,
    },
    /// Set the preferred way of declaring wins
    Mode {
        #[arg(value_enum)]
        mode: InputModeArg,
    },
    /// List the fan catalog
    Fans(FansArgs),
    /// Check a fan selection for mutually exclusive patterns
    Validate {
        /// Comma-separated fan ids
        #[arg(value_delimiter = ',', required = true)]
        ids: Vec<String>,
    },
    /// Show the table
    Show,
    /// Show the recorded rounds
    History,
}

#[derive(Debug, Clone, Default, Args)]
pub struct StartArgs {
    #[arg(long)]
    pub base_score: Option<i64>,
    #[arg(long)]
    pub min_fan: Option<u32>,
    #[arg(long)]
    pub max_fan: Option<u32>,
    #[arg(long)]
    pub starting_score: Option<i64>,
    #[arg(long, value_enum)]
    pub variant: Option<VariantArg>,
    #[arg(long, value_enum)]
    pub payment_mode: Option<PaymentModeArg>,
    /// Four comma-separated names, seat 0 first
    #[arg(long, value_delimiter = ',')]
    pub names: Option<Vec<String>>,
}

#[derive(Debug, Clone, Args)]
#[command(group(ArgGroup::new("how").required(true).args(["self_draw", "discarder"])))]
#[command(group(ArgGroup::new("fan_input").required(true).args(["fan", "fans"])))]
pub struct WinArgs {
    /// Winner: seat 0-3, player id or name
    #[arg(long)]
    pub winner: String,

    /// 自摸
    #[arg(long)]
    pub self_draw: bool,

    /// 出銃: seat 0-3, player id or name of the discarder
    #[arg(long)]
    pub discarder: Option<String>,

    /// Fan count, declared directly
    #[arg(long)]
    pub fan: Option<u32>,

    /// Description for a direct fan count
    #[arg(long, requires = "fan")]
    pub desc: Option<String>,

    /// Comma-separated fan ids from the catalog
    #[arg(long, value_delimiter = ',')]
    pub fans: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct FansArgs {
    /// Only fans played under this variant
    #[arg(long, value_enum)]
    pub variant: Option<VariantArg>,
    /// Only limit hands
    #[arg(long, conflicts_with = "common")]
    pub limit: bool,
    /// Only the most common fans
    #[arg(long)]
    pub common: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    Standard,
    Custom,
}

impl From<VariantArg> for RuleVariant {
    fn from(v: VariantArg) -> Self {
        match v {
            VariantArg::Standard => RuleVariant::Standard,
            VariantArg::Custom => RuleVariant::Custom,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PaymentModeArg {
    Full,
    Half,
}

impl From<PaymentModeArg> for PaymentMode {
    fn from(v: PaymentModeArg) -> Self {
        match v {
            PaymentModeArg::Full => PaymentMode::Full,
            PaymentModeArg::Half => PaymentMode::Half,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum InputModeArg {
    Pro,
    Normal,
}

impl From<InputModeArg> for InputMode {
    fn from(v: InputModeArg) -> Self {
        match v {
            InputModeArg::Pro => InputMode::Pro,
            InputModeArg::Normal => InputMode::Normal,
        }
    }
}
