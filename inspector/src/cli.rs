use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use uniforge_event::{EventKind, LogScan};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a saved `getAccountInfo` response holding a Forge account.
    Account(AccountArgs),
    /// Print the event the Forge program emitted in a saved transaction.
    Event(EventArgs),
    /// Check that a saved transaction paid the artist through the Forge program.
    Validate(ValidateArgs),
}

#[derive(Args, Clone, Debug)]
pub struct GlobalArgs {
    #[arg(long, global = true, env = "UNIFORGE_PROGRAM_ID")]
    pub program_id: Option<String>,

    #[arg(long, global = true, env = "UNIFORGE_ARTIST")]
    pub artist: Option<String>,

    #[arg(long, global = true, env = "UNIFORGE_MIN_FEE_SOL")]
    pub min_fee_sol: Option<f64>,

    #[arg(
        long,
        global = true,
        env = "UNIFORGE_LOG_SCAN",
        value_enum,
        default_value = "invocation-scoped"
    )]
    pub log_scan: ScanArg,

    /// Also write hourly-rotated logs to this directory.
    #[arg(long, global = true, env = "UNIFORGE_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Args, Clone, Debug)]
pub struct AccountArgs {
    pub file: PathBuf,

    /// Claimed count persisted by a previous run; prints the token ids
    /// issued since.
    #[arg(long)]
    pub previous: Option<u16>,
}

#[derive(Args, Clone, Debug)]
pub struct EventArgs {
    pub file: PathBuf,

    #[arg(long, value_enum, default_value = "any")]
    pub kind: KindArg,
}

#[derive(Args, Clone, Debug)]
pub struct ValidateArgs {
    pub file: PathBuf,

    /// Saved Forge account to take the artist and minimum fee from.
    #[arg(long)]
    pub account: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanArg {
    InvocationScoped,
    NextLine,
}

impl From<ScanArg> for LogScan {
    fn from(arg: ScanArg) -> Self {
        match arg {
            ScanArg::InvocationScoped => LogScan::InvocationScoped,
            ScanArg::NextLine => LogScan::NextLine,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindArg {
    Issued,
    Offer,
    Transfer,
    Any,
}

impl KindArg {
    pub fn event_kind(self) -> Option<EventKind> {
        match self {
            KindArg::Issued => Some(EventKind::Issued),
            KindArg::Offer => Some(EventKind::Offer),
            KindArg::Transfer => Some(EventKind::Transfer),
            KindArg::Any => None,
        }
    }
}
