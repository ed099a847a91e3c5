use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::model::{MediumFilter, SortKey, SortSpec};
use crate::query::QueryParams;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "folio",
    version,
    about = "Browse a creative portfolio of projects and mediums from the terminal.",
    after_help = "Examples:\n  folio                 Launch the browser (same as `folio tui`)\n  folio list --medium \"Print Media\" --sort title\n  folio show 002\n  folio --catalog ./portfolio.json mediums"
)]
pub struct Cli {
    /// Override the data directory (defaults to platform-specific app dir)
    #[arg(long, value_name = "PATH", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Read projects from this catalog file instead of the data directory
    #[arg(long, value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,

    /// Tracing filter (e.g. "info", "debug", or full directives)
    #[arg(long = "log", value_name = "DIRECTIVE", global = true)]
    pub log_filter: Option<String>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CliCommand {
    /// Launch the interactive browser (default command)
    Tui,
    /// Print the filtered and sorted project list
    List(ListArgs),
    /// Print one project's full writeup
    Show(ShowArgs),
    /// Print every medium with its approach and project count
    Mediums,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Case-insensitive text to look for across the project writeups
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Only list projects in this medium ("ALL MEDIUM" lists everything)
    #[arg(long, value_name = "NAME")]
    pub medium: Option<String>,

    /// Column to order by (newest start date first when omitted)
    #[arg(long, value_enum)]
    pub sort: Option<SortKey>,

    /// Reverse the order given by --sort
    #[arg(long, requires = "sort")]
    pub desc: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Project id as it appears in `folio list`
    #[arg(value_name = "ID")]
    pub id: String,
}

impl From<&ListArgs> for QueryParams {
    fn from(args: &ListArgs) -> Self {
        let sort = match args.sort {
            Some(key) if args.desc => SortSpec::desc(key),
            Some(key) => SortSpec::asc(key),
            None => SortSpec::initial(),
        };
        QueryParams {
            search: args.search.clone().unwrap_or_default(),
            medium: args
                .medium
                .as_deref()
                .map(MediumFilter::from_label)
                .unwrap_or_default(),
            sort: Some(sort),
        }
    }
}
