use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use docspell::{aggregator, collector, dict, output, CheckOptions, DictionarySpeller};
use log::info;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "docspell")]
#[command(version, about = "Scan a documentation tree for misspelled words", long_about = None)]
struct Cli {
    /// Root directory to scan
    #[arg(value_name = "ROOT", default_value = "docs/polkadot")]
    root: PathBuf,

    /// Language/dictionary to use (e.g. en-US, en-GB)
    #[arg(short, long, default_value = "en-US")]
    language: String,

    /// Dictionary file to load instead of the installed one
    #[arg(long, value_name = "PATH")]
    dictionary: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Skip computing suggestions for flagged words
    #[arg(long)]
    no_suggestions: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Dictionary management
    Dict {
        #[command(subcommand)]
        action: DictCommands,
    },
}

#[derive(Parser, Debug)]
enum DictCommands {
    /// List installed dictionaries
    List,
    /// Download a dictionary
    Download {
        /// Language code (e.g. en-US, en-GB)
        language: String,
    },
    /// Update all installed dictionaries
    Update,
    /// Show dictionary info
    Info {
        /// Language code
        language: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "docspell", &mut io::stdout());
        return Ok(());
    }

    if let Some(command) = cli.command {
        return handle_command(command);
    }

    let options = CheckOptions::load(cli.language, cli.dictionary, cli.no_suggestions)?;
    let speller = DictionarySpeller::new(&options)?;

    let paths = collector::collect(&cli.root)?;
    info!("collected {} documents under {}", paths.len(), cli.root.display());

    let flagged = aggregator::aggregate(&paths, &speller, &options, !cli.no_color)?;
    output::print_flagged_words(&flagged, !cli.no_color);

    Ok(())
}

fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Dict { action } => match action {
            DictCommands::List => dict::manager::list_dictionaries()?,
            DictCommands::Download { language } => dict::manager::download_dictionary(&language)?,
            DictCommands::Update => dict::manager::update_dictionaries()?,
            DictCommands::Info { language } => dict::manager::show_info(&language)?,
        },
    }
    Ok(())
}
