use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Report character, word, and sentence counts for a piece of text")]
    Analyze {
        #[arg(help = "Text to analyze (reads stdin when neither TEXT nor --file is given)")]
        text: Option<String>,

        #[arg(long, value_name = "PATH", help = "Read the input from a file")]
        file: Option<PathBuf>,
    },

    #[command(about = "Cut ticket text down to a fixed-length summary")]
    Summarize {
        #[arg(help = "Text to summarize (reads stdin when neither TEXT nor --file is given)")]
        text: Option<String>,

        #[arg(long, value_name = "PATH", help = "Read the input from a file")]
        file: Option<PathBuf>,

        #[arg(
            long,
            value_name = "N",
            help = "Character budget for the summary, ellipsis included",
            value_parser = clap::value_parser!(u64).range(4..)
        )]
        max_chars: Option<u64>,
    },

    #[command(about = "Manage textgauge configuration")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration and where it comes from")]
    Show,

    #[command(about = "Write a default configuration file")]
    Init {
        #[arg(long, help = "Overwrite an existing configuration file")]
        force: bool,
    },
}
