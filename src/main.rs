#![forbid(unsafe_code)]

//! Modern C++ Tutorial book builder
//!
//! This program assembles the book's Markdown chapters into the sources of its
//! published formats: filtered per-chapter e-book files, one aggregated PDF
//! document per locale, and the per-chapter content tree of the website.
//! Navigation and license lines are dropped along the way.

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use std::path::PathBuf;

// Import modules
mod book;
mod commands;
mod errors;
mod markdown;
mod utils;

use crate::book::Locale;
use crate::commands::{epub::build_epub, pdf::build_pdf, website::build_website};
use crate::errors::AppError;

#[derive(Parser, Debug)]
#[command(name = "bookgen")]
#[command(about = "Build the e-book, PDF and website sources of the book")]
struct Cli {
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the sources of one output format
    Build {
        #[command(subcommand)]
        subcommand: BuildSubcommands,
    },
}

#[derive(Subcommand, Debug)]
enum BuildSubcommands {
    /// Write a filtered `<chapter>.markdown` next to each chapter
    Epub {
        /// Directory holding the chapters
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// Aggregate all chapters into a single document
    Pdf {
        /// Language of the chapters
        #[arg(long, value_enum)]
        locale: Locale,
        /// Directory holding the chapters
        #[arg(long, default_value = ".")]
        dir: PathBuf,
        /// Name of the aggregated document, relative to the chapter directory
        #[arg(long, default_value = commands::pdf::OUTPUT_FILE)]
        output: String,
    },
    /// Build the per-chapter website content tree for every locale
    Website {
        /// Root of the book, containing one directory per locale
        #[arg(long, default_value = "../book")]
        book_dir: PathBuf,
        /// Root of the site content, receiving one directory per locale
        #[arg(long, default_value = "./src/modern-cpp")]
        site_dir: PathBuf,
    },
}

/**
 * Main function
 *
 * This function parses command-line arguments, initializes the logger,
 * and runs the appropriate command based on user input.
 *
 * @return Result indicating success or error
 */
fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    // Initialize logger, RUST_LOG takes precedence over -v/-q
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.verbose.log_level_filter().to_string()),
    )
    .init();

    match &cli.command {
        Commands::Build { subcommand } => match subcommand {
            BuildSubcommands::Epub { dir } => build_epub(dir).map(|_| ()),
            BuildSubcommands::Pdf {
                locale,
                dir,
                output,
            } => build_pdf(dir, *locale, output).map(|_| ()),
            BuildSubcommands::Website { book_dir, site_dir } => {
                build_website(book_dir, site_dir).map(|_| ())
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["bookgen", "build", "website"]).unwrap();
        match cli.command {
            Commands::Build {
                subcommand: BuildSubcommands::Website { book_dir, site_dir },
            } => {
                assert_eq!(book_dir, PathBuf::from("../book"));
                assert_eq!(site_dir, PathBuf::from("./src/modern-cpp"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_pdf_locale() {
        let cli = Cli::try_parse_from(["bookgen", "build", "pdf", "--locale", "zh-cn"]).unwrap();
        match cli.command {
            Commands::Build {
                subcommand:
                    BuildSubcommands::Pdf {
                        locale,
                        dir,
                        output,
                    },
            } => {
                assert_eq!(locale, Locale::ZhCn);
                assert_eq!(dir, PathBuf::from("."));
                assert_eq!(output, "modern-cpp-tutorial.md");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_pdf_requires_locale() {
        assert!(Cli::try_parse_from(["bookgen", "build", "pdf"]).is_err());
        assert!(Cli::try_parse_from(["bookgen", "build", "pdf", "--locale", "fr"]).is_err());
    }
}
