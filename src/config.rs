//! Command line configuration.

use anyhow::{Result, bail};
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

use crate::render::{IndexFormat, RenderOptions, SeeMarkup};

/// Index files to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Eclipse help index.xml
    Eclipse,
    /// HTML Help .hhk sitemap
    Htmlhelp,
    /// Both formats
    #[default]
    All,
}

impl OutputFormat {
    pub fn formats(self) -> &'static [IndexFormat] {
        match self {
            OutputFormat::Eclipse => &[IndexFormat::Eclipse],
            OutputFormat::Htmlhelp => &[IndexFormat::HtmlHelp],
            OutputFormat::All => &[IndexFormat::Eclipse, IndexFormat::HtmlHelp],
        }
    }
}

/// Command line configuration for helpidx.
#[derive(Debug, Clone, Parser)]
#[command(name = "helpidx", version, about, long_about = None)]
pub struct Config {
    /// JSON file holding the index term tree
    pub input: PathBuf,

    /// Output root; `.hhk` is appended, index.xml goes next to it
    #[arg(short, long, default_value = "out/index")]
    pub output: PathBuf,

    /// Index format to write
    #[arg(long, value_enum, default_value_t = OutputFormat::All)]
    pub format: OutputFormat,

    /// Extension replacing the one on target locators
    #[arg(long, default_value = ".html")]
    pub target_ext: String,

    /// Emit see/subpath elements instead of name-resolved entries
    #[arg(long)]
    pub index_see: bool,

    /// Verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the input file does not exist or the target
    /// extension lacks its leading dot.
    pub fn validate(&self) -> Result<()> {
        if !self.input.is_file() {
            bail!("Input file does not exist: {}", self.input.display());
        }

        if !self.target_ext.starts_with('.') || self.target_ext.len() < 2 {
            bail!(
                "Target extension must start with a dot: {:?}",
                self.target_ext
            );
        }

        Ok(())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            see_markup: if self.index_see {
                SeeMarkup::Modern
            } else {
                SeeMarkup::Legacy
            },
            target_ext: self.target_ext.clone(),
        }
    }
}
