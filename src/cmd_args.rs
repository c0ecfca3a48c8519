use std::ffi::OsString;
use std::path::PathBuf;

pub use clap::Parser;

use crate::calc::natural::BigNatural;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Initial value of the top register. Overrides the configuration file.
    #[clap(short = 't', long, help = "initial top register value")]
    top: Option<BigNatural>,

    /// Initial value of the bottom register. Overrides the configuration file.
    #[clap(short = 'b', long, help = "initial bottom register value")]
    bottom: Option<BigNatural>,

    /// Configuration file. Overrides NNCALC_CONFIG_PATH and the default path.
    #[clap(short = 'c', long, help = "configuration file path")]
    config: Option<PathBuf>,

    #[clap(short = 'g', long, help = "group digits in threes")]
    group_digits: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    top: Option<BigNatural>,
    bottom: Option<BigNatural>,
    config: Option<PathBuf>,
    group_digits: bool,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    /// Like [`Self::parse_from`] but returns the clap error instead of exiting
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::try_parse_from(itr).map(Self::from)
    }

    pub fn top(&self) -> Option<&BigNatural> {
        self.top.as_ref()
    }

    pub fn bottom(&self) -> Option<&BigNatural> {
        self.bottom.as_ref()
    }

    pub fn config(&self) -> Option<&PathBuf> {
        self.config.as_ref()
    }

    pub fn group_digits(&self) -> bool {
        self.group_digits
    }
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            top: args.top,
            bottom: args.bottom,
            config: args.config,
            group_digits: args.group_digits,
        }
    }
}
