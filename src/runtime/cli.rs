use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "songbooker",
    version,
    about = "Rebuild the Songbook plugin database from a directory of ABC files"
)]
pub struct Cli {
    /// Music directory to scan for `.abc` files.
    pub scan_dir: Option<PathBuf>,

    /// PluginData directory to write `SongbookData.plugindata` into.
    pub output_dir: Option<PathBuf>,

    /// Log every discovered file and catalog entry.
    #[arg(short, long)]
    pub verbose: bool,

    /// Do not remember the directories used for this run.
    #[arg(long)]
    pub no_remember: bool,
}
