mod config;
mod error;
mod library;
mod plugindata;
mod runtime;
mod songbook;

fn main() -> anyhow::Result<()> {
    runtime::run()
}
