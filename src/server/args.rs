use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
pub struct ServerArgs {
    /// Port to serve on.
    #[clap(long, default_value_t = 3000)]
    pub port: u16,
    /// Address to bind.
    #[clap(long, default_value = "0.0.0.0")]
    pub bind: String,
    /// Path of the JSON file holding all cities' comments.
    #[clap(long, default_value = "comments.json")]
    pub store_file: PathBuf,
    /// Directory with the static diary pages.
    #[clap(long, default_value = ".")]
    pub static_dir: PathBuf,
}

pub fn parse_args() -> ServerArgs {
    ServerArgs::parse()
}
