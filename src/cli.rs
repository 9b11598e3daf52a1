use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Address the HTTP listener binds to
    #[arg(long, env = "PARAMECHO_ADDR", default_value = "0.0.0.0:8080")]
    pub addr: String,

    /// Server name used in log messages
    #[arg(long, env = "PARAMECHO_NAME", default_value = "paramecho")]
    pub name: String,
}
