use {
    blob_explorer::{expand_tilde, ServerConf, Store, CONF_PATH},
    clap::{builder::ValueParser, Parser},
    std::{net::IpAddr, path::PathBuf, sync::Arc},
};

#[derive(Parser, Debug)]
#[command(version, about = "Blob Explorer HTTP service")]
struct Cli {
    #[arg(
        long = "conf-path",
        help = "Path to the TOML configuration file",
        default_value = CONF_PATH,
        value_parser = ValueParser::from(expand_tilde),
        value_name = "PATH"
    )]
    conf_path: PathBuf,
    #[arg(long = "bind", help = "Address to listen on", value_name = "ADDR")]
    bind_address: Option<IpAddr>,
    #[arg(long = "port", help = "Port to listen on", value_name = "PORT")]
    port: Option<u16>,
    #[arg(
        long = "log-filter",
        help = "Default log filter, RUST_LOG takes precedence",
        value_name = "FILTER"
    )]
    log_filter: Option<String>,
}

impl Cli {
    /// Flags given on the command line win over the file.
    fn apply(self, mut conf: ServerConf) -> ServerConf {
        conf.bind_address = self.bind_address.unwrap_or(conf.bind_address);
        conf.port = self.port.unwrap_or(conf.port);
        conf.log_filter = self.log_filter.unwrap_or(conf.log_filter);

        conf
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let conf = match ServerConf::load_from_path(&cli.conf_path).await {
        Ok(conf) => cli.apply(conf),
        Err(e) => {
            eprintln!(
                "Failed to load configuration from '{}': {e:#}",
                cli.conf_path.display()
            );

            std::process::exit(1);
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(conf.log_filter.as_str()),
    )
    .init();

    log::debug!("Starting with {conf:?}");

    if let Err(e) = blob_explorer::serve(&conf, Arc::new(Store::seeded())).await {
        log::error!("{e:#}");

        std::process::exit(1);
    }
}
