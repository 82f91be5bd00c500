#![allow(dead_code)]

#[macro_use]
extern crate serde;

mod app;
mod client;
mod error;
mod message;
mod name;
mod protocol;
mod registry;
mod server;
mod words;

use log::error;
use structopt::StructOpt;

use crate::client::Client;
use crate::error::Result;
use crate::server::{Server, ServerConfig};

#[derive(Debug, StructOpt)]
#[structopt(name = "nickname", about = "A chat server that names its guests.")]
pub enum Opt {
    Client {
        #[structopt(short, long, default_value = "127.0.0.1")]
        server: String,
        #[structopt(short, long, default_value = "30388")]
        port: u16,
        /// Ask for this name instead of keeping the generated one
        #[structopt(short, long)]
        name: Option<String>,
    },
    Server {
        #[structopt(long, default_value = "127.0.0.1")]
        host: String,
        #[structopt(short, long, default_value = "30388")]
        port: u16,
        /// Random draws before sweeping every adjective/noun pair
        #[structopt(short, long, default_value = "16")]
        retries: usize,
        /// Largest numeric suffix once all pairs are taken
        #[structopt(short = "m", long, default_value = "9999")]
        max_suffix: u32,
    },
}

async fn run(opt: Opt) -> Result<()> {
    match opt {
        Opt::Client { server, port, name } => {
            Client::new(name.as_deref(), &server, port).run().await
        }
        Opt::Server {
            host,
            port,
            retries,
            max_suffix,
        } => {
            let config = ServerConfig {
                host,
                port,
                retries,
                max_suffix,
            };
            Server::new(config).await?.run().await
        }
    }
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Opt::from_args()).await {
        error!("{}", e);
        std::process::exit(1);
    }
}
