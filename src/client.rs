use crate::error::*;

use futures::{
    sink::SinkExt,
    stream::{SplitStream, StreamExt},
};
use log::{info, warn};
use tokio::{net::TcpStream, sync::mpsc};
use tokio_util::codec::{Framed, LinesCodec};

use crate::app::{App, BasicApp};
use crate::message::*;
use crate::protocol::*;

type Transport = Framed<TcpStream, LinesCodec>;
type Rx = SplitStream<Transport>;

/// A line typed by the user
#[derive(Debug, PartialEq)]
pub enum ClientInput {
    Text(String),
    Rename(String),
    Users,
}

impl ClientInput {
    /// `/name <new name>` and `/users` are commands, anything else is chat.
    /// Blank lines are dropped.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        if line == "/users" {
            return Some(ClientInput::Users);
        }
        if let Some(rest) = line.strip_prefix("/name") {
            if rest.is_empty() {
                return None;
            }
            if rest.starts_with(char::is_whitespace) {
                return Some(ClientInput::Rename(rest.trim().to_owned()));
            }
        }
        Some(ClientInput::Text(line.to_owned()))
    }
}

/// The chat client
pub struct Client {
    name: Option<String>,
    server: String,
    port: u16,
}

impl Client {
    pub fn new(name: Option<&str>, server: &str, port: u16) -> Self {
        Self {
            name: name.map(str::to_owned),
            server: server.to_owned(),
            port,
        }
    }

    /// Connect to server, wait for a name, then send/receive messages
    pub async fn run(&self) -> Result<()> {
        let stream = TcpStream::connect((self.server.as_str(), self.port)).await?;
        let codec = LinesCodec::new_with_max_length(MAX_LINE_LENGTH);
        let (mut tx, mut rx) = Framed::new(stream, codec) // split tcp stream data into framed line's
            .split::<String>(); // split the framed stream into two halves

        let name = match Self::recv(&mut rx).await? {
            Some(ServerCommand::Welcome(name)) => name,
            Some(ServerCommand::Rejected(reason)) => {
                return Err(Error::ChatError(format!("rejected by server: {}", reason)))
            }
            _ => return Err(Error::ChatError("server did not assign a name".to_owned())),
        };
        info!("assigned `{}`", name);

        let (msg_tx, msg_rx) = mpsc::unbounded_channel::<ServerCommand>();
        let (input_tx, mut input_rx) = mpsc::unbounded_channel::<ClientInput>();

        // recv task, rx moved
        tokio::spawn(async move {
            while let Some(result) = rx.next().await {
                let raw_str = match result {
                    Ok(raw_str) => raw_str,
                    Err(_) => break,
                };
                match serde_json::from_str::<ServerCommand>(&raw_str) {
                    Ok(command) => {
                        if msg_tx.send(command).is_err() {
                            break;
                        }
                    }
                    Err(_) => warn!("unknown server command: {}", raw_str),
                }
            }
        });

        BasicApp::start(input_tx, msg_rx, &name)?;

        // send task
        macro_rules! send {
            ($command:expr) => {
                tx.send(serde_json::to_string(&$command)?).await?
            };
        }

        if let Some(wanted) = &self.name {
            send!(ClientCommand::SetName(wanted.clone()));
        }
        while let Some(input) = input_rx.recv().await {
            // read inputs from input_rx and send them
            match input {
                ClientInput::Text(text) => send!(ClientCommand::SendMessage(Message::Text(text))),
                ClientInput::Rename(name) => send!(ClientCommand::SetName(name)),
                ClientInput::Users => send!(ClientCommand::ListUsers),
            }
        }

        Ok(())
    }

    async fn recv(rx: &mut Rx) -> Result<Option<ServerCommand>> {
        match rx.next().await {
            Some(raw_str) => Ok(Some(serde_json::from_str(&raw_str?)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_input() {
        assert_eq!(ClientInput::parse("  \n"), None);
        assert_eq!(ClientInput::parse("/users"), Some(ClientInput::Users));
        assert_eq!(
            ClientInput::parse("/name  Ferris "),
            Some(ClientInput::Rename("Ferris".to_owned()))
        );
        assert_eq!(ClientInput::parse("/name "), None);
        assert_eq!(ClientInput::parse("/name"), None);
        assert_eq!(
            ClientInput::parse("/name\tFerris"),
            Some(ClientInput::Rename("Ferris".to_owned()))
        );
        assert_eq!(
            ClientInput::parse("/namesake"),
            Some(ClientInput::Text("/namesake".to_owned()))
        );
        assert_eq!(
            ClientInput::parse(" hi there "),
            Some(ClientInput::Text("hi there".to_owned()))
        );
    }
}
