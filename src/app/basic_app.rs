use std::io::BufRead;

use tokio::sync::mpsc;

use crate::{client::ClientInput, error::*, protocol::ServerCommand};

type Tx<T> = mpsc::UnboundedSender<T>;
type Rx<T> = mpsc::UnboundedReceiver<T>;

/// A basic app which does not split input and output
pub struct BasicApp {}

impl super::App for BasicApp {
    fn start(input_tx: Tx<ClientInput>, mut msg_rx: Rx<ServerCommand>, name: &str) -> Result<()> {
        println!("Joined as `{}`. Try /name <new name> or /users.", name);

        let _in_task = tokio::task::spawn_blocking(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(_) => break,
                };
                // send input to client
                if let Some(input) = ClientInput::parse(&line) {
                    if input_tx.send(input).is_err() {
                        break;
                    }
                }
            }
        });

        let _out_task = tokio::spawn(async move {
            // recv command from client
            while let Some(command) = msg_rx.recv().await {
                match command {
                    ServerCommand::NewMessage(user, message) => {
                        println!("[{}] {}", user, message);
                    }
                    ServerCommand::ServerMessage(message) => {
                        println!("<SERVER> {}", message);
                    }
                    ServerCommand::UserList(users) => {
                        println!("<SERVER> Online users: {}", users.join(", "));
                    }
                    ServerCommand::Welcome(name) => {
                        println!("<SERVER> You are `{}`", name);
                    }
                    ServerCommand::Rejected(reason) => {
                        println!("<SERVER> Rejected: {}", reason);
                    }
                }
            }
        });

        Ok(())
    }
}
