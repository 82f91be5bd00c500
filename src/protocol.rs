use crate::message::*;

use serde::{Deserialize, Serialize};

/// Longest line either side accepts before the codec gives up on it
pub const MAX_LINE_LENGTH: usize = 8 * 1024;

/// Command from client to server
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum ClientCommand {
    SetName(String),
    SendMessage(Message),
    ListUsers,
}

/// Command from server to client
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum ServerCommand {
    /// First line on every connection: the name the server picked
    Welcome(User),
    /// Sent instead of `Welcome` when no name could be allocated
    Rejected(String),
    NewMessage(User, Message),
    ServerMessage(Message),
    UserList(Vec<User>),
}

/// Peer (inside the server) needs to receive messages from...
/// - client (client command)
/// - server (notification)
/// - other peers (message broadcast)
///
/// Use this enum to identify among them.
#[derive(Clone, Debug)]
pub enum ServerOperation {
    FromClient(ClientCommand),
    FromPeer(User, Message),
    FromServer(Message),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_shape() {
        let welcome = serde_json::to_string(&ServerCommand::Welcome("CrimsonFox".into())).unwrap();
        assert_eq!(welcome, r#"{"Welcome":"CrimsonFox"}"#);

        let list = serde_json::to_string(&ClientCommand::ListUsers).unwrap();
        assert_eq!(list, r#""ListUsers""#);

        let send: ClientCommand = serde_json::from_str(r#"{"SendMessage":{"Text":"hi"}}"#).unwrap();
        assert_eq!(send, ClientCommand::SendMessage(Message::text("hi")));
    }
}
