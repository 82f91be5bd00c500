use crate::error::*;

use futures::{SinkExt, Stream, StreamExt};
use log::{info, warn};
use std::{collections::HashMap, net::SocketAddr};
use std::{
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{mpsc, Mutex};
use tokio_util::codec::{Framed, LinesCodec};

use crate::message::*;
use crate::name::{NameGenerator, RandomPicker, DEFAULT_MAX_SUFFIX, DEFAULT_RETRIES};
use crate::protocol::*;
use crate::registry::NameRegistry;

type SharedState = Arc<Mutex<ServerState>>;
type Transport = Framed<TcpStream, LinesCodec>;

type Tx = mpsc::UnboundedSender<ServerOperation>;
type Rx = mpsc::UnboundedReceiver<ServerOperation>;

struct Peer {
    transport: Transport,
    rx: Rx,
}

impl Peer {
    async fn register(state: SharedState, addr: SocketAddr, transport: Transport) -> Result<Self> {
        let (tx, rx) = mpsc::unbounded_channel();
        state.lock().await.peers.insert(addr, tx);

        Ok(Self { transport, rx })
    }

    async fn send(&mut self, command: &ServerCommand) -> Result<()> {
        send(&mut self.transport, command).await
    }
}

impl Stream for Peer {
    type Item = Result<ServerOperation>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        // First poll the `UnboundedReceiver`.
        if let Poll::Ready(Some(op)) = self.rx.poll_recv(cx) {
            return Poll::Ready(Some(Ok(op)));
        }

        // Secondly poll the `Framed` stream.
        let result: Option<_> = futures::ready!(Pin::new(&mut self.transport).poll_next(cx));
        Poll::Ready(match result {
            Some(Ok(de_str)) => {
                let command = serde_json::from_str::<ClientCommand>(&de_str)?;
                Some(Ok(ServerOperation::FromClient(command)))
            }
            Some(Err(e)) => Some(Err(e.into())),
            _ => None,
        })
    }
}

async fn send(transport: &mut Transport, command: &ServerCommand) -> Result<()> {
    transport.send(serde_json::to_string(command)?).await?;
    Ok(())
}

struct ServerState {
    registry: NameRegistry<SocketAddr>,
    picker: RandomPicker,
    peers: HashMap<SocketAddr, Tx>,
}

impl ServerState {
    fn new(generator: NameGenerator) -> Self {
        Self {
            registry: NameRegistry::new(generator),
            picker: RandomPicker::from_entropy(),
            peers: HashMap::new(),
        }
    }

    /// Allocate and claim a name for `addr` while holding the state lock
    fn assign(&mut self, addr: SocketAddr) -> Result<User> {
        let Self {
            registry, picker, ..
        } = self;
        registry.assign(addr, picker)
    }

    async fn broadcast(&mut self, op: ServerOperation) {
        // broadcast to all peers
        for (&_peer_addr, peer_tx) in self.peers.iter_mut() {
            let _ = peer_tx.send(op.clone());
        }
    }
}

/// Server options, straight from the command line
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub retries: usize,
    pub max_suffix: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 30388,
            retries: DEFAULT_RETRIES,
            max_suffix: DEFAULT_MAX_SUFFIX,
        }
    }
}

pub struct Server {
    listener: TcpListener,
    state: SharedState,
}

impl Server {
    pub async fn new(config: ServerConfig) -> Result<Self> {
        let generator = NameGenerator::default()
            .with_retries(config.retries)
            .with_max_suffix(config.max_suffix);
        Self::with_generator(config, generator).await
    }

    pub async fn with_generator(config: ServerConfig, generator: NameGenerator) -> Result<Self> {
        Ok(Self {
            listener: TcpListener::bind((config.host.as_str(), config.port)).await?,
            state: Arc::new(Mutex::new(ServerState::new(generator))),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    pub async fn run(&self) -> Result<()> {
        info!("listening on {}", self.local_addr()?);
        loop {
            let (stream, addr) = self.listener.accept().await?;
            let arc_state = self.state.clone();
            tokio::spawn(async move {
                if let Err(e) = Self::pre_handle(stream, addr, arc_state).await {
                    warn!("[{}] {}", addr, e);
                }
            });
        }
    }

    async fn pre_handle(stream: TcpStream, addr: SocketAddr, arc_state: SharedState) -> Result<()> {
        let codec = LinesCodec::new_with_max_length(MAX_LINE_LENGTH);
        let mut transport = Framed::new(stream, codec);

        let assigned = arc_state.lock().await.assign(addr);
        let name = match assigned {
            Ok(name) => name,
            Err(e) => {
                warn!("[{}] rejected: {}", addr, e);
                send(&mut transport, &ServerCommand::Rejected(e.to_string())).await?;
                return Err(e);
            }
        };
        info!("[{}] joined as `{}`", addr, name);

        let result = Self::handle(transport, addr, name, &arc_state).await;

        {
            let mut state = arc_state.lock().await;
            state.peers.remove(&addr);
            if let Some(name) = state.registry.release(&addr) {
                info!("[{}] `{}` left", addr, name);
                let leave_msg = Message::Text(format!("{} left", name));
                state
                    .broadcast(ServerOperation::FromServer(leave_msg))
                    .await;
            }
        }

        result
    }

    async fn handle(
        mut transport: Transport,
        addr: SocketAddr,
        mut name: User,
        state: &SharedState,
    ) -> Result<()> {
        send(&mut transport, &ServerCommand::Welcome(name.clone())).await?;
        let mut peer = Peer::register(state.clone(), addr, transport).await?;
        {
            let mut state = state.lock().await;
            let join_msg = Message::Text(format!("{} joined", name));
            state
                .broadcast(ServerOperation::FromServer(join_msg))
                .await;
        }

        while let Some(result) = peer.next().await {
            match result {
                Ok(op) => match op {
                    ServerOperation::FromClient(command) => match command {
                        ClientCommand::SetName(new_name) => {
                            let mut state = state.lock().await;
                            let renamed = state.registry.rename(&addr, &new_name);
                            match renamed {
                                Ok(old_name) if old_name != new_name.trim() => {
                                    name = new_name.trim().to_owned();
                                    info!("[{}] `{}` is now `{}`", addr, old_name, name);
                                    let msg = Message::Text(format!(
                                        "{} is now known as {}",
                                        old_name, name
                                    ));
                                    state.broadcast(ServerOperation::FromServer(msg)).await;
                                }
                                Ok(_) => {}
                                Err(e) => {
                                    drop(state);
                                    peer.send(&ServerCommand::ServerMessage(Message::Text(
                                        e.to_string(),
                                    )))
                                    .await?;
                                }
                            }
                        }
                        ClientCommand::SendMessage(message) => {
                            let mut state = state.lock().await;
                            state
                                .broadcast(ServerOperation::FromPeer(
                                    name.clone(),
                                    message.clone(),
                                ))
                                .await;
                            info!("[{}({})] {:?}", addr, name, message);
                        }
                        ClientCommand::ListUsers => {
                            let users = state.lock().await.registry.names();
                            peer.send(&ServerCommand::UserList(users)).await?;
                        }
                    },
                    ServerOperation::FromPeer(user, message) => {
                        peer.send(&ServerCommand::NewMessage(user, message)).await?;
                    }
                    ServerOperation::FromServer(message) => {
                        peer.send(&ServerCommand::ServerMessage(message)).await?;
                    }
                },
                Err(e) => {
                    warn!("[{}] {}", addr, e);
                    peer.send(&ServerCommand::ServerMessage(Message::Text(
                        "What's that?".to_owned(),
                    )))
                    .await?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::{Category, WordPool};

    type Client = Framed<TcpStream, LinesCodec>;

    async fn start(generator: NameGenerator) -> SocketAddr {
        let config = ServerConfig {
            port: 0,
            ..ServerConfig::default()
        };
        let server = Server::with_generator(config, generator).await.unwrap();
        let addr = server.local_addr().unwrap();
        tokio::spawn(async move { server.run().await });
        addr
    }

    async fn connect(addr: SocketAddr) -> Client {
        let stream = TcpStream::connect(addr).await.unwrap();
        Framed::new(stream, LinesCodec::new_with_max_length(MAX_LINE_LENGTH))
    }

    async fn recv(client: &mut Client) -> ServerCommand {
        let line = client.next().await.unwrap().unwrap();
        serde_json::from_str(&line).unwrap()
    }

    async fn recv_until<F: Fn(&ServerCommand) -> bool>(client: &mut Client, f: F) -> ServerCommand {
        loop {
            let command = recv(client).await;
            if f(&command) {
                return command;
            }
        }
    }

    fn one_name() -> NameGenerator {
        NameGenerator::new(vec![
            WordPool::new(Category::Adjective, vec!["Red"]).unwrap(),
            WordPool::new(Category::Noun, vec!["Fox"]).unwrap(),
        ])
        .unwrap()
        .with_max_suffix(2)
    }

    fn welcome(command: ServerCommand) -> User {
        match command {
            ServerCommand::Welcome(name) => name,
            other => panic!("expected a welcome, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn connections_get_distinct_names() {
        let addr = start(one_name()).await;

        let mut first = connect(addr).await;
        assert_eq!(welcome(recv(&mut first).await), "RedFox");
        let mut second = connect(addr).await;
        assert_eq!(welcome(recv(&mut second).await), "RedFox2");

        let mut third = connect(addr).await;
        assert!(matches!(recv(&mut third).await, ServerCommand::Rejected(_)));
        assert!(third.next().await.is_none());
    }

    #[tokio::test]
    async fn name_is_released_on_disconnect() {
        let addr = start(one_name()).await;

        let mut first = connect(addr).await;
        assert_eq!(welcome(recv(&mut first).await), "RedFox");
        let mut second = connect(addr).await;
        welcome(recv(&mut second).await);

        drop(first);
        recv_until(&mut second, |c| {
            *c == ServerCommand::ServerMessage(Message::text("RedFox left"))
        })
        .await;

        let mut third = connect(addr).await;
        assert_eq!(welcome(recv(&mut third).await), "RedFox");
    }

    #[tokio::test]
    async fn chat_rename_and_user_list() {
        let addr = start(NameGenerator::default()).await;

        let mut alice = connect(addr).await;
        let alice_name = welcome(recv(&mut alice).await);
        let mut bob = connect(addr).await;
        let bob_name = welcome(recv(&mut bob).await);
        assert_ne!(alice_name, bob_name);

        let set_name = serde_json::to_string(&ClientCommand::SetName("Alice".into())).unwrap();
        alice.send(set_name).await.unwrap();
        let renamed = format!("{} is now known as Alice", alice_name);
        recv_until(&mut bob, |c| {
            *c == ServerCommand::ServerMessage(Message::text(renamed.as_str()))
        })
        .await;

        let taken = serde_json::to_string(&ClientCommand::SetName("Alice".into())).unwrap();
        bob.send(taken).await.unwrap();
        recv_until(&mut bob, |c| {
            *c == ServerCommand::ServerMessage(Message::text("name `Alice` is already taken"))
        })
        .await;

        let hello = ClientCommand::SendMessage(Message::text("hello"));
        bob.send(serde_json::to_string(&hello).unwrap()).await.unwrap();
        let got = recv_until(&mut alice, |c| matches!(c, ServerCommand::NewMessage(..))).await;
        assert_eq!(
            got,
            ServerCommand::NewMessage(bob_name.clone(), Message::text("hello"))
        );

        let list = serde_json::to_string(&ClientCommand::ListUsers).unwrap();
        alice.send(list).await.unwrap();
        let got = recv_until(&mut alice, |c| matches!(c, ServerCommand::UserList(_))).await;
        let mut expected = vec!["Alice".to_owned(), bob_name];
        expected.sort();
        assert_eq!(got, ServerCommand::UserList(expected));
    }

    #[tokio::test]
    async fn overlong_line_is_refused() {
        let addr = start(NameGenerator::default()).await;
        // no length limit on this side, so the oversized line does go out
        let stream = TcpStream::connect(addr).await.unwrap();
        let mut client = Framed::new(stream, LinesCodec::new());
        welcome(recv(&mut client).await);

        client.send("x".repeat(MAX_LINE_LENGTH + 1)).await.unwrap();
        // either a complaint or a closed connection, never an echo of the line
        while let Some(Ok(line)) = client.next().await {
            let command: ServerCommand = serde_json::from_str(&line).unwrap();
            assert!(!matches!(command, ServerCommand::NewMessage(..)));
            if command == ServerCommand::ServerMessage(Message::text("What's that?")) {
                break;
            }
        }

        // the server itself keeps serving
        let mut other = connect(addr).await;
        welcome(recv(&mut other).await);
    }

    #[tokio::test]
    async fn garbage_gets_a_reply() {
        let addr = start(NameGenerator::default()).await;
        let mut client = connect(addr).await;
        welcome(recv(&mut client).await);

        client.send("not json".to_owned()).await.unwrap();
        recv_until(&mut client, |c| {
            *c == ServerCommand::ServerMessage(Message::text("What's that?"))
        })
        .await;
    }
}
