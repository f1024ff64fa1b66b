use std::sync::Arc;

use tokio::sync::Mutex as TokioMutex;
use tracing::debug;

use crate::ports::out_::EventNotifier;
use domain::{ClientEvent, ConnectionId, Lobby, LobbyConfig, LobbySnapshot};

pub struct LobbyService {
    lobby: TokioMutex<Lobby>,
    notifier: Arc<dyn EventNotifier>,
}

impl LobbyService {
    pub fn new(
        config: LobbyConfig,
        notifier: Arc<dyn EventNotifier>,
    ) -> Self {
        Self {
            lobby: TokioMutex::new(Lobby::new(config)),
            notifier,
        }
    }

    /// Applies one client event and delivers the resulting notifications before the next event
    /// is let in, so deliveries to a connection keep the order their causes arrived in.
    pub async fn handle(
        &self,
        connection_id: ConnectionId,
        event: ClientEvent,
    ) {
        let mut lobby = self.lobby.lock().await;
        let notifications = lobby.handle(connection_id, event);
        for notification in notifications {
            debug!(connection_id = %notification.connection_id, event = ?notification.event, "-> Notify");
            self.notifier.notify(notification.connection_id, notification.event).await;
        }
    }

    pub async fn snapshot(&self) -> LobbySnapshot {
        self.lobby.lock().await.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use domain::{ServerEvent, SessionId};

    use super::*;

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<(ConnectionId, ServerEvent)>>,
    }

    #[async_trait]
    impl EventNotifier for Recorder {
        async fn notify(
            &self,
            connection_id: ConnectionId,
            event: ServerEvent,
        ) {
            self.events.lock().unwrap().push((connection_id, event));
        }
    }

    impl Recorder {
        fn take(&self) -> Vec<(ConnectionId, ServerEvent)> {
            std::mem::take(&mut *self.events.lock().unwrap())
        }
    }

    fn service() -> (LobbyService, Arc<Recorder>) {
        let recorder = Arc::new(Recorder::default());
        let service = LobbyService::new(LobbyConfig::default(), recorder.clone());
        (service, recorder)
    }

    #[tokio::test]
    async fn connect_requests_a_name() {
        let (service, recorder) = service();
        let a = ConnectionId::new();
        service.handle(a, ClientEvent::Connected).await;
        assert_eq!(recorder.take(), vec![(a, ServerEvent::RequestName)]);
    }

    #[tokio::test]
    async fn pairing_notifies_both_sides_in_mark_order() {
        let (service, recorder) = service();
        let (a, b) = (ConnectionId::new(), ConnectionId::new());

        service.handle(a, ClientEvent::SetName("Ana".into())).await;
        assert_eq!(
            recorder.take(),
            vec![(a, ServerEvent::Waiting(LobbyConfig::default().waiting_message))]
        );

        service.handle(b, ClientEvent::SetName("Bia".into())).await;
        let events = recorder.take();
        let recipients: Vec<ConnectionId> = events.iter().map(|(id, _)| *id).collect();
        assert_eq!(recipients, vec![a, b]);
        assert!(matches!(
            &events[0].1,
            ServerEvent::GameStart { player: domain::Mark::X, player1, player2, .. } if player1 == "Ana" && player2 == "Bia"
        ));
        assert_eq!(service.snapshot().await.sessions, 1);
    }

    #[tokio::test]
    async fn rejected_move_sends_nothing() {
        let (service, recorder) = service();
        let (a, b) = (ConnectionId::new(), ConnectionId::new());
        service.handle(a, ClientEvent::SetName("Ana".into())).await;
        service.handle(b, ClientEvent::SetName("Bia".into())).await;
        recorder.take();

        let session_id = SessionId::for_pair(a, b);
        service
            .handle(
                b,
                ClientEvent::Move {
                    session_id: session_id.clone(),
                    position: 0,
                },
            )
            .await;
        assert!(recorder.take().is_empty());

        service.handle(a, ClientEvent::Move { session_id, position: 0 }).await;
        assert_eq!(recorder.take().len(), 2);
    }

    #[tokio::test]
    async fn disconnect_tells_the_opponent() {
        let (service, recorder) = service();
        let (a, b) = (ConnectionId::new(), ConnectionId::new());
        service.handle(a, ClientEvent::SetName("Ana".into())).await;
        service.handle(b, ClientEvent::SetName("Bia".into())).await;
        recorder.take();

        service.handle(b, ClientEvent::Disconnected).await;
        assert_eq!(recorder.take(), vec![(a, ServerEvent::OpponentLeft)]);
        let snapshot = service.snapshot().await;
        assert_eq!((snapshot.connected, snapshot.sessions), (1, 0));
    }
}
