use std::collections::HashSet;

use tokio::sync::broadcast::error::RecvError;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tonic::{Request, Response, Status};

use crate::proto::realtime::realtime_service_server::RealtimeService;
use crate::proto::realtime::{ChangeEvent as ChangeEventProto, SubscribeRequest};
use crate::realtime::{ChangeEvent, ChangeHub, ALL_TABLES};

const STREAM_BUFFER: usize = 64;

pub struct RealtimeServiceImpl {
    hub: ChangeHub,
}

impl RealtimeServiceImpl {
    pub fn new(hub: ChangeHub) -> Self {
        Self { hub }
    }
}

fn table_filter(tables: &[String]) -> HashSet<String> {
    tables
        .iter()
        .map(|t| t.trim().to_ascii_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

#[tonic::async_trait]
impl RealtimeService for RealtimeServiceImpl {
    type SubscribeStream = ReceiverStream<Result<ChangeEventProto, Status>>;

    async fn subscribe(
        &self,
        request: Request<SubscribeRequest>,
    ) -> Result<Response<Self::SubscribeStream>, Status> {
        let filter = table_filter(&request.into_inner().tables);
        let mut changes = self.hub.subscribe();
        let (tx, rx) = mpsc::channel(STREAM_BUFFER);

        tracing::debug!(
            "Realtime subscriber attached: tables={:?}, subscribers={}",
            filter,
            self.hub.subscriber_count()
        );

        tokio::spawn(async move {
            loop {
                let received = tokio::select! {
                    _ = tx.closed() => break,
                    received = changes.recv() => received,
                };
                let event = match received {
                    Ok(event) if event.matches(&filter) => event,
                    Ok(_) => continue,
                    Err(RecvError::Lagged(missed)) => {
                        tracing::warn!("Realtime subscriber lagged, {} events dropped", missed);
                        ChangeEvent::resync(ALL_TABLES)
                    }
                    Err(RecvError::Closed) => break,
                };
                if tx.send(Ok(event.to_proto())).await.is_err() {
                    break;
                }
            }
            tracing::debug!("Realtime subscriber detached");
        });

        Ok(Response::new(ReceiverStream::new(rx)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::realtime::ChangeAction;
    use tokio_stream::StreamExt;

    #[test]
    fn test_table_filter_normalizes() {
        let filter = table_filter(&[" Items ".into(), "".into(), "units".into()]);
        assert_eq!(filter.len(), 2);
        assert!(filter.contains("items"));
        assert!(filter.contains("units"));
    }

    #[tokio::test]
    async fn test_subscribe_filters_tables() {
        let hub = ChangeHub::new(16);
        let service = RealtimeServiceImpl::new(hub.clone());
        let mut stream = service
            .subscribe(Request::new(SubscribeRequest {
                tables: vec!["items".into()],
            }))
            .await
            .unwrap()
            .into_inner();

        hub.publish(ChangeEvent::parse(r#"{"table":"patients","action":"INSERT"}"#).unwrap());
        hub.publish(ChangeEvent::parse(r#"{"table":"items","action":"UPDATE","id":"a"}"#).unwrap());

        let event = stream.next().await.unwrap().unwrap();
        assert_eq!(event.table, "items");
        assert_eq!(event.record_id, "a");
        assert_eq!(event.action, ChangeAction::Update as i32);
    }

    #[tokio::test]
    async fn test_lagging_subscriber_gets_resync() {
        let hub = ChangeHub::new(2);
        let service = RealtimeServiceImpl::new(hub.clone());
        let mut stream = service
            .subscribe(Request::new(SubscribeRequest { tables: vec![] }))
            .await
            .unwrap()
            .into_inner();

        // The forwarding task has not run yet on the test runtime, so its receiver overflows.
        for i in 0..5 {
            hub.publish(
                ChangeEvent::parse(&format!(r#"{{"table":"units","action":"INSERT","id":"{}"}}"#, i))
                    .unwrap(),
            );
        }

        let mut saw_resync = false;
        for _ in 0..3 {
            let event = stream.next().await.unwrap().unwrap();
            if event.action == ChangeAction::Resync as i32 {
                assert_eq!(event.table, ALL_TABLES);
                saw_resync = true;
                break;
            }
        }
        assert!(saw_resync);
    }

    #[tokio::test]
    async fn test_dropped_stream_releases_subscription() {
        let hub = ChangeHub::new(16);
        let service = RealtimeServiceImpl::new(hub.clone());
        let stream = service
            .subscribe(Request::new(SubscribeRequest {
                tables: vec!["doctors".into()],
            }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(hub.subscriber_count(), 1);

        // No doctors event ever arrives, so only the closed stream can end the task.
        drop(stream);
        tokio::time::timeout(std::time::Duration::from_secs(1), async {
            while hub.subscriber_count() > 0 {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("forwarding task should exit once the client disconnects");
    }
}
