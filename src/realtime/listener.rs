use std::time::Duration;

use sqlx::postgres::PgListener;
use sqlx::PgPool;
use tokio::task::JoinHandle;

use super::{ChangeEvent, ChangeHub, ALL_TABLES, CHANNEL};

const RECONNECT_DELAY: Duration = Duration::from_secs(2);

/// Forwards Postgres notifications on [`CHANNEL`] into the hub until the runtime stops.
///
/// After a connection failure, subscribers get a resync event because
/// notifications sent while disconnected are lost.
pub fn spawn_listener(pool: PgPool, hub: ChangeHub) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            if let Err(e) = listen(&pool, &hub).await {
                tracing::warn!(
                    "Change listener failed: {}, reconnecting in {:?}",
                    e,
                    RECONNECT_DELAY
                );
                hub.publish(ChangeEvent::resync(ALL_TABLES));
                tokio::time::sleep(RECONNECT_DELAY).await;
            }
        }
    })
}

async fn listen(pool: &PgPool, hub: &ChangeHub) -> Result<(), sqlx::Error> {
    let mut listener = PgListener::connect_with(pool).await?;
    listener.listen(CHANNEL).await?;
    tracing::info!("Listening for change notifications on '{}'", CHANNEL);

    loop {
        let notification = listener.recv().await?;
        match ChangeEvent::parse(notification.payload()) {
            Ok(event) => {
                tracing::debug!(
                    "Change: table={}, action={:?}, id={:?}",
                    event.table,
                    event.action,
                    event.record_id
                );
                hub.publish(event);
            }
            Err(e) => {
                tracing::warn!(
                    "Ignoring malformed change payload '{}': {}",
                    notification.payload(),
                    e
                );
            }
        }
    }
}
