use sqlx::PgPool;
use tonic::{Request, Response, Status};

use crate::proto::health::{
    health_check_response::ServingStatus, health_server::Health, HealthCheckRequest,
    HealthCheckResponse,
};

/// gRPC health checks backed by a database round-trip.
pub struct HealthServiceImpl {
    pool: PgPool,
}

impl HealthServiceImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn status(&self) -> ServingStatus {
        match sqlx::query("SELECT 1").execute(&self.pool).await {
            Ok(_) => ServingStatus::Serving,
            Err(e) => {
                tracing::warn!("Health check failed: {}", e);
                ServingStatus::NotServing
            }
        }
    }
}

#[tonic::async_trait]
impl Health for HealthServiceImpl {
    async fn check(
        &self,
        _request: Request<HealthCheckRequest>,
    ) -> Result<Response<HealthCheckResponse>, Status> {
        Ok(Response::new(HealthCheckResponse {
            status: self.status().await.into(),
        }))
    }

    type WatchStream = tokio_stream::wrappers::ReceiverStream<Result<HealthCheckResponse, Status>>;

    async fn watch(
        &self,
        _request: Request<HealthCheckRequest>,
    ) -> Result<Response<Self::WatchStream>, Status> {
        let (tx, rx) = tokio::sync::mpsc::channel(1);
        let status = self.status().await;

        tokio::spawn(async move {
            let _ = tx
                .send(Ok(HealthCheckResponse {
                    status: status.into(),
                }))
                .await;
        });

        Ok(Response::new(tokio_stream::wrappers::ReceiverStream::new(rx)))
    }
}
