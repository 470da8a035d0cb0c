use std::net::SocketAddr;
use std::sync::Arc;

use pharmacy_api::cache::LookupCache;
use pharmacy_api::config::Config;
use pharmacy_api::db::users::ensure_bootstrap_admin;
use pharmacy_api::db::{create_pool, run_migrations};
use pharmacy_api::middleware::AuthLayer;
use pharmacy_api::proto::auth::auth_service_server::AuthServiceServer;
use pharmacy_api::proto::dashboard::dashboard_service_server::DashboardServiceServer;
use pharmacy_api::proto::directory::doctors_service_server::DoctorsServiceServer;
use pharmacy_api::proto::directory::patients_service_server::PatientsServiceServer;
use pharmacy_api::proto::directory::suppliers_service_server::SuppliersServiceServer;
use pharmacy_api::proto::health::health_server::HealthServer;
use pharmacy_api::proto::items::items_service_server::ItemsServiceServer;
use pharmacy_api::proto::master_data::master_data_service_server::MasterDataServiceServer;
use pharmacy_api::proto::purchases::purchases_service_server::PurchasesServiceServer;
use pharmacy_api::proto::realtime::realtime_service_server::RealtimeServiceServer;
use pharmacy_api::realtime::{spawn_listener, ChangeHub};
use pharmacy_api::services::{
    AuthServiceImpl, DashboardServiceImpl, DoctorsServiceImpl, HealthServiceImpl,
    ItemsServiceImpl, MasterDataServiceImpl, PatientsServiceImpl, PurchasesServiceImpl,
    RealtimeServiceImpl, SuppliersServiceImpl,
};
use pharmacy_api::storage::{S3Backend, StorageBackend};

use tonic::transport::Server;
use tonic_reflection::server::Builder as ReflectionBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Include file descriptor for gRPC reflection
pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("pharmacy_descriptor");

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pharmacy_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting pharmacy-api gRPC server...");
    tracing::info!("Connecting to database...");

    let pool = create_pool(&config.database_url, config.db_max_connections).await?;
    run_migrations(&pool).await?;
    tracing::info!("Database connection established, migrations applied");

    if let Some(admin) = &config.bootstrap_admin {
        ensure_bootstrap_admin(&pool, admin).await?;
    }

    // Change feed: one LISTEN connection fans out to every subscriber and the lookup cache.
    let hub = ChangeHub::default();
    spawn_listener(pool.clone(), hub.clone());
    let lookup_cache = LookupCache::new();
    lookup_cache.spawn_invalidator(&hub);

    let storage: Option<Arc<dyn StorageBackend>> = match &config.storage {
        Some(storage_config) => match S3Backend::new(storage_config) {
            Ok(backend) => {
                tracing::info!("Image storage enabled: bucket={}", storage_config.bucket);
                Some(Arc::new(backend))
            }
            Err(e) => {
                tracing::error!("Failed to create storage backend: {}", e);
                None
            }
        },
        None => {
            tracing::info!("Image storage disabled, item image uploads will be rejected");
            None
        }
    };

    // Create services
    let auth_service =
        AuthServiceImpl::new(pool.clone(), config.jwt_secret.clone(), config.jwt_ttl_hours);
    let master_data_service = MasterDataServiceImpl::new(pool.clone(), lookup_cache);
    let items_service = ItemsServiceImpl::new(pool.clone(), storage);
    let patients_service = PatientsServiceImpl::new(pool.clone());
    let doctors_service = DoctorsServiceImpl::new(pool.clone());
    let suppliers_service = SuppliersServiceImpl::new(pool.clone());
    let purchases_service = PurchasesServiceImpl::new(pool.clone());
    let dashboard_service = DashboardServiceImpl::new(pool.clone());
    let realtime_service = RealtimeServiceImpl::new(hub);
    let health_service = HealthServiceImpl::new(pool);

    // CORS layer for gRPC-Web
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods(Any)
        .expose_headers(Any);

    let reflection_service = ReflectionBuilder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
        .build_v1()?;

    let addr: SocketAddr = config.server_addr().parse()?;
    tracing::info!("Listening on {}", addr);

    Server::builder()
        .accept_http1(true) // Required for gRPC-Web
        .layer(TraceLayer::new_for_grpc())
        .layer(cors)
        .layer(tonic_web::GrpcWebLayer::new())
        .layer(AuthLayer::new(config.jwt_secret.clone()))
        .add_service(reflection_service)
        .add_service(HealthServer::new(health_service))
        .add_service(AuthServiceServer::new(auth_service))
        .add_service(MasterDataServiceServer::new(master_data_service))
        .add_service(ItemsServiceServer::new(items_service))
        .add_service(PatientsServiceServer::new(patients_service))
        .add_service(DoctorsServiceServer::new(doctors_service))
        .add_service(SuppliersServiceServer::new(suppliers_service))
        .add_service(PurchasesServiceServer::new(purchases_service))
        .add_service(DashboardServiceServer::new(dashboard_service))
        .add_service(RealtimeServiceServer::new(realtime_service))
        .serve(addr)
        .await?;

    Ok(())
}
