// Generated by tonic-build from proto/ (see build.rs).

pub mod common {
    include!("pharmacy.common.rs");
}

pub mod auth {
    include!("pharmacy.auth.rs");
}

pub mod master_data {
    include!("pharmacy.master_data.rs");
}

pub mod items {
    include!("pharmacy.items.rs");
}

pub mod directory {
    include!("pharmacy.directory.rs");
}

pub mod purchases {
    include!("pharmacy.purchases.rs");
}

pub mod dashboard {
    include!("pharmacy.dashboard.rs");
}

pub mod realtime {
    include!("pharmacy.realtime.rs");
}

pub mod health {
    include!("grpc.health.v1.rs");
}
