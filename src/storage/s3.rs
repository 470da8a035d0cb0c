use s3::bucket::Bucket;
use s3::creds::Credentials;
use s3::Region;

use crate::config::StorageConfig;
use crate::error::{AppError, AppResult};

use super::StorageBackend;

pub struct S3Backend {
    bucket: Box<Bucket>,
    bucket_name: String,
    public_base: String,
}

impl S3Backend {
    pub fn new(config: &StorageConfig) -> AppResult<Self> {
        let region = match &config.endpoint {
            Some(endpoint) => Region::Custom {
                region: config.region.clone(),
                endpoint: endpoint.clone(),
            },
            None => config
                .region
                .parse()
                .map_err(|e| AppError::Storage(format!("Invalid region: {}", e)))?,
        };

        let credentials = Credentials::new(
            Some(&config.access_key),
            Some(&config.secret_key),
            None, // security token
            None, // session token
            None, // profile
        )
        .map_err(|e| AppError::Storage(format!("S3 credentials error: {}", e)))?;

        let mut bucket = Bucket::new(&config.bucket, region, credentials)
            .map_err(|e| AppError::Storage(format!("S3 bucket error: {}", e)))?;
        if config.endpoint.is_some() {
            bucket = bucket.with_path_style();
        }

        Ok(Self {
            bucket,
            bucket_name: config.bucket.clone(),
            public_base: public_base_url(config),
        })
    }
}

/// Base URL that object keys are appended to when building public links.
pub fn public_base_url(config: &StorageConfig) -> String {
    if let Some(url) = &config.public_url {
        return url.trim_end_matches('/').to_string();
    }
    match &config.endpoint {
        Some(endpoint) => format!("{}/{}", endpoint.trim_end_matches('/'), config.bucket),
        None => format!(
            "https://{}.s3.{}.amazonaws.com",
            config.bucket, config.region
        ),
    }
}

#[tonic::async_trait]
impl StorageBackend for S3Backend {
    async fn upload(&self, key: &str, data: &[u8], content_type: &str) -> AppResult<String> {
        self.bucket
            .put_object_with_content_type(key, data, content_type)
            .await
            .map_err(|e| AppError::Storage(format!("S3 upload failed: {}", e)))?;

        tracing::info!(
            "S3 upload: bucket={}, key={}, size={}",
            self.bucket_name,
            key,
            data.len()
        );
        Ok(format!("s3://{}/{}", self.bucket_name, key))
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.bucket
            .delete_object(key)
            .await
            .map_err(|e| AppError::Storage(format!("S3 delete failed: {}", e)))?;

        tracing::info!("S3 delete: bucket={}, key={}", self.bucket_name, key);
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> StorageConfig {
        StorageConfig {
            bucket: "pharmacy".into(),
            endpoint: None,
            region: "ap-southeast-1".into(),
            access_key: String::new(),
            secret_key: String::new(),
            public_url: None,
        }
    }

    #[test]
    fn test_public_base_url_variants() {
        let mut c = config();
        assert_eq!(
            public_base_url(&c),
            "https://pharmacy.s3.ap-southeast-1.amazonaws.com"
        );

        c.endpoint = Some("http://localhost:9000/".into());
        assert_eq!(public_base_url(&c), "http://localhost:9000/pharmacy");

        c.public_url = Some("https://cdn.example.com/".into());
        assert_eq!(public_base_url(&c), "https://cdn.example.com");
    }
}
