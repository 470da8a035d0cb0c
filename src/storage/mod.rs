// Object storage for item images.

pub mod s3;

pub use s3::S3Backend;

use crate::error::{AppError, AppResult};

/// Largest accepted image upload.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Storage backend abstraction (S3, R2, MinIO share one implementation).
#[tonic::async_trait]
pub trait StorageBackend: Send + Sync {
    /// Uploads an object and returns its storage path (`s3://bucket/key`).
    async fn upload(&self, key: &str, data: &[u8], content_type: &str) -> AppResult<String>;

    async fn delete(&self, key: &str) -> AppResult<()>;

    /// URL a browser can load the object from.
    fn public_url(&self, key: &str) -> String;
}

/// File extension for an accepted image content type.
pub fn image_extension(content_type: &str) -> AppResult<&'static str> {
    match content_type.trim().to_ascii_lowercase().as_str() {
        "image/jpeg" | "image/jpg" => Ok("jpg"),
        "image/png" => Ok("png"),
        "image/webp" => Ok("webp"),
        "image/gif" => Ok("gif"),
        other => Err(AppError::InvalidInput(format!(
            "unsupported image content type '{}'",
            other
        ))),
    }
}

/// Object key for a new image of `item_id`.
pub fn item_image_key(item_id: &str, content_type: &str) -> AppResult<String> {
    let ext = image_extension(content_type)?;
    Ok(format!("items/{}/{}.{}", item_id, uuid::Uuid::new_v4(), ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_extension() {
        assert_eq!(image_extension("image/PNG").unwrap(), "png");
        assert_eq!(image_extension("image/jpeg").unwrap(), "jpg");
        assert!(matches!(
            image_extension("application/pdf"),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_item_image_key_layout() {
        let key = item_image_key("abc", "image/webp").unwrap();
        assert!(key.starts_with("items/abc/"));
        assert!(key.ends_with(".webp"));
    }
}
