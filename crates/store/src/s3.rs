//! S3-compatible [`ObjectStore`] backend.
//!
//! Works against AWS S3 and S3-compatible stores such as Cloudflare R2
//! or MinIO (set an explicit endpoint URL for those). Credentials and
//! region come from the standard AWS environment/profile chain.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use bytes::Bytes;
use chrono::{DateTime, Utc};

use crate::error::StoreError;
use crate::object::{ListPage, ListRequest, ObjectMeta, ObjectStore, PutOptions, StoredObject};

pub struct S3Store {
    client: Client,
    bucket: String,
}

impl S3Store {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Build a client from the ambient AWS configuration.
    ///
    /// `endpoint_url` overrides the endpoint for S3-compatible stores
    /// (R2, MinIO); path-style addressing is forced so bucket names
    /// need not be DNS-resolvable subdomains.
    pub async fn connect(bucket: impl Into<String>, endpoint_url: Option<&str>) -> Self {
        let base = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let mut builder = aws_sdk_s3::config::Builder::from(&base).force_path_style(true);
        if let Some(url) = endpoint_url {
            builder = builder.endpoint_url(url);
        }
        Self::new(Client::from_conf(builder.build()), bucket)
    }
}

/// Convert an SDK timestamp to chrono; epoch on out-of-range values.
fn to_chrono(dt: &aws_smithy_types::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp(dt.secs(), dt.subsec_nanos()).unwrap_or_default()
}

fn backend_error(operation: &str, key: &str, err: impl std::fmt::Display) -> StoreError {
    StoreError::Backend(format!("{operation} {key}: {err}"))
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn get(&self, key: &str) -> Result<Option<StoredObject>, StoreError> {
        let output = match self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(output) => output,
            Err(err) => {
                if err
                    .as_service_error()
                    .map_or(false, |e| e.is_no_such_key())
                {
                    return Ok(None);
                }
                return Err(backend_error("get", key, err));
            }
        };

        let content_type = output.content_type().map(str::to_string);
        let cache_control = output.cache_control().map(str::to_string);
        let custom = output.metadata().cloned().unwrap_or_default();
        let last_modified = output
            .last_modified()
            .map(to_chrono)
            .unwrap_or_else(Utc::now);

        let body = output
            .body
            .collect()
            .await
            .map_err(|err| backend_error("get body", key, err))?
            .into_bytes();

        Ok(Some(StoredObject {
            meta: ObjectMeta {
                key: key.to_string(),
                size: body.len() as u64,
                content_type,
                cache_control,
                custom,
                last_modified,
            },
            body,
        }))
    }

    async fn put(
        &self,
        key: &str,
        body: Bytes,
        options: PutOptions,
    ) -> Result<ObjectMeta, StoreError> {
        let size = body.len() as u64;
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .set_content_type(options.content_type.clone())
            .set_cache_control(options.cache_control.clone())
            .set_metadata(if options.custom.is_empty() {
                None
            } else {
                Some(options.custom.clone())
            })
            .send()
            .await
            .map_err(|err| backend_error("put", key, err))?;

        Ok(ObjectMeta {
            key: key.to_string(),
            size,
            content_type: options.content_type,
            cache_control: options.cache_control,
            custom: options.custom,
            last_modified: Utc::now(),
        })
    }

    async fn delete(&self, keys: &[String]) -> Result<(), StoreError> {
        // Deletes are issued one by one; the batch DeleteObjects API
        // saves round trips but needs extra error unpacking per key,
        // and our batches are at most the retention bound.
        for key in keys {
            self.client
                .delete_object()
                .bucket(&self.bucket)
                .key(key)
                .send()
                .await
                .map_err(|err| backend_error("delete", key, err))?;
        }
        Ok(())
    }

    async fn list(&self, request: &ListRequest) -> Result<ListPage, StoreError> {
        let output = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .prefix(&request.prefix)
            .set_delimiter(request.delimiter.clone())
            .set_continuation_token(request.cursor.clone())
            .send()
            .await
            .map_err(|err| backend_error("list", &request.prefix, err))?;

        let objects = output
            .contents()
            .iter()
            .filter_map(|obj| {
                let key = obj.key()?.to_string();
                Some(ObjectMeta {
                    key,
                    size: obj.size().unwrap_or(0).max(0) as u64,
                    content_type: None,
                    cache_control: None,
                    custom: Default::default(),
                    last_modified: obj.last_modified().map(to_chrono).unwrap_or_else(Utc::now),
                })
            })
            .collect();

        let common_prefixes = output
            .common_prefixes()
            .iter()
            .filter_map(|p| p.prefix().map(str::to_string))
            .collect();

        let cursor = if output.is_truncated().unwrap_or(false) {
            output.next_continuation_token().map(str::to_string)
        } else {
            None
        };

        Ok(ListPage {
            objects,
            common_prefixes,
            cursor,
        })
    }

    async fn head(&self, key: &str) -> Result<Option<ObjectMeta>, StoreError> {
        let output = match self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(output) => output,
            Err(err) => {
                if err.as_service_error().map_or(false, |e| e.is_not_found()) {
                    return Ok(None);
                }
                return Err(backend_error("head", key, err));
            }
        };

        Ok(Some(ObjectMeta {
            key: key.to_string(),
            size: output.content_length().unwrap_or(0).max(0) as u64,
            content_type: output.content_type().map(str::to_string),
            cache_control: output.cache_control().map(str::to_string),
            custom: output.metadata().cloned().unwrap_or_default(),
            last_modified: output
                .last_modified()
                .map(to_chrono)
                .unwrap_or_else(Utc::now),
        }))
    }
}
