use std::collections::HashMap;

use anyhow::Context;
use aws_sdk_s3::Client;

use crate::FetchedObject;

/// Fetches the object at `key` and collects its body and metadata.
pub async fn get(client: &Client, bucket: &str, key: &str) -> anyhow::Result<FetchedObject> {
    let resp = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .context(format!("could not get object {key} from bucket {bucket}"))?;

    let content_type = resp.content_type().map(|s| s.to_string());
    let metadata: HashMap<String, String> = resp
        .metadata()
        .map(|m| m.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
        .unwrap_or_default();

    let body = resp
        .body
        .collect()
        .await
        .context("could not collect object body")?
        .into_bytes();

    Ok(FetchedObject {
        body,
        content_type,
        metadata,
    })
}
