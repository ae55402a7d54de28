use std::collections::HashMap;
use std::time::Duration;

use anyhow::Context;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client;

/// Generates a presigned URL for a GET on `key`.
pub async fn presign_get(
    client: &Client,
    bucket: &str,
    key: &str,
    expires_in: Duration,
) -> anyhow::Result<String> {
    let presigned = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .presigned(PresigningConfig::expires_in(expires_in)?)
        .await
        .context(format!("could not presign GET for {key}"))?;

    Ok(presigned.uri().to_string())
}

/// Generates a presigned URL for a PUT on `key`, covering the content type
/// and the attached metadata.
pub async fn presign_put(
    client: &Client,
    bucket: &str,
    key: &str,
    content_type: &str,
    metadata: &HashMap<String, String>,
    expires_in: Duration,
) -> anyhow::Result<String> {
    let mut req = client
        .put_object()
        .bucket(bucket)
        .key(key)
        .content_type(content_type);

    for (name, value) in metadata {
        req = req.metadata(name, value);
    }

    let presigned = req
        .presigned(PresigningConfig::expires_in(expires_in)?)
        .await
        .context(format!("could not presign PUT for {key}"))?;

    Ok(presigned.uri().to_string())
}
