//! Listing and object commands.

use std::collections::HashMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use mantagw_core::error::{AppError, ErrorKind};
use mantagw_core::traits::gateway::{BucketOperations, ObjectOperations};
use mantagw_gateway::StorageGateway;

use crate::output::{self, OutputFormat};

/// Arguments for `ls`
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Bucket to list; lists buckets when omitted
    pub bucket: Option<String>,
    /// Directory prefix inside the bucket
    #[arg(short, long, default_value = "")]
    pub prefix: String,
}

/// Arguments for `stat`
#[derive(Debug, Args)]
pub struct StatArgs {
    /// Bucket name
    pub bucket: String,
    /// Object name; shows bucket info when omitted
    pub object: Option<String>,
}

/// Arguments for `put`
#[derive(Debug, Args)]
pub struct PutArgs {
    /// Bucket name
    pub bucket: String,
    /// Object name
    pub object: String,
    /// Local file to upload
    pub file: PathBuf,
    /// Content type stored with the object
    #[arg(long)]
    pub content_type: Option<String>,
}

/// Arguments for `get`
#[derive(Debug, Args)]
pub struct GetArgs {
    /// Bucket name
    pub bucket: String,
    /// Object name
    pub object: String,
    /// Start offset of the requested range
    #[arg(long, default_value_t = 0)]
    pub offset: i64,
    /// Length of the requested range (-1 for the whole object)
    #[arg(long, default_value_t = -1, allow_hyphen_values = true)]
    pub length: i64,
    /// Destination file; writes to stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `cp`
#[derive(Debug, Args)]
pub struct CopyArgs {
    pub src_bucket: String,
    pub src_object: String,
    pub dst_bucket: String,
    pub dst_object: String,
}

/// Arguments for `rm`
#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Bucket name
    pub bucket: String,
    /// Object name
    pub object: String,
}

/// Bucket display row
#[derive(Debug, Serialize, Tabled)]
struct BucketRow {
    name: String,
    created: String,
}

/// Listing display row
#[derive(Debug, Serialize, Tabled)]
struct EntryRow {
    kind: String,
    name: String,
    size: String,
    content_type: String,
    modified: String,
}

pub async fn list(
    gateway: &StorageGateway,
    args: &ListArgs,
    format: OutputFormat,
) -> Result<(), AppError> {
    let Some(bucket) = &args.bucket else {
        let buckets = gateway.list_buckets().await?;
        let rows: Vec<BucketRow> = buckets
            .iter()
            .map(|b| BucketRow {
                name: b.name.clone(),
                created: format_time(b.created),
            })
            .collect();
        output::print_list(&rows, &buckets, format);
        return Ok(());
    };

    let listing = gateway
        .list_objects(bucket, &args.prefix, "", "/", 0)
        .await?;

    let prefixes = listing.prefixes.iter().map(|p| EntryRow {
        kind: "prefix".to_string(),
        name: p.clone(),
        size: "-".to_string(),
        content_type: String::new(),
        modified: String::new(),
    });
    let objects = listing.objects.iter().map(|o| EntryRow {
        kind: "object".to_string(),
        name: o.name.clone(),
        size: output::format_bytes(o.size),
        content_type: o.content_type.clone(),
        modified: format_time(o.mod_time),
    });
    let rows: Vec<EntryRow> = prefixes.chain(objects).collect();

    output::print_list(&rows, &listing, format);
    Ok(())
}

pub async fn stat(
    gateway: &StorageGateway,
    args: &StatArgs,
    format: OutputFormat,
) -> Result<(), AppError> {
    let Some(object) = &args.object else {
        let info = gateway.get_bucket_info(&args.bucket).await?;
        match format {
            OutputFormat::Json => output::print_json(&info),
            OutputFormat::Table => {
                output::print_kv("Bucket", &info.name);
                output::print_kv("Created", &format_time(info.created));
            }
        }
        return Ok(());
    };

    let info = gateway.get_object_info(&args.bucket, object).await?;
    match format {
        OutputFormat::Json => output::print_json(&info),
        OutputFormat::Table => {
            output::print_kv("Bucket", &info.bucket);
            output::print_kv("Object", &info.name);
            output::print_kv("Size", &output::format_bytes(info.size));
            output::print_kv("Content-Type", &info.content_type);
            output::print_kv("Modified", &format_time(info.mod_time));
        }
    }
    Ok(())
}

pub async fn put(gateway: &StorageGateway, args: &PutArgs) -> Result<(), AppError> {
    let mut file = tokio::fs::File::open(&args.file).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Validation,
            format!("Cannot open '{}'", args.file.display()),
            e,
        )
    })?;
    let size = file.metadata().await?.len();

    let mut metadata = HashMap::new();
    if let Some(content_type) = &args.content_type {
        metadata.insert("content-type".to_string(), content_type.clone());
    }

    let size = i64::try_from(size)
        .map_err(|_| AppError::validation(format!("'{}' is too large", args.file.display())))?;
    gateway
        .put_object(&args.bucket, &args.object, size, &mut file, &metadata, "")
        .await?;

    output::print_success(&format!(
        "Uploaded '{}' to {}/{} ({})",
        args.file.display(),
        args.bucket,
        args.object,
        output::format_bytes(size as u64)
    ));
    Ok(())
}

pub async fn get(gateway: &StorageGateway, args: &GetArgs) -> Result<(), AppError> {
    match &args.output {
        Some(path) => {
            let mut file = tokio::fs::File::create(path).await?;
            gateway
                .get_object(&args.bucket, &args.object, args.offset, args.length, &mut file)
                .await?;
            output::print_success(&format!(
                "Downloaded {}/{} to '{}'",
                args.bucket,
                args.object,
                path.display()
            ));
        }
        None => {
            let mut stdout = tokio::io::stdout();
            gateway
                .get_object(&args.bucket, &args.object, args.offset, args.length, &mut stdout)
                .await?;
        }
    }
    Ok(())
}

pub async fn copy(gateway: &StorageGateway, args: &CopyArgs) -> Result<(), AppError> {
    gateway
        .copy_object(
            &args.src_bucket,
            &args.src_object,
            &args.dst_bucket,
            &args.dst_object,
            &HashMap::new(),
        )
        .await?;
    output::print_success(&format!(
        "Copy {}/{} -> {}/{} accepted",
        args.src_bucket, args.src_object, args.dst_bucket, args.dst_object
    ));
    Ok(())
}

pub async fn remove(gateway: &StorageGateway, args: &RemoveArgs) -> Result<(), AppError> {
    gateway.delete_object(&args.bucket, &args.object).await?;
    output::print_success(&format!("Removed {}/{}", args.bucket, args.object));
    Ok(())
}

fn format_time(time: Option<DateTime<Utc>>) -> String {
    time.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}
