//! Multipart reading and ID-proof storage for blood requests.
//!
//! The client's file name is never used as a path. The stored file gets a
//! fresh UUID name inside the upload directory (keeping a short alphanumeric
//! extension when there is one); the original name and an MD5 digest of the
//! content are kept as metadata on the record.

use crate::error::AppError;
use actix_multipart::{Multipart, MultipartError};
use futures_util::StreamExt;
use std::collections::HashMap;
use log::error;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Name of the multipart field carrying the ID proof.
pub(crate) const FILE_FIELD: &str = "id_proof";

/// Upper bound for a single text field.
const MAX_FIELD_BYTES: usize = 64 * 1024;

/// Upper bound for the number of text parts in one form.
const MAX_FIELDS: usize = 32;

/// A file part held in memory until the form has been validated.
#[derive(Debug)]
pub(crate) struct UploadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Text fields and the optional file of a submitted form.
#[derive(Debug, Default)]
pub(crate) struct FormParts {
    pub fields: HashMap<String, String>,
    pub file: Option<UploadedFile>,
}

impl FormParts {
    /// Value of a text field, empty when it was not sent.
    pub(crate) fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or_default()
    }
}

/// An ID proof written to disk.
#[derive(Debug)]
pub(crate) struct StoredUpload {
    pub path: PathBuf,
    pub original_name: String,
    pub md5: String,
}

fn malformed(e: MultipartError) -> AppError {
    AppError::validation(format!("Malformed form data: {}", e))
}

/// Reads every part of the form.
///
/// The file part is buffered up to `max_file_bytes`; anything larger is
/// rejected with `PayloadTooLarge` before a byte reaches the disk. Text
/// parts are limited in size and in number. A file part with an empty name
/// and no content (an empty file input) counts as no file.
pub(crate) async fn read_form(
    mut payload: Multipart,
    max_file_bytes: usize,
) -> Result<FormParts, AppError> {
    let mut parts = FormParts::default();
    let mut text_parts = 0;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(malformed)?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        match name.as_deref() {
            Some(FILE_FIELD) => {
                let filename = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
                    .unwrap_or_default();

                let mut bytes = Vec::new();
                while let Some(chunk) = field.next().await {
                    let chunk = chunk.map_err(malformed)?;
                    if bytes.len() + chunk.len() > max_file_bytes {
                        return Err(AppError::PayloadTooLarge {
                            max: max_file_bytes,
                        });
                    }
                    bytes.extend_from_slice(&chunk);
                }

                if filename.is_empty() && bytes.is_empty() {
                    continue;
                }
                parts.file = Some(UploadedFile { filename, bytes });
            }

            Some(other) => {
                text_parts += 1;
                if text_parts > MAX_FIELDS {
                    return Err(AppError::validation(format!(
                        "Form has more than {} fields",
                        MAX_FIELDS
                    )));
                }
                let other = other.to_string();
                let mut bytes = Vec::new();
                while let Some(chunk) = field.next().await {
                    let chunk = chunk.map_err(malformed)?;
                    if bytes.len() + chunk.len() > MAX_FIELD_BYTES {
                        return Err(AppError::validation(format!("Field '{}' is too long", other)));
                    }
                    bytes.extend_from_slice(&chunk);
                }
                let value = String::from_utf8(bytes)
                    .map_err(|_| AppError::validation(format!("Field '{}' is not valid UTF-8", other)))?;
                parts.fields.insert(other, value);
            }

            None => {}
        }
    }

    Ok(parts)
}

/// Rejects client file names that could be read as a path.
pub(crate) fn check_filename(filename: &str) -> Result<(), AppError> {
    if filename.trim().is_empty() {
        return Err(AppError::validation("ID proof file must have a name"));
    }
    if filename.contains(['/', '\\', '\0']) || filename == "." || filename == ".." {
        return Err(AppError::validation(
            "ID proof file name must not contain path separators",
        ));
    }
    Ok(())
}

/// Short alphanumeric extension of the client name, lower-cased.
fn safe_extension(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() || ext.len() > 8 {
        return None;
    }
    if !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Server-side file name for an upload.
fn storage_name(filename: &str) -> String {
    let id = Uuid::new_v4();
    match safe_extension(filename) {
        Some(ext) => format!("{}.{}", id, ext),
        None => id.to_string(),
    }
}

/// Writes `file` into `upload_dir` under a generated name.
///
/// The file is created with `create_new`, so an existing file is never
/// overwritten. Blocking; run it on the blocking pool.
pub(crate) fn store_upload(upload_dir: &Path, file: UploadedFile) -> Result<StoredUpload, AppError> {
    check_filename(&file.filename)?;
    fs::create_dir_all(upload_dir)?;

    let path = upload_dir.join(storage_name(&file.filename));
    write_new_file(&path, |out| out.write_all(&file.bytes))?;

    Ok(StoredUpload {
        md5: format!("{:x}", md5::compute(&file.bytes)),
        original_name: file.filename,
        path,
    })
}

/// Creates `path` (which must not exist yet) and fills it with `write`.
/// A file left incomplete by a failed write is removed.
fn write_new_file<F>(path: &Path, write: F) -> io::Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let mut out = OpenOptions::new().write(true).create_new(true).open(path)?;
    if let Err(e) = write(&mut out) {
        drop(out);
        if let Err(remove_err) = fs::remove_file(path) {
            error!("Failed to remove partial upload {}: {}", path.display(), remove_err);
        }
        return Err(e);
    }
    Ok(())
}
