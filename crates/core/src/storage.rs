//! Object-storage key generation.

/// Generate a unique storage key for an uploaded file, preserving the
/// original file extension so the served object keeps a sensible
/// content-type mapping.
///
/// Keys look like `scp-{uuid}.{ext}`; files without an extension get a bare
/// `scp-{uuid}` key.
pub fn object_key(original_filename: &str) -> String {
    let id = uuid::Uuid::new_v4();
    match extension(original_filename) {
        Some(ext) => format!("scp-{id}.{ext}"),
        None => format!("scp-{id}"),
    }
}

/// Extract the extension of a filename, if any.
///
/// The filename is client-supplied, so only ASCII-alphanumeric extensions
/// qualify; anything else (path separators, dots, unicode) is dropped and
/// the file gets a bare key.
fn extension(filename: &str) -> Option<&str> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    if !ext.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext)
}
