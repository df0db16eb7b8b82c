use std::fs;
use std::path::Path;

use crate::error::Error;
use crate::types::token::TokenRecord;

/// Address encoded in a logo file name: everything before the first `.png`.
///
/// Names without `.png` are returned whole.
pub fn address_stem(file_name: &str) -> &str {
    file_name
        .split_once(".png")
        .map_or(file_name, |(stem, _)| stem)
}

/// Public URL of a local logo once published.
pub fn logo_uri(logo_base_url: &str, address: &str) -> String {
    format!(
        "{}/{}.png",
        logo_base_url.trim_end_matches('/'),
        address.to_lowercase()
    )
}

/// Address stems of every entry in `dir`, sorted by file name.
pub fn list_local_assets(dir: &Path) -> Result<Vec<String>, Error> {
    let filesystem_error = |source| Error::Filesystem {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(filesystem_error)? {
        let entry = entry.map_err(filesystem_error)?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();

    let stems: Vec<String> = names
        .iter()
        .map(|name| address_stem(name).to_string())
        .collect();

    tracing::debug!(path = %dir.display(), assets = stems.len(), "listed local assets");
    Ok(stems)
}

/// One record per local logo, carrying only `address` and `logoURI`.
pub fn local_asset_records(dir: &Path, logo_base_url: &str) -> Result<Vec<TokenRecord>, Error> {
    Ok(list_local_assets(dir)?
        .into_iter()
        .map(|address| {
            let uri = logo_uri(logo_base_url, &address);
            TokenRecord::new(address).with_logo_uri(uri)
        })
        .collect())
}
