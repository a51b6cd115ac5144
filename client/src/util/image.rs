//! Product image URL resolution against the asset origin.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

/// Shown when a product has no image or the image fails to load.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/300x200?text=No+Image";

/// Resolve a stored image reference into a loadable URL.
///
/// Absolute URLs are kept. The product service stores bare file names, which
/// are served from `{asset_base}/uploads/`; references that already contain
/// `uploads/` are joined to the asset base as-is.
pub fn product_image_url(asset_base: &str, image: Option<&str>) -> String {
    let Some(image) = image.map(str::trim).filter(|path| !path.is_empty()) else {
        return PLACEHOLDER_IMAGE.to_owned();
    };
    if image.starts_with("http://") || image.starts_with("https://") {
        return image.to_owned();
    }
    let base = asset_base.trim_end_matches('/');
    let path = image.trim_start_matches('/');
    if path.contains("uploads/") {
        format!("{base}/{path}")
    } else {
        format!("{base}/uploads/{path}")
    }
}
