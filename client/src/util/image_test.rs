use super::*;

const BASE: &str = "https://localhost:7154";

#[test]
fn missing_or_blank_image_uses_placeholder() {
    assert_eq!(product_image_url(BASE, None), PLACEHOLDER_IMAGE);
    assert_eq!(product_image_url(BASE, Some("  ")), PLACEHOLDER_IMAGE);
}

#[test]
fn absolute_urls_are_kept() {
    let url = "http://cdn.example.com/phone.png";
    assert_eq!(product_image_url(BASE, Some(url)), url);
}

#[test]
fn bare_file_name_maps_to_uploads() {
    assert_eq!(product_image_url(BASE, Some("phone.png")), "https://localhost:7154/uploads/phone.png");
}

#[test]
fn uploads_path_joins_asset_base() {
    assert_eq!(product_image_url("https://localhost:7154/", Some("/uploads/a.jpg")), "https://localhost:7154/uploads/a.jpg");
    assert_eq!(product_image_url(BASE, Some("uploads/b.jpg")), "https://localhost:7154/uploads/b.jpg");
}
