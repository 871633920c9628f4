/// Width requested for the overlay's hero image and gallery.
pub const DETAIL_IMAGE_WIDTH: u32 = 1280;
/// Width requested for list thumbnails.
pub const CARD_IMAGE_WIDTH: u32 = 640;

/// Rewrite a RAWG media URL to its resized variant.
pub fn small_image(path: &str, width: u32) -> String {
    if path.contains("media/screenshots") {
        path.replacen(
            "media/screenshots",
            &format!("media/resize/{}/-/screenshots", width),
            1,
        )
    } else {
        path.replacen(
            "/media/games/",
            &format!("/media/resize/{}/-/games/", width),
            1,
        )
    }
}
