use std::path::PathBuf;

use rocket::response::content::RawHtml;

/// the single page entry document. The client shell reads the path to pick between the public and admin views
static INDEX: &str = include_str!("../assets/index.html");

#[get("/")]
pub fn public_view() -> RawHtml<&'static str> {
    RawHtml(INDEX)
}

#[get("/admin")]
pub fn admin_view() -> RawHtml<&'static str> {
    RawHtml(INDEX)
}

#[get("/admin/<_path..>", rank = 2)]
pub fn admin_sub_view(_path: PathBuf) -> RawHtml<&'static str> {
    RawHtml(INDEX)
}
