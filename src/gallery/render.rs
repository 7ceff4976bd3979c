//! Stage 2 of a gallery build: group the photos and render the page.

use super::scan::PhotoEntry;
use super::GalleryStats;
use std::collections::BTreeMap;

/// The page skeleton. `{{...}}` placeholders are filled by [`render_page`];
/// the markup itself is a fixed asset.
const TEMPLATE: &str = include_str!("template.html");

type Grouped<'a> = BTreeMap<&'a str, BTreeMap<&'a str, BTreeMap<&'a str, Vec<&'a PhotoEntry>>>>;

/// Groups photos campus -> dining hall -> dish. Rendering iterates the maps,
/// so each level appears in sorted name order regardless of scan order.
fn organize(photos: &[PhotoEntry]) -> Grouped<'_> {
    let mut grouped: Grouped = BTreeMap::new();
    for photo in photos {
        grouped
            .entry(photo.campus.as_str())
            .or_default()
            .entry(photo.dining_hall.as_str())
            .or_default()
            .entry(photo.dish.as_str())
            .or_default()
            .push(photo);
    }
    grouped
}

/// Renders the complete page and its headline stats.
///
/// `src_prefix` is prepended to every image path: it is the scanned root as
/// written in the page, relative to where the page will live.
pub fn render_page(photos: &[PhotoEntry], title: &str, src_prefix: &str) -> (String, GalleryStats) {
    let grouped = organize(photos);
    let stats = GalleryStats {
        photos: photos.len(),
        campuses: grouped.len(),
        dining_halls: grouped.values().map(BTreeMap::len).sum(),
    };

    let mut body = String::new();
    for (campus, halls) in &grouped {
        body.push_str("      <div class=\"campus-section\">\n");
        body.push_str(&format!(
            "        <h2 class=\"campus-title\">{}</h2>\n",
            escape_html(campus)
        ));
        for (hall, dishes) in halls {
            body.push_str("        <div class=\"dining-hall\">\n");
            body.push_str(&format!(
                "          <h3 class=\"dining-hall-title\">{}</h3>\n",
                escape_html(hall)
            ));
            for (dish, dish_photos) in dishes {
                body.push_str("          <div class=\"dish-section\">\n");
                body.push_str(&format!(
                    "            <h4 class=\"dish-title\">{}</h4>\n",
                    escape_html(dish)
                ));
                body.push_str("            <div class=\"photo-grid\">\n");
                for photo in dish_photos {
                    let src = encode_src(&join_src(src_prefix, &photo.rel_path));
                    let caption = escape_html(&photo.file_name);
                    body.push_str("              <div class=\"photo-item\">\n");
                    body.push_str(&format!(
                        "                <img src=\"{src}\" alt=\"{caption}\" loading=\"lazy\" onclick=\"openLightbox(this.src)\">\n"
                    ));
                    body.push_str(&format!(
                        "                <div class=\"photo-caption\">{caption}</div>\n"
                    ));
                    body.push_str("              </div>\n");
                }
                body.push_str("            </div>\n");
                body.push_str("          </div>\n");
            }
            body.push_str("        </div>\n");
        }
        body.push_str("      </div>\n");
    }

    let page = TEMPLATE
        .replace("{{title}}", &escape_html(title))
        .replace("{{total_photos}}", &stats.photos.to_string())
        .replace("{{campus_count}}", &stats.campuses.to_string())
        .replace("{{hall_count}}", &stats.dining_halls.to_string())
        .replace("{{body}}", &body);
    (page, stats)
}

fn join_src(prefix: &str, rel_path: &str) -> String {
    if prefix.is_empty() {
        rel_path.to_string()
    } else {
        format!("{}/{}", prefix.trim_end_matches('/'), rel_path)
    }
}

/// Minimal HTML escaping for text and double-quoted attribute positions.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Percent-encodes a path for a `src` attribute, keeping `/` separators.
fn encode_src(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for byte in path.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
