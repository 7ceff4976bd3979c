//! Filename convention parsing.
//!
//! Archive photos are named `<locationCode>-<dishName>[ (<n>)].jpg`. The
//! location code is an opaque short prefix up to the first hyphen, the dish
//! name is free text, and the optional parenthesized integer is a
//! duplicate-index annotation added by the capture source. A name containing
//! the `TODO` marker anywhere skips the convention entirely and is routed to
//! the triage folder.

use crate::constants::TODO_MARKER;
use once_cell::sync::Lazy;
use regex::Regex;

/// `<code>-<dish>[ (<n>)].jpg`, matched against the whole filename. The dish
/// segment is non-greedy so trailing whitespace and the annotation stay out
/// of it.
static PHOTO_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*?)-(.+?)\s*(?:\((\d+)\))?\.jpg$").expect("photo name pattern"));

/// A filename successfully parsed against the archive convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoName {
    /// The opaque location code before the first hyphen.
    pub location_code: String,
    /// The dish name segment.
    pub dish: String,
    /// The duplicate-index annotation carried over from the capture source,
    /// if present. Not computed by this tool.
    pub duplicate_index: Option<u32>,
}

/// How a candidate filename is routed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The name carries the TODO marker; it goes to the triage folder unparsed.
    Todo,
    /// The name follows the `<code>-<dish>.jpg` convention.
    Dish(PhotoName),
    /// The name matches neither; the file is left in place.
    Unrecognized,
}

/// Classifies a candidate filename.
///
/// The TODO marker takes precedence over the naming convention, so a marked
/// photo is routed to triage even when its name would otherwise parse.
///
/// # Examples
///
/// ```
/// use photosort::classify::{classify, Classification};
///
/// match classify("JG1-西红柿炒鸡蛋.jpg") {
///     Classification::Dish(name) => {
///         assert_eq!(name.location_code, "JG1");
///         assert_eq!(name.dish, "西红柿炒鸡蛋");
///     }
///     other => panic!("unexpected classification: {other:?}"),
/// }
/// assert_eq!(classify("blurry TODO.jpg"), Classification::Todo);
/// assert_eq!(classify("notes.txt"), Classification::Unrecognized);
/// ```
pub fn classify(file_name: &str) -> Classification {
    if file_name.contains(TODO_MARKER) {
        return Classification::Todo;
    }
    match PHOTO_NAME.captures(file_name) {
        Some(caps) => Classification::Dish(PhotoName {
            location_code: caps[1].to_string(),
            dish: caps[2].to_string(),
            duplicate_index: caps.get(3).and_then(|m| m.as_str().parse().ok()),
        }),
        None => Classification::Unrecognized,
    }
}
