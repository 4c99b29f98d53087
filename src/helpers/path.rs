//! Slug and relative path helpers

/// Turn a source path relative to the content directory into a slug
///
/// # Examples
/// ```ignore
/// slugify_path("notes/My Note.md") // -> "notes/My-Note"
/// ```
pub fn slugify_path(path: &str) -> String {
    let path = path.replace('\\', "/");
    let path = path.trim_start_matches("./").trim_matches('/');

    let without_ext = match path.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.contains('/') => stem,
        _ => path,
    };

    without_ext
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(slugify_segment)
        .collect::<Vec<_>>()
        .join("/")
}

fn slugify_segment(segment: &str) -> String {
    let mut slug = String::with_capacity(segment.len());
    for c in segment.chars() {
        match c {
            '&' => slug.push_str("-and-"),
            '%' => slug.push_str("-percent"),
            '?' | '#' => {}
            c if c.is_whitespace() => slug.push('-'),
            c => slug.push(c),
        }
    }

    // Collapse runs of dashes introduced by the replacements
    let mut collapsed = String::with_capacity(slug.len());
    for c in slug.chars() {
        if c == '-' && collapsed.ends_with('-') {
            continue;
        }
        collapsed.push(c);
    }
    collapsed
}

/// Relative prefix that leads from the page at `slug` back to the site root
///
/// Always ends with `/`, so a root-relative path can be appended directly.
///
/// # Examples
/// ```ignore
/// path_to_root("index")            // -> "./"
/// path_to_root("notes/rust/intro") // -> "../../"
/// ```
pub fn path_to_root(slug: &str) -> String {
    let depth = slug
        .split('/')
        .filter(|segment| !segment.is_empty())
        .count()
        .saturating_sub(1);

    if depth == 0 {
        "./".to_string()
    } else {
        "../".repeat(depth)
    }
}

/// Output file for a slug, relative to the public directory
pub fn slug_to_file(slug: &str) -> String {
    let slug = slug.trim_matches('/');
    if slug.is_empty() {
        "index.html".to_string()
    } else {
        format!("{}.html", slug)
    }
}
