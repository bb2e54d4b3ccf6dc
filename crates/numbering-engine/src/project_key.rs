use regex::Regex;

/// Extract the routing key from a free-form project name.
///
/// The key is the leading `word+digits` token when it is terminated by an
/// underscore or whitespace (`"PV001_Gehäuse"` → `"PV001"`); any other name
/// is its own key. An empty name yields an empty key.
pub fn project_key(project_name: &str) -> &str {
    let re = Regex::new(r"^(\w+\d+)[_\s]").expect("project key pattern is valid");
    re.captures(project_name)
        .and_then(|caps| caps.get(1))
        .map_or(project_name, |m| m.as_str())
}

/// Human-readable part of a project name: everything after the first
/// underscore, or the whole name when it has none.
///
/// Used as the default description for main assemblies.
pub fn project_text(project_name: &str) -> &str {
    match project_name.split_once('_') {
        Some((_, text)) => text,
        None => project_name,
    }
}
