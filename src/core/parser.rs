use crate::models::Sections;

/// Parse a free-form completion into named sections of text items
///
/// The model is asked for numbered/bulleted prose, not JSON, so this is a
/// best-effort heuristic over a loose convention:
/// - paragraphs are separated by blank lines
/// - a paragraph containing a colon opens a new section named by the text
///   before the first colon
/// - lines starting with `- ` are items of the current section
/// - anything else becomes an item of the current section verbatim
///
/// Bullet paragraphs are never section headers, even when they contain a
/// colon (`- ratio: 3:1` stays a single item). Sections that accumulate no
/// items are dropped. The function is pure and total: any input yields a
/// map, worst case an empty one.
pub fn parse_sections(text: &str) -> Sections {
    let mut sections = Sections::new();
    let mut current_key: Option<String> = None;
    let mut current_items: Vec<String> = Vec::new();

    for block in text.split("\n\n") {
        let trimmed = block.trim();
        if trimmed.is_empty() {
            continue;
        }

        if trimmed.starts_with('-') {
            // Bullet paragraphs are always items, never headers
            if current_key.is_some() {
                push_item_lines(trimmed, &mut current_items);
            }
        } else if let Some((title, rest)) = trimmed.split_once(':') {
            // New section: flush whatever the previous one accumulated
            if let Some(key) = current_key.take() {
                if !current_items.is_empty() {
                    sections.insert(key, std::mem::take(&mut current_items));
                }
            }
            current_items.clear();
            current_key = Some(title.trim().to_string());

            // Content after the colon belongs to the new section
            push_item_lines(rest, &mut current_items);
        } else if current_key.is_some() {
            current_items.push(trimmed.to_string());
        }
    }

    if let Some(key) = current_key {
        if !current_items.is_empty() {
            sections.insert(key, current_items);
        }
    }

    sections
}

/// Append each non-empty line as an item, stripping a leading bullet marker
fn push_item_lines(text: &str, items: &mut Vec<String>) {
    for line in text.lines() {
        let line = line.trim();
        let item = line.strip_prefix("- ").or_else(|| line.strip_prefix('-')).unwrap_or(line);
        let item = item.trim();
        if !item.is_empty() {
            items.push(item.to_string());
        }
    }
}
