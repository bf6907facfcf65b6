// src/core/html.rs
// Case-insensitive tag slicing over raw markup. No DOM; the document is
// only ever scanned left to right.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Find the next `o..c` tag block at or after `from`.
/// Returns byte offsets of the whole block, opener through closing tag.
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}

/// Find the `<div>` carrying both the given class and id, and return its
/// inner content. Tracks nesting so inner divs don't truncate the block.
pub fn find_div_block_ci<'a>(s: &'a str, class: &str, id: &str) -> Option<&'a str> {
    let lc = to_lower(s);
    let class_lc = to_lower(class);
    let id_lc = to_lower(id);
    let mut pos = 0usize;

    while let Some(rel) = lc[pos..].find("<div") {
        let start = pos + rel;
        // Reject lookalikes such as <divider>
        if !matches!(s.as_bytes().get(start + 4).copied(), Some(b' ' | b'\t' | b'\r' | b'\n' | b'>')) {
            pos = start + 4;
            continue;
        }
        let open_end = s[start..].find('>')? + start + 1;
        let opener = &lc[start..open_end];
        pos = open_end;

        if attr_is(opener, "class", &class_lc) && attr_is(opener, "id", &id_lc) {
            return div_inner(s, &lc, open_end);
        }
    }
    None
}

/// Inner content of a div whose opener ends at `from`, honoring nested divs.
fn div_inner<'a>(s: &'a str, lc: &str, from: usize) -> Option<&'a str> {
    let mut depth = 1usize;
    let mut scan = from;
    loop {
        let open = lc[scan..].find("<div");
        let close = lc[scan..].find("</div");
        match (open, close) {
            (Some(o), Some(c)) if o < c => {
                depth += 1;
                scan += o + "<div".len();
            }
            (_, Some(c)) => {
                let close_at = scan + c;
                depth -= 1;
                if depth == 0 {
                    return Some(&s[from..close_at]);
                }
                scan = close_at + "</div".len();
            }
            _ => return None, // unbalanced markup
        }
    }
}

/// Attribute equality against a lowercased tag opener.
/// Tolerates single or double quotes.
fn attr_is(opener_lc: &str, name: &str, value_lc: &str) -> bool {
    opener_lc.contains(&format!(r#"{name}="{value_lc}""#))
        || opener_lc.contains(&format!("{name}='{value_lc}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_block_walks_forward() {
        let doc = "<p>a</p><table>1</table> <TABLE>2</TABLE>";
        let (s1, e1) = next_tag_block_ci(doc, "<table", "</table>", 0).unwrap();
        assert_eq!(&doc[s1..e1], "<table>1</table>");
        let (s2, e2) = next_tag_block_ci(doc, "<table", "</table>", e1).unwrap();
        assert_eq!(&doc[s2..e2], "<TABLE>2</TABLE>");
        assert!(next_tag_block_ci(doc, "<table", "</table>", e2).is_none());
    }

    #[test]
    fn strip_tags_flattens_markup() {
        assert_eq!(strip_tags("<td> <b>University</b> of&nbsp;X </td>"), "University of&nbsp;X");
    }

    #[test]
    fn div_finder_matches_both_attrs() {
        let doc = r#"<div class="bill_section" id="laws.1.2.0">no</div>
                     <div class="bill_section" id="laws.1.1.0">yes</div>"#;
        assert_eq!(find_div_block_ci(doc, "bill_section", "laws.1.1.0"), Some("yes"));
        assert_eq!(find_div_block_ci(doc, "bill_section", "laws.9.9.9"), None);
    }

    #[test]
    fn div_finder_tolerates_quoting_and_case() {
        let doc = "<DIV id='laws.1.1.0' class='bill_section'>body</DIV>";
        assert_eq!(find_div_block_ci(doc, "bill_section", "laws.1.1.0"), Some("body"));
    }

    #[test]
    fn div_finder_honors_nesting() {
        let doc = r#"<div class="bill_section" id="laws.1.1.0">
            <div class="note">inner</div><table>t</table></div><table>outside</table>"#;
        let block = find_div_block_ci(doc, "bill_section", "laws.1.1.0").unwrap();
        assert!(block.contains("<table>t</table>"));
        assert!(!block.contains("outside"));
    }
}
