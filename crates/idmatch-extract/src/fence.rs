/// Markdown code-fence marker.
const FENCE: &str = "```";

/// Returns the content of the first JSON code fence in model output.
///
/// Rules, applied to the trimmed input:
/// 1. No fence: the input is returned as is.
/// 2. A fence tagged `json` (any case) is preferred over untagged fences.
///    Otherwise the first fence is used and any ASCII alphanumeric language
///    tag right after it is skipped.
/// 3. Content runs to the next fence, or to the end of the input when the
///    fence is never closed.
/// 4. A lone fence at the very end of the input closes content that had no
///    opener; the content before it is returned.
///
/// The result is trimmed.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();

    let opener = trimmed
        .match_indices(FENCE)
        .map(|(idx, _)| idx)
        .find(|&idx| is_json_tag(&trimmed[idx + FENCE.len()..]));

    let (opener, tagged) = match opener {
        Some(idx) => (idx, true),
        None => match trimmed.find(FENCE) {
            Some(idx) => (idx, false),
            None => return trimmed,
        },
    };

    let after_fence = opener + FENCE.len();
    if !tagged && opener > 0 && after_fence == trimmed.len() {
        return trimmed[..opener].trim();
    }

    let body_start = if tagged {
        after_fence + "json".len()
    } else {
        after_fence + language_tag_len(&trimmed[after_fence..])
    };
    let rest = &trimmed[body_start..];
    let end = rest.find(FENCE).unwrap_or(rest.len());
    rest[..end].trim()
}

fn is_json_tag(s: &str) -> bool {
    s.get(..4).is_some_and(|tag| tag.eq_ignore_ascii_case("json"))
}

fn language_tag_len(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_alphanumeric).count()
}
