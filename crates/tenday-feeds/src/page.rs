//! Forecast text extraction from the ten-day page markup.
//!
//! The page lists one `<details>` element per forecast period inside a
//! `div.DailyForecast--DisclosureList`; each carries a `div.DetailsSummary`
//! whose text content is the forecast line the core parses. This is a small
//! tag scanner, not an HTML parser: it only needs to find divs by class and
//! collect their text.

/// Class fragment of the element holding the per-day list.
pub const CONTAINER_CLASS: &str = "DailyForecast--DisclosureList";
/// Class fragment of the summary element inside each `<details>` block.
pub const SUMMARY_CLASS: &str = "DetailsSummary";

/// Pull the per-period summary texts out of a ten-day forecast page, in page
/// order. Returns `None` when the page has no forecast list.
pub fn forecast_texts(html: &str) -> Option<Vec<String>> {
    let container = Tags::new(html)
        .find(|t| t.is_open("div") && t.has_class(CONTAINER_CLASS))?;
    let (inner_end, _) = element_end(html, &container);
    let list = &html[container.end..inner_end];

    let mut texts = Vec::new();
    let mut tags = Tags::new(list);
    while let Some(tag) = tags.next() {
        if !tag.is_open("details") {
            continue;
        }
        let (block_end, outer_end) = element_end(list, &tag);
        let block = &list[tag.end..block_end];

        if let Some(summary) = Tags::new(block).find(|t| t.is_open("div") && t.has_class(SUMMARY_CLASS)) {
            let (summary_end, _) = element_end(block, &summary);
            let text = text_content(&block[summary.end..summary_end]);
            if !text.is_empty() {
                texts.push(text);
            }
        } else {
            tracing::debug!("details block without a summary, skipping");
        }
        tags.pos = outer_end;
    }

    tracing::debug!(count = texts.len(), "extracted forecast texts");
    Some(texts)
}

/// Elements whose boundaries separate words even when the markup is minified.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "br", "dd", "details", "div", "dl", "dt", "footer", "h1", "h2", "h3",
    "h4", "h5", "h6", "header", "hr", "li", "ol", "p", "section", "summary", "table", "td", "th",
    "tr", "ul",
];

fn is_block(name: &str) -> bool {
    BLOCK_TAGS.iter().any(|b| b.eq_ignore_ascii_case(name))
}

/// Text nodes of a fragment with entities decoded, whitespace runs collapsed
/// and the ends trimmed. Block element boundaries become a space; inline
/// elements (`<span>Rain</span><span>40%</span>`) join without one.
pub fn text_content(fragment: &str) -> String {
    let mut raw = String::with_capacity(fragment.len());
    let mut pos = 0;
    for tag in Tags::new(fragment) {
        raw.push_str(&fragment[pos..tag.start]);
        if is_block(tag.name) {
            raw.push(' ');
        }
        pos = tag.end;
    }
    if pos < fragment.len() {
        raw.push_str(&fragment[pos..]);
    }
    collapse_ws(&decode_entities(&raw))
}

// ---------------------------------------------------------------------------
// Tag scanner
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct Tag<'a> {
    name: &'a str,
    closing: bool,
    self_closing: bool,
    attrs: &'a str,
    /// Byte offset of `<`.
    start: usize,
    /// Byte offset just past `>`.
    end: usize,
}

impl Tag<'_> {
    fn is_open(&self, name: &str) -> bool {
        !self.closing && self.name.eq_ignore_ascii_case(name)
    }

    fn is_close(&self, name: &str) -> bool {
        self.closing && self.name.eq_ignore_ascii_case(name)
    }

    fn has_class(&self, fragment: &str) -> bool {
        attr(self.attrs, "class").is_some_and(|c| c.contains(fragment))
    }
}

struct Tags<'a> {
    html: &'a str,
    pos: usize,
}

impl<'a> Tags<'a> {
    fn new(html: &'a str) -> Self {
        Self { html, pos: 0 }
    }
}

impl<'a> Iterator for Tags<'a> {
    type Item = Tag<'a>;

    fn next(&mut self) -> Option<Tag<'a>> {
        let html = self.html;
        loop {
            let start = html.get(self.pos..)?.find('<')? + self.pos;

            if html[start..].starts_with("<!--") {
                self.pos = html[start..]
                    .find("-->")
                    .map_or(html.len(), |e| start + e + 3);
                continue;
            }

            let close = tag_end(html, start + 1)?;
            self.pos = close + 1;

            let inner = &html[start + 1..close];
            let (closing, inner) = match inner.strip_prefix('/') {
                Some(rest) => (true, rest),
                None => (false, inner),
            };
            let name_end = inner
                .find(|c: char| c.is_whitespace() || c == '/')
                .unwrap_or(inner.len());
            let name = &inner[..name_end];

            // doctype, processing instructions, stray '<'
            if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
                continue;
            }

            return Some(Tag {
                name,
                closing,
                self_closing: inner.trim_end().ends_with('/'),
                attrs: &inner[name_end..],
                start,
                end: close + 1,
            });
        }
    }
}

/// Position of the `>` ending a tag, skipping quoted attribute values.
fn tag_end(html: &str, from: usize) -> Option<usize> {
    let mut quote = None;
    for (i, b) in html.as_bytes()[from..].iter().enumerate() {
        match (quote, *b) {
            (None, b'"' | b'\'') => quote = Some(*b),
            (Some(q), c) if c == q => quote = None,
            (None, b'>') => return Some(from + i),
            _ => {}
        }
    }
    None
}

/// `(inner_end, outer_end)` of the element opened by `open`, matching nested
/// elements of the same name. Unclosed elements run to the end of input.
fn element_end(html: &str, open: &Tag<'_>) -> (usize, usize) {
    if open.self_closing {
        return (open.end, open.end);
    }
    let mut depth = 1usize;
    let mut tags = Tags { html, pos: open.end };
    while let Some(tag) = tags.next() {
        if tag.is_open(open.name) && !tag.self_closing {
            depth += 1;
        } else if tag.is_close(open.name) {
            depth -= 1;
            if depth == 0 {
                return (tag.start, tag.end);
            }
        }
    }
    (html.len(), html.len())
}

/// Value of attribute `name` in a tag's attribute text.
fn attr<'a>(attrs: &'a str, name: &str) -> Option<&'a str> {
    let mut offset = 0;
    while let Some(i) = attrs[offset..].find(name) {
        let at = offset + i;
        offset = at + name.len();

        let boundary = attrs[..at].chars().next_back().is_none_or(char::is_whitespace);
        let Some(value) = attrs[offset..].trim_start().strip_prefix('=') else {
            continue;
        };
        if !boundary {
            continue;
        }
        let value = value.trim_start();
        return match value.chars().next() {
            Some(q @ ('"' | '\'')) => {
                let body = &value[1..];
                body.find(q).map(|end| &body[..end])
            }
            Some(_) => {
                let end = value.find(char::is_whitespace).unwrap_or(value.len());
                Some(&value[..end])
            }
            None => None,
        };
    }
    None
}

// ---------------------------------------------------------------------------
// Text cleanup
// ---------------------------------------------------------------------------

fn decode_entities(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let decoded = tail
            .find(';')
            .filter(|&semi| semi <= 10)
            .and_then(|semi| entity(&tail[1..semi]).map(|c| (c, semi)));
        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &tail[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn entity(name: &str) -> Option<char> {
    match name {
        "nbsp" => Some(' '),
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "deg" => Some('°'),
        _ => {
            let num = name.strip_prefix('#')?;
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}

fn collapse_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
