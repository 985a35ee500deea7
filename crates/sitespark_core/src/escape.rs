//! Minimal HTML escaping for text placed into markup outside the template
//! engine: the last-resort document builder and the URL attribute filter.
//! Escapes the five markup-significant characters and nothing else, so URL
//! slashes survive verbatim.

pub(crate) fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_html_covers_markup_characters() {
        assert_eq!(escape_html("a<b>&\"'"), "a&lt;b&gt;&amp;&quot;&#x27;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn escape_html_keeps_url_characters_verbatim() {
        assert_eq!(escape_html("https://x/buy?a=1#top"), "https://x/buy?a=1#top");
    }
}
