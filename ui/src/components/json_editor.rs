//! JSON Editor Component
//!
//! A plain textarea under a syntax-highlighted overlay, with line numbers.
//! Every edit is relayed upward unmodified; the editor keeps no state of its
//! own beyond what the textarea holds.

use leptos::prelude::*;
use leptos::web_sys;
use wasm_bindgen::JsCast;

// ============================================================================
// Highlighting
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TokenClass {
    Whitespace,
    Key,
    String,
    Number,
    Boolean,
    Null,
    Punctuation,
    Error,
}

impl TokenClass {
    fn css_class(self) -> Option<&'static str> {
        match self {
            TokenClass::Whitespace => None,
            TokenClass::Key => Some("json-key"),
            TokenClass::String => Some("json-string"),
            TokenClass::Number => Some("json-number"),
            TokenClass::Boolean => Some("json-boolean"),
            TokenClass::Null => Some("json-null"),
            TokenClass::Punctuation => Some("json-punct"),
            TokenClass::Error => Some("json-error"),
        }
    }
}

/// Index just past the last byte matching `pred`, starting at `from`.
/// Predicates only match ASCII, so the result is always a char boundary.
fn scan_while(src: &str, from: usize, pred: impl Fn(u8) -> bool) -> usize {
    src.as_bytes()[from..]
        .iter()
        .position(|&b| !pred(b))
        .map_or(src.len(), |n| from + n)
}

/// Index just past the closing quote of the string opening at `open`
fn string_end(src: &str, open: usize) -> usize {
    let mut escaped = false;
    for (offset, ch) in src[open + 1..].char_indices() {
        if escaped {
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == '"' {
            return open + 1 + offset + 1;
        }
    }
    src.len()
}

fn is_blank(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

/// Split text into highlight tokens. Never fails; anything unexpected is an error token.
fn tokenize(src: &str) -> Vec<(TokenClass, &str)> {
    let bytes = src.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < src.len() {
        let start = i;
        let class = match bytes[i] {
            b if is_blank(b) => {
                i = scan_while(src, i, is_blank);
                TokenClass::Whitespace
            }
            b'"' => {
                i = string_end(src, i);
                // a string followed by a colon is an object key
                let after = scan_while(src, i, |b| b == b' ' || b == b'\t');
                if bytes.get(after) == Some(&b':') {
                    TokenClass::Key
                } else {
                    TokenClass::String
                }
            }
            b'-' | b'0'..=b'9' => {
                i = scan_while(src, i + 1, |b| {
                    b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-')
                });
                TokenClass::Number
            }
            b if b.is_ascii_alphabetic() => {
                i = scan_while(src, i, |b| b.is_ascii_alphabetic());
                match &src[start..i] {
                    "true" | "false" => TokenClass::Boolean,
                    "null" => TokenClass::Null,
                    _ => TokenClass::Error,
                }
            }
            b'{' | b'}' | b'[' | b']' | b':' | b',' => {
                i += 1;
                TokenClass::Punctuation
            }
            _ => {
                i += src[i..].chars().next().map_or(1, char::len_utf8);
                TokenClass::Error
            }
        };
        tokens.push((class, &src[start..i]));
    }

    tokens
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Syntax-highlighted HTML for the overlay
fn highlight_json(json: &str) -> String {
    let mut html = String::with_capacity(json.len() * 2);
    for (class, text) in tokenize(json) {
        match class.css_class() {
            Some(css) => {
                html.push_str(&format!(r#"<span class="{}">{}</span>"#, css, escape_html(text)))
            }
            None => html.push_str(text),
        }
    }
    // keeps the overlay as tall as the textarea when the text ends in a newline
    if json.ends_with('\n') {
        html.push(' ');
    }
    html
}

// ============================================================================
// Editing helpers
// ============================================================================

/// Number of lines, counting a trailing empty line the way the textarea shows it
fn count_lines(text: &str) -> usize {
    text.split('\n').count()
}

/// Byte offset of a UTF-16 offset (what the DOM reports for selections)
fn utf16_to_byte(text: &str, utf16_offset: u32) -> usize {
    let mut seen = 0u32;
    for (byte, ch) in text.char_indices() {
        if seen >= utf16_offset {
            return byte;
        }
        seen += ch.len_utf16() as u32;
    }
    text.len()
}

/// Format JSON with proper indentation
pub fn format_json(json: &str) -> Result<String, String> {
    serde_json::from_str::<serde_json::Value>(json)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .map_err(|e| e.to_string())
}

// ============================================================================
// Component
// ============================================================================

#[component]
pub fn JsonEditor(
    /// Current buffer, owned by the parent
    #[prop(into)]
    value: Signal<String>,
    /// Receives every edit
    on_change: Callback<String>,
    /// Validity as judged by the parent
    #[prop(into)]
    is_valid: Signal<bool>,
    /// Minimum number of visible rows
    #[prop(default = 24)]
    rows: u32,
) -> impl IntoView {
    let highlight_ref = NodeRef::<leptos::html::Pre>::new();

    let handle_input = move |ev: web_sys::Event| {
        on_change.run(event_target_value(&ev));
    };

    let on_format = move |_| {
        if let Ok(formatted) = format_json(&value.get_untracked()) {
            on_change.run(formatted);
        }
    };

    // Tab inserts two spaces instead of leaving the textarea
    let handle_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Tab" {
            return;
        }
        let Some(textarea) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
        else {
            return;
        };
        ev.prevent_default();

        let current = textarea.value();
        let start = textarea.selection_start().ok().flatten().unwrap_or(0);
        let end = textarea.selection_end().ok().flatten().unwrap_or(start);
        let new_value = format!(
            "{}  {}",
            &current[..utf16_to_byte(&current, start)],
            &current[utf16_to_byte(&current, end)..]
        );

        textarea.set_value(&new_value);
        let _ = textarea.set_selection_start(Some(start + 2));
        let _ = textarea.set_selection_end(Some(start + 2));
        on_change.run(new_value);
    };

    let handle_scroll = move |ev: web_sys::Event| {
        let Some(textarea) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
        else {
            return;
        };
        if let Some(highlight) = highlight_ref.get() {
            highlight.set_scroll_top(textarea.scroll_top());
            highlight.set_scroll_left(textarea.scroll_left());
        }
    };

    view! {
        <div class="editor">
            <div class="panel-header">
                <h2 class="panel-title">"JSON Editor"</h2>
                <button
                    type="button"
                    class="format-button"
                    on:click=on_format
                    disabled=move || !is_valid.get()
                >
                    "Format"
                </button>
            </div>

            <div class="json-editor-wrapper">
                <div class="json-line-numbers" aria-hidden="true">
                    {move || {
                        let lines = count_lines(&value.get()).max(rows as usize);
                        (1..=lines)
                            .map(|n| view! { <div class="json-line-number">{n}</div> })
                            .collect_view()
                    }}
                </div>

                <div class="json-editor-area">
                    <pre
                        class="json-highlight"
                        aria-hidden="true"
                        node_ref=highlight_ref
                        inner_html=move || highlight_json(&value.get())
                    />
                    <textarea
                        class="json-textarea"
                        rows=rows
                        spellcheck="false"
                        autocomplete="off"
                        prop:value=move || value.get()
                        on:input=handle_input
                        on:keydown=handle_keydown
                        on:scroll=handle_scroll
                    />
                </div>
            </div>

            <Show when=move || !is_valid.get()>
                <p class="error-message">"Invalid JSON schema"</p>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(src: &str) -> Vec<TokenClass> {
        tokenize(src)
            .into_iter()
            .map(|(c, _)| c)
            .filter(|c| *c != TokenClass::Whitespace)
            .collect()
    }

    #[test]
    fn test_tokens_cover_the_input() {
        let src = r#"{ "id": "name", "required": true, "n": -1.5e3, "x": null }"#;
        let joined: String = tokenize(src).into_iter().map(|(_, t)| t).collect();
        assert_eq!(joined, src);
    }

    #[test]
    fn test_keys_and_values() {
        use TokenClass::*;
        assert_eq!(
            classes(r#"{"a" : "b", "c": [1, false, null]}"#),
            vec![
                Punctuation, Key, Punctuation, String, Punctuation, Key, Punctuation,
                Punctuation, Number, Punctuation, Boolean, Punctuation, Null, Punctuation,
                Punctuation
            ]
        );
    }

    #[test]
    fn test_bad_input_becomes_error_tokens() {
        assert_eq!(
            classes("{'a': undefined}"),
            vec![
                TokenClass::Punctuation,
                TokenClass::Error,
                TokenClass::Error,
                TokenClass::Error,
                TokenClass::Punctuation,
                TokenClass::Error,
                TokenClass::Punctuation
            ]
        );
    }

    #[test]
    fn test_unterminated_string_and_multibyte_text() {
        let src = "{\"é\\\u{e9}: \"ünïcode";
        let joined: String = tokenize(src).into_iter().map(|(_, t)| t).collect();
        assert_eq!(joined, src);
        assert_eq!(classes("§"), vec![TokenClass::Error]);
    }

    #[test]
    fn test_highlight_escapes_markup() {
        let html = highlight_json(r#"{"a": "<b>&"}"#);
        assert!(html.contains(r#"<span class="json-string">"&lt;b&gt;&amp;"</span>"#));
        assert!(html.contains(r#"<span class="json-key">"a"</span>"#));
    }

    #[test]
    fn test_count_lines() {
        assert_eq!(count_lines(""), 1);
        assert_eq!(count_lines("{}"), 1);
        assert_eq!(count_lines("{\n}\n"), 3);
    }

    #[test]
    fn test_utf16_offsets() {
        let text = "aé😀b";
        assert_eq!(utf16_to_byte(text, 0), 0);
        assert_eq!(utf16_to_byte(text, 2), 3);
        // the emoji is two UTF-16 units and four bytes
        assert_eq!(utf16_to_byte(text, 4), 7);
        assert_eq!(utf16_to_byte(text, 99), text.len());
    }

    #[test]
    fn test_format_json() {
        assert_eq!(format_json("{\"a\":1}").unwrap(), "{\n  \"a\": 1\n}");
        assert!(format_json("{").is_err());
    }
}
