/// Title used when no line of a document is entirely upper-case.
pub const UNTITLED: &str = "Untitled Document";

/// Splits raw file content into a title and a body.
///
/// The title is the first line that, once trimmed and entity-decoded, is
/// entirely upper-case. The body is every line after it. A document without
/// such a line keeps its full text as the body.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentBuilder;

impl DocumentBuilder {
    pub fn build(&self, raw_text: &str) -> (String, String) {
        let lines: Vec<&str> = raw_text.lines().collect();

        for (i, line) in lines.iter().enumerate() {
            let candidate = decode_entities(line.trim());
            if is_upper(&candidate) {
                // A title on the last line leaves an empty body.
                return (candidate, lines[i + 1..].join("\n"));
            }
        }

        (UNTITLED.to_string(), raw_text.to_string())
    }
}

/// At least one cased character and no lower-case ones.
fn is_upper(s: &str) -> bool {
    let mut cased = false;
    for c in s.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}

const NAMED_ENTITIES: &[(&str, char)] = &[
    ("amp", '&'),
    ("lt", '<'),
    ("gt", '>'),
    ("quot", '"'),
    ("apos", '\''),
    ("nbsp", '\u{a0}'),
    ("copy", '\u{a9}'),
    ("reg", '\u{ae}'),
    ("deg", '\u{b0}'),
    ("pound", '\u{a3}'),
    ("euro", '\u{20ac}'),
    ("yen", '\u{a5}'),
    ("cent", '\u{a2}'),
];

/// Decode HTML character references (`&lt;`, `&#38;`, `&#x26;`).
///
/// Unknown or malformed references are left as written.
pub fn decode_entities(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];

        let decoded = after.find(';').and_then(|semi| {
            let name = &after[..semi];
            decode_reference(name).map(|c| (c, semi))
        });

        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &after[semi + 1..];
            }
            None => {
                out.push('&');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

fn decode_reference(name: &str) -> Option<char> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix('x').or_else(|| num.strip_prefix('X')) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        return char::from_u32(code);
    }

    NAMED_ENTITIES
        .iter()
        .find(|(entity, _)| *entity == name)
        .map(|(_, c)| *c)
}
