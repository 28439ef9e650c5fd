//! Classification of a single raw line.

/// What a trimmed line means to the depth tracker.
///
/// Borrowed names and text point into the trimmed input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind<'a> {
    OpenTag(&'a str),
    CloseTag(&'a str),
    Text(&'a str),
    Ignorable,
}

const DECLARATION_PREFIX: &str = "<!";
const CLOSE_TAG_PREFIX: &str = "</";

/// Strip leading and trailing characters at or below U+0020.
///
/// ASCII control characters are trimmed along with spaces; non-ASCII
/// whitespace is kept as content.
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c <= ' ')
}

/// Classify one raw line. First matching rule wins:
///
/// 1. empty after trimming: ignorable
/// 2. starts with `<!` (doctype, comment opener): ignorable
/// 3. `</name>`: closing tag
/// 4. `<name>`: opening tag
/// 5. anything else: text, verbatim after trimming
pub fn classify_line(line: &str) -> LineKind<'_> {
    let line = trim_line(line);
    if line.is_empty() || line.starts_with(DECLARATION_PREFIX) {
        return LineKind::Ignorable;
    }

    if let Some(name) = line
        .strip_prefix(CLOSE_TAG_PREFIX)
        .and_then(|rest| rest.strip_suffix('>'))
    {
        return LineKind::CloseTag(name);
    }

    if let Some(name) = line
        .strip_prefix('<')
        .and_then(|rest| rest.strip_suffix('>'))
    {
        return LineKind::OpenTag(name);
    }

    LineKind::Text(line)
}
