//! Build-label-safe package identifiers.
//!
//! Package names reach importfix in the alphabet build labels allow. Characters that may not
//! appear inside a label segment are replaced by a two-character marker, and the whole identifier
//! carries a `package` namespace token:
//!
//! | raw  | marker |
//! |------|--------|
//! | `/`  | `_s`   |
//! | `:`  | `_c`   |
//! | `@`  | `_a`   |
//! | `\`  | `_b`   |
//! | `-`  | `_d`   |
//! | `_`  | `_u`   |
//!
//! Every marker starts with an underscore, so the underscore marker must be decoded after all the
//! others. [`escape_table`] yields it last; [`demangle`] only ever walks that iterator.

/// Namespace token prefixed to every mangled identifier that names an installable package.
pub const NAMESPACE_PREFIX: &str = "package";

/// Markers that do not decode to an underscore, in decoding order.
const CHAR_ESCAPES: [(&str, &str); 5] = [
    ("/", "_s"),
    (":", "_c"),
    ("@", "_a"),
    ("\\", "_b"),
    ("-", "_d"),
];

/// Must be decoded last.
const UNDERSCORE_ESCAPE: (&str, &str) = ("_", "_u");

/// The escape table as `(raw, marker)` pairs, in decoding order.
pub fn escape_table() -> impl Iterator<Item = (&'static str, &'static str)> {
    CHAR_ESCAPES
        .into_iter()
        .chain(std::iter::once(UNDERSCORE_ESCAPE))
}

/// True if `candidate` carries the namespace token, i.e. names something installable rather than
/// being a bare package-name guess.
pub fn is_namespaced(candidate: &str) -> bool {
    candidate.starts_with(NAMESPACE_PREFIX)
}

/// Recover a human-readable package identifier from its mangled label form.
///
/// Strips the namespace token, decodes markers in table order, lower-cases, then turns any raw
/// hyphen left over into an underscore (for identifiers that were never escaped).
pub fn demangle(mangled: &str) -> String {
    let mut out = mangled
        .strip_prefix(NAMESPACE_PREFIX)
        .unwrap_or(mangled)
        .to_string();

    for (raw, marker) in escape_table() {
        if out.contains(marker) {
            out = out.replace(marker, raw);
        }
    }

    out.to_lowercase().replace('-', "_")
}

/// Encode `raw` into the label alphabet, namespace token included.
pub fn mangle(raw: &str) -> String {
    let mut out = String::with_capacity(NAMESPACE_PREFIX.len() + raw.len() * 2);
    out.push_str(NAMESPACE_PREFIX);

    let mut buf = [0u8; 4];
    for c in raw.chars() {
        let c = &*c.encode_utf8(&mut buf);
        match escape_table().find(|(r, _)| *r == c) {
            Some((_, marker)) => out.push_str(marker),
            None => out.push_str(c),
        }
    }
    out
}
