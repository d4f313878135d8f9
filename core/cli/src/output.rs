//! Output path derivation.

/// Splits a file name into base and extension on the last dot.
///
/// `"foo.bar"` -> `("foo", "bar")`; a name without a dot keeps everything in
/// the base (`"foo"` -> `("foo", "")`); only the last dot counts
/// (`"foo.bar.baz"` -> `("foo.bar", "baz")`); a trailing dot yields an empty
/// extension.
pub(crate) fn split_file_ext(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(dot) => (&name[..dot], &name[dot + 1..]),
        None => (name, ""),
    }
}

/// Derives the parser and terms file names from the requested output path.
///
/// A `js` or `ts` extension is kept, with the terms file slotting in before
/// it. Any other (or missing) extension is not split off: `.js` and
/// `.terms.js` are appended to the whole original path.
pub(crate) fn output_files(out: &str) -> (String, String) {
    let (base, ext) = split_file_ext(out);
    if ext == "js" || ext == "ts" {
        (format!("{base}.{ext}"), format!("{base}.terms.{ext}"))
    } else {
        (format!("{out}.js"), format!("{out}.terms.js"))
    }
}
