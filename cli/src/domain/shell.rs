//! POSIX shell quoting.
//!
//! Every command built for a host, whether run directly or embedded in a
//! manifest, goes through these helpers.

/// Single-quote `s` for POSIX sh.
#[must_use]
pub fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

/// Quote and join an argument vector into one command line.
#[must_use]
pub fn join_quoted(args: &[&str]) -> String {
    args.iter().map(|a| quote(a)).collect::<Vec<_>>().join(" ")
}

/// Quote `path` but leave `*` and `?` bare so the shell expands them.
#[must_use]
pub fn glob_quote(path: &str) -> String {
    let mut out = String::new();
    let mut literal = String::new();
    for c in path.chars() {
        if c == '*' || c == '?' {
            if !literal.is_empty() {
                out.push_str(&quote(&literal));
                literal.clear();
            }
            out.push(c);
        } else {
            literal.push(c);
        }
    }
    if !literal.is_empty() {
        out.push_str(&quote(&literal));
    }
    out
}
