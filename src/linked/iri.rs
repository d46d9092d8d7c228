use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

// RFC 3986 appendix B
static IRI_PARTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:([^:/?#]+):)?(?://([^/?#]*))?([^?#]*)(?:\?([^#]*))?(?:#(.*))?$").unwrap()
});

/// Components of an IRI reference, borrowed from the text as written
#[derive(Debug, Default)]
struct IriParts<'a> {
    scheme: Option<&'a str>,
    authority: Option<&'a str>,
    path: &'a str,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

impl<'a> IriParts<'a> {
    fn split(iri: &'a str) -> Self {
        let Some(caps) = IRI_PARTS.captures(iri) else {
            return IriParts { path: iri, ..Default::default() };
        };
        let part = |i: usize| caps.get(i).map(|m| m.as_str());
        IriParts {
            scheme: part(1),
            authority: part(2),
            path: part(3).unwrap_or(""),
            query: part(4),
            fragment: part(5),
        }
    }

    fn recompose(&self) -> String {
        let mut out = String::new();
        if let Some(scheme) = self.scheme {
            out.push_str(scheme);
            out.push(':');
        }
        if let Some(authority) = self.authority {
            out.push_str("//");
            out.push_str(authority);
        }
        out.push_str(self.path);
        if let Some(query) = self.query {
            out.push('?');
            out.push_str(query);
        }
        if let Some(fragment) = self.fragment {
            out.push('#');
            out.push_str(fragment);
        }
        out
    }
}

/// Resolve `reference` against `base` (RFC 3986 section 5.2).
///
/// Characters are kept as written, nothing is percent-encoded, so a relative
/// reference and its absolute spelling resolve to the same text. Absolute
/// references are returned unchanged. When `base` cannot serve as a base
/// (e.g. `stdin:`), the reference is returned unchanged too.
pub fn resolve(base: &str, reference: &str) -> String {
    if Url::parse(reference).is_ok() {
        return reference.to_string();
    }
    match Url::parse(base) {
        Ok(url) if !url.cannot_be_a_base() => join(base, reference),
        Ok(_) => {
            debug!("Cannot resolve '{}' against opaque base '{}'", reference, base);
            reference.to_string()
        }
        Err(e) => {
            debug!("Cannot resolve '{}' against '{}': {}", reference, base, e);
            reference.to_string()
        }
    }
}

fn join(base: &str, reference: &str) -> String {
    let base = IriParts::split(base);
    let rel = IriParts::split(reference);

    let merged;
    let (authority, path, query) = if rel.authority.is_some() {
        merged = remove_dot_segments(rel.path);
        (rel.authority, merged.as_str(), rel.query)
    } else if rel.path.is_empty() {
        (base.authority, base.path, rel.query.or(base.query))
    } else {
        merged = if rel.path.starts_with('/') {
            remove_dot_segments(rel.path)
        } else {
            remove_dot_segments(&merge_paths(&base, rel.path))
        };
        (base.authority, merged.as_str(), rel.query)
    };

    IriParts {
        scheme: base.scheme,
        authority,
        path,
        query,
        fragment: rel.fragment,
    }
    .recompose()
}

fn merge_paths(base: &IriParts<'_>, path: &str) -> String {
    if base.authority.is_some() && base.path.is_empty() {
        return format!("/{}", path);
    }
    match base.path.rfind('/') {
        Some(slash) => format!("{}{}", &base.path[..=slash], path),
        None => path.to_string(),
    }
}

fn remove_dot_segments(path: &str) -> String {
    let mut output: Vec<&str> = Vec::new();
    let mut input = path;
    while !input.is_empty() {
        if let Some(rest) = input.strip_prefix("../") {
            input = rest;
        } else if let Some(rest) = input.strip_prefix("./") {
            input = rest;
        } else if input.starts_with("/./") {
            input = &input[2..];
        } else if input == "/." {
            input = "/";
        } else if input.starts_with("/../") {
            input = &input[3..];
            output.pop();
        } else if input == "/.." {
            input = "/";
            output.pop();
        } else if input == "." || input == ".." {
            input = "";
        } else {
            // Move the first segment, with its leading slash, to the output
            let start = usize::from(input.starts_with('/'));
            let end = input[start..].find('/').map_or(input.len(), |i| i + start);
            output.push(&input[..end]);
            input = &input[end..];
        }
    }
    output.concat()
}
