use url::Url;

use super::error::{BuildError, Result};
use super::path::{resolve_sub_path, PathParams};
use super::query::QueryValues;

/// Assembles the absolute URL of a request.
///
/// The path is the base URL's own path, then `prefix`, then the resolved
/// `sub_path`. Empty pieces are skipped and no `//` appears where two pieces
/// meet. Any query or fragment already on `base` is dropped; the encoded
/// `query` is attached only when it has at least one pair.
pub fn build_url(
    base: &Url,
    prefix: &str,
    sub_path: &str,
    params: &PathParams,
    query: &QueryValues,
) -> Result<Url> {
    let sub_path = resolve_sub_path(sub_path, params)?;

    if base.cannot_be_a_base() {
        return Err(BuildError::InvalidBaseUrl(base.to_string()));
    }

    let mut url = base.clone();
    url.set_path(&join_path(&[base.path(), prefix, &sub_path]));
    url.set_fragment(None);
    if query.is_empty() {
        url.set_query(None);
    } else {
        url.set_query(Some(&query.encode()));
    }

    Ok(url)
}

fn join_path(pieces: &[&str]) -> String {
    let mut path = String::new();
    for piece in pieces.iter().copied().filter(|p| !p.is_empty() && *p != "/") {
        match (path.ends_with('/'), piece.starts_with('/')) {
            (true, true) => path.push_str(&piece[1..]),
            (false, false) => {
                path.push('/');
                path.push_str(piece);
            }
            _ => path.push_str(piece),
        }
    }
    path
}
