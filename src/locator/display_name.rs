use url::Url;

pub const CONTENT_SCHEME: &str = "content";

pub trait DisplayNameResolver {
    fn resolve_display_name(&self, locator: &Url) -> Option<String>;
}

pub struct NoResolver;

impl DisplayNameResolver for NoResolver {
    fn resolve_display_name(&self, _locator: &Url) -> Option<String> {
        None
    }
}

// Adapter for callers that hold the provider lookup as a plain function.
pub struct ResolveWith<F>(pub F);

impl<F> DisplayNameResolver for ResolveWith<F>
where
    F: Fn(&Url) -> Option<String>,
{
    fn resolve_display_name(&self, locator: &Url) -> Option<String> {
        (self.0)(locator)
    }
}

// Resolution chain: provider lookup (content scheme only), then the last
// path segment, then "".
pub fn readable_file_name<R: DisplayNameResolver>(resolver: &R, locator: &Url) -> String {
    let mut name = None;
    if locator.scheme() == CONTENT_SCHEME {
        name = resolver.resolve_display_name(locator);
    }
    name.unwrap_or_else(|| last_path_segment(locator))
}

fn last_path_segment(locator: &Url) -> String {
    let path = locator.path();
    match path.rfind('/') {
        Some(cut) => path[cut + 1..].to_string(),
        None => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_provider_name_wins_for_content_scheme() {
        let locator = Url::parse("content://media/external/file/123").unwrap();
        let resolver = ResolveWith(|_: &Url| Some("Report.pdf".to_string()));

        assert_eq!(readable_file_name(&resolver, &locator), "Report.pdf");
    }

    #[test]
    fn test_provider_failure_falls_back_to_path_segment() {
        let locator = Url::parse("content://media/external/file/123").unwrap();

        assert_eq!(readable_file_name(&NoResolver, &locator), "123");
    }

    #[test]
    fn test_resolver_not_consulted_for_other_schemes() {
        let locator = Url::parse("file:///docs/notes.txt").unwrap();
        let asked = Cell::new(false);
        let resolver = ResolveWith(|_: &Url| {
            asked.set(true);
            Some("never".to_string())
        });

        assert_eq!(readable_file_name(&resolver, &locator), "notes.txt");
        assert!(!asked.get());
    }

    #[test]
    fn test_empty_path_resolves_to_empty_string() {
        let locator = Url::parse("content://media").unwrap();

        assert_eq!(readable_file_name(&NoResolver, &locator), "");
    }

    #[test]
    fn test_trailing_slash_yields_empty_segment() {
        let locator = Url::parse("file:///docs/").unwrap();

        assert_eq!(readable_file_name(&NoResolver, &locator), "");
    }
}
