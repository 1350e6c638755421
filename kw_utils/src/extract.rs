/// Pulls `http:`/`https:` tokens out of free text.
///
/// Tokens are whitespace separated. Any trailing run of non-alphanumeric characters is
/// cut from each hit, so `https://x.com!` becomes `https://x.com`. Order follows the
/// text and repeats are kept.
pub fn extract_urls<T: AsRef<str>>(input: T) -> Vec<String> {
    input
        .as_ref()
        .split_whitespace()
        .filter(|token| token.starts_with("http:") || token.starts_with("https:"))
        .map(|token| {
            token
                .trim_end_matches(|c: char| !c.is_alphanumeric())
                .to_string()
        })
        .collect()
}
