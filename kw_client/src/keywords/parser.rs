use kw_interface::requests::CompletionResponse;

/// Turns a completion response into keyword strings.
///
/// Returns `None` when the response has nothing usable. Implementations log why.
pub trait KeywordParser: Send + Sync {
    fn parse(&self, response: &CompletionResponse) -> Option<Vec<String>>;
}

/// Scrapes responses shaped like `<preamble>: <kw1>, <kw2>, ...`.
///
/// Everything after the first `": "` is split on `", "`. This is a fixed-format scrape,
/// not a grammar, with known fragilities:
///
/// - Keywords that contain `", "` themselves get split apart.
/// - A response that reorders or drops the preamble gives `None`.
/// - Blank segments (`"Rust, , Go"`) are dropped rather than emitted as empty keywords,
///   so an answer list with nothing but blanks gives `None`.
#[derive(Clone, Debug)]
pub struct DelimitedKeywordParser {
    pub preamble_delimiter: String,
    pub keyword_delimiter: String,
}

impl Default for DelimitedKeywordParser {
    fn default() -> Self {
        Self {
            preamble_delimiter: ": ".to_string(),
            keyword_delimiter: ", ".to_string(),
        }
    }
}

impl KeywordParser for DelimitedKeywordParser {
    fn parse(&self, response: &CompletionResponse) -> Option<Vec<String>> {
        let Some(choices) = response.choices.as_ref() else {
            tracing::error!("keywords_from: response missing choices key-value");
            return None;
        };
        let Some(choice) = choices.first() else {
            tracing::error!("keywords_from: no choices found in response: {:?}", response);
            return None;
        };
        let Some(text) = choice.text.as_deref() else {
            tracing::error!("keywords_from: response missing choices.text key-value");
            return None;
        };

        // e.g. "\nanswers: Apache Arrow, Neo4j, Graph Projections"
        let Some((_, answers)) = text.split_once(self.preamble_delimiter.as_str()) else {
            tracing::error!(
                "keywords_from: no {:?} delimiter in response text: {:?}",
                self.preamble_delimiter,
                text
            );
            return None;
        };
        let keywords: Vec<String> = answers
            .split(self.keyword_delimiter.as_str())
            .filter(|keyword| !keyword.trim().is_empty())
            .map(str::to_string)
            .collect();
        if keywords.is_empty() {
            tracing::error!("keywords_from: empty keyword list in response text: {:?}", text);
            return None;
        }
        Some(keywords)
    }
}
