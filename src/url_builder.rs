use crate::engines::SearchEngineDescriptor;
use crate::file_types::FileTypeCategory;
use crate::options::SearchOptions;
use crate::query::{QueryBuilder, QueryLimits};
use crate::sanitize::sanitize;
use log::debug;

/// Percent-encode a query component. Only `A-Z a-z 0-9 - _ . ~` pass through,
/// so `( ) ! * '` are escaped too; engines decode them to the same query.
pub fn percent_encode(component: &str) -> String {
    urlencoding::encode(component).into_owned()
}

/// Maps a query, an engine and the session options onto a request URL.
#[derive(Debug, Clone, Default)]
pub struct UrlBuilder {
    query: QueryBuilder,
}

impl UrlBuilder {
    pub fn new(limits: QueryLimits) -> Self {
        Self {
            query: QueryBuilder::new(limits),
        }
    }

    pub fn query_builder(&self) -> &QueryBuilder {
        &self.query
    }

    pub fn build(
        &self,
        raw: &str,
        file_type: &FileTypeCategory,
        engine: &SearchEngineDescriptor,
        options: &SearchOptions,
    ) -> String {
        if engine.has_custom_handler {
            let url = format!(
                "{}{}&type={}",
                engine.base_url,
                percent_encode(&sanitize(raw)),
                file_type.result_kind
            );
            debug!("Built {} URL (custom handler): {}", engine.id, url);
            return url;
        }

        let dork = self.query.build(raw, file_type, options);
        let mut url = format!("{}{}", engine.base_url, percent_encode(&dork));

        // Engines without a recency vocabulary get no date filter.
        let recency = engine.recency.as_ref().and_then(|param| {
            param
                .value_for(options.date_filter)
                .map(|value| (param.name, value))
        });
        if let Some((name, value)) = recency {
            url.push('&');
            url.push_str(name);
            url.push('=');
            url.push_str(value);
        } else if !options.date_filter.is_any() {
            debug!(
                "{} has no recency parameter, dropping {} filter",
                engine.id, options.date_filter
            );
        }

        debug!("Built {} URL: {}", engine.id, url);
        url
    }
}

/// Build a request URL with the default query limits.
pub fn build_url(
    raw: &str,
    file_type: &FileTypeCategory,
    engine: &SearchEngineDescriptor,
    options: &SearchOptions,
) -> String {
    UrlBuilder::default().build(raw, file_type, engine, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::EngineCatalog;
    use crate::file_types::FileTypeCatalog;
    use crate::options::{DateFilter, SearchMode};

    #[test]
    fn reserved_marks_are_escaped_and_decode_back() {
        let raw = "(filetype:mkv OR x)!*'";
        let encoded = percent_encode(raw);
        assert_eq!(encoded, "%28filetype%3Amkv%20OR%20x%29%21%2A%27");
        assert_eq!(urlencoding::decode(&encoded).unwrap(), raw);
    }

    fn engine(id: &str) -> &'static SearchEngineDescriptor {
        EngineCatalog::global().resolve(id).unwrap()
    }

    fn category(id: &str) -> &'static FileTypeCategory {
        FileTypeCatalog::global().resolve(id).unwrap()
    }

    #[test]
    fn percent_encode_escapes_reserved_characters() {
        assert_eq!(
            percent_encode(r#"a b:"c"|(d)&e=f"#),
            "a%20b%3A%22c%22%7C%28d%29%26e%3Df"
        );
        assert_eq!(percent_encode("safe-_.~AZaz09"), "safe-_.~AZaz09");
        assert_eq!(percent_encode("é"), "%C3%A9");
    }

    #[test]
    fn custom_handler_uses_plain_phrase_and_result_kind() {
        let url = build_url(
            "  Windows 11 <iso> ",
            category("software"),
            engine("filepursuit"),
            &SearchOptions::default()
                .with_mode(SearchMode::Precise)
                .with_date_filter(DateFilter::PastDay),
        );
        assert_eq!(
            url,
            "https://filepursuit.com/pursuit?q=Windows%2011%20iso&type=archive"
        );
        assert!(!url.contains("intitle"));
    }

    #[test]
    fn dork_url_is_base_plus_encoded_query() {
        let options = SearchOptions::default();
        let url = build_url("abc", category("all"), engine("startpage"), &options);
        let expected = format!(
            "https://www.startpage.com/sp/search?query={}",
            percent_encode(&crate::query::build_query("abc", category("all"), &options))
        );
        assert_eq!(url, expected);
    }

    #[test]
    fn past_week_on_primary_engine() {
        let options = SearchOptions::default().with_date_filter(DateFilter::PastWeek);
        let url = build_url("abc", category("all"), engine("google"), &options);
        assert!(url.ends_with("&tbs=qdr:w"));
    }

    #[test]
    fn recency_vocabulary_per_engine() {
        let options = SearchOptions::default().with_date_filter(DateFilter::PastDay);
        let ddg = build_url("abc", category("all"), engine("duckduckgo"), &options);
        assert!(ddg.ends_with("&df=d"));
        let brave = build_url("abc", category("all"), engine("brave"), &options);
        assert!(brave.ends_with("&freshness=pd"));
    }

    #[test]
    fn engines_without_mapping_drop_recency() {
        let options = SearchOptions::default().with_date_filter(DateFilter::PastWeek);
        let url = build_url("abc", category("all"), engine("yandex"), &options);
        assert!(!url.contains("tbs="));
        assert!(!url.contains("&df="));
        assert!(!url.contains("freshness="));
        assert_eq!(url.matches('&').count(), 0);
    }

    #[test]
    fn any_date_adds_nothing() {
        let url = build_url("abc", category("all"), engine("google"), &SearchOptions::default());
        assert!(!url.contains("tbs="));
    }

    #[test]
    fn configured_limits_reach_the_url() {
        let builder = UrlBuilder::new(QueryLimits {
            max_extensions: 1,
            ..QueryLimits::default()
        });
        let url = builder.build("abc", category("video"), engine("google"), &SearchOptions::default());
        assert!(url.contains(&percent_encode("(filetype:mkv)")));
    }
}
