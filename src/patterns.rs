use crate::options::{ListingPlatform, SearchMode};
use lazy_static::lazy_static;

/// Literal query fragments that bias results toward real directory listings.
pub struct DirectoryPatterns;

impl DirectoryPatterns {
    pub const PRIMARY: &'static str = r#"intitle:"index of""#;
    pub const SECONDARY: &'static str = r#""parent directory""#;
    pub const QUALITY: &'static str = r#""last modified" "size""#;
    pub const APACHE: &'static str = r#"intitle:"Apache" "Index of""#;
    pub const NGINX: &'static str = r#"intitle:"nginx" "Index of""#;
    pub const LISTING: &'static str = r#"intitle:"directory listing""#;

    /// Detection clauses for `mode`, tightest first.
    pub fn for_mode(mode: SearchMode) -> &'static [&'static str] {
        match mode {
            SearchMode::Precise => &[Self::PRIMARY, Self::SECONDARY, Self::QUALITY],
            SearchMode::Balanced => &[Self::PRIMARY, Self::SECONDARY],
            SearchMode::Broad => &[Self::PRIMARY],
        }
    }

    pub fn for_platform(platform: ListingPlatform) -> &'static str {
        match platform {
            ListingPlatform::Apache => Self::APACHE,
            ListingPlatform::Nginx => Self::NGINX,
            ListingPlatform::Generic => Self::LISTING,
        }
    }
}

// Spam and fake-download sites, grouped by what they pretend to offer.
const SPAM_AUDIO: &[&str] = &[
    "mp3raid", "mp3toss", "mp3drug", "freemp3cloud", "listen77", "mp3juices", "mp3skull",
    "mp3clan", "emp3", "tubidy", "beemp3", "mp3direct", "iomoio", "mp3boo", "ytmp3",
];
const SPAM_VIDEO: &[&str] = &[
    "123movies", "fmovies", "putlocker", "solarmovie", "yesmovies", "gomovies", "primewire",
    "movie4k", "watchseries", "couchtuner", "projectfreetv", "rainierland", "sockshare",
    "vodlocker", "vidup",
];
const SPAM_SOFTWARE: &[&str] = &[
    "softonic", "cnet.download", "download.cnet", "filehippo.fake", "brothersoft",
    "softpedia.fake", "freewarefiles", "majorgeeks.fake",
];
const SPAM_AGGREGATORS: &[&str] = &[
    "wallywashis", "downloadmana", "index_of", "index-of", "opendirectory.lol", "filechef",
    "filesearch", "eyeofsauron",
];
const SPAM_MALWARE: &[&str] = &["getintopc.sus", "igetintopc", "filecr.sus", "4download.net"];

/// Dynamic page types that are never plain file listings.
const EXCLUDED_URL_KEYWORDS: &[&str] = &[
    "jsp", "pl", "php", "html", "aspx", "htm", "cf", "shtml", "cgi", "action", "do",
];

pub const FAKE_DOWNLOAD_PHRASES: &[&str] = &[
    "click here to download",
    "fast download",
    "premium download",
    "download now free",
    "survey download",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionCatalog {
    pub excluded_url_keywords: Vec<&'static str>,
    pub excluded_site_tokens: Vec<&'static str>,
}

lazy_static! {
    static ref EXCLUSIONS: ExclusionCatalog = ExclusionCatalog {
        excluded_url_keywords: EXCLUDED_URL_KEYWORDS.to_vec(),
        excluded_site_tokens: [
            SPAM_AUDIO,
            SPAM_VIDEO,
            SPAM_SOFTWARE,
            SPAM_AGGREGATORS,
            SPAM_MALWARE,
        ]
        .concat(),
    };
}

impl ExclusionCatalog {
    pub fn global() -> &'static ExclusionCatalog {
        &EXCLUSIONS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precise_is_superset_of_broad() {
        let precise = DirectoryPatterns::for_mode(SearchMode::Precise);
        let broad = DirectoryPatterns::for_mode(SearchMode::Broad);
        assert!(precise.len() > broad.len());
        assert!(broad.iter().all(|clause| precise.contains(clause)));
    }

    #[test]
    fn site_tokens_keep_group_order() {
        let sites = &ExclusionCatalog::global().excluded_site_tokens;
        assert_eq!(sites.first(), Some(&"mp3raid"));
        assert_eq!(sites.last(), Some(&"4download.net"));
        assert_eq!(
            sites.len(),
            SPAM_AUDIO.len()
                + SPAM_VIDEO.len()
                + SPAM_SOFTWARE.len()
                + SPAM_AGGREGATORS.len()
                + SPAM_MALWARE.len()
        );
    }
}
