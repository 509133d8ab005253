use crate::error::SearchError;
use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;

/// A selectable class of files, mapped onto an extension filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileTypeCategory {
    pub id: &'static str,
    /// `|`-delimited, in authored order. Empty means "no filter".
    pub extensions: &'static str,
    pub label: &'static str,
    /// Category hint understood by the file-search aggregator.
    pub result_kind: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

impl FileTypeCategory {
    /// Extensions in authored order, without empty tokens.
    pub fn extension_list(&self) -> Vec<&'static str> {
        self.extensions
            .split('|')
            .map(str::trim)
            .filter(|ext| !ext.is_empty())
            .collect()
    }

    /// True for the catch-all category.
    pub fn is_unfiltered(&self) -> bool {
        self.extensions.trim().is_empty()
    }
}

pub const ALL_FILES_ID: &str = "all";

pub static FILE_TYPES: &[FileTypeCategory] = &[
    FileTypeCategory {
        id: ALL_FILES_ID,
        extensions: "",
        label: "All Files",
        result_kind: "all",
        icon: "asterisk",
        description: "Search all file types",
    },
    FileTypeCategory {
        id: "video",
        extensions: "mkv|mp4|avi|mov|mpg|wmv|divx|mpeg|webm|flv|m4v|ts|vob",
        label: "Video",
        result_kind: "video",
        icon: "film",
        description: "Movies, TV Shows, Video files",
    },
    FileTypeCategory {
        id: "books",
        extensions: "pdf|epub|mobi|azw3|djvu|cbr|cbz|doc|docx|txt|rtf|odt|chm",
        label: "Books",
        result_kind: "ebook",
        icon: "book-open",
        description: "eBooks, PDFs, Documents",
    },
    FileTypeCategory {
        id: "music",
        extensions: "mp3|flac|wav|aac|ogg|wma|m4a|opus|alac|aiff",
        label: "Music",
        result_kind: "audio",
        icon: "music",
        description: "Music, Audio files",
    },
    FileTypeCategory {
        id: "software",
        extensions: "exe|msi|dmg|pkg|deb|rpm|iso|img|apk|appx|tar|gz|7z|rar|zip",
        label: "Software",
        result_kind: "archive",
        icon: "package",
        description: "Software, Games, ISOs, Archives",
    },
    FileTypeCategory {
        id: "images",
        extensions: "jpg|jpeg|png|gif|bmp|svg|webp|tiff|raw|psd|ai|eps",
        label: "Images",
        result_kind: "picture",
        icon: "image",
        description: "Pictures, Photos, Graphics",
    },
    FileTypeCategory {
        id: "subtitles",
        extensions: "srt|sub|ass|ssa|vtt|idx",
        label: "Subtitles",
        result_kind: "subtitle",
        icon: "subtitles",
        description: "Subtitle files",
    },
];

/// Legacy ids accepted on lookup.
const ALIASES: &[(&str, &str)] = &[("other", ALL_FILES_ID), ("any", ALL_FILES_ID)];

lazy_static! {
    static ref CATALOG: FileTypeCatalog = FileTypeCatalog::new(FILE_TYPES);
}

/// Id-indexed view over the static file type registry.
pub struct FileTypeCatalog {
    categories: &'static [FileTypeCategory],
    by_id: HashMap<&'static str, usize>,
}

impl FileTypeCatalog {
    pub fn new(categories: &'static [FileTypeCategory]) -> Self {
        let by_id = categories
            .iter()
            .enumerate()
            .map(|(idx, category)| (category.id, idx))
            .collect();
        Self { categories, by_id }
    }

    pub fn global() -> &'static FileTypeCatalog {
        &CATALOG
    }

    /// Look up a category by id, case-insensitively.
    pub fn get(&self, id: &str) -> Option<&'static FileTypeCategory> {
        let key = id.trim().to_ascii_lowercase();
        let key = ALIASES
            .iter()
            .find(|(alias, _)| *alias == key)
            .map(|(_, target)| *target)
            .unwrap_or(key.as_str());
        self.by_id.get(key).map(|&idx| &self.categories[idx])
    }

    pub fn resolve(&self, id: &str) -> Result<&'static FileTypeCategory, SearchError> {
        self.get(id)
            .ok_or_else(|| SearchError::UnknownFileType(id.to_string()))
    }

    /// All categories in display order.
    pub fn all(&self) -> &'static [FileTypeCategory] {
        self.categories
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.categories.iter().map(|category| category.id)
    }

    pub fn default_category(&self) -> &'static FileTypeCategory {
        &self.categories[self.by_id[ALL_FILES_ID]]
    }
}
