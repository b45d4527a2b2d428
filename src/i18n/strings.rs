/// Static notice strings for one locale.
///
/// These cover the catalog states that must render even when no remote
/// translation table is available (empty month, failed data load), so they
/// ship with the binary instead of being fetched. Strings are raw text;
/// HTML escaping happens at serialization time.
#[derive(Debug, Clone)]
pub struct LocaleStrings {
    // ==================== Catalog Notices ====================
    /// Notice shown when a month's catalog has zero entries
    pub empty_month: &'static str,

    /// Heading shown when the month's data could not be loaded
    pub load_failed: &'static str,

    /// Detail line shown under the failure heading
    /// Placeholders: {error}
    pub load_error_detail: &'static str,
}

// ==================== English Strings ====================

/// English notice strings (canonical)
pub const ENGLISH_STRINGS: LocaleStrings = LocaleStrings {
    empty_month: "No videos for this month.",
    load_failed: "Could not load this month's video data.",
    load_error_detail: "Error: {error}",
};

// ==================== Traditional Chinese Strings ====================

/// Traditional Chinese notice strings
pub const TRADITIONAL_CHINESE_STRINGS: LocaleStrings = LocaleStrings {
    empty_month: "此月份沒有影片。",
    load_failed: "無法載入此月的影片資料。",
    load_error_detail: "錯誤: {error}",
};

// ==================== Japanese Strings ====================

/// Japanese notice strings
pub const JAPANESE_STRINGS: LocaleStrings = LocaleStrings {
    empty_month: "この月の動画はありません。",
    load_failed: "この月の動画データを読み込めませんでした。",
    load_error_detail: "エラー: {error}",
};

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Completeness Tests ====================

    #[test]
    fn test_english_strings_not_empty() {
        assert!(!ENGLISH_STRINGS.empty_month.is_empty());
        assert!(!ENGLISH_STRINGS.load_failed.is_empty());
        assert!(!ENGLISH_STRINGS.load_error_detail.is_empty());
    }

    #[test]
    fn test_traditional_chinese_strings_not_empty() {
        assert!(!TRADITIONAL_CHINESE_STRINGS.empty_month.is_empty());
        assert!(!TRADITIONAL_CHINESE_STRINGS.load_failed.is_empty());
        assert!(!TRADITIONAL_CHINESE_STRINGS.load_error_detail.is_empty());
    }

    #[test]
    fn test_japanese_strings_not_empty() {
        assert!(!JAPANESE_STRINGS.empty_month.is_empty());
        assert!(!JAPANESE_STRINGS.load_failed.is_empty());
        assert!(!JAPANESE_STRINGS.load_error_detail.is_empty());
    }

    // ==================== Placeholder Tests ====================

    #[test]
    fn test_error_detail_has_placeholder() {
        assert!(ENGLISH_STRINGS.load_error_detail.contains("{error}"));
        assert!(TRADITIONAL_CHINESE_STRINGS
            .load_error_detail
            .contains("{error}"));
        assert!(JAPANESE_STRINGS.load_error_detail.contains("{error}"));
    }

    #[test]
    fn test_error_detail_placeholder_substitution() {
        let detail = ENGLISH_STRINGS
            .load_error_detail
            .replace("{error}", "HTTP 404");
        assert_eq!(detail, "Error: HTTP 404");
    }
}
