#![forbid(unsafe_code)]

//! Built-in Microsoft Japanese style rules
//!
//! The catalog is plain data compiled into the binary. Every entry is turned
//! into a [`StyleRule`](crate::rules::StyleRule) exactly once, when the
//! [`Catalog`](crate::rules::Catalog) is built; the order of this table is the
//! evaluation and reporting order.

use crate::rules::RuleStatus;
use crate::types::Category;

/// Static description of one catalog entry
#[derive(Debug, Clone, Copy)]
pub struct RuleDefinition {
    pub id: &'static str,
    pub category: Category,
    pub status: RuleStatus,
    /// `None` only for rules without detection logic
    pub pattern: Option<&'static str>,
    pub message: &'static str,
}

/// Full-width side of the full/half spacing rule.
///
/// Ideographic punctuation and brackets are excluded: spacing next to them is
/// governed by the dedicated spacing rules below.
macro_rules! full_width_char {
    () => {
        r"[^\x00-\x7F\s。、．，「」『』【】（）［］｛｝〈〉《》〔〕？！：…・]"
    };
}

const SPACES_FULL_HALF: &str = concat!(
    r"[0-9A-Za-z]",
    full_width_char!(),
    "|",
    full_width_char!(),
    r"[0-9A-Za-z]"
);

pub const BUILTIN_RULES: &[RuleDefinition] = &[
    // Characters.Katakana
    RuleDefinition {
        id: "katakana-half-width",
        category: Category::Katakana,
        status: RuleStatus::Active,
        pattern: Some(r"[｡-ﾟ]+"),
        message: "Full-width characters should be used unless it is necessary to use half-width characters.",
    },
    RuleDefinition {
        id: "katakana-ka",
        category: Category::Katakana,
        status: RuleStatus::Active,
        pattern: Some(r"[0-9]+ [ケヶカヵ][年月]"),
        message: "Characters pronounced as “ka” should be written in Hiragana or Kanji.",
    },
    RuleDefinition {
        id: "katakana-ko",
        category: Category::Katakana,
        status: RuleStatus::Active,
        pattern: Some(r"[0-9]+ [ケコ]"),
        message: "Characters pronounced as “ko” should be written in Hiragana or Kanji.",
    },
    // Characters.LongVowel
    //
    // Counting rules (-er/-or/-ar suffixes, words shorter than 4 characters
    // with small kana ignored) need a dictionary of source terms.
    RuleDefinition {
        id: "long-vowel",
        category: Category::LongVowel,
        status: RuleStatus::Unimplemented,
        pattern: None,
        message: "Use a long vowel when the source English term ends in -er, -or or -ar, or when the Katakana word has less than 4 characters.",
    },
    RuleDefinition {
        id: "long-vowel-exception-use",
        category: Category::LongVowel,
        status: RuleStatus::Active,
        // -ュ stems also take ア for agent nouns (インタビュアー)
        pattern: Some(r"(?:インタビュ|プレビュ|レビュ|メニュ)(?:[^ーア]|$)|ツア(?:[^ー]|$)"),
        message: "Use a long vowel for this term; it is listed as an exception to the long vowel rule.",
    },
    RuleDefinition {
        id: "long-vowel-exception-not-use",
        category: Category::LongVowel,
        status: RuleStatus::Active,
        pattern: Some(
            r"(?:コンパイラ|アセンブラ|インタプリタ|デバッガ|プロセッサ|コンストラクタ|デストラクタ|アクセサ)ー",
        ),
        message: "Do not use a long vowel for this term; it is listed as an exception to the long vowel rule.",
    },
    // Characters.EnglishLetters
    RuleDefinition {
        id: "english-letters-full-width",
        category: Category::EnglishLetters,
        status: RuleStatus::Active,
        pattern: Some(r"[Ａ-ｚ０-９]+"),
        message: "Half-width characters should be used unless it is necessary to use full-width characters.",
    },
    // Characters.Spaces
    RuleDefinition {
        id: "spaces-full-half",
        category: Category::Spaces,
        status: RuleStatus::Active,
        pattern: Some(SPACES_FULL_HALF),
        message: "Between characters, a space should be inserted between full-width and half-width characters.",
    },
    RuleDefinition {
        id: "spaces-full-stop",
        category: Category::Spaces,
        status: RuleStatus::Active,
        pattern: Some(r"[。．] | [。．]"),
        message: "Do not insert a space in ideographic full stop (。) and a half-width character.",
    },
    RuleDefinition {
        id: "spaces-comma",
        category: Category::Spaces,
        status: RuleStatus::Active,
        pattern: Some(r"[、，] | [、，]"),
        message: "Do not insert a space in ideographic comma (、) and a half-width character.",
    },
    RuleDefinition {
        id: "spaces-angle",
        category: Category::Spaces,
        status: RuleStatus::Active,
        pattern: Some(r"[0-9]+ °"),
        message: "Do not insert a space in a numeral and unit of angle (°).",
    },
    RuleDefinition {
        id: "spaces-parentheses",
        category: Category::Spaces,
        status: RuleStatus::Active,
        pattern: Some(r"\( | \( |\) | \)"),
        message: "Do not insert a space in each side of text enclosed by parentheses.",
    },
    RuleDefinition {
        id: "spaces-quotation-marks",
        category: Category::Spaces,
        status: RuleStatus::Active,
        pattern: Some(r" \?"),
        message: "Do not insert a space in each side of text enclosed by quotation marks.",
    },
    RuleDefinition {
        id: "spaces-brackets",
        category: Category::Spaces,
        status: RuleStatus::Active,
        pattern: Some(r"[\{\[<「] | [\{\[<「]|[\}\]>」] | [\}\]>」]"),
        message: "Do not insert a space in each side of text enclosed by brackets.",
    },
    RuleDefinition {
        id: "spaces-slash",
        category: Category::Spaces,
        status: RuleStatus::Active,
        pattern: Some(r"/ | /"),
        message: "Do not insert a space in each side of slash.",
    },
    RuleDefinition {
        id: "spaces-full-width",
        category: Category::Spaces,
        status: RuleStatus::Active,
        pattern: Some(r" [？！：…]"),
        message: "Do not insert a space in a full-width character and question mark (?)/exclamation mark (!)/colon (:)/ellipses (...) that ends the term.",
    },
    RuleDefinition {
        id: "spaces-access-key",
        category: Category::Spaces,
        status: RuleStatus::Active,
        pattern: Some(r" \([A-Z]\)"),
        message: "Do not insert a space in a character and access key enclosed by parentheses in the user interface.",
    },
    RuleDefinition {
        id: "spaces-parenthesis",
        category: Category::Spaces,
        status: RuleStatus::Active,
        pattern: Some(r"[!-~]\(|\)[!-~]"),
        message: "Insert a space between a half-width parenthesis and a half-width character outside.",
    },
    RuleDefinition {
        id: "spaces-mark-end-half-start",
        category: Category::Spaces,
        status: RuleStatus::Active,
        pattern: Some(r"[!！?？][!-~]"),
        message: "Insert a space between a question mark/exclamation mark that ends the term and a half-width character that starts the next term.",
    },
    // Numbers
    RuleDefinition {
        id: "numbers-arabic-full-width",
        category: Category::Numbers,
        status: RuleStatus::Active,
        pattern: Some(r"[０-９]+"),
        message: "Arabic numerals should be half-width unless it is necessary to use full-width numerals.",
    },
    RuleDefinition {
        id: "numbers-chinese-numerals",
        category: Category::Numbers,
        status: RuleStatus::Disabled,
        pattern: Some(r"[一二三四五六七八九十壱弐参拾百千万萬億兆〇]+"),
        message: "Use Arabic numerals when the numeral can be replaced by other numerals.",
    },
    RuleDefinition {
        id: "numbers-measurement-units",
        category: Category::Numbers,
        status: RuleStatus::Active,
        pattern: Some(
            r"[0-9]+ (?:キロメートル|メートル|デシメートル|センチメートル|ミリメートル|ミリ|ヘクトリットル|リットル|デシリットル|センチリットル|ミリリットル|トン|キログラム|lb|グラム|デシグラム|センチグラム|ミリグラム|in|ft|mi|gal|テラバイト|ギガバイト|メガバイト|キロバイト|B|b|ビット/秒|ギガヘルツ|メガヘルツ|キロヘルツ|ヘルツ|ドット|ドット/インチ|sec|ms)",
        ),
        message: "Do not use the measurement unit unless necessary.",
    },
    RuleDefinition {
        id: "numbers-measurement-units-without-space",
        category: Category::Numbers,
        status: RuleStatus::Active,
        pattern: Some(r"[0-9] (?:°|%|mm)"),
        message: "Insert a space between the number and the unit except for ones listed under the category “Units without a space” (°, % and mm).",
    },
    // Tone
    RuleDefinition {
        id: "tone-humble-expression",
        category: Category::Tone,
        status: RuleStatus::Active,
        pattern: Some(r"当社|弊社|小社|私ども|させていただ|申し上げ|拝見|拝読|存じ"),
        message: "Do not use humble expressions; address the reader in a neutral polite tone.",
    },
    RuleDefinition {
        id: "tone-polite-expression",
        category: Category::Tone,
        status: RuleStatus::Active,
        pattern: Some(
            r"ご確認ください|ご注意ください|ご利用ください|ご参照ください|ご使用ください|ご入力ください|ご了承ください|くださいませ|でございます|いただけますでしょうか",
        ),
        message: "Do not use excessively polite expressions; use plain polite forms such as 確認してください.",
    },
    // FrequentErrors
    RuleDefinition {
        id: "frequent-errors-fusei",
        category: Category::FrequentErrors,
        status: RuleStatus::Active,
        pattern: Some(r"不正"),
        message: "Do not use 不正 for invalid input; it implies an unlawful act. Use 無効 or 正しくない instead.",
    },
];
