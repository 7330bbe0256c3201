//! Integration tests for the `text` script module
//!
//! Each helper is called the way scripts call it, through `TextEngine`.

use textkit::{Dynamic, TextEngine};

fn eval(script: &str) -> Dynamic {
    let engine = TextEngine::new();
    engine
        .eval(script)
        .unwrap_or_else(|e| panic!("script failed: {:#}\n{}", e, script))
}

fn eval_str(script: &str) -> String {
    eval(script).into_string().unwrap()
}

// =============================================================================
// Case Transforms
// =============================================================================

#[test]
fn test_case_helpers() {
    assert_eq!(eval_str(r#"text::to_upper_case("hello")"#), "HELLO");
    assert_eq!(eval_str(r#"text::to_lower_case("HeLLo")"#), "hello");
    assert_eq!(eval_str(r#"text::capitalize("hello world")"#), "Hello world");
    assert_eq!(eval_str(r#"text::to_title_case("hello WORLD")"#), "Hello World");
}

#[test]
fn test_case_helpers_unicode() {
    assert_eq!(eval_str(r#"text::to_upper_case("straße")"#), "STRASSE");
    assert_eq!(eval_str(r#"text::capitalize("émile")"#), "Émile");
}

// =============================================================================
// Whitespace and Shape
// =============================================================================

#[test]
fn test_trim() {
    assert_eq!(eval_str("text::trim(\"  hi \\n\")"), "hi");
    assert_eq!(eval_str(r#"text::trim("")"#), "");
    assert_eq!(eval_str("text::trim(\"\u{feff} hi \u{3000}\")"), "hi");
    assert_eq!(eval_str("text::trim(\"\u{85}hi\")"), "\u{85}hi");
}

#[test]
fn test_truncate() {
    assert_eq!(eval_str(r#"text::truncate("Hello World", 5)"#), "Hello...");
    assert_eq!(eval_str(r#"text::truncate("Hi", 5)"#), "Hi");
    assert_eq!(eval_str(r#"text::truncate("Hello", 0)"#), "...");
    assert_eq!(eval_str(r#"text::truncate("Hello World", 5.9)"#), "Hello...");
}

#[test]
fn test_word_wrap() {
    assert_eq!(
        eval_str(r#"text::word_wrap("The quick brown fox", 10)"#),
        "The quick\nbrown fox"
    );
    assert_eq!(eval_str(r#"text::word_wrap("VeryLongWord", 4)"#), "VeryLongWord");
    assert_eq!(eval_str(r#"text::word_wrap("short", 20)"#), "short");
}

#[test]
fn test_reverse() {
    assert_eq!(eval_str(r#"text::reverse("abc")"#), "cba");
    assert_eq!(eval_str(r#"text::reverse("añb")"#), "bña");
}

// =============================================================================
// Search and Replace
// =============================================================================

#[test]
fn test_replace_all() {
    assert_eq!(eval_str(r#"text::replace_all("a-b-c", "-", "+")"#), "a+b+c");
    assert_eq!(eval_str(r#"text::replace_all("a.b", ".", "")"#), "ab");
    assert_eq!(eval_str(r#"text::replace_all("abc", "x", "y")"#), "abc");
}

#[test]
fn test_count_occurrences() {
    assert_eq!(eval(r#"text::count_occurrences("banana", "na")"#).as_int().unwrap(), 2);
    assert_eq!(eval(r#"text::count_occurrences("abc", "xyz")"#).as_int().unwrap(), 0);
    assert_eq!(eval(r#"text::count_occurrences("aaa", "a")"#).as_int().unwrap(), 3);
    // the search string is a pattern
    assert_eq!(eval(r#"text::count_occurrences("a1b22", "[0-9]")"#).as_int().unwrap(), 3);
    assert_eq!(eval(r#"text::count_occurrences("a(b", "(")"#).as_int().unwrap(), 0);
    // an empty match right after a match still counts
    assert_eq!(eval(r#"text::count_occurrences("baaa", "a*")"#).as_int().unwrap(), 3);
}

// =============================================================================
// Extraction and Validation
// =============================================================================

#[test]
fn test_extract_numbers() {
    let numbers = eval(r#"text::extract_numbers("Price: $19.99")"#).into_array().unwrap();
    let numbers: Vec<_> = numbers.into_iter().map(|n| n.as_int().unwrap()).collect();
    assert_eq!(numbers, vec![19, 99]);

    let none = eval(r#"text::extract_numbers("no digits")"#).into_array().unwrap();
    assert!(none.is_empty());
}

#[test]
fn test_extract_urls() {
    let urls = eval(r#"text::extract_urls("see https://a.com and http://b.org/x.")"#)
        .into_array()
        .unwrap();
    let urls: Vec<_> = urls.into_iter().map(|u| u.into_string().unwrap()).collect();
    assert_eq!(urls, vec!["https://a.com", "http://b.org/x."]);
}

#[test]
fn test_validation() {
    assert!(eval(r#"text::is_valid_email("test@example.com")"#).as_bool().unwrap());
    assert!(!eval(r#"text::is_valid_email("test@domain")"#).as_bool().unwrap());
    assert!(!eval(r#"text::is_valid_email("a b@c.d")"#).as_bool().unwrap());
    assert!(eval(r#"text::is_alpha("abc")"#).as_bool().unwrap());
    assert!(!eval(r#"text::is_alpha("abc1")"#).as_bool().unwrap());
    assert!(!eval(r#"text::is_alpha("")"#).as_bool().unwrap());
    assert!(!eval(r#"text::is_alpha("é")"#).as_bool().unwrap());
}

// =============================================================================
// Structural Rewrites
// =============================================================================

#[test]
fn test_slugify() {
    assert_eq!(eval_str(r#"text::slugify("__Hello--World__")"#), "hello-world");
    assert_eq!(eval_str(r#"text::slugify("  Rust 2024: What's New?  ")"#), "rust-2024-whats-new");
    assert_eq!(eval_str(r#"text::slugify("!!!")"#), "");
}

#[test]
fn test_remove_special_chars() {
    assert_eq!(eval_str(r#"text::remove_special_chars("a!b@c 1")"#), "abc1");
}

#[test]
fn test_mask_overloads() {
    assert_eq!(eval_str(r#"text::mask("1234567890", 0, 6)"#), "******7890");
    assert_eq!(eval_str(r##"text::mask("1234567890", 6, 10, "#")"##), "123456####");
    assert_eq!(eval_str(r#"text::mask("secret", 2, 100)"#), "se****");
    assert_eq!(eval_str(r#"text::mask("secret", 0, -1)"#), "secret");
    // a non-string mask character falls back to "*"
    assert_eq!(eval_str(r#"text::mask("secret", 0, 2, 7)"#), "**cret");
}

// =============================================================================
// Encoding
// =============================================================================

#[test]
fn test_base64() {
    assert_eq!(eval_str(r#"text::to_base64("Hello")"#), "SGVsbG8=");
    assert_eq!(eval_str(r#"text::from_base64("SGVsbG8=")"#), "Hello");
    assert_eq!(eval_str(r#"text::from_base64(text::to_base64("héllo €"))"#), "héllo €");
    assert_eq!(eval_str(r#"text::from_base64("SGVsbG8")"#), "Hello");
}

// =============================================================================
// Currency
// =============================================================================

#[test]
fn test_to_currency_overloads() {
    assert_eq!(eval_str("text::to_currency(1234.56)"), "$1,234.56");
    assert_eq!(eval_str(r#"text::to_currency(1234.56, "EUR", "de-DE")"#), "1.234,56\u{a0}€");
    assert_eq!(eval_str(r#"text::to_currency(1234.56, "THB", "th-TH")"#), "฿1,234.56");
    assert_eq!(eval_str(r#"text::to_currency(1234.5, "JPY", "ja-JP")"#), "￥1,235");
    assert_eq!(eval_str(r#"text::to_currency("1234.56", "GBP")"#), "£1,234.56");
    assert_eq!(eval_str("text::to_currency(-5)"), "-$5.00");
    assert_eq!(eval_str(r#"text::to_currency(1.2345, "KWD", "en-US")"#), "KWD\u{a0}1.235");
    assert_eq!(eval_str(r#"text::to_currency(1234.56, "RUB", "ru-RU")"#), "1\u{a0}234,56\u{a0}₽");
    assert_eq!(eval_str(r#"text::to_currency(1234.56, "CHF", "de-CH")"#), "CHF\u{a0}1’234.56");
}

#[test]
fn test_to_currency_passthrough() {
    assert_eq!(eval_str(r#"text::to_currency("abc")"#), "abc");
    assert_eq!(eval_str(r#"text::to_currency("abc", "EUR")"#), "abc");
    assert_eq!(eval(r#"text::to_currency(12, "DOLLARS")"#).as_int().unwrap(), 12);
    assert_eq!(eval(r#"text::to_currency(12, "USD", "not a locale")"#).as_int().unwrap(), 12);
    assert!(eval("text::to_currency(())").is_unit());
    // no data for the locale or currency: nothing is guessed
    assert_eq!(eval(r#"text::to_currency(12, "EUR", "de-AT")"#).as_int().unwrap(), 12);
    assert_eq!(eval(r#"text::to_currency(12, "USD", "sw-KE")"#).as_int().unwrap(), 12);
    assert_eq!(eval(r#"text::to_currency(12, "XYZ")"#).as_int().unwrap(), 12);
}

// =============================================================================
// Generation
// =============================================================================

#[test]
fn test_random_overloads() {
    let value = eval_str("text::random(16)");
    assert_eq!(value.chars().count(), 16);
    assert!(value.chars().all(|c| c.is_ascii_alphanumeric()));

    let value = eval_str(r#"text::random(32, "ab")"#);
    assert_eq!(value.len(), 32);
    assert!(value.chars().all(|c| c == 'a' || c == 'b'));

    assert_eq!(eval_str("text::random(2.5)").len(), 3);
    assert_eq!(eval_str("text::random(-1)"), "");
    assert_eq!(eval_str(r#"text::random(4, "")"#), "");
}

#[test]
fn test_random_huge_length_is_catchable() {
    let result = eval_str(
        r#"
        let out = "";
        try {
            out = text::random(1e15);
        } catch (err) {
            out = "caught";
        }
        out
    "#,
    );
    assert_eq!(result, "caught");
}

// =============================================================================
// Scripts
// =============================================================================

#[test]
fn test_helpers_compose_in_scripts() {
    let result = eval_str(
        r#"
        let posts = ["  Hello World ", "Rust & You", 42];
        let slugs = [];
        for p in posts {
            slugs.push(text::slugify(text::trim(p)));
        }
        if slugs[2] != 42 { throw "non-string should pass through"; }
        slugs[0] + "," + slugs[1]
    "#,
    );
    assert_eq!(result, "hello-world,rust-you");
}

#[test]
fn test_log_helpers_are_callable() {
    let result = eval(r#"log("hello"); warn("careful"); debug("details"); 1"#);
    assert_eq!(result.as_int().unwrap(), 1);
}
