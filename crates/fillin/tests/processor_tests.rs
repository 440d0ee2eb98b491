use std::collections::HashMap;

use fillin::{Context, Date, DateFormatter, Processor, Value};
use proptest::prelude::*;

struct TestSnippet;

impl fillin::Snippet for TestSnippet {
    fn expand(&self, _processor: &Processor, args: &[&str]) -> String {
        format!("This is my-snippet.{}", args.first().copied().unwrap_or(""))
    }
}

fn test_processor() -> Processor {
    let mut test_object = HashMap::new();
    test_object.insert("name".to_string(), Value::from("testObjectName"));
    test_object.insert(
        "aDate".to_string(),
        Value::from(Date::from_unix(1609459200).unwrap()),
    );

    let context = Context::new()
        .with_object("testObject", test_object)
        .with_snippet("textSnippet", "This is text snippet.")
        .with_dynamic_snippet("mySnippet", TestSnippet)
        .with_formatter("date", DateFormatter);

    Processor::new(context, "en")
}

#[test]
fn snippet_with_string() {
    let processor = test_processor();
    let result = processor.process("This is the output: {{textSnippet}}");
    assert_eq!(result, "This is the output: This is text snippet.");
}

#[test]
fn snippet_with_snippet() {
    let processor = test_processor();
    let result = processor.process("This is the output: {{mySnippet}}");
    assert_eq!(result, "This is the output: This is my-snippet.");
}

#[test]
fn snippet_with_parameter() {
    let processor = test_processor();
    let result = processor.process("This is the output: {{mySnippet:aParameter}}");
    assert_eq!(result, "This is the output: This is my-snippet.aParameter");
}

#[test]
fn simple_attribute() {
    let processor = test_processor();
    let result = processor.process("This is the output: {{testObject.name}}");
    assert_eq!(result, "This is the output: testObjectName");
}

#[test]
fn date_formatter_directive() {
    let processor = test_processor();
    let result = processor.process("This is the output: {{testObject.aDate:date:rfc822}}");
    assert_eq!(result, "This is the output: Fri, 01 Jan 2021 00:00:00 +0000");
}

#[test]
fn unknown_key_marker() {
    let processor = test_processor();
    assert_eq!(
        processor.process("{{unknownKey}}"),
        "[Not defined: unknownKey]"
    );
}

#[test]
fn plain_text_between_placeholders_is_preserved() {
    let processor = test_processor();
    let result = processor.process("a {{textSnippet}} b {{testObject.name}} c");
    assert_eq!(result, "a This is text snippet. b testObjectName c");
}

#[test]
fn single_pass_leaves_substituted_braces_alone() {
    let context = Context::new().with_snippet("outer", "literal {{inner}} text");
    let processor = Processor::new(context, "en");
    assert_eq!(processor.process("{{outer}}"), "literal {{inner}} text");
}

#[test]
fn language_switch_affects_localized_output() {
    let greeting = fillin::LocalizedText::new()
        .with("en", "Hello")
        .with("de", "Hallo");
    let context = Context::new().with_snippet("greeting", greeting);
    let mut processor = Processor::new(context, "en");
    assert_eq!(processor.process("{{greeting}}!"), "Hello!");
    processor.set_language("de");
    assert_eq!(processor.process("{{greeting}}!"), "Hallo!");
}

#[test]
fn currency_attribute_per_language() {
    let mut invoice = HashMap::new();
    invoice.insert("total".to_string(), Value::from(1234.5_f64));
    let context = Context::new()
        .with_object("invoice", invoice)
        .with_formatter("currency", fillin::CurrencyFormatter);
    let mut processor = Processor::new(context, "en");
    assert_eq!(
        processor.process("{{invoice.total:currency:EUR}}"),
        "1,234.50 EUR"
    );
    processor.set_language("de");
    assert_eq!(
        processor.process("{{invoice.total:currency:EUR}}"),
        "1.234,50 EUR"
    );
}

#[test]
fn serialized_object_round_trip() {
    #[derive(serde::Serialize)]
    struct Account {
        owner: String,
        balance: f64,
    }

    let context = Context::new()
        .with_serialized(
            "account",
            &Account {
                owner: "Alice".to_string(),
                balance: 12.5,
            },
        )
        .unwrap();
    let processor = Processor::new(context, "en");
    assert_eq!(
        processor.process("{{account.owner}} has {{account.balance}}"),
        "Alice has 12.5"
    );
}

proptest! {
    // Templates without brace pairs are returned byte-for-byte.
    #[test]
    fn identity_for_placeholder_free_templates(template in "[a-zA-Z0-9 .,:;!?_-]*") {
        let processor = test_processor();
        prop_assert_eq!(processor.process(&template), template);
    }

    // Plain text around a known placeholder is preserved in order.
    #[test]
    fn surrounding_text_is_preserved(
        prefix in "[a-zA-Z0-9 ]*",
        suffix in "[a-zA-Z0-9 ]*",
    ) {
        let processor = test_processor();
        let template = format!("{}{{{{textSnippet}}}}{}", prefix, suffix);
        let expected = format!("{}This is text snippet.{}", prefix, suffix);
        prop_assert_eq!(processor.process(&template), expected);
    }
}
