//! Builder catalog behavior: defaults, chain shapes and rendered messages.

use formcheck_rules::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

async fn messages(chain: &CheckChain, value: Value) -> Vec<String> {
    chain
        .evaluate(&value, ShortCircuit::Continue)
        .await
        .errors
        .into_iter()
        .map(|error| error.message().to_string())
        .collect()
}

// ============================================================================
// DEFAULT FIELDS
// ============================================================================

#[rstest]
#[case(check_url(&UrlConfig::default()), "url")]
#[case(check_phone_number(&PhoneConfig::default()), "phone")]
#[case(check_date(&DateConfig::default()), "date")]
#[case(check_localized_date(&LocalizedDateConfig::default()), "date")]
#[case(check_number(&NumberConfig::default()), "number")]
#[case(check_length(&LengthConfig::default()), "text")]
#[case(check_alphanumeric(&AlphanumericConfig::default()), "text")]
#[case(check_alpha(&AlphaConfig::default()), "text")]
#[case(check_city_name(&CityNameConfig::default()), "city")]
#[case(check_latin_text(&LatinTextConfig::default()), "text")]
#[case(check_credit_card(&CreditCardConfig::default()), "card")]
#[case(check_json(&JsonConfig::default()), "data")]
#[case(check_boolean(&BooleanConfig::default()), "flag")]
#[case(check_array(&ArrayConfig::default()), "items")]
#[case(check_currency(&CurrencyConfig::default()), "amount")]
#[case(check_street_address(&StreetAddressConfig::default()), "address")]
#[case(check_postal_code(&PostalCodeConfig::default()), "postalCode")]
#[case(check_gender(&GenderConfig::default()), "gender")]
#[case(check_timezone(&TimezoneConfig::default()), "timezone")]
#[case(check_enum(&EnumConfig::default()), "role")]
#[case(check_name(&NameConfig::default()), "name")]
#[case(check_email(&EmailConfig::default()), "email")]
#[case(check_localized_email(&LocalizedEmailConfig::default()), "email")]
#[case(check_password(&PasswordConfig::default()), "password")]
fn test_default_fields(#[case] chain: CheckChain, #[case] field: &str) {
    assert_eq!(chain.field(), field);
    assert!(!chain.is_empty());
    assert!(chain.iter().all(|check| check.field() == field));
    assert!(!chain.has_async());
}

// ============================================================================
// RENDERED MESSAGES
// ============================================================================

#[tokio::test]
async fn test_format_messages() {
    let rendered = [
        messages(&check_url(&UrlConfig::for_field("homepage")), json!("no")).await,
        messages(&check_phone_number(&PhoneConfig::default()), json!("12")).await,
        messages(
            &check_phone_number_by_locale(&PhoneConfig::default().with_locale("fr-FR")),
            json!("12"),
        )
        .await,
        messages(&check_date(&DateConfig::default()), json!("yesterday")).await,
        messages(&check_credit_card(&CreditCardConfig::default()), json!("1234")).await,
    ]
    .concat()
    .join("\n");

    insta::assert_snapshot!(rendered, @r"
    homepage must be a valid URL
    phone must be a valid phone number
    phone must be a valid phone number for locale fr-FR
    date must be a valid date
    card must be a valid credit card number
    ");
}

#[tokio::test]
async fn test_membership_messages_list_allowed_values() {
    let rendered = [
        messages(&check_enum(&EnumConfig::default()), json!("root")).await,
        messages(&check_gender(&GenderConfig::default()), json!("n/a")).await,
        messages(&check_timezone(&TimezoneConfig::default()), json!("Mars/Base")).await,
    ]
    .concat()
    .join("\n");

    insta::assert_snapshot!(rendered, @r"
    Invalid value root for role. Allowed values are: user, admin
    gender must be one of the valid gender options: male, female, non-binary, other
    Mars/Base is not a valid timezone for timezone. Allowed timezones are: Africa/Abidjan, Africa/Cairo, Asia/Kolkata, America/New_York, Europe/London
    ");
}

#[tokio::test]
async fn test_membership_accepts_allowed_values() {
    for role in ["user", "admin"] {
        assert!(messages(&check_enum(&EnumConfig::default()), json!(role)).await.is_empty());
    }
    let custom = check_enum(&EnumConfig::for_field("tier").with_allowed(["gold", "silver"]));
    assert!(messages(&custom, json!("gold")).await.is_empty());
    assert_eq!(
        messages(&custom, json!("user")).await,
        ["Invalid value user for tier. Allowed values are: gold, silver"]
    );
}

// ============================================================================
// COMPOSITE CHAINS
// ============================================================================

#[tokio::test]
async fn test_password_known_values() {
    let chain = check_password(&PasswordConfig::default());
    assert!(messages(&chain, json!("Abcdef1!")).await.is_empty());

    insta::assert_snapshot!(messages(&chain, json!("abcdefgh")).await.join("\n"), @r"
    password must contain at least one uppercase letter
    password must contain at least one number
    password must contain at least one special character
    ");
}

#[tokio::test]
async fn test_password_is_trimmed() {
    let chain = check_password(&PasswordConfig::default());
    assert!(messages(&chain, json!("   Abcdef1!   ")).await.is_empty());
    assert_eq!(
        messages(&chain, json!("  Ab1!  ")).await,
        ["password must be between 8 and 23 characters long"]
    );
}

#[rstest]
#[case("Jane Doe", &[])]
#[case("Jane_Doe", &["name can only contain letters, spaces"])]
#[case("J", &["name must be between 2 and 50 characters long"])]
#[case("  J  ", &["name must be between 2 and 50 characters long"])]
#[tokio::test]
async fn test_name_known_values(#[case] input: &str, #[case] expected: &[&str]) {
    let chain = check_name(&NameConfig::default());
    assert_eq!(messages(&chain, json!(input)).await, expected);
}

#[tokio::test]
async fn test_name_without_spaces() {
    let chain = check_name(&NameConfig::default().allow_spaces(false));
    assert_eq!(
        messages(&chain, json!("Jane Doe")).await,
        ["name can only contain letters"]
    );
}

#[rstest]
#[case("$100.00", true)]
#[case("$7", true)]
#[case("100.00", false)]
#[case("$100.123", false)]
#[case("\u{20ac}100.00", false)]
#[tokio::test]
async fn test_currency_known_values(#[case] input: &str, #[case] valid: bool) {
    let chain = check_currency(&CurrencyConfig::default());
    let failed = messages(&chain, json!(input)).await;
    assert_eq!(failed.is_empty(), valid);
    if !valid {
        assert_eq!(failed, ["amount must be a valid currency amount (e.g., $100.00)"]);
    }
}

#[tokio::test]
async fn test_email_chain_order_and_domains() {
    let chain = check_email(&EmailConfig::default().with_allowed_domains(["gmail.com", "yahoo.com"]));
    assert_eq!(chain.names(), ["email", "required", "domain"]);
    assert!(messages(&chain, json!("jane@yahoo.com")).await.is_empty());
    assert_eq!(
        messages(&chain, json!("jane@hotmail.com")).await,
        ["email must be from an allowed domain (gmail.com, yahoo.com)"]
    );
}

#[tokio::test]
async fn test_non_string_values_are_ordinary_failures() {
    let chain = check_alpha(&AlphaConfig::default());
    for value in [json!(null), json!([1]), json!({"a": 1})] {
        assert_eq!(
            messages(&chain, value).await,
            ["text can only contain alphabetic characters"]
        );
    }
}

#[tokio::test]
async fn test_merged_chains_keep_order() {
    let merged = check_length(&LengthConfig::for_field("handle").with_bounds(3, 8))
        .merge(check_alphanumeric(&AlphanumericConfig::for_field("handle")));
    assert_eq!(merged.names(), ["length", "alphanumeric"]);
    assert_eq!(
        messages(&merged, json!("a_")).await,
        [
            "handle must be between 3 and 8 characters",
            "handle can only contain letters and numbers"
        ]
    );
}

#[tokio::test]
async fn test_merged_chains_across_fields_read_their_own_values() {
    let merged = check_length(&LengthConfig::for_field("a"))
        .merge(check_alpha(&AlphaConfig::for_field("b")));

    let report = run_chains(
        &json!({"a": "abcd", "b": "123"}),
        &[merged],
        ShortCircuit::Continue,
    )
    .await;

    assert!(report.messages("a").is_empty());
    assert_eq!(
        report.messages("b"),
        ["b can only contain alphabetic characters"]
    );
}

// ============================================================================
// LENIENT FORMATS
// ============================================================================

#[rstest]
#[case(json!("42"))]
#[case(json!("\"text\""))]
#[case(json!("null"))]
#[case(json!("true"))]
#[case(json!(42))]
#[tokio::test]
async fn test_json_accepts_scalar_documents(#[case] value: Value) {
    let chain = check_json(&JsonConfig::default());
    assert!(messages(&chain, value).await.is_empty());
}

#[rstest]
#[case("2024-03-01")]
#[case("2024/03/01")]
#[case("2024.03.01")]
#[tokio::test]
async fn test_localized_date_accepts_any_delimiter(#[case] input: &str) {
    let chain = check_localized_date(&LocalizedDateConfig::default());
    assert!(messages(&chain, json!(input)).await.is_empty());
}

#[tokio::test]
async fn test_array_reports_scalars_once() {
    let chain = check_array(&ArrayConfig::default());
    assert_eq!(messages(&chain, json!("a")).await, ["items must be an array"]);
    assert_eq!(messages(&chain, json!([])).await, ["items cannot be empty"]);
}
