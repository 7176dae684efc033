use css_inline::{GlobalKeyword, InvalidKeyword, Keyword as _, ParseError, VerticalAlign};
use std::collections::HashSet;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn catalog_is_the_full_keyword_set() {
    let values: Vec<&str> = VerticalAlign::ALL
        .iter()
        .map(|keyword| keyword.as_str())
        .collect();
    assert_eq!(
        values,
        [
            "baseline",
            "sub",
            "super",
            "text-top",
            "text-bottom",
            "middle",
            "top",
            "bottom",
            "inherit",
            "initial",
            "revert",
            "revert-layer",
            "unset",
        ]
    );
    assert_eq!(VerticalAlign::PROPERTY, "vertical-align");
}

#[test]
fn canonical_values_are_unique() {
    let distinct: HashSet<&str> = VerticalAlign::ALL
        .iter()
        .map(|keyword| keyword.as_str())
        .collect();
    assert_eq!(distinct.len(), VerticalAlign::ALL.len());
}

#[test]
fn every_member_round_trips_through_its_string() {
    for member in VerticalAlign::ALL.iter().copied() {
        let text = member.to_string();
        assert_eq!(text.parse::<VerticalAlign>(), Ok(member));
        assert_eq!(VerticalAlign::try_from(text.as_str()), Ok(member));
        assert_eq!(AsRef::<str>::as_ref(&member), text.as_str());
    }
}

#[test]
fn construction_is_exact() {
    init_logging();
    assert_eq!("top".parse::<VerticalAlign>(), Ok(VerticalAlign::Top));
    assert_eq!(VerticalAlign::Bottom.to_string(), "bottom");
    assert_eq!(
        "Top".parse::<VerticalAlign>(),
        Err(InvalidKeyword::new("vertical-align", "Top"))
    );
    assert_eq!(
        " top".parse::<VerticalAlign>(),
        Err(InvalidKeyword::new("vertical-align", " top"))
    );
    assert_eq!(
        "center".parse::<VerticalAlign>(),
        Err(InvalidKeyword::new("vertical-align", "center"))
    );
}

#[test]
fn every_global_keyword_converts() {
    assert_eq!(
        VerticalAlign::try_from_global_keyword(GlobalKeyword::Inherit),
        Ok(VerticalAlign::Inherit)
    );
    for global in GlobalKeyword::ALL.iter().copied() {
        let converted = VerticalAlign::try_from(global);
        assert_eq!(converted.map(VerticalAlign::as_global_keyword), Ok(Some(global)));
    }
}

#[test]
fn unknown_global_keyword_never_reaches_conversion() {
    assert_eq!(
        "foo".parse::<GlobalKeyword>(),
        Err(InvalidKeyword::new("css-wide", "foo"))
    );
}

#[test]
fn declaration_values_use_identifier_matching() {
    init_logging();
    assert_eq!(VerticalAlign::parse_value("middle"), Ok(VerticalAlign::Middle));
    assert_eq!(
        VerticalAlign::parse_value("  TEXT-top "),
        Ok(VerticalAlign::TextTop)
    );
    assert_eq!(
        VerticalAlign::parse_value("/* keep */ super"),
        Ok(VerticalAlign::Super)
    );
    assert_eq!(
        VerticalAlign::parse_value("Revert-Layer"),
        Ok(VerticalAlign::RevertLayer)
    );
}

#[test]
fn malformed_declaration_values_are_rejected() {
    init_logging();
    assert_eq!(
        VerticalAlign::parse_value("top bottom"),
        Err(ParseError::TrailingInput)
    );
    assert_eq!(
        VerticalAlign::parse_value("10px"),
        Err(ParseError::UnexpectedToken)
    );
    assert_eq!(
        VerticalAlign::parse_value("50%"),
        Err(ParseError::UnexpectedToken)
    );
    assert_eq!(VerticalAlign::parse_value(""), Err(ParseError::EndOfInput));
    assert_eq!(
        VerticalAlign::parse_value("centre"),
        Err(ParseError::InvalidKeyword(InvalidKeyword::new(
            "vertical-align",
            "centre"
        )))
    );
}

#[test]
fn rejected_identifiers_keep_their_spelling() {
    init_logging();
    assert_eq!(
        VerticalAlign::parse_value("Centre"),
        Err(ParseError::InvalidKeyword(InvalidKeyword::new(
            "vertical-align",
            "Centre"
        )))
    );
    assert_eq!(
        VerticalAlign::parse_value("  CENTRE ")
            .map_err(|parse_err| parse_err.to_string()),
        Err("`CENTRE` is not a valid vertical-align keyword".to_owned())
    );
    assert_eq!(
        VerticalAlign::from_ident("Text-Middle"),
        Err(InvalidKeyword::new("vertical-align", "Text-Middle"))
    );
}

#[test]
fn parse_errors_describe_the_failure() {
    let err = VerticalAlign::parse_value("centre");
    assert_eq!(
        err.map_err(|parse_err| parse_err.to_string()),
        Err("`centre` is not a valid vertical-align keyword".to_owned())
    );
}

#[test]
fn declaration_is_rendered_verbatim() {
    assert_eq!(
        VerticalAlign::Middle.to_declaration(),
        "vertical-align: middle"
    );
    assert_eq!(
        VerticalAlign::RevertLayer.to_declaration(),
        "vertical-align: revert-layer"
    );
}
