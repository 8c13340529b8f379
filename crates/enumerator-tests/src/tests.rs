use crate::example::*;
use enumerator::{Enumerated, ParseError, Scan, TextMarshal, TextUnmarshal, members, members_after};
use proptest::prelude::*;
use std::str::FromStr;

fn round_trips<T>(all: &[T])
where
    T: Enumerated + TextMarshal + TextUnmarshal + std::fmt::Display + std::fmt::Debug + PartialEq,
{
    for member in all {
        let bytes = member.marshal_text();
        assert_eq!(std::str::from_utf8(&bytes).unwrap(), member.to_string());

        let mut back = T::FIRST;
        back.unmarshal_text(&bytes).unwrap();
        assert_eq!(&back, member);
    }
}

fn cycles<T: Enumerated + std::fmt::Debug + PartialEq + Copy>(all: &[T]) {
    for member in all {
        let mut current = *member;
        for _ in 0..T::LEN {
            current = current.next();
            assert!(current.is_defined());
        }
        assert_eq!(&current, member);
    }
}

//
// Kind
//

const KINDS: [Kind; 3] = [KIND1, KIND2, KIND_X];

#[test]
fn kind_display() {
    assert_eq!(KIND1.to_string(), "Kind1");
    assert_eq!(KIND2.to_string(), "Kind2");
    assert_eq!(KIND_X.to_string(), "Kind3");
    assert_eq!(Kind(7).to_string(), "Kind(7)");
    assert_eq!(Kind(-1).to_string(), "Kind(-1)");
    assert_eq!(format!("{KIND1:>7}"), "  Kind1");
}

#[test]
fn kind_bytes_match_display() {
    for kind in KINDS.into_iter().chain([Kind(7)]) {
        assert_eq!(&*kind.as_bytes(), kind.to_string().as_bytes());
    }
}

#[test]
fn kind_parse() {
    assert_eq!("Kind2".parse::<Kind>(), Ok(KIND2));
    assert_eq!(Kind::from_str("Kind3"), Ok(KIND_X));
    assert_eq!(
        "KIND_X".parse::<Kind>(),
        Err(ParseError::unknown("Kind", "KIND_X"))
    );
    assert_eq!("  ".parse::<Kind>(), Err(ParseError::empty("Kind")));
}

#[test]
fn kind_scan_consumes_one_token() {
    let mut input = " Kind1  Kind3 rest";

    assert_eq!(Kind::scan(&mut input), Ok(KIND1));
    assert_eq!(Kind::scan(&mut input), Ok(KIND_X));
    assert_eq!(input.trim(), "rest");

    let err = Kind::scan(&mut input).unwrap_err();
    assert_eq!(err.to_string(), "unknown Kind value: rest");
}

#[test]
fn kind_marshal_round_trip() {
    round_trips(&KINDS);
}

#[test]
fn kind_unmarshal_failure_keeps_value() {
    let mut kind = KIND2;
    let err = kind.unmarshal_text(b"Kind4").unwrap_err();

    assert_eq!(kind, KIND2);
    assert_eq!(err.input, b"Kind4");
    assert_eq!(err.type_name, "Kind");
}

#[test]
fn kind_next_cycles() {
    assert_eq!(KIND1.next(), KIND2);
    assert_eq!(KIND2.next(), KIND_X);
    assert_eq!(KIND_X.next(), KIND1);
    assert_eq!(Kind(42).next(), KIND1);
    cycles(&KINDS);
}

#[test]
fn kind_is_defined() {
    assert!(KINDS.iter().all(Kind::is_defined));
    assert!(!Kind(3).is_defined());
    assert!(!Kind(-1).is_defined());
}

#[test]
fn kind_enumerated_constants() {
    assert_eq!(Kind::TYPE_NAME, "Kind");
    assert_eq!(<Kind as Enumerated>::FIRST, KIND1);
    assert_eq!(Kind::LEN, 3);
    assert_eq!(members::<Kind>().collect::<Vec<_>>(), KINDS);
}

//
// StrKind
//

const STR_KINDS: [StrKind; 3] = [HELLO, WORLD, BANG];

#[test]
fn str_kind_display_uses_override() {
    assert_eq!(HELLO.to_string(), "Hello");
    assert_eq!(WORLD.to_string(), "World");
    assert_eq!(BANG.to_string(), "Override");
    assert_eq!(StrKind("BADSTR").to_string(), "BADSTR");
}

#[test]
fn str_kind_bytes_match_display() {
    for kind in STR_KINDS.into_iter().chain([StrKind("BADSTR")]) {
        assert_eq!(&*kind.as_bytes(), kind.to_string().as_bytes());
    }
}

#[test]
fn str_kind_parse_by_display_string() {
    assert_eq!("Override".parse::<StrKind>(), Ok(BANG));
    assert_eq!("World".parse::<StrKind>(), Ok(WORLD));

    // the raw text of an overridden member is not a display string
    assert_eq!(
        "Bang".parse::<StrKind>(),
        Err(ParseError::unknown("StrKind", "Bang"))
    );
}

#[test]
fn str_kind_marshal_round_trip() {
    round_trips(&STR_KINDS);
}

#[test]
fn str_kind_unmarshal_failure() {
    let mut kind = HELLO;
    let err = kind.unmarshal_text(b"BADSTR").unwrap_err();

    assert_eq!(kind, HELLO);
    assert_eq!(
        err.to_string(),
        "failed to parse value \"BADSTR\" into StrKind"
    );
}

#[test]
fn str_kind_cycle_and_definedness() {
    assert_eq!(BANG.next(), HELLO);
    assert_eq!(StrKind("BADSTR").next(), HELLO);
    assert!(STR_KINDS.iter().all(StrKind::is_defined));
    assert!(!StrKind("Override").is_defined());
    cycles(&STR_KINDS);
}

//
// Level
//

#[test]
fn level_associated_constants() {
    let all: Vec<Level> = members().collect();

    assert_eq!(all, vec![Level::LOW, Level::MID, Level::HIGH]);
    assert_eq!(Level::MID, Level(5));
    assert_eq!(Level::HIGH.to_string(), "HIGH");
    assert_eq!(Level(0).to_string(), "Level(0)");
    assert_eq!("MID".parse::<Level>(), Ok(Level::MID));
    cycles(&all);
}

#[test]
fn level_successor_is_const() {
    const AFTER_LOW: Level = Level::LOW.next();
    const DEFINED: bool = Level(16).is_defined();

    assert_eq!(AFTER_LOW, Level::MID);
    assert!(DEFINED);
}

//
// Color
//

const COLORS: [Color; 3] = [DEEP_RED, SKY_BLUE, GRASS_GREEN];

#[test]
fn color_uses_kebab_case() {
    assert_eq!(DEEP_RED.to_string(), "deep-red");
    assert_eq!(SKY_BLUE.to_string(), "sky-blue");
    assert_eq!("grass-green".parse::<Color>(), Ok(GRASS_GREEN));
    assert!("GRASS_GREEN".parse::<Color>().is_err());
    round_trips(&COLORS);
    cycles(&COLORS);
}

#[test]
fn color_negative_values() {
    assert!(DEEP_RED.is_defined());
    assert!(!Color(0).is_defined());
    assert_eq!(Color(-2).to_string(), "Color(-2)");
}

proptest! {
    #[test]
    fn kind_definedness_matches_declared_set(raw in any::<i32>()) {
        let kind = Kind(raw);

        prop_assert_eq!(kind.is_defined(), (0..=2).contains(&raw));
        prop_assert!(kind.next().is_defined());
    }

    #[test]
    fn kind_cycle_from_any_seed_visits_all(raw in any::<i32>()) {
        let seen: Vec<Kind> = members_after(&Kind(raw)).collect();

        prop_assert_eq!(seen.len(), Kind::LEN);
        for kind in KINDS {
            prop_assert!(seen.contains(&kind));
        }
    }

    #[test]
    fn undefined_kind_displays_raw_value(raw in 3i32..) {
        let kind = Kind(raw);

        prop_assert_eq!(kind.to_string(), format!("Kind({raw})"));
        prop_assert_eq!(kind.as_bytes().into_owned(), format!("Kind({raw})").into_bytes());
    }

    #[test]
    fn unknown_tokens_name_the_token(token in "[a-z]{1,12}") {
        prop_assert_eq!(token.parse::<Kind>(), Err(ParseError::unknown("Kind", token.clone())));
    }
}
