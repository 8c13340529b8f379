///
/// Kind
/// integer style enumeration
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Kind(pub i32);

pub const KIND1: Kind = Kind(0);
pub const KIND2: Kind = Kind(1);
pub const KIND_X: Kind = Kind(2); // Kind3

///
/// StrKind
/// string style enumeration
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StrKind(pub &'static str);

pub const HELLO: StrKind = StrKind("Hello");
pub const WORLD: StrKind = StrKind("World");
pub const BANG: StrKind = StrKind("Bang"); // Override

///
/// Level
/// associated constants, one derived from another
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Level(pub u8);

impl Level {
    pub const LOW: Self = Self(1);
    pub const MID: Self = Self(Self::LOW.0 * 5);
    pub const HIGH: Self = Self(0x10);
}

///
/// Color
/// displayed in kebab-case
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Color(pub i16);

pub const DEEP_RED: Color = Color(-1);
pub const SKY_BLUE: Color = Color(2);
pub const GRASS_GREEN: Color = Color(3);

include!(concat!(env!("OUT_DIR"), "/kind_enum.rs"));
include!(concat!(env!("OUT_DIR"), "/str_kind_enum.rs"));
include!(concat!(env!("OUT_DIR"), "/level_enum.rs"));
include!(concat!(env!("OUT_DIR"), "/color_enum.rs"));
