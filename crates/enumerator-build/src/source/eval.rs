//! Exact constant evaluation over `syn` expressions.
//!
//! Only the subset that shows up in newtype constant declarations is
//! supported. Integers are arbitrary precision and typed by context: the
//! wrapped primitive of the enclosing newtype, an `as` target, a literal
//! suffix, or `i32` when nothing constrains them. A constant whose value
//! falls outside its primitive's range is unevaluable.

use derive_more::Display;
use num_bigint::{BigInt, Sign};
use std::{collections::HashMap, fmt, str::FromStr};
use syn::{BinOp, Expr, Lit, Member, Path, Type, UnOp};

///
/// ValueKind
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum ValueKind {
    #[display("integral")]
    Int,

    #[display("text")]
    Text,
}

///
/// IntType
/// Width and signedness of a primitive integer.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct IntType {
    pub bits: u32,
    pub signed: bool,
}

impl IntType {
    /// Type of an otherwise unconstrained integer literal.
    pub const I32: Self = Self::new(32, true);

    const fn new(bits: u32, signed: bool) -> Self {
        Self { bits, signed }
    }

    /// `isize` and `usize` take the width of the host running the generator.
    #[must_use]
    pub const fn from_name(name: &str) -> Option<Self> {
        let ty = match name.as_bytes() {
            b"i8" => Self::new(8, true),
            b"i16" => Self::new(16, true),
            b"i32" => Self::new(32, true),
            b"i64" => Self::new(64, true),
            b"i128" => Self::new(128, true),
            b"isize" => Self::new(usize::BITS, true),
            b"u8" => Self::new(8, false),
            b"u16" => Self::new(16, false),
            b"u32" => Self::new(32, false),
            b"u64" => Self::new(64, false),
            b"u128" => Self::new(128, false),
            b"usize" => Self::new(usize::BITS, false),
            _ => return None,
        };

        Some(ty)
    }

    #[must_use]
    pub fn min(self) -> BigInt {
        if self.signed {
            -(BigInt::from(1) << (self.bits - 1))
        } else {
            BigInt::from(0)
        }
    }

    #[must_use]
    pub fn max(self) -> BigInt {
        let magnitude = if self.signed { self.bits - 1 } else { self.bits };

        (BigInt::from(1) << magnitude) - 1
    }

    #[must_use]
    pub fn contains(self, n: &BigInt) -> bool {
        *n >= self.min() && *n <= self.max()
    }

    /// `n as Self`: keep the low `bits` bits, two's complement.
    #[must_use]
    pub fn wrap(self, n: &BigInt) -> BigInt {
        let modulus = BigInt::from(1) << self.bits;
        let mut low = n % &modulus;
        if low.sign() == Sign::Minus {
            low += &modulus;
        }
        if self.signed && low > self.max() {
            low -= modulus;
        }

        low
    }

    /// Bitwise `!` within the type; `None` when `n` is not a value of it.
    #[must_use]
    pub fn not(self, n: &BigInt) -> Option<BigInt> {
        self.contains(n).then(|| self.wrap(&!n))
    }
}

///
/// Primitive
/// What a newtype wraps.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Primitive {
    Int(IntType),
    Text,
}

impl Primitive {
    #[must_use]
    pub const fn kind(self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::Text => ValueKind::Text,
        }
    }

    const fn int(self) -> Option<IntType> {
        match self {
            Self::Int(ty) => Some(ty),
            Self::Text => None,
        }
    }

    // range check only; a kind mismatch is reported by discovery
    fn fits(self, value: &ConstValue) -> bool {
        match (self, value) {
            (Self::Int(ty), ConstValue::Int(n)) => ty.contains(n),
            _ => true,
        }
    }
}

///
/// ConstValue
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum ConstValue {
    Int(BigInt),
    Text(String),
}

impl ConstValue {
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::Text(_) => ValueKind::Text,
        }
    }
}

impl fmt::Display for ConstValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

///
/// ConstKey
/// `(owner, name)`: owner is the impl self type for associated constants.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ConstKey {
    pub owner: Option<String>,
    pub name: String,
}

impl ConstKey {
    pub fn new(owner: Option<&str>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.map(str::to_string),
            name: name.into(),
        }
    }
}

///
/// Evaluator
///
/// Evaluates registered constants, following references between them.
/// Cycles, unsupported expressions, calls to anything but a known newtype
/// constructor and out-of-range results all evaluate to `None`.
///

pub struct Evaluator<'a> {
    newtypes: HashMap<String, Primitive>,
    exprs: HashMap<ConstKey, (&'a Expr, Option<Primitive>)>,
    cache: HashMap<ConstKey, Option<ConstValue>>,
    visiting: Vec<ConstKey>,
}

impl<'a> Evaluator<'a> {
    /// `newtypes` maps each declared newtype name to what it wraps.
    #[must_use]
    pub fn new(newtypes: HashMap<String, Primitive>) -> Self {
        Self {
            newtypes,
            exprs: HashMap::new(),
            cache: HashMap::new(),
            visiting: Vec::new(),
        }
    }

    /// Register the constant `key`, declared with type path `ty`.
    pub fn register(&mut self, key: ConstKey, ty: &[String], expr: &'a Expr) {
        let primitive = type_name(ty, key.owner.as_deref()).and_then(|name| {
            self.newtypes
                .get(name)
                .copied()
                .or_else(|| IntType::from_name(name).map(Primitive::Int))
        });

        self.exprs.insert(key, (expr, primitive));
    }

    /// Value of the constant registered under `key`.
    pub fn value_of(&mut self, key: &ConstKey) -> Option<ConstValue> {
        if let Some(cached) = self.cache.get(key) {
            return cached.clone();
        }
        if self.visiting.contains(key) {
            return None;
        }

        let (expr, primitive) = *self.exprs.get(key)?;
        self.visiting.push(key.clone());
        let value = self
            .eval(expr, key.owner.as_deref(), primitive.and_then(Primitive::int))
            .filter(|value| primitive.is_none_or(|p| p.fits(value)));
        self.visiting.pop();

        self.cache.insert(key.clone(), value.clone());
        value
    }

    // `ty` is the integer type the context imposes on `expr`, if any.
    fn eval(
        &mut self,
        expr: &Expr,
        owner: Option<&str>,
        ty: Option<IntType>,
    ) -> Option<ConstValue> {
        match expr {
            Expr::Lit(lit) => eval_lit(&lit.lit),
            Expr::Paren(inner) => self.eval(&inner.expr, owner, ty),
            Expr::Group(inner) => self.eval(&inner.expr, owner, ty),

            Expr::Cast(cast) => {
                let target = int_type(&cast.ty)?;
                let ConstValue::Int(n) = self.eval(&cast.expr, owner, None)? else {
                    return None;
                };

                Some(ConstValue::Int(target.wrap(&n)))
            }

            Expr::Unary(unary) => {
                let ty = literal_type(&unary.expr).or(ty);
                let ConstValue::Int(n) = self.eval(&unary.expr, owner, ty)? else {
                    return None;
                };

                match unary.op {
                    UnOp::Neg(_) => Some(ConstValue::Int(-n)),
                    UnOp::Not(_) => ty.unwrap_or(IntType::I32).not(&n).map(ConstValue::Int),
                    _ => None,
                }
            }

            Expr::Binary(binary) => {
                let rhs_ty = if matches!(binary.op, BinOp::Shl(_) | BinOp::Shr(_)) {
                    None
                } else {
                    ty
                };
                let ConstValue::Int(lhs) = self.eval(&binary.left, owner, ty)? else {
                    return None;
                };
                let ConstValue::Int(rhs) = self.eval(&binary.right, owner, rhs_ty)? else {
                    return None;
                };

                eval_binary(binary.op, lhs, rhs).map(ConstValue::Int)
            }

            // `Kind(3)` / `Self(3)`
            Expr::Call(call) if call.args.len() == 1 => {
                let Expr::Path(func) = &*call.func else {
                    return None;
                };
                let primitive = self.constructor(&func.path, owner)?;

                self.eval(&call.args[0], owner, primitive.int())
                    .filter(|value| primitive.fits(value))
            }

            // `A.0`, `Self::A.0`
            Expr::Field(field) if matches!(field.member, Member::Unnamed(ref i) if i.index == 0) => {
                self.eval(&field.base, owner, ty)
            }

            Expr::Path(path) if path.qself.is_none() => {
                let key = resolve_path(&path.path, owner)?;
                self.value_of(&key)
            }

            _ => None,
        }
    }

    // What the newtype named by a constructor call wraps.
    fn constructor(&self, path: &Path, owner: Option<&str>) -> Option<Primitive> {
        if path.segments.iter().any(|s| !s.arguments.is_none()) {
            return None;
        }

        let segments = path_segments(path);
        let name = type_name(&segments, owner)?;

        self.newtypes.get(name).copied()
    }
}

/// Integer primitive named by `ty`, if it is one.
#[must_use]
pub fn int_type(ty: &Type) -> Option<IntType> {
    match ty {
        Type::Group(group) => int_type(&group.elem),
        Type::Paren(paren) => int_type(&paren.elem),
        Type::Path(path) if path.qself.is_none() => {
            IntType::from_name(&path.path.get_ident()?.to_string())
        }
        _ => None,
    }
}

// Type name a declared type or constructor path refers to: `T`,
// `self::T`, `crate::T`, or `Self` inside `impl T`.
fn type_name<'s>(segments: &'s [String], owner: Option<&'s str>) -> Option<&'s str> {
    match segments {
        [name] if name == "Self" => owner,
        [name] => Some(name.as_str()),
        [scope, name] if scope == "self" || scope == "crate" => Some(name.as_str()),
        _ => None,
    }
}

fn path_segments(path: &Path) -> Vec<String> {
    path.segments.iter().map(|s| s.ident.to_string()).collect()
}

// `0u8`, `1_i64`
fn literal_type(expr: &Expr) -> Option<IntType> {
    match expr {
        Expr::Lit(lit) => match &lit.lit {
            Lit::Int(int) => IntType::from_name(int.suffix()),
            _ => None,
        },
        Expr::Paren(inner) => literal_type(&inner.expr),
        _ => None,
    }
}

fn eval_lit(lit: &Lit) -> Option<ConstValue> {
    match lit {
        Lit::Int(int) => BigInt::from_str(int.base10_digits())
            .ok()
            .map(ConstValue::Int),
        Lit::Byte(byte) => Some(ConstValue::Int(BigInt::from(byte.value()))),
        Lit::Char(ch) => Some(ConstValue::Int(BigInt::from(u32::from(ch.value())))),
        Lit::Str(s) => Some(ConstValue::Text(s.value())),
        _ => None,
    }
}

fn eval_binary(op: BinOp, lhs: BigInt, rhs: BigInt) -> Option<BigInt> {
    let zero = BigInt::from(0);

    let value = match op {
        BinOp::Add(_) => lhs + rhs,
        BinOp::Sub(_) => lhs - rhs,
        BinOp::Mul(_) => lhs * rhs,
        BinOp::Div(_) if rhs != zero => lhs / rhs,
        BinOp::Rem(_) if rhs != zero => lhs % rhs,
        BinOp::Shl(_) => lhs << usize::try_from(&rhs).ok()?,
        BinOp::Shr(_) => lhs >> usize::try_from(&rhs).ok()?,
        BinOp::BitAnd(_) => lhs & rhs,
        BinOp::BitOr(_) => lhs | rhs,
        BinOp::BitXor(_) => lhs ^ rhs,
        _ => return None,
    };

    Some(value)
}

// Map a constant reference onto its registry key.
fn resolve_path(path: &Path, owner: Option<&str>) -> Option<ConstKey> {
    let segments = path_segments(path);

    match segments.as_slice() {
        [name] => Some(ConstKey::new(None, name.as_str())),
        [scope, name] if scope == "self" || scope == "crate" => {
            Some(ConstKey::new(None, name.as_str()))
        }
        [scope, name] if scope == "Self" => owner.map(|o| ConstKey::new(Some(o), name.as_str())),
        [ty, name] => Some(ConstKey::new(Some(ty.as_str()), name.as_str())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const U8: IntType = IntType::new(8, false);
    const I8: IntType = IntType::new(8, true);

    fn newtypes() -> HashMap<String, Primitive> {
        HashMap::from([
            ("Kind".to_string(), Primitive::Int(IntType::I32)),
            ("Flags".to_string(), Primitive::Int(U8)),
            ("Label".to_string(), Primitive::Text),
        ])
    }

    // evaluate `src` as the value of a constant of type `ty`
    fn eval_as(ty: &str, src: &str) -> Option<ConstValue> {
        let expr: Expr = syn::parse_str(src).unwrap();
        let key = ConstKey::new(None, "X");

        let mut eval = Evaluator::new(newtypes());
        eval.register(key.clone(), &[ty.to_string()], &expr);
        eval.value_of(&key)
    }

    fn eval_str(src: &str) -> Option<ConstValue> {
        eval_as("Kind", src)
    }

    fn int(n: i64) -> Option<ConstValue> {
        Some(ConstValue::Int(BigInt::from(n)))
    }

    #[test]
    fn integer_literals_in_any_base() {
        assert_eq!(eval_str("0x1F"), int(31));
        assert_eq!(eval_str("0o17"), int(15));
        assert_eq!(eval_str("1_000i64"), int(1000));
        assert_eq!(eval_as("Flags", "0b1010_1010u8"), int(170));
    }

    #[test]
    fn arithmetic_and_bit_ops() {
        assert_eq!(eval_str("-(1 << 4) + 3"), int(-13));
        assert_eq!(eval_str("(0xF0 | 0x0F) ^ 0xFF"), int(0));
        assert_eq!(eval_str("7 / 2 * 2 + 7 % 2"), int(7));
        assert_eq!(eval_str("-7 / 2"), int(-3));
        assert_eq!(eval_str("!0"), int(-1));
    }

    #[test]
    fn not_follows_the_wrapped_primitive() {
        assert_eq!(eval_as("Flags", "Flags(!0)"), int(255));
        assert_eq!(eval_as("Flags", "Flags(!0x0F)"), int(0xF0));
        assert_eq!(eval_as("Kind", "Kind(!0)"), int(-1));
        assert_eq!(eval_str("!0u8 as i32"), int(255));
    }

    #[test]
    fn casts_truncate_to_the_target() {
        assert_eq!(eval_as("Flags", "Flags(0x1FF as u8)"), int(255));
        assert_eq!(eval_str("300 as u8"), int(44));
        assert_eq!(eval_str("200 as i8"), int(-56));
        assert_eq!(eval_str("-1 as u16"), int(65535));
        assert_eq!(eval_str("1 as f32"), None);
    }

    #[test]
    fn out_of_range_values_are_unevaluable() {
        assert_eq!(eval_as("Flags", "Flags(256)"), None);
        assert_eq!(eval_as("Flags", "Flags(-1)"), None);
        assert_eq!(eval_as("Kind", "Kind(2147483648)"), None);
        assert_eq!(eval_as("Kind", "Kind(-2147483648)"), int(-2_147_483_648));
    }

    #[test]
    fn plain_primitive_constants_are_typed() {
        assert_eq!(eval_as("u8", "!0"), int(255));
        assert_eq!(eval_as("i8", "128"), None);
    }

    #[test]
    fn int_type_ranges() {
        assert_eq!(U8.max(), BigInt::from(255));
        assert_eq!(I8.min(), BigInt::from(-128));
        assert_eq!(I8.wrap(&BigInt::from(128)), BigInt::from(-128));
        assert_eq!(U8.not(&BigInt::from(256)), None);
        assert_eq!(IntType::from_name("u128").map(IntType::max), Some(BigInt::from(u128::MAX)));
        assert_eq!(IntType::from_name("f64"), None);
    }

    #[test]
    fn division_by_zero_is_unevaluable() {
        assert_eq!(eval_str("1 / 0"), None);
        assert_eq!(eval_str("1 % 0"), None);
    }

    #[test]
    fn constructors_must_name_a_newtype() {
        assert_eq!(
            eval_as("Label", "Label(\"hi\")"),
            Some(ConstValue::Text("hi".to_string()))
        );
        assert_eq!(eval_str("Kind(b'a')"), int(97));
        assert_eq!(eval_str("Kind(double(3))"), None);
        assert_eq!(eval_str("double(3)"), None);
        assert_eq!(eval_str("Other(3)"), None);
        assert_eq!(
            eval_str("Kind(\"hi\")"),
            Some(ConstValue::Text("hi".to_string()))
        );
    }

    #[test]
    fn exceeds_native_width() {
        let value = eval_as("Wide", "340282366920938463463374607431768211455 + 1").unwrap();
        assert_eq!(value.to_string(), "340282366920938463463374607431768211456");
    }

    #[test]
    fn references_follow_scope() {
        let base: Expr = syn::parse_str("Self(4)").unwrap();
        let assoc: Expr = syn::parse_str("Self(Self::BASE.0 + 1)").unwrap();
        let free: Expr = syn::parse_str("Kind(Kind::NEXT.0 * 10)").unwrap();

        let mut eval = Evaluator::new(newtypes());
        eval.register(ConstKey::new(Some("Kind"), "BASE"), &["Self".to_string()], &base);
        eval.register(ConstKey::new(Some("Kind"), "NEXT"), &["Self".to_string()], &assoc);
        eval.register(ConstKey::new(None, "TEN"), &["crate".to_string(), "Kind".to_string()], &free);

        assert_eq!(eval.value_of(&ConstKey::new(None, "TEN")), int(50));
    }

    #[test]
    fn cycles_are_unevaluable() {
        let a: Expr = syn::parse_str("B + 1").unwrap();
        let b: Expr = syn::parse_str("A + 1").unwrap();

        let mut eval = Evaluator::new(HashMap::new());
        eval.register(ConstKey::new(None, "A"), &[], &a);
        eval.register(ConstKey::new(None, "B"), &[], &b);

        assert_eq!(eval.value_of(&ConstKey::new(None, "A")), None);
    }

    #[test]
    fn text_arithmetic_is_rejected() {
        assert_eq!(eval_str("\"a\" + 1"), None);
        assert_eq!(eval_str("-\"a\""), None);
    }
}
