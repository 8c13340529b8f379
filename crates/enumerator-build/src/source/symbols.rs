use super::{
    Binding, ConstDecl, ConstScope, DeclKind, Position, TypeShape,
    eval::{Primitive, int_type},
};
use proc_macro2::{LineColumn, Span};
use std::collections::HashMap;
use syn::{
    Expr, Fields, Generics, ImplItem, Item, ItemImpl, ItemStruct, Type, spanned::Spanned,
};

///
/// Collector
/// Walks top-level items, recording bindings, constant declarations and
/// what each newtype wraps.
///

#[derive(Default)]
pub(super) struct Collector<'a> {
    pub bindings: Vec<Binding>,
    pub consts: Vec<(ConstDecl, &'a Expr)>,
    pub newtypes: HashMap<String, Primitive>,
}

impl<'a> Collector<'a> {
    pub fn collect_file(&mut self, file: &'a syn::File, place: &dyn Fn(LineColumn) -> Position) {
        for item in &file.items {
            self.collect_item(item, place);
        }
    }

    fn collect_item(&mut self, item: &'a Item, place: &dyn Fn(LineColumn) -> Position) {
        match item {
            Item::Struct(s) => {
                let shape = match newtype_primitive(s) {
                    Ok(primitive) => {
                        self.newtypes.insert(s.ident.to_string(), primitive);
                        TypeShape::Newtype(primitive.kind())
                    }
                    Err(reason) => TypeShape::Unsupported(reason),
                };
                self.push_type(&s.ident, shape, place);
                self.push_fields(&s.fields, place);
            }
            Item::Enum(e) => {
                self.push_type(&e.ident, unsupported("an enum"), place);
                for variant in &e.variants {
                    self.push(&variant.ident, DeclKind::Variant, place);
                }
            }
            Item::Union(u) => {
                self.push_type(&u.ident, unsupported("a union"), place);
                for field in &u.fields.named {
                    if let Some(ident) = &field.ident {
                        self.push(ident, DeclKind::Field, place);
                    }
                }
            }
            Item::Type(t) => self.push_type(&t.ident, unsupported("a type alias"), place),
            Item::Trait(t) => self.push(&t.ident, DeclKind::Trait, place),
            Item::Static(s) => self.push(&s.ident, DeclKind::Static, place),
            Item::Fn(f) => self.push(&f.sig.ident, DeclKind::Fn, place),
            Item::Mod(m) => self.push(&m.ident, DeclKind::Mod, place),
            Item::Macro(m) => {
                if let Some(ident) = &m.ident {
                    self.push(ident, DeclKind::Macro, place);
                }
            }

            Item::Const(c) => {
                self.push(&c.ident, DeclKind::Const, place);
                self.consts.push((
                    ConstDecl {
                        name: c.ident.to_string(),
                        ty: type_path(&c.ty),
                        scope: ConstScope::Module,
                        owner: None,
                        pos: place(c.ident.span().start()),
                        group_start: place(c.const_token.span.start()),
                        value: None,
                    },
                    &*c.expr,
                ));
            }

            Item::Impl(imp) if imp.trait_.is_none() => self.collect_impl(imp, place),

            _ => {}
        }
    }

    fn collect_impl(&mut self, imp: &'a ItemImpl, place: &dyn Fn(LineColumn) -> Position) {
        let owner = type_path(&imp.self_ty).last().cloned();
        let group_start = place(imp.impl_token.span.start());

        for item in &imp.items {
            match item {
                ImplItem::Const(c) => {
                    self.push(&c.ident, DeclKind::Const, place);
                    self.consts.push((
                        ConstDecl {
                            name: c.ident.to_string(),
                            ty: type_path(&c.ty),
                            scope: ConstScope::Associated,
                            owner: owner.clone(),
                            pos: place(c.ident.span().start()),
                            group_start,
                            value: None,
                        },
                        &c.expr,
                    ));
                }
                ImplItem::Fn(f) => self.push(&f.sig.ident, DeclKind::Fn, place),
                _ => {}
            }
        }
    }

    fn push(&mut self, ident: &syn::Ident, kind: DeclKind, place: &dyn Fn(LineColumn) -> Position) {
        self.push_at(ident.to_string(), kind, ident.span(), None, place);
    }

    fn push_type(
        &mut self,
        ident: &syn::Ident,
        shape: TypeShape,
        place: &dyn Fn(LineColumn) -> Position,
    ) {
        self.push_at(ident.to_string(), DeclKind::Type, ident.span(), Some(shape), place);
    }

    fn push_at(
        &mut self,
        name: String,
        kind: DeclKind,
        span: Span,
        shape: Option<TypeShape>,
        place: &dyn Fn(LineColumn) -> Position,
    ) {
        self.bindings.push(Binding {
            name,
            kind,
            pos: place(span.start()),
            shape,
        });
    }

    fn push_fields(&mut self, fields: &Fields, place: &dyn Fn(LineColumn) -> Position) {
        for field in fields {
            if let Some(ident) = &field.ident {
                self.push(ident, DeclKind::Field, place);
            }
        }
    }
}

fn unsupported(what: &str) -> TypeShape {
    TypeShape::Unsupported(what.to_string())
}

// Only non-generic single-field tuple structs over an integer or
// `&'static str` can be enumerated.
fn newtype_primitive(s: &ItemStruct) -> Result<Primitive, String> {
    if has_params(&s.generics) {
        return Err("a generic struct".to_string());
    }

    let inner = match &s.fields {
        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => &fields.unnamed[0].ty,
        _ => return Err("not a single-field tuple struct".to_string()),
    };

    classify(inner).ok_or_else(|| {
        format!(
            "a newtype over `{}`",
            quote::ToTokens::to_token_stream(inner)
                .to_string()
                .replace(' ', "")
        )
    })
}

fn has_params(generics: &Generics) -> bool {
    !generics.params.is_empty()
}

fn classify(ty: &Type) -> Option<Primitive> {
    if let Some(int) = int_type(ty) {
        return Some(Primitive::Int(int));
    }

    match ty {
        Type::Group(group) => classify(&group.elem),
        Type::Paren(paren) => classify(&paren.elem),

        Type::Reference(reference) if reference.mutability.is_none() => {
            let is_static = reference
                .lifetime
                .as_ref()
                .is_some_and(|lt| lt.ident == "static");
            let is_str = matches!(
                &*reference.elem,
                Type::Path(p) if p.qself.is_none() && p.path.is_ident("str")
            );

            (is_static && is_str).then_some(Primitive::Text)
        }

        _ => None,
    }
}

// Plain path segments of a type (`Kind`, `crate::Kind`, `Self`); empty otherwise.
fn type_path(ty: &Type) -> Vec<String> {
    match ty {
        Type::Group(group) => type_path(&group.elem),
        Type::Paren(paren) => type_path(&paren.elem),
        Type::Path(path) if path.qself.is_none() => path
            .path
            .segments
            .iter()
            .map(|s| s.ident.to_string())
            .collect(),
        _ => {
            tracing::trace!(span = ?ty.span().start(), "non-path declared type");
            Vec::new()
        }
    }
}
