//! Type annotations as written in source.
//!
//! A type is a name with an optional list of generic arguments, e.g.
//! `Int` or `Map<Int, List<Str>>`. Nothing is resolved here.

use std::fmt::Display;

#[derive(Debug, PartialEq)]
pub struct TypeNode<'a> {
    pub name: &'a str,
    pub type_args: &'a [&'a TypeNode<'a>],
}

impl TypeNode<'_> {
    pub fn is_generic(&self) -> bool {
        !self.type_args.is_empty()
    }
}

impl Display for TypeNode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        if self.is_generic() {
            write!(f, "<")?;
            for (i, arg) in self.type_args.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", arg)?;
            }
            write!(f, ">")?;
        }
        Ok(())
    }
}
