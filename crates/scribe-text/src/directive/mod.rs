//! Inline directive syntax shared by the rewriting stages.
//!
//! A directive is a parenthesized annotation that follows the text it acts on:
//!
//! - `(hex)`, `(bin)`: decode the preceding literal into decimal
//! - `(up)`, `(low)`, `(cap)`: restyle the preceding word
//! - `(up, N)`, `(low, N)`, `(cap, N)`: restyle the preceding `N` words
//!
//! Lines are split once into [`Token`]s by [`tokenize`]. Stages resolve
//! directives by editing word tokens in place and flagging directive tokens
//! as dropped, then [`render`] joins the tokens back into text.

mod parser;
mod token;

pub use parser::{Directive, DirectiveKind, parse_directive};
pub(crate) use parser::tokenize;
pub(crate) use token::{Token, TokenKind, render};
