//! Parser for Arch Linux `.SRCINFO` files, as generated by `makepkg
//! --printsrcinfo`.
//!
//! A srcinfo describes one package base and the split packages built from
//! it. Fields under `pkgbase` apply to every package; fields under a
//! `pkgname` override them for that package only.
//!
//! # Overview
//!
//! The format is line based: every line is `key = value`, blank lines and
//! `#` comments are ignored and indentation carries no meaning. Architecture
//! dependent fields carry the architecture as a key suffix, e.g.
//! `source_x86_64`.
//!
//! This crate only parses; it does not interpret values. Dependency
//! strings, versions and architectures are kept as plain strings for other
//! tools to handle.
//!
//! # Examples
//!
//! ```
//! use srcinfo::Srcinfo;
//!
//! let input = "\
//! pkgbase = foo
//! \tpkgver = 1.0
//! \tpkgrel = 1
//! \tdepends = glibc
//! \tdepends_x86_64 = lib32-glibc
//!
//! pkgname = foo
//!
//! pkgname = foo-docs
//! \tpkgdesc = Documentation for foo
//! ";
//! let srcinfo = Srcinfo::parse(input).unwrap();
//! assert_eq!(srcinfo.base.pkgver, "1.0");
//!
//! let docs = srcinfo.split_package("foo-docs").unwrap();
//! assert_eq!(docs.pkgdesc, "Documentation for foo");
//! assert_eq!(docs.depends[1].arch, "x86_64");
//! ```

mod arch;
mod error;
mod field;
mod package;
mod parser;
mod scanner;
mod srcinfo;

// Re-export public types
pub use arch::ArchString;
pub use error::{Error, ErrorKind, Malformed, ParseError, Result};
pub use package::{Package, PackageBase};
pub use scanner::{scan, Entry};
pub use srcinfo::Srcinfo;
