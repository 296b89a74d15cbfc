use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::package::{Package, PackageBase};
use crate::parser;

/// A parsed `.SRCINFO` file.
///
/// `base` holds the fields only the package base may set, `package` the
/// defaults every split package inherits, and `packages` what each split
/// package overrides. `packages[i]` belongs to `base.pkgnames[i]`.
///
/// Use [`Srcinfo::split_package`] to get the effective fields of one
/// split package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Srcinfo {
    /// Base-only fields.
    pub base: PackageBase,
    /// Package fields set under `pkgbase`.
    pub package: Package,
    /// Per package overrides, parallel to `base.pkgnames`.
    pub packages: Vec<Package>,
}

impl Srcinfo {
    /// Parse the text of a `.SRCINFO` file.
    ///
    /// Parsing stops at the first invalid line; the error carries its
    /// position, its text and the rule it broke.
    ///
    /// # Examples
    ///
    /// ```
    /// use srcinfo::Srcinfo;
    ///
    /// let input = "\
    /// pkgbase = foo
    /// \tpkgver = 1.0
    /// \tpkgrel = 1
    /// \tarch = x86_64
    ///
    /// pkgname = foo
    /// ";
    /// let srcinfo = Srcinfo::parse(input).unwrap();
    /// assert_eq!(srcinfo.base.pkgbase, "foo");
    /// assert_eq!(srcinfo.base.pkgnames, vec!["foo"]);
    /// assert_eq!(srcinfo.package.arch, vec!["x86_64"]);
    /// ```
    pub fn parse(input: &str) -> Result<Srcinfo> {
        Ok(parser::parse(input)?)
    }

    /// Read and parse the `.SRCINFO` file at `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Srcinfo> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|e| Error::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Srcinfo::parse(&data)
    }

    /// Effective fields of the split package `pkgname`.
    ///
    /// Starts from the package base defaults and replaces every field the
    /// package overrides. Fields the package leaves empty are inherited.
    ///
    /// # Examples
    ///
    /// ```
    /// use srcinfo::{Error, Srcinfo};
    ///
    /// let input = "\
    /// pkgbase = foo
    /// \tpkgdesc = Foo
    /// \tlicense = MIT
    /// pkgname = foo
    /// pkgname = foo-docs
    /// \tpkgdesc = Foo documentation
    /// ";
    /// let srcinfo = Srcinfo::parse(input).unwrap();
    ///
    /// let docs = srcinfo.split_package("foo-docs").unwrap();
    /// assert_eq!(docs.pkgdesc, "Foo documentation");
    /// assert_eq!(docs.license, vec!["MIT"]);
    ///
    /// assert!(matches!(
    ///     srcinfo.split_package("bar"),
    ///     Err(Error::UnknownPackage(_))
    /// ));
    /// ```
    pub fn split_package(&self, pkgname: &str) -> Result<Package> {
        let split = self
            .packages()
            .find(|(name, _)| *name == pkgname)
            .map(|(_, pkg)| pkg);

        match split {
            Some(split) => {
                tracing::debug!(pkgname, "resolved split package");
                Ok(self.package.overlay(split))
            }
            None => {
                tracing::debug!(pkgname, "split package not found");
                Err(Error::UnknownPackage(pkgname.to_string()))
            }
        }
    }

    /// Effective fields of every split package, in declaration order.
    pub fn split_packages(&self) -> impl Iterator<Item = (&str, Package)> + '_ {
        self.packages()
            .map(|(name, pkg)| (name, self.package.overlay(pkg)))
    }

    /// The override record of every split package, in declaration order.
    pub fn packages(&self) -> impl Iterator<Item = (&str, &Package)> + '_ {
        self.base
            .pkgnames
            .iter()
            .map(String::as_str)
            .zip(self.packages.iter())
    }
}

impl FromStr for Srcinfo {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Srcinfo::parse(s)
    }
}
