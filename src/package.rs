use crate::arch::ArchString;

/// Fields that a split package may override in its `package_<name>`
/// function.
///
/// On the package base these are the defaults shared by every package.
/// On a split package they are overrides only: an empty string or list
/// means the value is inherited, so a package can not clear an inherited
/// field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Package {
    /// One line description (`pkgdesc`).
    pub pkgdesc: String,
    /// Architectures the package builds on (`arch`).
    pub arch: Vec<String>,
    /// Upstream URL (`url`).
    pub url: String,
    /// Licenses (`license`).
    pub license: Vec<String>,
    /// Package groups (`groups`).
    pub groups: Vec<String>,
    /// Runtime dependencies (`depends`).
    pub depends: Vec<ArchString>,
    /// Optional dependencies (`optdepends`).
    pub optdepends: Vec<ArchString>,
    /// Virtual provisions (`provides`).
    pub provides: Vec<ArchString>,
    /// Conflicting packages (`conflicts`).
    pub conflicts: Vec<ArchString>,
    /// Packages made obsolete by this one (`replaces`).
    pub replaces: Vec<ArchString>,
    /// Files preserved as `.pacsave` on removal (`backup`).
    pub backup: Vec<String>,
    /// makepkg options (`options`).
    pub options: Vec<String>,
    /// Install script path (`install`).
    pub install: String,
    /// Changelog path (`changelog`).
    pub changelog: String,
}

impl Package {
    /// Overlay `split` onto `self`, field by field.
    ///
    /// Every non-empty field of `split` replaces the corresponding field of
    /// `self`; empty fields keep the value from `self`. Lists are replaced
    /// whole, never concatenated.
    ///
    /// # Examples
    ///
    /// ```
    /// use srcinfo::Package;
    ///
    /// let base = Package {
    ///     pkgdesc: "A tool".to_string(),
    ///     license: vec!["MIT".to_string()],
    ///     ..Default::default()
    /// };
    /// let split = Package {
    ///     pkgdesc: "A tool (docs)".to_string(),
    ///     ..Default::default()
    /// };
    /// let merged = base.overlay(&split);
    /// assert_eq!(merged.pkgdesc, "A tool (docs)");
    /// assert_eq!(merged.license, vec!["MIT"]);
    /// ```
    pub fn overlay(&self, split: &Package) -> Package {
        Package {
            pkgdesc: pick_str(&split.pkgdesc, &self.pkgdesc),
            arch: pick_list(&split.arch, &self.arch),
            url: pick_str(&split.url, &self.url),
            license: pick_list(&split.license, &self.license),
            groups: pick_list(&split.groups, &self.groups),
            depends: pick_list(&split.depends, &self.depends),
            optdepends: pick_list(&split.optdepends, &self.optdepends),
            provides: pick_list(&split.provides, &self.provides),
            conflicts: pick_list(&split.conflicts, &self.conflicts),
            replaces: pick_list(&split.replaces, &self.replaces),
            backup: pick_list(&split.backup, &self.backup),
            options: pick_list(&split.options, &self.options),
            install: pick_str(&split.install, &self.install),
            changelog: pick_str(&split.changelog, &self.changelog),
        }
    }
}

fn pick_str(over: &str, base: &str) -> String {
    let chosen = if over.is_empty() { base } else { over };
    chosen.to_string()
}

fn pick_list<T: Clone>(over: &[T], base: &[T]) -> Vec<T> {
    let chosen = if over.is_empty() { base } else { over };
    chosen.to_vec()
}

/// Fields that only the package base may set.
///
/// These come from the global scope of a PKGBUILD and can not be changed
/// per split package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageBase {
    /// Name of the package base (`pkgbase`).
    pub pkgbase: String,
    /// Split package names in declaration order (`pkgname`).
    pub pkgnames: Vec<String>,
    pub pkgver: String,
    pub pkgrel: String,
    pub epoch: String,
    /// Source files and URLs (`source`).
    pub source: Vec<ArchString>,
    /// Trusted PGP fingerprints (`validpgpkeys`).
    pub validpgpkeys: Vec<String>,
    /// Sources that are not extracted (`noextract`).
    pub noextract: Vec<String>,
    pub md5sums: Vec<ArchString>,
    pub sha1sums: Vec<ArchString>,
    pub sha224sums: Vec<ArchString>,
    pub sha256sums: Vec<ArchString>,
    pub sha384sums: Vec<ArchString>,
    pub sha512sums: Vec<ArchString>,
    /// Build-time dependencies (`makedepends`).
    pub makedepends: Vec<ArchString>,
    /// Test suite dependencies (`checkdepends`).
    pub checkdepends: Vec<ArchString>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Package {
        Package {
            pkgdesc: "base desc".to_string(),
            arch: vec!["x86_64".to_string()],
            url: "https://example.org".to_string(),
            license: vec!["GPL".to_string()],
            depends: vec![ArchString::new("", "glibc")],
            install: "foo.install".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_override_inherits_everything() {
        let base = base();
        assert_eq!(base.overlay(&Package::default()), base);
    }

    #[test]
    fn scalar_override() {
        let split = Package {
            pkgdesc: "docs".to_string(),
            ..Default::default()
        };
        let merged = base().overlay(&split);
        assert_eq!(merged.pkgdesc, "docs");
        assert_eq!(merged.url, "https://example.org");
        assert_eq!(merged.install, "foo.install");
    }

    #[test]
    fn list_override_replaces_wholesale() {
        let split = Package {
            depends: vec![ArchString::new("", "foo"), ArchString::new("i686", "bar")],
            ..Default::default()
        };
        let merged = base().overlay(&split);
        assert_eq!(merged.depends, split.depends);
        assert_eq!(merged.license, vec!["GPL"]);
    }

    #[test]
    fn override_onto_empty_base() {
        let split = Package {
            changelog: "ChangeLog".to_string(),
            options: vec!["!strip".to_string()],
            ..Default::default()
        };
        let merged = Package::default().overlay(&split);
        assert_eq!(merged, split);
    }
}
