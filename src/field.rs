use std::fmt;

use crate::arch::ArchString;
use crate::package::{Package, PackageBase};

/// What a key means to the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Field {
    /// `pkgbase`, opens the package base.
    Pkgbase,
    /// `pkgname`, opens a new split package.
    Pkgname,
    /// Only valid under `pkgbase`.
    Base(BaseField),
    /// Valid under `pkgbase` or any `pkgname`.
    Shared(SharedField),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum BaseField {
    Pkgver,
    Pkgrel,
    Epoch,
    Source,
    ValidPgpKeys,
    NoExtract,
    Md5Sums,
    Sha1Sums,
    Sha224Sums,
    Sha256Sums,
    Sha384Sums,
    Sha512Sums,
    MakeDepends,
    CheckDepends,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum SharedField {
    Pkgdesc,
    Url,
    License,
    Install,
    Changelog,
    Groups,
    Arch,
    Backup,
    Depends,
    OptDepends,
    Conflicts,
    Provides,
    Replaces,
    Options,
}

impl Field {
    /// Resolve a key name (without architecture suffix) and its suffix.
    ///
    /// Returns `None` for unknown names and for a suffix on a field that is
    /// not architecture dependent.
    pub(crate) fn lookup(name: &str, arch: &str) -> Option<Field> {
        let field = match name {
            "pkgbase" => Field::Pkgbase,
            "pkgname" => Field::Pkgname,
            "pkgver" => Field::Base(BaseField::Pkgver),
            "pkgrel" => Field::Base(BaseField::Pkgrel),
            "epoch" => Field::Base(BaseField::Epoch),
            "source" => Field::Base(BaseField::Source),
            "validpgpkeys" => Field::Base(BaseField::ValidPgpKeys),
            "noextract" => Field::Base(BaseField::NoExtract),
            "md5sums" => Field::Base(BaseField::Md5Sums),
            "sha1sums" => Field::Base(BaseField::Sha1Sums),
            "sha224sums" => Field::Base(BaseField::Sha224Sums),
            "sha256sums" => Field::Base(BaseField::Sha256Sums),
            "sha384sums" => Field::Base(BaseField::Sha384Sums),
            "sha512sums" => Field::Base(BaseField::Sha512Sums),
            "makedepends" => Field::Base(BaseField::MakeDepends),
            "checkdepends" => Field::Base(BaseField::CheckDepends),
            "pkgdesc" => Field::Shared(SharedField::Pkgdesc),
            "url" => Field::Shared(SharedField::Url),
            "license" => Field::Shared(SharedField::License),
            "install" => Field::Shared(SharedField::Install),
            "changelog" => Field::Shared(SharedField::Changelog),
            "groups" => Field::Shared(SharedField::Groups),
            "arch" => Field::Shared(SharedField::Arch),
            "backup" => Field::Shared(SharedField::Backup),
            "depends" => Field::Shared(SharedField::Depends),
            "optdepends" => Field::Shared(SharedField::OptDepends),
            "conflicts" => Field::Shared(SharedField::Conflicts),
            "provides" => Field::Shared(SharedField::Provides),
            "replaces" => Field::Shared(SharedField::Replaces),
            "options" => Field::Shared(SharedField::Options),
            _ => return None,
        };

        if arch.is_empty() || field.is_arch_dependent() {
            Some(field)
        } else {
            None
        }
    }

    fn is_arch_dependent(self) -> bool {
        match self {
            Field::Pkgbase | Field::Pkgname => false,
            Field::Base(f) => matches!(
                f,
                BaseField::Source
                    | BaseField::Md5Sums
                    | BaseField::Sha1Sums
                    | BaseField::Sha224Sums
                    | BaseField::Sha256Sums
                    | BaseField::Sha384Sums
                    | BaseField::Sha512Sums
                    | BaseField::MakeDepends
                    | BaseField::CheckDepends
            ),
            Field::Shared(f) => matches!(
                f,
                SharedField::Depends
                    | SharedField::OptDepends
                    | SharedField::Conflicts
                    | SharedField::Provides
                    | SharedField::Replaces
            ),
        }
    }
}

impl BaseField {
    /// Store `value` on the package base. Lists append, scalars overwrite.
    pub(crate) fn apply(self, base: &mut PackageBase, arch: &str, value: &str) {
        let tagged = || ArchString::new(arch, value);
        match self {
            BaseField::Pkgver => base.pkgver = value.to_string(),
            BaseField::Pkgrel => base.pkgrel = value.to_string(),
            BaseField::Epoch => base.epoch = value.to_string(),
            BaseField::ValidPgpKeys => base.validpgpkeys.push(value.to_string()),
            BaseField::NoExtract => base.noextract.push(value.to_string()),
            BaseField::Source => base.source.push(tagged()),
            BaseField::Md5Sums => base.md5sums.push(tagged()),
            BaseField::Sha1Sums => base.sha1sums.push(tagged()),
            BaseField::Sha224Sums => base.sha224sums.push(tagged()),
            BaseField::Sha256Sums => base.sha256sums.push(tagged()),
            BaseField::Sha384Sums => base.sha384sums.push(tagged()),
            BaseField::Sha512Sums => base.sha512sums.push(tagged()),
            BaseField::MakeDepends => base.makedepends.push(tagged()),
            BaseField::CheckDepends => base.checkdepends.push(tagged()),
        }
    }
}

impl SharedField {
    /// Store `value` on `pkg`. Lists append, scalars overwrite.
    pub(crate) fn apply(self, pkg: &mut Package, arch: &str, value: &str) {
        let tagged = || ArchString::new(arch, value);
        match self {
            SharedField::Pkgdesc => pkg.pkgdesc = value.to_string(),
            SharedField::Url => pkg.url = value.to_string(),
            SharedField::Install => pkg.install = value.to_string(),
            SharedField::Changelog => pkg.changelog = value.to_string(),
            SharedField::License => pkg.license.push(value.to_string()),
            SharedField::Groups => pkg.groups.push(value.to_string()),
            SharedField::Arch => pkg.arch.push(value.to_string()),
            SharedField::Backup => pkg.backup.push(value.to_string()),
            SharedField::Options => pkg.options.push(value.to_string()),
            SharedField::Depends => pkg.depends.push(tagged()),
            SharedField::OptDepends => pkg.optdepends.push(tagged()),
            SharedField::Conflicts => pkg.conflicts.push(tagged()),
            SharedField::Provides => pkg.provides.push(tagged()),
            SharedField::Replaces => pkg.replaces.push(tagged()),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Field::Pkgbase => "pkgbase",
            Field::Pkgname => "pkgname",
            Field::Base(b) => match b {
                BaseField::Pkgver => "pkgver",
                BaseField::Pkgrel => "pkgrel",
                BaseField::Epoch => "epoch",
                BaseField::Source => "source",
                BaseField::ValidPgpKeys => "validpgpkeys",
                BaseField::NoExtract => "noextract",
                BaseField::Md5Sums => "md5sums",
                BaseField::Sha1Sums => "sha1sums",
                BaseField::Sha224Sums => "sha224sums",
                BaseField::Sha256Sums => "sha256sums",
                BaseField::Sha384Sums => "sha384sums",
                BaseField::Sha512Sums => "sha512sums",
                BaseField::MakeDepends => "makedepends",
                BaseField::CheckDepends => "checkdepends",
            },
            Field::Shared(s) => match s {
                SharedField::Pkgdesc => "pkgdesc",
                SharedField::Url => "url",
                SharedField::License => "license",
                SharedField::Install => "install",
                SharedField::Changelog => "changelog",
                SharedField::Groups => "groups",
                SharedField::Arch => "arch",
                SharedField::Backup => "backup",
                SharedField::Depends => "depends",
                SharedField::OptDepends => "optdepends",
                SharedField::Conflicts => "conflicts",
                SharedField::Provides => "provides",
                SharedField::Replaces => "replaces",
                SharedField::Options => "options",
            },
        };
        f.write_str(s)
    }
}
