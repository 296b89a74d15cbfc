use crate::arch::split_arch;
use crate::error::{ErrorKind, ParseError};
use crate::field::Field;
use crate::scanner::{scan, Entry};
use crate::srcinfo::Srcinfo;

/// The header the parser is currently under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Header {
    /// No `pkgbase` seen yet.
    Unset,
    /// Under `pkgbase`, before any `pkgname`.
    Base,
    /// Under the `pkgname` at this index of `Srcinfo::packages`.
    Package(usize),
}

/// Parser state threaded through the entries of one input.
#[derive(Debug)]
struct Builder {
    header: Header,
    srcinfo: Srcinfo,
}

impl Builder {
    fn new() -> Self {
        Builder {
            header: Header::Unset,
            srcinfo: Srcinfo::default(),
        }
    }

    fn apply(mut self, key: &str, value: &str) -> Result<Self, ErrorKind> {
        let (name, arch) = split_arch(key);
        let field =
            Field::lookup(name, arch).ok_or_else(|| ErrorKind::UnknownKey(key.to_string()))?;
        tracing::trace!(%field, arch, value, header = ?self.header, "field");

        match (field, self.header) {
            (Field::Pkgbase, Header::Unset) => {
                self.srcinfo.base.pkgbase = value.to_string();
                self.header = Header::Base;
                tracing::trace!(pkgbase = value, "entered package base");
            }
            (Field::Pkgbase, _) => return Err(sequence(key, "after a pkgbase or pkgname")),
            (Field::Pkgname, Header::Unset) => return Err(sequence(key, "before pkgbase")),
            (Field::Pkgname, _) => {
                let names = &mut self.srcinfo.base.pkgnames;
                if names.iter().any(|n| n == value) {
                    return Err(ErrorKind::DuplicateName(value.to_string()));
                }
                names.push(value.to_string());
                self.srcinfo.packages.push(Default::default());
                self.header = Header::Package(names.len() - 1);
                tracing::trace!(pkgname = value, index = names.len() - 1, "entered package");
            }
            (_, Header::Unset) => return Err(sequence(key, "before pkgbase or pkgname")),
            (Field::Base(f), Header::Base) => f.apply(&mut self.srcinfo.base, arch, value),
            (Field::Base(_), Header::Package(_)) => {
                return Err(ErrorKind::Placement(key.to_string()))
            }
            (Field::Shared(f), Header::Base) => f.apply(&mut self.srcinfo.package, arch, value),
            (Field::Shared(f), Header::Package(i)) => {
                f.apply(&mut self.srcinfo.packages[i], arch, value)
            }
        }

        Ok(self)
    }
}

fn sequence(key: &str, position: &'static str) -> ErrorKind {
    ErrorKind::Sequence {
        key: key.to_string(),
        position,
    }
}

/// Parse a whole srcinfo, stopping at the first invalid line.
pub(crate) fn parse(input: &str) -> Result<Srcinfo, ParseError> {
    tracing::debug!(bytes = input.len(), "parsing srcinfo");

    let builder = scan(input).try_fold(Builder::new(), |builder, entry| {
        let Entry {
            line,
            text,
            key,
            value,
        } = entry?;
        builder
            .apply(key, value)
            .map_err(|kind| ParseError::new(line, text, kind))
    });

    match builder {
        Ok(builder) => {
            let srcinfo = builder.srcinfo;
            tracing::debug!(
                pkgbase = %srcinfo.base.pkgbase,
                packages = srcinfo.packages.len(),
                "parsed srcinfo"
            );
            Ok(srcinfo)
        }
        Err(err) => {
            tracing::debug!(line = err.line, kind = %err.kind, "rejected srcinfo");
            Err(err)
        }
    }
}
