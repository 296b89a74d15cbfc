use srcinfo::{ArchString, Error, ErrorKind, Malformed, Package, Srcinfo};

const FOO: &str = "\
pkgbase = foo
\tpkgver = 1.0
\tpkgrel = 1

pkgname = foo

pkgname = foo-doc
\tpkgdesc = Documentation for foo
";

fn parse_kind(input: &str) -> ErrorKind {
    match Srcinfo::parse(input) {
        Err(Error::Parse(e)) => e.kind,
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn end_to_end_split_resolution() {
    let srcinfo = Srcinfo::parse(FOO).unwrap();

    let foo = srcinfo.split_package("foo").unwrap();
    assert_eq!(foo.pkgdesc, "");
    assert_eq!(foo, srcinfo.package);
    assert_eq!(srcinfo.base.pkgver, "1.0");

    let doc = srcinfo.split_package("foo-doc").unwrap();
    assert_eq!(doc.pkgdesc, "Documentation for foo");
    assert_eq!(
        doc,
        Package {
            pkgdesc: "Documentation for foo".to_string(),
            ..srcinfo.package.clone()
        }
    );

    assert_eq!(
        srcinfo.split_package("missing"),
        Err(Error::UnknownPackage("missing".to_string()))
    );
}

#[test]
fn reparse_is_equal() {
    assert_eq!(Srcinfo::parse(FOO).unwrap(), Srcinfo::parse(FOO).unwrap());
}

#[test]
fn overrides_do_not_leak_between_packages() {
    let input = "\
pkgbase = mesa
\tpkgver = 24.0.1
\tpkgrel = 2
\tpkgdesc = Open-source OpenGL drivers
\turl = https://www.mesa3d.org/
\tarch = x86_64
\tlicense = MIT
\tmakedepends = meson
\tdepends = libdrm
\toptions = !lto

pkgname = vulkan-intel
\tpkgdesc = Open-source Vulkan driver for Intel GPUs
\tdepends = wayland
\tdepends_x86_64 = libx11
\tprovides = vulkan-driver

pkgname = mesa
\tlicense = MIT
\tlicense = SGI-B-2.0
\tbackup = etc/drirc
";
    let s = Srcinfo::parse(input).unwrap();
    assert_eq!(s.base.makedepends, vec![ArchString::new("", "meson")]);

    let vk = s.split_package("vulkan-intel").unwrap();
    assert_eq!(
        vk.depends,
        vec![ArchString::new("", "wayland"), ArchString::new("x86_64", "libx11")]
    );
    assert_eq!(vk.license, vec!["MIT"]);
    assert_eq!(vk.options, vec!["!lto"]);
    assert!(vk.backup.is_empty());

    let mesa = s.split_package("mesa").unwrap();
    assert_eq!(mesa.pkgdesc, "Open-source OpenGL drivers");
    assert_eq!(mesa.depends, vec![ArchString::new("", "libdrm")]);
    assert_eq!(mesa.license, vec!["MIT", "SGI-B-2.0"]);
    assert_eq!(mesa.backup, vec!["etc/drirc"]);
    assert!(mesa.provides.is_empty());
}

#[test]
fn all_checksum_kinds() {
    let input = "\
pkgbase = sums
\tmd5sums = a
\tsha1sums = b
\tsha224sums = c
\tsha256sums = d
\tsha384sums = e
\tsha512sums_aarch64 = f
\tvalidpgpkeys = ABCDEF
\tnoextract = data.bin
\tcheckdepends = python-pytest
\tepoch = 2
pkgname = sums
";
    let s = Srcinfo::parse(input).unwrap();
    let b = &s.base;
    assert_eq!(b.md5sums[0].value, "a");
    assert_eq!(b.sha1sums[0].value, "b");
    assert_eq!(b.sha224sums[0].value, "c");
    assert_eq!(b.sha256sums[0].value, "d");
    assert_eq!(b.sha384sums[0].value, "e");
    assert_eq!(b.sha512sums[0], ArchString::new("aarch64", "f"));
    assert_eq!(b.validpgpkeys, vec!["ABCDEF"]);
    assert_eq!(b.noextract, vec!["data.bin"]);
    assert_eq!(b.checkdepends[0].value, "python-pytest");
    assert_eq!(b.epoch, "2");
}

#[test]
fn error_matrix() {
    assert_eq!(
        parse_kind("pkgbase = a\n  = value\n"),
        ErrorKind::MalformedLine(Malformed::EmptyKey)
    );
    assert_eq!(
        parse_kind("pkgbase = a\nkey =   \n"),
        ErrorKind::MalformedLine(Malformed::EmptyValue)
    );
    assert_eq!(
        parse_kind("pkgbase = a\njust text\n"),
        ErrorKind::MalformedLine(Malformed::MissingEquals)
    );
    assert!(matches!(
        parse_kind("pkgname = a\npkgbase = a\n"),
        ErrorKind::Sequence { .. }
    ));
    assert_eq!(
        parse_kind("pkgbase = a\npkgname = a\npkgrel = 2\n"),
        ErrorKind::Placement("pkgrel".to_string())
    );
    assert_eq!(
        parse_kind("pkgbase = a\npkgname = a\npkgname = a\n"),
        ErrorKind::DuplicateName("a".to_string())
    );
    assert_eq!(
        parse_kind("pkgbase = a\nb2sums = abc\n"),
        ErrorKind::UnknownKey("b2sums".to_string())
    );
}

#[test]
fn base_only_key_rejected_after_pkgname_even_if_set_before() {
    let input = "pkgbase = a\npkgver = 1\npkgname = a\npkgver = 2\n";
    assert_eq!(parse_kind(input), ErrorKind::Placement("pkgver".to_string()));
}

#[test]
fn error_message_names_line() {
    let err = Srcinfo::parse("pkgbase = a\n\npkgname = a\n\tmakedepends = gcc\n").unwrap_err();
    assert_eq!(
        err.to_string(),
        "line 4: key \"makedepends\" can not occur after pkgname: makedepends = gcc"
    );
}
