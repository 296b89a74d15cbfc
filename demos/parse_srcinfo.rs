use srcinfo::{ArchString, Srcinfo};
use tracing_subscriber::EnvFilter;

const EXAMPLE: &str = "\
pkgbase = gdc-bin
\tpkgver = 6.3.0+2.068.2
\tpkgrel = 1
\turl = https://gdcproject.org/
\tarch = i686
\tarch = x86_64
\tlicense = GPL
\tsource_i686 = http://gdcproject.org/downloads/binaries/6.3.0/i686-linux-gnu/gdc-6.3.0+2.068.2.tar.xz
\tmd5sums_i686 = cc8dcd66b189245e39296b1382d0dfcc
\tsource_x86_64 = http://gdcproject.org/downloads/binaries/6.3.0/x86_64-linux-gnu/gdc-6.3.0+2.068.2.tar.xz
\tmd5sums_x86_64 = 16d3067ebb3938dba46429a4d9f6178f

pkgname = gdc-bin
\tpkgdesc = Compiler for D programming language which uses gcc backend
\tdepends = gdc-gcc
\tdepends = perl
\tdepends = binutils
\tdepends = libgphobos
\tprovides = d-compiler=2.068.2
\tprovides = gdc=6.3.0+2.068.2

pkgname = gdc-gcc
\tpkgdesc = The GNU Compiler Collection - C and C++ frontends (from GDC, gdcproject.org)
\tprovides = gcc=6.3.0
\tprovides = gcc-libs=6.3.0

pkgname = libgphobos-lib32
\tpkgdesc = Standard library for D programming language, GDC port
\tprovides = d-runtime-lib32
\tprovides = d-stdlib-lib32
";

fn join(values: &[ArchString]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Usage: parse_srcinfo [PATH]
    let parsed = match std::env::args().nth(1) {
        Some(path) => Srcinfo::from_path(path),
        None => Srcinfo::parse(EXAMPLE),
    };
    let srcinfo = match parsed {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    let base = &srcinfo.base;

    println!("=== Package Base ===");
    println!("Name:         {}", base.pkgbase);
    if base.epoch.is_empty() {
        println!("Version:      {}-{}", base.pkgver, base.pkgrel);
    } else {
        println!("Version:      {}:{}-{}", base.epoch, base.pkgver, base.pkgrel);
    }
    println!("Packages:     {}", base.pkgnames.join(" "));
    println!("Source:       {}", join(&base.source));
    if !base.makedepends.is_empty() {
        println!("Make deps:    {}", join(&base.makedepends));
    }

    for (name, pkg) in srcinfo.split_packages() {
        println!("\n=== {name} ===");
        println!("Description:  {}", pkg.pkgdesc);
        println!("URL:          {}", pkg.url);
        println!("Arch:         {}", pkg.arch.join(" "));
        println!("License:      {}", pkg.license.join(" "));
        println!("Depends:      {}", join(&pkg.depends));
        println!("Provides:     {}", join(&pkg.provides));
    }
}
