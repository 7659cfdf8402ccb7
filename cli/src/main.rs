// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, builder::NonEmptyStringValueParser};
use patch_oz::{PatchConfig, Pattern, Source};
use tracing_subscriber::EnvFilter;

const ABOUT: &str = "Patch Oz: Change the hardcoded login URL of the Second Life viewer";
const COPYRIGHT: &str = "Copyright (C) 2012 Latif Khalifa";
const HOMEPAGE: &str = "https://bitbucket.org/lkalif/patch_oz";

#[derive(Parser)]
#[command(
    version,
    about = ABOUT,
    before_help = format!("{COPYRIGHT}\n{HOMEPAGE}"),
    after_help = "Example: change login URL to OSGrid\n  \
                  patch-oz -u \"http://login.osgrid.org/\" SecondLife.exe"
)]
struct Args {
    /// New login URL to use
    #[arg(short, long, default_value = patch_oz::DEFAULT_URL)]
    url: String,

    /// Suffix of the backup kept next to the viewer executable
    #[arg(
        long,
        default_value = PatchConfig::DEFAULT_BACKUP_SUFFIX,
        value_parser = NonEmptyStringValueParser::new(),
    )]
    backup_suffix: String,

    /// Log each step to stderr
    #[arg(short, long)]
    verbose: bool,

    /// The viewer executable to patch
    file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("{ABOUT}");
    println!("{COPYRIGHT}");
    println!("{HOMEPAGE}");
    println!();

    let pattern = Pattern::login_url(&args.url).with_context(|| {
        format!(
            "Cannot replace login URL with a string that is longer than original: {}",
            patch_oz::LOGIN_URL,
        )
    })?;
    let mut config = PatchConfig::new();
    config.backup_suffix(&args.backup_suffix);

    let target = &args.file;
    let pristine = patch_oz::read_pristine(target, &config).with_context(|| {
        format!("Failed to load original contents of '{}'", target.display())
    })?;
    match pristine.source() {
        Source::Backup => println!(
            "Reading '{}'. If you want to read '{}' delete {} file first.",
            pristine.backup().display(),
            target.display(),
            config.get_backup_suffix(),
        ),
        Source::Target => println!("Saved original file to '{}'", pristine.backup().display()),
    }

    let mut data = pristine.into_data();
    println!(
        "Read {} bytes. Searching for '{}'",
        data.len(),
        pattern.search().escape_ascii(),
    );
    println!("Replacing with '{}'", pattern.replacement().escape_ascii());

    let offsets = patch_oz::patch_in_place(&mut data, &pattern)
        .with_context(|| format!("Failed to patch '{}'", target.display()))?;
    for offset in offsets {
        println!("Match at {offset:#x}");
        println!("Patched.");
    }

    patch_oz::write_patched(target, &data)
        .with_context(|| format!("Failed to save changes to '{}'", target.display()))?;
    println!("Saved changes to '{}'.", target.display());

    Ok(())
}
